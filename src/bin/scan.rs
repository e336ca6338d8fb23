// Multimatch Scan CLI Tool
// Command-line buffer scanner for literal, extended, and word patterns

use clap::Parser;
use multimatch::{Dialect, Trie};
use std::path::PathBuf;

/// Multimatch Scanner - Find keyword patterns in a file
#[derive(Parser, Debug)]
#[command(name = "mm-scan")]
#[command(about = "Scan a file for literal, extended, and word patterns", long_about = None)]
#[command(version)]
struct Args {
    /// File to scan
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Literal pattern (exact bytes, case matters); repeatable
    #[arg(short = 'l', long = "literal", value_name = "PATTERN")]
    literal: Vec<String>,

    /// Extended pattern with [..] character classes; repeatable
    #[arg(short = 'e', long = "extended", value_name = "PATTERN")]
    extended: Vec<String>,

    /// English word pattern (case-insensitive); repeatable
    #[arg(short = 'w', long = "word", value_name = "PATTERN")]
    word: Vec<String>,

    /// Maximum number of hits to print (0 = unlimited)
    #[arg(long, default_value = "0")]
    limit: usize,

    /// Print pattern table and trie statistics before scanning
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Payloads are assigned sequentially in flag order:
    // literals first, then extended, then words
    let mut patterns: Vec<(String, Dialect)> = Vec::new();
    patterns.extend(args.literal.iter().map(|p| (p.clone(), Dialect::Literal)));
    patterns.extend(args.extended.iter().map(|p| (p.clone(), Dialect::Extended)));
    patterns.extend(args.word.iter().map(|p| (p.clone(), Dialect::English)));

    if patterns.is_empty() {
        return Err("no patterns given: use --literal, --extended, or --word".into());
    }

    let mut trie = Trie::new();
    for (payload, (pattern, dialect)) in patterns.iter().enumerate() {
        trie.add_word(pattern.as_bytes(), payload as i64, *dialect)
            .map_err(|e| format!("pattern {:?}: {}", pattern, e))?;
    }

    if args.verbose {
        println!("Patterns:");
        for (payload, (pattern, dialect)) in patterns.iter().enumerate() {
            println!("  {:>4}  {:<8}  {:?}", payload, dialect.to_string(), pattern);
        }
        println!(
            "Trie: {} nodes, max depth {}\n",
            trie.node_count(),
            trie.max_depth()
        );
    }

    let buffer = std::fs::read(&args.file)?;

    let mut printed = 0;
    for hit in trie.scan(&buffer) {
        let (pattern, dialect) = &patterns[hit.payload as usize];
        let matched = &buffer[hit.offset..hit.offset + hit.length];
        println!(
            "{:>10}  {:<8}  {:<24}  {}",
            hit.offset,
            dialect.to_string(),
            format!("{:?}", pattern),
            String::from_utf8_lossy(matched)
        );

        printed += 1;
        if args.limit != 0 && printed >= args.limit {
            break;
        }
    }

    if args.verbose {
        println!("\n{} hit(s) in {} bytes", printed, buffer.len());
    }

    Ok(())
}
