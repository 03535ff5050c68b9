use std::time::Instant;

use clap::Parser;
use colored::Colorize;
use passloom::error::Result;
use passloom::generator::{self, GenReport};
use passloom::model::GenOptions;
use passloom::wordlist::WordList;
use rand::rngs::StdRng;
use rand::SeedableRng;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let started = Instant::now();
    let cli = Cli::parse();

    let opts = GenOptions::new(cli.min_length, cli.obscurity)?
        .with_user_words(cli.user_words)
        .with_word_override(cli.word_override)
        .with_symbols(cli.symbols)
        .with_caps(cli.caps);

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let list = WordList::load(&cli.word_file)?;
    let filtered = list.obscure(opts.obscurity)?;
    let report = generator::generate(&mut rng, &filtered, &opts)?;

    print_report(&report);
    println!("{}", format!("Took {:?}", started.elapsed()).dimmed());
    Ok(())
}

fn print_report(report: &GenReport) {
    println!(
        "{}",
        format!("Password word list: {:?}", report.word_sequence).dimmed()
    );
    println!(
        "{}",
        format!("Password shuffled string: {}", report.shuffled).dimmed()
    );
    if let Some(indices) = &report.cap_indices {
        println!(
            "{}",
            format!("Capitalising character indices: {:?}", indices).dimmed()
        );
        if let Some(capitalized) = &report.capitalized {
            println!("{}", capitalized.dimmed());
        }
    }
    if let Some(indices) = &report.symbol_indices {
        println!(
            "{}",
            format!("Adding random symbols at indices: {:?}", indices).dimmed()
        );
    }
    println!("MASTER PASSWORD: {}", report.password.bold().green());
}
