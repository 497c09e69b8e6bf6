use std::process;

use clap::Parser;
use colored::Colorize;
use kmernext::{cli::Args, config::Config, run};

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // Ignore the error if a global subscriber is already set
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let args = Args::parse();

    #[cfg(feature = "tracing")]
    init_tracing();

    let quiet = args.quiet;
    let config = Config::from(args);

    if !quiet {
        println!("{}: {}", "k-length".bold(), config.k.to_string().blue().bold());
        println!(
            "{}: {}",
            "data".bold(),
            config.input.to_string().underline().bold().blue()
        );
        println!(
            "{}: {}",
            "output".bold(),
            config.output.display().to_string().blue().bold()
        );
        println!();
    }

    match run::run(&config) {
        Ok(summary) => {
            if !quiet {
                println!(
                    "{} {} sequences, {} k-mers ({} distinct)",
                    "Tabulated".green().bold(),
                    summary.sequences,
                    summary.total_kmers,
                    summary.distinct_kmers
                );
            }
        }
        Err(e) => {
            eprintln!(
                "{}\n {}",
                "Application error:".blue().bold(),
                e.to_string().blue()
            );
            process::exit(1);
        }
    }
}
