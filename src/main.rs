use clap::{Parser, Subcommand};
use std::path::PathBuf;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score an answer file and print the vitality report
    Report {
        /// Path to the answer file (JSON, or YAML by extension)
        file: PathBuf,

        /// Print the raw results as JSON instead of the formatted report
        #[arg(long)]
        json: bool,
    },
    /// List the question catalog (ids, prompts, accepted answers)
    Questions,
}

#[derive(Parser, Debug)]
#[command(name = "vitacheck")]
#[command(about = "Wellness quiz scoring CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    let use_colors = vitacheck::output::should_use_colors();

    match cli.command {
        Commands::Report { file, json } => {
            let answers = match vitacheck::answers::load_answers(&file) {
                Ok(a) => a,
                Err(e) => {
                    eprintln!("Answer file error: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            if cli.verbose {
                eprintln!("Loaded {} answers from {}", answers.len(), file.display());
            }

            // Advisory only: mismatched answers score their default bucket.
            let warnings = vitacheck::catalog::validate_answers(&answers);
            if !warnings.is_empty() {
                eprintln!("Answer warnings:");
                for warning in &warnings {
                    eprintln!("  - {}", warning);
                }
            }

            let results = vitacheck::compute_results(&answers);

            if cli.verbose {
                eprintln!(
                    "Overall {} ({})",
                    results.overall_score, results.vitality
                );
            }

            if json {
                match serde_json::to_string_pretty(&results) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        eprintln!("Failed to serialize results: {}", e);
                        std::process::exit(EXIT_INPUT);
                    }
                }
            } else {
                println!("{}", vitacheck::output::format_report(&results, use_colors));
            }
        }
        Commands::Questions => {
            println!("{}", vitacheck::output::format_questions(use_colors));
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
