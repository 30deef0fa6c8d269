//! Protokol - transcript extraction dispatcher for the parliamentary
//! monitoring application.

use clap::error::ErrorKind;
use clap::Parser;
use protokol_cli::{output, run, Cli, CliError};

#[tokio::main]
async fn main() {
    // Diagnostics go to stderr; stdout carries exactly one JSON document
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return;
        }
        Err(_) => {
            println!("{}", output::error_line(&CliError::Usage.to_string()));
            std::process::exit(1);
        }
    };

    match run(cli).await {
        Ok(json) => println!("{}", json),
        Err(e) => {
            println!("{}", output::error_line(&e.to_string()));
            std::process::exit(1);
        }
    }
}
