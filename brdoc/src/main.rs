// brdoc command line entry point
use brdoc::cli::{Cli, Commands};
use brdoc::config::Settings;
use brdoc::error::BrDocError;
use brdoc::services::DocumentService;
use clap::Parser;
use shared::models::FieldState;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays clean for --json consumers.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, BrDocError> {
    let settings = match &cli.config {
        Some(path) => Settings::load_from_file(path)?,
        None => Settings::default(),
    };
    let service = DocumentService::new(settings);
    info!(command = ?cli.command, "Starting brdoc");

    match cli.command {
        Commands::Validate { kind, values } => {
            let reports: Vec<_> = values.iter().map(|v| service.report(kind, v)).collect();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                for report in &reports {
                    println!("{} {}", report.formatted, report.state);
                }
            }
            let all_valid = reports.iter().all(|r| r.state == FieldState::Valid);
            Ok(if all_valid { ExitCode::SUCCESS } else { ExitCode::from(1) })
        }
        Commands::Format { kind, value } => {
            let formatted = service.format(kind, &value);
            if cli.json {
                let out = serde_json::json!({ "kind": kind, "input": value, "formatted": formatted });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{}", formatted);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Phone { value, no_area_code } => {
            let formatted = service.format_phone(&value, !no_area_code);
            print_optional(cli.json, &value, formatted, "not a phone number")
        }
        Commands::Cep { value } => {
            let formatted = service.format_cep(&value);
            print_optional(cli.json, &value, formatted, "not a CEP")
        }
        Commands::Check { file } => {
            let summary = service.check_file(&file)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                for report in &summary.reports {
                    println!("{}\t{}\t{}", report.kind, report.formatted, report.state);
                }
                println!(
                    "total: {}, valid: {}, invalid: {}, incomplete: {}",
                    summary.total, summary.valid, summary.invalid, summary.incomplete
                );
            }
            Ok(if summary.valid == summary.total { ExitCode::SUCCESS } else { ExitCode::from(1) })
        }
    }
}

fn print_optional(json: bool, input: &str, formatted: Option<String>, reason: &str) -> Result<ExitCode, BrDocError> {
    if json {
        let out = serde_json::json!({ "input": input, "formatted": formatted });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        match &formatted {
            Some(value) => println!("{}", value),
            None => eprintln!("{}: {}", input, reason),
        }
    }
    Ok(if formatted.is_some() { ExitCode::SUCCESS } else { ExitCode::from(1) })
}
