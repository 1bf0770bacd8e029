//! Interactive REPL (Read-Eval-Print Loop) mode.

use crate::cli::{Command, ConfigAction, ConfigArgs, ConvertArgs, ExtractArgs, StatsArgs, VerifyArgs};
use crate::commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Run the interactive REPL.
pub async fn run_repl(config: &mut Config, formatter: &Formatter) -> Result<()> {
    println!(
        "{}",
        formatter.info("Gleaner REPL - Type 'help' for commands, 'exit' to quit")
    );
    println!();

    let mut editor = DefaultEditor::new().map_err(|e| {
        CliError::Io(std::io::Error::other(format!(
            "Failed to initialize editor: {}",
            e
        )))
    })?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        match editor.readline("gleaner> ") {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(ReplCommand::Command(cmd)) => {
                        if let Err(e) = execute_repl_command(cmd, config, formatter).await {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
enum ReplCommand {
    Exit,
    Help,
    Command(Command),
}

/// Parse a REPL command line.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    if parts.is_empty() {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    }

    match parts[0] {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "extract" => parse_extract_command(&parts[1..]),
        "verify" => parse_verify_command(&parts[1..]),
        "stats" => parse_stats_command(&parts[1..]),
        "convert" => parse_convert_command(&parts[1..]),
        "config" => parse_config_command(&parts[1..]),
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            parts[0]
        ))),
    }
}

/// Execute a REPL command.
async fn execute_repl_command(
    cmd: Command,
    config: &mut Config,
    formatter: &Formatter,
) -> Result<()> {
    match cmd {
        Command::Extract(args) => commands::execute_extract(args, config, formatter).await,
        Command::Verify(args) => commands::execute_verify(args, config, formatter).await,
        Command::Stats(args) => commands::execute_stats(args, formatter).await,
        Command::Convert(args) => commands::execute_convert(args, formatter).await,
        Command::Config(args) => commands::execute_config(args, config, formatter).await,
        Command::Repl => Ok(()),
    }
}

// Simple command parsers for REPL (minimal argument parsing)

fn parse_extract_command(args: &[&str]) -> Result<ReplCommand> {
    if args.is_empty() {
        return Err(CliError::InvalidInput(
            "Usage: extract <url> [url2] ... [--verify]".to_string(),
        ));
    }

    let verify = args.contains(&"--verify");
    let urls: Vec<String> = args
        .iter()
        .filter(|a| !a.starts_with("--"))
        .map(|a| a.to_string())
        .collect();

    Ok(ReplCommand::Command(Command::Extract(ExtractArgs {
        urls,
        file: None,
        dataset: PathBuf::from("dataset.json"),
        verify,
        max_attempts: None,
        no_backup: false,
    })))
}

fn parse_verify_command(args: &[&str]) -> Result<ReplCommand> {
    let dataset = args
        .first()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("dataset.json"));

    Ok(ReplCommand::Command(Command::Verify(VerifyArgs {
        dataset,
        output: None,
        no_backup: false,
    })))
}

fn parse_stats_command(args: &[&str]) -> Result<ReplCommand> {
    let dataset = args
        .first()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("dataset.json"));

    Ok(ReplCommand::Command(Command::Stats(StatsArgs { dataset })))
}

fn parse_convert_command(args: &[&str]) -> Result<ReplCommand> {
    let dataset = args
        .first()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("dataset.json"));
    let output = args
        .get(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("dataset_sharegpt.json"));

    Ok(ReplCommand::Command(Command::Convert(ConvertArgs {
        dataset,
        output,
    })))
}

fn parse_config_command(args: &[&str]) -> Result<ReplCommand> {
    let action = match args.first() {
        None | Some(&"show") => ConfigAction::Show,
        Some(&"path") => ConfigAction::Path,
        Some(&"set") => {
            if args.len() < 3 {
                return Err(CliError::InvalidInput(
                    "Usage: config set <key> <value>".to_string(),
                ));
            }
            ConfigAction::Set {
                key: args[1].to_string(),
                value: args[2..].join(" "),
            }
        }
        Some(other) => {
            return Err(CliError::InvalidInput(format!(
                "Unknown config action: {}",
                other
            )))
        }
    };

    Ok(ReplCommand::Command(Command::Config(ConfigArgs { action })))
}

fn get_history_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    let gleaner_dir = home.join(".gleaner");
    std::fs::create_dir_all(&gleaner_dir)?;
    Ok(gleaner_dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  extract <url> [url2] ... [--verify] - Extract key points from articles");
    println!("  verify [dataset]                    - Re-verify a dataset's key points");
    println!("  stats [dataset]                     - Show dataset statistics");
    println!("  convert [dataset] [output]          - Convert to ShareGPT format");
    println!("  config [show|path|set <k> <v>]      - Manage configuration");
    println!("  help, ?                             - Show this help");
    println!("  exit, quit, q                       - Exit REPL");
    println!();
}
