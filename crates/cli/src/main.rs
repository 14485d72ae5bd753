//! HookCI CLI
//!
//! Admin tool for the installation and tool store.

use anyhow::{bail, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use hookci_database::{Db, SqlDb};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "hookci")]
#[command(about = "HookCI - GitHub App installation and tool store")]
#[command(version)]
struct Cli {
    /// Database file path
    #[arg(short, long, default_value = "hookci.db")]
    database: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the database is reachable
    Ping,

    /// Manage GitHub App installations
    #[command(subcommand)]
    Install(InstallCommand),

    /// List configured tools
    Tools,
}

#[derive(Subcommand)]
enum InstallCommand {
    /// Record an installation (ignored if already recorded)
    Add {
        installation_id: i64,

        /// GitHub account the app was installed on
        #[arg(long)]
        account: i64,

        /// GitHub user who installed the app
        #[arg(long)]
        sender: i64,
    },

    /// Remove an installation
    Remove { installation_id: i64 },

    /// Show an installation
    Show { installation_id: i64 },

    /// Mark an installation as enabled
    Enable { installation_id: i64 },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .init();

    // Connect to database
    let db = SqlDb::connect(&cli.database).await?;

    match cli.command {
        Commands::Ping => {
            db.ping().await?;
            println!("ok");
        }
        Commands::Install(command) => {
            install(&db, command, cli.json).await?;
        }
        Commands::Tools => {
            tools(&db, cli.json).await?;
        }
    }

    Ok(())
}

async fn install(db: &SqlDb, command: InstallCommand, json: bool) -> Result<()> {
    match command {
        InstallCommand::Add {
            installation_id,
            account,
            sender,
        } => {
            db.add_installation(installation_id, account, sender).await?;
            info!(installation_id, "Installation recorded");
        }
        InstallCommand::Remove { installation_id } => {
            db.remove_installation(installation_id).await?;
            info!(installation_id, "Installation removed");
        }
        InstallCommand::Show { installation_id } => {
            let installation = db.get_installation(installation_id).await?;
            if json {
                return print_json(&installation);
            }

            match installation {
                Some(installation) => {
                    println!("Installation: {}", installation.installation_id);
                    println!("Account:      {}", installation.account_id);
                    println!("Sender:       {}", installation.sender_id);
                    match installation.enabled_at {
                        Some(at) => println!("Enabled:      {}", at),
                        None => println!("Enabled:      no"),
                    }
                }
                None => println!("Installation {} not found", installation_id),
            }
        }
        InstallCommand::Enable { installation_id } => {
            if !db.enable_installation(installation_id, Utc::now()).await? {
                bail!("Installation {} not found", installation_id);
            }
            info!(installation_id, "Installation enabled");
        }
    }

    Ok(())
}

async fn tools(db: &SqlDb, json: bool) -> Result<()> {
    let tools = db.list_tools().await?;
    if json {
        return print_json(&tools);
    }

    println!("{:<15} {:<20} {:<25} {}", "NAME", "PATH", "ARGS", "PATTERN");
    println!("{}", "-".repeat(75));

    for tool in &tools {
        println!(
            "{:<15} {:<20} {:<25} {}",
            tool.name, tool.path, tool.args, tool.pattern
        );
    }

    if tools.is_empty() {
        println!("No tools configured.");
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_install_add() {
        let cli = Cli::try_parse_from([
            "hookci", "install", "add", "42", "--account", "7", "--sender", "3",
        ])
        .unwrap();

        assert_eq!(cli.database, PathBuf::from("hookci.db"));
        assert!(matches!(
            cli.command,
            Commands::Install(InstallCommand::Add {
                installation_id: 42,
                account: 7,
                sender: 3,
            })
        ));
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from(["hookci", "-d", "/tmp/ci.db", "-v", "--json", "tools"])
            .unwrap();

        assert_eq!(cli.database, PathBuf::from("/tmp/ci.db"));
        assert!(cli.verbose);
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Tools));
    }

    #[test]
    fn test_install_add_requires_account_and_sender() {
        assert!(Cli::try_parse_from(["hookci", "install", "add", "42"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
