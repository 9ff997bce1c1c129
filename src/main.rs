use std::path::PathBuf;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use server::{config::StorageConfig, serve, setup};

#[derive(Parser)]
#[command(version, about, long_about = None, args_conflicts_with_subcommands = true)]
struct Cli {
  #[command(subcommand)]
  command: Option<Commands>,

  /// Used when no subcommand is given
  #[command(flatten)]
  serve: ServeArgs,
}

#[derive(Subcommand)]
enum Commands {
  /// Start the tracks API server (the default)
  Serve(ServeArgs),
  /// Create the tracks table if it does not exist yet, then exit
  Setup {
    /// Path to the database file, overriding DB_STORAGE_DEV / DB_STORAGE_PROD
    #[arg(short, long, value_name = "FILE")]
    database: Option<PathBuf>,
  },
}

#[derive(Args, Debug, PartialEq)]
struct ServeArgs {
  /// The port you want the server to bind to.
  #[arg(short, long, value_name = "PORT", env = "PORT", default_value_t = 3000)]
  port: u16,

  /// Path to the database file, overriding DB_STORAGE_DEV / DB_STORAGE_PROD
  #[arg(short, long, value_name = "FILE")]
  database: Option<PathBuf>,
}

impl Cli {
  fn into_command(self) -> Commands {
    self.command.unwrap_or(Commands::Serve(self.serve))
  }
}

#[tokio::main]
async fn main() -> Result<()> {
  dotenvy::dotenv().ok();

  match Cli::parse().into_command() {
    Commands::Serve(ServeArgs { port, database }) => {
      let storage = StorageConfig::from_env().with_override(database);
      serve(port, &storage.path).await?;
    },
    Commands::Setup { database } => {
      let storage = StorageConfig::from_env().with_override(database);
      setup(&storage.path)?;
    },
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn no_subcommand_starts_server() {
    let cli = Cli::try_parse_from(["tracklib", "--database", "/tmp/cli.db"]).unwrap();
    match cli.into_command() {
      Commands::Serve(args) => assert_eq!(args.database, Some(PathBuf::from("/tmp/cli.db"))),
      Commands::Setup { .. } => panic!("expected serve"),
    }

    let cli = Cli::try_parse_from(["tracklib"]).unwrap();
    assert!(matches!(cli.into_command(), Commands::Serve(_)));
  }

  #[test]
  fn serve_subcommand_takes_port() {
    let cli = Cli::try_parse_from(["tracklib", "serve", "--port", "4000"]).unwrap();
    match cli.into_command() {
      Commands::Serve(args) => assert_eq!(args, ServeArgs { port: 4000, database: None }),
      Commands::Setup { .. } => panic!("expected serve"),
    }
  }

  #[test]
  fn setup_subcommand_takes_database() {
    let cli = Cli::try_parse_from(["tracklib", "setup", "-d", "/tmp/setup.db"]).unwrap();
    assert!(matches!(
      cli.into_command(),
      Commands::Setup { database: Some(path) } if path == PathBuf::from("/tmp/setup.db")
    ));
  }
}
