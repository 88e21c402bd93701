//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use recipe_core::RecipeId;

/// Recipe box: run the recipe server or talk to one.
#[derive(Parser, Debug)]
#[command(name = "recipes", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "RECIPES_CONFIG")]
    pub config: Option<String>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP API server
    Serve(ServeArgs),
    /// Print every recipe on the server
    List {
        #[command(flatten)]
        remote: RemoteArgs,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Create a recipe
    Add {
        #[command(flatten)]
        remote: RemoteArgs,
        /// Recipe name
        #[arg(short, long)]
        title: String,
        /// Short description
        #[arg(short, long)]
        description: String,
    },
    /// Delete a recipe by id
    Delete {
        #[command(flatten)]
        remote: RemoteArgs,
        /// Id of the recipe to delete
        id: RecipeId,
    },
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Overrides for `recipes serve`.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Interface to bind
    #[arg(long, env = "RECIPES_HOST")]
    pub host: Option<String>,
    /// Port to bind
    #[arg(short, long, env = "RECIPES_PORT")]
    pub port: Option<u16>,
    /// Directory of front-end files to serve
    #[arg(long)]
    pub static_dir: Option<PathBuf>,
    /// Start with an empty collection
    #[arg(long)]
    pub no_seed: bool,
}

/// Where to find the server for client commands.
#[derive(Args, Debug, Default)]
pub struct RemoteArgs {
    /// Server root URL
    #[arg(short, long, env = "RECIPES_URL")]
    pub url: Option<String>,
}

/// `recipes config` actions.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Print the effective configuration
    Show,
    /// Write a default config file
    Init {
        /// Destination (defaults to the standard location)
        #[arg(long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::try_parse_from([
            "recipes", "serve", "--port", "8080", "--static-dir", "public", "--no-seed",
        ])
        .unwrap();
        match cli.command {
            Command::Serve(args) => {
                assert_eq!(args.port, Some(8080));
                assert_eq!(args.static_dir, Some(PathBuf::from("public")));
                assert!(args.no_seed);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from([
            "recipes",
            "add",
            "--title",
            "Soup",
            "--description",
            "Hot broth",
            "--url",
            "http://localhost:9000",
        ])
        .unwrap();
        match cli.command {
            Command::Add {
                remote,
                title,
                description,
            } => {
                assert_eq!(title, "Soup");
                assert_eq!(description, "Hot broth");
                assert_eq!(remote.url.as_deref(), Some("http://localhost:9000"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_delete_id() {
        let cli = Cli::try_parse_from(["recipes", "delete", "7"]).unwrap();
        match cli.command {
            Command::Delete { id, .. } => assert_eq!(id, RecipeId::new(7)),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_delete_rejects_non_integer() {
        assert!(Cli::try_parse_from(["recipes", "delete", "soup"]).is_err());
    }

    #[test]
    fn test_parse_config_init() {
        let cli =
            Cli::try_parse_from(["recipes", "--config", "x.toml", "config", "init", "--force"])
                .unwrap();
        assert_eq!(cli.config.as_deref(), Some("x.toml"));
        match cli.command {
            Command::Config { action } => assert_eq!(
                action,
                ConfigAction::Init {
                    file: None,
                    force: true
                }
            ),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
