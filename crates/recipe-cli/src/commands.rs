//! Subcommand implementations.

use recipe_api::{AppState, Server, ServerConfig};
use recipe_client::{ClientConfig, LOAD_ERROR_MESSAGE, RecipeClient, RecipeEvent, RecipeMirror};
use recipe_core::{NewRecipe, Recipe, RecipeId};

use crate::cli::{Cli, Command, RemoteArgs, ServeArgs};
use crate::config::RecipeConfig;
use crate::{Error, Result, config_handlers};

/// Run the parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Command::Config { action } => config_handlers::handle_config_command(config_path, action),
        Command::Serve(args) => {
            let mut config = RecipeConfig::load(config_path)?.server;
            apply_serve_args(&mut config, args);
            cmd_serve(config).await
        }
        Command::List { remote, json } => {
            let config = RecipeConfig::load(config_path)?;
            let recipes = cmd_list(&client_config(&config, &remote)).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&recipes)?);
            } else {
                print!("{}", format_recipes(&recipes));
            }
            Ok(())
        }
        Command::Add {
            remote,
            title,
            description,
        } => {
            let config = RecipeConfig::load(config_path)?;
            let recipe = cmd_add(
                &client_config(&config, &remote),
                NewRecipe::new(title, description),
            )
            .await?;
            println!("Created recipe {}", recipe.id);
            Ok(())
        }
        Command::Delete { remote, id } => {
            let config = RecipeConfig::load(config_path)?;
            cmd_delete(&client_config(&config, &remote), id).await?;
            println!("Deleted recipe {id}");
            Ok(())
        }
    }
}

/// Layer `recipes serve` flags over the file/env configuration.
pub fn apply_serve_args(config: &mut ServerConfig, args: ServeArgs) {
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(dir) = args.static_dir {
        config.static_dir = Some(dir);
    }
    if args.no_seed {
        config.seed = false;
    }
}

/// Client settings with the `--url` override applied.
pub fn client_config(config: &RecipeConfig, remote: &RemoteArgs) -> ClientConfig {
    let mut client = config.client.clone();
    if let Some(url) = &remote.url {
        client.base_url = url.clone();
    }
    client
}

/// Run the server until a shutdown signal.
pub async fn cmd_serve(config: ServerConfig) -> Result<()> {
    let state = AppState::from_config(&config);
    tracing::info!(recipes = state.store.len(), "Store initialized");

    let server = Server::bind(&config, state).await?;
    server.run().await?;
    Ok(())
}

/// Fetch the server's collection through a freshly booted mirror.
pub async fn cmd_list(config: &ClientConfig) -> Result<Vec<Recipe>> {
    let mut mirror = RecipeMirror::new(RecipeClient::new(config)?);
    if let Err(source) = mirror.boot().await {
        let message = mirror.error().unwrap_or(LOAD_ERROR_MESSAGE).to_string();
        return Err(Error::Load { message, source });
    }
    Ok(mirror.recipes().to_vec())
}

/// Create a recipe and return the stored record.
pub async fn cmd_add(config: &ClientConfig, new: NewRecipe) -> Result<Recipe> {
    let mut mirror = RecipeMirror::new(RecipeClient::new(config)?);
    Ok(mirror.add(new).await?)
}

/// Delete a recipe. Unknown ids succeed.
pub async fn cmd_delete(config: &ClientConfig, id: RecipeId) -> Result<()> {
    let mut mirror = RecipeMirror::new(RecipeClient::new(config)?);
    mirror.dispatch(RecipeEvent::Delete(id)).await?;
    Ok(())
}

/// One line per recipe: id, title, description, tab-separated.
pub fn format_recipes(recipes: &[Recipe]) -> String {
    recipes
        .iter()
        .map(|r| format!("{}\t{}\t{}\n", r.id, r.title, r.description))
        .collect()
}
