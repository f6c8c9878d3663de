//! sf - Storefront CLI
//!
//! Command-line front end for the storefront session client. Session state
//! is kept in `.sf/session.json` (or `$SF_CONFIG_DIR`) between invocations.
//!
//! # Examples
//!
//! ```bash
//! # Log in and check the stored session
//! sf login --identifier ada@example.com --password '...'
//! sf whoami --pretty
//!
//! # Check the stored credential with the backend
//! sf token test
//!
//! # Browse the catalog
//! sf product get 3 --pretty
//! ```

mod catalog_commands;
mod cli;
mod commands;
mod error;
mod logger;
mod token_commands;


use crate::{
    catalog_commands::{CollectionCommands, ContactCommands, ProductCommands},
    cli::Cli,
    commands::Commands,
    error::{CliError, Result as CliResult},
    token_commands::TokenCommands,
};

use std::io::BufRead;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::debug;
use serde_json::{Value, json};
use sf_client::{
    ContactMessage, FileSessionStore, MemorySessionStore, ProfileOverrides, SessionClient,
    SessionStore,
};
use sf_config::{Config, StoreKind};

#[tokio::main]
async fn main() -> ExitCode {
    // Optional .env with SF_* settings; a missing file is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let mut config = Config::load()?;
    if let Some(url) = cli.base_url {
        config.api.base_url = url;
    }

    logger::initialize(
        config.logging.level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    )?;

    config.validate()?;
    config.log_summary();

    let store: Arc<dyn SessionStore> = match config.session.store {
        StoreKind::File => Arc::new(FileSessionStore::new(config.session_path()?)),
        StoreKind::Memory => Arc::new(MemorySessionStore::new()),
    };
    let client = SessionClient::new(&config.api, store);

    let value = dispatch(&client, cli.command).await?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{}", output);

    Ok(())
}

async fn dispatch(client: &SessionClient, command: Commands) -> CliResult<Value> {
    debug!("Backend: {}", client.base_url());

    let value = match command {
        // Session commands
        Commands::Login {
            identifier,
            password,
        } => {
            let password = resolve_password(password, &mut std::io::stdin().lock())?;
            let auth = client.login(&identifier, &password).await?;
            json!({ "logged_in": true, "user": auth.user })
        }
        Commands::Register {
            username,
            email,
            password,
        } => {
            let password = resolve_password(password, &mut std::io::stdin().lock())?;
            let auth = client.register(&username, &email, &password).await?;
            json!({ "logged_in": true, "user": auth.user })
        }
        Commands::Logout => {
            client.logout()?;
            json!({ "logged_in": false })
        }
        Commands::Whoami { verify: false } => json!({
            "logged_in": client.is_logged_in(),
            "user": client.get_current_user(),
        }),
        Commands::Whoami { verify: true } => {
            let user = client.verified_user().await?;
            json!({ "logged_in": client.is_logged_in(), "user": user })
        }
        Commands::ForgotPassword { email } => client.forgot_password(&email).await?,

        // Token commands
        Commands::Token { action } => match action {
            TokenCommands::Set {
                token,
                username,
                email,
            } => {
                let overrides = ProfileOverrides {
                    username,
                    email,
                    ..Default::default()
                };
                client.set_token(token.as_deref(), overrides)?;
                json!({ "logged_in": true, "user": client.get_current_user() })
            }
            TokenCommands::Test { token } => {
                json!({ "valid": client.test_token(token.as_deref()).await })
            }
            TokenCommands::Show => json!({ "logged_in": client.is_logged_in() }),
        },

        // Catalog commands
        Commands::Product { action } => match action {
            ProductCommands::Get { id } => serde_json::to_value(client.product(&id).await?)?,
        },
        Commands::Collection { action } => match action {
            CollectionCommands::List => serde_json::to_value(client.collection().await?)?,
        },
        Commands::Contact { action } => match action {
            ContactCommands::Send {
                first_name,
                last_name,
                email,
                message,
            } => {
                let message = ContactMessage {
                    first_name,
                    last_name,
                    email,
                    message,
                };
                client.send_contact(&message).await?
            }
        },
    };

    Ok(value)
}

/// Password from `--password`/`SF_PASSWORD`, else the first line of `input`.
fn resolve_password(password: Option<String>, input: &mut impl BufRead) -> CliResult<String> {
    if let Some(password) = password {
        return Ok(password);
    }

    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| CliError::input(format!("Failed to read password from stdin: {e}")))?;

    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        return Err(CliError::input(
            "password required: pass --password, set SF_PASSWORD or pipe it on stdin",
        ));
    }
    Ok(password)
}
