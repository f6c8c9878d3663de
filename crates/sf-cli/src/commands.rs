use crate::{
    catalog_commands::{CollectionCommands, ContactCommands, ProductCommands},
    token_commands::TokenCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Log in with username or email
    Login {
        /// Username or email
        #[arg(long)]
        identifier: String,

        /// Password (read from stdin when neither this nor SF_PASSWORD is set)
        #[arg(long, env = "SF_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Create an account and log in
    Register {
        #[arg(long)]
        username: String,

        #[arg(long)]
        email: String,

        /// Password (read from stdin when neither this nor SF_PASSWORD is set)
        #[arg(long, env = "SF_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Clear the stored session
    Logout,

    /// Show the stored session
    Whoami {
        /// Check the stored token with the backend and log out if it is rejected
        #[arg(long)]
        verify: bool,
    },

    /// Request a password reset email
    ForgotPassword {
        #[arg(long)]
        email: String,
    },

    /// Stored credential operations
    Token {
        #[command(subcommand)]
        action: TokenCommands,
    },

    /// Product operations
    Product {
        #[command(subcommand)]
        action: ProductCommands,
    },

    /// Collection operations
    Collection {
        #[command(subcommand)]
        action: CollectionCommands,
    },

    /// Contact form
    Contact {
        #[command(subcommand)]
        action: ContactCommands,
    },
}
