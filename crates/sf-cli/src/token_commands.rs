use clap::Subcommand;

#[derive(Subcommand)]
pub enum TokenCommands {
    /// Store a credential by hand with a placeholder profile
    Set {
        /// Credential to store (default: the configured fallback credential)
        #[arg(long)]
        token: Option<String>,

        /// Override the placeholder username
        #[arg(long)]
        username: Option<String>,

        /// Override the placeholder email
        #[arg(long)]
        email: Option<String>,
    },

    /// Check a credential against the backend
    Test {
        /// Credential to test (default: stored, then fallback)
        #[arg(long)]
        token: Option<String>,
    },

    /// Print whether a credential is stored (no backend call)
    Show,
}
