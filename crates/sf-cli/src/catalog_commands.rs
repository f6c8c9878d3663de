use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProductCommands {
    /// Get a product by ID
    Get {
        /// Product ID
        id: String,
    },
}

#[derive(Subcommand)]
pub enum CollectionCommands {
    /// List collection items
    List,
}

#[derive(Subcommand)]
pub enum ContactCommands {
    /// Send a contact message
    Send {
        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        message: String,
    },
}
