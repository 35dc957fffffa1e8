//! [`Args`] definitions.

use clap::{Parser, Subcommand};

/// Event contract generator of the pizza catering company.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Path to a JSON dump replacing the persisted contracts on startup.
    #[arg(long)]
    pub import: Option<String>,

    /// Action to perform.
    #[command(subcommand)]
    pub action: Action,
}

/// Action performed by the application.
#[derive(Debug, Subcommand)]
pub enum Action {
    /// Renders a contract from an event form without persisting it.
    Preview {
        /// Path to the event form (TOML).
        input: String,

        /// Path to write an HTML print page to, instead of plain text on
        /// stdout.
        #[arg(long)]
        html: Option<String>,
    },

    /// Derives a contract from an event form and persists it.
    Save {
        /// Path to the event form (TOML).
        input: String,
    },

    /// Lists all persisted contracts in creation order.
    List,

    /// Renders a persisted contract.
    Show {
        /// ID of the contract.
        id: String,

        /// Path to write an HTML print page to, instead of plain text on
        /// stdout.
        #[arg(long)]
        html: Option<String>,
    },

    /// Renders the down payment receipt of a persisted contract.
    Receipt {
        /// ID of the contract.
        id: String,

        /// Path to write an HTML print page to, instead of plain text on
        /// stdout.
        #[arg(long)]
        html: Option<String>,
    },
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}
