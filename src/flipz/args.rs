use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "flipz")]
#[command(about = "Two-sided flashcard study tool for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Study the deck interactively (the default)
    #[command(alias = "s")]
    Study,

    /// List card fronts in deck order
    #[command(alias = "ls")]
    List,

    /// Add a card and save the deck
    #[command(alias = "a")]
    Add {
        /// Front text
        front: String,

        /// Back text
        back: String,
    },
}
