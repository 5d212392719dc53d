//! Biverse CLI - Terminal front-end for the bilingual chapter engine

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "biverse")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one chapter in two languages side by side
    Show {
        /// Book abbreviation (e.g. 1-ne)
        book: String,

        /// Chapter number (1-based)
        chapter: u32,

        /// Main language code for the left column and the header
        #[arg(short, long)]
        main: Option<String>,

        /// Second language code for the right column
        #[arg(short, long)]
        second: Option<String>,

        /// Output layout (text, table, flex)
        #[arg(short, long, default_value = "text")]
        layout: String,
    },

    /// List the catalog with localized book names
    Books {
        /// Language for the display names
        #[arg(short, long)]
        lang: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "biverse_cli=debug,biverse_core=debug"
    } else {
        "biverse_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Show {
            book,
            chapter,
            main,
            second,
            layout,
        } => commands::show(&book, chapter, main, second, &layout).await,

        Commands::Books { lang } => commands::books(lang).await,
    }
}
