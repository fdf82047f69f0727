//! CLI entry point for folio-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio-rs")]
#[command(author = "Saman Shaiza")]
#[command(version)]
#[command(about = "A static site generator for a personal portfolio and blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new blog post
    New {
        /// Title of the new post
        title: String,

        /// Filename for the new post (defaults to a slug of the title)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Generate static files
    #[command(alias = "g")]
    Generate {
        /// Watch for file changes and regenerate
        #[arg(short, long)]
        watch: bool,
    },

    /// Start a local preview server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,

        /// Serve without watching for changes
        #[arg(long)]
        r#static: bool,
    },

    /// Clean the public folder
    Clean,

    /// List site content
    List {
        /// Type of content to list (post, page, review, project, tag)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio_rs=debug,info"
    } else {
        "folio_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            folio_rs::commands::init::init_site(&target_dir)?;
            println!("Initialized empty site in {:?}", target_dir);
        }

        Commands::New { title, path } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            tracing::info!("Creating new post: {}", title);
            folio_rs::commands::new::create_post(&folio, &title, path.as_deref())?;
        }

        Commands::Generate { watch } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            tracing::info!("Generating static files...");

            folio_rs::commands::generate::run(&folio)?;
            println!("Generated successfully!");

            if watch {
                tracing::info!("Watching for file changes...");
                folio_rs::commands::generate::watch(&folio).await?;
            }
        }

        Commands::Server {
            port,
            ip,
            open,
            r#static,
        } => {
            let folio = folio_rs::Folio::new(&base_dir)?;

            // Generate first
            tracing::info!("Generating static files...");
            folio.generate()?;

            tracing::info!("Starting server at http://{}:{}", ip, port);
            folio_rs::server::start(&folio, &ip, port, !r#static, open).await?;
        }

        Commands::Clean => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            folio.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            folio_rs::commands::list::run(&folio, &r#type)?;
        }

        Commands::Version => {
            println!("folio-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
