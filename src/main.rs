//! CLI entry point for site-content

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "site-content")]
#[command(version = "0.1.0")]
#[command(about = "Validate site content and build its page data, sitemap and robots policy", long_about = None)]
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
    /// Validate every document of every content type
    Check,

    /// List the slugs of a content type
    #[command(alias = "ls")]
    List {
        /// Content type (blog, case-studies, ...)
        r#type: String,
    },

    /// Print the page data of one document as JSON
    Show {
        /// Content type (blog, case-studies, ...)
        r#type: String,

        /// Document slug
        slug: String,
    },

    /// Print the sitemap XML
    Sitemap,

    /// Print the robots policy
    Robots,

    /// Write page data, sitemap and robots policy to the public folder
    #[command(alias = "g")]
    Generate,

    /// Clean the public folder
    Clean,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "site_content=debug,info"
    } else {
        "site_content=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let site = site_content::Site::new(&base_dir)?;

    match cli.command {
        Commands::Check => {
            let report = site_content::commands::check::run(&site)?;
            if !report.is_clean() {
                anyhow::bail!("{} document(s) rejected", report.rejected.len());
            }
            println!("{} documents valid", report.loaded);
        }

        Commands::List { r#type } => {
            site_content::commands::list::run(&site, &r#type)?;
        }

        Commands::Show { r#type, slug } => {
            site_content::commands::show::run(&site, &r#type, &slug)?;
        }

        Commands::Sitemap => {
            site_content::commands::generate::print_sitemap(&site)?;
        }

        Commands::Robots => {
            site_content::commands::generate::print_robots(&site);
        }

        Commands::Generate => {
            tracing::info!("Generating site data...");
            site_content::commands::generate::run(&site)?;
            println!("Generated successfully!");
        }

        Commands::Clean => {
            tracing::info!("Cleaning public folder...");
            site_content::commands::clean::run(&site)?;
            println!("Cleaned successfully!");
        }
    }

    Ok(())
}
