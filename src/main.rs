//! sitemapgen is a CLI tool that writes sitemaps, sitemap indexes and robots.txt files.
//!
//! The tool has two main commands:
//! 1. `generate` - Splits a list of URLs into sitemaps and writes a sitemap index for them
//! 2. `robots` - Renders a robots.txt file

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Builder;
use log::{LevelFilter, info};
use url::Url;

use sitemapgen::{
    GenerateOptions, Robots, RobotsEntry, SiteMapFormat, SiteMapOptions,
    constants::{DEFAULT_BASE_URL, DEFAULT_ENTRIES_LIMIT, DEFAULT_INDEX_NAME, DEFAULT_SIZE_LIMIT},
    generate, render_robots_txt,
};

/// A CLI tool to write sitemaps, sitemap indexes and robots.txt
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The command to execute (generate or robots)
    #[command(subcommand)]
    command: Command,

    #[arg(long, short, action = clap::ArgAction::Count, help = "Output v(v...)erbosity: error (0), warn (1), info (2), debug (3), trace (4)", global = true, default_value_t = 2)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Write a sitemap index and its sitemaps from a file with one URL or JSON entry per line
    Generate {
        /// Path to the file with entries
        input: PathBuf,
        /// Directory to write the sitemap index and sitemaps to
        output_dir: PathBuf,
        /// Every URL must start with this prefix
        #[arg(long, short, default_value = DEFAULT_BASE_URL)]
        base_url: String,
        /// Sitemap format: "xml" (default) or "text"
        #[arg(long, short, default_value = "xml")]
        format: SiteMapFormat,
        /// Maximum number of entries per sitemap
        #[arg(long, default_value_t = DEFAULT_ENTRIES_LIMIT)]
        entries_limit: usize,
        /// Maximum size of a sitemap in bytes
        #[arg(long, default_value_t = DEFAULT_SIZE_LIMIT)]
        size_limit: usize,
        /// File name of the sitemap index
        #[arg(long, default_value = DEFAULT_INDEX_NAME)]
        index_name: String,
        /// Public URL of the output directory, used for sitemap locations in the index
        #[arg(long, short)]
        public_url: Option<String>,
    },
    /// Write a robots.txt file with a single user agent group
    Robots {
        /// Path to output file
        output_file: PathBuf,
        /// Crawler the rules apply to
        #[arg(long, short, default_value = "*")]
        user_agent: String,
        /// Paths crawlers may access (repeatable)
        #[arg(long)]
        allow: Vec<String>,
        /// Paths crawlers must not access (repeatable)
        #[arg(long)]
        disallow: Vec<String>,
        /// Seconds between requests
        #[arg(long)]
        crawl_delay: Option<u32>,
        /// Preferred host (repeatable)
        #[arg(long)]
        host: Vec<String>,
        /// Sitemap URLs (repeatable)
        #[arg(long)]
        sitemap: Vec<String>,
        /// Header comment lines (repeatable)
        #[arg(long, short)]
        comment: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            3 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .init();

    match cli.command {
        Command::Generate {
            input,
            output_dir,
            base_url,
            format,
            entries_limit,
            size_limit,
            index_name,
            public_url,
        } => {
            let public_url = match public_url {
                Some(url) => {
                    Some(Url::parse(&url).map_err(|e| anyhow::anyhow!("Invalid public url: {}", e))?)
                }
                None => None,
            };
            let options = GenerateOptions {
                site_map: SiteMapOptions::default()
                    .with_format(format)
                    .with_base_url(base_url),
                entries_limit,
                size_limit,
                index_name,
                public_url,
            };
            let summary = generate(&input, &output_dir, options)
                .await
                .context(format!("Failed to generate sitemaps from {}", input.display()))?;
            info!(
                "Wrote {} entries to {} sitemaps, index at {}",
                summary.entries,
                summary.site_maps.len(),
                summary.index.display()
            );
            Ok(())
        }
        Command::Robots {
            output_file,
            user_agent,
            allow,
            disallow,
            crawl_delay,
            host,
            sitemap,
            comment,
        } => {
            let robots = Robots {
                comments: comment,
                entries: vec![RobotsEntry {
                    user_agent,
                    allow,
                    disallow,
                    crawl_delay,
                    host,
                    sitemaps: sitemap,
                    ..RobotsEntry::default()
                }],
            };
            let content = render_robots_txt(&robots)?;
            tokio::fs::write(&output_file, content)
                .await
                .context(format!("Failed to write {}", output_file.display()))?;
            info!("Wrote {}", output_file.display());
            Ok(())
        }
    }
}
