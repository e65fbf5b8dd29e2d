use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use crate::error::{Error, Result};
use crate::settings::ConfigFormat;
use crate::site::Site;

#[derive(Clone, Debug, Parser)]
#[clap(version, about)]
/// Inspect and validate the configuration of a documentation site
pub struct Args {
    /// Config file to use instead of searching the site directory
    #[clap(short, long, parse(from_os_str))]
    pub config: Option<PathBuf>,
    /// Site directory to search for a config
    #[clap(short, long, parse(from_os_str), default_value = ".")]
    pub dir: PathBuf,
    /// Directory page links resolve against
    #[clap(short = 'r', long, parse(from_os_str))]
    pub content_root: Option<PathBuf>,
    /// Log progress at info level
    #[clap(short, long)]
    pub verbose: bool,
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Validate the config and check that every referenced page exists
    Check {
        /// Treat warnings as errors
        #[clap(long)]
        strict: bool,
        /// Skip checking referenced pages on disk
        #[clap(long)]
        no_files: bool,
    },
    /// List every referenced page with its resolved file
    Pages {
        /// Print the list as JSON
        #[clap(long)]
        json: bool,
    },
    /// Print an outline of the site's navigation
    Outline,
    /// Write the config out in another format
    Convert {
        #[clap(long)]
        to: ConfigFormat,
        /// Output file; stdout when omitted
        #[clap(short, long, parse(from_os_str))]
        output: Option<PathBuf>,
    },
}

pub fn run(args: &Args) -> Result<()> {
    let site = Site::open(
        args.config.as_deref(),
        &args.dir,
        args.content_root.as_deref(),
    )?;

    match &args.command {
        Command::Check { strict, no_files } => {
            let diagnostics = site.check(*strict, !*no_files)?;
            for warning in diagnostics.warnings() {
                eprintln!("{warning}");
            }
            println!("{}: ok", site.config_path.display());
        }
        Command::Pages { json } => {
            let pages = site.pages()?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&pages)?);
                return Ok(());
            }
            for page in &pages {
                let reference = &page.reference;
                let target = if reference.is_external() {
                    "external".to_string()
                } else {
                    let file = reference
                        .file
                        .as_deref()
                        .map(|f| f.display().to_string())
                        .unwrap_or_default();
                    if reference.exists {
                        file
                    } else {
                        format!("{file} (missing)")
                    }
                };
                match &page.stamp {
                    Some(stamp) => println!("{} -> {}  [{}]", reference.link, target, stamp.display()),
                    None => println!("{} -> {}", reference.link, target),
                }
            }
        }
        Command::Outline => {
            print!("{}", site.outline()?);
        }
        Command::Convert { to, output } => {
            let text = site.convert(*to)?;
            match output {
                Some(path) => {
                    fs::write(path, text).map_err(|e| Error::Write(path.clone(), e))?;
                    info!(path = %path.display(), format = %to, "wrote config");
                }
                None => print!("{text}"),
            }
        }
    }

    Ok(())
}
