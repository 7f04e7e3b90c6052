//! Chrono Cookbook CLI tool
//!
//! Renders groups of chrono date/time examples beside the outputs they
//! produce on this machine.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use std::process;
use tracing_subscriber::EnvFilter;

use chrono_cookbook::capability::TimeCapability;
use chrono_cookbook::render::{render_catalog, render_group, ColorMode, RenderOptions};
use chrono_cookbook::snippets;

/// Chrono Cookbook - browse chrono examples next to their results
#[derive(Parser)]
#[command(name = "chrono-cookbook")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Render the full cookbook
    chrono-cookbook show

    # Render one group by number or by a title fragment
    chrono-cookbook show --group 6
    chrono-cookbook show --group zones

    # Plain output for piping into a pager
    chrono-cookbook show --color never | less

    # List group titles with entry counts
    chrono-cookbook list")]
struct Cli {
    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render example groups with their live results
    Show {
        /// Group to render, by number or title fragment (default: all groups)
        #[arg(short, long)]
        group: Option<String>,

        /// Table width in columns
        #[arg(long, default_value_t = 120)]
        width: u16,

        /// When to use colors and styling
        #[arg(long, value_enum, default_value = "auto")]
        color: ColorArg,
    },

    /// List group titles and entry counts
    List,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorMode {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => ColorMode::Auto,
            ColorArg::Always => ColorMode::Always,
            ColorArg::Never => ColorMode::Never,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    init_logging(&cli.verbosity);

    let result = match cli.command {
        Commands::Show { group, width, color } => {
            cmd_show(group, width, color)
        }
        Commands::List => {
            cmd_list()
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Route tracing output to stderr at the level the -v flags select
fn init_logging(verbosity: &Verbosity<WarnLevel>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.tracing_level_filter().to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

/// Render the whole catalog, or one group when requested
fn cmd_show(group: Option<String>, width: u16, color: ColorArg) -> Result<()> {
    let capability = TimeCapability::acquire();
    if capability.is_none() {
        tracing::warn!("no date/time capability; every example will show the standard notice");
    }

    let catalog = snippets::catalog();
    let options = RenderOptions {
        width,
        color: color.into(),
    };

    match group {
        Some(query) => {
            let (position, group) = catalog.find(&query)?;
            print!("{}", render_group(position, group, capability, &options));
        }
        None => {
            print!("{}", render_catalog(&catalog, capability, &options));
        }
    }

    Ok(())
}

/// Print group numbers, titles, and entry counts
fn cmd_list() -> Result<()> {
    let catalog = snippets::catalog();

    for (index, group) in catalog.groups().iter().enumerate() {
        println!(
            "{:2}. {} ({} entries)",
            index + 1,
            group.title(),
            group.entries().len()
        );
    }
    println!(
        "{} entries in {} groups",
        catalog.entry_count(),
        catalog.groups().len()
    );

    Ok(())
}
