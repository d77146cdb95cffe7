//! Cardkit CLI
//!
//! Renders the card story catalog, or any JSON card config, to static HTML.
//!
//! ## Usage
//!
//! ```bash
//! # List every story
//! cardkit list
//!
//! # Render a story as a standalone page
//! cardkit render default --out default.html
//!
//! # Render a story variant as bare markup
//! cardkit render default --layout horizontal --position right --fragment
//!
//! # Render a card described in JSON
//! cardkit render-config card.json
//!
//! # Export the whole story book
//! cardkit export ./site
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cardkit_ui::render;
use cardkit_ui::stories;
use cardkit_ui::{Alignment, CardConfig, IconSize, ImagePosition, ImageSize, Layout};
use clap::{Args, Parser, Subcommand};

/// Cardkit - card component story renderer
#[derive(Parser)]
#[command(name = "cardkit")]
#[command(version = "0.1.0")]
#[command(about = "Render card stories to static HTML")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List stories as `<id>  <title>`
    List,

    /// Render one story
    Render {
        /// Story id (see `cardkit list`)
        story: String,

        #[command(flatten)]
        output: OutputArgs,

        #[command(flatten)]
        overrides: Overrides,
    },

    /// Render a card from a JSON config file
    RenderConfig {
        /// Path to a JSON card config
        file: PathBuf,

        /// Attach a card-level click handler (enables interactive styling)
        #[arg(long)]
        clickable: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Write index.html and one page per story into a directory
    Export {
        /// Output directory (created if missing)
        dir: PathBuf,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Write to this file instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Emit only the card markup, without the surrounding document
    #[arg(long)]
    fragment: bool,
}

/// Variant overrides applied on top of a story's config
#[derive(Args, Default)]
struct Overrides {
    #[arg(long)]
    layout: Option<Layout>,
    #[arg(long)]
    alignment: Option<Alignment>,
    #[arg(long)]
    position: Option<ImagePosition>,
    #[arg(long)]
    image_size: Option<ImageSize>,
    #[arg(long)]
    icon_size: Option<IconSize>,
    #[arg(long)]
    fullbleed: bool,
    #[arg(long)]
    no_badges: bool,
    #[arg(long)]
    no_buttons: bool,
    #[arg(long)]
    no_footer: bool,
    #[arg(long)]
    no_image: bool,
    #[arg(long)]
    no_icon: bool,
}

impl Overrides {
    fn apply(&self, mut config: CardConfig) -> CardConfig {
        if let Some(layout) = self.layout {
            config.layout = layout;
        }
        if let Some(alignment) = self.alignment {
            config.alignment = alignment;
        }
        if let Some(position) = self.position {
            config.image_position = position;
        }
        if let Some(size) = self.image_size {
            config.image_size = size;
        }
        if let Some(size) = self.icon_size {
            config.icon_size = size;
        }
        config.fullbleed |= self.fullbleed;
        config.show_badges &= !self.no_badges;
        config.show_buttons &= !self.no_buttons;
        config.show_footer &= !self.no_footer;
        config.show_image &= !self.no_image;
        config.show_icon &= !self.no_icon;
        config
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn emit(html: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            fs::write(path, html).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote card html");
            println!("Wrote {}", path.display());
        }
        None => print!("{html}"),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match cli.command {
        Commands::List => {
            for story in stories::all() {
                println!("{:<24}{}", story.id, story.title);
            }
        }

        Commands::Render {
            story,
            output,
            overrides,
        } => {
            let story = stories::find(&story)?;
            let config = overrides.apply(story.config());
            tracing::debug!(?config, "rendering story {}", story.id);

            let fragment = render::card_fragment(config, story.clickable);
            let html = if output.fragment {
                fragment
            } else {
                render::document(story.title, &fragment)
            };
            emit(&html, output.out.as_deref())?;
        }

        Commands::RenderConfig {
            file,
            clickable,
            output,
        } => {
            let json = fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let config = CardConfig::from_json(&json)
                .with_context(|| format!("parsing {}", file.display()))?;
            let title = config.heading.clone();

            let fragment = render::card_fragment(config, clickable);
            let html = if output.fragment {
                fragment
            } else {
                render::document(&title, &fragment)
            };
            emit(&html, output.out.as_deref())?;
        }

        Commands::Export { dir } => {
            fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;

            let index = dir.join("index.html");
            fs::write(&index, render::index_document(stories::all()))
                .with_context(|| format!("writing {}", index.display()))?;

            for story in stories::all() {
                let path = dir.join(format!("{}.html", story.id));
                fs::write(&path, render::story_document(story))
                    .with_context(|| format!("writing {}", path.display()))?;
                tracing::debug!(path = %path.display(), "exported story");
            }

            println!(
                "Exported {} stories to {}",
                stories::all().len(),
                dir.display()
            );
        }
    }

    Ok(())
}
