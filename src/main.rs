#![allow(non_snake_case)]

mod app;
mod pages;
mod startup;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

use crate::startup::STARTUP_STORY;

/// Cardkit - card component style guide
#[derive(Parser, Debug)]
#[command(name = "cardkit-desktop")]
#[command(about = "Style guide and story browser for the card component")]
struct Args {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Open directly on a story (see `cardkit list`)
    #[arg(short, long)]
    story: Option<String>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

/// Default log filter for a `-v` count, used when `RUST_LOG` is unset
fn log_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn setup_logging(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_filter(verbosity))),
        )
        .init();
}

fn main() {
    let args = Args::parse();

    setup_logging(args.verbose);

    if let Some(story) = args.story {
        match cardkit_ui::stories::find(&story) {
            Ok(found) => STARTUP_STORY.set(found.id),
            Err(e) => tracing::warn!("{}; opening the style guide instead", e),
        }
    }

    tracing::info!(
        "Starting cardkit style guide ({}x{}, story: {:?})",
        args.width,
        args.height,
        STARTUP_STORY.peek()
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Cardkit Style Guide")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
