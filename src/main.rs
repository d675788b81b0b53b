#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use notespace_core::Workspace;

/// Notespace - local-first notes and files
#[derive(Parser, Debug)]
#[command(name = "notespace-desktop")]
#[command(about = "Notespace - local-first notes and files")]
struct Args {
    /// Window title override (useful when running several instances)
    #[arg(short, long)]
    title: Option<String>,

    /// Print the seeded demo workspace as JSON and exit
    #[arg(long)]
    dump_demo: bool,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    if args.dump_demo {
        match serde_json::to_string_pretty(&Workspace::demo()) {
            Ok(json) => println!("{json}"),
            Err(e) => tracing::error!("Failed to serialize demo workspace: {}", e),
        }
        return;
    }

    let title = args.title.unwrap_or_else(|| "Notespace".to_string());

    let window_width = 900.0;
    let window_height = 700.0;

    tracing::info!("Starting '{}'", title);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(
                window_width,
                window_height,
            ))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
