// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command-line inspection of Vitrine sites: grid layouts for a viewport,
//! page routing, catalog validation, and the effective configuration.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use kurbo::Size;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use vitrine::{Site, SiteConfig};
use vitrine_catalog::Catalog;
use vitrine_grid::GridLayout;

#[derive(Debug, Parser)]
#[command(name = "vitrine", version, about = "Inspect Vitrine portfolio sites")]
struct Cli {
    /// Catalog JSON file; defaults to the built-in catalog.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Site configuration TOML file; defaults to built-in settings.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level unless `RUST_LOG` says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the homepage grid chosen for a viewport.
    Layout {
        /// Viewport width in CSS pixels.
        width: f64,
        /// Viewport height in CSS pixels.
        height: f64,
        /// Number of projects; defaults to the catalog size.
        #[arg(long)]
        items: Option<usize>,
        /// Also list the best N scored candidates.
        #[arg(long, default_value_t = 0)]
        ranked: usize,
    },
    /// Detect the page for a location and print its initial effects.
    Route {
        /// Absolute or relative location, e.g. `project.html?project=salt-flats`.
        location: String,
        /// Viewport width in CSS pixels.
        #[arg(long, default_value_t = 1440.0)]
        width: f64,
        /// Viewport height in CSS pixels.
        #[arg(long, default_value_t = 900.0)]
        height: f64,
    },
    /// Load and validate the catalog, then summarize it.
    Validate,
    /// Print the effective configuration as TOML.
    Config,
}

fn init_logger(verbose: bool) {
    let default = if verbose { "vitrine=debug" } else { "vitrine=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn load_catalog(path: Option<&PathBuf>) -> anyhow::Result<Catalog> {
    match path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("loading catalog {}", path.display())),
        None => Catalog::builtin_checked().context("loading the built-in catalog"),
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<SiteConfig> {
    match path {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("loading configuration {}", path.display())),
        None => Ok(SiteConfig::default()),
    }
}

fn layout(config: &SiteConfig, catalog: &Catalog, viewport: Size, items: usize, ranked: usize) {
    let grid = GridLayout::new(config.grid);
    let placement = grid.layout(viewport, items);
    let dims = placement.dimensions;
    println!(
        "{} x {} grid for {items} projects in {}x{} (cell {:.1}x{:.1}{})",
        dims.cols,
        dims.rows,
        viewport.width,
        viewport.height,
        dims.cell.width,
        dims.cell.height,
        if dims.forced { ", forced fit" } else { "" },
    );
    println!("  intro      {:?}", placement.intro);
    for (index, rect) in placement.items.iter().enumerate() {
        let label = catalog.at(index).map_or("-", |p| p.id.as_str());
        println!("  {label:<10} {rect:?}");
    }
    if ranked > 0 {
        println!("candidates:");
        for candidate in grid.ranked(viewport, items).iter().take(ranked) {
            println!(
                "  {} x {}  score {:.4}  cell {:.1}x{:.1}",
                candidate.cols,
                candidate.rows,
                candidate.score,
                candidate.cell.width,
                candidate.cell.height
            );
        }
    }
}

fn route(site: &Site, location: &str, viewport: Size) -> anyhow::Result<()> {
    let mut page = site
        .enter(location, viewport)
        .with_context(|| format!("entering {location}"))?;
    let effects = page.start();
    println!("{location}: {} initial effects", effects.len());
    for effect in effects {
        println!("  {effect:?}");
    }
    Ok(())
}

fn validate(catalog: &Catalog) {
    println!("{} projects", catalog.len());
    for project in catalog {
        println!(
            "  {:<20} {} slides, {} gallery images",
            project.id,
            project.slide_count(),
            project.gallery_len()
        );
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = load_config(cli.config.as_ref())?;
    let catalog = load_catalog(cli.catalog.as_ref())?;
    tracing::debug!(projects = catalog.len(), "catalog ready");

    match cli.command {
        Command::Layout {
            width,
            height,
            items,
            ranked,
        } => {
            let items = items.unwrap_or(catalog.len());
            layout(&config, &catalog, Size::new(width, height), items, ranked);
        }
        Command::Route {
            location,
            width,
            height,
        } => {
            let site = Site::new(catalog, config);
            route(&site, &location, Size::new(width, height))?;
        }
        Command::Validate => validate(&catalog),
        Command::Config => print!("{}", config.to_toml_string()?),
    }
    Ok(())
}
