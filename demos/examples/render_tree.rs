// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render a JSON tree document to container markup.
//!
//! Reads a `{ "text": ..., "children": [...] }` document, draws it into a container of the
//! given width, and writes the container's markup (an SVG drawing, or the overflow notice for
//! trees over the node limit).
//!
//! Run:
//! - `cargo run -p merkle_demos --example render_tree -- tree.json --width 1200 -o tree.html`
//! - `RUST_LOG=merkle_scene=debug cargo run -p merkle_demos --example render_tree -- tree.json`

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use merkle_layout::{Orientation, TreeNode};
use merkle_scene::{Container, Document, DrawOutcome, GraphConfig, GraphView};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const CONTAINER_KEY: &str = "merkle_graph_holder";

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OrientationArg {
    Horizontal,
    Vertical,
}

impl From<OrientationArg> for Orientation {
    fn from(value: OrientationArg) -> Self {
        match value {
            OrientationArg::Horizontal => Self::Horizontal,
            OrientationArg::Vertical => Self::Vertical,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "render_tree")]
#[command(about = "Draw a Merkle tree document as SVG", long_about = None)]
struct Cli {
    /// JSON tree document.
    tree: PathBuf,

    /// TOML graph configuration; omitted fields keep their defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Container width in pixels; the drawing is half as tall.
    #[arg(short, long, default_value_t = 960.0)]
    width: f64,

    /// Override the configured orientation.
    #[arg(long, value_enum)]
    orientation: Option<OrientationArg>,

    /// Embed the stylesheet so full labels show on hover in a browser.
    #[arg(long)]
    styled: bool,

    /// Output file; stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn load_config(cli: &Cli) -> Result<GraphConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            toml::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))?
        }
        None => GraphConfig::default(),
    };
    if let Some(o) = cli.orientation {
        config.orientation = o.into();
    }
    config.embed_stylesheet |= cli.styled;
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    debug!(?config, "loaded graph configuration");

    let raw = fs::read_to_string(&cli.tree)
        .with_context(|| format!("reading tree {}", cli.tree.display()))?;
    let tree = TreeNode::from_json_str(&raw)
        .with_context(|| format!("validating tree {}", cli.tree.display()))?;

    let mut document = Document::new();
    document.insert(Container::new(CONTAINER_KEY, cli.width));
    let view = GraphView::new(config);
    match view.draw_in(&mut document, CONTAINER_KEY, &tree)? {
        DrawOutcome::Drawn {
            node_count,
            link_count,
        } => info!(node_count, link_count, "drawn"),
        DrawOutcome::Overflow { node_count } => info!(node_count, "over the node limit"),
    }

    let markup = document
        .container(CONTAINER_KEY)
        .map(Container::to_markup)
        .unwrap_or_default();
    match &cli.output {
        Some(path) => fs::write(path, markup)
            .with_context(|| format!("writing {}", path.display()))?,
        None => {
            let mut out = io::stdout().lock();
            out.write_all(markup.as_bytes())?;
            out.write_all(b"\n")?;
        }
    }
    Ok(())
}
