// ABOUTME: CLI for rendering RSS 2.0 documents with rsswriter-feed.
// ABOUTME: Reads a JSON channel description from file/stdin, appends JSON items, and prints XML.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use rsswriter_feed::{Channel, FeedDocument, Item};
use tracing_subscriber::EnvFilter;

/// Render a JSON channel description as an RSS 2.0 document.
#[derive(Parser, Debug)]
#[command(name = "rsswriter")]
#[command(about = "Render a JSON channel description as RSS 2.0 XML", long_about = None)]
struct Args {
    /// Channel description (JSON file path). Use "-" to read from stdin.
    channel: String,

    /// JSON file holding one item or an array of items, appended after the channel's own items.
    /// May be repeated.
    #[arg(long = "item", value_name = "FILE")]
    items: Vec<PathBuf>,

    /// Drop items carried by the channel description before appending --item files.
    #[arg(long, default_value_t = false)]
    clear_items: bool,

    /// Output file path (default: stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Log debug output to stderr (overrides RUST_LOG)
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let channel: Channel = serde_json::from_slice(&load_bytes(&args.channel)?)
        .with_context(|| format!("invalid channel description: {}", args.channel))?;

    let mut doc = FeedDocument::new(channel);
    if args.clear_items {
        tracing::debug!(dropped = doc.items().len(), "clearing channel items");
        doc.clear_items();
    }

    for path in &args.items {
        for item in load_items(path)? {
            doc.add_item(item);
        }
    }

    let xml = doc.render()?;

    match args.output {
        Some(path) => {
            fs::write(&path, &xml)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote feed");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(xml.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Reads an item file. Accepts either a single item object or an array.
fn load_items(path: &Path) -> Result<Vec<Item>> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_slice(&bytes)
        .with_context(|| format!("invalid JSON in {}", path.display()))?;

    let items = if value.is_array() {
        serde_json::from_value::<Vec<Item>>(value)
    } else {
        serde_json::from_value::<Item>(value).map(|item| vec![item])
    }
    .with_context(|| format!("invalid item in {}", path.display()))?;

    tracing::debug!(path = %path.display(), count = items.len(), "loaded items");
    Ok(items)
}

fn load_bytes(target: &str) -> Result<Vec<u8>> {
    if target == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        return Ok(buf);
    }

    let path = PathBuf::from(target);
    if !path.exists() {
        return Err(anyhow!("file not found: {}", target));
    }
    Ok(fs::read(path)?)
}
