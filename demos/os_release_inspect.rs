use std::collections::BTreeMap;

use clap::Parser;
use osrelease::{load, load_path};
use serde::Serialize;

#[derive(Parser)]
#[command(author, version, about = "Inspects os-release identification data.")]
struct Args {
    /// Read this file instead of the well-known locations
    #[arg(short, long)]
    path: Option<String>,

    /// Emit the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct IdentityReport {
    source: String,
    entries: BTreeMap<String, String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (source, parsed) = match &args.path {
        Some(path) => (path.clone(), load_path(path)?),
        None => ("well-known locations".to_string(), load()?),
    };

    let report = IdentityReport {
        source,
        // Sort for stable output
        entries: parsed.into_iter().collect(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Source: {}", report.source);
    println!("{:<20} | {:<40}", "Key", "Value");
    println!("{:-<60}", "");
    for (key, value) in &report.entries {
        println!("{:<20} | {:<40}", key, value);
    }
    Ok(())
}
