// certsearch - Certificate Transparency search client for crt.sh
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, version 3.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

use anyhow::Result;
use certsearch::crt_sh::{sort, CrtShClient, SortKey};
use certsearch::error::SearchError;
use certsearch::output::text;
use certsearch::Args;
use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging - respect RUST_LOG environment variable
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse::<Level>().ok())
        .unwrap_or(Level::INFO);

    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    // Parse command line arguments
    let args = Args::parse();

    if args.domain.is_empty() {
        return Err(SearchError::InvalidArgument {
            message: "--url requires a non-empty domain".to_string(),
        }
        .into());
    }

    // Resolve the sort key before any network traffic so a bad key fails fast
    let sort_key = args
        .sort
        .as_deref()
        .map(str::parse::<SortKey>)
        .transpose()?;

    println!("Searching certificates for domain: {}", args.domain);

    let client = CrtShClient::new();
    let mut records = client.search(&args.domain).await?;

    if let Some(key) = sort_key {
        sort::sort_records(&mut records, key);
    }

    // The sink is opened only after fetch and sort succeed, so an upstream
    // failure never creates or truncates the output file
    let mut sink = text::open_sink(args.output.output.as_deref())?;
    text::render_records(&mut sink, &records, args.output.verbose)?;

    match &args.output.output {
        Some(path) => println!(
            "{} Results have been saved to: {}",
            "✓".green(),
            path.display()
        ),
        None => println!("{} Results have been saved.", "✓".green()),
    }

    Ok(())
}
