use std::fs;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use hotelens_cli::{Args, render_report, save_report, usage};
use hotelens_core::{HttpFetcher, analyze, analyze_html, fetch_failure_report, normalize_url};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let Some(raw_url) = args.url.as_deref() else {
        println!("{}", usage());
        return Ok(ExitCode::from(1));
    };
    let url = normalize_url(raw_url);

    println!("\nAnalyzing AI visibility for: {url}");
    println!("Please wait...");

    let report = match &args.html_file {
        Some(path) => {
            let html = fs::read_to_string(path)
                .with_context(|| format!("failed to read HTML file {}", path.display()))?;
            // Local files have no robots.txt to consult
            analyze_html(&url, &html, None)
        }
        None => match HttpFetcher::new() {
            Ok(fetcher) => analyze(&fetcher, &url).await,
            Err(err) => fetch_failure_report(url.clone(), &err),
        },
    };

    print!("{}", render_report(&report));

    if !args.no_save {
        let path = save_report(&args.output_dir, &report)?;
        println!("Detailed report saved to: {}\n", path.display());
    }

    Ok(ExitCode::SUCCESS)
}
