//! Fridge CLI
//!
//! Terminal recipe catalog browser. The default command opens the TUI;
//! one-shot search, export, and open commands cover scripted use.

use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use console::style;
use fridge::{catalog, filter_indices, AppConfig, CatalogSource, FridgeError, DEFAULT_BASE_ORIGIN};

/// Fridge - Terminal recipe catalog browser
///
/// Loads a bundled recipe catalog and offers live title search,
/// with each recipe linking out to its page on icook.tw.
#[derive(Parser)]
#[command(name = "fridge")]
#[command(author = "Fridge Contributors")]
#[command(version)]
#[command(about = "Terminal recipe catalog browser", long_about = None)]
struct Cli {
    /// Load the catalog from this file instead of the bundled resource
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Use the built-in recipe list instead of the bundled resource
    #[arg(long, global = true, conflicts_with = "catalog")]
    builtin: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the recipe grid interactively (default)
    Browse,

    /// Search recipe titles and print the matches
    Search {
        /// Search text (case-insensitive substring of the title)
        query: String,

        /// Maximum results to print
        #[arg(short, long, default_value = "50")]
        max: usize,
    },

    /// Export the full catalog
    Export {
        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Format (json, csv)
        #[arg(short, long, default_value = "json")]
        format: String,
    },

    /// Open a recipe's page in the browser by its catalog number (1-based)
    Open {
        /// Catalog number, as printed by `search`
        number: usize,
    },
}

fn main() {
    fridge::logging::init();
    fridge::logging::info("MAIN", "Fridge starting up");

    let cli = Cli::parse();

    let source = if cli.builtin {
        CatalogSource::Builtin
    } else if let Some(path) = cli.catalog {
        CatalogSource::Path(path)
    } else {
        CatalogSource::Bundled
    };

    let result = match cli.command.unwrap_or(Commands::Browse) {
        Commands::Browse => cmd_browse(source),
        Commands::Search { query, max } => cmd_search(&source, &query, max),
        Commands::Export { output, format } => cmd_export(&source, &output, &format),
        Commands::Open { number } => cmd_open(&source, number),
    };

    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

/// Interactive browse command
fn cmd_browse(source: CatalogSource) -> fridge::Result<()> {
    fridge::tui::run(AppConfig {
        source,
        ..Default::default()
    })
}

/// Search command implementation
fn cmd_search(source: &CatalogSource, query: &str, max: usize) -> fridge::Result<()> {
    let start = Instant::now();
    let records = catalog::load(source);
    let results = search_listing(&records, query);

    println!(
        "{} {} of {} recipes match '{}' ({:.2}ms)",
        style("→").cyan().bold(),
        style(results.len()).green(),
        records.len(),
        style(query).yellow(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    println!();

    for &(number, record) in results.iter().take(max) {
        println!(
            "  {} {}",
            style(format!("{:3}.", number)).dim(),
            style(&record.title).cyan()
        );
        if !record.link.is_empty() {
            println!(
                "      {} {}{}",
                style("Link:").dim(),
                DEFAULT_BASE_ORIGIN,
                record.link
            );
        }
    }

    if results.len() > max {
        println!();
        println!("  ({} more not shown)", results.len() - max);
    }

    Ok(())
}

/// Matching records paired with their 1-based catalog numbers. These are the
/// numbers `open` consumes, so they come from the record's position in the
/// full catalog, not its position among the matches.
fn search_listing<'a>(
    records: &'a [fridge::RecipeRecord],
    query: &str,
) -> Vec<(usize, &'a fridge::RecipeRecord)> {
    filter_indices(records, query)
        .into_iter()
        .map(|idx| (idx + 1, &records[idx]))
        .collect()
}

/// Export command
fn cmd_export(source: &CatalogSource, output: &PathBuf, format: &str) -> fridge::Result<()> {
    let records = catalog::load(source);

    let mut file = std::fs::File::create(output)?;

    match format {
        "csv" => {
            writeln!(file, "Title,Link,Image")?;
            for record in &records {
                writeln!(
                    file,
                    "\"{}\",\"{}\",\"{}\"",
                    record.title.replace('"', "\"\""),
                    record.link,
                    record.image
                )?;
            }
        }
        _ => {
            // JSON format, same shape as the bundled resource
            let json = serde_json::to_string_pretty(&records)
                .map_err(std::io::Error::other)?;
            writeln!(file, "{}", json)?;
        }
    }

    println!(
        "{} Exported {} recipes to {}",
        style("✓").green().bold(),
        records.len(),
        output.display()
    );

    Ok(())
}

/// Open command: launch the Nth recipe's page in the system browser
fn cmd_open(source: &CatalogSource, number: usize) -> fridge::Result<()> {
    let records = catalog::load(source);

    let record = number
        .checked_sub(1)
        .and_then(|i| records.get(i))
        .ok_or(FridgeError::RecordOutOfRange(number, records.len()))?;

    if record.link.is_empty() {
        return Err(FridgeError::MissingLink(record.title.clone()));
    }

    let url = format!("{}{}", DEFAULT_BASE_ORIGIN, record.link);
    open::that(&url).map_err(|e| FridgeError::BrowserLaunch(url.clone(), e))?;

    println!(
        "{} Opened {} ({})",
        style("✓").green().bold(),
        style(&record.title).cyan(),
        url
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use fridge::RecipeRecord;

    use super::*;

    fn record(title: &str, link: &str) -> RecipeRecord {
        RecipeRecord::new(title, link, "img")
    }

    #[test]
    fn search_numbers_resolve_to_the_same_record_open_uses() {
        let records = vec![
            record("番茄炒蛋", "/recipes/1"),
            record("三杯雞", "/recipes/2"),
            record("滷肉飯", "/recipes/3"),
        ];

        let listing = search_listing(&records, "雞");
        assert_eq!(listing.len(), 1);
        let (number, listed) = listing[0];
        assert_eq!(listed.title, "三杯雞");

        // `open` indexes the full catalog with the printed number
        assert_eq!(records.get(number - 1), Some(listed));
    }

    #[test]
    fn search_listing_keeps_catalog_numbers_across_gaps() {
        let records = vec![
            record("白斬雞", "/recipes/1"),
            record("滷肉飯", "/recipes/2"),
            record("鹽酥雞", "/recipes/3"),
        ];

        let numbers: Vec<usize> = search_listing(&records, "雞")
            .into_iter()
            .map(|(n, _)| n)
            .collect();
        assert_eq!(numbers, [1, 3]);
    }

    #[test]
    fn empty_query_lists_every_record_in_order() {
        let records = vec![record("a", "/1"), record("b", "/2")];
        let numbers: Vec<usize> = search_listing(&records, "")
            .into_iter()
            .map(|(n, _)| n)
            .collect();
        assert_eq!(numbers, [1, 2]);
    }
}
