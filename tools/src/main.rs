//! etl-runner: load an investor contact file into the SQLite store.
//!
//! Usage:
//!   etl-runner --db investments.db --source investors_data.csv
//!   etl-runner --config etl.json
//!   etl-runner --source contacts.csv --with-header

use anyhow::Result;
use invest_core::{
    config::EtlConfig,
    importer::{import_rows, ImportOptions},
    store::InvestStore,
};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut config = match flag_value(&args, "--config") {
        Some(path) => EtlConfig::load(path)?,
        None => EtlConfig {
            db_path: "investments.db".into(),
            source_path: "investors_data.csv".into(),
            source_has_header: false,
        },
    };
    if let Some(db) = flag_value(&args, "--db") {
        config.db_path = db.to_string();
    }
    if let Some(source) = flag_value(&args, "--source") {
        config.source_path = source.to_string();
    }
    if args.iter().any(|a| a == "--with-header") {
        config.source_has_header = true;
    }

    println!("etl-runner");
    println!("  db:     {}", config.db_path);
    println!("  source: {}", config.source_path);
    println!();

    let store = InvestStore::open(&config.db_path)?;
    store.ensure_schema()?;

    let options = ImportOptions {
        has_header: config.source_has_header,
    };
    let mut importer = import_rows(&config.source_path, options)?;

    let mut inserted = 0u64;
    for record in &mut importer {
        let record = record?;
        let id = store.insert_investor(&record)?;
        log::debug!("inserted investor {id}: {}", record.name);
        inserted += 1;
    }
    let skipped = importer.skipped();

    println!("=== IMPORT SUMMARY ===");
    println!("  inserted: {inserted}");
    println!("  skipped:  {skipped}");
    println!("  total investors: {}", store.investor_count()?);
    Ok(())
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2).find(|w| w[0] == flag).map(|w| w[1].as_str())
}
