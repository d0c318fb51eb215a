//! Semiotic Agency
//!
//! Interactive annotator: each line is processed as one turn, and the
//! record from the previous turn is carried into the next as its prior.

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use semiotic_agency::{Annotator, AnnotatorConfig, Mode, Record, RecordStore, Schema, SqliteRecordStore};

// ──────────────────────────────────────────────────────────────────────────────
// MAIN ENTRY POINT
// ──────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();
    let config = AnnotatorConfig::from_env()?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set tracing subscriber")?;

    let schema = Schema::load(&config.schema_path)
        .with_context(|| format!("Failed to load schema from {:?}", config.schema_path))?;
    let sqlite = SqliteRecordStore::new(&config.db_path)
        .await
        .with_context(|| format!("Failed to open record store at {:?}", config.db_path))?;
    let store_path = sqlite.path().to_path_buf();
    let store: Arc<dyn RecordStore> = Arc::new(sqlite);

    let stored = store
        .count()
        .await
        .with_context(|| format!("Failed to read record store at {:?}", store_path))?;
    info!("Record store initialized with {} rows", stored);

    let annotator = Annotator::new(schema, store.clone());
    let mut mode = config.mode;
    let mut prior: Option<Record> = None;
    let mut dump_json = false;

    println!("\n{}", "═".repeat(60));
    println!("Semiotic Agency v{}", env!("CARGO_PKG_VERSION"));
    println!("{}", "═".repeat(60));
    println!("Store: {:?} ({} records) | Mode: {}", store_path, stored, mode);
    println!("Commands: quit | refine | lookup <text> | mode <modus_ponens|abduction> | reset | count | json\n");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let line = input.trim();

        if line.is_empty() {
            continue;
        }

        let (command, argument) = match line.split_once(' ') {
            Some((c, rest)) => (c.to_lowercase(), rest.trim()),
            None => (line.to_lowercase(), ""),
        };

        match command.as_str() {
            "quit" | "exit" | "q" if argument.is_empty() => break,
            "refine" if argument.is_empty() => {
                match annotator.refine().await {
                    Ok(r) => println!(
                        "Dynamic: {}\nFinal:   {}\n",
                        r.dynamic.as_deref().unwrap_or("(none)"),
                        r.final_.as_deref().unwrap_or("(none)")
                    ),
                    Err(e) => println!("Error: {}\n", e),
                }
                continue;
            }
            "lookup" if !argument.is_empty() => {
                match annotator.get_record(argument).await {
                    Ok(Some(record)) => println!("{}\n", serde_json::to_string_pretty(&record)?),
                    Ok(None) => println!("No record for '{}'\n", argument),
                    Err(e) => println!("Error: {}\n", e),
                }
                continue;
            }
            "mode" if !argument.is_empty() => {
                match argument.parse::<Mode>() {
                    Ok(m) => {
                        mode = m;
                        println!("Mode set to {}\n", mode);
                    }
                    Err(e) => println!("{}\n", e),
                }
                continue;
            }
            "reset" if argument.is_empty() => {
                prior = None;
                println!("Prior turn cleared.\n");
                continue;
            }
            "count" if argument.is_empty() => {
                match store.count().await {
                    Ok(n) => println!("{} stored records\n", n),
                    Err(e) => println!("Error: {}\n", e),
                }
                continue;
            }
            "json" if argument.is_empty() => {
                dump_json = !dump_json;
                println!("Record dump {}\n", if dump_json { "on" } else { "off" });
                continue;
            }
            _ => {}
        }

        match annotator.process(line, prior.as_ref(), mode).await {
            Ok(outcome) => {
                println!("Response: {}", outcome.response);
                println!("Guidance: {}", outcome.guidance);
                if dump_json {
                    println!("{}", serde_json::to_string_pretty(&outcome.record)?);
                }
                if !outcome.persisted {
                    println!("(record not saved)");
                }
                println!();
                prior = Some(outcome.summary);
            }
            Err(e) => println!("Error: {}\n", e),
        }
    }

    Ok(())
}
