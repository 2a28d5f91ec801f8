use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};

use storeloc_client::{PageView, Pager, StoreApiClient};
use storeloc_core::{Store, StoreId};

#[derive(Debug, Parser)]
#[command(name = "storeloc-cli")]
#[command(about = "Store locator command line client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search stores around a coordinate pair and browse the results.
    Geo { latitude: f64, longitude: f64 },
    /// Search stores by zipcode and browse the results.
    Zip { zipcode: String },
    /// Show the currently selected store.
    Current,
    /// Select a store by id.
    Select { id: StoreId },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = storeloc_core::load_app_config()?;
    tracing::debug!(api_url = %config.api_url, "using locator API");
    let client = StoreApiClient::new(&config.api_url, config.request_timeout_secs)?;

    match cli.command {
        Commands::Geo {
            latitude,
            longitude,
        } => {
            let stores = client.stores_by_geo(latitude, longitude).await?;
            browse(&client, stores).await?;
        }
        Commands::Zip { zipcode } => {
            let stores = client.stores_by_zip(&zipcode).await?;
            browse(&client, stores).await?;
        }
        Commands::Current => match client.current_store().await? {
            Some(store) => print_store(&store),
            None => println!("No store selected."),
        },
        Commands::Select { id } => {
            let store = client.set_current(id).await?;
            println!("Selected:");
            print_store(&store);
        }
    }

    Ok(())
}

/// Pages through `stores` interactively, auto-selecting the first result
/// when the caller has no current store yet.
async fn browse(client: &StoreApiClient, stores: Vec<Store>) -> anyhow::Result<()> {
    let mut pager = Pager::receive(stores);

    if pager.first_store().is_none() {
        println!("No stores found.");
        return Ok(());
    }

    let selection = client.ensure_default_selection(&pager).await?;
    if let (true, Some(store)) = (selection.assigned, selection.store.as_ref()) {
        println!("No store was selected; defaulting to {}.", store.name);
    }
    let mut current = selection.store.map(|s| s.id);

    let stdin = io::stdin();
    loop {
        let view = pager.render(current).expect("non-empty pager renders");
        print_page(&view);

        print!("[n]ext, [p]rev, [s]elect <id>, [q]uit > ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("n") if view.has_next => pager = pager.next(),
            Some("n") => println!("Already on the last page."),
            Some("p") if view.has_prev => pager = pager.prev(),
            Some("p") => println!("Already on the first page."),
            Some("s") => match parts.next().and_then(|raw| raw.parse::<StoreId>().ok()) {
                Some(id) => match client.set_current(id).await {
                    Ok(store) => {
                        current = Some(store.id);
                        println!("Selected {}.", store.name);
                    }
                    Err(e) => println!("Could not select store {id}: {e}"),
                },
                None => println!("Usage: s <store-id>"),
            },
            Some("q") => break,
            Some(other) => println!("Unknown command: {other}"),
            None => {}
        }
    }

    Ok(())
}

fn print_page(view: &PageView) {
    println!();
    for entry in &view.entries {
        let marker = if entry.selected { "*" } else { " " };
        println!(
            "{marker} [{}] {} - {}, {} (distance {})",
            entry.store.id,
            entry.store.name,
            entry.store.address_1,
            entry.store.address_2,
            entry.store.distance
        );
    }
    println!("Showing {} of {} stores", view.range_label, view.total);
}

fn print_store(store: &Store) {
    println!(
        "[{}] {} - {}, {} (distance {})",
        store.id, store.name, store.address_1, store.address_2, store.distance
    );
}
