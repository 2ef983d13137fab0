use clap::Parser;
use quotegen::application::{
    export_to_file, import_from_file, init::init, ConfigService, QuoteStore, SyncService,
    EXPORT_FILE_NAME,
};
use quotegen::cli::{
    format_category_list, format_quote, format_quote_list, format_sync_outcome, Cli, Commands,
    NO_QUOTES_MESSAGE,
};
use quotegen::domain::CategoryFilter;
use quotegen::error::QuoteError;
use quotegen::infrastructure::{FileSystemRepository, FileSystemStore, QuoteRepository};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn open_store() -> Result<(FileSystemRepository, QuoteStore<FileSystemStore>), QuoteError> {
    let repo = FileSystemRepository::discover()?;
    let store = QuoteStore::load(repo.storage())?;
    Ok((repo, store))
}

fn parse_filter(category: Option<String>, store: &QuoteStore<FileSystemStore>) -> CategoryFilter {
    match category {
        Some(c) => c.parse().unwrap_or_default(),
        None => store.selected().clone(),
    }
}

fn show_random(store: &QuoteStore<FileSystemStore>, filter: &CategoryFilter) {
    match store.random_quote(filter) {
        Some(quote) => println!("{}", format_quote(quote)),
        None => println!("{}", NO_QUOTES_MESSAGE),
    }
}

fn run(cli: Cli) -> Result<(), QuoteError> {
    match cli.command {
        Some(Commands::Init { path }) => init(&path),
        Some(Commands::Show { category }) => {
            let (_, store) = open_store()?;
            let filter = parse_filter(category, &store);
            show_random(&store, &filter);
            Ok(())
        }
        Some(Commands::Add { text, category }) => {
            let (_, mut store) = open_store()?;
            let quote = store.add(&text, &category)?;
            println!("Added quote to '{}' ({} total)", quote.category, store.quotes().len());
            Ok(())
        }
        Some(Commands::List { category }) => {
            let (_, store) = open_store()?;
            let filter = parse_filter(category, &store);
            let view = store.filtered(&filter);
            if view.is_empty() {
                println!("{}", NO_QUOTES_MESSAGE);
            } else {
                print!("{}", format_quote_list(&view));
            }
            Ok(())
        }
        Some(Commands::Categories) => {
            let (_, store) = open_store()?;
            print!(
                "{}",
                format_category_list(store.categories(), store.selected())
            );
            Ok(())
        }
        Some(Commands::Filter { category }) => {
            let (_, mut store) = open_store()?;
            if let Some(c) = category {
                store.set_selected(c.parse().unwrap_or_default())?;
                println!("Selected category: {}", store.selected());
                if store.index().is_stale() {
                    println!("{}", NO_QUOTES_MESSAGE);
                }
            } else {
                println!("{}", store.selected());
            }
            Ok(())
        }
        Some(Commands::Import { file }) => {
            let (_, mut store) = open_store()?;
            let count = import_from_file(&mut store, &file)?;
            println!("Quotes imported successfully! ({} added)", count);
            Ok(())
        }
        Some(Commands::Export { output }) => {
            let (_, store) = open_store()?;
            let path = output.unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));
            if path == Path::new("-") {
                println!("{}", store.export_json()?);
            } else {
                let count = export_to_file(&store, &path)?;
                println!("Exported {} quotes to {}", count, path.display());
            }
            Ok(())
        }
        Some(Commands::Sync { watch, interval }) => {
            let (repo, mut store) = open_store()?;
            let config = repo.load_config()?;
            let service = SyncService::from_config(&config)?;
            let runtime = tokio::runtime::Runtime::new()?;

            if watch {
                let interval = match interval {
                    Some(secs) => Duration::from_secs(secs),
                    None => config.get_sync_interval()?,
                };
                let cancel = CancellationToken::new();

                runtime.block_on(async {
                    let on_ctrl_c = cancel.clone();
                    tokio::spawn(async move {
                        if tokio::signal::ctrl_c().await.is_ok() {
                            on_ctrl_c.cancel();
                        }
                    });

                    println!(
                        "Syncing every {}s from {} endpoint(s). Press Ctrl-C to stop.",
                        interval.as_secs(),
                        service.sources().len()
                    );
                    service
                        .run_periodic(&mut store, interval, cancel, |outcome, store| {
                            println!("{}", format_sync_outcome(outcome, store.quotes().len()));
                            show_random(store, store.selected());
                        })
                        .await;
                });
            } else {
                let outcome = runtime.block_on(service.sync_once(&mut store))?;
                println!("{}", format_sync_outcome(&outcome, store.quotes().len()));
            }
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("endpoints = {}", config.endpoints.join(","));
                println!("sync_interval = {}", config.sync_interval_secs);
                println!("sync_category = {}", config.sync_category);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: quotegen config [--list | <key> [<value>]]");
                println!("Valid keys: endpoints, sync_interval, sync_category, created");
                Ok(())
            }
        }
        Some(Commands::Reset) => {
            let repo = FileSystemRepository::discover()?;
            let store = QuoteStore::reset(repo.storage())?;
            println!("Reset quote book to {} default quotes", store.quotes().len());
            Ok(())
        }
        None => {
            let (_, store) = open_store()?;
            show_random(&store, store.selected());
            Ok(())
        }
    }
}
