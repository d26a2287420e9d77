use clap::{Parser, Subcommand};
use dialoguer::Select;
use std::path::PathBuf;
use std::process;
use thiserror::Error;
use wherewasi::{
    CatalogError, EpisodateClient, IngestError, ShowCatalog, ShowIngestor, ShowRecord, ShowStore,
    StoreError,
};

#[derive(Parser)]
#[command(name = "wherewasi")]
#[command(about = "Track which episodes of your TV shows you have already seen", version)]
struct Cli {
    /// Directory of the show library (defaults to the platform data directory)
    #[arg(long, value_name = "DIR")]
    library: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search the remote catalog for shows
    Search {
        /// Show name to search for
        query: String,
    },

    /// Search the catalog and start tracking a chosen show
    Add {
        /// Show name to search for
        query: String,
    },

    /// List all tracked shows
    List,

    /// Show details and episodes of a tracked show
    Show {
        /// Id of the tracked show
        id: u64,
    },

    /// Toggle the seen flag of one episode
    Toggle {
        /// Id of the tracked show
        id: u64,
        /// Season number of the episode
        season: u32,
        /// Episode number within the season
        episode: u32,
    },

    /// Print the next unwatched episode of a tracked show
    Next {
        /// Id of the tracked show
        id: u64,
    },

    /// Stop tracking a show and delete its record
    Remove {
        /// Id of the tracked show
        id: u64,
    },
}

/// Errors surfaced to the terminal user
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

fn open_store(library: Option<PathBuf>) -> Result<ShowStore, StoreError> {
    match library {
        Some(dir) => ShowStore::open(dir),
        None => ShowStore::open_default(),
    }
}

fn print_show(record: &ShowRecord) {
    println!("{} (id {})", record.name, record.id);
    if !record.description.is_empty() {
        println!("{}", record.description);
    }
    println!("Start date: {}", record.start_date);
    println!("End date:   {}", record.end_date);
    println!("Status:     {}", record.status);
    println!();

    for episode in &record.episodes {
        let marker = if episode.seen { "[x]" } else { "[ ]" };
        println!(
            "  {} S{:02}E{:02}  {}  ({})",
            marker, episode.season, episode.episode, episode.name, episode.air_date
        );
    }

    println!();
    match record.next_unwatched() {
        Some(episode) => println!(
            "Next unwatched: S{:02}E{:02} - {}",
            episode.season, episode.episode, episode.name
        ),
        None => println!("Next unwatched: none, all episodes seen"),
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Search { query } => {
            let catalog = EpisodateClient::new();
            let results = catalog.search(&query)?;

            if results.is_empty() {
                println!("No shows found for '{}'.", query);
                return Ok(());
            }

            for summary in results {
                println!("{:>8}  {}", summary.id, summary.name);
            }
        }

        Command::Add { query } => {
            let store = open_store(cli.library)?;
            let catalog = EpisodateClient::new();
            let results = catalog.search(&query)?;

            if results.is_empty() {
                println!("No shows found for '{}'.", query);
                return Ok(());
            }

            let items: Vec<String> = results
                .iter()
                .map(|s| format!("{} (id {})", s.name, s.id))
                .collect();

            let selection = Select::new()
                .with_prompt("Which show do you want to track?")
                .items(&items)
                .default(0)
                .interact()?;

            let record = ShowIngestor::new(&catalog, &store).ingest(results[selection].id)?;

            println!(
                "Now tracking '{}' ({} episodes).",
                record.name,
                record.episodes.len()
            );
        }

        Command::List => {
            let store = open_store(cli.library)?;
            let summaries = store.list()?;

            if summaries.is_empty() {
                println!("No shows tracked yet. Use `wherewasi add <query>` to start.");
                return Ok(());
            }

            for summary in summaries {
                println!("{:>8}  {}", summary.id, summary.name);
            }
        }

        Command::Show { id } => {
            let store = open_store(cli.library)?;
            let record = store.read(id)?;
            print_show(&record);
        }

        Command::Toggle { id, season, episode } => {
            let store = open_store(cli.library)?;
            let mut record = store.read(id)?;

            if !record.toggle_seen(season, episode) {
                println!(
                    "No episode S{:02}E{:02} in '{}'.",
                    season, episode, record.name
                );
                return Ok(());
            }

            store.write(&record)?;

            let seen = record
                .episodes
                .iter()
                .find(|e| e.season == season && e.episode == episode)
                .is_some_and(|e| e.seen);

            println!(
                "S{:02}E{:02} of '{}' marked as {}.",
                season,
                episode,
                record.name,
                if seen { "seen" } else { "unseen" }
            );
        }

        Command::Next { id } => {
            let store = open_store(cli.library)?;
            let record = store.read(id)?;

            match record.next_unwatched() {
                Some(episode) => println!(
                    "S{:02}E{:02} - {}",
                    episode.season, episode.episode, episode.name
                ),
                None => println!("All episodes of '{}' are seen.", record.name),
            }
        }

        Command::Remove { id } => {
            let store = open_store(cli.library)?;
            store.delete(id)?;
            println!("Removed show {} from the library.", id);
        }
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "warn"),
    )
    .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
