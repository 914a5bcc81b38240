#![doc = include_str!("../README.md")]

mod config;
mod telemetry;

use boxroom::{
    Container, IdentifierSource, Item, MemoryStore, Repository, RepositoryEvent, SeededRandom,
    ThreadRandom,
};
use clap::Parser;
use config::{CliArgs, OutputFormat, RunConfig};
use serde::Serialize;
use telemetry::init_telemetry;

/// A container together with its items, as printed at the end of a run.
#[derive(Debug, Serialize)]
struct Aggregate {
    code: String,
    container: Container,
    items: Vec<Item>,
}

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = RunConfig::try_from(args)?;

    init_telemetry(config.log_format)?;
    log_startup_info(&config);

    let aggregates = match config.seed {
        Some(seed) => run(&config, SeededRandom::new(seed))?,
        None => run(&config, ThreadRandom)?,
    };

    print_aggregates(&aggregates, config.output)?;
    tracing::info!(containers = aggregates.len(), "run complete");
    Ok(())
}

fn log_startup_info(config: &RunConfig) {
    if cfg!(debug_assertions) {
        tracing::info!("Starting boxroom with full config: {:#?}", config);
    } else {
        tracing::info!(
            "Starting boxroom with {} containers and {} items",
            config.containers,
            config.total_items
        );
    }
}

fn run<R>(config: &RunConfig, source: R) -> anyhow::Result<Vec<Aggregate>>
where
    R: IdentifierSource,
{
    let mut repo = Repository::with_config(MemoryStore::new(), source, config.allocator);
    repo.subscribe(log_event);

    for c in 1..=config.containers {
        let container = repo.create_container(format!("box-{c}"))?;
        for i in 1..=config.items_per_container {
            repo.create_item(container.id(), format!("item-{c}-{i}"))?;
        }
    }

    repo.all::<Container>()?
        .into_iter()
        .map(|container| -> anyhow::Result<Aggregate> {
            let items = repo.items_of(&container)?;
            Ok(Aggregate {
                code: container.id().encode(),
                container,
                items,
            })
        })
        .collect()
}

fn log_event(event: &RepositoryEvent) {
    match event {
        RepositoryEvent::ContainerAdded { id } => {
            tracing::info!(container = %id.encode(), "container added");
        }
        RepositoryEvent::ItemAdded { id, container } => {
            tracing::info!(item = %id.encode(), container = %container.encode(), "item added");
        }
        RepositoryEvent::Updated { id } => {
            tracing::debug!(%id, "record updated");
        }
    }
}

fn print_aggregates(aggregates: &[Aggregate], output: OutputFormat) -> anyhow::Result<()> {
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(aggregates)?),
        OutputFormat::Text => {
            for aggregate in aggregates {
                println!(
                    "{} [{}] ({} items)",
                    aggregate.container.title(),
                    aggregate.code,
                    aggregate.items.len()
                );
                for item in &aggregate.items {
                    println!("  - {} [{}]", item.title(), item.id().encode());
                }
            }
        }
    }
    Ok(())
}
