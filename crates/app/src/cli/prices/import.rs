use std::path::PathBuf;

use clap::Args;
use tariff_app::domain::prices::{InMemoryPriceStore, PgPriceStore};
use tracing::info;

use crate::cli::SourceArgs;

#[derive(Debug, Args)]
pub(crate) struct ImportArgs {
    /// YAML file with a top-level `prices` list
    path: PathBuf,
}

pub(crate) async fn run(source: &SourceArgs, args: ImportArgs) -> Result<(), String> {
    let fixture = InMemoryPriceStore::from_yaml_file(&args.path)
        .map_err(|error| format!("failed to load {}: {error}", args.path.display()))?;

    let store = PgPriceStore::new(source.pool().await?);

    let inserted = store
        .import(fixture.records())
        .await
        .map_err(|error| format!("failed to import prices: {error}"))?;

    info!(
        path = %args.path.display(),
        read = fixture.records().len(),
        inserted,
        "imported prices"
    );
    println!(
        "imported {inserted} of {} prices",
        fixture.records().len()
    );

    Ok(())
}
