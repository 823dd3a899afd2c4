use tariff_app::database;
use tracing::info;

use crate::cli::SourceArgs;

pub(crate) async fn run(source: &SourceArgs) -> Result<(), String> {
    let pool = source.pool().await?;

    database::migrate(&pool)
        .await
        .map_err(|error| format!("failed to run migrations: {error}"))?;

    info!("migrations applied");
    println!("migrations applied");

    Ok(())
}
