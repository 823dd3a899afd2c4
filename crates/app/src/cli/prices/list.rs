use crate::cli::SourceArgs;

use super::print_record;

pub(crate) async fn run(source: &SourceArgs) -> Result<(), String> {
    let records = source
        .store()
        .await?
        .get_all()
        .await
        .map_err(|error| format!("failed to list prices: {error}"))?;

    if records.is_empty() {
        println!("no prices found");
        return Ok(());
    }

    for record in &records {
        print_record(record);
        println!();
    }

    Ok(())
}
