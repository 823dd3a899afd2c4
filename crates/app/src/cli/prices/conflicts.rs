use tariff::prelude::find_conflicts;

use crate::cli::SourceArgs;

pub(crate) async fn run(source: &SourceArgs) -> Result<(), String> {
    let records = source
        .store()
        .await?
        .get_all()
        .await
        .map_err(|error| format!("failed to list prices: {error}"))?;

    let conflicts = find_conflicts(&records);

    if conflicts.is_empty() {
        println!("no conflicting prices");
        return Ok(());
    }

    for conflict in conflicts {
        println!(
            "product {} brand {} priority {}: price {} ({} .. {}) overlaps price {} ({} .. {})",
            conflict.first.product_id(),
            conflict.first.brand_id(),
            conflict.first.priority(),
            conflict.first.price_id(),
            conflict.first.start_date(),
            conflict.first.end_date(),
            conflict.second.price_id(),
            conflict.second.start_date(),
            conflict.second.end_date(),
        );
    }

    Ok(())
}
