use tariff::prelude::{PriceQuery, rank_candidates};

use crate::cli::SourceArgs;

use super::{QueryArgs, print_record};

pub(crate) async fn run(source: &SourceArgs, args: &QueryArgs) -> Result<(), String> {
    let query = PriceQuery::from(args);

    let candidates = source
        .store()
        .await?
        .find_candidates(query)
        .await
        .map_err(|error| format!("failed to find candidates: {error}"))?;

    if candidates.is_empty() {
        println!("no applicable price");
        return Ok(());
    }

    for (rank, record) in rank_candidates(&candidates).into_iter().enumerate() {
        println!("rank: {}", rank + 1);
        print_record(record);
        println!();
    }

    Ok(())
}
