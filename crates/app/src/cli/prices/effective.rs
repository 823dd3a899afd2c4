use tariff_app::domain::prices::{PricesService, StorePricesService};

use crate::cli::SourceArgs;

use super::{QueryArgs, print_record};

pub(crate) async fn run(source: &SourceArgs, args: &QueryArgs) -> Result<(), String> {
    let service = StorePricesService::new(source.store().await?);

    let price = service
        .get_effective_price(args.into())
        .await
        .map_err(|error| format!("failed to resolve price: {error}"))?;

    match price {
        Some(record) => print_record(&record),
        None => println!("no applicable price"),
    }

    Ok(())
}
