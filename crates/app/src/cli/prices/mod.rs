use clap::{Args, Subcommand};
use jiff::Timestamp;
use tariff::prelude::{BrandId, PriceQuery, PriceRecord, ProductId};

use super::SourceArgs;

mod candidates;
mod conflicts;
mod effective;
mod import;
mod list;

#[derive(Debug, Args)]
pub(crate) struct PricesCommand {
    #[command(subcommand)]
    command: PricesSubcommand,
}

#[derive(Debug, Subcommand)]
enum PricesSubcommand {
    /// Print every price record
    List,
    /// Print the price in effect for a product and brand at an instant
    Effective(QueryArgs),
    /// Print every applicable price, highest precedence first
    Candidates(QueryArgs),
    /// Print overlapping records that share a priority
    Conflicts,
    /// Load a YAML price fixture into PostgreSQL
    Import(import::ImportArgs),
}

#[derive(Debug, Args)]
pub(crate) struct QueryArgs {
    /// Instant to price at, RFC 3339 (e.g. 2020-06-14T16:00:00Z)
    #[arg(long)]
    at: Timestamp,

    /// Product identifier
    #[arg(long)]
    product: i64,

    /// Brand identifier
    #[arg(long)]
    brand: i64,
}

impl From<&QueryArgs> for PriceQuery {
    fn from(args: &QueryArgs) -> Self {
        PriceQuery::new(
            args.at,
            ProductId::new(args.product),
            BrandId::new(args.brand),
        )
    }
}

pub(crate) async fn run(source: &SourceArgs, command: PricesCommand) -> Result<(), String> {
    match command.command {
        PricesSubcommand::List => list::run(source).await,
        PricesSubcommand::Effective(args) => effective::run(source, &args).await,
        PricesSubcommand::Candidates(args) => candidates::run(source, &args).await,
        PricesSubcommand::Conflicts => conflicts::run(source).await,
        PricesSubcommand::Import(args) => import::run(source, args).await,
    }
}

fn print_record(record: &PriceRecord) {
    println!("price_id: {}", record.price_id());
    println!("brand_id: {}", record.brand_id());
    println!("product_id: {}", record.product_id());
    println!("price_list_id: {}", record.price_list_id());
    println!("priority: {}", record.priority());
    println!("start_date: {}", record.start_date());
    println!("end_date: {}", record.end_date());
    println!("price: {} {}", record.price(), record.currency());
}
