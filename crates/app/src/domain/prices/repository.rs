//! Postgres price store.

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};
use tariff::prelude::{
    BrandId, NewPriceRecord, PriceId, PriceListId, PriceQuery, PriceRecord, PriceRecordError,
    Priority, ProductId,
};

use crate::domain::prices::{errors::PriceStoreError, store::PriceStore};

const LIST_PRICES_SQL: &str = include_str!("sql/list_prices.sql");
const FIND_CANDIDATES_SQL: &str = include_str!("sql/find_candidates.sql");
const INSERT_PRICE_SQL: &str = include_str!("sql/insert_price.sql");

#[derive(Debug, Clone)]
pub struct PgPriceStore {
    pool: PgPool,
}

impl PgPriceStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert `records` in one transaction, skipping price ids that already
    /// exist. Returns how many rows were inserted.
    ///
    /// # Errors
    ///
    /// Returns an error when the transaction cannot be started, an insert
    /// fails, or the commit fails.
    pub async fn import(&self, records: &[PriceRecord]) -> Result<u64, PriceStoreError> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for record in records {
            inserted += query(INSERT_PRICE_SQL)
                .bind(record.price_id().into_inner())
                .bind(record.brand_id().into_inner())
                .bind(record.product_id().into_inner())
                .bind(record.price_list_id().into_inner())
                .bind(record.priority().0)
                .bind(SqlxTimestamp::from(record.start_date()))
                .bind(SqlxTimestamp::from(record.end_date()))
                .bind(record.price())
                .bind(record.currency().as_str())
                .execute(&mut *tx)
                .await?
                .rows_affected();
        }

        tx.commit().await?;

        Ok(inserted)
    }
}

#[async_trait]
impl PriceStore for PgPriceStore {
    async fn get_all(&self) -> Result<Vec<PriceRecord>, PriceStoreError> {
        let rows = query_as::<Postgres, PriceRow>(LIST_PRICES_SQL)
            .fetch_all(&self.pool)
            .await?;

        Ok(into_records(rows)?)
    }

    async fn find_candidates(
        &self,
        price_query: PriceQuery,
    ) -> Result<Vec<PriceRecord>, PriceStoreError> {
        let rows = query_as::<Postgres, PriceRow>(FIND_CANDIDATES_SQL)
            .bind(price_query.product.into_inner())
            .bind(price_query.brand.into_inner())
            .bind(SqlxTimestamp::from(price_query.at))
            .fetch_all(&self.pool)
            .await?;

        Ok(into_records(rows)?)
    }
}

/// A `prices` row before its invariants are checked.
struct PriceRow(NewPriceRecord);

impl<'r> FromRow<'r, PgRow> for PriceRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self(NewPriceRecord {
            price_id: PriceId::new(row.try_get("price_id")?),
            brand_id: BrandId::new(row.try_get("brand_id")?),
            product_id: ProductId::new(row.try_get("product_id")?),
            price_list_id: PriceListId::new(row.try_get("price_list_id")?),
            priority: Priority(row.try_get("priority")?),
            start_date: row.try_get::<SqlxTimestamp, _>("start_date")?.to_jiff(),
            end_date: row.try_get::<SqlxTimestamp, _>("end_date")?.to_jiff(),
            price: row.try_get("price")?,
            currency: row.try_get("currency")?,
        }))
    }
}

fn into_records(rows: Vec<PriceRow>) -> Result<Vec<PriceRecord>, PriceRecordError> {
    rows.into_iter()
        .map(|PriceRow(row)| PriceRecord::new(row))
        .collect()
}
