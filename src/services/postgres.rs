use async_trait::async_trait;
use serde_json::Value;
use sqlx::postgres::{PgPoolOptions, Postgres};
use sqlx::{PgPool, QueryBuilder};
use std::time::Duration;

use crate::config::DatabaseSettings;
use crate::core::filters::{Condition, Filter};
use crate::services::store::{Collection, DocumentStore, StoreError};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// PostgreSQL-backed document store
///
/// Documents live as JSONB rows in a single `documents` table keyed by
/// collection name. Filters are translated into parameterized SQL; stored
/// dates are compared on their `YYYY-MM-DD` prefix so both plain dates and
/// full timestamps match.
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Connect eagerly and run migrations
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, StoreError> {
        let pool = Self::pool_options(settings).connect(&settings.url).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a pool that only connects when the first query runs
    pub fn connect_lazy(settings: &DatabaseSettings) -> Result<Self, StoreError> {
        let pool = Self::pool_options(settings).connect_lazy(&settings.url)?;
        Ok(Self { pool })
    }

    fn pool_options(settings: &DatabaseSettings) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(settings.max_connections.unwrap_or(10))
            .min_connections(settings.min_connections.unwrap_or(1))
            .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs.unwrap_or(5)))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
    }
}

/// Build the SELECT for `filter` over `collection`
pub fn build_find_query(collection: Collection, filter: &Filter) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new("SELECT doc FROM documents WHERE collection = ");
    query.push_bind(collection.name());

    for (field, condition) in filter.clauses() {
        match condition {
            Condition::Contains(needle) => {
                query.push(" AND doc ->> ");
                query.push_bind(field.clone());
                query.push(" ILIKE ");
                query.push_bind(like_pattern(needle));
            }
            Condition::Equals(date) => {
                query.push(" AND LEFT(doc ->> ");
                query.push_bind(field.clone());
                query.push(", 10) = ");
                query.push_bind(date.format(DATE_FORMAT).to_string());
            }
            Condition::Between(from, to) => {
                query.push(" AND LEFT(doc ->> ");
                query.push_bind(field.clone());
                query.push(", 10) BETWEEN ");
                query.push_bind(from.format(DATE_FORMAT).to_string());
                query.push(" AND ");
                query.push_bind(to.format(DATE_FORMAT).to_string());
            }
        }
    }

    query.push(" ORDER BY id");
    query
}

/// Turn a literal substring into an ILIKE pattern
fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl DocumentStore for PostgresStore {
    async fn find(&self, collection: Collection, filter: &Filter) -> Result<Vec<Value>, StoreError> {
        let mut query = build_find_query(collection, filter);

        let rows: Vec<(Value,)> = query.build_query_as().fetch_all(&self.pool).await?;

        Ok(rows.into_iter().map(|(doc,)| doc).collect())
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await.is_ok()
    }
}
