use std::time::Duration;

use sqlx::{
    FromRow, PgPool, Postgres, QueryBuilder,
    postgres::{PgPoolOptions, PgRow},
};

use super::{RecordStore, ResolvedFilter};
use crate::error::Result;
use crate::models::{Entity, Fight, Fighter, Record, RankingEntry};
use crate::schema::{FieldValue, Table};

#[derive(Debug, Clone, Copy)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 5,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

/// PostgreSQL-backed [`RecordStore`].
///
/// Every query checks a connection out of the pool for the duration of a
/// single statement; the pool takes it back on success and on error alike.
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connects eagerly so an unreachable database fails at startup.
    pub async fn new(database_url: &str, settings: PoolSettings) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(settings.acquire_timeout)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    async fn select<E>(&self, filter: &ResolvedFilter) -> Result<Vec<Record>>
    where
        E: Entity + for<'r> FromRow<'r, PgRow> + Unpin,
    {
        let mut query = select_query(filter);
        let rows: Vec<E> = query.build_query_as().fetch_all(&self.pool).await?;

        tracing::debug!(table = filter.table().name(), rows = rows.len(), "Query completed");

        Ok(rows.into_iter().map(Entity::into_record).collect())
    }
}

#[async_trait::async_trait]
impl RecordStore for Database {
    async fn ensure_schema(&self) -> Result<()> {
        self.run_migrations().await
    }

    async fn query(&self, filter: &ResolvedFilter) -> Result<Vec<Record>> {
        match filter.table() {
            Table::Fighters => self.select::<Fighter>(filter).await,
            Table::Fights => self.select::<Fight>(filter).await,
            Table::Rankings => self.select::<RankingEntry>(filter).await,
        }
    }
}

/// Builds `SELECT <columns> FROM <table> WHERE 1=1 AND ...` with every value
/// bound as a parameter. Column names come from the static schema via the
/// resolved filter, never from caller input.
pub(crate) fn select_query(filter: &ResolvedFilter) -> QueryBuilder<'static, Postgres> {
    let schema = filter.table().schema();

    let mut query = QueryBuilder::new("SELECT ");
    query.push(schema.column_names().join(", "));
    query.push(" FROM ");
    query.push(schema.name);
    query.push(" WHERE 1=1");

    for (column, value) in filter.conditions() {
        query.push(" AND ");
        query.push(column);

        match value {
            FieldValue::Null => {
                query.push(" IS NULL");
            }
            FieldValue::Integer(v) => {
                query.push(" = ");
                query.push_bind(*v);
            }
            FieldValue::Float(v) => {
                query.push(" = ");
                query.push_bind(*v);
            }
            FieldValue::Text(v) => {
                query.push(" = ");
                query.push_bind(v.clone());
            }
        }
    }

    query
}
