//! Source catalog access
//!
//! This module lists the tables of the source database and opens column
//! metadata cursors over them.

use async_trait::async_trait;
use sqlx::FromRow;

use crate::db::connection::SqliteSource;
use crate::db::cursor::{MetadataCursor, PragmaCursor};
use crate::error::Result;
use crate::utils::naming::quote_sqlite;

/// A catalog that can describe its tables
#[async_trait]
pub trait SchemaSource {
    type Cursor: MetadataCursor + Send;

    /// Names of the importable tables, in a stable order
    async fn list_tables(&self) -> Result<Vec<String>>;

    /// Open a column cursor for one table
    async fn column_cursor(&self, table_name: &str) -> Result<Self::Cursor>;
}

#[derive(FromRow)]
struct TableRow {
    name: String,
}

#[async_trait]
impl SchemaSource for SqliteSource {
    type Cursor = PragmaCursor;

    async fn list_tables(&self) -> Result<Vec<String>> {
        let sql = r#"
            SELECT name
            FROM sqlite_master
            WHERE type = 'table' AND substr(name, 1, 7) <> 'sqlite_'
            ORDER BY name
        "#;

        let rows = sqlx::query_as::<_, TableRow>(sql)
            .fetch_all(self.pool())
            .await?;

        Ok(rows.into_iter().map(|r| r.name).collect())
    }

    async fn column_cursor(&self, table_name: &str) -> Result<PragmaCursor> {
        let pragma = format!("PRAGMA table_info({})", quote_sqlite(table_name)?);
        tracing::debug!(sql = %pragma, "Preparing sqlite catalog query");

        let rows = sqlx::query(&pragma).fetch_all(self.pool()).await?;

        Ok(PragmaCursor::new(rows))
    }
}
