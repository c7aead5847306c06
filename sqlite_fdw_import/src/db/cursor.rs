//! Column metadata cursors
//!
//! A cursor yields the columns of one source table, forward-only, in the
//! order the catalog reports them. Cursors are owned by the caller; dropping
//! one releases whatever it holds, whether synthesis finished or failed.

use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::error::Result;
use crate::schema::types::ColumnMetadata;

/// Forward-only, single-pass sequence of column metadata
pub trait MetadataCursor {
    /// Fetch the next column, or `None` once the table is exhausted
    fn next_column(&mut self) -> Result<Option<ColumnMetadata>>;
}

impl MetadataCursor for std::vec::IntoIter<ColumnMetadata> {
    fn next_column(&mut self) -> Result<Option<ColumnMetadata>> {
        Ok(self.next())
    }
}

/// Cursor over the rows of `PRAGMA table_info(<table>)`
pub struct PragmaCursor {
    rows: std::vec::IntoIter<SqliteRow>,
}

impl PragmaCursor {
    pub(crate) fn new(rows: Vec<SqliteRow>) -> Self {
        Self {
            rows: rows.into_iter(),
        }
    }

    /// Columns not yet consumed
    pub fn remaining(&self) -> usize {
        self.rows.len()
    }
}

impl MetadataCursor for PragmaCursor {
    fn next_column(&mut self) -> Result<Option<ColumnMetadata>> {
        let row = match self.rows.next() {
            Some(row) => row,
            None => return Ok(None),
        };

        let name: String = row.try_get("name")?;
        // SQLite reports an untyped column as an empty type string
        let declared_type: Option<String> = row
            .try_get::<Option<String>, _>("type")?
            .filter(|t| !t.is_empty());
        let notnull: i64 = row.try_get("notnull")?;
        let default: Option<String> = row.try_get("dflt_value")?;

        Ok(Some(ColumnMetadata {
            name,
            declared_type,
            not_null: notnull == 1,
            default,
        }))
    }
}
