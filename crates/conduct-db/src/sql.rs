//! libSQL-backed record store.
//!
//! Each kind maps to one table whose columns are exactly the kind's whitelist.
//! Table and column names never come from caller input: they are taken from
//! [`Kind::table`] and [`Kind::columns`] after the payload has been checked,
//! and every value is bound as a parameter.

use conduct_core::enums::Kind;
use conduct_core::record::Payload;
use libsql::Builder;
use serde_json::{Number, Value};

use crate::coerce;
use crate::error::StoreError;
use crate::store::{RecordStore, UpsertOutcome, WriteStatus};

/// Record store over a local libSQL database.
pub struct SqlStore {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl SqlStore {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Creates the schema on first open.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be opened or the schema
    /// cannot be created.
    pub async fn open_local(path: &str) -> Result<Self, StoreError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let store = Self { db, conn };
        store.run_migrations().await?;
        tracing::debug!(path, "opened record store");
        Ok(store)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}

fn select_sql(kind: Kind) -> String {
    format!("SELECT {} FROM {}", quoted_columns(kind.columns()), kind.table())
}

fn quoted_columns(columns: &[&str]) -> String {
    columns
        .iter()
        .map(|c| format!("\"{c}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Read one row selected with [`select_sql`] into a stored payload.
fn row_to_payload(kind: Kind, row: &libsql::Row) -> Result<Payload, StoreError> {
    let mut payload = Payload::new();
    for (idx, column) in kind.columns().iter().enumerate() {
        let idx = i32::try_from(idx)
            .map_err(|_| StoreError::InvalidState(format!("column index {idx} out of range")))?;
        let value = match row.get_value(idx)? {
            libsql::Value::Null => continue,
            libsql::Value::Integer(i) => Value::from(i),
            libsql::Value::Real(f) => Number::from_f64(f).map_or(Value::Null, Value::Number),
            libsql::Value::Text(s) => Value::String(s),
            libsql::Value::Blob(_) => {
                return Err(StoreError::Corrupt {
                    kind: kind.to_string(),
                    id: payload
                        .get(Kind::PRIMARY_KEY)
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string(),
                    reason: format!("column '{column}' holds a blob"),
                });
            }
        };
        payload.insert((*column).to_string(), value);
    }
    Ok(payload)
}

/// Bind a coerced scalar as a SQL parameter.
fn to_sql_value(value: Value) -> libsql::Value {
    match value {
        Value::Null | Value::Array(_) | Value::Object(_) => libsql::Value::Null,
        Value::Bool(b) => libsql::Value::Integer(i64::from(b)),
        Value::Number(n) => n.as_i64().map_or_else(
            || libsql::Value::Real(n.as_f64().unwrap_or_default()),
            libsql::Value::Integer,
        ),
        Value::String(s) => libsql::Value::Text(s),
    }
}

impl RecordStore for SqlStore {
    async fn list(&self, kind: Kind) -> Result<Vec<Payload>, StoreError> {
        let mut rows = self.conn.query(&select_sql(kind), ()).await?;
        let mut out = Vec::new();
        while let Some(row) = rows.next().await? {
            out.push(coerce::outbound(kind, row_to_payload(kind, &row)?));
        }
        tracing::debug!(%kind, count = out.len(), "listed records");
        Ok(out)
    }

    async fn get(&self, kind: Kind, id: &str) -> Result<Option<Payload>, StoreError> {
        let sql = format!("{} WHERE \"id\" = ?1", select_sql(kind));
        let mut rows = self.conn.query(&sql, [id]).await?;
        match rows.next().await? {
            Some(row) => Ok(Some(coerce::outbound(kind, row_to_payload(kind, &row)?))),
            None => Ok(None),
        }
    }

    async fn upsert(&self, kind: Kind, payload: Payload) -> Result<UpsertOutcome, StoreError> {
        let (id, stored) = coerce::inbound(kind, payload)?;
        let table = kind.table();

        let tx = self.conn.transaction().await?;

        let mut rows = tx
            .query(&format!("SELECT 1 FROM {table} WHERE \"id\" = ?1"), [id.as_str()])
            .await?;
        let exists = rows.next().await?.is_some();
        drop(rows);

        let status = if exists {
            let mut sets = Vec::new();
            let mut params: Vec<libsql::Value> = Vec::new();
            let mut idx = 1usize;

            for (field, value) in stored {
                if field == Kind::PRIMARY_KEY {
                    continue;
                }
                sets.push(format!("\"{field}\" = ?{idx}"));
                params.push(to_sql_value(value));
                idx += 1;
            }

            if !sets.is_empty() {
                params.push(id.clone().into());
                let sql = format!(
                    "UPDATE {table} SET {} WHERE \"id\" = ?{idx}",
                    sets.join(", ")
                );
                tx.execute(&sql, libsql::params_from_iter(params))
                    .await
                    .map_err(|e| StoreError::Query(format!("update {kind} '{id}': {e}")))?;
            }
            WriteStatus::Updated
        } else {
            let columns: Vec<&str> = stored.keys().map(String::as_str).collect();
            let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("?{i}")).collect();
            let sql = format!(
                "INSERT INTO {table} ({}) VALUES ({})",
                quoted_columns(&columns),
                placeholders.join(", ")
            );
            let params: Vec<libsql::Value> = stored.into_iter().map(|(_, v)| to_sql_value(v)).collect();
            tx.execute(&sql, libsql::params_from_iter(params))
                .await
                .map_err(|e| StoreError::Query(format!("insert {kind} '{id}': {e}")))?;
            WriteStatus::Created
        };

        tx.commit().await?;
        tracing::debug!(%kind, %id, %status, "upserted record");
        Ok(UpsertOutcome { status, id })
    }

    async fn delete(&self, kind: Kind, id: &str) -> Result<(), StoreError> {
        let removed = self
            .conn
            .execute(&format!("DELETE FROM {} WHERE \"id\" = ?1", kind.table()), [id])
            .await?;
        tracing::debug!(%kind, id, removed, "deleted record");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    async fn test_store() -> SqlStore {
        SqlStore::open_local(":memory:").await.unwrap()
    }

    fn payload(value: Value) -> Payload {
        match value {
            Value::Object(map) => map,
            _ => panic!("test payload must be an object"),
        }
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let store = test_store().await;
        for kind in Kind::ALL {
            let mut rows = store
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [kind.table()],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{}' should exist", kind.table());
        }
    }

    #[tokio::test]
    async fn flags_are_stored_as_integers() {
        let store = test_store().await;
        store
            .upsert(
                Kind::Incidents,
                payload(json!({"id": "inc-1", "parentContacted": true, "createdAt": 5})),
            )
            .await
            .unwrap();

        let mut rows = store
            .conn()
            .query(
                "SELECT \"parentContacted\", typeof(\"parentContacted\") FROM incidents WHERE \"id\" = 'inc-1'",
                (),
            )
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<i64>(0).unwrap(), 1);
        assert_eq!(row.get::<String>(1).unwrap(), "integer");
    }

    #[tokio::test]
    async fn null_columns_are_omitted_on_read() {
        let store = test_store().await;
        store
            .upsert(Kind::Students, payload(json!({"id": "stu-1", "firstName": "Lea"})))
            .await
            .unwrap();
        let got = store.get(Kind::Students, "stu-1").await.unwrap().unwrap();
        assert_eq!(Value::Object(got), json!({"id": "stu-1", "firstName": "Lea"}));
    }

    #[tokio::test]
    async fn text_flags_written_by_hand_are_coerced() {
        let store = test_store().await;
        store
            .conn()
            .execute(
                "INSERT INTO incidents (\"id\", \"parentContacted\", \"createdAt\") VALUES ('inc-9', '1', '42')",
                (),
            )
            .await
            .unwrap();
        let got = store.get(Kind::Incidents, "inc-9").await.unwrap().unwrap();
        assert_eq!(got["parentContacted"], json!(true));
        assert_eq!(got["administrationContacted"], json!(false));
        assert_eq!(got["createdAt"], json!(42));
    }

    #[tokio::test]
    async fn reopening_a_file_keeps_records() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("conduct.db");
        let path = path.to_str().unwrap();

        {
            let store = SqlStore::open_local(path).await.unwrap();
            store
                .upsert(Kind::Years, payload(json!({"id": "yr-1", "name": "Jahrgang 5"})))
                .await
                .unwrap();
        }

        let store = SqlStore::open_local(path).await.unwrap();
        let years = store.list(Kind::Years).await.unwrap();
        assert_eq!(years.len(), 1);
        assert_eq!(years[0]["name"], json!("Jahrgang 5"));
    }
}
