pub mod moto;
pub mod schema;
pub mod tag;
pub mod yard;

use mottag_core::{PagedResult, PageParams, ServiceError};
use mottag_sql::{SQLStore, Value};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::query::Filter;

/// Fleet service — owns the storage backend and enforces the business
/// rules for yards, motos and tags.
///
/// Each table stores the full JSON document in a `data` column, with
/// indexed columns extracted for filtering and uniqueness. Uniqueness
/// and reference checks here are advisory (read-then-write); the
/// SQLite constraints are the enforcement backstop, and a constraint
/// rejection surfaces as Conflict.
pub struct FleetService {
    pub(crate) sql: Box<dyn SQLStore>,
}

impl FleetService {
    pub fn new(sql: Box<dyn SQLStore>) -> Result<Self, ServiceError> {
        schema::init_schema(sql.as_ref())?;
        Ok(Self { sql })
    }

    // ── Generic record helpers ──

    /// Insert a record as JSON into a table with indexed columns.
    pub(crate) fn insert_record<T: Serialize>(
        &self,
        table: &str,
        id: &str,
        record: &T,
        indexes: &[(&str, Value)],
    ) -> Result<(), ServiceError> {
        let json = serde_json::to_string(record)
            .map_err(|e| ServiceError::Internal(e.to_string()))?;

        let mut cols = vec!["id", "data"];
        let mut placeholders = vec!["?1".to_string(), "?2".to_string()];
        let mut params = vec![Value::Text(id.to_string()), Value::Text(json)];

        for (i, (col, val)) in indexes.iter().enumerate() {
            cols.push(col);
            placeholders.push(format!("?{}", i + 3));
            params.push(val.clone());
        }

        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            table,
            cols.join(", "),
            placeholders.join(", "),
        );

        self.sql.exec(&sql, &params).map_err(|e| {
            if e.is_constraint() {
                ServiceError::Conflict(e.to_string())
            } else {
                ServiceError::Storage(e.to_string())
            }
        })?;
        Ok(())
    }

    /// Get a record by id. `noun` names the entity in the 404 detail.
    pub(crate) fn get_record<T: DeserializeOwned>(
        &self,
        table: &str,
        id: &str,
        noun: &str,
    ) -> Result<T, ServiceError> {
        let sql = format!("SELECT data FROM {table} WHERE id = ?1");
        let rows = self
            .sql
            .query(&sql, &[Value::Text(id.to_string())])
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        let row = rows
            .first()
            .ok_or_else(|| ServiceError::NotFound(format!("{noun} '{id}' not found")))?;
        let data = row
            .get_str("data")
            .ok_or_else(|| ServiceError::Internal("missing data column".into()))?;
        serde_json::from_str(data).map_err(|e| ServiceError::Internal(e.to_string()))
    }

    /// Update a record's JSON data and indexed columns.
    pub(crate) fn update_record<T: Serialize>(
        &self,
        table: &str,
        id: &str,
        record: &T,
        indexes: &[(&str, Value)],
        noun: &str,
    ) -> Result<(), ServiceError> {
        let json = serde_json::to_string(record)
            .map_err(|e| ServiceError::Internal(e.to_string()))?;

        let mut sets = vec!["data = ?1".to_string()];
        let mut params: Vec<Value> = vec![Value::Text(json)];

        for (i, (col, val)) in indexes.iter().enumerate() {
            sets.push(format!("{} = ?{}", col, i + 2));
            params.push(val.clone());
        }

        let id_idx = params.len() + 1;
        params.push(Value::Text(id.to_string()));

        let sql = format!("UPDATE {} SET {} WHERE id = ?{}", table, sets.join(", "), id_idx);

        let affected = self.sql.exec(&sql, &params).map_err(|e| {
            if e.is_constraint() {
                ServiceError::Conflict(e.to_string())
            } else {
                ServiceError::Storage(e.to_string())
            }
        })?;

        if affected == 0 {
            return Err(ServiceError::NotFound(format!("{noun} '{id}' not found")));
        }
        Ok(())
    }

    /// Delete a record by id. Deleting a missing id is a silent
    /// success; a constraint rejection (restrict FK) is a Conflict.
    pub(crate) fn delete_record(&self, table: &str, id: &str) -> Result<(), ServiceError> {
        let sql = format!("DELETE FROM {table} WHERE id = ?1");
        self.sql
            .exec(&sql, &[Value::Text(id.to_string())])
            .map_err(|e| {
                if e.is_constraint() {
                    ServiceError::Conflict(e.to_string())
                } else {
                    ServiceError::Storage(e.to_string())
                }
            })?;
        Ok(())
    }

    /// True if any row matches `clause` (a WHERE fragment with `?N`
    /// placeholders starting at 1).
    pub(crate) fn exists(
        &self,
        table: &str,
        clause: &str,
        params: &[Value],
    ) -> Result<bool, ServiceError> {
        let sql = format!("SELECT 1 AS one FROM {table} WHERE {clause} LIMIT 1");
        let rows = self
            .sql
            .query(&sql, params)
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(!rows.is_empty())
    }

    /// List one page of records with total count, filters and ordering.
    pub(crate) fn list_records<T: DeserializeOwned + Serialize>(
        &self,
        table: &str,
        filter: Filter,
        order_sql: &str,
        page: &PageParams,
    ) -> Result<PagedResult<T>, ServiceError> {
        let where_sql = filter.where_sql();
        let mut params = filter.into_params();

        let count_sql = format!("SELECT COUNT(*) AS cnt FROM {table}{where_sql}");
        let rows = self
            .sql
            .query(&count_sql, &params)
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        let total = rows.first().and_then(|r| r.get_i64("cnt")).unwrap_or(0) as u64;

        let limit_idx = params.len() + 1;
        let offset_idx = params.len() + 2;
        params.push(Value::Integer(page.page_size as i64));
        params.push(Value::Integer(page.offset() as i64));

        let sql = format!(
            "SELECT data FROM {table}{where_sql}{order_sql} LIMIT ?{limit_idx} OFFSET ?{offset_idx}",
        );
        let rows = self
            .sql
            .query(&sql, &params)
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        let mut items = Vec::with_capacity(rows.len());
        for row in &rows {
            let data = row
                .get_str("data")
                .ok_or_else(|| ServiceError::Internal("missing data column".into()))?;
            items.push(
                serde_json::from_str(data).map_err(|e| ServiceError::Internal(e.to_string()))?,
            );
        }

        Ok(PagedResult::new(items, total, page))
    }
}
