use mottag_core::ServiceError;
use mottag_sql::SQLStore;

/// SQL DDL for the fleet tables.
///
/// Each table stores the full JSON document in a `data` TEXT column,
/// with indexed columns extracted for filtering and uniqueness. The
/// constraints mirror the business rules: unique yard name, unique
/// plate, unique serial, at most one tag per moto, restrict-delete on
/// yards with motos, detach tags when their moto goes away.
const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS yards (
    id TEXT PRIMARY KEY,
    data TEXT NOT NULL,
    name TEXT NOT NULL UNIQUE,
    city TEXT NOT NULL,
    state TEXT NOT NULL,
    country TEXT NOT NULL,
    area_m2 REAL NOT NULL
);

CREATE TABLE IF NOT EXISTS motos (
    id TEXT PRIMARY KEY,
    data TEXT NOT NULL,
    yard_id TEXT NOT NULL REFERENCES yards(id) ON DELETE RESTRICT,
    plate TEXT NOT NULL UNIQUE,
    model TEXT NOT NULL,
    status TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS tags (
    id TEXT PRIMARY KEY,
    data TEXT NOT NULL,
    moto_id TEXT REFERENCES motos(id) ON DELETE SET NULL,
    serial TEXT NOT NULL UNIQUE,
    battery_pct INTEGER NOT NULL DEFAULT 0
);

CREATE UNIQUE INDEX IF NOT EXISTS idx_tags_moto
    ON tags(moto_id) WHERE moto_id IS NOT NULL;
CREATE INDEX IF NOT EXISTS idx_motos_yard_status ON motos(yard_id, status);
";

/// Create the fleet tables and indexes if they don't exist yet.
pub fn init_schema(sql: &dyn SQLStore) -> Result<(), ServiceError> {
    sql.exec_batch(SCHEMA)
        .map_err(|e| ServiceError::Storage(e.to_string()))
}
