use crate::config::DatabaseConfig;
use duckdb::{Connection, Result as DbResult};
use std::sync::{Arc, Mutex};
use tracing::info;

pub type DbPool = Arc<Mutex<Connection>>;

pub(crate) const SCHEMA: &str = r#"
CREATE SEQUENCE IF NOT EXISTS seq_documents;

CREATE TABLE IF NOT EXISTS documents (
    seq BIGINT DEFAULT nextval('seq_documents'),
    id UUID PRIMARY KEY,
    collection VARCHAR NOT NULL,
    body TEXT NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);

CREATE INDEX IF NOT EXISTS idx_documents_collection ON documents(collection, seq);
"#;

/// Opens the DuckDB file named by `config.url`. Callers only reach this with a configured url.
pub fn get_connection(config: &DatabaseConfig) -> DbResult<DbPool> {
    let path = config.url.as_deref().unwrap_or(":memory:");
    info!("Connecting to DuckDB at {}", path);

    let conn = if path == ":memory:" {
        Connection::open_in_memory()?
    } else {
        Connection::open(path)?
    };

    init_schema(&conn)?;

    Ok(Arc::new(Mutex::new(conn)))
}

pub(crate) fn init_schema(conn: &Connection) -> DbResult<()> {
    info!("Initializing document store schema");
    conn.execute_batch(SCHEMA)?;
    Ok(())
}
