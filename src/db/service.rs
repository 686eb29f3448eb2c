use crate::db::models::Document;
use chrono::{DateTime, NaiveDateTime, Utc};
use duckdb::types::Type;
use duckdb::{params, params_from_iter, Connection, Error as DbError, Result as DbResult, Row};
use tracing::warn;
use uuid::Uuid;

pub struct DbService;

impl DbService {
    fn row_to_document(row: &Row) -> DbResult<Document> {
        let id = row
            .get::<_, String>(0)?
            .parse::<Uuid>()
            .map_err(|e| DbError::FromSqlConversionFailure(0, Type::Text, Box::new(e)))?;

        // Timestamps are selected AS text; the duckdb chrono feature is not enabled.
        let created_str: String = row.get(2)?;
        let created_at = parse_timestamp(&created_str).unwrap_or_else(|| {
            warn!("Document {} has unreadable created_at {:?}", id, created_str);
            Utc::now()
        });

        let body_str: String = row.get(3)?;
        let body = serde_json::from_str(&body_str)
            .map_err(|e| DbError::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;

        Ok(Document {
            id,
            collection: row.get::<_, String>(1)?,
            created_at,
            body,
        })
    }

    pub fn insert_document(conn: &Connection, collection: &str, body: &serde_json::Value) -> DbResult<Uuid> {
        let id = Uuid::new_v4();

        conn.execute(
            "INSERT INTO documents (id, collection, body) VALUES (?, ?, ?)",
            params![id.to_string(), collection, body.to_string()],
        )?;

        Ok(id)
    }

    /// All documents of a collection, oldest first.
    pub fn list_documents(conn: &Connection, collection: &str) -> DbResult<Vec<Document>> {
        Self::find_documents(conn, collection, &[])
    }

    /// Documents of a collection whose top-level string fields equal the given values, oldest first.
    pub fn find_documents(
        conn: &Connection,
        collection: &str,
        string_fields: &[(&str, &str)],
    ) -> DbResult<Vec<Document>> {
        let mut sql = String::from(
            "SELECT CAST(id AS VARCHAR), collection, CAST(created_at AS VARCHAR), body
             FROM documents
             WHERE collection = ?",
        );
        let mut args: Vec<String> = vec![collection.to_string()];

        for (key, value) in string_fields {
            sql.push_str(" AND json_extract_string(body, ?) = ?");
            args.push(json_path(key));
            args.push(value.to_string());
        }
        sql.push_str(" ORDER BY seq ASC");

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(args.iter()), Self::row_to_document)?;

        let mut documents = Vec::new();
        for row in rows {
            documents.push(row?);
        }
        Ok(documents)
    }

    pub fn list_collections(conn: &Connection, limit: usize) -> DbResult<Vec<String>> {
        let mut stmt = conn.prepare(
            "SELECT DISTINCT collection FROM documents ORDER BY collection LIMIT ?",
        )?;
        let rows = stmt.query_map(params![limit as i64], |row| row.get::<_, String>(0))?;

        let mut names = Vec::new();
        for row in rows {
            names.push(row?);
        }
        Ok(names)
    }
}

/// JSONPath for a top-level key, quoted so dots and spaces in the key stay literal.
fn json_path(key: &str) -> String {
    format!("$.\"{}\"", key.replace('"', "\\\""))
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duckdb_timestamp() {
        let ts = parse_timestamp("2024-03-01 12:30:45.123456").unwrap();
        assert_eq!(ts.timestamp(), 1709296245);
        assert!(parse_timestamp("2024-03-01 12:30:45").is_some());
        assert!(parse_timestamp("not a time").is_none());
    }

    #[test]
    fn test_json_path_quotes_key() {
        assert_eq!(json_path("thread_id"), "$.\"thread_id\"");
        assert_eq!(json_path("a.b"), "$.\"a.b\"");
    }
}
