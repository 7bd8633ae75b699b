use crate::db::connection::Database;
use crate::domain::history::SummaryRecord;
use crate::errors::StoreError;
use rusqlite::params;

const SQL_CREATE_REPORT: &str = include_str!("../../sql/report.sql");

/// Throws away the previous report and writes `records` in its place.
///
/// Rows are keyed by (scraper, entity); a later duplicate overwrites an
/// earlier one.
pub fn replace_report(db: &Database, records: &[SummaryRecord]) -> Result<usize, StoreError> {
    db.with_conn(|conn| {
        let tx = conn.transaction()?;
        tx.execute_batch(SQL_CREATE_REPORT)?;

        {
            let mut stmt = tx.prepare(
                r#"
                INSERT INTO report (scraper, entity, council_id, started_polling, changes, last_changed)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                ON CONFLICT(scraper, entity) DO UPDATE SET
                    council_id = excluded.council_id,
                    started_polling = excluded.started_polling,
                    changes = excluded.changes,
                    last_changed = excluded.last_changed
                "#,
            )?;

            for r in records {
                stmt.execute(params![
                    r.scraper,
                    r.entity,
                    r.council_id,
                    r.started_polling,
                    r.changes,
                    r.last_changed
                ])?;
            }
        }

        tx.commit()?;
        Ok(records.len())
    })
}

/// Reads the stored report back, ordered by scraper then entity.
///
/// Returns an empty list if no report has been written yet.
pub fn load_report(db: &Database) -> Result<Vec<SummaryRecord>, StoreError> {
    db.with_conn(|conn| {
        let exists: bool = conn.query_row(
            "SELECT EXISTS (SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'report')",
            [],
            |row| row.get(0),
        )?;
        if !exists {
            return Ok(Vec::new());
        }

        let mut stmt = conn.prepare(
            "SELECT scraper, entity, council_id, started_polling, changes, last_changed
             FROM report ORDER BY scraper, entity",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(SummaryRecord {
                scraper: row.get(0)?,
                entity: row.get(1)?,
                council_id: row.get(2)?,
                started_polling: row.get(3)?,
                changes: row.get(4)?,
                last_changed: row.get(5)?,
            })
        })?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    })
}
