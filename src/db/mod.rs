use crate::matcher::{Matcher, Target};
use anyhow::{Context, Result, bail};
use regex::RegexBuilder;
use rusqlite::functions::FunctionFlags;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags, OptionalExtension, params};
use std::path::Path;

/// Sentinel returned by `file_id` when no row matches.
pub const FILE_NOT_FOUND: i64 = -1;

/// Read-only handle to an externally produced cross-reference database.
///
/// One connection per invocation; the store is never written by this
/// process, so no pooling or locking is involved.
pub struct Db {
    conn: Connection,
}

impl Db {
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            bail!("database not found at {}", path.display());
        }

        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .with_context(|| format!("open sqlite db at {}", path.display()))?;
        conn.pragma_update(None, "temp_store", "MEMORY")?;
        register_regexp(&conn)?;

        Ok(Self { conn })
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Resolve a file path to its rowid through the matcher's predicate.
    ///
    /// Path uniqueness is assumed but not enforced by the schema: on a
    /// duplicate the lowest rowid wins and a warning goes to stderr. Zero
    /// matches resolve to `FILE_NOT_FOUND`.
    pub fn file_id(&self, matcher: &Matcher) -> Result<i64> {
        let Some(clause) = matcher.clause("name") else {
            return Ok(FILE_NOT_FOUND);
        };

        let count: i64 = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM files WHERE {}", clause.sql),
            params![clause.param],
            |row| row.get(0),
        )?;
        if count > 1 {
            eprintln!(
                "doxq: warning: non-unique file name [{}], considering only the first match",
                describe_target(matcher)
            );
        }

        let id: Option<i64> = self
            .conn
            .query_row(
                &format!(
                    "SELECT rowid FROM files WHERE {} ORDER BY rowid LIMIT 1",
                    clause.sql
                ),
                params![clause.param],
                |row| row.get(0),
            )
            .optional()?;
        Ok(id.unwrap_or(FILE_NOT_FOUND))
    }

    /// Reverse of `file_id`: rowid to path, empty string when absent.
    pub fn file_name(&self, file_id: i64) -> Result<String> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM files WHERE rowid = ?",
            params![file_id],
            |row| row.get(0),
        )?;
        if count > 1 {
            eprintln!(
                "doxq: warning: non-unique file id [{file_id}], considering only the first match"
            );
        }

        let name: Option<String> = self
            .conn
            .query_row(
                "SELECT name FROM files WHERE rowid = ? ORDER BY rowid LIMIT 1",
                params![file_id],
                |row| row.get(0),
            )
            .optional()?;
        Ok(name.unwrap_or_default())
    }
}

fn describe_target(matcher: &Matcher) -> String {
    match matcher.target() {
        Some(Target::Name(name)) => name.clone(),
        Some(Target::RowId(id)) => id.to_string(),
        None => String::new(),
    }
}

/// Register the case-insensitive `regexp(pattern, text)` scalar used by
/// pattern-mode clauses. NULL text never matches; a malformed pattern
/// surfaces as a query error.
fn register_regexp(conn: &Connection) -> Result<()> {
    conn.create_scalar_function(
        "regexp",
        2,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let pattern: String = ctx.get(0)?;
            let text = match ctx.get_raw(1) {
                ValueRef::Null => return Ok(false),
                value => value
                    .as_str()
                    .map_err(|err| rusqlite::Error::UserFunctionError(Box::new(err)))?
                    .to_string(),
            };
            let re = RegexBuilder::new(&pattern)
                .case_insensitive(true)
                .build()
                .map_err(|err| rusqlite::Error::UserFunctionError(Box::new(err)))?;
            Ok(re.is_match(&text))
        },
    )
    .context("register regexp function")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::{MatchMode, Matcher, Target};
    use tempfile::TempDir;

    fn create_test_db(rows: &[(i64, &str)]) -> (Db, TempDir) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("doxygen_sqlite3.db");
        let conn = Connection::open(&path).unwrap();
        conn.execute("CREATE TABLE files (name TEXT NOT NULL)", [])
            .unwrap();
        for (rowid, name) in rows {
            conn.execute(
                "INSERT INTO files (rowid, name) VALUES (?, ?)",
                params![rowid, name],
            )
            .unwrap();
        }
        drop(conn);
        (Db::open(&path).unwrap(), temp)
    }

    fn exact(name: &str) -> Matcher {
        Matcher::new(Some(Target::Name(name.to_string())), MatchMode::Exact).unwrap()
    }

    #[test]
    fn open_fails_for_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = Db::open(&temp.path().join("nope.db"));
        assert!(result.is_err());
    }

    #[test]
    fn file_resolution_round_trips() {
        let (db, _temp) = create_test_db(&[(1, "a.h"), (2, "b.h")]);
        let id = db.file_id(&exact("a.h")).unwrap();
        assert_eq!(id, 1);
        assert_eq!(db.file_name(id).unwrap(), "a.h");
    }

    #[test]
    fn missing_file_resolves_to_sentinel() {
        let (db, _temp) = create_test_db(&[(1, "a.h")]);
        assert_eq!(db.file_id(&exact("missing.h")).unwrap(), FILE_NOT_FOUND);
        assert_eq!(db.file_name(99).unwrap(), "");
    }

    #[test]
    fn duplicate_path_resolves_to_first_rowid() {
        let (db, _temp) = create_test_db(&[(5, "dup.h"), (6, "dup.h")]);
        assert_eq!(db.file_id(&exact("dup.h")).unwrap(), 5);
    }

    #[test]
    fn pattern_mode_resolves_through_regexp() {
        let (db, _temp) = create_test_db(&[(1, "math.c"), (2, "main.c")]);
        let matcher = Matcher::new(
            Some(Target::Name("^MATH".to_string())),
            MatchMode::Pattern,
        )
        .unwrap();
        assert_eq!(db.file_id(&matcher).unwrap(), 1);
    }

    #[test]
    fn regexp_function_is_case_insensitive_and_null_safe() {
        let (db, _temp) = create_test_db(&[]);
        let hit: bool = db
            .conn()
            .query_row("SELECT regexp('^ab', 'ABCD')", [], |row| row.get(0))
            .unwrap();
        assert!(hit);
        let miss: bool = db
            .conn()
            .query_row("SELECT regexp('^ab', NULL)", [], |row| row.get(0))
            .unwrap();
        assert!(!miss);
    }
}
