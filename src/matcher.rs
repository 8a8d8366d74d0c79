use crate::config::Config;
use anyhow::{Result, bail};
use rusqlite::types::Value;

/// How a textual identifier is compared against a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    Exact,
    Pattern,
}

/// What the caller is looking up: a textual identifier, or a raw rowid when
/// resolving by identity (href hydration).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Name(String),
    RowId(i64),
}

/// A single WHERE fragment with its bound parameter.
///
/// Column names are compile-time constants chosen by the finder; the user
/// value only ever travels through the parameter slot.
#[derive(Debug, Clone)]
pub struct Clause {
    pub sql: String,
    pub param: Value,
}

/// Builds predicate fragments for one lookup session.
///
/// The same matcher is reused across several columns within one lookup
/// (`name`, then `scope`), so the fragment is selected fresh on every
/// `clause` call:
/// - rowid targets always bind on table identity, whatever the column;
/// - pattern mode routes through the `regexp` scalar function registered on
///   the connection (case-insensitive, full regex syntax);
/// - otherwise a plain equality test on the column.
#[derive(Debug, Clone)]
pub struct Matcher {
    target: Option<Target>,
    mode: MatchMode,
}

impl Matcher {
    pub fn new(target: Option<Target>, mode: MatchMode) -> Result<Self> {
        if mode == MatchMode::Pattern {
            if let Some(Target::Name(pattern)) = &target {
                let max_length = Config::get().pattern_max_length;
                if pattern.len() > max_length {
                    bail!(
                        "pattern too long: {} bytes (max: {})",
                        pattern.len(),
                        max_length
                    );
                }
            }
        }
        Ok(Self { target, mode })
    }

    /// Identity matcher for href resolution. No pattern to validate.
    pub fn by_rowid(id: i64) -> Self {
        Self {
            target: Some(Target::RowId(id)),
            mode: MatchMode::Exact,
        }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn target(&self) -> Option<&Target> {
        self.target.as_ref()
    }

    pub fn has_target(&self) -> bool {
        self.target.is_some()
    }

    /// Predicate fragment for `column`, or `None` when there is nothing to
    /// match on (the caller decides whether that means "unfiltered" or
    /// "empty result").
    pub fn clause(&self, column: &str) -> Option<Clause> {
        match &self.target {
            None => None,
            Some(Target::RowId(id)) => Some(Clause {
                sql: "rowid = ?".to_string(),
                param: Value::Integer(*id),
            }),
            Some(Target::Name(name)) => match self.mode {
                MatchMode::Pattern => Some(Clause {
                    sql: format!("regexp(?, {column})"),
                    param: Value::Text(name.clone()),
                }),
                MatchMode::Exact => Some(Clause {
                    sql: format!("{column} = ?"),
                    param: Value::Text(name.clone()),
                }),
            },
        }
    }
}
