use crate::db::Db;
use crate::matcher::{MatchMode, Matcher, Target};
use crate::model::{
    CompoundMemberRecord, CompoundRecord, FileMemberRecord, FileRecord, FunctionRecord,
    MacroRecord, NameRecord, ParamRecord, Record, ReferenceRecord, StructRecord, SymbolRecord,
    TypedefRecord, UnionRecord, VariableRecord,
};
use anyhow::Result;
use clap::ValueEnum;
use rusqlite::types::Value;
use rusqlite::{OptionalExtension, params, params_from_iter};

/// Kind tags as stored in the definition tables by the documentation
/// generator.
mod tag {
    pub const FUNCTION: &str = "function";
    pub const VARIABLE: &str = "variable";
    pub const TYPEDEF: &str = "typedef";
    pub const MACRO_DEFINITION: &str = "macro definition";
    pub const STRUCT: &str = "struct";
    pub const UNION: &str = "union";
}

/// The lookup vocabulary. The adapter boundary (clap) is the single place
/// where raw kind strings are validated; inside the core the set is closed.
#[derive(ValueEnum, Clone, Copy, Debug, Eq, PartialEq)]
pub enum Kind {
    BaseClass,
    CompoundMembers,
    File,
    FileMembers,
    Function,
    Includees,
    Includers,
    References,
    MacroDefinition,
    ReferencedBy,
    SubClass,
    Typedef,
    Union,
    Variable,
    Params,
    Struct,
    Any,
}

impl Kind {
    pub const ALL: [Kind; 17] = [
        Kind::BaseClass,
        Kind::CompoundMembers,
        Kind::File,
        Kind::FileMembers,
        Kind::Function,
        Kind::Includees,
        Kind::Includers,
        Kind::References,
        Kind::MacroDefinition,
        Kind::ReferencedBy,
        Kind::SubClass,
        Kind::Typedef,
        Kind::Union,
        Kind::Variable,
        Kind::Params,
        Kind::Struct,
        Kind::Any,
    ];

    /// Map a kind tag from the symbol table onto a lookup kind, for href
    /// re-dispatch. Tags without a dedicated lookup (enumeration, signal,
    /// struct fields, ...) fall back to the polymorphic probe, which still
    /// resolves the row by identity.
    pub fn from_tag(tag: &str) -> Kind {
        match tag {
            tag::FUNCTION => Kind::Function,
            tag::VARIABLE => Kind::Variable,
            tag::TYPEDEF => Kind::Typedef,
            tag::MACRO_DEFINITION => Kind::MacroDefinition,
            tag::STRUCT => Kind::Struct,
            tag::UNION => Kind::Union,
            _ => Kind::Any,
        }
    }
}

/// The query catalog: one small algorithm per lookup kind, composed from
/// the matcher's predicate fragments and the file resolver on `Db`.
pub struct Finder<'a> {
    db: &'a Db,
    matcher: Matcher,
}

impl<'a> Finder<'a> {
    pub fn new(db: &'a Db, matcher: Matcher) -> Self {
        Self { db, matcher }
    }

    pub fn lookup(&self, kind: Kind, file_scope: Option<&str>) -> Result<Vec<Record>> {
        match kind {
            Kind::BaseClass => self.inheritance_walk("base_id", "derived_id"),
            Kind::CompoundMembers => self.compound_members(),
            Kind::File => self.files(),
            Kind::FileMembers => self.file_members(),
            Kind::Function => self.functions(file_scope),
            Kind::Includees => self.include_walk("src_id", "dst_id"),
            Kind::Includers => self.include_walk("dst_id", "src_id"),
            Kind::References => self.xref_peers("dst_id", "src_id"),
            Kind::MacroDefinition => self.macro_definitions(file_scope),
            Kind::ReferencedBy => self.xref_peers("src_id", "dst_id"),
            Kind::SubClass => self.inheritance_walk("derived_id", "base_id"),
            Kind::Typedef => self.typedefs(file_scope),
            Kind::Union => self.unions(file_scope),
            Kind::Variable => self.variables(file_scope),
            Kind::Params => self.params(file_scope),
            Kind::Struct => self.structs(file_scope),
            Kind::Any => self.any(),
        }
    }

    /// Shared filter for the kind-tagged listings: fixed kind tag, optional
    /// name predicate, optional file-scope predicate, AND-combined.
    fn kind_filter(
        &self,
        kind_tag: &str,
        file_scope: Option<&str>,
    ) -> Result<(String, Vec<Value>)> {
        let mut sql = "kind = ?".to_string();
        let mut bound = vec![Value::Text(kind_tag.to_string())];
        if let Some(clause) = self.matcher.clause("name") {
            sql.push_str(" AND ");
            sql.push_str(&clause.sql);
            bound.push(clause.param);
        }
        if let Some(path) = file_scope {
            sql.push_str(" AND deffile_id = ?");
            bound.push(Value::Integer(self.resolve_scope(path)?));
        }
        Ok((sql, bound))
    }

    /// File scope uses the session's match mode; an unresolved scope binds
    /// the not-found sentinel and the query returns nothing.
    fn resolve_scope(&self, path: &str) -> Result<i64> {
        let scope = Matcher::new(Some(Target::Name(path.to_string())), self.matcher.mode())?;
        self.db.file_id(&scope)
    }

    fn resolve_file(&self, file_id: Option<i64>) -> Result<String> {
        match file_id {
            Some(id) => self.db.file_name(id),
            None => Ok(String::new()),
        }
    }

    fn functions(&self, file_scope: Option<&str>) -> Result<Vec<Record>> {
        let (where_sql, bound) = self.kind_filter(tag::FUNCTION, file_scope)?;
        let sql = format!(
            "SELECT name, type, definition, argsstring, detaileddescription, deffile_id, defline
             FROM symbol_definitions WHERE {where_sql}"
        );
        let mut stmt = self.db.conn().prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(bound), |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, Option<String>>(1)?,
                row.get::<_, Option<String>>(2)?,
                row.get::<_, Option<String>>(3)?,
                row.get::<_, Option<String>>(4)?,
                row.get::<_, Option<i64>>(5)?,
                row.get::<_, Option<i64>>(6)?,
            ))
        })?;

        let mut out = Vec::new();
        for row in rows {
            let (name, type_, definition, argsstring, detaileddescription, deffile_id, defline) =
                row?;
            out.push(Record::Function(FunctionRecord {
                name,
                type_,
                definition,
                argsstring,
                detaileddescription,
                deffile: self.resolve_file(deffile_id)?,
                defline,
            }));
        }
        Ok(out)
    }

    fn variables(&self, file_scope: Option<&str>) -> Result<Vec<Record>> {
        let (where_sql, bound) = self.kind_filter(tag::VARIABLE, file_scope)?;
        let sql = format!(
            "SELECT name, definition, deffile_id, defline, rowid
             FROM symbol_definitions WHERE {where_sql}"
        );
        let mut stmt = self.db.conn().prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(bound), |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, Option<String>>(1)?,
                row.get::<_, Option<i64>>(2)?,
                row.get::<_, Option<i64>>(3)?,
                row.get::<_, i64>(4)?,
            ))
        })?;

        let mut out = Vec::new();
        for row in rows {
            let (name, definition, deffile_id, defline, id) = row?;
            out.push(Record::Variable(VariableRecord {
                name,
                definition,
                deffile: self.resolve_file(deffile_id)?,
                defline,
                id,
            }));
        }
        Ok(out)
    }

    fn typedefs(&self, file_scope: Option<&str>) -> Result<Vec<Record>> {
        let (where_sql, bound) = self.kind_filter(tag::TYPEDEF, file_scope)?;
        let sql = format!(
            "SELECT name, definition, deffile_id, defline, briefdescription, detaileddescription
             FROM symbol_definitions WHERE {where_sql}"
        );
        let mut stmt = self.db.conn().prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(bound), |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, Option<String>>(1)?,
                row.get::<_, Option<i64>>(2)?,
                row.get::<_, Option<i64>>(3)?,
                row.get::<_, Option<String>>(4)?,
                row.get::<_, Option<String>>(5)?,
            ))
        })?;

        let mut out = Vec::new();
        for row in rows {
            let (name, definition, deffile_id, defline, briefdescription, detaileddescription) =
                row?;
            out.push(Record::Typedef(TypedefRecord {
                name,
                definition,
                deffile: self.resolve_file(deffile_id)?,
                defline,
                briefdescription,
                detaileddescription,
            }));
        }
        Ok(out)
    }

    /// Macro definitions project the initializer text as `definition` and
    /// drop the args fragment for object-like macros.
    fn macro_definitions(&self, file_scope: Option<&str>) -> Result<Vec<Record>> {
        let (where_sql, bound) = self.kind_filter(tag::MACRO_DEFINITION, file_scope)?;
        let sql = format!(
            "SELECT name, argsstring, initializer, deffile_id, defline
             FROM symbol_definitions WHERE {where_sql}"
        );
        let mut stmt = self.db.conn().prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(bound), |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, Option<String>>(1)?,
                row.get::<_, Option<String>>(2)?,
                row.get::<_, Option<i64>>(3)?,
                row.get::<_, Option<i64>>(4)?,
            ))
        })?;

        let mut out = Vec::new();
        for row in rows {
            let (name, argsstring, initializer, deffile_id, defline) = row?;
            out.push(Record::Macro(MacroRecord {
                name,
                argsstring,
                definition: initializer,
                deffile: self.resolve_file(deffile_id)?,
                defline,
            }));
        }
        Ok(out)
    }

    fn structs(&self, file_scope: Option<&str>) -> Result<Vec<Record>> {
        let (where_sql, bound) = self.kind_filter(tag::STRUCT, file_scope)?;
        let sql = format!(
            "SELECT name, deffile_id, defline, rowid, briefdescription, detaileddescription
             FROM compound_definitions WHERE {where_sql}"
        );
        let mut stmt = self.db.conn().prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(bound), |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, Option<i64>>(1)?,
                row.get::<_, Option<i64>>(2)?,
                row.get::<_, i64>(3)?,
                row.get::<_, Option<String>>(4)?,
                row.get::<_, Option<String>>(5)?,
            ))
        })?;

        let mut out = Vec::new();
        for row in rows {
            let (name, deffile_id, defline, id, briefdescription, detaileddescription) = row?;
            out.push(Record::Struct(StructRecord {
                name,
                deffile: self.resolve_file(deffile_id)?,
                defline,
                id,
                briefdescription,
                detaileddescription,
            }));
        }
        Ok(out)
    }

    fn unions(&self, file_scope: Option<&str>) -> Result<Vec<Record>> {
        let (where_sql, bound) = self.kind_filter(tag::UNION, file_scope)?;
        let sql = format!(
            "SELECT name, deffile_id, defline, briefdescription, detaileddescription
             FROM compound_definitions WHERE {where_sql}"
        );
        let mut stmt = self.db.conn().prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(bound), |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, Option<i64>>(1)?,
                row.get::<_, Option<i64>>(2)?,
                row.get::<_, Option<String>>(3)?,
                row.get::<_, Option<String>>(4)?,
            ))
        })?;

        let mut out = Vec::new();
        for row in rows {
            let (name, deffile_id, defline, briefdescription, detaileddescription) = row?;
            out.push(Record::Union(UnionRecord {
                name,
                deffile: self.resolve_file(deffile_id)?,
                defline,
                briefdescription,
                detaileddescription,
            }));
        }
        Ok(out)
    }

    fn files(&self) -> Result<Vec<Record>> {
        let Some(clause) = self.matcher.clause("name") else {
            return Ok(Vec::new());
        };
        let sql = format!("SELECT rowid, name FROM files WHERE {}", clause.sql);
        let mut stmt = self.db.conn().prepare(&sql)?;
        let rows = stmt.query_map(params![clause.param], |row| {
            Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut out = Vec::new();
        for row in rows {
            let (id, name) = row?;
            out.push(Record::File(FileRecord { name, id }));
        }
        Ok(out)
    }

    /// All symbols defined in the identified file, mixed kinds.
    fn file_members(&self) -> Result<Vec<Record>> {
        let file_id = self.db.file_id(&self.matcher)?;
        let mut stmt = self.db.conn().prepare(
            "SELECT kind, name, argsstring, briefdescription, detaileddescription,
                    deffile_id, defline
             FROM symbol_definitions WHERE deffile_id = ?",
        )?;
        let rows = stmt.query_map(params![file_id], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, Option<String>>(2)?,
                row.get::<_, Option<String>>(3)?,
                row.get::<_, Option<String>>(4)?,
                row.get::<_, Option<i64>>(5)?,
                row.get::<_, Option<i64>>(6)?,
            ))
        })?;

        let mut out = Vec::new();
        for row in rows {
            let (kind, name, argsstring, briefdescription, detaileddescription, deffile_id, defline) =
                row?;
            out.push(Record::FileMember(FileMemberRecord {
                kind,
                name,
                argsstring,
                briefdescription,
                detaileddescription,
                deffile: self.resolve_file(deffile_id)?,
                defline,
            }));
        }
        Ok(out)
    }

    /// Members of a struct/class/union/namespace: symbols whose scope
    /// column matches the identifier.
    fn compound_members(&self) -> Result<Vec<Record>> {
        let Some(clause) = self.matcher.clause("scope") else {
            return Ok(Vec::new());
        };
        let sql = format!(
            "SELECT name, kind, definition, argsstring, detaileddescription, deffile_id, defline
             FROM symbol_definitions WHERE {}",
            clause.sql
        );
        let mut stmt = self.db.conn().prepare(&sql)?;
        let rows = stmt.query_map(params![clause.param], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, Option<String>>(2)?,
                row.get::<_, Option<String>>(3)?,
                row.get::<_, Option<String>>(4)?,
                row.get::<_, Option<i64>>(5)?,
                row.get::<_, Option<i64>>(6)?,
            ))
        })?;

        let mut out = Vec::new();
        for row in rows {
            let (name, kind, definition, argsstring, detaileddescription, deffile_id, defline) =
                row?;
            out.push(Record::CompoundMember(CompoundMemberRecord {
                name,
                kind,
                definition,
                argsstring,
                detaileddescription,
                deffile: self.resolve_file(deffile_id)?,
                defline,
            }));
        }
        Ok(out)
    }

    /// Walk one hop of the inheritance edge. `join_side` is the role to
    /// return, `filter_side` the role matched against the identifier.
    fn inheritance_walk(&self, join_side: &str, filter_side: &str) -> Result<Vec<Record>> {
        let Some(clause) = self.matcher.clause("name") else {
            return Ok(Vec::new());
        };
        let sql = format!(
            "SELECT compound_definitions.name FROM compound_definitions
             JOIN inheritance ON compound_definitions.rowid = inheritance.{join_side}
             WHERE inheritance.{filter_side} IN
                 (SELECT rowid FROM compound_definitions WHERE {})",
            clause.sql
        );
        let mut stmt = self.db.conn().prepare(&sql)?;
        let rows = stmt.query_map(params![clause.param], |row| row.get::<_, String>(0))?;

        let mut out = Vec::new();
        for name in rows {
            out.push(Record::Name(NameRecord { name: name? }));
        }
        Ok(out)
    }

    /// Walk one hop of the include edge, resolving the peer file id back to
    /// its path.
    fn include_walk(&self, filter_side: &str, peer_side: &str) -> Result<Vec<Record>> {
        let file_id = self.db.file_id(&self.matcher)?;
        let sql = format!("SELECT {peer_side} FROM includes WHERE {filter_side} = ?");
        let mut stmt = self.db.conn().prepare(&sql)?;
        let rows = stmt.query_map(params![file_id], |row| row.get::<_, i64>(0))?;

        let mut out = Vec::new();
        for peer in rows {
            out.push(Record::Name(NameRecord {
                name: self.db.file_name(peer?)?,
            }));
        }
        Ok(out)
    }

    /// Two-hop cross-reference resolution: identifier to the first matching
    /// symbol rowid, then every edge touching it on `filter_side`, then the
    /// peer symbol's body location.
    fn xref_peers(&self, filter_side: &str, peer_side: &str) -> Result<Vec<Record>> {
        let Some(clause) = self.matcher.clause("name") else {
            return Ok(Vec::new());
        };
        let target: Option<i64> = self
            .db
            .conn()
            .query_row(
                &format!(
                    "SELECT rowid FROM symbol_definitions WHERE {} ORDER BY rowid LIMIT 1",
                    clause.sql
                ),
                params![clause.param],
                |row| row.get(0),
            )
            .optional()?;
        let Some(target) = target else {
            return Ok(Vec::new());
        };

        let sql = format!("SELECT {peer_side} FROM cross_references WHERE {filter_side} = ?");
        let mut stmt = self.db.conn().prepare(&sql)?;
        let peers = stmt.query_map(params![target], |row| row.get::<_, i64>(0))?;

        let mut out = Vec::new();
        for peer in peers {
            let peer = peer?;
            let row: Option<(String, Option<i64>, Option<i64>, Option<i64>)> = self
                .db
                .conn()
                .query_row(
                    "SELECT name, bodyfile_id, bodystart, bodyend
                     FROM symbol_definitions WHERE rowid = ?",
                    params![peer],
                    |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
                )
                .optional()?;
            // Dangling edges (peer row gone) are skipped, not errors.
            if let Some((name, bodyfile_id, bodystart, bodyend)) = row {
                out.push(Record::Reference(ReferenceRecord {
                    file: self.resolve_file(bodyfile_id)?,
                    name,
                    bodystart,
                    bodyend,
                }));
            }
        }
        Ok(out)
    }

    /// Resolve the identifier to symbol rowids only. The join to actual
    /// parameter rows is a known gap carried over from the upstream schema;
    /// the resolve-to-id contract is what this kind guarantees.
    fn params(&self, file_scope: Option<&str>) -> Result<Vec<Record>> {
        let Some(clause) = self.matcher.clause("name") else {
            return Ok(Vec::new());
        };
        let mut sql = format!(
            "SELECT rowid FROM symbol_definitions WHERE {}",
            clause.sql
        );
        let mut bound = vec![clause.param];
        if let Some(path) = file_scope {
            sql.push_str(" AND deffile_id = ?");
            bound.push(Value::Integer(self.resolve_scope(path)?));
        }
        let mut stmt = self.db.conn().prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(bound), |row| row.get::<_, i64>(0))?;

        let mut out = Vec::new();
        for id in rows {
            out.push(Record::Param(ParamRecord { id: id? }));
        }
        Ok(out)
    }

    /// Polymorphic probe. Symbol names take precedence over compound names
    /// when both exist, so the symbol probe runs first and short-circuits.
    fn any(&self) -> Result<Vec<Record>> {
        let symbols = self.any_symbols()?;
        if !symbols.is_empty() {
            return Ok(symbols);
        }
        self.any_compounds()
    }

    fn any_symbols(&self) -> Result<Vec<Record>> {
        let Some(clause) = self.matcher.clause("name") else {
            return Ok(Vec::new());
        };
        let sql = format!(
            "SELECT kind, type, name, definition, argsstring, deffile_id, defline,
                    briefdescription, detaileddescription
             FROM symbol_definitions WHERE {}",
            clause.sql
        );
        let mut stmt = self.db.conn().prepare(&sql)?;
        let rows = stmt.query_map(params![clause.param], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, Option<String>>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, Option<String>>(3)?,
                row.get::<_, Option<String>>(4)?,
                row.get::<_, Option<i64>>(5)?,
                row.get::<_, Option<i64>>(6)?,
                row.get::<_, Option<String>>(7)?,
                row.get::<_, Option<String>>(8)?,
            ))
        })?;

        let mut out = Vec::new();
        for row in rows {
            let (
                kind,
                type_,
                name,
                definition,
                argsstring,
                deffile_id,
                defline,
                briefdescription,
                detaileddescription,
            ) = row?;
            out.push(Record::Symbol(SymbolRecord {
                kind,
                type_,
                name,
                definition,
                argsstring,
                deffile: self.resolve_file(deffile_id)?,
                defline,
                briefdescription,
                detaileddescription,
            }));
        }
        Ok(out)
    }

    fn any_compounds(&self) -> Result<Vec<Record>> {
        let Some(clause) = self.matcher.clause("name") else {
            return Ok(Vec::new());
        };
        let sql = format!(
            "SELECT name, kind, deffile_id, defline, briefdescription, detaileddescription
             FROM compound_definitions WHERE {}",
            clause.sql
        );
        let mut stmt = self.db.conn().prepare(&sql)?;
        let rows = stmt.query_map(params![clause.param], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, Option<i64>>(2)?,
                row.get::<_, Option<i64>>(3)?,
                row.get::<_, Option<String>>(4)?,
                row.get::<_, Option<String>>(5)?,
            ))
        })?;

        let mut out = Vec::new();
        for row in rows {
            let (name, kind, deffile_id, defline, briefdescription, detaileddescription) = row?;
            out.push(Record::Compound(CompoundRecord {
                name,
                kind,
                deffile: self.resolve_file(deffile_id)?,
                defline,
                briefdescription,
                detaileddescription,
            }));
        }
        Ok(out)
    }
}

/// Resolve a raw rowid of unknown entity type. Symbols are checked before
/// compounds; a hit re-dispatches through the finder in identity mode with
/// the row's own kind (symbols) or the struct kind (compounds, which are
/// not differentiated by sub-kind here). An id in neither table yields an
/// empty result.
pub fn find_href(db: &Db, rowid: i64) -> Result<Vec<Record>> {
    let symbol_kind: Option<String> = db
        .conn()
        .query_row(
            "SELECT kind FROM symbol_definitions WHERE rowid = ?",
            params![rowid],
            |row| row.get(0),
        )
        .optional()?;
    if let Some(kind_tag) = symbol_kind {
        let finder = Finder::new(db, Matcher::by_rowid(rowid));
        return finder.lookup(Kind::from_tag(&kind_tag), None);
    }

    let compound: Option<i64> = db
        .conn()
        .query_row(
            "SELECT rowid FROM compound_definitions WHERE rowid = ?",
            params![rowid],
            |row| row.get(0),
        )
        .optional()?;
    if compound.is_some() {
        let finder = Finder::new(db, Matcher::by_rowid(rowid));
        return finder.lookup(Kind::Struct, None);
    }

    Ok(Vec::new())
}

/// Build the matcher for one lookup session from raw adapter inputs.
pub fn session_matcher(identifier: Option<String>, regex_mode: bool) -> Result<Matcher> {
    let mode = if regex_mode {
        MatchMode::Pattern
    } else {
        MatchMode::Exact
    };
    Matcher::new(identifier.map(Target::Name), mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_set_is_exhaustive() {
        assert_eq!(Kind::ALL.len(), 17);
    }

    #[test]
    fn from_tag_maps_known_kinds() {
        assert_eq!(Kind::from_tag("function"), Kind::Function);
        assert_eq!(Kind::from_tag("variable"), Kind::Variable);
        assert_eq!(Kind::from_tag("typedef"), Kind::Typedef);
        assert_eq!(Kind::from_tag("macro definition"), Kind::MacroDefinition);
        assert_eq!(Kind::from_tag("struct"), Kind::Struct);
        assert_eq!(Kind::from_tag("union"), Kind::Union);
    }

    #[test]
    fn from_tag_falls_back_to_any() {
        assert_eq!(Kind::from_tag("enumeration"), Kind::Any);
        assert_eq!(Kind::from_tag("signal"), Kind::Any);
    }
}
