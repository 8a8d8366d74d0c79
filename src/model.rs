use serde::Serialize;

/// One row of a lookup result.
///
/// Each lookup kind projects its own field subset, so every kind gets its own
/// record type; serialization stays flat (untagged) so the output mirrors the
/// row shape of the underlying table.
#[derive(Debug, Serialize, Clone)]
#[serde(untagged)]
pub enum Record {
    Function(FunctionRecord),
    Variable(VariableRecord),
    Typedef(TypedefRecord),
    Macro(MacroRecord),
    Struct(StructRecord),
    Union(UnionRecord),
    File(FileRecord),
    FileMember(FileMemberRecord),
    CompoundMember(CompoundMemberRecord),
    Name(NameRecord),
    Reference(ReferenceRecord),
    Param(ParamRecord),
    Symbol(SymbolRecord),
    Compound(CompoundRecord),
}

#[derive(Debug, Serialize, Clone)]
pub struct FunctionRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub definition: Option<String>,
    pub argsstring: Option<String>,
    pub detaileddescription: Option<String>,
    pub deffile: String,
    pub defline: Option<i64>,
}

#[derive(Debug, Serialize, Clone)]
pub struct VariableRecord {
    pub name: String,
    pub definition: Option<String>,
    pub deffile: String,
    pub defline: Option<i64>,
    pub id: i64,
}

#[derive(Debug, Serialize, Clone)]
pub struct TypedefRecord {
    pub name: String,
    pub definition: Option<String>,
    pub deffile: String,
    pub defline: Option<i64>,
    pub briefdescription: Option<String>,
    pub detaileddescription: Option<String>,
}

/// Macro definitions report their initializer text in the `definition` field;
/// the args fragment is omitted entirely for object-like macros.
#[derive(Debug, Serialize, Clone)]
pub struct MacroRecord {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub argsstring: Option<String>,
    pub definition: Option<String>,
    pub deffile: String,
    pub defline: Option<i64>,
}

#[derive(Debug, Serialize, Clone)]
pub struct StructRecord {
    pub name: String,
    pub deffile: String,
    pub defline: Option<i64>,
    pub id: i64,
    pub briefdescription: Option<String>,
    pub detaileddescription: Option<String>,
}

#[derive(Debug, Serialize, Clone)]
pub struct UnionRecord {
    pub name: String,
    pub deffile: String,
    pub defline: Option<i64>,
    pub briefdescription: Option<String>,
    pub detaileddescription: Option<String>,
}

#[derive(Debug, Serialize, Clone)]
pub struct FileRecord {
    pub name: String,
    pub id: i64,
}

#[derive(Debug, Serialize, Clone)]
pub struct FileMemberRecord {
    pub kind: String,
    pub name: String,
    pub argsstring: Option<String>,
    pub briefdescription: Option<String>,
    pub detaileddescription: Option<String>,
    pub deffile: String,
    pub defline: Option<i64>,
}

#[derive(Debug, Serialize, Clone)]
pub struct CompoundMemberRecord {
    pub name: String,
    pub kind: String,
    pub definition: Option<String>,
    pub argsstring: Option<String>,
    pub detaileddescription: Option<String>,
    pub deffile: String,
    pub defline: Option<i64>,
}

/// Bare name projection shared by the relation-walking kinds
/// (base-class, sub-class, includees, includers).
#[derive(Debug, Serialize, Clone)]
pub struct NameRecord {
    pub name: String,
}

/// A cross-reference peer: the body location of the symbol on the other
/// side of the edge.
#[derive(Debug, Serialize, Clone)]
pub struct ReferenceRecord {
    pub file: String,
    pub name: String,
    pub bodystart: Option<i64>,
    pub bodyend: Option<i64>,
}

#[derive(Debug, Serialize, Clone)]
pub struct ParamRecord {
    pub id: i64,
}

/// Full symbol projection returned by the `any` probe.
#[derive(Debug, Serialize, Clone)]
pub struct SymbolRecord {
    pub kind: String,
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub name: String,
    pub definition: Option<String>,
    pub argsstring: Option<String>,
    pub deffile: String,
    pub defline: Option<i64>,
    pub briefdescription: Option<String>,
    pub detaileddescription: Option<String>,
}

/// Compound projection returned by the `any` probe when no symbol matched.
#[derive(Debug, Serialize, Clone)]
pub struct CompoundRecord {
    pub name: String,
    pub kind: String,
    pub deffile: String,
    pub defline: Option<i64>,
    pub briefdescription: Option<String>,
    pub detaileddescription: Option<String>,
}
