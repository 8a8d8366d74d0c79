use crate::finder::Kind;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "doxq",
    version,
    about = "Query a doxygen-style sqlite3 cross-reference database",
    after_help = r#"Examples:
  doxq -k function getName
  doxq -r -k function '^get_.*'
  doxq -k file-members src/main.c
  doxq -k references add
  doxq --href 42
"#
)]
pub struct Args {
    /// Symbol or file name to look up (absent means "no name filter" for
    /// the kind-tagged listings).
    pub identifier: Option<String>,

    /// Use database <DBNAME> for queries.
    #[arg(short = 'd', long)]
    pub dbname: Option<PathBuf>,

    /// Restrict matches to symbols defined in this file.
    #[arg(short = 'f', long)]
    pub fname: Option<String>,

    /// Show info about this href id (bypasses kind selection).
    #[arg(short = 'H', long)]
    pub href: Option<i64>,

    /// Treat <IDENTIFIER> as a case-insensitive regular expression.
    #[arg(short = 'r', long)]
    pub regex: bool,

    /// Do a search for this kind of <IDENTIFIER>.
    #[arg(short = 'k', long, value_enum, default_value = "any")]
    pub kind: Kind,
}
