use anyhow::Result;
use clap::Parser;
use doxq::config::Config;
use doxq::db::Db;
use doxq::model::Record;
use doxq::{cli, finder};
use serde_json::json;
use std::path::PathBuf;

fn run(args: &cli::Args) -> Result<Vec<Record>> {
    let db_path = args
        .dbname
        .clone()
        .unwrap_or_else(|| PathBuf::from(&Config::get().db_name));
    let db = Db::open(&db_path)?;

    if let Some(href) = args.href {
        return finder::find_href(&db, href);
    }

    let matcher = finder::session_matcher(args.identifier.clone(), args.regex)?;
    finder::Finder::new(&db, matcher).lookup(args.kind, args.fname.as_deref())
}

fn main() -> Result<()> {
    let args = cli::Args::parse();

    match run(&args) {
        Ok(records) => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({ "result": records, "error": null }))?
            );
            Ok(())
        }
        Err(err) => {
            println!(
                "{}",
                serde_json::to_string_pretty(
                    &json!({ "result": null, "error": err.to_string() })
                )?
            );
            std::process::exit(1);
        }
    }
}
