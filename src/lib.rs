pub mod cli;
pub mod config;
pub mod db;
pub mod finder;
pub mod matcher;
pub mod model;
