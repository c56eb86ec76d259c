//! berlab Tools library

pub mod config;
pub mod report;

pub use config::{ChannelArg, CodeArg, OutputFormat, SweepArgs};
pub use report::{to_csv, to_json, to_table};
