// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod aggregate;
pub mod csv;
pub mod data;
pub mod error;
pub mod extract;
pub mod file;
pub mod gui;
pub mod model;
pub mod pipeline;
pub mod progress;
pub mod scrape;
pub mod xlsx;

pub use error::{Error, Result};
pub use model::{AggregatedEntry, AllowList, Source, SourceRecord};
