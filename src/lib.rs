//! searchtruth: a command-line front end for SearchTruth.com.
//!
//! Searches Quran verses, Hadith collections and the Arabic/English
//! dictionary, and lists cities with prayer times for a country. Fetching
//! and extraction live in the `searchtruth-engine` crate; this crate adds
//! configuration, reference catalogs, input parsing and terminal rendering.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod render;

pub use config::{AppConfig, Limits};
pub use error::{AppError, Result};
