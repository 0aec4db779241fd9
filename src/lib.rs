//! Dossier - static HTML dossier generator
//!
//! This library builds the descriptive dossier of an arts/technology project:
//! a single HTML document with its screen stylesheet, print stylesheet and
//! chart script. Budget figures come from an optional spreadsheet and fall
//! back to built-in defaults.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Run settings and artifact paths
//! - `error`: Custom error types
//! - `models`: Money, budget and project content records
//! - `content`: Built-in project content and content-file loading
//! - `extract`: Budget extraction from spreadsheets
//! - `render`: Template rendering and static assets
//! - `output`: Atomic artifact writing
//! - `services`: The generation pipeline
//! - `display`: Terminal formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use dossier::config::Settings;
//! use dossier::services::GenerateService;
//!
//! let settings = Settings::default();
//! let report = GenerateService::new(&settings).generate(chrono::Local::now().date_naive())?;
//! ```

pub mod config;
pub mod content;
pub mod display;
pub mod error;
pub mod extract;
pub mod models;
pub mod output;
pub mod render;
pub mod services;

pub use error::{DossierError, DossierResult};
