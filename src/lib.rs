pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::reference::{load_reference_data, HttpReferenceSource, ReferenceData};
pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use core::{preview::Preview, reducer::FormEvent, session::QuoteSession};
pub use domain::model::QuoteForm;
pub use utils::error::{QuoteError, Result};
