pub mod config;
pub mod dataset;
pub mod error;

pub use config::{CONFIG_ENV, Config};
pub use dataset::{DATA_ENV, DEFAULT_DATA_PATH, Dataset, resolve_data_path};
pub use error::{DataError, Result};
