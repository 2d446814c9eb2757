pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod forge;
pub mod git;
pub mod ui;

pub use error::{PrComposeError, Result};
