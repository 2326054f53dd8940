pub mod activity;
pub mod annotation;
pub mod config;
pub mod docgen;
pub mod error;
pub mod io;
pub mod paths;
pub mod stream;
pub mod taxonomy;

pub use error::{OpenPackError, Result};
