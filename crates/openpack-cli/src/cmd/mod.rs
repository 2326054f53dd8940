pub mod config;
pub mod convert;
pub mod docs;
pub mod taxonomy;
