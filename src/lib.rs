pub mod athletes;
pub mod bundle;
pub mod config;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod pipeline;
