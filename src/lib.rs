pub mod constants;
pub mod error;
pub mod feeds;
pub mod handler;
pub mod infra;
pub mod logging;
pub mod pipeline;
pub mod states;
pub mod types;
