pub mod config;
pub mod logging;

pub mod batch;
pub mod classify;
pub mod download;
pub mod error;
pub mod history;
pub mod snapshot;
pub mod url_model;
