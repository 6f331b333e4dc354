mod classify;
mod export;
mod run;

pub use classify::run_classify;
pub use export::run_export;
pub use run::run_harvest;
