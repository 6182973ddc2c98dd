pub mod config;
pub mod logging;

// Fetch pipeline; `fetch::fetch_dataset` drives the other modules.
pub mod audit;
pub mod console;
pub mod fetch;
pub mod prepare;
pub mod probe;
pub mod sync;
