pub mod backend;
pub mod config;
pub mod errors;
pub mod events;
pub mod models;
pub mod reconcile;
pub mod services;
pub mod store;

pub use errors::CoreError;
pub use services::Dashboard;
