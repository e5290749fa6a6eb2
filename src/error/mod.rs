mod app;
mod config;
mod sink;
mod validation;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use sink::SinkError;
pub use validation::ValidationError;
