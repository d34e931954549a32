pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod extractors;
pub mod methods;
pub mod openapi;
pub mod shutdown;
pub mod state;

pub use app::routes;
pub use state::AppState;
