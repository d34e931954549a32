pub mod entities;
pub mod errors_service;
pub mod repository;
pub mod role_service;
pub mod user_service;
pub mod util;

pub use entities::*;
pub use errors_service::*;
pub use role_service::*;
pub use user_service::*;
