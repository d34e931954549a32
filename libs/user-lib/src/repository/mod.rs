pub mod errors;
pub mod models;
pub mod role_repository;
pub mod traits;
pub mod user_repository;

pub use errors::UserRepositoryError;
pub use role_repository::RoleRepository;
pub use traits::{RoleRepositoryTrait, UserRepositoryTrait};
pub use user_repository::UserRepository;
