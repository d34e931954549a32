pub mod given;
pub mod then_role;
pub mod then_user;
pub mod when_role;
pub mod when_user;
