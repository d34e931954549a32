pub mod memory;
pub mod steps;
pub mod world;
