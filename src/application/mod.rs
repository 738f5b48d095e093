pub mod coordinator;
pub mod display_controller;

pub use coordinator::*;
pub use display_controller::*;
