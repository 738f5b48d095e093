//! Chart aggregate: line chart configuration and the surface it is drawn on.

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use services::*;
pub use value_objects::*;
