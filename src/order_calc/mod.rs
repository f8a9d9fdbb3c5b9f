pub mod actions;
pub mod dtos;
pub mod entity;
pub mod error;
pub mod validate;

pub use actions::*;
pub use dtos::*;
pub use entity::*;
pub use error::*;
pub use validate::*;
