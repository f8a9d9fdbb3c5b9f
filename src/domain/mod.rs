pub mod money;
pub mod product;
pub mod service;

pub use money::*;
pub use product::*;
pub use service::*;
