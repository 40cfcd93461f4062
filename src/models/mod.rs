pub mod address;
pub mod overview;
mod wire;

pub use address::*;
pub use overview::*;
