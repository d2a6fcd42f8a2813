pub mod errors;
pub mod movement;

pub use errors::*;
pub use movement::*;
