mod error;
pub use error::*;

mod address;
pub use address::*;
