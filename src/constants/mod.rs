mod address;
pub use address::*;

mod logging;
pub use logging::*;
