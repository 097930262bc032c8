mod checksum;
pub use checksum::*;
