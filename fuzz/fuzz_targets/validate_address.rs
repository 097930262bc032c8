#![no_main]

use eth_address_validator::{to_checksum_address, validate_address};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    let _ = validate_address(input, false);

    if let Ok(checksummed) = to_checksum_address(input) {
        assert!(validate_address(&checksummed, false).is_valid);
        assert_eq!(to_checksum_address(&checksummed).ok(), Some(checksummed));
    }
});
