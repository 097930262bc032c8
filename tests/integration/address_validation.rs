use eth_address_validator::{
    is_checksum_valid, to_checksum_address, validate_address, AddressError,
    AddressValidation, AddressValidatorTrait, EthereumAddressValidator, Network,
};

const CHECKSUMMED_ADDRESSES: [&str; 4] = [
    "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
    "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
    "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
    "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
];

#[test]
fn test_checksummed_addresses_validate() {
    for address in CHECKSUMMED_ADDRESSES {
        let (is_valid, message) = validate_address(address, false).into();
        assert!(is_valid, "{} should be valid", address);
        assert_eq!(message, "");
    }
}

#[test]
fn test_lowercase_converts_to_checksummed() {
    for address in CHECKSUMMED_ADDRESSES {
        let lowercase = address.to_lowercase();
        assert_eq!(to_checksum_address(&lowercase).unwrap(), address);
    }
}

#[test]
fn test_uniform_case_addresses_validate() {
    let addresses = [
        "0x52908400098527886E0F7030069857D2E4169EE7",
        "0x8617E340B3D01FA5F11F306F4090FD50E238070D",
        "0xde709f2102306220921060314715629080e2fb77",
        "0x27b1fdb04752bbc536007a920d24acb045561c26",
    ];
    for address in addresses {
        assert_eq!(validate_address(address, false), AddressValidation::valid());
        assert_eq!(validate_address(address, true), AddressValidation::valid());
    }
}

#[test]
fn test_invalid_format_inputs() {
    let inputs = [
        "",
        "0x",
        "0x52908400098527886E0F7030069857D2E4169EE70",
        "0X52908400098527886E0F7030069857D2E4169EE7",
        "52908400098527886E0F7030069857D2E4169EE7",
        "0xZ2908400098527886E0F7030069857D2E4169EE7",
        " 0x52908400098527886E0F7030069857D2E4169EE7",
    ];
    for input in inputs {
        let (is_valid, message) = validate_address(input, false).into();
        assert!(!is_valid, "{:?} should be rejected", input);
        assert_eq!(message, "Invalid format");
        assert_eq!(to_checksum_address(input), Err(AddressError::InvalidFormat));
    }
}

#[test]
fn test_mixed_case_with_wrong_checksum() {
    let validation = validate_address("0xfb6916095ca1df60bb79Ce92ce3ea74c37c5d359", false);
    assert_eq!(validation.into_result(), Err(AddressError::InvalidChecksum));
    assert!(!is_checksum_valid("0xfb6916095ca1df60bb79Ce92ce3ea74c37c5d359"));
}

#[test]
fn test_validator_is_shareable_across_threads() {
    let validator = EthereumAddressValidator::new();
    let handles: Vec<_> = CHECKSUMMED_ADDRESSES
        .iter()
        .map(|address| {
            let address = address.to_string();
            std::thread::spawn(move || {
                validator.validate_address(&address, Network::Mainnet).is_valid
                    && validator.to_checksum_address(&address.to_lowercase()).as_deref()
                        == Ok(address.as_str())
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
