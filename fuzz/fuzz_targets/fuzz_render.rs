#![no_main]

use libfuzzer_sys::fuzz_target;

use fibdev_core::bignum::BigNum;
use fibdev_core::render::render_decimal;

fuzz_target!(|data: &[u8]| {
    if data.len() < 16 {
        return;
    }
    // First 16 bytes are the value, little-endian
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&data[..16]);
    let value = u128::from_le_bytes(bytes);

    let rendered = render_decimal(BigNum::from(value));
    assert_eq!(rendered, value.to_string());
});
