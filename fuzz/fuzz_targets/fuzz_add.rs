#![no_main]

use libfuzzer_sys::fuzz_target;

use fibdev_core::bignum::BigNum;

fuzz_target!(|data: &[u8]| {
    if data.len() < 32 {
        return;
    }
    let mut lhs = [0u8; 16];
    let mut rhs = [0u8; 16];
    lhs.copy_from_slice(&data[..16]);
    rhs.copy_from_slice(&data[16..32]);
    let (x, y) = (u128::from_le_bytes(lhs), u128::from_le_bytes(rhs));

    // Limb addition must agree with native wrapping addition
    let sum = BigNum::from(x).add(BigNum::from(y));
    assert_eq!(u128::from(sum), x.wrapping_add(y));
});
