#![no_main]

use crypt_num::BigInt;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Any non-empty byte string is a valid encoding; re-encoding is minimal.
    let Ok(v) = BigInt::from_bytes(data) else {
        assert!(data.is_empty());
        return;
    };
    let bytes = v.to_byte_array();
    assert!(bytes.len() <= data.len());
    assert_eq!(BigInt::from_bytes(&bytes).unwrap(), v);
    assert_eq!(v.to_zero_filled_byte_array(data.len()).unwrap().len(), data.len());
});
