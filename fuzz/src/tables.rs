#![no_main]

use libfuzzer_sys::fuzz_target;

use stepfind::{BadCharTable, LpsTable};

fuzz_target!(|pattern: &[u8]| {
    if pattern.is_empty() {
        return;
    }
    let m = pattern.len();

    let lps = LpsTable::build(pattern).unwrap();
    let lps = lps.as_slice();
    assert_eq!(lps[0], 0);
    for (i, &len) in lps.iter().enumerate() {
        assert!(len <= i);
        assert_eq!(pattern[..len], pattern[i + 1 - len..=i]);
    }

    let table = BadCharTable::build(pattern).unwrap();
    for byte in 0..=255u8 {
        match pattern.iter().rposition(|&b| b == byte) {
            Some(k) => assert_eq!(table.offset(byte), m - 1 - k),
            None => assert_eq!(table.offset(byte), m),
        }
    }
});
