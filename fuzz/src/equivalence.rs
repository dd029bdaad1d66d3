#![no_main]

use libfuzzer_sys::fuzz_target;

use stepfind::{Algorithm, Session};

fuzz_target!(|data: (&[u8], &[u8])| {
    let (text, pattern) = data;
    if pattern.is_empty() {
        return;
    }

    let mut kmp = Session::new(text, pattern, Algorithm::Kmp).unwrap();
    let mut bm = Session::new(text, pattern, Algorithm::BoyerMoore).unwrap();

    // Both engines must terminate and agree on every occurrence,
    // overlapping ones included.
    let kmp_found = kmp.run_to_end().to_vec();
    let bm_found = bm.run_to_end().to_vec();
    assert_eq!(kmp_found, bm_found);

    // Stepping after the terminal state must change nothing.
    let comparisons = kmp.comparisons();
    kmp.step();
    assert_eq!(kmp.comparisons(), comparisons);
});
