#![no_main]

use libfuzzer_sys::fuzz_target;

use sort_kit::stable as test_sort;

fuzz_target!(|data: &[u8]| {
    // The high nibble is the key, the index records the input position among equal keys.
    let mut v = data
        .iter()
        .enumerate()
        .map(|(i, byte)| (byte >> 4, i))
        .collect::<Vec<_>>();
    test_sort::sort_by_less(&mut v, |a, b| a.0 < b.0);
    assert!(v.windows(2).all(|w| w[0] < w[1]));
});
