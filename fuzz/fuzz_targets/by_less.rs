#![no_main]

use libfuzzer_sys::fuzz_target;

use sort_kit::unstable as test_sort;

// Arbitrary, possibly inconsistent predicate answers driven by the input. The sort may produce
// any order, but must keep every element.
fuzz_target!(|data: &[u8]| {
    let Some((answers, values)) = data.split_first() else {
        return;
    };
    let mut bits = u64::from(*answers) | 1;

    let mut v = values.to_vec();
    test_sort::sort_by_less(&mut v, |_, _| {
        bits = bits.rotate_left(1) ^ 0x9e37_79b9;
        (bits & 1) == 1
    });

    let mut before = values.to_vec();
    before.sort_unstable();
    v.sort_unstable();
    assert_eq!(v, before);
});
