#[macro_use]
extern crate afl;

use sort_classic::unstable::quick_sort as test_sort;

fn main() {
    fuzz!(|data: &[u8]| {
        let mut v = data.to_vec();
        test_sort::sort(&mut v);

        assert!(v.windows(2).all(|w| w[0] <= w[1]));
    });
}
