use sort_test_tools::instantiate_sort_tests;

use sort_classic::stable::merge_sort;

instantiate_sort_tests!(merge_sort::SortImpl);

#[test]
fn fixed_sample_array() {
    let mut arr = [3, 3, 3, 1, 2, 3, 4];
    merge_sort::sort(&mut arr);
    assert_eq!(arr, [1, 2, 3, 3, 3, 3, 4]);
}

#[test]
fn degenerate_len() {
    let mut empty: [i32; 0] = [];
    merge_sort::sort(&mut empty);
    assert_eq!(empty, []);

    let mut single = [5];
    merge_sort::sort(&mut single);
    assert_eq!(single, [5]);

    let mut pair = [2, 1];
    merge_sort::sort(&mut pair);
    assert_eq!(pair, [1, 2]);
}
