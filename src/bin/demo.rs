use sort_classic::{stable, unstable};

fn main() {
    let mut merge_input = [3, 3, 3, 1, 2, 3, 4];
    stable::merge_sort::sort(&mut merge_input);
    println!("{merge_input:?}");

    let mut quick_input = [1, 2, 5, 4, 3, 3, 3];
    unstable::quick_sort::sort(&mut quick_input);
    println!("{quick_input:?}");
}
