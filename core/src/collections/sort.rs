use std::cmp::Ordering;

/// Stable top-down merge sort.
pub fn merge_sort<T: Ord + Clone>(items: &mut [T]) {
    if items.len() < 2 {
        return;
    }
    let mid: usize = items.len() / 2;
    merge_sort(&mut items[..mid]);
    merge_sort(&mut items[mid..]);
    merge(items, mid);
}

/// Merges the sorted halves `items[..mid]` and `items[mid..]` in place.
fn merge<T: Ord + Clone>(items: &mut [T], mid: usize) {
    let left: Vec<T> = items[..mid].to_vec();
    let right: Vec<T> = items[mid..].to_vec();

    let (mut i, mut j) = (0, 0);
    for slot in items.iter_mut() {
        // `<=` keeps equal elements in their original order.
        let take_left: bool = j >= right.len() || (i < left.len() && left[i] <= right[j]);
        if take_left {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
    }
}

/// Sorts and returns the given items.
pub fn sorted<T: Ord>(mut items: Vec<T>) -> Vec<T> {
    items.sort();
    items
}

/// Sorts and returns the given items using `compare`.
pub fn sorted_by<T, F>(mut items: Vec<T>, compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    items.sort_by(compare);
    items
}

/// Sorts and returns the given floats by IEEE 754 total order.
///
/// `-0.0` sorts before `0.0`. A NaN is placed by its sign bit: positive
/// NaN after `+inf`, negative NaN before `-inf`.
pub fn sorted_floats(items: Vec<f64>) -> Vec<f64> {
    sorted_by(items, f64::total_cmp)
}
