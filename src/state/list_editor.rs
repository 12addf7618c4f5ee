//! By-value editing helpers for ordered lists
//!
//! Each helper returns a new vector and leaves the input untouched. Elements
//! that are not edited keep their order and value.

/// Append one element to the end
pub fn appended<T: Clone>(items: &[T], item: T) -> Vec<T> {
    let mut next = items.to_vec();
    next.push(item);
    next
}

/// Remove the element at `index`, shifting later elements down.
///
/// Out-of-range indices return an unchanged copy.
pub fn removed_at<T: Clone>(items: &[T], index: usize) -> Vec<T> {
    items
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, item)| item.clone())
        .collect()
}

/// Replace the element at `index`.
///
/// Out-of-range indices return an unchanged copy.
pub fn replaced_at<T: Clone>(items: &[T], index: usize, item: T) -> Vec<T> {
    let mut next = items.to_vec();
    if let Some(slot) = next.get_mut(index) {
        *slot = item;
    }
    next
}
