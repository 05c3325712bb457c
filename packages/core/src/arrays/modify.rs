//! Non-mutating edits of slices

#[inline]
#[must_use]
pub fn clone_array<T: Clone>(array: &[T]) -> Vec<T> {
    array.to_vec()
}

#[must_use]
pub fn add_to_end<T: Clone>(array: &[T], item: T) -> Vec<T> {
    let mut extended = Vec::with_capacity(array.len() + 1);
    extended.extend_from_slice(array);
    extended.push(item);
    extended
}

#[must_use]
pub fn add_to_beginning<T: Clone>(array: &[T], item: T) -> Vec<T> {
    let mut extended = Vec::with_capacity(array.len() + 1);
    extended.push(item);
    extended.extend_from_slice(array);
    extended
}

/// Insert `item` before position `index`
///
/// A negative index inserts at the front, an index past the end appends.
#[must_use]
pub fn insert_into<T: Clone>(array: &[T], item: T, index: isize) -> Vec<T> {
    let Ok(position) = usize::try_from(index) else {
        return add_to_beginning(array, item);
    };
    let position = position.min(array.len());

    let mut extended = Vec::with_capacity(array.len() + 1);
    extended.extend_from_slice(&array[..position]);
    extended.push(item);
    extended.extend_from_slice(&array[position..]);
    extended
}

/// Remove every occurrence of `item` if present, otherwise append it
#[must_use]
pub fn toggle_item<T: Clone + PartialEq>(array: &[T], item: T) -> Vec<T> {
    if array.contains(&item) {
        array.iter().filter(|existing| **existing != item).cloned().collect()
    } else {
        add_to_end(array, item)
    }
}

/// Copy of `array` without the element at `index`
///
/// An index outside the array yields an unchanged copy.
#[must_use]
pub fn remove_at<T: Clone>(array: &[T], index: isize) -> Vec<T> {
    match usize::try_from(index) {
        Ok(position) if position < array.len() => array
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != position)
            .map(|(_, item)| item.clone())
            .collect(),
        _ => array.to_vec(),
    }
}

/// Copy of `array` with the element at `index` replaced by `item`
///
/// An index outside the array yields an unchanged copy.
#[must_use]
pub fn replace_at<T: Clone>(array: &[T], item: T, index: usize) -> Vec<T> {
    let mut replaced = array.to_vec();
    if let Some(slot) = replaced.get_mut(index) {
        *slot = item;
    }
    replaced
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_at_ends() {
        let array = [1, 2];
        assert_eq!(add_to_end(&array, 3), vec![1, 2, 3]);
        assert_eq!(add_to_beginning(&array, 0), vec![0, 1, 2]);
        assert_eq!(clone_array(&array), vec![1, 2]);
    }

    #[test]
    fn insert_clamps_index() {
        let array = ['a', 'b', 'c'];
        assert_eq!(insert_into(&array, 'x', 1), vec!['a', 'x', 'b', 'c']);
        assert_eq!(insert_into(&array, 'x', -4), vec!['x', 'a', 'b', 'c']);
        assert_eq!(insert_into(&array, 'x', 3), vec!['a', 'b', 'c', 'x']);
        assert_eq!(insert_into(&array, 'x', 99), vec!['a', 'b', 'c', 'x']);
    }

    #[test]
    fn toggle() {
        assert_eq!(toggle_item(&[1, 2, 3], 2), vec![1, 3]);
        assert_eq!(toggle_item(&[1, 2, 3], 4), vec![1, 2, 3, 4]);
        assert_eq!(toggle_item(&[2, 1, 2], 2), vec![1]);
    }

    #[test]
    fn remove_and_replace() {
        let array = [1, 2, 3];
        assert_eq!(remove_at(&array, 1), vec![1, 3]);
        assert_eq!(remove_at(&array, -1), vec![1, 2, 3]);
        assert_eq!(remove_at(&array, 3), vec![1, 2, 3]);
        assert_eq!(replace_at(&array, 9, 0), vec![9, 2, 3]);
        assert_eq!(replace_at(&array, 9, 5), vec![1, 2, 3]);
    }
}
