//! Collection operations
//!
//! `map`, `filter`, `some`, `every` and `reduce` over slices. Callbacks
//! receive the element, its index and the whole slice.

/// Apply `mapper` to every element
pub fn map<T, U, F>(items: &[T], mut mapper: F) -> Vec<U>
where
    F: FnMut(&T, usize, &[T]) -> U,
{
    let mut mapped = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        mapped.push(mapper(item, index, items));
    }
    mapped
}

/// Clones of the elements for which `predicate` holds, in order
pub fn filter<T, P>(items: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T, usize, &[T]) -> bool,
{
    let mut kept = Vec::new();
    for (index, item) in items.iter().enumerate() {
        if predicate(item, index, items) {
            kept.push(item.clone());
        }
    }
    kept
}

/// True as soon as `predicate` holds for one element; false when empty
pub fn some<T, P>(items: &[T], mut predicate: P) -> bool
where
    P: FnMut(&T, usize, &[T]) -> bool,
{
    for (index, item) in items.iter().enumerate() {
        if predicate(item, index, items) {
            return true;
        }
    }
    false
}

/// False as soon as `predicate` fails for one element; true when empty
pub fn every<T, P>(items: &[T], mut predicate: P) -> bool
where
    P: FnMut(&T, usize, &[T]) -> bool,
{
    for (index, item) in items.iter().enumerate() {
        if !predicate(item, index, items) {
            return false;
        }
    }
    true
}

/// Combine the elements left to right
///
/// Without `initial` the first element seeds the accumulator and reduction
/// starts at index 1. Returns `None` only for an empty slice without seed.
pub fn reduce<T, F>(items: &[T], mut reducer: F, initial: Option<T>) -> Option<T>
where
    T: Clone,
    F: FnMut(T, &T, usize, &[T]) -> T,
{
    let (mut accumulator, start) = match initial {
        Some(seed) => (seed, 0),
        None => (items.first()?.clone(), 1),
    };
    for (index, item) in items.iter().enumerate().skip(start) {
        accumulator = reducer(accumulator, item, index, items);
    }
    Some(accumulator)
}

/// Reduce into an accumulator of another type
pub fn fold<T, A, F>(items: &[T], initial: A, mut folder: F) -> A
where
    F: FnMut(A, &T, usize, &[T]) -> A,
{
    let mut accumulator = initial;
    for (index, item) in items.iter().enumerate() {
        accumulator = folder(accumulator, item, index, items);
    }
    accumulator
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_passes_index_and_slice() {
        let items = [10, 20, 30];
        let mapped = map(&items, |item, index, all| item + index as i32 + all.len() as i32);
        assert_eq!(mapped, vec![13, 24, 35]);
    }

    #[test]
    fn filter_keeps_order() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(filter(&items, |n, _, _| n % 2 == 1), vec![1, 3, 5]);
        assert_eq!(filter(&items, |_, index, _| index > 2), vec![4, 5]);
    }

    #[test]
    fn some_and_every() {
        let items = [2, 4, 5];
        assert!(some(&items, |n, _, _| n % 2 == 1));
        assert!(!every(&items, |n, _, _| n % 2 == 0));
        assert!(!some(&[] as &[i32], |_, _, _| true));
        assert!(every(&[] as &[i32], |_, _, _| false));
    }

    #[test]
    fn some_short_circuits() {
        let mut visited = 0;
        assert!(some(&[1, 2, 3], |n, _, _| {
            visited += 1;
            *n == 1
        }));
        assert_eq!(visited, 1);
    }

    #[test]
    fn reduce_with_and_without_seed() {
        let items = [1, 2, 3, 4];
        assert_eq!(reduce(&items, |acc, n, _, _| acc + n, None), Some(10));
        assert_eq!(reduce(&items, |acc, n, _, _| acc + n, Some(5)), Some(15));
        assert_eq!(reduce(&[] as &[i32], |acc, n, _, _| acc + n, None), None);
        assert_eq!(reduce(&[] as &[i32], |acc, n, _, _| acc + n, Some(7)), Some(7));

        let mut indices = Vec::new();
        reduce(
            &items,
            |acc, n, index, _| {
                indices.push(index);
                acc * n
            },
            None,
        );
        assert_eq!(indices, vec![1, 2, 3]);
    }

    #[test]
    fn fold_changes_type() {
        let words = ["a", "bb", "ccc"];
        assert_eq!(fold(&words, 0, |len, word, _, _| len + word.len()), 6);
    }
}
