//! Concatenating slices

/// Concatenate `arrays` in order
#[must_use]
pub fn merge_arrays<T: Clone>(arrays: &[&[T]]) -> Vec<T> {
    arrays.concat()
}

/// Concatenate `arrays`, keeping only the first occurrence of equal elements
///
/// Equality is structural, so two records with the same content are
/// duplicates.
#[must_use]
pub fn merge_arrays_unique<T: Clone + PartialEq>(arrays: &[&[T]]) -> Vec<T> {
    let mut merged: Vec<T> = Vec::new();
    for item in arrays.iter().flat_map(|array| array.iter()) {
        if !merged.contains(item) {
            merged.push(item.clone());
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn merge_keeps_duplicates() {
        let merged = merge_arrays(&[&[1, 2][..], &[2, 3][..], &[][..]]);
        assert_eq!(merged, vec![1, 2, 2, 3]);
    }

    #[test]
    fn unique_keeps_first_occurrence() {
        let merged = merge_arrays_unique(&[&[3, 1, 2][..], &[2, 3, 4][..]]);
        assert_eq!(merged, vec![3, 1, 2, 4]);
    }

    #[test]
    fn unique_is_structural_for_records() {
        let first = [json!({"id": 1})];
        let second = [json!({"id": 1}), json!({"id": 2})];
        let merged = merge_arrays_unique(&[&first[..], &second[..]]);
        assert_eq!(merged, vec![json!({"id": 1}), json!({"id": 2})]);
    }
}
