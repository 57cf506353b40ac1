use std::collections::HashMap;

use crate::error::{ApiError, HttpError};
use crate::schema::Id;

pub mod grocery;
pub mod recipes;

/// Next id for a collection: current max + 1, restarting at 1 once the
/// collection has been emptied. Ids of deleted items are never reused while
/// any higher id remains.
pub(crate) fn next_id(ids: impl Iterator<Item = Id>) -> Id {
    ids.max().map(|max| max + 1).unwrap_or(1)
}

/// Rebuilds a collection in the order given by `ids`. The sequence must be a
/// true permutation of the current id set; missing, unknown or duplicate ids
/// reject the whole request instead of silently dropping data.
pub(crate) fn reorder_by_ids<T, F>(
    items: Vec<T>,
    ids: &[Id],
    field: &str,
    id_of: F,
) -> Result<Vec<T>, ApiError>
where
    F: Fn(&T) -> Id,
{
    if ids.len() != items.len() {
        return Err(HttpError::InvalidRequest
            .new(&format!("{field} must contain every existing id exactly once")));
    }

    let mut by_id: HashMap<Id, T> = items.into_iter().map(|item| (id_of(&item), item)).collect();

    let mut reordered = Vec::with_capacity(ids.len());
    for id in ids {
        match by_id.remove(id) {
            Some(item) => reordered.push(item),
            None => {
                return Err(HttpError::InvalidRequest
                    .new(&format!("{field} must contain every existing id exactly once")))
            }
        }
    }

    Ok(reordered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_id_counts_from_the_max() {
        assert_eq!(next_id([].into_iter()), 1);
        assert_eq!(next_id([1, 2, 3].into_iter()), 4);
        assert_eq!(next_id([7, 2].into_iter()), 8);
    }

    #[test]
    fn reorder_requires_a_full_permutation() {
        let items = vec![1, 2, 3];

        let ok = reorder_by_ids(items.clone(), &[3, 1, 2], "ids", |id| *id).unwrap();
        assert_eq!(ok, vec![3, 1, 2]);

        assert!(reorder_by_ids(items.clone(), &[1, 2], "ids", |id| *id).is_err());
        assert!(reorder_by_ids(items.clone(), &[1, 2, 4], "ids", |id| *id).is_err());
        assert!(reorder_by_ids(items, &[1, 2, 2], "ids", |id| *id).is_err());
    }
}
