//! Display ordering for a cached page.
//!
//! [`sorted_view`] never touches the cached records; it returns references in
//! display order. Ordering is descending by the chosen field. Values of
//! different kinds (or a missing value) are incomparable and compare equal.
//!
//! Because "equal on mismatch" is not a total order, the standard library sort
//! is not usable here (it may panic on inconsistent comparators). A stable
//! insertion sort is used instead: an element only moves past neighbours it is
//! strictly ordered against, so an incomparable pair is never swapped. Pages are
//! small, so the quadratic worst case does not matter.

use crate::domain::{FieldValue, ImageRecord, SortCriterion};
use icu_collator::{Collator, CollatorOptions};
use std::cmp::Ordering;

/// Returns the records of one page ordered for display.
///
/// # Examples
///
/// ```
/// use zgallery::domain::{ImageRecord, SortCriterion};
/// use zgallery::gallery::sorted_view;
///
/// let records: Vec<ImageRecord> = [
///     serde_json::json!({"id": 1, "downloads": 5}),
///     serde_json::json!({"id": 2, "downloads": 9}),
/// ]
/// .iter()
/// .map(|v| ImageRecord::from_json(v).unwrap())
/// .collect();
///
/// let view = sorted_view(&records, SortCriterion::Downloads);
/// assert_eq!(view[0].id.to_string(), "2");
/// assert_eq!(view[1].id.to_string(), "1");
/// ```
#[must_use]
pub fn sorted_view(records: &[ImageRecord], criterion: SortCriterion) -> Vec<&ImageRecord> {
    let field = criterion.field_name();
    let collator = Collator::try_new(&Default::default(), CollatorOptions::new())
        .map_err(|e| tracing::debug!(error = ?e, "root collator unavailable, using code points"))
        .ok();
    let keys: Vec<Option<FieldValue>> = records.iter().map(|r| r.field(field)).collect();
    let mut order: Vec<usize> = (0..records.len()).collect();

    for i in 1..order.len() {
        let mut j = i;
        while j > 0 && descending(&keys[order[j]], &keys[order[j - 1]], field, collator.as_ref())
                == Ordering::Less {
            order.swap(j, j - 1);
            j -= 1;
        }
    }

    order.into_iter().map(|i| &records[i]).collect()
}

/// Compares two field values for descending display order.
///
/// `Less` means `a` is shown before `b`.
fn descending(
    a: &Option<FieldValue>,
    b: &Option<FieldValue>,
    field: &str,
    collator: Option<&Collator>,
) -> Ordering {
    match (a, b) {
        (Some(FieldValue::Number(x)), Some(FieldValue::Number(y))) => {
            y.partial_cmp(x).unwrap_or(Ordering::Equal)
        }
        (Some(FieldValue::Text(x)), Some(FieldValue::Text(y))) => collate(collator, y, x),
        (Some(FieldValue::Timestamp(x)), Some(FieldValue::Timestamp(y))) => y.cmp(x),
        (Some(FieldValue::Bool(_)), Some(FieldValue::Bool(_))) => Ordering::Equal,
        (a, b) => {
            tracing::debug!(
                field = field,
                left = a.as_ref().map_or("missing", FieldValue::kind),
                right = b.as_ref().map_or("missing", FieldValue::kind),
                "sort type mismatch, keeping relative order"
            );
            Ordering::Equal
        }
    }
}

/// Root-locale collation, so accents and case sort next to their base letter.
fn collate(collator: Option<&Collator>, a: &str, b: &str) -> Ordering {
    collator.map_or_else(|| a.cmp(b), |c| c.compare(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn records(values: &[Value]) -> Vec<ImageRecord> {
        values
            .iter()
            .map(|v| ImageRecord::from_json(v).unwrap())
            .collect()
    }

    fn ids(view: &[&ImageRecord]) -> Vec<String> {
        view.iter().map(|r| r.id.to_string()).collect()
    }

    #[test]
    fn downloads_sort_descending() {
        let page = records(&[json!({"id": 1, "downloads": 5}), json!({"id": 2, "downloads": 9})]);
        assert_eq!(ids(&sorted_view(&page, SortCriterion::Downloads)), ["2", "1"]);
    }

    #[test]
    fn sorting_leaves_cached_page_untouched() {
        let page = records(&[json!({"id": 1}), json!({"id": 3}), json!({"id": 2})]);
        let before = page.clone();
        let view = sorted_view(&page, SortCriterion::Id);
        assert_eq!(ids(&view), ["3", "2", "1"]);
        assert_eq!(page, before);
    }

    #[test]
    fn text_sorts_descending_case_insensitively() {
        let page = records(&[
            json!({"id": "apple"}),
            json!({"id": "Banana"}),
            json!({"id": "cherry"}),
        ]);
        assert_eq!(ids(&sorted_view(&page, SortCriterion::Id)), ["cherry", "Banana", "apple"]);
    }

    #[test]
    fn accented_text_sorts_beside_its_base_letter() {
        let page = records(&[
            json!({"id": "f"}),
            json!({"id": "é"}),
            json!({"id": "z"}),
            json!({"id": "a"}),
            json!({"id": "A"}),
        ]);
        assert_eq!(ids(&sorted_view(&page, SortCriterion::Id)), ["z", "f", "é", "A", "a"]);
    }

    #[test]
    fn timestamps_sort_newest_first() {
        let page = records(&[
            json!({"id": 1, "views": "2023-01-01T00:00:00Z"}),
            json!({"id": 2, "views": "2024-01-01T00:00:00Z"}),
        ]);
        assert_eq!(ids(&sorted_view(&page, SortCriterion::Views)), ["2", "1"]);
    }

    #[test]
    fn mismatched_and_missing_values_keep_their_order() {
        let page = records(&[
            json!({"id": 1, "views": "lots"}),
            json!({"id": 2, "views": 50}),
            json!({"id": 3}),
            json!({"id": 4, "views": 10}),
        ]);
        let view = ids(&sorted_view(&page, SortCriterion::Views));
        let pos = |id: &str| view.iter().position(|v| v == id).unwrap();
        assert!(pos("1") < pos("2"));
        assert!(pos("2") < pos("3"));
        assert!(pos("3") < pos("4"));
    }

    #[test]
    fn empty_page_gives_empty_view() {
        assert!(sorted_view(&[], SortCriterion::Views).is_empty());
    }
}
