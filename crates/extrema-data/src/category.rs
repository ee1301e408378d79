//! Per-category value ranges.

use std::collections::BTreeMap;

use crate::dataset::Record;

/// Minimum and maximum value observed within one category.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CategoryExtrema {
    pub category: String,
    pub minimum: f64,
    pub maximum: f64,
    /// Number of records in the category.
    pub count: usize,
}

/// Groups records by category and reduces each group to its range.
///
/// This is a plain grouped fold, independent of the benchmarked search
/// strategies. Groups are ordered by category name; records without a
/// category are ignored.
///
/// # Example
///
/// ```
/// use extrema_data::{category_extrema, Record};
///
/// let records = vec![
///     Record { value: 3.0, category: Some("Tea".into()) },
///     Record { value: 9.0, category: Some("Coffee".into()) },
///     Record { value: 1.5, category: Some("Tea".into()) },
///     Record { value: 4.0, category: None },
/// ];
///
/// let groups = category_extrema(&records);
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].category, "Coffee");
/// assert_eq!((groups[1].minimum, groups[1].maximum), (1.5, 3.0));
/// ```
pub fn category_extrema(records: &[Record]) -> Vec<CategoryExtrema> {
    let mut groups: BTreeMap<&str, CategoryExtrema> = BTreeMap::new();

    for record in records {
        let Some(category) = record.category.as_deref() else {
            continue;
        };
        groups
            .entry(category)
            .and_modify(|group| {
                group.minimum = group.minimum.min(record.value);
                group.maximum = group.maximum.max(record.value);
                group.count += 1;
            })
            .or_insert_with(|| CategoryExtrema {
                category: category.to_string(),
                minimum: record.value,
                maximum: record.value,
                count: 1,
            });
    }

    groups.into_values().collect()
}
