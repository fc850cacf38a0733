//! Aggregations over a collection: categories, tags, tech stack, years

use indexmap::IndexSet;

use crate::content::{Entry, Project};

/// Pseudo-category that selects every entry
pub const ALL: &str = "All";

/// `"All"` followed by distinct categories in first-seen order
pub fn categories<T: Entry>(entries: &[T]) -> Vec<String> {
    let distinct: IndexSet<&str> = entries.iter().filter_map(|e| e.category()).collect();

    std::iter::once(ALL)
        .chain(distinct)
        .map(str::to_string)
        .collect()
}

/// Distinct tags (posts) or tech (projects) in first-seen order
pub fn labels<T: Entry>(entries: &[T]) -> Vec<String> {
    let distinct: IndexSet<&str> = entries
        .iter()
        .flat_map(|e| e.labels().iter().map(String::as_str))
        .collect();

    distinct.into_iter().map(str::to_string).collect()
}

/// Distinct project years, newest first
pub fn years(projects: &[Project]) -> Vec<i32> {
    let mut years: Vec<i32> = projects
        .iter()
        .filter_map(|p| p.year)
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect();
    years.sort_by(|a, b| b.cmp(a));
    years
}

/// Number of entries per label, most used first
pub fn label_counts<T: Entry>(entries: &[T]) -> Vec<(String, usize)> {
    let mut counts: indexmap::IndexMap<&str, usize> = indexmap::IndexMap::new();
    for entry in entries {
        for label in entry.labels() {
            *counts.entry(label.as_str()).or_insert(0) += 1;
        }
    }

    let mut counts: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(label, count)| (label.to_string(), count))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
