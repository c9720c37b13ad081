use super::FilterSet;
use crate::store::StringRecord;

/// Apply a filter set to a sequence of records.
///
/// A pure filter: records matching every present predicate are returned in
/// their original relative order, nothing is mutated, and the result may be
/// empty. An empty filter set matches everything.
///
/// Conflicting bounds are not detected here; a set with `min_length >
/// max_length` simply matches nothing. Callers that need to distinguish
/// "unsatisfiable" from "no matches" check
/// [`FilterSet::has_conflicting_bounds`] before evaluating.
pub fn apply_filters<'a, I>(records: I, filters: &FilterSet) -> Vec<&'a StringRecord>
where
    I: IntoIterator<Item = &'a StringRecord>,
{
    records
        .into_iter()
        .filter(|record| filters.matches(record))
        .collect()
}
