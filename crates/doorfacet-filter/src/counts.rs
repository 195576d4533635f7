//! What-if facet counts: how many products would match if one more option
//! were selected, holding every other facet fixed.

use serde::Serialize;

use doorfacet_core::Facetable;

use crate::predicate;
use crate::schema::FacetSchema;
use crate::state::FilterState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionCount {
    pub value: String,
    pub count: usize,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetCounts {
    pub key: String,
    pub label: String,
    pub options: Vec<OptionCount>,
}

/// Result size if `value` were added to `key`'s selection.
///
/// `state` is not modified. When `value` is already selected the count equals
/// the current result size. Range facets have no discrete options; passing a
/// range key (or any key the schema lacks as a categorical facet) returns the
/// current result size.
pub fn count_if_selected<T: Facetable>(
    schema: &FacetSchema,
    products: &[T],
    key: &str,
    value: &str,
    state: &FilterState,
) -> usize {
    let hypothetical = state.with_selected(key, value);
    predicate::count(schema, products, &hypothetical)
}

/// Counts for every option of every categorical facet, in schema order.
pub fn facet_counts<T: Facetable>(schema: &FacetSchema, products: &[T], state: &FilterState) -> Vec<FacetCounts> {
    schema
        .categorical()
        .map(|facet| FacetCounts {
            key: facet.key.clone(),
            label: facet.label.clone(),
            options: facet
                .options
                .iter()
                .map(|option| OptionCount {
                    value: option.clone(),
                    count: count_if_selected(schema, products, &facet.key, option, state),
                    selected: state.is_selected(&facet.key, option),
                })
                .collect(),
        })
        .collect()
}
