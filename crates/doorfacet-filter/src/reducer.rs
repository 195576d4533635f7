//! Pure state transitions. Every function returns a new [`FilterState`];
//! none mutates its input.

use crate::schema::{FacetDefinition, FacetSchema};
use crate::state::{FilterState, RangeBound};

/// Adds `value` to `key`'s selection, or removes it if already present.
pub fn toggle_categorical(state: &FilterState, key: &str, value: &str) -> FilterState {
    if state.is_selected(key, value) {
        state.without_selected(key, value)
    } else {
        state.with_selected(key, value)
    }
}

/// Replaces `key`'s interval verbatim. The caller keeps `low <= high`; see
/// [`RangeBound::clamped`] for input-side normalization.
pub fn set_range(state: &FilterState, key: &str, range: RangeBound) -> FilterState {
    state.with_range(key, range)
}

pub fn reset(schema: &FacetSchema) -> FilterState {
    schema.default_state()
}

/// True iff every categorical selection is empty and every range sits at its
/// declared bound. Entries for keys the schema lacks are not considered.
pub fn is_default(schema: &FacetSchema, state: &FilterState) -> bool {
    active_filter_count(schema, state) == 0
}

/// Number of facets with a non-default value; a facet with several selected
/// options counts once.
pub fn active_filter_count(schema: &FacetSchema, state: &FilterState) -> usize {
    schema
        .facets()
        .iter()
        .filter(|facet| match facet {
            FacetDefinition::MultiSelect(f) => !state.selected(&f.key).is_empty(),
            FacetDefinition::Range(f) => schema.effective_range(f, state) != f.bounds(),
        })
        .count()
}
