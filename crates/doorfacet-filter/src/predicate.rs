//! Predicate engine: AND across facets, OR within a categorical facet.

use doorfacet_core::Facetable;

use crate::schema::{FacetDefinition, FacetSchema};
use crate::state::FilterState;

/// Whether `product` passes every facet constraint in `state`.
///
/// - An empty categorical selection places no constraint on that facet.
/// - A selected value outside the facet's option set never matches, so a
///   stale selection filters the facet down rather than failing.
/// - Ranges are inclusive on both ends; an inverted range matches nothing.
/// - Selection keys the schema does not define are ignored.
pub fn matches<T: Facetable + ?Sized>(schema: &FacetSchema, product: &T, state: &FilterState) -> bool {
    schema.facets().iter().all(|facet| match facet {
        FacetDefinition::MultiSelect(f) => {
            let selected = state.selected(&f.key);
            if selected.is_empty() {
                return true;
            }
            let value = product.categorical_value(f.field);
            selected.iter().any(|s| s == value && f.has_option(s))
        }
        FacetDefinition::Range(f) => schema.effective_range(f, state).contains(product.numeric_value(f.field)),
    })
}

/// Stable filter: returns the matching products in input order.
pub fn apply<'a, T: Facetable>(schema: &FacetSchema, products: &'a [T], state: &FilterState) -> Vec<&'a T> {
    products.iter().filter(|p| matches(schema, *p, state)).collect()
}

/// Size of [`apply`]'s result without collecting it.
pub fn count<T: Facetable>(schema: &FacetSchema, products: &[T], state: &FilterState) -> usize {
    products.iter().filter(|p| matches(schema, *p, state)).count()
}
