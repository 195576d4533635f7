use doorfacet_core::Facetable;

use crate::chips::{self, ActiveChip};
use crate::counts::{self, FacetCounts};
use crate::listing::{self, Page};
use crate::predicate;
use crate::reducer;
use crate::schema::FacetSchema;
use crate::state::FilterState;

/// A product collection paired with the schema a listing page filters it by.
///
/// Holds no selection state; every query takes the state explicitly, so one
/// instance can serve any number of independent sessions.
pub struct FacetedSearch<'a, T> {
    products: &'a [T],
    schema: &'a FacetSchema,
}

impl<'a, T: Facetable> FacetedSearch<'a, T> {
    pub fn new(products: &'a [T], schema: &'a FacetSchema) -> Self {
        Self { products, schema }
    }

    pub fn schema(&self) -> &'a FacetSchema {
        self.schema
    }

    pub fn total(&self) -> usize {
        self.products.len()
    }

    pub fn default_state(&self) -> FilterState {
        reducer::reset(self.schema)
    }

    pub fn results(&self, state: &FilterState) -> Vec<&'a T> {
        predicate::apply(self.schema, self.products, state)
    }

    pub fn count(&self, state: &FilterState) -> usize {
        predicate::count(self.schema, self.products, state)
    }

    pub fn count_if_selected(&self, key: &str, value: &str, state: &FilterState) -> usize {
        counts::count_if_selected(self.schema, self.products, key, value, state)
    }

    pub fn facet_counts(&self, state: &FilterState) -> Vec<FacetCounts> {
        counts::facet_counts(self.schema, self.products, state)
    }

    pub fn chips(&self, state: &FilterState) -> Vec<ActiveChip> {
        chips::active_chips(self.schema, state)
    }

    pub fn active_filter_count(&self, state: &FilterState) -> usize {
        reducer::active_filter_count(self.schema, state)
    }

    pub fn page(&self, state: &FilterState, page: usize, page_size: usize) -> Page<&'a T> {
        listing::paginate(&self.results(state), page, page_size)
    }
}
