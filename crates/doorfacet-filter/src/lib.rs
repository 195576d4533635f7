//! doorfacet-filter
//!
//! Faceted filtering over an in-memory product collection: a declarative facet
//! schema, the predicate engine, what-if facet counts, and pure state
//! transitions with their active-chip projection. Every operation takes the
//! products, schema and state as explicit arguments and performs no I/O.
#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod chips;
pub mod counts;
pub mod listing;
pub mod predicate;
pub mod reducer;
pub mod schema;
pub mod search;
pub mod state;

pub use chips::{active_chips, remove_chip, ActiveChip, ChipKind};
pub use counts::{count_if_selected, facet_counts, FacetCounts, OptionCount};
pub use listing::{paginate, Page};
pub use predicate::{apply, count, matches};
pub use reducer::{active_filter_count, is_default, reset, set_range, toggle_categorical};
pub use schema::{CategoricalFacet, FacetDefinition, FacetSchema, RangeFacet};
pub use search::FacetedSearch;
pub use state::{FilterState, RangeBound};
