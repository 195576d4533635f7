use std::path::PathBuf;

use doorfacet_core::Catalog;
use doorfacet_filter::{reducer, FacetSchema, FacetedSearch, RangeBound};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // crates/doorfacet-filter -> crates -> repo root
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).ancestors().nth(2).map(PathBuf::from).unwrap_or_default();
    let catalog = Catalog::load(&root.join("data/in_stock.json"))?;
    let schema = FacetSchema::base();
    let search = FacetedSearch::new(catalog.products(), &schema);

    let state = reducer::toggle_categorical(&search.default_state(), "styles", "Modern");
    let state = reducer::set_range(&state, "width", RangeBound::new(30.0, 50.0));

    println!("{} of {} doors", search.count(&state), search.total());
    for door in search.results(&state) {
        println!("  {} {}", door.id, door.name);
    }
    for facet in search.facet_counts(&state) {
        let options: Vec<String> = facet.options.iter().map(|o| format!("{} ({})", o.value, o.count)).collect();
        println!("{}: {}", facet.label, options.join(", "));
    }
    Ok(())
}
