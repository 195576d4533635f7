use doorfacet_core::types::{Availability, DoorType, Glass, NumericField, Shape, Style};
use doorfacet_core::Product;
use doorfacet_filter::{
    active_chips, apply, count_if_selected, facet_counts, is_default, remove_chip, reset, set_range,
    toggle_categorical, FacetDefinition, FacetSchema, FacetedSearch, FilterState, RangeBound, RangeFacet,
};

const IN_STOCK: &str = include_str!("../../../data/in_stock.json");

fn in_stock() -> Vec<Product> {
    serde_json::from_str(IN_STOCK).expect("fixture catalog")
}

fn product(id: &str, width_in: f64, height_in: f64, style: Style, availability: Availability) -> Product {
    Product {
        id: id.to_string(),
        name: id.to_string(),
        image: String::new(),
        availability,
        style,
        door_type: DoorType::Single,
        width_in,
        height_in,
        glass: Glass::Tempered,
        shape: Shape::Flat,
        thermal: false,
        on_sale: false,
    }
}

fn ids<'a>(products: impl IntoIterator<Item = &'a Product>) -> Vec<&'a str> {
    products.into_iter().map(|p| p.id.as_str()).collect()
}

fn pair() -> Vec<Product> {
    vec![
        product("A", 40.0, 82.0, Style::Modern, Availability::Now),
        product("B", 72.0, 96.0, Style::Traditional, Availability::SixToEightWeeks),
    ]
}

#[test]
fn style_then_width_narrows_to_nothing() {
    let schema = FacetSchema::base();
    let products = pair();

    let state = reset(&schema);
    assert_eq!(ids(apply(&schema, &products, &state)), vec!["A", "B"]);

    let state = toggle_categorical(&state, "styles", "Modern");
    assert_eq!(ids(apply(&schema, &products, &state)), vec!["A"]);

    let state = set_range(&state, "width", RangeBound::new(50.0, 80.0));
    assert!(apply(&schema, &products, &state).is_empty());
}

#[test]
fn what_if_count_depends_on_other_facets() {
    let schema = FacetSchema::base();
    let products = pair();

    let modern = toggle_categorical(&reset(&schema), "styles", "Modern");
    assert_eq!(count_if_selected(&schema, &products, "availability", "6-8 weeks", &modern), 0);
    assert_eq!(count_if_selected(&schema, &products, "availability", "6-8 weeks", &reset(&schema)), 1);
}

#[test]
fn default_ranges_still_bound_results() {
    let schema = FacetSchema::base();
    let products = vec![
        product("narrow", 24.0, 80.0, Style::Modern, Availability::Now),
        product("fits", 36.0, 80.0, Style::Modern, Availability::Now),
    ];
    assert_eq!(ids(apply(&schema, &products, &reset(&schema))), vec!["fits"]);

    let wide = FacetDefinition::Range(RangeFacet::new("width", "Width (in)", NumericField::Width, 24.0, 96.0));
    let category = schema.with_facet(wide).expect("override");
    assert_eq!(ids(apply(&category, &products, &reset(&category))), vec!["narrow", "fits"]);
}

#[test]
fn in_stock_catalog_facets() {
    let schema = FacetSchema::base();
    let products = in_stock();
    assert_eq!(products.len(), 11);

    let state = toggle_categorical(&reset(&schema), "doorTypes", "Wine doors");
    assert_eq!(ids(apply(&schema, &products, &state)), vec!["w3001", "w3002", "w3003"]);

    let counts = facet_counts(&schema, &products, &state);
    let shapes = counts.iter().find(|c| c.key == "shapes").expect("shapes facet");
    let by_option: Vec<(&str, usize)> = shapes.options.iter().map(|o| (o.value.as_str(), o.count)).collect();
    assert_eq!(by_option, vec![("Flat", 0), ("Arch", 2), ("Round", 1)]);

    let door_types = counts.iter().find(|c| c.key == "doorTypes").expect("doorTypes facet");
    let single = door_types.options.iter().find(|o| o.value == "Single door").expect("single");
    assert_eq!(single.count, 7);
    assert!(!single.selected);
}

#[test]
fn thermal_and_sale_use_yes_no_options() {
    let schema = FacetSchema::base();
    let products = in_stock();

    let state = toggle_categorical(&reset(&schema), "onSale", "Yes");
    assert_eq!(ids(apply(&schema, &products, &state)), vec!["d1002", "d2001", "d2003", "w3002"]);

    let state = toggle_categorical(&state, "thermal", "No");
    assert_eq!(ids(apply(&schema, &products, &state)), vec!["d2003", "w3002"]);
}

#[test]
fn chips_and_reset_round_trip() {
    let schema = FacetSchema::base();
    let products = in_stock();
    let search = FacetedSearch::new(&products, &schema);

    let state = toggle_categorical(&search.default_state(), "glass", "Impact");
    let state = set_range(&state, "height", RangeBound::new(80.0, 90.0));
    assert_eq!(search.active_filter_count(&state), 2);

    let chips = active_chips(&schema, &state);
    assert_eq!(chips.len(), 2);
    assert_eq!(chips[1].value, "80″–90″");

    let cleared = chips.iter().fold(state.clone(), |s, chip| remove_chip(&schema, &s, chip));
    assert!(is_default(&schema, &cleared));
    assert_eq!(search.count(&cleared), products.len());
}

#[test]
fn facade_pages_filtered_results() {
    let schema = FacetSchema::base();
    let products = in_stock();
    let search = FacetedSearch::new(&products, &schema);

    let state = toggle_categorical(&search.default_state(), "availability", "Now");
    let total = search.count(&state);
    assert_eq!(total, 7);

    let second = search.page(&state, 2, 3);
    assert_eq!(second.total, total);
    assert_eq!(second.total_pages, 3);
    assert_eq!(ids(second.items.iter().copied()), vec!["d2002", "d2003", "w3001"]);
}

#[test]
fn sessions_are_independent() {
    let schema = FacetSchema::base();
    let products = in_stock();
    let search = FacetedSearch::new(&products, &schema);

    let first = toggle_categorical(&FilterState::default(), "styles", "Modern");
    let second = toggle_categorical(&FilterState::default(), "styles", "Traditional");
    let before = search.count(&first);
    let _ = search.results(&second);
    assert_eq!(search.count(&first), before);
    assert_eq!(search.results(&first), search.results(&first));
}
