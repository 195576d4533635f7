//! Active chips: a display projection of the non-default parts of a state.

use serde::Serialize;

use crate::schema::{FacetSchema, RangeFacet};
use crate::state::{FilterState, RangeBound};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChipKind {
    Categorical,
    Range { range: RangeBound },
}

/// One removable token per non-default value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActiveChip {
    pub key: String,
    pub label: String,
    pub value: String,
    #[serde(flatten)]
    pub kind: ChipKind,
}

fn range_text(facet: &RangeFacet, range: RangeBound) -> String {
    format!("{}{unit}–{}{unit}", range.low, range.high, unit = facet.unit)
}

/// Categorical facets in schema order (values in selection order), then range
/// facets in schema order.
pub fn active_chips(schema: &FacetSchema, state: &FilterState) -> Vec<ActiveChip> {
    let categorical = schema.categorical().flat_map(move |facet| {
        state.selected(&facet.key).iter().map(move |value| ActiveChip {
            key: facet.key.clone(),
            label: facet.label.clone(),
            value: value.clone(),
            kind: ChipKind::Categorical,
        })
    });
    let ranges = schema.ranges().filter_map(|facet| {
        let range = schema.effective_range(facet, state);
        (range != facet.bounds()).then(|| ActiveChip {
            key: facet.key.clone(),
            label: facet.label.clone(),
            value: range_text(facet, range),
            kind: ChipKind::Range { range },
        })
    });
    categorical.chain(ranges).collect()
}

/// Undoes exactly the value `chip` represents: drops one categorical option,
/// or returns one range facet to its default bound.
pub fn remove_chip(schema: &FacetSchema, state: &FilterState, chip: &ActiveChip) -> FilterState {
    match chip.kind {
        ChipKind::Categorical => state.without_selected(&chip.key, &chip.value),
        ChipKind::Range { .. } => match schema.range_facet(&chip.key) {
            Some(facet) => state.with_range(&chip.key, facet.bounds()),
            None => {
                let mut next = state.clone();
                next.ranges.remove(&chip.key);
                next
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state(schema: &FacetSchema) -> FilterState {
        schema
            .default_state()
            .with_range("width", RangeBound::new(50.0, 80.0))
            .with_selected("shapes", "Arch")
            .with_selected("styles", "Traditional")
            .with_selected("styles", "Modern")
    }

    #[test]
    fn chips_follow_schema_then_selection_order() {
        let schema = FacetSchema::base();
        let chips = active_chips(&schema, &sample_state(&schema));
        let rendered: Vec<(&str, &str)> = chips.iter().map(|c| (c.key.as_str(), c.value.as_str())).collect();
        assert_eq!(
            rendered,
            vec![("styles", "Traditional"), ("styles", "Modern"), ("shapes", "Arch"), ("width", "50″–80″")]
        );
        assert_eq!(chips[3].label, "Width (in)");
    }

    #[test]
    fn default_state_has_no_chips() {
        let schema = FacetSchema::base();
        assert!(active_chips(&schema, &schema.default_state()).is_empty());
        assert!(active_chips(&schema, &FilterState::default()).is_empty());
    }

    #[test]
    fn removing_a_chip_touches_only_that_chip() {
        let schema = FacetSchema::base();
        let state = sample_state(&schema);
        let chips = active_chips(&schema, &state);

        let without_modern = remove_chip(&schema, &state, &chips[1]);
        let remaining = active_chips(&schema, &without_modern);
        assert_eq!(remaining, vec![chips[0].clone(), chips[2].clone(), chips[3].clone()]);

        let without_width = remove_chip(&schema, &state, &chips[3]);
        assert_eq!(without_width.range("width"), Some(RangeBound::new(30.0, 80.0)));
        assert_eq!(active_chips(&schema, &without_width), chips[..3].to_vec());
    }

    #[test]
    fn range_chip_for_a_dropped_facet_clears_the_entry() {
        let base = FacetSchema::base();
        let state = base.default_state().with_range("width", RangeBound::new(40.0, 60.0)).with_selected("styles", "Modern");
        let chip = active_chips(&base, &state).pop().expect("width chip");
        assert_eq!(chip.key, "width");

        let category = base.without_facet("width").expect("drop width");
        let next = remove_chip(&category, &state, &chip);
        assert_eq!(next.range("width"), None);
        assert_eq!(next.selected("styles"), ["Modern".to_string()]);
        assert_eq!(next.range("height"), state.range("height"));
    }

    #[test]
    fn fractional_bounds_render_verbatim() {
        let schema = FacetSchema::base();
        let state = FilterState::default().with_range("height", RangeBound::new(72.0, 96.5));
        assert_eq!(active_chips(&schema, &state)[0].value, "72″–96.5″");
    }
}
