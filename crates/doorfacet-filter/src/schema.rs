//! Declarative description of the filterable dimensions.
//!
//! A schema is an ordered list of facets. Order matters: it drives the order
//! in which facet counts and active chips are reported. Schemas are validated
//! on construction (including deserialization), so the engine can rely on
//! unique keys, option sets drawn from the field's domain, and `min < max`.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use doorfacet_core::error::{Error, Result};
use doorfacet_core::types::{CategoricalField, NumericField, NO, YES};

use crate::state::{FilterState, RangeBound};

fn default_unit() -> String {
    "″".to_string()
}

/// Multi-select facet over a closed set of options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalFacet {
    pub key: String,
    pub label: String,
    pub field: CategoricalField,
    pub options: Vec<String>,
}

impl CategoricalFacet {
    pub fn new(key: &str, label: &str, field: CategoricalField, options: &[&str]) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            field,
            options: options.iter().map(|o| (*o).to_string()).collect(),
        }
    }

    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|o| o == value)
    }
}

/// Facet over a continuous attribute, constrained by `[min, max]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeFacet {
    pub key: String,
    pub label: String,
    pub field: NumericField,
    pub min: f64,
    pub max: f64,
    #[serde(default = "default_unit")]
    pub unit: String,
}

impl RangeFacet {
    pub fn new(key: &str, label: &str, field: NumericField, min: f64, max: f64) -> Self {
        Self { key: key.to_string(), label: label.to_string(), field, min, max, unit: default_unit() }
    }

    /// The full allowed interval, which is also the default selection.
    pub fn bounds(&self) -> RangeBound {
        RangeBound::new(self.min, self.max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum FacetDefinition {
    MultiSelect(CategoricalFacet),
    Range(RangeFacet),
}

impl FacetDefinition {
    pub fn key(&self) -> &str {
        match self {
            Self::MultiSelect(f) => &f.key,
            Self::Range(f) => &f.key,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::MultiSelect(f) => &f.label,
            Self::Range(f) => &f.label,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.key().trim().is_empty() {
            return Err(Error::InvalidSchema("facet key must not be empty".to_string()));
        }
        match self {
            Self::MultiSelect(f) => {
                if f.options.is_empty() {
                    return Err(Error::InvalidSchema(format!("facet '{}' has no options", f.key)));
                }
                let mut seen = HashSet::new();
                for option in &f.options {
                    if !f.field.contains(option) {
                        return Err(Error::InvalidSchema(format!(
                            "option '{option}' of facet '{}' is not a value of {:?}",
                            f.key, f.field
                        )));
                    }
                    if !seen.insert(option.as_str()) {
                        return Err(Error::InvalidSchema(format!("facet '{}' repeats option '{option}'", f.key)));
                    }
                }
            }
            Self::Range(f) => {
                if !(f.min.is_finite() && f.max.is_finite() && f.min < f.max) {
                    return Err(Error::InvalidSchema(format!(
                        "facet '{}' needs finite bounds with min < max, got [{}, {}]",
                        f.key, f.min, f.max
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Ordered, validated list of facets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FacetDefinition>", into = "Vec<FacetDefinition>")]
pub struct FacetSchema {
    facets: Vec<FacetDefinition>,
}

impl FacetSchema {
    pub fn new(facets: Vec<FacetDefinition>) -> Result<Self> {
        {
            let mut keys = HashSet::new();
            for facet in &facets {
                facet.validate()?;
                if !keys.insert(facet.key()) {
                    return Err(Error::InvalidSchema(format!("duplicate facet key '{}'", facet.key())));
                }
            }
        }
        Ok(Self { facets })
    }

    /// Site-wide facets shared by every listing page.
    pub fn base() -> Self {
        use CategoricalField as C;
        fn multi(key: &str, label: &str, field: CategoricalField, options: &[&str]) -> FacetDefinition {
            FacetDefinition::MultiSelect(CategoricalFacet::new(key, label, field, options))
        }
        Self {
            facets: vec![
                multi("availability", "Availability", C::Availability, &["Now", "6-8 weeks"]),
                multi("styles", "Style", C::Style, &["Modern", "Transitional", "Traditional"]),
                multi(
                    "doorTypes",
                    "Door Type",
                    C::DoorType,
                    &["Single door", "Double door", "Doors with Sidelight", "Doors with transom", "Wine doors", "Windows"],
                ),
                multi("glass", "Glass", C::Glass, &["Tempered", "Impact"]),
                multi("shapes", "Shape", C::Shape, &["Flat", "Arch", "Round"]),
                multi("thermal", "Thermal Break", C::Thermal, &[YES, NO]),
                multi("onSale", "On Sale", C::OnSale, &[YES, NO]),
                FacetDefinition::Range(RangeFacet::new("width", "Width (in)", NumericField::Width, 30.0, 80.0)),
                FacetDefinition::Range(RangeFacet::new("height", "Height (in)", NumericField::Height, 72.0, 120.0)),
            ],
        }
    }

    /// Replaces the facet with the same key, or appends it if the key is new.
    pub fn with_facet(&self, facet: FacetDefinition) -> Result<Self> {
        let mut facets = self.facets.clone();
        match facets.iter().position(|f| f.key() == facet.key()) {
            Some(i) => {
                tracing::debug!(key = facet.key(), "overriding facet");
                facets[i] = facet;
            }
            None => facets.push(facet),
        }
        Self::new(facets)
    }

    pub fn without_facet(&self, key: &str) -> Result<Self> {
        if self.get(key).is_none() {
            return Err(Error::UnknownFacet(key.to_string()));
        }
        Ok(Self { facets: self.facets.iter().filter(|f| f.key() != key).cloned().collect() })
    }

    pub fn facets(&self) -> &[FacetDefinition] {
        &self.facets
    }

    pub fn get(&self, key: &str) -> Option<&FacetDefinition> {
        self.facets.iter().find(|f| f.key() == key)
    }

    pub fn categorical(&self) -> impl Iterator<Item = &CategoricalFacet> {
        self.facets.iter().filter_map(|f| match f {
            FacetDefinition::MultiSelect(c) => Some(c),
            FacetDefinition::Range(_) => None,
        })
    }

    pub fn ranges(&self) -> impl Iterator<Item = &RangeFacet> {
        self.facets.iter().filter_map(|f| match f {
            FacetDefinition::Range(r) => Some(r),
            FacetDefinition::MultiSelect(_) => None,
        })
    }

    pub fn categorical_facet(&self, key: &str) -> Option<&CategoricalFacet> {
        self.categorical().find(|f| f.key == key)
    }

    pub fn range_facet(&self, key: &str) -> Option<&RangeFacet> {
        self.ranges().find(|f| f.key == key)
    }

    /// Every categorical selection empty, every range at its full bound.
    pub fn default_state(&self) -> FilterState {
        FilterState {
            selections: self.categorical().map(|f| (f.key.clone(), Vec::new())).collect(),
            ranges: self.ranges().map(|f| (f.key.clone(), f.bounds())).collect(),
        }
    }

    /// Effective interval for a range facet: the state's entry, else the default.
    pub fn effective_range(&self, facet: &RangeFacet, state: &FilterState) -> RangeBound {
        state.range(&facet.key).unwrap_or_else(|| facet.bounds())
    }

    /// Checks a selection state against this schema.
    ///
    /// The engine does not require this: out-of-domain selections simply never
    /// match and inverted ranges match nothing. Callers use it to reject bad
    /// input before it reaches the engine.
    pub fn validate_state(&self, state: &FilterState) -> Result<()> {
        for (key, values) in &state.selections {
            let facet = self.categorical_facet(key).ok_or_else(|| Error::UnknownFacet(key.clone()))?;
            if let Some(value) = values.iter().find(|v| !facet.has_option(v)) {
                return Err(Error::UnknownOption { facet: key.clone(), value: value.clone() });
            }
        }
        for (key, range) in &state.ranges {
            let facet = self.range_facet(key).ok_or_else(|| Error::UnknownFacet(key.clone()))?;
            if range.is_inverted() {
                return Err(Error::InvertedRange { facet: key.clone(), low: range.low, high: range.high });
            }
            if !range.within(&facet.bounds()) {
                return Err(Error::OutOfBounds { facet: key.clone(), min: facet.min, max: facet.max });
            }
        }
        Ok(())
    }
}

impl Default for FacetSchema {
    fn default() -> Self {
        Self::base()
    }
}

impl TryFrom<Vec<FacetDefinition>> for FacetSchema {
    type Error = Error;

    fn try_from(facets: Vec<FacetDefinition>) -> Result<Self> {
        Self::new(facets)
    }
}

impl From<FacetSchema> for Vec<FacetDefinition> {
    fn from(schema: FacetSchema) -> Self {
        schema.facets
    }
}
