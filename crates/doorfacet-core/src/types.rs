//! Catalog domain types consumed by the filter engine.

use serde::{Deserialize, Serialize};
use std::fmt;

pub type ProductId = String;

/// Option label used for a `true` boolean attribute.
pub const YES: &str = "Yes";
/// Option label used for a `false` boolean attribute.
pub const NO: &str = "No";

/// Declares a closed enumeration whose serialized form is its display label.
macro_rules! labeled_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $label)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self { $($name::$variant => $label),+ }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

labeled_enum!(
    /// Lead time before a door ships.
    Availability { Now => "Now", SixToEightWeeks => "6-8 weeks" }
);

labeled_enum!(
    Style { Modern => "Modern", Transitional => "Transitional", Traditional => "Traditional" }
);

labeled_enum!(
    DoorType {
        Single => "Single door",
        Double => "Double door",
        WithSidelight => "Doors with Sidelight",
        WithTransom => "Doors with transom",
        Wine => "Wine doors",
        Windows => "Windows",
    }
);

labeled_enum!(
    Glass { Tempered => "Tempered", Impact => "Impact" }
);

labeled_enum!(
    Shape { Flat => "Flat", Arch => "Arch", Round => "Round" }
);

/// One catalog item available for filtering.
///
/// Products are read-only inputs: the engine never mutates them. Dimensions
/// are in inches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub image: String,
    pub availability: Availability,
    pub style: Style,
    pub door_type: DoorType,
    pub width_in: f64,
    pub height_in: f64,
    pub glass: Glass,
    pub shape: Shape,
    pub thermal: bool,
    pub on_sale: bool,
}

/// Categorical product attributes a multi-select facet can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoricalField {
    Availability,
    Style,
    DoorType,
    Glass,
    Shape,
    Thermal,
    OnSale,
}

impl CategoricalField {
    /// Every value a product can carry for this field.
    pub fn domain(self) -> Vec<&'static str> {
        fn labels<T: Copy>(all: &[T], f: impl Fn(T) -> &'static str) -> Vec<&'static str> {
            all.iter().copied().map(f).collect()
        }
        match self {
            Self::Availability => labels(Availability::ALL, Availability::as_str),
            Self::Style => labels(Style::ALL, Style::as_str),
            Self::DoorType => labels(DoorType::ALL, DoorType::as_str),
            Self::Glass => labels(Glass::ALL, Glass::as_str),
            Self::Shape => labels(Shape::ALL, Shape::as_str),
            Self::Thermal | Self::OnSale => vec![YES, NO],
        }
    }

    pub fn contains(self, value: &str) -> bool {
        self.domain().contains(&value)
    }
}

/// Numeric product attributes a range facet can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericField {
    Width,
    Height,
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag { YES } else { NO }
}

impl Product {
    pub fn categorical(&self, field: CategoricalField) -> &'static str {
        match field {
            CategoricalField::Availability => self.availability.as_str(),
            CategoricalField::Style => self.style.as_str(),
            CategoricalField::DoorType => self.door_type.as_str(),
            CategoricalField::Glass => self.glass.as_str(),
            CategoricalField::Shape => self.shape.as_str(),
            CategoricalField::Thermal => yes_no(self.thermal),
            CategoricalField::OnSale => yes_no(self.on_sale),
        }
    }

    pub fn numeric(&self, field: NumericField) -> f64 {
        match field {
            NumericField::Width => self.width_in,
            NumericField::Height => self.height_in,
        }
    }
}
