use crate::types::{CategoricalField, NumericField, Product};

/// A record the filter engine can evaluate facets against.
pub trait Facetable {
    fn categorical_value(&self, field: CategoricalField) -> &str;
    fn numeric_value(&self, field: NumericField) -> f64;
}

impl Facetable for Product {
    fn categorical_value(&self, field: CategoricalField) -> &str {
        self.categorical(field)
    }

    fn numeric_value(&self, field: NumericField) -> f64 {
        self.numeric(field)
    }
}

impl<T: Facetable + ?Sized> Facetable for &T {
    fn categorical_value(&self, field: CategoricalField) -> &str {
        (**self).categorical_value(field)
    }

    fn numeric_value(&self, field: NumericField) -> f64 {
        (**self).numeric_value(field)
    }
}
