//! The current query: selected options per categorical facet and an interval
//! per range facet, keyed by facet key.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A closed numeric interval `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeBound {
    pub low: f64,
    pub high: f64,
}

impl RangeBound {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Inclusive on both ends. An inverted interval contains nothing.
    pub fn contains(&self, value: f64) -> bool {
        self.low <= value && value <= self.high
    }

    pub fn is_inverted(&self) -> bool {
        self.low > self.high
    }

    pub fn within(&self, outer: &RangeBound) -> bool {
        outer.low <= self.low && self.high <= outer.high
    }

    /// Input-side normalization for slider values: orders the endpoints and
    /// clamps both into `bounds`. The reducer never calls this.
    pub fn clamped(low: f64, high: f64, bounds: RangeBound) -> Self {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        Self { low: low.clamp(bounds.low, bounds.high), high: high.clamp(bounds.low, bounds.high) }
    }
}

/// Filter selection state.
///
/// A categorical facet with no entry (or an empty list) is unconstrained. A
/// range facet with no entry sits at its schema default. The engine treats
/// this value as read-only; transitions in [`crate::reducer`] return a new
/// state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub selections: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub ranges: BTreeMap<String, RangeBound>,
}

impl FilterState {
    /// Selected options for `key`, in selection order.
    pub fn selected(&self, key: &str) -> &[String] {
        self.selections.get(key).map_or(&[], Vec::as_slice)
    }

    pub fn is_selected(&self, key: &str, value: &str) -> bool {
        self.selected(key).iter().any(|v| v == value)
    }

    pub fn range(&self, key: &str) -> Option<RangeBound> {
        self.ranges.get(key).copied()
    }

    /// Copy of this state with `value` added to `key`'s selection (no-op if present).
    pub fn with_selected(&self, key: &str, value: &str) -> Self {
        let mut next = self.clone();
        let values = next.selections.entry(key.to_string()).or_default();
        if !values.iter().any(|v| v == value) {
            values.push(value.to_string());
        }
        next
    }

    /// Copy of this state with every occurrence of `value` removed from `key`.
    pub fn without_selected(&self, key: &str, value: &str) -> Self {
        let mut next = self.clone();
        if let Some(values) = next.selections.get_mut(key) {
            values.retain(|v| v != value);
        }
        next
    }

    pub fn with_range(&self, key: &str, range: RangeBound) -> Self {
        let mut next = self.clone();
        next.ranges.insert(key.to_string(), range);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive() {
        let r = RangeBound::new(30.0, 80.0);
        assert!(r.contains(30.0));
        assert!(r.contains(80.0));
        assert!(!r.contains(80.5));
        assert!(!RangeBound::new(60.0, 50.0).contains(55.0));
    }

    #[test]
    fn clamped_orders_and_clamps() {
        let bounds = RangeBound::new(30.0, 80.0);
        assert_eq!(RangeBound::clamped(90.0, 10.0, bounds), RangeBound::new(30.0, 80.0));
        assert_eq!(RangeBound::clamped(60.0, 40.0, bounds), RangeBound::new(40.0, 60.0));
    }

    #[test]
    fn with_selected_is_idempotent_and_keeps_order() {
        let s = FilterState::default().with_selected("styles", "Modern").with_selected("styles", "Traditional");
        let again = s.with_selected("styles", "Modern");
        assert_eq!(again.selected("styles"), ["Modern", "Traditional"]);
        assert_eq!(s, again);
    }

    #[test]
    fn transitions_leave_original_untouched() {
        let s = FilterState::default().with_selected("glass", "Impact");
        let _ = s.without_selected("glass", "Impact");
        let _ = s.with_range("width", RangeBound::new(40.0, 50.0));
        assert!(s.is_selected("glass", "Impact"));
        assert!(s.range("width").is_none());
    }
}
