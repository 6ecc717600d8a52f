use std::collections::BTreeSet;
use std::fmt;

use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// FilterOption – one of the derived views over the response
// ---------------------------------------------------------------------------

/// A client-side filter over an already-fetched response.
///
/// Variant order is display order, and also the key order of the filtered
/// output, so `FilterOption` derives `Ord` for use in a `BTreeSet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterOption {
    Alphabets,
    Numbers,
    HighestLowercase,
}

impl FilterOption {
    /// Every option, in display order.
    pub const ALL: [FilterOption; 3] = [
        FilterOption::Alphabets,
        FilterOption::Numbers,
        FilterOption::HighestLowercase,
    ];

    /// Label shown next to the checkbox.
    pub fn label(self) -> &'static str {
        match self {
            FilterOption::Alphabets => "Alphabets",
            FilterOption::Numbers => "Numbers",
            FilterOption::HighestLowercase => "Highest lowercase alphabet",
        }
    }

    /// Key under which this option's output appears in the filtered response.
    pub fn output_key(self) -> &'static str {
        match self {
            FilterOption::Alphabets => "alphabets",
            FilterOption::Numbers => "numbers",
            FilterOption::HighestLowercase => "highest_lowercase_alphabet",
        }
    }
}

impl fmt::Display for FilterOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// FilterSelection – the set of ticked options
// ---------------------------------------------------------------------------

/// Which filter options are currently selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    selected: BTreeSet<FilterOption>,
}

impl FilterSelection {
    pub fn contains(&self, option: FilterOption) -> bool {
        self.selected.contains(&option)
    }

    pub fn set(&mut self, option: FilterOption, on: bool) {
        if on {
            self.selected.insert(option);
        } else {
            self.selected.remove(&option);
        }
    }

    /// Flip a single option. Returns the new state.
    pub fn toggle(&mut self, option: FilterOption) -> bool {
        let on = !self.contains(option);
        self.set(option, on);
        on
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected options in display order, regardless of click order.
    pub fn iter(&self) -> impl Iterator<Item = FilterOption> + '_ {
        self.selected.iter().copied()
    }
}

impl FromIterator<FilterOption> for FilterSelection {
    fn from_iter<I: IntoIterator<Item = FilterOption>>(iter: I) -> Self {
        Self {
            selected: iter.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Payload – validated request body
// ---------------------------------------------------------------------------

/// A request body that parsed and carries a `data` array.
///
/// The whole object is kept, so extra fields reach the server untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
    body: Map<String, Value>,
}

impl Payload {
    /// Wrap an object already known to hold a `data` array.
    pub(crate) fn from_object(body: Map<String, Value>) -> Self {
        Payload { body }
    }

    /// Number of entries in the `data` array.
    pub fn data_len(&self) -> usize {
        self.body
            .get("data")
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }
}

impl serde::Serialize for Payload {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.body.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_iterates_in_display_order() {
        let mut sel = FilterSelection::default();
        sel.toggle(FilterOption::HighestLowercase);
        sel.toggle(FilterOption::Alphabets);

        let order: Vec<_> = sel.iter().collect();
        assert_eq!(
            order,
            vec![FilterOption::Alphabets, FilterOption::HighestLowercase]
        );
    }

    #[test]
    fn toggle_twice_deselects() {
        let mut sel = FilterSelection::default();
        assert!(sel.toggle(FilterOption::Numbers));
        assert!(!sel.toggle(FilterOption::Numbers));
        assert!(sel.is_empty());
    }

    #[test]
    fn labels_and_keys() {
        let labels: Vec<_> = FilterOption::ALL.iter().map(|o| o.label()).collect();
        assert_eq!(
            labels,
            vec!["Alphabets", "Numbers", "Highest lowercase alphabet"]
        );
        assert_eq!(
            FilterOption::HighestLowercase.output_key(),
            "highest_lowercase_alphabet"
        );
    }

    #[test]
    fn payload_serializes_whole_object() {
        let mut body = Map::new();
        body.insert("data".into(), serde_json::json!(["a", "1"]));
        body.insert("user".into(), serde_json::json!("x"));
        let payload = Payload::from_object(body);

        assert_eq!(payload.data_len(), 2);
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({ "data": ["a", "1"], "user": "x" })
        );
    }
}
