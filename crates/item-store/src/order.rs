//! Ordering options offered as a single-choice selector

use serde::{Deserialize, Serialize};

/// How the displayed list is ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Master list order (reset)
    #[default]
    Original,
    Name,
    Amount,
}

impl SortOrder {
    /// Selector options, in display order
    pub const ALL: [SortOrder; 3] = [SortOrder::Original, SortOrder::Name, SortOrder::Amount];

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Original => "Reset",
            SortOrder::Name => "Alphabetical",
            SortOrder::Amount => "Amount",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            SortOrder::Original => 0,
            SortOrder::Name => 1,
            SortOrder::Amount => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_selector_position() {
        for (i, order) in SortOrder::ALL.iter().enumerate() {
            assert_eq!(order.index(), i);
        }
        assert_eq!(SortOrder::default(), SortOrder::Original);
        assert_eq!(SortOrder::Name.label(), "Alphabetical");
    }
}
