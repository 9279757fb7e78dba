//! Seed Data
//!
//! Master lists the store can start from.

use crate::config::SeedKind;
use crate::record::Record;

pub const ITEM_NAMES: [&str; 10] = [
    "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten",
];

/// Amounts of the named set fall in `0..NAMED_AMOUNT_BOUND`
pub const NAMED_AMOUNT_BOUND: u32 = 100;

/// The ten named records, amounts drawn from `next_amount`
pub fn named(mut next_amount: impl FnMut() -> u32) -> Vec<Record> {
    ITEM_NAMES
        .iter()
        .map(|name| {
            Record::new(
                *name,
                next_amount() % NAMED_AMOUNT_BOUND,
                format!("This is a description for {}", name),
            )
        })
        .collect()
}

/// `Item_0 .. Item_{count-1}`, amount equal to the index
pub fn indexed(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| {
            let name = format!("Item_{}", i);
            let description = format!("Description for {}", name);
            Record::new(name, i as u32, description)
        })
        .collect()
}

pub fn from_kind(kind: &SeedKind, next_amount: impl FnMut() -> u32) -> Vec<Record> {
    match kind {
        SeedKind::Named => named(next_amount),
        SeedKind::Indexed { count } => indexed(*count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_amounts_bounded() {
        let mut n = 95;
        let records = named(|| {
            n += 1;
            n
        });
        assert_eq!(records.len(), 10);
        assert_eq!(records[0].name, "One");
        assert_eq!(records[0].amount, 96);
        assert_eq!(records[4].amount, 0);
        assert_eq!(records[9].description, "This is a description for Ten");
    }

    #[test]
    fn test_indexed() {
        let records = indexed(3);
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Item_0", "Item_1", "Item_2"]);
        assert_eq!(records[2].amount, 2);
        assert!(indexed(0).is_empty());
    }

    #[test]
    fn test_from_kind() {
        assert_eq!(from_kind(&SeedKind::Indexed { count: 4 }, || 0).len(), 4);
        assert_eq!(from_kind(&SeedKind::Named, || 7)[3].amount, 7);
    }
}
