//! A week of readings keyed by day name, driven through every query.

use bstree::tree::{MapEntry, OrderedMap, TraversalOrder};
use rstest::{fixture, rstest};

type Comparator = fn(&&'static str, &&'static str) -> std::cmp::Ordering;

fn alphabetical(left: &&'static str, right: &&'static str) -> std::cmp::Ordering {
    left.cmp(right)
}

const READINGS: [(&str, i32); 7] = [
    ("Monday", 65),
    ("Tuesday", 71),
    ("Wednesday", 68),
    ("Thursday", 66),
    ("Friday", 64),
    ("Saturday", 70),
    ("Sunday", 75),
];

#[fixture]
fn week() -> OrderedMap<&'static str, i32> {
    READINGS.into_iter().collect()
}

#[fixture]
fn week_by_comparator() -> OrderedMap<&'static str, i32, Comparator> {
    let mut map = OrderedMap::with_comparator(alphabetical as Comparator);
    map.extend(READINGS);
    map
}

/// Renders a traversal the way a console listing would: `(k,v) ` per entry.
fn listing<'a>(entries: impl Iterator<Item = (&'a &'static str, &'a i32)>) -> String {
    entries
        .map(|entry| format!("{} ", MapEntry::<&str, i32>::from(entry)))
        .collect()
}

#[rstest]
fn test_inorder_listing(week: OrderedMap<&'static str, i32>) {
    assert_eq!(
        listing(week.iter()),
        "(Friday,64) (Monday,65) (Saturday,70) (Sunday,75) (Thursday,66) (Tuesday,71) (Wednesday,68) "
    );
}

#[rstest]
fn test_preorder_reflects_insertion_shape(week: OrderedMap<&'static str, i32>) {
    let keys: Vec<&str> = week
        .traverse(TraversalOrder::PreOrder)
        .map(|(key, _)| *key)
        .collect();
    assert_eq!(
        keys,
        vec!["Monday", "Friday", "Tuesday", "Thursday", "Saturday", "Sunday", "Wednesday"]
    );
}

#[rstest]
fn test_membership(week: OrderedMap<&'static str, i32>) {
    assert!(week.contains(&"Thursday"));
    assert!(!week.contains(&"March"));
}

#[rstest]
fn test_removal_and_queries(mut week: OrderedMap<&'static str, i32>) {
    assert!(week.delete(&"Thursday"));
    assert!(!week.delete(&"March"));
    assert_eq!(week.len(), 6);

    // Thursday had only a left child, which takes its place.
    let keys: Vec<&str> = week
        .traverse(TraversalOrder::PreOrder)
        .map(|(key, _)| *key)
        .collect();
    assert_eq!(
        keys,
        vec!["Monday", "Friday", "Tuesday", "Saturday", "Sunday", "Wednesday"]
    );

    assert_eq!(week.first(), Some((&"Friday", &64)));
    assert_eq!(week.last(), Some((&"Wednesday", &68)));
    assert_eq!(week.ceiling(&"Monday"), Some((&"Monday", &65)));
    assert_eq!(week.ceiling(&"October"), Some((&"Saturday", &70)));
    assert_eq!(week.floor(&"Thursday"), Some((&"Sunday", &75)));
    assert_eq!(week.floor(&"October"), Some((&"Monday", &65)));
}

#[rstest]
fn test_comparator_variant_matches_natural(
    week: OrderedMap<&'static str, i32>,
    week_by_comparator: OrderedMap<&'static str, i32, Comparator>,
) {
    for order in TraversalOrder::ALL {
        assert!(week.traverse(order).eq(week_by_comparator.traverse(order)));
    }
    assert_eq!(week_by_comparator.floor(&"October"), Some((&"Monday", &65)));
}

#[rstest]
fn test_update_reading(mut week: OrderedMap<&'static str, i32>) {
    assert!(!week.insert("Sunday", 80));
    if let Some(reading) = week.get_mut(&"Friday") {
        *reading += 1;
    }
    assert_eq!(week.get(&"Sunday"), Some(&80));
    assert_eq!(week.get(&"Friday"), Some(&65));
    assert_eq!(week.len(), 7);
}

#[rstest]
fn test_consuming_entries_in_postorder(week: OrderedMap<&'static str, i32>) {
    let entries: Vec<String> = week
        .into_entries(TraversalOrder::PostOrder)
        .map(|entry| entry.to_string())
        .collect();
    assert_eq!(entries.first().map(String::as_str), Some("(Friday,64)"));
    assert_eq!(entries.last().map(String::as_str), Some("(Monday,65)"));
}
