#![allow(clippy::unwrap_used)]

use chrono::{DateTime, Utc};

use super::*;

fn at(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}

fn lunch_and_grab() -> Vec<Transaction> {
    vec![
        Transaction::expense(at("2025-02-01T12:30:00Z"), "Lunch", 50_000.0, "Food"),
        Transaction::expense(at("2025-02-02T09:15:00Z"), "Grab Transport", 35_000.0, "Transportation"),
    ]
}

fn expenses() -> Vec<Transaction> {
    vec![
        Transaction::expense(at("2025-02-01T12:30:00Z"), "Lunch", 50_000.0, "Food"),
        Transaction::expense(at("2025-02-02T09:15:00Z"), "Grab Transport", 35_000.0, "Transportation"),
        Transaction::expense(at("2025-02-03T18:45:00Z"), "Coffee", 25_000.0, "Entertainment"),
        Transaction::expense(at("2025-02-06T22:10:00Z"), "Netflix", 65_000.0, "Entertainment"),
        Transaction::expense(at("2025-02-08T10:05:00Z"), "Donation", 50_000.0, "Social"),
        Transaction::expense(at("2025-02-10T16:40:00Z"), "Snack", 30_000.0, "Food"),
        Transaction::expense(at("2025-02-11T08:00:00Z"), "Parking", 5_000.0, ""),
    ]
}

fn titles(rows: &[Transaction]) -> Vec<&str> {
    rows.iter().map(|t| t.description.as_str()).collect()
}

fn state(sort_key: SortKey, sort_order: SortOrder) -> TableViewState {
    TableViewState {
        sort_key,
        sort_order,
        ..TableViewState::default()
    }
}

// ── Defaults & header clicks ──────────────────────────────────

#[test]
fn test_default_state() {
    let s = TableViewState::default();
    assert_eq!(s.sort_key, SortKey::Date);
    assert_eq!(s.sort_order, SortOrder::Descending);
    assert_eq!(s.category_filter, ALL);
    assert!(s.search_text.is_empty());
    assert!(!s.is_filtered());
}

#[test]
fn test_click_active_header_toggles_direction() {
    let mut s = TableViewState::default();
    s.click_header(SortKey::Date);
    assert_eq!(s.sort_order, SortOrder::Ascending);
    s.click_header(SortKey::Date);
    assert_eq!(s.sort_order, SortOrder::Descending);
}

#[test]
fn test_click_other_header_resets_to_ascending() {
    let mut s = TableViewState::default();
    s.click_header(SortKey::Amount);
    assert_eq!(s.sort_key, SortKey::Amount);
    assert_eq!(s.sort_order, SortOrder::Ascending);
}

#[test]
fn test_sort_key_next_wraps() {
    assert_eq!(SortKey::Date.next(), SortKey::Description);
    assert_eq!(SortKey::Category.next(), SortKey::Date);
}

#[test]
fn test_sort_key_parse() {
    assert_eq!(SortKey::parse("amount"), Some(SortKey::Amount));
    assert_eq!(SortKey::parse("Title"), Some(SortKey::Description));
    assert_eq!(SortKey::parse("source"), Some(SortKey::Category));
    assert_eq!(SortKey::parse("colour"), None);
}

// ── project ───────────────────────────────────────────────────

#[test]
fn test_sort_by_amount_ascending() {
    let rows = project(&lunch_and_grab(), &state(SortKey::Amount, SortOrder::Ascending));
    assert_eq!(titles(&rows), vec!["Grab Transport", "Lunch"]);
}

#[test]
fn test_search_matches_category_case_insensitively() {
    let mut s = TableViewState::default();
    s.search_text = "food".into();
    let rows = project(&lunch_and_grab(), &s);
    assert_eq!(titles(&rows), vec!["Lunch"]);
}

#[test]
fn test_search_matches_description() {
    let mut s = TableViewState::default();
    s.search_text = "GRAB".into();
    let rows = project(&lunch_and_grab(), &s);
    assert_eq!(titles(&rows), vec!["Grab Transport"]);
}

#[test]
fn test_category_filter_is_exact_and_case_sensitive() {
    let mut s = state(SortKey::Date, SortOrder::Ascending);
    s.category_filter = "Entertainment".into();
    assert_eq!(titles(&project(&expenses(), &s)), vec!["Coffee", "Netflix"]);

    s.category_filter = "entertainment".into();
    assert!(project(&expenses(), &s).is_empty());

    s.category_filter = "Enter".into();
    assert!(project(&expenses(), &s).is_empty());
}

#[test]
fn test_filter_and_search_combine() {
    let mut s = state(SortKey::Date, SortOrder::Ascending);
    s.category_filter = "Food".into();
    s.search_text = "sna".into();
    assert_eq!(titles(&project(&expenses(), &s)), vec!["Snack"]);
}

#[test]
fn test_sort_by_date_descending() {
    let rows = project(&expenses(), &TableViewState::default());
    assert_eq!(rows.first().unwrap().description, "Parking");
    assert_eq!(rows.last().unwrap().description, "Lunch");
}

#[test]
fn test_sort_by_category_puts_missing_first() {
    let rows = project(&expenses(), &state(SortKey::Category, SortOrder::Ascending));
    assert_eq!(rows[0].description, "Parking");
    assert_eq!(rows[1].label(), "Entertainment");
}

#[test]
fn test_equal_keys_keep_input_order_both_directions() {
    // Lunch and Donation are both 50,000
    let asc = project(&expenses(), &state(SortKey::Amount, SortOrder::Ascending));
    let desc = project(&expenses(), &state(SortKey::Amount, SortOrder::Descending));

    let pos = |rows: &[Transaction], name: &str| rows.iter().position(|t| t.description == name).unwrap();
    assert!(pos(&asc, "Lunch") < pos(&asc, "Donation"));
    assert!(pos(&desc, "Lunch") < pos(&desc, "Donation"));
}

#[test]
fn test_unfiltered_projection_preserves_length() {
    for key in SortKey::all() {
        let rows = project(&expenses(), &state(*key, SortOrder::Ascending));
        assert_eq!(rows.len(), expenses().len());
    }
}

#[test]
fn test_projection_is_idempotent() {
    let s = state(SortKey::Description, SortOrder::Descending);
    let once = project(&expenses(), &s);
    let twice = project(&once, &s);
    assert_eq!(once, twice);
}

#[test]
fn test_sort_desc_then_asc_equals_asc() {
    for key in SortKey::all() {
        let asc = project(&expenses(), &state(*key, SortOrder::Ascending));
        let desc = project(&expenses(), &state(*key, SortOrder::Descending));
        let back = project(&desc, &state(*key, SortOrder::Ascending));
        assert_eq!(titles(&back), titles(&asc), "failed for {key:?}");
    }
}

#[test]
fn test_empty_input() {
    let mut s = TableViewState::default();
    s.search_text = "anything".into();
    assert!(project(&[], &s).is_empty());
    assert!(project(&[], &TableViewState::default()).is_empty());
}

// ── Filter options ────────────────────────────────────────────

#[test]
fn test_filter_options_unique_in_first_seen_order() {
    let options = filter_options(&expenses());
    assert_eq!(
        options,
        vec!["All", "Food", "Transportation", "Entertainment", "Social"]
    );
}

#[test]
fn test_cycle_filter_wraps() {
    let options = filter_options(&lunch_and_grab());
    let mut s = TableViewState::default();

    s.cycle_filter(&options, true);
    assert_eq!(s.category_filter, "Food");
    s.cycle_filter(&options, true);
    assert_eq!(s.category_filter, "Transportation");
    s.cycle_filter(&options, true);
    assert_eq!(s.category_filter, ALL);
    s.cycle_filter(&options, false);
    assert_eq!(s.category_filter, "Transportation");
}

#[test]
fn test_cycle_filter_unknown_restarts() {
    let options = filter_options(&lunch_and_grab());
    let mut s = TableViewState::default();
    s.category_filter = "Gone".into();
    s.cycle_filter(&options, false);
    assert_eq!(s.category_filter, ALL);
}
