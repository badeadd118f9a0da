#![allow(clippy::unwrap_used)]

use super::util::*;
use crate::config::Currency;

fn usd() -> Currency {
    Currency::default()
}

fn rupiah() -> Currency {
    Currency {
        symbol: "Rp ".into(),
        rate: 1.0,
    }
}

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("hello", 10), "hello");
}

#[test]
fn test_truncate_exact_length() {
    assert_eq!(truncate("hello", 5), "hello");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("hello world", 5), "hell…");
}

#[test]
fn test_truncate_zero_max() {
    assert_eq!(truncate("hello", 0), "");
}

#[test]
fn test_truncate_unicode() {
    assert_eq!(truncate("日本語テスト", 4), "日本語…");
}

#[test]
fn test_truncate_one_char() {
    assert_eq!(truncate("hello", 1), "…");
}

// ── format_amount ─────────────────────────────────────────────

#[test]
fn test_format_amount_converts_with_rate() {
    assert_eq!(format_amount(18_517_500.0, &usd()), "$1,234.50");
}

#[test]
fn test_format_amount_rounds_to_cents() {
    // 50,000 / 15,000 = 3.333…
    assert_eq!(format_amount(50_000.0, &usd()), "$3.33");
}

#[test]
fn test_format_amount_identity_rate() {
    assert_eq!(format_amount(7_500_000.0, &rupiah()), "Rp 7,500,000.00");
}

#[test]
fn test_format_amount_zero() {
    assert_eq!(format_amount(0.0, &usd()), "$0.00");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(-637_500.0, &usd()), "-$42.50");
}

#[test]
fn test_format_amount_tiny_negative_has_no_sign() {
    assert_eq!(format_amount(-1.0, &usd()), "$0.00");
}

#[test]
fn test_format_amount_non_finite() {
    assert_eq!(format_amount(f64::NAN, &usd()), "—");
    assert_eq!(format_amount(f64::INFINITY, &usd()), "—");
}

// ── format_compact / bar_value ────────────────────────────────

#[test]
fn test_format_compact() {
    assert_eq!(format_compact(8_500_000.0, &usd()), "$567");
    assert_eq!(format_compact(15_000_000_000.0, &usd()), "$1,000,000");
    assert_eq!(format_compact(f64::NAN, &usd()), "—");
}

#[test]
fn test_bar_value() {
    assert_eq!(bar_value(8_500_000.0, &usd()), 567);
    assert_eq!(bar_value(0.0, &usd()), 0);
    assert_eq!(bar_value(-10.0, &rupiah()), 0);
    assert_eq!(bar_value(f64::NAN, &usd()), 0);
}

// ── scrolling ─────────────────────────────────────────────────

#[test]
fn test_scroll_down_moves_window() {
    let (mut index, mut scroll) = (0, 0);
    for _ in 0..5 {
        scroll_down(&mut index, &mut scroll, 10, 3);
    }
    assert_eq!(index, 5);
    assert_eq!(scroll, 3);
}

#[test]
fn test_scroll_down_stops_at_end() {
    let (mut index, mut scroll) = (1, 0);
    scroll_down(&mut index, &mut scroll, 2, 5);
    assert_eq!(index, 1);
}

#[test]
fn test_scroll_up_and_bounds() {
    let (mut index, mut scroll) = (3, 3);
    scroll_up(&mut index, &mut scroll);
    assert_eq!((index, scroll), (2, 2));
    scroll_to_top(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));
    scroll_up(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));
    scroll_to_bottom(&mut index, &mut scroll, 10, 4);
    assert_eq!((index, scroll), (9, 6));
}
