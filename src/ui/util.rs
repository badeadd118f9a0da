use crate::config::Currency;

fn with_commas(int_part: &str) -> String {
    int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",")
}

fn converted(val: f64, currency: &Currency) -> f64 {
    if currency.rate > 0.0 {
        val / currency.rate
    } else {
        val
    }
}

/// Convert a stored amount for display, with thousand separators and
/// 2 decimal places. e.g. `18_517_500.0` at rate 15000 → `"$1,234.50"`.
/// Non-finite values (the average of nothing) render as a dash.
pub(crate) fn format_amount(val: f64, currency: &Currency) -> String {
    if !val.is_finite() {
        return "—".into();
    }
    let shown = converted(val, currency);
    let formatted = format!("{:.2}", shown.abs());
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");
    let sign = if shown < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{sign}{}{}.{dec_part}", currency.symbol, with_commas(int_part))
}

/// Like [`format_amount`] but rounded to whole units, for chart labels.
pub(crate) fn format_compact(val: f64, currency: &Currency) -> String {
    if !val.is_finite() {
        return "—".into();
    }
    let shown = converted(val, currency);
    let formatted = format!("{:.0}", shown.abs());
    let sign = if shown < 0.0 && formatted != "0" { "-" } else { "" };
    format!("{sign}{}{}", currency.symbol, with_commas(&formatted))
}

/// Bar height for charts, in display units.
pub(crate) fn bar_value(val: f64, currency: &Currency) -> u64 {
    let shown = converted(val, currency).round();
    if shown.is_finite() && shown > 0.0 {
        shown as u64
    } else {
        0
    }
}

/// Truncate a string to `max` visible characters, appending "…" if truncated.
/// The result is guaranteed to be at most `max` characters (counting "…" as one).
/// Safe for multi-byte UTF-8 characters.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let char_count = s.chars().count();
    if char_count <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{truncated}…")
}

/// Move a list cursor down by one, adjusting scroll to keep cursor visible.
pub(crate) fn scroll_down(index: &mut usize, scroll: &mut usize, len: usize, page: usize) {
    if *index + 1 < len {
        *index += 1;
        if *index >= *scroll + page {
            *scroll = index.saturating_sub(page.saturating_sub(1));
        }
    }
}

/// Move a list cursor up by one, adjusting scroll to keep cursor visible.
pub(crate) fn scroll_up(index: &mut usize, scroll: &mut usize) {
    *index = index.saturating_sub(1);
    if *index < *scroll {
        *scroll = *index;
    }
}

/// Jump cursor to the top of a list.
pub(crate) fn scroll_to_top(index: &mut usize, scroll: &mut usize) {
    *index = 0;
    *scroll = 0;
}

/// Jump cursor to the bottom of a list.
pub(crate) fn scroll_to_bottom(index: &mut usize, scroll: &mut usize, len: usize, page: usize) {
    if len > 0 {
        *index = len - 1;
        *scroll = index.saturating_sub(page.saturating_sub(1));
    }
}
