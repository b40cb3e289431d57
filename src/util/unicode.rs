use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Horizontal placement of text inside a fixed-width cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Display width in terminal cells. Tabs count as 4 cells.
pub fn display_width(s: &str) -> usize {
    s.split('\t')
        .enumerate()
        .map(|(i, part)| {
            let w = UnicodeWidthStr::width(part);
            if i > 0 { w + 4 } else { w }
        })
        .sum()
}

/// Truncate a string to fit within `max_cells` terminal cells, appending `…` if truncated.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 1 {
        return "\u{2026}".to_string();
    }
    let budget = max_cells - 1; // reserve 1 cell for '…'
    let mut width = 0;
    let mut result = String::new();
    for grapheme in s.graphemes(true) {
        let gw = grapheme_display_width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        result.push_str(grapheme);
    }
    result.push('\u{2026}');
    result
}

/// Truncate and pad `s` to exactly `width` cells
pub fn fit_to_width(s: &str, width: usize, align: Align) -> String {
    let text = truncate_to_width(s, width);
    let pad = width.saturating_sub(display_width(&text));
    match align {
        Align::Left => format!("{}{}", text, " ".repeat(pad)),
        Align::Right => format!("{}{}", " ".repeat(pad), text),
    }
}

/// Remove the last grapheme cluster (backspace in a text input)
pub fn pop_grapheme(s: &mut String) {
    if let Some((idx, _)) = s.grapheme_indices(true).next_back() {
        s.truncate(idx);
    }
}

/// Display width of a grapheme cluster.
fn grapheme_display_width(g: &str) -> usize {
    if g == "\t" {
        return 4;
    }
    UnicodeWidthStr::width(g)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_width_ascii_and_wide() {
        assert_eq!(display_width("Product 1"), 9);
        assert_eq!(display_width("工場"), 4);
        assert_eq!(display_width("cafe\u{0301}"), 4);
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("Location 1", 20), "Location 1");
        assert_eq!(truncate_to_width("Location 1", 6), "Locat\u{2026}");
        assert_eq!(truncate_to_width("Location 1", 1), "\u{2026}");
        assert_eq!(truncate_to_width("Location 1", 0), "");
    }

    #[test]
    fn truncate_does_not_split_wide_chars() {
        // 工 is 2 cells; budget 2 leaves room for one wide char + ellipsis = 3
        assert_eq!(truncate_to_width("工場工場", 3), "工\u{2026}");
    }

    #[test]
    fn fit_pads_by_alignment() {
        assert_eq!(fit_to_width("10", 5, Align::Right), "   10");
        assert_eq!(fit_to_width("ab", 4, Align::Left), "ab  ");
        assert_eq!(fit_to_width("abcdef", 4, Align::Left), "abc\u{2026}");
    }

    #[test]
    fn pop_grapheme_removes_whole_cluster() {
        let mut s = "cafe\u{0301}".to_string();
        pop_grapheme(&mut s);
        assert_eq!(s, "caf");
        let mut empty = String::new();
        pop_grapheme(&mut empty);
        assert_eq!(empty, "");
    }
}
