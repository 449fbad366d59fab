//! Shared formatting utilities for UI components.

use unicode_width::UnicodeWidthStr;

/// Format a number with thousand separators.
pub(super) fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Greedily pack words into lines no wider than `width` terminal cells.
///
/// Returns word indices per line. A word wider than `width` gets a line of
/// its own.
pub(super) fn pack_words<S: AsRef<str>>(words: &[S], width: usize, gap: usize) -> Vec<Vec<usize>> {
    let mut lines: Vec<Vec<usize>> = Vec::new();
    let mut current: Vec<usize> = Vec::new();
    let mut used = 0;

    for (idx, word) in words.iter().enumerate() {
        let w = word.as_ref().width();
        let needed = if current.is_empty() { w } else { used + gap + w };
        if !current.is_empty() && needed > width {
            lines.push(std::mem::take(&mut current));
            used = w;
        } else {
            used = needed;
        }
        current.push(idx);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_are_separated() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn words_wrap_by_display_width() {
        let words = ["Sejlsport", "Roning", "Cykling", "Håndbold"];
        let lines = pack_words(&words, 17, 1);
        assert_eq!(lines, vec![vec![0, 1], vec![2, 3]]);
    }

    #[test]
    fn oversized_word_gets_its_own_line() {
        let words = ["a", "Modern Pentathlon", "b"];
        let lines = pack_words(&words, 5, 1);
        assert_eq!(lines, vec![vec![0], vec![1], vec![2]]);
    }
}
