//! Line wrapper: greedy word fill with a character-level fallback.
//!
//! # Algorithm
//! 1. Blank text wraps to nothing; text that already fits is returned as one line.
//! 2. Words (split on single spaces) are appended to a candidate line while
//!    `candidate + word + " "` still measures within `max_width`.
//! 3. When a word does not fit, the candidate is flushed (trimmed) as a finished line.
//! 4. A word that does not fit even on an empty line is broken character by character.
//!
//! Breaking inside a word may leave its tail sharing a line with the next word. That is
//! accepted lossy wrapping, not a defect.

use crate::layout::measure::TextMeasure;
use crate::layout::LayoutError;

/// Wraps `text` into lines whose measured width is at most `max_width` pixels.
///
/// The only lines allowed to exceed `max_width` are single characters that are wider
/// than the limit on their own.
pub fn wrap_text<M>(text: &str, measure: &M, max_width: i32) -> Result<Vec<String>, LayoutError>
where
    M: TextMeasure + ?Sized,
{
    if max_width <= 0 {
        return Err(LayoutError::InvalidArgument(format!(
            "wrap width must be positive, got {max_width}"
        )));
    }

    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    if fits(measure, text, max_width) {
        return Ok(vec![text.to_string()]);
    }

    let mut lines: Vec<String> = Vec::new();
    let mut candidate = String::new();

    for word in text.split(' ') {
        let extended = format!("{candidate}{word} ");
        if fits(measure, &extended, max_width) {
            candidate = extended;
            continue;
        }

        if !candidate.is_empty() {
            flush(&mut lines, &mut candidate);

            let alone = format!("{word} ");
            if fits(measure, &alone, max_width) {
                candidate = alone;
                continue;
            }
        }

        // The word overflows an empty line on its own.
        break_word(word, measure, max_width, &mut lines, &mut candidate);
        candidate.push(' ');
    }

    flush(&mut lines, &mut candidate);

    Ok(lines)
}

/// Character-level fill for a single word that is wider than a whole line.
///
/// Expects `candidate` to be empty on entry. Leaves the unfinished tail of the word
/// in `candidate` so the next word can join it.
fn break_word<M>(
    word: &str,
    measure: &M,
    max_width: i32,
    lines: &mut Vec<String>,
    candidate: &mut String,
) where
    M: TextMeasure + ?Sized,
{
    for ch in word.chars() {
        candidate.push(ch);
        if fits(measure, candidate, max_width) {
            continue;
        }

        candidate.pop();
        flush(lines, candidate);
        // A lone character wider than the line is kept anyway.
        candidate.push(ch);
    }
}

fn fits<M>(measure: &M, text: &str, max_width: i32) -> bool
where
    M: TextMeasure + ?Sized,
{
    measure.width_of(text) <= max_width
}

/// Pushes the trimmed candidate as a finished line (if it holds any text) and clears it.
fn flush(lines: &mut Vec<String>, candidate: &mut String) {
    let line = candidate.trim();
    if !line.is_empty() {
        lines.push(line.to_string());
    }
    candidate.clear();
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::measure::TextExtent;

    /// Monospace stand-in: every character (spaces included) is 10px wide.
    fn mono(s: &str) -> TextExtent {
        TextExtent::new(s.chars().count() as i32 * 10, 24)
    }

    /// Ink-box stand-in: trailing and leading spaces have no width, like a real glyph bbox.
    fn ink(s: &str) -> TextExtent {
        TextExtent::new(s.trim().chars().count() as i32 * 10, 24)
    }

    fn words_of(lines: &[String]) -> Vec<String> {
        lines
            .iter()
            .flat_map(|l| l.split(' '))
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect()
    }

    // ── degenerate input ────────────────────────────────────────────────────

    #[test]
    fn test_empty_text_wraps_to_nothing() {
        let lines = wrap_text("", &mono, 500).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_whitespace_only_wraps_to_nothing() {
        let lines = wrap_text("   \t ", &mono, 500).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_zero_width_is_invalid_argument() {
        let err = wrap_text("hello", &mono, 0).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidArgument(_)));
    }

    #[test]
    fn test_negative_width_is_invalid_argument() {
        let err = wrap_text("hello", &mono, -5).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidArgument(_)));
    }

    // ── short-circuit ───────────────────────────────────────────────────────

    #[test]
    fn test_fitting_text_returned_unchanged() {
        let text = "  keep my  spacing ";
        let lines = wrap_text(text, &mono, 1000).unwrap();
        assert_eq!(lines, vec![text.to_string()]);
    }

    #[test]
    fn test_exact_fit_is_single_line() {
        // 5 chars * 10px = 50px
        let lines = wrap_text("hello", &mono, 50).unwrap();
        assert_eq!(lines, vec!["hello"]);
    }

    // ── word-level fill ─────────────────────────────────────────────────────

    #[test]
    fn test_greedy_word_fill_monospace() {
        // "aaa bbb " = 80px fits 90; "aaa bbb ccc " = 120px does not.
        let lines = wrap_text("aaa bbb ccc ddd", &mono, 90).unwrap();
        assert_eq!(lines, vec!["aaa bbb", "ccc ddd"]);
    }

    #[test]
    fn test_lines_are_trimmed() {
        let lines = wrap_text("one two three four five", &mono, 100).unwrap();
        for line in &lines {
            assert_eq!(line.trim(), line, "line should carry no edge spaces: {line:?}");
        }
    }

    #[test]
    fn test_width_bound_holds_for_every_line() {
        let text = "It was the best of times, it was the worst of times, it was the age of \
                    wisdom, it was the age of foolishness";
        for max_width in [60, 90, 130, 200, 333] {
            let lines = wrap_text(text, &ink, max_width).unwrap();
            for line in &lines {
                assert!(
                    ink(line).width <= max_width,
                    "line {line:?} is {}px wide, limit {max_width}",
                    ink(line).width
                );
            }
        }
    }

    #[test]
    fn test_word_sequence_preserved_without_forced_breaks() {
        let text = "the quick brown fox jumps over the lazy dog";
        let lines = wrap_text(text, &mono, 120).unwrap();
        assert!(lines.len() > 1);
        let expected: Vec<String> = text.split(' ').map(str::to_string).collect();
        assert_eq!(words_of(&lines), expected);
    }

    #[test]
    fn test_wrap_is_deterministic() {
        let text = "a reasonably long sentence that will need several lines to fit";
        let first = wrap_text(text, &ink, 110).unwrap();
        let second = wrap_text(text, &ink, 110).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_consecutive_spaces_do_not_emit_blank_lines() {
        let lines = wrap_text("aaaa    bbbb    cccc", &ink, 45).unwrap();
        assert!(lines.iter().all(|l| !l.is_empty()));
        assert_eq!(words_of(&lines), vec!["aaaa", "bbbb", "cccc"]);
    }

    // ── character-level fallback ────────────────────────────────────────────

    #[test]
    fn test_single_long_word_breaks_by_character() {
        let lines = wrap_text("abcdefghij", &mono, 30).unwrap();
        assert_eq!(lines, vec!["abc", "def", "ghi", "j"]);
    }

    #[test]
    fn test_broken_word_tail_joins_next_word() {
        // "abcdefg" breaks into "abcde" + "fg"; the tail then shares a line with "hi".
        let lines = wrap_text("abcdefg hi", &ink, 50).unwrap();
        assert_eq!(lines, vec!["abcde", "fg hi"]);
    }

    #[test]
    fn test_long_word_after_text_is_broken_not_overflowed() {
        let lines = wrap_text("ab abcdefghijkl", &ink, 50).unwrap();
        for line in &lines {
            assert!(ink(line).width <= 50, "line {line:?} overflows");
        }
        assert_eq!(lines, vec!["ab", "abcde", "fghij", "kl"]);
    }

    #[test]
    fn test_character_wider_than_line_does_not_loop() {
        // Every character is 10px but the line is only 5px wide.
        let lines = wrap_text("abc de", &mono, 5).unwrap();
        assert_eq!(lines, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_multibyte_characters_break_on_char_boundaries() {
        let lines = wrap_text("가나다라마바사", &mono, 30).unwrap();
        assert_eq!(lines, vec!["가나다", "라마바", "사"]);
    }
}
