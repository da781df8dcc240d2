//! Formatting utilities for terminal output

use crate::core::{Classification, Evaluation};
use crate::grid::{Cell, GridSnapshot};

/// Format an evaluation as an emoji string
#[must_use]
pub fn evaluation_to_emoji(evaluation: &Evaluation) -> String {
    evaluation
        .scores()
        .iter()
        .map(|s| s.classification.emoji())
        .collect()
}

/// Format one grid row as uppercase letters, `·` for empty cells
#[must_use]
pub fn row_to_letters(row: &[Cell]) -> String {
    let mut out = String::with_capacity(row.len() * 2);
    for cell in row {
        match cell {
            Some((letter, _)) => out.push(letter.to_ascii_uppercase() as char),
            None => out.push('·'),
        }
        out.push(' ');
    }
    out.trim_end().to_string()
}

/// Format one grid row as classification emoji
#[must_use]
pub fn row_to_emoji(row: &[Cell]) -> String {
    row.iter()
        .map(|cell| match cell {
            Some((_, classification)) => classification.emoji(),
            None => Classification::Empty.emoji(),
        })
        .collect()
}

/// Format a full grid snapshot as letter + emoji line pairs
#[must_use]
pub fn snapshot_to_text(snapshot: &GridSnapshot) -> String {
    let mut out = String::new();
    for row in snapshot.rows() {
        out.push_str(&row_to_letters(row));
        out.push_str("   ");
        out.push_str(&row_to_emoji(row));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Classification, Word, evaluate};

    #[test]
    fn emoji_for_mixed_evaluation() {
        let secret = Word::new("erase").unwrap();
        let guess = Word::new("speed").unwrap();
        let emoji = evaluation_to_emoji(&evaluate(&secret, &guess));
        assert_eq!(emoji, "🟨⬛⬛🟨🟨");
    }

    #[test]
    fn emoji_for_winning_evaluation() {
        let secret = Word::new("crane").unwrap();
        let emoji = evaluation_to_emoji(&evaluate(&secret, &secret));
        assert_eq!(emoji, "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn letters_row_shows_dots_for_empty() {
        let row: [Cell; 5] = [
            Some((b's', Classification::Empty)),
            Some((b'p', Classification::Empty)),
            None,
            None,
            None,
        ];
        assert_eq!(row_to_letters(&row), "S P · · ·");
    }

    #[test]
    fn emoji_row_uses_black_for_empty() {
        let row: [Cell; 5] = [Some((b'a', Classification::Correct)), None, None, None, None];
        assert_eq!(row_to_emoji(&row), "🟩⬜⬜⬜⬜");
    }

    #[test]
    fn snapshot_text_has_one_line_per_row() {
        let snapshot = GridSnapshot::blank(6);
        let text = snapshot_to_text(&snapshot);
        assert_eq!(text.lines().count(), 6);
    }
}
