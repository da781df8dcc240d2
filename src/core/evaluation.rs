//! Guess evaluation against the secret word
//!
//! Implements the canonical two-pass Wordle rule with proper duplicate-letter
//! handling. The result is keyed by guess position, never by letter identity:
//! the same letter may legitimately receive two different verdicts in one
//! guess (one `Correct`, one `Absent`), and a letter-keyed map would silently
//! keep only the last one.

use super::{Classification, WORD_LENGTH, Word};

/// Verdict for one position of an evaluated guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterScore {
    /// Position in the guess (0-4)
    pub position: usize,
    /// Guessed letter (ASCII lowercase)
    pub letter: u8,
    pub classification: Classification,
}

/// Position-keyed result of evaluating one full guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    scores: [LetterScore; WORD_LENGTH],
}

impl Evaluation {
    /// Per-position scores, in guess order
    #[inline]
    #[must_use]
    pub fn scores(&self) -> &[LetterScore] {
        &self.scores
    }

    /// True iff every position is `Correct`
    #[must_use]
    pub fn is_winning(&self) -> bool {
        self.scores
            .iter()
            .all(|s| s.classification == Classification::Correct)
    }

    /// The guessed letters, in order
    #[must_use]
    pub fn letters(&self) -> [u8; WORD_LENGTH] {
        let mut letters = [0u8; WORD_LENGTH];
        for (slot, score) in letters.iter_mut().zip(&self.scores) {
            *slot = score.letter;
        }
        letters
    }
}

/// Evaluate `guess` against `secret`
///
/// # Algorithm
/// 1. First pass: mark exact position matches `Correct` and remove each
///    matched letter from the availability pool.
/// 2. Second pass: for remaining positions, mark `Present` while the guessed
///    letter still has remaining count in the pool (decrementing it),
///    otherwise `Absent`.
///
/// Evaluating position-by-position without the pool gives wrong answers
/// whenever the secret contains a repeated letter not fully matched by
/// position, so this ordering is not optional.
///
/// # Examples
/// ```
/// use wordle_arcade::core::{Classification, Word, evaluate};
///
/// let secret = Word::new("slate").unwrap();
/// let guess = Word::new("crane").unwrap();
/// let eval = evaluate(&secret, &guess);
///
/// // C(absent) R(absent) A(correct) N(absent) E(correct)
/// assert_eq!(eval.scores()[2].classification, Classification::Correct);
/// assert_eq!(eval.scores()[4].classification, Classification::Correct);
/// ```
#[must_use]
pub fn evaluate(secret: &Word, guess: &Word) -> Evaluation {
    let mut result = [Classification::Absent; WORD_LENGTH];
    let mut available = secret.char_counts();

    // First pass: exact position matches
    for i in 0..WORD_LENGTH {
        if guess.char_at(i) == secret.char_at(i) {
            result[i] = Classification::Correct;

            if let Some(count) = available.get_mut(&guess.char_at(i)) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: present-elsewhere, bounded by the remaining pool
    for i in 0..WORD_LENGTH {
        if result[i] != Classification::Correct {
            let letter = guess.char_at(i);
            if let Some(count) = available.get_mut(&letter)
                && *count > 0
            {
                result[i] = Classification::Present;
                *count -= 1;
            }
        }
    }

    let mut scores = [LetterScore {
        position: 0,
        letter: 0,
        classification: Classification::Absent,
    }; WORD_LENGTH];
    for (i, score) in scores.iter_mut().enumerate() {
        *score = LetterScore {
            position: i,
            letter: guess.char_at(i),
            classification: result[i],
        };
    }

    Evaluation { scores }
}
