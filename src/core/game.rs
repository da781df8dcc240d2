//! Game state for one play-through
//!
//! Tracks the secret word, the in-progress guess buffer, remaining tries and
//! the evaluated-guess history. All mutation is local to the instance; the
//! session controller decides what each mutation means for the UI.

use super::{Evaluation, WORD_LENGTH, Word, evaluate};
use rand::seq::IndexedRandom;
use std::fmt;

/// Default number of guesses per session
pub const DEFAULT_MAX_TRIES: u32 = 6;

/// Consolation points for exhausting every try
pub const LOSS_POINTS: u32 = 1;

/// Recoverable guess-handling errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Submit attempted before the guess buffer is full
    InvalidLength { have: usize },
    /// The completed guess is not in the accepted vocabulary
    UnrecognizedGuess(String),
    /// No secret word could be drawn from the supplied pool
    EmptyWordPool,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { have } => {
                write!(f, "Guess has {have} of {WORD_LENGTH} letters")
            }
            Self::UnrecognizedGuess(word) => write!(f, "'{word}' is not a recognized word"),
            Self::EmptyWordPool => write!(f, "The word pool is empty"),
        }
    }
}

impl std::error::Error for GameError {}

/// State of one Wordle session
///
/// The vocabulary doubles as the secret-word pool and the set of accepted
/// guesses. Invariant: the guess buffer never exceeds the secret length.
pub struct GameState<'a> {
    vocabulary: &'a [Word],
    secret: Word,
    guess: Vec<u8>,
    tries: u32,
    history: Vec<Evaluation>,
}

impl<'a> GameState<'a> {
    /// Start a game with a secret drawn uniformly at random from `vocabulary`
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordPool` when no word can be drawn.
    pub fn new(vocabulary: &'a [Word], max_tries: u32) -> Result<Self, GameError> {
        let secret = vocabulary
            .choose(&mut rand::rng())
            .cloned()
            .ok_or(GameError::EmptyWordPool)?;
        Ok(Self::with_secret(vocabulary, secret, max_tries))
    }

    /// Start a game with a known secret (deterministic runs and tests)
    #[must_use]
    pub fn with_secret(vocabulary: &'a [Word], secret: Word, max_tries: u32) -> Self {
        Self {
            vocabulary,
            secret,
            guess: Vec::with_capacity(WORD_LENGTH),
            tries: max_tries,
            history: Vec::new(),
        }
    }

    /// The secret word for this session
    #[inline]
    #[must_use]
    pub fn secret(&self) -> &Word {
        &self.secret
    }

    /// The in-progress guess buffer
    #[inline]
    #[must_use]
    pub fn guess(&self) -> &[u8] {
        &self.guess
    }

    /// Remaining tries
    #[inline]
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }

    /// Previously evaluated guesses, in submission order
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Evaluation] {
        &self.history
    }

    /// Append a letter to the guess buffer
    ///
    /// Safe to call on a full buffer: returns `false` and changes nothing.
    /// The letter is lowercase-normalized.
    pub fn add_letter(&mut self, letter: u8) -> bool {
        if self.is_full_guess() || !letter.is_ascii_alphabetic() {
            return false;
        }
        self.guess.push(letter.to_ascii_lowercase());
        true
    }

    /// Reset the guess buffer; tries and history are untouched
    pub fn clear_guess(&mut self) {
        self.guess.clear();
    }

    /// True iff the guess buffer holds a complete word
    #[inline]
    #[must_use]
    pub fn is_full_guess(&self) -> bool {
        self.guess.len() == WORD_LENGTH
    }

    /// Evaluate the completed guess against the secret
    ///
    /// On success the evaluation is appended to the history. On failure
    /// nothing is mutated: the buffer keeps its letters and no try is
    /// consumed, so the player can correct the guess.
    ///
    /// # Errors
    /// - `GameError::InvalidLength` when the buffer is not full
    /// - `GameError::UnrecognizedGuess` when the word is not in the vocabulary
    pub fn evaluate_guess(&mut self) -> Result<Evaluation, GameError> {
        if !self.is_full_guess() {
            return Err(GameError::InvalidLength {
                have: self.guess.len(),
            });
        }

        let text = String::from_utf8(self.guess.clone()).expect("buffer holds ASCII letters");
        let guess =
            Word::new(&text).map_err(|_| GameError::UnrecognizedGuess(text.clone()))?;

        if !self.vocabulary.contains(&guess) {
            return Err(GameError::UnrecognizedGuess(text));
        }

        let evaluation = evaluate(&self.secret, &guess);
        self.history.push(evaluation.clone());
        Ok(evaluation)
    }

    /// Consume one try; never goes below zero
    pub fn decrement_tries(&mut self) {
        self.tries = self.tries.saturating_sub(1);
    }

    /// True iff the evaluation solved the word
    #[must_use]
    pub fn has_won(evaluation: &Evaluation) -> bool {
        evaluation.is_winning()
    }

    /// Points awarded for winning at the current try count
    #[must_use]
    pub const fn win_points(&self) -> u32 {
        (self.tries + 1) * 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary() -> Vec<Word> {
        ["crane", "slate", "speed", "erase", "floor", "robot"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect()
    }

    fn game<'a>(vocab: &'a [Word], secret: &str) -> GameState<'a> {
        GameState::with_secret(vocab, Word::new(secret).unwrap(), DEFAULT_MAX_TRIES)
    }

    fn type_word(state: &mut GameState<'_>, word: &str) {
        for b in word.bytes() {
            state.add_letter(b);
        }
    }

    #[test]
    fn new_picks_secret_from_pool() {
        let vocab = vocabulary();
        let state = GameState::new(&vocab, DEFAULT_MAX_TRIES).unwrap();
        assert!(vocab.contains(state.secret()));
        assert_eq!(state.tries(), DEFAULT_MAX_TRIES);
    }

    #[test]
    fn new_fails_on_empty_pool() {
        let vocab: Vec<Word> = Vec::new();
        assert!(matches!(
            GameState::new(&vocab, DEFAULT_MAX_TRIES),
            Err(GameError::EmptyWordPool)
        ));
    }

    #[test]
    fn add_letter_respects_capacity() {
        let vocab = vocabulary();
        let mut state = game(&vocab, "crane");

        type_word(&mut state, "slate");
        assert!(state.is_full_guess());

        // Full buffer: safe no-op
        assert!(!state.add_letter(b'x'));
        assert_eq!(state.guess(), b"slate");
    }

    #[test]
    fn add_letter_normalizes_and_filters() {
        let vocab = vocabulary();
        let mut state = game(&vocab, "crane");

        assert!(state.add_letter(b'S'));
        assert!(!state.add_letter(b'3'));
        assert_eq!(state.guess(), b"s");
    }

    #[test]
    fn clear_guess_keeps_tries_and_history() {
        let vocab = vocabulary();
        let mut state = game(&vocab, "crane");

        type_word(&mut state, "slate");
        state.evaluate_guess().unwrap();
        state.decrement_tries();
        state.clear_guess();

        assert!(state.guess().is_empty());
        assert_eq!(state.tries(), DEFAULT_MAX_TRIES - 1);
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn evaluate_rejects_short_guess() {
        let vocab = vocabulary();
        let mut state = game(&vocab, "crane");

        type_word(&mut state, "sla");
        assert!(matches!(
            state.evaluate_guess(),
            Err(GameError::InvalidLength { have: 3 })
        ));
        assert!(state.history().is_empty());
    }

    #[test]
    fn evaluate_rejects_unrecognized_word_without_mutation() {
        let vocab = vocabulary();
        let mut state = game(&vocab, "crane");

        type_word(&mut state, "zzzzz");
        assert!(matches!(
            state.evaluate_guess(),
            Err(GameError::UnrecognizedGuess(_))
        ));

        // No state change: buffer intact, nothing recorded, no try consumed
        assert_eq!(state.guess(), b"zzzzz");
        assert!(state.history().is_empty());
        assert_eq!(state.tries(), DEFAULT_MAX_TRIES);
    }

    #[test]
    fn evaluate_appends_history() {
        let vocab = vocabulary();
        let mut state = game(&vocab, "crane");

        type_word(&mut state, "slate");
        let eval = state.evaluate_guess().unwrap();
        assert!(!eval.is_winning());
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn winning_guess_detected() {
        let vocab = vocabulary();
        let mut state = game(&vocab, "crane");

        type_word(&mut state, "crane");
        let eval = state.evaluate_guess().unwrap();
        assert!(GameState::has_won(&eval));
    }

    #[test]
    fn decrement_tries_floors_at_zero() {
        let vocab = vocabulary();
        let mut state = game(&vocab, "crane");

        for _ in 0..10 {
            state.decrement_tries();
        }
        assert_eq!(state.tries(), 0);
    }

    #[test]
    fn win_points_formula() {
        let vocab = vocabulary();
        let mut state = game(&vocab, "crane");

        // Five tries remaining before the winning guess -> (5 + 1) * 2 = 12
        state.decrement_tries();
        assert_eq!(state.tries(), 5);
        assert_eq!(state.win_points(), 12);
    }

    #[test]
    fn loss_points_are_constant() {
        assert_eq!(LOSS_POINTS, 1);
    }
}
