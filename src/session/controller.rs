//! Session controller
//!
//! Orchestrates one play-through: binds the keyboard pages to the game state
//! and grid renderer, reacts to user actions and keeps control enablement and
//! coloring consistent with the game. Every processed action yields exactly
//! one render update; rendering is best-effort relative to state mutation,
//! which is the source of truth.

use crate::core::{
    Classification, GameError, GameState, LOSS_POINTS, Word,
};
use crate::grid::{GridRenderer, GridSnapshot, SpriteAtlas};
use crate::scores::ScoreSink;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use super::{Action, ControlView, KeyBoard, Navigator, PageId};

/// Session tunables
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Guesses per session
    pub max_tries: u32,
    /// Inactivity window after which the session cancels itself
    pub idle_limit: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_tries: crate::core::DEFAULT_MAX_TRIES,
            idle_limit: Duration::from_secs(300),
        }
    }
}

/// Session life-cycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Menu,
    Playing,
    Won,
    Lost,
    Cancelled,
}

impl Phase {
    /// True for the end states: no further action changes the session
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost | Self::Cancelled)
    }
}

/// Terminal result of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won { points: u32 },
    Lost { points: u32 },
    Cancelled,
}

/// One render update, pushed after every processed action
#[derive(Debug)]
pub struct Update {
    /// Status line; empty when the action changed nothing worth saying
    pub text: String,
    /// Composed grid image (PNG), absent when no atlas is configured or
    /// composition failed (degraded text-only update)
    pub image: Option<Vec<u8>>,
    /// Visible controls of the current page
    pub layout: Vec<ControlView>,
    /// Grid cells for text render surfaces
    pub grid: GridSnapshot,
    /// Set exactly once, on the update that ends the session
    pub outcome: Option<Outcome>,
}

/// Drives one user's session from menu to a terminal outcome
pub struct SessionController<'a, S: ScoreSink> {
    user: String,
    vocabulary: &'a [Word],
    config: SessionConfig,
    phase: Phase,
    game: Option<GameState<'a>>,
    grid: Option<GridRenderer>,
    atlas: Option<SpriteAtlas>,
    board: KeyBoard,
    pages: Navigator<PageId>,
    sink: S,
    last_action: Instant,
}

impl<'a, S: ScoreSink> SessionController<'a, S> {
    /// A session at the menu, ready for `Action::Start`
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordPool` when `vocabulary` is empty.
    pub fn new(
        user: impl Into<String>,
        vocabulary: &'a [Word],
        atlas: Option<SpriteAtlas>,
        config: SessionConfig,
        sink: S,
    ) -> Result<Self, GameError> {
        if vocabulary.is_empty() {
            return Err(GameError::EmptyWordPool);
        }
        Ok(Self {
            user: user.into(),
            vocabulary,
            config,
            phase: Phase::Menu,
            game: None,
            grid: None,
            atlas,
            board: KeyBoard::new(),
            pages: Navigator::new(vec![PageId::Menu, PageId::Letters(0), PageId::Letters(1)]),
            sink,
            last_action: Instant::now(),
        })
    }

    /// Current phase
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// The user who owns this session
    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    /// The score sink (test inspection and post-game reporting)
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// The secret word, once playing
    #[must_use]
    pub fn secret(&self) -> Option<&Word> {
        self.game.as_ref().map(GameState::secret)
    }

    /// Render update for the current state, without processing an action
    ///
    /// Used by front ends for the initial draw.
    pub fn view(&mut self) -> Update {
        self.make_update(String::new(), None)
    }

    /// Process one action and emit the resulting render update
    ///
    /// Actions on disabled controls and actions in terminal phases are
    /// no-ops: the update repeats the current view with an empty status.
    pub fn apply(&mut self, action: Action) -> Update {
        self.last_action = Instant::now();
        debug!(user = %self.user, phase = ?self.phase, %action, "action");

        match (self.phase, action) {
            (Phase::Menu, Action::Start) => self.start(),
            (Phase::Menu | Phase::Playing, Action::Cancel) => self.cancel("Game cancelled."),
            (Phase::Playing, Action::Letter(letter)) => self.letter(letter),
            (Phase::Playing, Action::Submit) => self.submit(),
            (Phase::Playing, Action::Clear) => self.clear(),
            (Phase::Playing, Action::PagePrevious) => self.page_step(false),
            (Phase::Playing, Action::PageNext) => self.page_step(true),
            _ => self.make_update(String::new(), None),
        }
    }

    /// Cancel the session when the inactivity window has elapsed
    ///
    /// Returns the cancellation update, or `None` while the session is
    /// still live (or already over).
    pub fn check_timeout(&mut self, now: Instant) -> Option<Update> {
        if self.phase.is_terminal() {
            return None;
        }
        if now.duration_since(self.last_action) < self.config.idle_limit {
            return None;
        }
        debug!(user = %self.user, "session timed out");
        Some(self.cancel("Game timed out."))
    }

    fn start(&mut self) -> Update {
        let game = match GameState::new(self.vocabulary, self.config.max_tries) {
            Ok(game) => game,
            Err(e) => return self.make_update(e.to_string(), None),
        };

        self.game = Some(game);
        self.grid = Some(GridRenderer::new(
            self.config.max_tries as usize,
            self.atlas.take(),
        ));

        // Step into the first letter page, then drop the menu from the list
        self.pages.next();
        self.pages.remove(&PageId::Menu);

        self.phase = Phase::Playing;
        debug!(user = %self.user, "session started");

        self.make_update(
            format!(
                "Guess the word! You have {} tries.",
                self.config.max_tries
            ),
            None,
        )
    }

    fn letter(&mut self, letter: u8) -> Update {
        if !letter.is_ascii_alphabetic() {
            return self.make_update(String::new(), None);
        }

        let (Some(game), Some(grid)) = (self.game.as_mut(), self.grid.as_mut()) else {
            return self.make_update(String::new(), None);
        };

        // A full row means the letter keys are disabled; pressing one again
        // must be a no-op, not a duplicate mutation.
        if !grid.has_next_column() {
            return self.make_update(String::new(), None);
        }

        grid.append_cell(letter, Classification::Empty);
        game.add_letter(letter);

        if !grid.has_next_column() {
            self.board.set_all_enabled(false);
        }

        self.make_update(String::new(), None)
    }

    fn submit(&mut self) -> Update {
        let Some(game) = self.game.as_mut() else {
            return self.make_update(String::new(), None);
        };

        if !game.is_full_guess() {
            return self.make_update("Invalid length".to_string(), None);
        }

        let evaluation = match game.evaluate_guess() {
            Ok(evaluation) => evaluation,
            Err(GameError::UnrecognizedGuess(_)) => {
                return self.make_update("Invalid guess".to_string(), None);
            }
            Err(e) => return self.make_update(e.to_string(), None),
        };

        if let Some(grid) = self.grid.as_mut() {
            grid.set_processed_row(&evaluation);
        }

        if GameState::has_won(&evaluation) {
            let points = game.win_points();
            let secret = game.secret().text().to_uppercase();
            self.sink.record_score(&self.user, points);
            self.phase = Phase::Won;
            debug!(user = %self.user, points, "session won");

            let update = self.make_update(
                format!(
                    "Congratulations! You guessed the word correctly!\n\
                     The word was: {secret}\nPoints: {points}"
                ),
                Some(Outcome::Won { points }),
            );
            self.release();
            return update;
        }

        game.decrement_tries();

        if game.tries() == 0 {
            let secret = game.secret().text().to_uppercase();
            self.sink.record_score(&self.user, LOSS_POINTS);
            self.phase = Phase::Lost;
            debug!(user = %self.user, points = LOSS_POINTS, "session lost");

            let update = self.make_update(
                format!(
                    "Unfortunately you didn't guess the word.\n\
                     The word was: {secret}\nPoints: {LOSS_POINTS}"
                ),
                Some(Outcome::Lost {
                    points: LOSS_POINTS,
                }),
            );
            self.release();
            return update;
        }

        // Miss with tries left: recolor keys, open the next row, rearm input
        self.board.apply_evaluation(&evaluation);
        if let Some(grid) = self.grid.as_mut()
            && let Err(e) = grid.next_row()
        {
            warn!(error = %e, "grid row advance failed");
        }
        game.clear_guess();
        self.board.set_all_enabled(true);

        let tries = game.tries();
        self.make_update(format!("{tries} tries remaining"), None)
    }

    fn clear(&mut self) -> Update {
        if let Some(game) = self.game.as_mut() {
            game.clear_guess();
        }
        if let Some(grid) = self.grid.as_mut() {
            grid.clear_row();
        }
        self.board.set_all_enabled(true);
        self.make_update(String::new(), None)
    }

    fn page_step(&mut self, forward: bool) -> Update {
        // Navigation is disabled at the ends; a press there is a no-op
        let moved = if forward {
            self.pages.has_next() && self.pages.next().is_some()
        } else {
            self.pages.has_previous() && self.pages.previous().is_some()
        };
        if moved {
            debug!(user = %self.user, page = ?self.pages.current(), "page changed");
        }
        self.make_update(String::new(), None)
    }

    fn cancel(&mut self, text: &str) -> Update {
        self.phase = Phase::Cancelled;
        debug!(user = %self.user, "session cancelled");
        self.release();
        self.make_update(text.to_string(), Some(Outcome::Cancelled))
    }

    /// Drop per-session resources on every exit path
    fn release(&mut self) {
        self.game = None;
        self.grid = None;
    }

    fn make_update(&mut self, text: String, outcome: Option<Outcome>) -> Update {
        let image = self.grid.as_ref().filter(|g| g.can_compose()).and_then(|g| {
            match g.encode_png() {
                Ok(bytes) => Some(bytes),
                Err(e) => {
                    // State already committed; degrade to a text-only update
                    warn!(error = %e, "grid composition failed");
                    None
                }
            }
        });

        let grid = self
            .grid
            .as_ref()
            .map_or_else(
                || GridSnapshot::blank(self.config.max_tries as usize),
                GridRenderer::snapshot,
            );

        let page = self.pages.current().copied().unwrap_or(PageId::Menu);
        let layout =
            self.board
                .page_view(page, self.pages.has_previous(), self.pages.has_next());

        Update {
            text,
            image,
            layout,
            grid,
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scores::MemoryScores;
    use crate::session::{ControlKind, KeyColor};

    fn vocabulary() -> Vec<Word> {
        [
            "crane", "slate", "speed", "erase", "floor", "robot", "stage", "store",
        ]
        .iter()
        .map(|w| Word::new(*w).unwrap())
        .collect()
    }

    fn controller(vocab: &[Word]) -> SessionController<'_, MemoryScores> {
        let mut c = SessionController::new(
            "ada",
            vocab,
            None,
            SessionConfig::default(),
            MemoryScores::new(),
        )
        .unwrap();
        c.apply(Action::Start);
        c
    }

    /// Force a known secret by replacing the game state
    fn force_secret<'a>(c: &mut SessionController<'a, MemoryScores>, vocab: &'a [Word], secret: &str) {
        c.game = Some(GameState::with_secret(
            vocab,
            Word::new(secret).unwrap(),
            c.config.max_tries,
        ));
    }

    fn type_word(c: &mut SessionController<'_, MemoryScores>, word: &str) {
        for b in word.bytes() {
            c.apply(Action::Letter(b));
        }
    }

    fn letters_enabled(update: &Update) -> bool {
        update
            .layout
            .iter()
            .filter(|v| v.kind == ControlKind::Letter)
            .all(|v| v.enabled)
    }

    #[test]
    fn new_requires_words() {
        let vocab: Vec<Word> = Vec::new();
        assert!(
            SessionController::new(
                "ada",
                &vocab,
                None,
                SessionConfig::default(),
                MemoryScores::new()
            )
            .is_err()
        );
    }

    #[test]
    fn start_moves_to_first_letter_page() {
        let vocab = vocabulary();
        let c = controller(&vocab);
        assert_eq!(c.phase(), Phase::Playing);
        assert_eq!(c.pages.current(), Some(&PageId::Letters(0)));
        // Menu is gone: no previous page, one next page
        assert!(!c.pages.has_previous());
        assert!(c.pages.has_next());
    }

    #[test]
    fn full_row_disables_letters_and_ignores_extra_presses() {
        let vocab = vocabulary();
        let mut c = controller(&vocab);
        force_secret(&mut c, &vocab, "crane");

        type_word(&mut c, "slate");
        let update = c.apply(Action::Letter(b'x'));

        assert!(!letters_enabled(&update));
        assert_eq!(c.game.as_ref().unwrap().guess(), b"slate");
    }

    #[test]
    fn submit_short_guess_reports_invalid_length() {
        let vocab = vocabulary();
        let mut c = controller(&vocab);
        force_secret(&mut c, &vocab, "crane");

        type_word(&mut c, "sla");
        let grid_before = c.grid.as_ref().unwrap().snapshot();
        let update = c.apply(Action::Submit);

        assert_eq!(update.text, "Invalid length");
        assert_eq!(c.phase(), Phase::Playing);
        assert_eq!(update.grid, grid_before);
        assert!(c.sink().events().is_empty());
    }

    #[test]
    fn submit_unrecognized_guess_costs_nothing() {
        let vocab = vocabulary();
        let mut c = controller(&vocab);
        force_secret(&mut c, &vocab, "crane");

        // "sssss" is five letters but not in the vocabulary
        type_word(&mut c, "sssss");
        let update = c.apply(Action::Submit);

        assert_eq!(update.text, "Invalid guess");
        assert_eq!(c.phase(), Phase::Playing);
        assert_eq!(c.game.as_ref().unwrap().tries(), 6);
        assert!(c.game.as_ref().unwrap().history().is_empty());
    }

    #[test]
    fn winning_guess_scores_and_terminates() {
        let vocab = vocabulary();
        let mut c = controller(&vocab);
        force_secret(&mut c, &vocab, "crane");

        type_word(&mut c, "crane");
        let update = c.apply(Action::Submit);

        assert_eq!(c.phase(), Phase::Won);
        assert_eq!(update.outcome, Some(Outcome::Won { points: 14 }));
        assert_eq!(c.sink().events(), &[("ada".to_string(), 14)]);
        assert!(update.text.contains("CRANE"));
    }

    #[test]
    fn win_after_one_miss_scores_twelve() {
        let vocab = vocabulary();
        let mut c = controller(&vocab);
        force_secret(&mut c, &vocab, "crane");

        type_word(&mut c, "slate");
        c.apply(Action::Submit);
        type_word(&mut c, "crane");
        let update = c.apply(Action::Submit);

        // Five tries remained before the winning guess: (5 + 1) * 2
        assert_eq!(update.outcome, Some(Outcome::Won { points: 12 }));
    }

    #[test]
    fn miss_recolors_keys_and_rearms_input() {
        let vocab = vocabulary();
        let mut c = controller(&vocab);
        force_secret(&mut c, &vocab, "crane");

        type_word(&mut c, "slate");
        let update = c.apply(Action::Submit);

        assert_eq!(update.text, "5 tries remaining");
        assert!(letters_enabled(&update));
        // A is present in CRANE at another position; E is correct
        assert_eq!(c.board.key(b'e').color(), KeyColor::Correct);
        assert_eq!(c.board.key(b'a').color(), KeyColor::Present);
        assert_eq!(c.board.key(b's').color(), KeyColor::Absent);
    }

    #[test]
    fn exhausting_tries_loses_with_consolation_point() {
        let vocab = vocabulary();
        let mut c = controller(&vocab);
        force_secret(&mut c, &vocab, "crane");

        for _ in 0..6 {
            type_word(&mut c, "slate");
            c.apply(Action::Submit);
        }

        assert_eq!(c.phase(), Phase::Lost);
        assert_eq!(c.sink().events(), &[("ada".to_string(), 1)]);
    }

    #[test]
    fn score_recorded_exactly_once() {
        let vocab = vocabulary();
        let mut c = controller(&vocab);
        force_secret(&mut c, &vocab, "crane");

        type_word(&mut c, "crane");
        c.apply(Action::Submit);

        // Terminal phase: further actions are no-ops and never re-score
        c.apply(Action::Submit);
        c.apply(Action::Letter(b'a'));
        c.apply(Action::Start);

        assert_eq!(c.sink().events().len(), 1);
    }

    #[test]
    fn clear_resets_row_and_reenables_keys() {
        let vocab = vocabulary();
        let mut c = controller(&vocab);
        force_secret(&mut c, &vocab, "crane");

        type_word(&mut c, "slate");
        let update = c.apply(Action::Clear);

        assert!(c.game.as_ref().unwrap().guess().is_empty());
        assert!(letters_enabled(&update));
        assert!(
            update
                .grid
                .rows()[0]
                .iter()
                .all(Option::is_none)
        );
    }

    #[test]
    fn clear_then_retype_matches_original_state() {
        let vocab = vocabulary();
        let mut c = controller(&vocab);
        force_secret(&mut c, &vocab, "crane");

        type_word(&mut c, "slate");
        let before = c.grid.as_ref().unwrap().snapshot();

        c.apply(Action::Clear);
        type_word(&mut c, "slate");

        assert_eq!(c.grid.as_ref().unwrap().snapshot(), before);
    }

    #[test]
    fn cancel_discards_without_scoring() {
        let vocab = vocabulary();
        let mut c = controller(&vocab);

        let update = c.apply(Action::Cancel);

        assert_eq!(c.phase(), Phase::Cancelled);
        assert_eq!(update.outcome, Some(Outcome::Cancelled));
        assert!(c.sink().events().is_empty());
        assert!(c.game.is_none());
        assert!(c.grid.is_none());
    }

    #[test]
    fn cancel_works_from_menu() {
        let vocab = vocabulary();
        let mut c = SessionController::new(
            "ada",
            &vocab,
            None,
            SessionConfig::default(),
            MemoryScores::new(),
        )
        .unwrap();

        c.apply(Action::Cancel);
        assert_eq!(c.phase(), Phase::Cancelled);
    }

    #[test]
    fn page_navigation_preserves_key_state() {
        let vocab = vocabulary();
        let mut c = controller(&vocab);
        force_secret(&mut c, &vocab, "crane");

        type_word(&mut c, "slate");
        c.apply(Action::Submit);
        let color_before = c.board.key(b'e').color();

        c.apply(Action::PageNext);
        c.apply(Action::PagePrevious);
        c.apply(Action::PageNext);

        assert_eq!(c.board.key(b'e').color(), color_before);
        assert_eq!(c.pages.current(), Some(&PageId::Letters(1)));
    }

    #[test]
    fn page_navigation_saturates_at_bounds() {
        let vocab = vocabulary();
        let mut c = controller(&vocab);

        c.apply(Action::PagePrevious); // Already at the first page
        assert_eq!(c.pages.current(), Some(&PageId::Letters(0)));

        c.apply(Action::PageNext);
        c.apply(Action::PageNext); // Already at the last page
        assert_eq!(c.pages.current(), Some(&PageId::Letters(1)));
    }

    #[test]
    fn timeout_cancels_idle_session() {
        let vocab = vocabulary();
        let mut c = SessionController::new(
            "ada",
            &vocab,
            None,
            SessionConfig {
                max_tries: 6,
                idle_limit: Duration::from_secs(0),
            },
            MemoryScores::new(),
        )
        .unwrap();
        c.apply(Action::Start);

        let update = c.check_timeout(Instant::now());
        assert!(update.is_some());
        assert_eq!(c.phase(), Phase::Cancelled);
        assert!(c.sink().events().is_empty());
    }

    #[test]
    fn timeout_noop_while_active() {
        let vocab = vocabulary();
        let mut c = controller(&vocab);
        assert!(c.check_timeout(Instant::now()).is_none());
        assert_eq!(c.phase(), Phase::Playing);
    }

    #[test]
    fn timeout_noop_after_terminal() {
        let vocab = vocabulary();
        let mut c = SessionController::new(
            "ada",
            &vocab,
            None,
            SessionConfig {
                max_tries: 6,
                idle_limit: Duration::from_secs(0),
            },
            MemoryScores::new(),
        )
        .unwrap();
        c.apply(Action::Cancel);
        assert!(c.check_timeout(Instant::now()).is_none());
    }

    #[test]
    fn update_carries_png_when_atlas_configured() {
        let vocab = vocabulary();
        let mut c = SessionController::new(
            "ada",
            &vocab,
            Some(crate::grid::SpriteAtlas::flat()),
            SessionConfig::default(),
            MemoryScores::new(),
        )
        .unwrap();

        let menu_update = c.apply(Action::PageNext); // No-op at the menu
        assert!(menu_update.image.is_none());

        let update = c.apply(Action::Start);
        let image = update.image.expect("playing update should carry an image");
        // PNG signature
        assert_eq!(&image[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n']);
    }

    #[test]
    fn actions_in_menu_before_start_are_noops() {
        let vocab = vocabulary();
        let mut c = SessionController::new(
            "ada",
            &vocab,
            None,
            SessionConfig::default(),
            MemoryScores::new(),
        )
        .unwrap();

        let update = c.apply(Action::Letter(b'a'));
        assert_eq!(c.phase(), Phase::Menu);
        assert!(update.text.is_empty());
        assert_eq!(update.layout[0].kind, ControlKind::Start);
    }
}
