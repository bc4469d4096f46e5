//! Analyzer
//!
//! Computes face counts per roll, jackpots, combinations and permutations
//! for one game. The analyzer borrows the game instead of copying it and
//! reads the game's results each time a statistic is computed, so nothing
//! is captured at construction. The borrow also means the game cannot be
//! replayed while an analyzer for it is alive; build a new analyzer after
//! replaying.

use crate::analysis::tables::{ComboResults, FaceCounts, JackpotResults};
use crate::error::Result;
use crate::models::{Face, Game, WideResults};

/// Statistics over the latest play of a [`Game`]
///
/// # Example
/// ```
/// use montecarlo_core_rs::{Analyzer, Die, Game};
///
/// let die = Die::new(vec![1, 2, 3, 4, 5, 6]).unwrap();
/// let mut game = Game::with_seed(vec![die.clone(), die], 7).unwrap();
/// game.play(100).unwrap();
///
/// let mut analyzer = Analyzer::new(&game);
/// let jackpots = analyzer.jackpot().unwrap();
/// assert!(jackpots <= 100);
/// assert_eq!(analyzer.face_types(), &["int", "int"]);
/// ```
#[derive(Debug, Clone)]
pub struct Analyzer<'a, F> {
    game: &'a Game<F>,

    /// Type label of each die's first face; informational only
    face_types: Vec<&'static str>,

    jackpot_count: usize,
    combo_count: usize,
    permutation_count: usize,

    face_counts_results: Option<FaceCounts<F>>,
    jackpot_results: Option<JackpotResults<F>>,
    combo_results: Option<ComboResults<F>>,
    permutation_results: Option<ComboResults<F>>,
}

impl<'a, F: Face> Analyzer<'a, F> {
    pub fn new(game: &'a Game<F>) -> Self {
        let face_types = game
            .dice()
            .iter()
            .map(|die| die.faces().first().map_or("unknown", |f| f.type_label()))
            .collect();

        Self {
            game,
            face_types,
            jackpot_count: 0,
            combo_count: 0,
            permutation_count: 0,
            face_counts_results: None,
            jackpot_results: None,
            combo_results: None,
            permutation_results: None,
        }
    }

    /// Count rolls on which every die showed the same face
    ///
    /// Stores the jackpot rows (with their flag column) and returns the count.
    ///
    /// # Errors
    /// `NoResultsYet` if the game has not been played.
    pub fn jackpot(&mut self) -> Result<usize> {
        let results = JackpotResults::from_wide(self.latest()?);
        self.jackpot_count = results.count();
        self.jackpot_results = Some(results);

        log::debug!("jackpot count: {}", self.jackpot_count);
        Ok(self.jackpot_count)
    }

    /// Count distinct face combinations, ignoring which die showed which face
    ///
    /// Returns the number of distinct combinations.
    ///
    /// # Errors
    /// `NoResultsYet` if the game has not been played.
    pub fn combo(&mut self) -> Result<usize> {
        let results = ComboResults::combinations(self.latest()?);
        self.combo_count = results.len();
        self.combo_results = Some(results);

        log::debug!("combo count: {}", self.combo_count);
        Ok(self.combo_count)
    }

    /// Count distinct ordered outcomes, where die order matters
    ///
    /// # Errors
    /// `NoResultsYet` if the game has not been played.
    pub fn permutation(&mut self) -> Result<usize> {
        let results = ComboResults::permutations(self.latest()?);
        self.permutation_count = results.len();
        self.permutation_results = Some(results);

        log::debug!("permutation count: {}", self.permutation_count);
        Ok(self.permutation_count)
    }

    /// Count each observed face within every roll
    ///
    /// # Errors
    /// `NoResultsYet` if the game has not been played.
    pub fn face_counts_per_roll(&mut self) -> Result<&FaceCounts<F>> {
        let results = FaceCounts::from_wide(self.latest()?);
        log::trace!("face counts table shape {:?}", results.shape());
        Ok(&*self.face_counts_results.insert(results))
    }

    fn latest(&self) -> Result<&'a WideResults<F>> {
        self.game.wide_results()
    }
}

impl<'a, F> Analyzer<'a, F> {
    pub fn game(&self) -> &'a Game<F> {
        self.game
    }

    pub fn face_types(&self) -> &[&'static str] {
        &self.face_types
    }

    /// Count from the last [`Analyzer::jackpot`] call, 0 before it
    pub fn jackpot_count(&self) -> usize {
        self.jackpot_count
    }

    pub fn combo_count(&self) -> usize {
        self.combo_count
    }

    pub fn permutation_count(&self) -> usize {
        self.permutation_count
    }

    pub fn jackpot_results(&self) -> Option<&JackpotResults<F>> {
        self.jackpot_results.as_ref()
    }

    pub fn combo_results(&self) -> Option<&ComboResults<F>> {
        self.combo_results.as_ref()
    }

    pub fn permutation_results(&self) -> Option<&ComboResults<F>> {
        self.permutation_results.as_ref()
    }

    pub fn face_counts_results(&self) -> Option<&FaceCounts<F>> {
        self.face_counts_results.as_ref()
    }
}
