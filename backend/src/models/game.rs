//! Game model
//!
//! A game rolls a fixed collection of dice together and keeps only the
//! results of its most recent play.
//!
//! Dice are assumed to share one face set. This is not enforced: dice with
//! different faces produce a table whose columns have different domains, and
//! analysis then compares faces by value alone.

use crate::error::{MonteCarloError, Result};
use crate::models::die::Die;
use crate::models::face::Face;
use crate::models::results::{GameResults, NarrowResults, ResultForm, WideResults};
use crate::rng::DiceRng;

/// A set of dice played together
///
/// # Example
/// ```
/// use montecarlo_core_rs::{Die, Game, ResultForm};
///
/// let d1 = Die::new(vec!["a", "b", "c", "d"]).unwrap();
/// let mut d2 = Die::new(vec!["a", "b", "c", "d"]).unwrap();
/// d2.change_weight(&"b", 2.0).unwrap();
///
/// let mut game = Game::with_seed(vec![d1, d2], 42).unwrap();
/// game.play(20).unwrap();
/// assert_eq!(game.results(ResultForm::Wide).unwrap().shape(), (20, 2));
/// assert_eq!(game.results(ResultForm::Narrow).unwrap().shape(), (40, 1));
/// ```
///
/// Saving and restoring goes through [`crate::GameSnapshot`].
#[derive(Debug, Clone)]
pub struct Game<F> {
    dice: Vec<Die<F>>,

    /// Source of every draw made by this game's dice
    rng: DiceRng,

    /// Results of the most recent play, `None` until the first play
    latest_result: Option<WideResults<F>>,
}

impl<F: Face> Game<F> {
    /// Create a game whose rolls are seeded from fresh entropy
    ///
    /// # Errors
    /// `InvalidArgument` if `dice` is empty.
    pub fn new(dice: Vec<Die<F>>) -> Result<Self> {
        Self::with_rng(dice, DiceRng::from_entropy())
    }

    /// Create a game with reproducible rolls
    pub fn with_seed(dice: Vec<Die<F>>, seed: u64) -> Result<Self> {
        Self::with_rng(dice, DiceRng::new(seed))
    }

    /// Create a game drawing from the given generator
    pub fn with_rng(dice: Vec<Die<F>>, rng: DiceRng) -> Result<Self> {
        if dice.is_empty() {
            return Err(MonteCarloError::InvalidArgument(
                "a game needs at least one die".to_string(),
            ));
        }
        Ok(Self {
            dice,
            rng,
            latest_result: None,
        })
    }

    /// Rebuild a game from checkpointed parts.
    pub(crate) fn from_parts(
        dice: Vec<Die<F>>,
        rng: DiceRng,
        latest_result: Option<WideResults<F>>,
    ) -> Result<Self> {
        let mut game = Self::with_rng(dice, rng)?;
        if let Some(table) = &latest_result {
            if table.num_dice() != game.dice.len() || !table.is_rectangular() {
                return Err(MonteCarloError::InvalidArgument(format!(
                    "result table does not have one column for each of the {} dice",
                    game.dice.len()
                )));
            }
        }
        game.latest_result = latest_result;
        Ok(game)
    }

    /// Roll every die `n_rolls` times and replace the stored results
    ///
    /// Die `i` rolls all of its `n_rolls` draws before die `i + 1` starts.
    /// On error the previous results are kept.
    ///
    /// # Errors
    /// - `InvalidArgument` if `n_rolls` is zero
    /// - `InvalidWeight` if a die has only zero weights
    pub fn play(&mut self, n_rolls: usize) -> Result<()> {
        if n_rolls == 0 {
            return Err(MonteCarloError::InvalidArgument(
                "number of rolls must be at least 1".to_string(),
            ));
        }

        let mut columns = Vec::with_capacity(self.dice.len());
        for die in &self.dice {
            columns.push(die.roll(n_rolls, &mut self.rng)?);
        }

        log::debug!("played {} rolls of {} dice", n_rolls, self.dice.len());
        self.latest_result = Some(WideResults::from_columns(columns));
        Ok(())
    }

    /// Results of the most recent play in the requested layout
    ///
    /// # Errors
    /// `NoResultsYet` if the game has not been played.
    pub fn results(&self, form: ResultForm) -> Result<GameResults<F>> {
        match form {
            ResultForm::Wide => Ok(GameResults::Wide(self.wide_results()?.clone())),
            ResultForm::Narrow => Ok(GameResults::Narrow(self.narrow_results()?)),
        }
    }

    /// Borrow the stored wide table
    pub fn wide_results(&self) -> Result<&WideResults<F>> {
        self.latest_result.as_ref().ok_or(MonteCarloError::NoResultsYet)
    }

    pub fn narrow_results(&self) -> Result<NarrowResults<F>> {
        Ok(self.wide_results()?.to_narrow())
    }

    pub fn has_results(&self) -> bool {
        self.latest_result.is_some()
    }

    pub fn dice(&self) -> &[Die<F>] {
        &self.dice
    }

    pub fn num_dice(&self) -> usize {
        self.dice.len()
    }

    /// Mutable access to one die, e.g. to reweight it between plays
    pub fn die_mut(&mut self, index: usize) -> Option<&mut Die<F>> {
        self.dice.get_mut(index)
    }

    pub fn rng(&self) -> &DiceRng {
        &self.rng
    }
}
