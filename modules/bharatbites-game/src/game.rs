//! The round/game progression state machine.
//!
//! One `Game` owns everything a UI needs to render a session: the fixed
//! dish batch, round number, guess list, score, status, and played-dish
//! history. All transitions are synchronous; callers hold `&mut Game`
//! (or a lock around it) so no reader ever observes a half-applied move.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use bharatbites_common::{
    closest_origin_distance, resolve_state, temperature_of, Coordinate, StateName,
    TemperatureTier,
};

use crate::dish::{Dish, DishProvider};
use crate::error::GameError;

/// Points for a first-try win.
pub const BASE_ROUND_SCORE: u32 = 5000;
/// Deducted from the award for every miss before the winning guess.
pub const WRONG_GUESS_PENALTY: u32 = 1000;

/// Rounds per game and guesses per round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_rounds: usize,
    pub max_guesses: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_rounds: 5,
            max_guesses: 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Playing,
    RoundWon,
    RoundLost,
    GameOver,
}

/// One evaluated guess. The winning guess is recorded too, at distance 0.
#[derive(Debug, Clone, Serialize)]
pub struct Guess {
    pub state: StateName,
    pub distance_km: f64,
    pub temperature: TemperatureTier,
}

/// What `make_guess` did with the submitted text.
#[derive(Debug, Clone, PartialEq)]
pub enum GuessOutcome {
    Correct {
        awarded: u32,
    },
    Incorrect {
        distance_km: f64,
        temperature: TemperatureTier,
    },
    /// Nothing changed. Rejections are silent from the game's point of
    /// view; the reason is for the input widget.
    Rejected(RejectReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Round already concluded (or game over).
    NotPlaying,
    /// Same state already guessed this round, after normalization.
    Duplicate,
    /// Text does not resolve to any canonical state. Garbage never
    /// reaches the scoring path.
    Unrecognized,
}

/// Progressive reveals: the dish name unlocks after two misses, the
/// ingredient list after three.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Hint {
    pub dish_name: Option<String>,
    pub ingredients: Option<Vec<String>>,
}

/// Fill instructions for the map renderer, which matches these against
/// its own boundary dataset via `is_match`. Precedence: correct >
/// incorrect > neutral. Empty while a round is still in progress.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MapOverlay {
    pub correct: Vec<StateName>,
    pub incorrect: Vec<StateName>,
}

#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    /// The batch for this game, one dish per round, order fixed.
    dishes: Vec<Dish>,
    /// 1-based.
    round: usize,
    status: GameStatus,
    guesses: Vec<Guess>,
    score: u32,
    history: Vec<Dish>,
    /// Bumped on every (re)start; scopes in-flight image resolutions.
    generation: u64,
}

impl Game {
    /// Start a game with a fresh uniform draw from the provider's pool.
    pub fn new(provider: &dyn DishProvider, config: GameConfig) -> Result<Self, GameError> {
        Self::with_rng(provider, config, &mut rand::rng())
    }

    /// Like [`Game::new`] with an explicit RNG, for deterministic tests.
    pub fn with_rng<R: Rng + ?Sized>(
        provider: &dyn DishProvider,
        config: GameConfig,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let dishes = draw_batch(provider, config, rng)?;
        Ok(Self {
            config,
            dishes,
            round: 1,
            status: GameStatus::Playing,
            guesses: Vec::new(),
            score: 0,
            history: Vec::new(),
            generation: 1,
        })
    }

    /// Evaluate a raw guess string against the current dish.
    ///
    /// Rejected input (round not in play, duplicate state, unresolvable
    /// text) changes nothing. A correct guess awards
    /// `5000 - 1000 × misses_so_far` and wins the round; the
    /// `max_guesses`-th miss loses it.
    pub fn make_guess(&mut self, raw: &str) -> GuessOutcome {
        if self.status != GameStatus::Playing {
            return GuessOutcome::Rejected(RejectReason::NotPlaying);
        }
        let Some(state) = resolve_state(raw) else {
            return GuessOutcome::Rejected(RejectReason::Unrecognized);
        };
        // StateName equality is normalized-form equality, since both
        // sides came through resolve_state.
        if self.guesses.iter().any(|g| g.state == state) {
            return GuessOutcome::Rejected(RejectReason::Duplicate);
        }

        let dish = self.dishes[self.round - 1].clone();

        if dish.origins.contains(&state) {
            // Saturating: a config with a guess budget past the score
            // floor awards 0, never underflows.
            let awarded = BASE_ROUND_SCORE
                .saturating_sub(WRONG_GUESS_PENALTY * self.guesses.len() as u32);
            self.score += awarded;
            self.guesses.push(Guess {
                state,
                distance_km: 0.0,
                temperature: temperature_of(0.0),
            });
            self.history.push(dish);
            self.status = GameStatus::RoundWon;
            return GuessOutcome::Correct { awarded };
        }

        let origin_coords: Vec<Coordinate> =
            dish.origins.iter().map(StateName::centroid).collect();
        let distance_km = closest_origin_distance(state.centroid(), &origin_coords);
        let temperature = temperature_of(distance_km);
        self.guesses.push(Guess {
            state,
            distance_km,
            temperature,
        });

        if self.guesses.len() >= self.config.max_guesses {
            self.history.push(dish);
            self.status = GameStatus::RoundLost;
        }

        GuessOutcome::Incorrect {
            distance_km,
            temperature,
        }
    }

    /// Advance past a concluded round. A no-op unless the round is won or
    /// lost; after the final round the game is over.
    pub fn next_round(&mut self) {
        match self.status {
            GameStatus::RoundWon | GameStatus::RoundLost => {}
            GameStatus::Playing | GameStatus::GameOver => return,
        }

        if self.round >= self.config.max_rounds {
            self.status = GameStatus::GameOver;
        } else {
            self.round += 1;
            self.guesses.clear();
            self.status = GameStatus::Playing;
        }
    }

    /// Re-initialize with a fresh batch: round 1, score 0, empty guesses
    /// and history. Bumps the generation so stale image resolutions from
    /// the previous game are discarded on arrival.
    pub fn restart(&mut self, provider: &dyn DishProvider) -> Result<(), GameError> {
        self.restart_with_rng(provider, &mut rand::rng())
    }

    /// Like [`Game::restart`] with an explicit RNG.
    pub fn restart_with_rng<R: Rng + ?Sized>(
        &mut self,
        provider: &dyn DishProvider,
        rng: &mut R,
    ) -> Result<(), GameError> {
        self.dishes = draw_batch(provider, self.config, rng)?;
        self.round = 1;
        self.status = GameStatus::Playing;
        self.guesses.clear();
        self.score = 0;
        self.history.clear();
        self.generation += 1;
        Ok(())
    }

    /// Apply an async image resolution. Returns false, changing nothing,
    /// if the resolution belongs to an earlier generation or the dish is
    /// no longer part of the game.
    pub fn apply_resolved_image(
        &mut self,
        generation: u64,
        dish_id: &str,
        image: String,
    ) -> bool {
        if generation != self.generation {
            debug!(dish_id, "discarding image resolution from a previous game");
            return false;
        }

        let mut applied = false;
        for dish in self
            .dishes
            .iter_mut()
            .chain(self.history.iter_mut())
            .filter(|dish| dish.id == dish_id)
        {
            dish.image.clone_from(&image);
            applied = true;
        }
        applied
    }

    /// The dish in play. `None` once the game is over.
    pub fn current_dish(&self) -> Option<&Dish> {
        if self.status == GameStatus::GameOver {
            None
        } else {
            self.dishes.get(self.round - 1)
        }
    }

    pub fn hint(&self) -> Hint {
        let mut hint = Hint::default();
        if self.status != GameStatus::Playing {
            return hint;
        }
        let Some(dish) = self.current_dish() else {
            return hint;
        };
        if self.guesses.len() >= 2 {
            hint.dish_name = Some(dish.name.clone());
        }
        if self.guesses.len() >= 3 {
            hint.ingredients = Some(dish.ingredients.clone());
        }
        hint
    }

    pub fn map_overlay(&self) -> MapOverlay {
        match self.status {
            GameStatus::RoundWon | GameStatus::RoundLost => MapOverlay {
                correct: self.dishes[self.round - 1].origins.clone(),
                incorrect: self.guesses.iter().map(|g| g.state).collect(),
            },
            GameStatus::Playing | GameStatus::GameOver => MapOverlay::default(),
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Current round, 1-based.
    pub fn round(&self) -> usize {
        self.round
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn history(&self) -> &[Dish] {
        &self.history
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Uniform sample without replacement of `max_rounds` dishes.
fn draw_batch<R: Rng + ?Sized>(
    provider: &dyn DishProvider,
    config: GameConfig,
    rng: &mut R,
) -> Result<Vec<Dish>, GameError> {
    let mut pool = provider.dishes()?;
    if pool.len() < config.max_rounds {
        return Err(GameError::PoolExhausted {
            available: pool.len(),
            needed: config.max_rounds,
        });
    }
    pool.shuffle(rng);
    pool.truncate(config.max_rounds);
    Ok(pool)
}
