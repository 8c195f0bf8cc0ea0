pub mod dish;
pub mod enrich;
pub mod error;
pub mod game;

pub use dish::{BuiltinDishes, Dish, DishProvider, ImageResolver};
pub use enrich::spawn_image_enrichment;
pub use error::GameError;
pub use game::{
    Game, GameConfig, GameStatus, Guess, GuessOutcome, Hint, MapOverlay, RejectReason,
    BASE_ROUND_SCORE, WRONG_GUESS_PENALTY,
};
