//! Terminal playthrough against the builtin dish pool.
//!
//! Run with `cargo run --example play`, then type state names. Image
//! enrichment runs in the background; gameplay never waits on it.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bharatbites_game::{
    spawn_image_enrichment, BuiltinDishes, Game, GameConfig, GameStatus, GuessOutcome,
    ImageResolver, RejectReason,
};
use wiki_client::WikiClient;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("bharatbites_game=info".parse()?))
        .init();

    let game = Arc::new(Mutex::new(Game::new(&BuiltinDishes, GameConfig::default())?));
    let resolver: Arc<dyn ImageResolver> = Arc::new(WikiClient::new());
    spawn_image_enrichment(&game, &resolver).await;
    info!("game started");

    let stdin = io::stdin();
    loop {
        let prompt = {
            let game = game.lock().await;
            match game.status() {
                GameStatus::Playing => {
                    let dish = game.current_dish().expect("a round in play has a dish");
                    let hint = game.hint();
                    println!(
                        "\nRound {} of {} — score {} — guesses {}/{}",
                        game.round(),
                        game.config().max_rounds,
                        game.score(),
                        game.guesses().len(),
                        game.config().max_guesses
                    );
                    if let Some(name) = hint.dish_name {
                        println!("Hint — dish name: {name}");
                    }
                    if let Some(ingredients) = hint.ingredients {
                        println!("Hint — ingredients: {}", ingredients.join(", "));
                    }
                    println!("Mystery dish image: {}", dish.image);
                    "Your guess (a state or union territory): "
                }
                GameStatus::RoundWon | GameStatus::RoundLost => {
                    let dish = game.current_dish().expect("a concluded round has a dish");
                    let answer: Vec<&str> =
                        dish.origins.iter().map(|s| s.as_str()).collect();
                    println!(
                        "\n{} — the answer was {} ({})",
                        if game.status() == GameStatus::RoundWon {
                            "Correct!"
                        } else {
                            "Round over."
                        },
                        answer.join(" or "),
                        dish.name
                    );
                    "Press enter for the next round: "
                }
                GameStatus::GameOver => {
                    println!(
                        "\nGame over! Final score: {} / {}",
                        game.score(),
                        game.config().max_rounds as u32 * bharatbites_game::BASE_ROUND_SCORE
                    );
                    for dish in game.history() {
                        let origins: Vec<&str> =
                            dish.origins.iter().map(|s| s.as_str()).collect();
                        println!("  {} — {}", dish.name, origins.join(", "));
                    }
                    return Ok(());
                }
            }
        };

        print!("{prompt}");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        let input = line.trim();

        let mut game = game.lock().await;
        match game.status() {
            GameStatus::Playing => match game.make_guess(input) {
                GuessOutcome::Correct { awarded } => println!("+{awarded} points!"),
                GuessOutcome::Incorrect {
                    distance_km,
                    temperature,
                } => println!("{:.0} km away — {}", distance_km, temperature.label()),
                GuessOutcome::Rejected(RejectReason::Duplicate) => {
                    println!("Already guessed that one.");
                }
                GuessOutcome::Rejected(RejectReason::Unrecognized) => {
                    println!("Not a state I know.");
                }
                GuessOutcome::Rejected(RejectReason::NotPlaying) => {}
            },
            GameStatus::RoundWon | GameStatus::RoundLost => game.next_round(),
            GameStatus::GameOver => {}
        }
    }
}
