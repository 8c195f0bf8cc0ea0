//! Fire-and-forget image enrichment.
//!
//! Resolution is decoration: it never blocks a guess, and a game with
//! only fallback images is a fully playable game. Each spawned task
//! carries the generation it was started under; `apply_resolved_image`
//! rejects results from a generation that has since been restarted away.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::dish::ImageResolver;
use crate::game::Game;

/// Kick off best-effort image resolution for every dish in the current
/// game, one task per dish. Callers normally drop the returned handles;
/// tests await them.
pub async fn spawn_image_enrichment(
    game: &Arc<Mutex<Game>>,
    resolver: &Arc<dyn ImageResolver>,
) -> Vec<JoinHandle<()>> {
    let (generation, targets) = {
        let game = game.lock().await;
        let targets: Vec<(String, String)> = game
            .dishes()
            .iter()
            .map(|dish| (dish.id.clone(), dish.wiki_link.clone()))
            .collect();
        (game.generation(), targets)
    };

    targets
        .into_iter()
        .map(|(dish_id, reference)| {
            let game = Arc::clone(game);
            let resolver = Arc::clone(resolver);
            tokio::spawn(async move {
                let Some(image) = resolver.resolve_image(&reference).await else {
                    debug!(dish_id = dish_id.as_str(), "no live image, keeping fallback");
                    return;
                };
                let mut game = game.lock().await;
                game.apply_resolved_image(generation, &dish_id, image);
            })
        })
        .collect()
}
