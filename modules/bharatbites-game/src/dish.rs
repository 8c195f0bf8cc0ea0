//! The dish pool and the two external-collaborator seams: where dishes
//! come from, and how their images get resolved.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use bharatbites_common::{resolve_state, StateName};
use wiki_client::WikiClient;

use crate::error::GameError;

/// Compile-time dish pool.
pub const BUILTIN_DISHES: &str = include_str!("data/dishes.json");

/// One guessable dish. Immutable for the life of a round except `image`,
/// which enrichment may replace in place with a live URL.
#[derive(Debug, Clone, Serialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    /// Fallback image reference; the game stays fully playable if it is
    /// never upgraded.
    pub image: String,
    /// Origin state(s); validated non-empty and canonical at load.
    pub origins: Vec<StateName>,
    pub ingredients: Vec<String>,
    pub description: String,
    /// Wikipedia reference used for image resolution.
    pub wiki_link: String,
}

/// Wire shape of the pool data: origins as free strings, resolved to
/// canonical states before a `Dish` exists.
#[derive(Debug, Deserialize)]
struct RawDish {
    id: String,
    name: String,
    image: String,
    origins: Vec<String>,
    ingredients: Vec<String>,
    description: String,
    #[serde(rename = "wikiLink")]
    wiki_link: String,
}

impl Dish {
    fn from_raw(raw: RawDish) -> Result<Self, GameError> {
        if raw.origins.is_empty() {
            return Err(GameError::InvalidDish {
                id: raw.id,
                reason: "no origin states".to_string(),
            });
        }

        let origins = raw
            .origins
            .iter()
            .map(|origin| {
                resolve_state(origin).ok_or_else(|| GameError::InvalidDish {
                    id: raw.id.clone(),
                    reason: format!("origin `{origin}` is not a canonical state"),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: raw.id,
            name: raw.name,
            image: raw.image,
            origins,
            ingredients: raw.ingredients,
            description: raw.description,
            wiki_link: raw.wiki_link,
        })
    }
}

/// Source of the dish pool a game draws its rounds from.
pub trait DishProvider: Send + Sync {
    fn dishes(&self) -> Result<Vec<Dish>, GameError>;
}

/// The embedded pool. Parsing or validation failure is a data bug and
/// surfaces at game construction, never mid-round.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinDishes;

impl DishProvider for BuiltinDishes {
    fn dishes(&self) -> Result<Vec<Dish>, GameError> {
        let raw: Vec<RawDish> = serde_json::from_str(BUILTIN_DISHES)?;
        raw.into_iter().map(Dish::from_raw).collect()
    }
}

/// Best-effort image lookup. Implementations swallow their own failures;
/// `None` leaves the dish on its fallback image.
#[async_trait]
pub trait ImageResolver: Send + Sync {
    async fn resolve_image(&self, reference: &str) -> Option<String>;
}

#[async_trait]
impl ImageResolver for WikiClient {
    async fn resolve_image(&self, reference: &str) -> Option<String> {
        match self.page_image(reference).await {
            Ok(image) => image,
            Err(err) => {
                warn!(reference, error = %err, "wiki image resolution failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_pool_parses_and_validates() {
        let dishes = BuiltinDishes.dishes().unwrap();
        assert!(dishes.len() >= 5, "pool must cover a full game");
        for dish in &dishes {
            assert!(!dish.origins.is_empty());
            assert!(!dish.wiki_link.is_empty());
        }
    }

    #[test]
    fn builtin_pool_ids_are_unique() {
        let dishes = BuiltinDishes.dishes().unwrap();
        let ids: HashSet<&str> = dishes.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids.len(), dishes.len());
    }

    #[test]
    fn non_canonical_origin_is_a_load_error() {
        let raw = RawDish {
            id: "bad".to_string(),
            name: "Bad".to_string(),
            image: String::new(),
            origins: vec!["Atlantis".to_string()],
            ingredients: vec![],
            description: String::new(),
            wiki_link: String::new(),
        };
        assert!(matches!(
            Dish::from_raw(raw),
            Err(GameError::InvalidDish { .. })
        ));
    }

    #[test]
    fn historical_origin_spellings_resolve() {
        let raw = RawDish {
            id: "chhena-poda".to_string(),
            name: "Chhena Poda".to_string(),
            image: String::new(),
            origins: vec!["Orissa".to_string()],
            ingredients: vec![],
            description: String::new(),
            wiki_link: String::new(),
        };
        let dish = Dish::from_raw(raw).unwrap();
        assert_eq!(dish.origins, vec![StateName::Odisha]);
    }

    #[test]
    fn empty_origins_is_a_load_error() {
        let raw = RawDish {
            id: "empty".to_string(),
            name: "Empty".to_string(),
            image: String::new(),
            origins: vec![],
            ingredients: vec![],
            description: String::new(),
            wiki_link: String::new(),
        };
        assert!(matches!(
            Dish::from_raw(raw),
            Err(GameError::InvalidDish { .. })
        ));
    }
}
