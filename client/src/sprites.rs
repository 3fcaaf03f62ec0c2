use std::collections::HashMap;
use std::sync::RwLock;

use anyhow::{Context, Result};
use tallgrass_battle::{Orientation, SpriteSet};

use crate::config::ClientConfig;

/// Resolves a display URL for a creature.
///
/// Never fails: any problem degrades to `None` and the caller keeps
/// whatever image it already had.
pub trait SpriteSource {
    async fn resolve_sprite(&self, pokemon_id: u32, orientation: Orientation) -> Option<String>;
}

/// Sprite lookup against PokeAPI creature records, memoized per creature.
///
/// A record that was fetched but is unusable (refused, malformed, no
/// sprites) is remembered as a miss. Transport failures are not, so a
/// later render tries again.
pub struct PokeApiSprites {
    client: reqwest::Client,
    base_url: String,
    cache: RwLock<HashMap<u32, Option<SpriteSet>>>,
}

impl PokeApiSprites {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timings.asset_timeout)
            .build()
            .context("Failed to build sprite client")?;

        Ok(Self {
            client,
            base_url: config.pokeapi_url.clone(),
            cache: RwLock::new(HashMap::new()),
        })
    }

    fn cached(&self, pokemon_id: u32) -> Option<Option<SpriteSet>> {
        self.cache.read().ok()?.get(&pokemon_id).cloned()
    }

    fn remember(&self, pokemon_id: u32, set: Option<SpriteSet>) {
        if let Ok(mut cache) = self.cache.write() {
            cache.insert(pokemon_id, set);
        }
    }

    /// `Ok(None)` is a definite miss; `Err` is worth retrying
    async fn sprite_set(&self, pokemon_id: u32) -> Result<Option<SpriteSet>> {
        if let Some(known) = self.cached(pokemon_id) {
            return Ok(known);
        }

        let url = format!("{}/pokemon/{}", self.base_url.trim_end_matches('/'), pokemon_id);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to reach sprite source")?;

        let status = response.status();
        let set = if status.is_success() {
            let body = response
                .text()
                .await
                .context("Failed to read creature record")?;
            parse_sprites(&body)
                .inspect_err(|e| tracing::warn!(pokemon_id, error = %e, "Unusable creature record"))
                .ok()
        } else {
            tracing::warn!(pokemon_id, status = status.as_u16(), "Sprite source refused the request");
            None
        };

        self.remember(pokemon_id, set.clone());
        Ok(set)
    }
}

fn parse_sprites(body: &str) -> Result<SpriteSet> {
    let record: serde_json::Value =
        serde_json::from_str(body).context("Failed to parse creature record")?;
    let sprites = record
        .get("sprites")
        .cloned()
        .context("Creature record has no sprites")?;
    serde_json::from_value(sprites).context("Unexpected sprites layout")
}

impl SpriteSource for PokeApiSprites {
    async fn resolve_sprite(&self, pokemon_id: u32, orientation: Orientation) -> Option<String> {
        match self.sprite_set(pokemon_id).await {
            Ok(set) => set?.resolve(orientation).map(str::to_string),
            Err(e) => {
                tracing::warn!(pokemon_id, error = %e, "Sprite unavailable");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sprites(pokeapi_url: &str) -> PokeApiSprites {
        let config = ClientConfig {
            pokeapi_url: pokeapi_url.to_string(),
            ..ClientConfig::default()
        };
        PokeApiSprites::new(&config).unwrap()
    }

    #[test]
    fn test_parse_sprites() {
        let set = parse_sprites(
            r#"{"id": 19, "sprites": {"front_default": "f.png", "back_default": "b.png"}}"#,
        )
        .unwrap();
        assert_eq!(set.resolve(Orientation::Back), Some("b.png"));

        assert!(parse_sprites(r#"{"id": 19}"#).is_err());
        assert!(parse_sprites("<html>").is_err());
    }

    #[tokio::test]
    async fn test_known_miss_served_from_cache() {
        // an unparseable base URL would fail if a request were attempted
        let sprites = sprites("not a url");
        sprites.remember(19, None);

        assert_eq!(sprites.resolve_sprite(19, Orientation::Front).await, None);
        assert_eq!(sprites.cached(19), Some(None));
    }

    #[tokio::test]
    async fn test_cached_set_resolves() {
        let sprites = sprites("not a url");
        let set = parse_sprites(r#"{"sprites": {"front_default": "f.png"}}"#).unwrap();
        sprites.remember(4, Some(set));

        assert_eq!(
            sprites.resolve_sprite(4, Orientation::Back).await.as_deref(),
            Some("f.png")
        );
    }

    #[tokio::test]
    async fn test_transport_failure_not_remembered() {
        let sprites = sprites("not a url");

        assert_eq!(sprites.resolve_sprite(19, Orientation::Front).await, None);
        assert_eq!(sprites.cached(19), None);
    }
}
