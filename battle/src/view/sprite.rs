//! Sprite candidate selection
//!
//! [`SpriteSet`] mirrors the `sprites` object of a PokeAPI creature record.
//! Only the fields the battle view can use are kept.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Front,
    Back,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SpritePair {
    #[serde(default)]
    pub front_default: Option<String>,

    #[serde(default)]
    pub back_default: Option<String>,
}

impl SpritePair {
    fn get(&self, orientation: Orientation) -> Option<&str> {
        match orientation {
            Orientation::Front => self.front_default.as_deref(),
            Orientation::Back => self.back_default.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OtherSprites {
    #[serde(default)]
    pub showdown: SpritePair,

    #[serde(default, rename = "official-artwork")]
    pub official_artwork: SpritePair,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AnimatedSprites {
    #[serde(default)]
    pub animated: SpritePair,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GenerationFive {
    #[serde(default, rename = "black-white")]
    pub black_white: AnimatedSprites,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SpriteVersions {
    #[serde(default, rename = "generation-v")]
    pub generation_v: GenerationFive,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SpriteSet {
    #[serde(default)]
    pub front_default: Option<String>,

    #[serde(default)]
    pub back_default: Option<String>,

    #[serde(default)]
    pub other: OtherSprites,

    #[serde(default)]
    pub versions: SpriteVersions,
}

impl SpriteSet {
    fn static_default(&self, orientation: Orientation) -> Option<&str> {
        match orientation {
            Orientation::Front => self.front_default.as_deref(),
            Orientation::Back => self.back_default.as_deref(),
        }
    }

    /// Candidate URLs for one orientation, best first.
    ///
    /// Animated gen-5 sprite, then the showdown animation, then official
    /// artwork (front only), then the static default.
    pub fn candidates(&self, orientation: Orientation) -> Vec<&str> {
        let official = match orientation {
            Orientation::Front => self.other.official_artwork.front_default.as_deref(),
            Orientation::Back => None,
        };

        [
            self.versions
                .generation_v
                .black_white
                .animated
                .get(orientation),
            self.other.showdown.get(orientation),
            official,
            self.static_default(orientation),
        ]
        .into_iter()
        .flatten()
        .filter(|url| !url.is_empty())
        .collect()
    }

    /// Best URL for the orientation. A back view with no back asset at any
    /// tier shows the front asset instead of nothing.
    pub fn resolve(&self, orientation: Orientation) -> Option<&str> {
        self.candidates(orientation)
            .first()
            .copied()
            .or_else(|| match orientation {
                Orientation::Back => self.resolve(Orientation::Front),
                Orientation::Front => None,
            })
    }
}
