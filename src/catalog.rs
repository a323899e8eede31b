//! Model catalog: the selectable analysis models and their display metadata.
//!
//! The catalog is read-only once built. The default entries come from
//! `ModelCatalog::builtin`; alternate catalogs are loaded from a JSON array of
//! descriptors so tests and users can substitute their own list.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Highest value a speed or quality rating can take.
pub const MAX_RATING: u8 = 5;

const FILLED_STAR: &str = "★";
const EMPTY_STAR: &str = "☆";

/// A 1-5 rating. Out-of-range values are clamped on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Build a rating, clamping into `1..=5`.
    #[must_use]
    pub fn new(value: u8) -> Self {
        Self(value.clamp(1, MAX_RATING))
    }

    /// The clamped numeric value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Star glyphs for this rating (see `render_stars`).
    #[must_use]
    pub fn stars(self) -> String {
        render_stars(self.0)
    }
}

impl From<u8> for Rating {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// Speed and quality ratings for a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    /// How quickly the model responds.
    pub speed: Rating,
    /// How good the feedback is.
    pub quality: Rating,
}

/// One selectable model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    /// Unique identifier (for example `gpt-4`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Provider name, used for grouping.
    pub provider: String,
    /// Cost in INR per 1000 tokens.
    #[serde(rename = "costPer1kTokens")]
    pub cost_per_1k_tokens: f64,
    /// Speed and quality ratings.
    pub performance: Performance,
    /// What the model is good at, in display order.
    #[serde(default)]
    pub strengths: Vec<String>,
}

impl ModelDescriptor {
    fn builtin(
        id: &str,
        name: &str,
        provider: &str,
        cost_per_1k_tokens: f64,
        (speed, quality): (u8, u8),
        strengths: &[&str],
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            provider: provider.to_string(),
            cost_per_1k_tokens,
            performance: Performance {
                speed: Rating::new(speed),
                quality: Rating::new(quality),
            },
            strengths: strengths.iter().map(ToString::to_string).collect(),
        }
    }

    /// Cost formatted for display, e.g. `₹15.00`.
    #[must_use]
    pub fn cost_label(&self) -> String {
        format!("₹{:.2}", self.cost_per_1k_tokens)
    }

    fn matches(&self, needle: &str) -> bool {
        let contains = |haystack: &str| haystack.to_lowercase().contains(needle);
        contains(self.name.as_str())
            || contains(self.id.as_str())
            || contains(self.provider.as_str())
            || self.strengths.iter().any(|s| contains(s.as_str()))
    }
}

/// Render `rating` filled stars followed by `5 - rating` empty ones.
///
/// Values above five render as five filled stars.
#[must_use]
pub fn render_stars(rating: u8) -> String {
    let filled = usize::from(rating.min(MAX_RATING));
    let empty = usize::from(MAX_RATING) - filled;
    format!("{}{}", FILLED_STAR.repeat(filled), EMPTY_STAR.repeat(empty))
}

/// Reasons a list of descriptors cannot form a catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A descriptor has an empty id.
    #[error("model at position {0} has an empty id")]
    EmptyId(usize),
    /// Two descriptors share an id.
    #[error("duplicate model id `{0}`")]
    DuplicateId(String),
    /// A descriptor has a negative or non-finite cost.
    #[error("model `{0}` has an invalid cost")]
    InvalidCost(String),
}

/// Ordered, validated list of model descriptors.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelCatalog {
    models: Vec<ModelDescriptor>,
}

impl ModelCatalog {
    /// Build a catalog from `models`, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns an error if an id is empty or repeated, or a cost is negative
    /// or not finite.
    pub fn new(models: Vec<ModelDescriptor>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for (index, model) in models.iter().enumerate() {
            if model.id.is_empty() {
                return Err(CatalogError::EmptyId(index));
            }
            if !seen.insert(model.id.as_str()) {
                return Err(CatalogError::DuplicateId(model.id.clone()));
            }
            if !model.cost_per_1k_tokens.is_finite() || model.cost_per_1k_tokens < 0.0 {
                return Err(CatalogError::InvalidCost(model.id.clone()));
            }
        }
        Ok(Self { models })
    }

    /// The default four-model catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            models: vec![
                ModelDescriptor::builtin(
                    "gpt-4",
                    "GPT-4",
                    "OpenAI",
                    15.0,
                    (3, 5),
                    &["Creative writing", "Technical analysis", "Nuanced feedback"],
                ),
                ModelDescriptor::builtin(
                    "gpt-3.5-turbo",
                    "GPT-3.5 Turbo",
                    "OpenAI",
                    1.5,
                    (5, 3),
                    &["Quick edits", "Grammar checks", "Basic suggestions"],
                ),
                ModelDescriptor::builtin(
                    "claude-3-opus",
                    "Claude 3 Opus",
                    "Anthropic",
                    18.0,
                    (3, 5),
                    &[
                        "Detailed feedback",
                        "Literary analysis",
                        "Stylistic improvements",
                    ],
                ),
                ModelDescriptor::builtin(
                    "claude-3-sonnet",
                    "Claude 3 Sonnet",
                    "Anthropic",
                    6.0,
                    (4, 4),
                    &[
                        "Balanced speed/quality",
                        "Style consistency",
                        "Flow improvements",
                    ],
                ),
            ],
        }
    }

    /// Parse a catalog from a JSON array of descriptors.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or fails catalog validation.
    pub fn from_json(json: &str) -> Result<Self> {
        let models: Vec<ModelDescriptor> =
            serde_json::from_str(json).context("Failed to parse model catalog")?;
        Ok(Self::new(models)?)
    }

    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid catalog.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read model catalog from {}", path.display()))?;
        Self::from_json(&contents)
            .with_context(|| format!("Invalid model catalog in {}", path.display()))
    }

    /// Look up a model by exact id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ModelDescriptor> {
        self.models.iter().find(|m| m.id == id)
    }

    /// All models in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &ModelDescriptor> {
        self.models.iter()
    }

    /// Number of models.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether the catalog has no models.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Provider names in order of first appearance.
    #[must_use]
    pub fn providers(&self) -> Vec<&str> {
        let mut providers: Vec<&str> = Vec::new();
        for model in &self.models {
            if !providers.contains(&model.provider.as_str()) {
                providers.push(&model.provider);
            }
        }
        providers
    }

    /// Models grouped under their provider, providers in first-appearance order.
    #[must_use]
    pub fn grouped(&self) -> Vec<(&str, Vec<&ModelDescriptor>)> {
        self.providers()
            .into_iter()
            .map(|provider| {
                let models = self
                    .models
                    .iter()
                    .filter(|m| m.provider == provider)
                    .collect();
                (provider, models)
            })
            .collect()
    }

    /// Case-insensitive search over name, id, provider and strengths.
    ///
    /// Results follow grouped order so they line up with the selector list.
    /// An empty or blank query matches every model.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&ModelDescriptor> {
        let needle = query.trim().to_lowercase();
        self.grouped()
            .into_iter()
            .flat_map(|(_, models)| models)
            .filter(|m| needle.is_empty() || m.matches(&needle))
            .collect()
    }
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
