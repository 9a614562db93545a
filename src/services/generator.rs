use chrono::Utc;
use sha2::{Digest, Sha256};

use crate::services::fallback;
use crate::services::provider::{GeminiClient, ProviderError, SamplingConfig};

/// Minimum length a provider response must reach to count as a recipe.
pub const MIN_RECIPE_LEN: usize = 100;

/// A response containing this many distinct clichés is rejected.
pub const MAX_GENERIC_PHRASES: usize = 3;

const GENERIC_PHRASES: [&str; 6] = [
    "stir fry",
    "chop everything",
    "mix together",
    "simple recipe",
    "basic recipe",
    "cook until done",
];

/// One entry in the ordered fallback chain: a model identifier plus the
/// sampling configuration to request it with.
#[derive(Debug, Clone)]
pub struct ModelSpec {
    pub name: String,
    pub sampling: SamplingConfig,
}

/// Outcome of a single model attempt. The chain advances on anything but
/// `Usable`; there is no retry beyond the fixed model list.
#[derive(Debug)]
pub enum AttemptOutcome {
    Usable(String),
    Empty,
    TooShort,
    TooGeneric,
    Transport(ProviderError),
}

#[derive(Debug, Clone)]
pub struct GeneratedRecipe {
    pub text: String,
    pub fallback: bool,
}

pub struct RecipeGenerator {
    client: GeminiClient,
    chain: Vec<ModelSpec>,
}

impl RecipeGenerator {
    pub fn new(client: GeminiClient, models: &[String]) -> Self {
        let chain = models
            .iter()
            .map(|name| ModelSpec {
                name: name.clone(),
                sampling: SamplingConfig::default(),
            })
            .collect();

        Self { client, chain }
    }

    /// Tries each model in order and returns the first usable response, or
    /// the deterministic fallback template when the chain is exhausted.
    /// Provider failures never surface to the caller.
    pub async fn generate(&self, ingredients: &str) -> GeneratedRecipe {
        let tagged = format!(
            "{}_{}",
            ingredients,
            uniqueness_tag(ingredients, Utc::now().timestamp())
        );
        let prompt = build_prompt(&tagged);

        for spec in &self.chain {
            tracing::info!(model = %spec.name, "trying model");

            let outcome = match self
                .client
                .generate_content(&spec.name, &prompt, spec.sampling)
                .await
            {
                Ok(text) => validate(&text),
                Err(ProviderError::MissingText) => AttemptOutcome::Empty,
                Err(e) => AttemptOutcome::Transport(e),
            };

            match outcome {
                AttemptOutcome::Usable(text) => {
                    tracing::info!(model = %spec.name, "model produced a usable recipe");
                    return GeneratedRecipe {
                        text,
                        fallback: false,
                    };
                }
                AttemptOutcome::Empty => {
                    tracing::warn!(model = %spec.name, "empty response, trying next model");
                }
                AttemptOutcome::TooShort => {
                    tracing::warn!(model = %spec.name, "recipe too short, trying next model");
                }
                AttemptOutcome::TooGeneric => {
                    tracing::warn!(model = %spec.name, "recipe too generic, trying next model");
                }
                AttemptOutcome::Transport(e) => {
                    tracing::warn!(model = %spec.name, error = %e, "model failed");
                }
            }
        }

        tracing::warn!("all models exhausted, serving fallback recipe");
        GeneratedRecipe {
            text: fallback::fallback_recipe(ingredients),
            fallback: true,
        }
    }
}

/// Shared validation predicate applied to every model's response.
pub fn validate(text: &str) -> AttemptOutcome {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return AttemptOutcome::Empty;
    }
    if trimmed.len() <= MIN_RECIPE_LEN {
        return AttemptOutcome::TooShort;
    }
    if generic_phrase_count(trimmed) >= MAX_GENERIC_PHRASES {
        return AttemptOutcome::TooGeneric;
    }

    AttemptOutcome::Usable(trimmed.to_string())
}

pub fn generic_phrase_count(text: &str) -> usize {
    let lower = text.to_lowercase();
    GENERIC_PHRASES
        .iter()
        .filter(|phrase| lower.contains(*phrase))
        .count()
}

/// Timestamp plus a truncated content hash, appended to the ingredient text
/// so the provider cannot serve a cached response for repeat requests.
pub fn uniqueness_tag(ingredients: &str, now_unix: i64) -> String {
    let digest = Sha256::digest(ingredients.as_bytes());
    let hex: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
    format!("{}_{}", now_unix, &hex[..8])
}

fn build_prompt(ingredients: &str) -> String {
    format!(
        "You are a creative chef focused on reducing food waste. Create a UNIQUE recipe using EXACTLY these ingredients: {ingredients}\n\n\
         IMPORTANT: Make this recipe DIFFERENT from standard recipes. Be creative and innovative!\n\n\
         Please provide:\n\
         1. A creative recipe name that reflects the ingredients\n\
         2. A brief description of the dish\n\
         3. Required ingredients (only from the list provided plus basic pantry items)\n\
         4. Clear, numbered step-by-step instructions\n\
         5. Serving suggestions or variations\n\n\
         Make the recipe practical for home cooking and emphasize using ALL the ingredients to minimize waste.\n\
         Be specific about quantities and cooking times.\n\
         Make sure this recipe is truly unique and not a generic stir-fry or salad.\n\n\
         Available ingredients: {ingredients}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_phrase_counting() {
        assert_eq!(generic_phrase_count("A nice dish"), 0);
        assert_eq!(generic_phrase_count("Stir fry it, then mix together"), 2);
        assert_eq!(
            generic_phrase_count("A simple recipe: chop everything, cook until done"),
            3
        );
        // Repeats of the same phrase count once.
        assert_eq!(generic_phrase_count("stir fry stir fry stir fry"), 1);
    }

    #[test]
    fn test_validate_rejects_short_and_generic() {
        assert!(matches!(validate(""), AttemptOutcome::Empty));
        assert!(matches!(validate("   "), AttemptOutcome::Empty));
        assert!(matches!(validate("too short"), AttemptOutcome::TooShort));

        let generic = format!(
            "This simple recipe is a basic recipe: chop everything. {}",
            "x".repeat(120)
        );
        assert!(matches!(validate(&generic), AttemptOutcome::TooGeneric));

        let good = format!("A proper braise with layered flavors. {}", "x".repeat(120));
        assert!(matches!(validate(&good), AttemptOutcome::Usable(_)));
    }

    #[test]
    fn test_uniqueness_tag_shape() {
        let tag = uniqueness_tag("chicken, rice", 1700000000);
        let (ts, hash) = tag.split_once('_').unwrap();
        assert_eq!(ts, "1700000000");
        assert_eq!(hash.len(), 8);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));

        // Same ingredients, same hash; timestamp varies independently.
        assert_eq!(
            uniqueness_tag("chicken, rice", 1).split_once('_').unwrap().1,
            hash
        );
        assert_ne!(
            uniqueness_tag("beef", 1).split_once('_').unwrap().1,
            hash
        );
    }

    #[test]
    fn test_prompt_embeds_ingredients_verbatim() {
        let prompt = build_prompt("leftover chicken & 1/2 cup rice");
        assert!(prompt.contains("leftover chicken & 1/2 cup rice"));
    }
}
