//! Deterministic templated recipes served when the provider is unavailable
//! or every model's output fails validation.

const PROTEIN_WORDS: [&str; 4] = ["chicken", "beef", "pork", "fish"];
const CARB_WORDS: [&str; 4] = ["pasta", "rice", "noodles", "bread"];
const DESSERT_WORDS: [&str; 4] = ["sweet", "sugar", "chocolate", "fruit"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeCategory {
    Protein,
    Carb,
    Dessert,
    Vegetable,
}

/// Keyword-matches the ingredient text against the category word lists,
/// checked in priority order; anything unmatched lands on Vegetable.
pub fn categorize(ingredients: &str) -> RecipeCategory {
    let lower = ingredients.to_lowercase();

    if PROTEIN_WORDS.iter().any(|w| lower.contains(w)) {
        RecipeCategory::Protein
    } else if CARB_WORDS.iter().any(|w| lower.contains(w)) {
        RecipeCategory::Carb
    } else if DESSERT_WORDS.iter().any(|w| lower.contains(w)) {
        RecipeCategory::Dessert
    } else {
        RecipeCategory::Vegetable
    }
}

pub fn fallback_recipe(ingredients: &str) -> String {
    match categorize(ingredients) {
        RecipeCategory::Protein => protein_recipe(ingredients),
        RecipeCategory::Carb => carb_recipe(ingredients),
        RecipeCategory::Dessert => dessert_recipe(ingredients),
        RecipeCategory::Vegetable => vegetable_recipe(ingredients),
    }
}

fn protein_recipe(ingredients: &str) -> String {
    format!(
        r#"🍳 **Creative Protein Dish** from: {ingredients}

**Marinated Protein Bowl**
A flavorful, protein-packed dish that makes the most of your ingredients.

**Marinade:**
- 2 tbsp oil
- 1 tbsp soy sauce or vinegar
- 1 tsp garlic powder
- 1 tsp paprika
- Salt and pepper

**Instructions:**
1. Chop protein and vegetables into uniform pieces
2. Whisk marinade ingredients and coat everything thoroughly
3. Let marinate for 15-30 minutes for better flavor
4. Heat a pan over medium-high heat
5. Cook protein first until nearly done (4-5 minutes)
6. Add vegetables and cook until tender-crisp (3-4 minutes)
7. Serve over grains or with crusty bread

**Chef's Tip:** The marinade tenderizes and adds deep flavor to simple ingredients!
"#
    )
}

fn carb_recipe(ingredients: &str) -> String {
    format!(
        r#"🍝 **Hearty Carb Creation** from: {ingredients}

**Savory Grain Medley**
A satisfying dish that transforms basic carbs into something special.

**Flavor Boosters:**
- 2 tbsp olive oil or butter
- 1 onion, finely chopped (if available)
- 2 cloves garlic, minced
- Herbs: thyme, oregano, or basil
- Grated cheese (optional)

**Instructions:**
1. Cook your base carb (pasta, rice, etc.) according to package directions
2. While cooking, chop other ingredients
3. Sauté aromatics in oil until fragrant
4. Add other ingredients and cook until tender
5. Combine with cooked carb and toss well
6. Season generously with salt, pepper, and herbs
7. Let rest 2 minutes before serving

**Chef's Tip:** Toast your grains in a dry pan before cooking for nuttier flavor!
"#
    )
}

fn dessert_recipe(ingredients: &str) -> String {
    format!(
        r#"🍰 **Simple Sweet Treat** from: {ingredients}

**Fruit & Sweet Medley**
A quick dessert that satisfies sweet cravings without waste.

**Basic Sweet Base:**
- 2 tbsp sugar or honey
- 1 tsp cinnamon (optional)
- 1 tbsp butter or oil
- Squeeze of lemon juice

**Instructions:**
1. Chop fruits/sweets into bite-sized pieces
2. Combine with sweet base ingredients in a bowl
3. If using fruits, sauté in pan until softened (3-4 minutes)
4. For baked goods, toast lightly for better texture
5. Combine everything and serve warm
6. Top with yogurt or whipped cream if available

**Chef's Tip:** A pinch of salt enhances sweet flavors dramatically!
"#
    )
}

fn vegetable_recipe(ingredients: &str) -> String {
    format!(
        r#"🥗 **Garden Fresh Creation** from: {ingredients}

**Roasted Vegetable Medley**
Simple techniques that bring out natural sweetness and flavors.

**Seasoning Blend:**
- 2 tbsp olive oil
- 1 tsp dried herbs (thyme, rosemary, or Italian blend)
- ½ tsp garlic powder
- Salt and pepper to taste
- Squeeze of citrus (optional)

**Instructions:**
1. Preheat oven to 400°F (200°C)
2. Chop vegetables into similar-sized pieces
3. Toss with oil and seasonings until evenly coated
4. Spread in single layer on baking sheet
5. Roast for 20-25 minutes until tender and slightly caramelized
6. Stir halfway through cooking
7. Serve as side or main dish with grains

**Chef's Tip:** Don't overcrowd the pan - this steams instead of roasting!
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_priority_order() {
        assert_eq!(categorize("chicken and rice"), RecipeCategory::Protein);
        assert_eq!(categorize("pasta with chocolate"), RecipeCategory::Carb);
        assert_eq!(categorize("chocolate chips"), RecipeCategory::Dessert);
        assert_eq!(categorize("zucchini, peppers"), RecipeCategory::Vegetable);
    }

    #[test]
    fn test_category_is_case_insensitive() {
        assert_eq!(categorize("CHICKEN thighs"), RecipeCategory::Protein);
    }

    #[test]
    fn test_template_embeds_ingredients() {
        let recipe = fallback_recipe("chicken, peppers");
        assert!(recipe.contains("chicken, peppers"));
        assert!(recipe.contains("Marinated Protein Bowl"));

        let recipe = fallback_recipe("day-old bread");
        assert!(recipe.contains("Savory Grain Medley"));

        let recipe = fallback_recipe("dark chocolate");
        assert!(recipe.contains("Fruit & Sweet Medley"));

        let recipe = fallback_recipe("kale");
        assert!(recipe.contains("Roasted Vegetable Medley"));
    }

    #[test]
    fn test_fallback_is_deterministic() {
        assert_eq!(fallback_recipe("chicken"), fallback_recipe("chicken"));
    }
}
