use crate::schema::{GroceryItem, Recipe};

/// Free-text and tag filtering over the full in-memory recipe list. A recipe
/// matches when the tag filter is empty or its tags contain the tag exactly,
/// and the query is empty or matches (case-insensitive substring) the title,
/// any ingredient's name/amount/unit, the instructions, or any tag.
pub fn filter_recipes<'a>(recipes: &'a [Recipe], query: &str, tag: Option<&str>) -> Vec<&'a Recipe> {
    let query = query.trim().to_lowercase();

    recipes
        .iter()
        .filter(|recipe| {
            if let Some(tag) = tag {
                if !recipe.tags.iter().any(|t| t == tag) {
                    return false;
                }
            }

            if query.is_empty() {
                return true;
            }

            recipe.title.to_lowercase().contains(&query)
                || recipe.ingredients.iter().any(|ingredient| {
                    ingredient.name.to_lowercase().contains(&query)
                        || ingredient.amount.to_lowercase().contains(&query)
                        || ingredient.unit.to_lowercase().contains(&query)
                })
                || recipe.instructions.to_lowercase().contains(&query)
                || recipe.tags.iter().any(|t| t.to_lowercase().contains(&query))
        })
        .collect()
}

/// Render order for the grocery list, computed fresh per render and never
/// persisted. Without a search term this is a stable partition: unchecked
/// items first, checked items last, each group keeping its manual order so a
/// drag-reorder survives checking items off. With a search term (substring
/// match on the item name) the same partition applies, but ties inside each
/// group break by ascending id, since manual order carries no meaning over a
/// filtered subset.
pub fn display_order(items: &[GroceryItem], search: Option<&str>) -> Vec<GroceryItem> {
    match search.map(str::trim).filter(|term| !term.is_empty()) {
        Some(term) => {
            let term = term.to_lowercase();
            let mut matched: Vec<GroceryItem> = items
                .iter()
                .filter(|item| item.name.to_lowercase().contains(&term))
                .cloned()
                .collect();
            matched.sort_by_key(|item| (item.checked, item.id));

            matched
        }
        None => {
            let mut ordered: Vec<GroceryItem> = Vec::with_capacity(items.len());
            ordered.extend(items.iter().filter(|item| !item.checked).cloned());
            ordered.extend(items.iter().filter(|item| item.checked).cloned());

            ordered
        }
    }
}
