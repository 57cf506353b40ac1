use chrono::Utc;

use crate::error::{ApiError, HttpError};
use crate::repository::Database;
use crate::schema::{Id, Recipe, RecipeDraft};

use super::{next_id, reorder_by_ids};

pub async fn list_recipes(db: &Database) -> Result<Vec<Recipe>, ApiError> {
    let collection = db.recipes.open().await;
    let recipes = collection.load().map_err(|e| e.into())?;

    Ok(recipes)
}

pub async fn get_recipe(id: Id, db: &Database) -> Result<Recipe, ApiError> {
    let collection = db.recipes.open().await;
    let recipes = collection.load().map_err(|e| e.into())?;

    recipes
        .into_iter()
        .find(|recipe| recipe.id == id)
        .ok_or_else(|| HttpError::NotFound.new("Recipe not found"))
}

pub async fn create_recipe(draft: RecipeDraft, db: &Database) -> Result<Recipe, ApiError> {
    let collection = db.recipes.open().await;
    let mut recipes = collection.load().map_err(|e| e.into())?;

    let recipe = Recipe {
        id: next_id(recipes.iter().map(|recipe| recipe.id)),
        title: draft.title,
        ingredients: draft.ingredients,
        instructions: draft.instructions,
        tags: draft.tags,
        created_at: Utc::now(),
        updated_at: None,
    };

    recipes.push(recipe.clone());
    collection.store(&recipes).map_err(|e| e.into())?;

    log::debug!("created recipe {} ({})", recipe.id, recipe.title);

    Ok(recipe)
}

/// Full replace of the editable fields; `id` and `created_at` are preserved
/// and `updated_at` is stamped.
pub async fn update_recipe(id: Id, draft: RecipeDraft, db: &Database) -> Result<Recipe, ApiError> {
    let collection = db.recipes.open().await;
    let mut recipes = collection.load().map_err(|e| e.into())?;

    let recipe = recipes
        .iter_mut()
        .find(|recipe| recipe.id == id)
        .ok_or_else(|| HttpError::NotFound.new("Recipe not found"))?;

    recipe.title = draft.title;
    recipe.ingredients = draft.ingredients;
    recipe.instructions = draft.instructions;
    recipe.tags = draft.tags;
    recipe.updated_at = Some(Utc::now());

    let updated = recipe.clone();
    collection.store(&recipes).map_err(|e| e.into())?;

    Ok(updated)
}

pub async fn delete_recipe(id: Id, db: &Database) -> Result<(), ApiError> {
    let collection = db.recipes.open().await;
    let mut recipes = collection.load().map_err(|e| e.into())?;

    let count = recipes.len();
    recipes.retain(|recipe| recipe.id != id);
    if recipes.len() == count {
        return Err(HttpError::NotFound.new("Recipe not found"));
    }

    collection.store(&recipes).map_err(|e| e.into())?;

    Ok(())
}

pub async fn reorder_recipes(ids: Vec<Id>, db: &Database) -> Result<Vec<Recipe>, ApiError> {
    let collection = db.recipes.open().await;
    let recipes = collection.load().map_err(|e| e.into())?;

    let reordered = reorder_by_ids(recipes, &ids, "recipeIds", |recipe| recipe.id)?;
    collection.store(&reordered).map_err(|e| e.into())?;

    Ok(reordered)
}
