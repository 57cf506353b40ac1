use chrono::Utc;

use crate::error::{ApiError, HttpError};
use crate::repository::Database;
use crate::schema::{GroceryItem, Id, Ingredient};

use super::{next_id, reorder_by_ids};

pub async fn list_items(db: &Database) -> Result<Vec<GroceryItem>, ApiError> {
    let collection = db.grocery.open().await;
    let items = collection.load().map_err(|e| e.into())?;

    Ok(items)
}

/// Merges a batch of ingredients into the grocery list, in input order.
/// Matching is by case-insensitive name; the first match wins. An incoming
/// amount/unit pair replaces the existing one only when both are non-empty,
/// so a bare name-only re-add never blanks out quantity data. The collection
/// is persisted once, after the whole batch.
pub async fn ingest_ingredients(
    ingredients: Vec<Ingredient>,
    db: &Database,
) -> Result<Vec<GroceryItem>, ApiError> {
    let collection = db.grocery.open().await;
    let mut items = collection.load().map_err(|e| e.into())?;

    for ingredient in ingredients {
        let key = ingredient.name.to_lowercase();

        match items.iter_mut().find(|item| item.name.to_lowercase() == key) {
            Some(existing) => {
                if !ingredient.amount.is_empty() && !ingredient.unit.is_empty() {
                    existing.amount = ingredient.amount;
                    existing.unit = ingredient.unit;
                }
            }
            None => {
                let id = next_id(items.iter().map(|item| item.id));
                items.push(GroceryItem {
                    id,
                    name: ingredient.name,
                    amount: ingredient.amount,
                    unit: ingredient.unit,
                    checked: false,
                    added_at: Utc::now(),
                });
            }
        }
    }

    collection.store(&items).map_err(|e| e.into())?;

    Ok(items)
}

/// Sets `checked` to the supplied value, or flips it when none is given.
pub async fn set_item_checked(
    id: Id,
    checked: Option<bool>,
    db: &Database,
) -> Result<GroceryItem, ApiError> {
    let collection = db.grocery.open().await;
    let mut items = collection.load().map_err(|e| e.into())?;

    let item = items
        .iter_mut()
        .find(|item| item.id == id)
        .ok_or_else(|| HttpError::NotFound.new("Grocery item not found"))?;

    item.checked = checked.unwrap_or(!item.checked);

    let updated = item.clone();
    collection.store(&items).map_err(|e| e.into())?;

    Ok(updated)
}

pub async fn remove_item(id: Id, db: &Database) -> Result<(), ApiError> {
    let collection = db.grocery.open().await;
    let mut items = collection.load().map_err(|e| e.into())?;

    let count = items.len();
    items.retain(|item| item.id != id);
    if items.len() == count {
        return Err(HttpError::NotFound.new("Grocery item not found"));
    }

    collection.store(&items).map_err(|e| e.into())?;

    Ok(())
}

/// Removes every checked item in one pass; returns the number removed.
/// An empty list removes zero and succeeds.
pub async fn remove_checked_items(db: &Database) -> Result<usize, ApiError> {
    let collection = db.grocery.open().await;
    let mut items = collection.load().map_err(|e| e.into())?;

    let count = items.len();
    items.retain(|item| !item.checked);
    let removed = count - items.len();

    collection.store(&items).map_err(|e| e.into())?;

    Ok(removed)
}

pub async fn clear_items(db: &Database) -> Result<(), ApiError> {
    let collection = db.grocery.open().await;
    collection.store(&[]).map_err(|e| e.into())?;

    Ok(())
}

pub async fn reorder_items(ids: Vec<Id>, db: &Database) -> Result<Vec<GroceryItem>, ApiError> {
    let collection = db.grocery.open().await;
    let items = collection.load().map_err(|e| e.into())?;

    let reordered = reorder_by_ids(items, &ids, "itemIds", |item| item.id)?;
    collection.store(&reordered).map_err(|e| e.into())?;

    Ok(reordered)
}
