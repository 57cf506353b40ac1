use std::sync::Arc;

use serde::Serialize;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

use crate::actions::{grocery, recipes};
use crate::api::middleware::{with_database, with_json_body};
use crate::api::rejection::handle_rejection;
use crate::error::{ApiError, HttpError};
use crate::form::{Form, FormData};
use crate::repository::Database;
use crate::schema::{Id, IdList, IngredientList, RecipeDraft, TagList};

#[derive(Serialize)]
struct Confirmation {
    message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RemovedChecked {
    message: String,
    removed_count: usize,
}

/// The full application filter: every endpoint under `/api`, with all
/// rejections rendered as `{"error": message}` bodies.
pub fn router(
    db: Arc<Database>,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path("api")
        .and(recipe_routes(db.clone()).or(grocery_routes(db)))
        .recover(handle_rejection)
}

fn recipe_routes(
    db: Arc<Database>,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    let list = warp::path!("recipes")
        .and(warp::get())
        .and(with_database(db.clone()))
        .and_then(list_recipes);

    let fetch = warp::path!("recipes" / Id)
        .and(warp::get())
        .and(with_database(db.clone()))
        .and_then(fetch_recipe);

    let create = warp::path!("recipes")
        .and(warp::post())
        .and(with_json_body())
        .and(with_database(db.clone()))
        .and_then(create_recipe);

    let reorder = warp::path!("recipes" / "reorder")
        .and(warp::put())
        .and(with_json_body())
        .and(with_database(db.clone()))
        .and_then(reorder_recipes);

    let update = warp::path!("recipes" / Id)
        .and(warp::put())
        .and(with_json_body())
        .and(with_database(db.clone()))
        .and_then(update_recipe);

    let remove = warp::path!("recipes" / Id)
        .and(warp::delete())
        .and(with_database(db))
        .and_then(remove_recipe);

    list.or(fetch).or(create).or(reorder).or(update).or(remove)
}

fn grocery_routes(
    db: Arc<Database>,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    let list = warp::path!("grocery-list")
        .and(warp::get())
        .and(with_database(db.clone()))
        .and_then(list_grocery_items);

    let ingest = warp::path!("grocery-list")
        .and(warp::post())
        .and(with_json_body())
        .and(with_database(db.clone()))
        .and_then(ingest_ingredients);

    let reorder = warp::path!("grocery-list" / "reorder")
        .and(warp::put())
        .and(with_json_body())
        .and(with_database(db.clone()))
        .and_then(reorder_grocery_items);

    let toggle = warp::path!("grocery-list" / Id / "toggle")
        .and(warp::put())
        .and(with_database(db.clone()))
        .and_then(toggle_grocery_item);

    let update = warp::path!("grocery-list" / Id)
        .and(warp::put())
        .and(with_json_body())
        .and(with_database(db.clone()))
        .and_then(update_grocery_item);

    let remove_checked = warp::path!("grocery-list" / "checked")
        .and(warp::delete())
        .and(with_database(db.clone()))
        .and_then(remove_checked_items);

    let remove = warp::path!("grocery-list" / Id)
        .and(warp::delete())
        .and(with_database(db.clone()))
        .and_then(remove_grocery_item);

    let clear = warp::path!("grocery-list")
        .and(warp::delete())
        .and(with_database(db))
        .and_then(clear_grocery_list);

    list.or(ingest)
        .or(reorder)
        .or(toggle)
        .or(update)
        .or(remove_checked)
        .or(remove)
        .or(clear)
}

fn reject(error: ApiError) -> Rejection {
    error.into()
}

fn parse_recipe_draft(form: &Form) -> Result<RecipeDraft, ApiError> {
    let title = form.get_str("title").unwrap_or_default();
    let instructions = form.get_str("instructions").unwrap_or_default();

    if title.is_empty() || instructions.is_empty() || !form.has("ingredients") {
        return Err(
            HttpError::InvalidRequest.new("Title, ingredients, and instructions are required")
        );
    }

    let ingredients = form.get_value::<IngredientList>("ingredients")?.0;
    let tags = form
        .get_value_opt::<TagList>("tags")?
        .map(|tags| tags.0)
        .unwrap_or_default();

    Ok(RecipeDraft {
        title,
        ingredients,
        instructions,
        tags,
    })
}

async fn list_recipes(db: Arc<Database>) -> Result<impl Reply, Rejection> {
    let list = recipes::list_recipes(&db).await.map_err(reject)?;

    Ok(warp::reply::json(&list))
}

async fn fetch_recipe(id: Id, db: Arc<Database>) -> Result<impl Reply, Rejection> {
    let recipe = recipes::get_recipe(id, &db).await.map_err(reject)?;

    Ok(warp::reply::json(&recipe))
}

async fn create_recipe(data: FormData, db: Arc<Database>) -> Result<impl Reply, Rejection> {
    let form = Form::from_data(data);
    let draft = parse_recipe_draft(&form).map_err(reject)?;

    let recipe = recipes::create_recipe(draft, &db).await.map_err(reject)?;

    Ok(warp::reply::with_status(
        warp::reply::json(&recipe),
        StatusCode::CREATED,
    ))
}

async fn update_recipe(id: Id, data: FormData, db: Arc<Database>) -> Result<impl Reply, Rejection> {
    let form = Form::from_data(data);
    let draft = parse_recipe_draft(&form).map_err(reject)?;

    let recipe = recipes::update_recipe(id, draft, &db).await.map_err(reject)?;

    Ok(warp::reply::json(&recipe))
}

async fn remove_recipe(id: Id, db: Arc<Database>) -> Result<impl Reply, Rejection> {
    recipes::delete_recipe(id, &db).await.map_err(reject)?;

    Ok(warp::reply::json(&Confirmation {
        message: String::from("Recipe deleted successfully"),
    }))
}

async fn reorder_recipes(data: FormData, db: Arc<Database>) -> Result<impl Reply, Rejection> {
    let form = Form::from_data(data);
    if !form.has("recipeIds") {
        return Err(reject(
            HttpError::InvalidRequest.new("recipeIds array is required"),
        ));
    }
    let ids = form.get_value::<IdList>("recipeIds").map_err(reject)?.0;

    let list = recipes::reorder_recipes(ids, &db).await.map_err(reject)?;

    Ok(warp::reply::json(&list))
}

async fn list_grocery_items(db: Arc<Database>) -> Result<impl Reply, Rejection> {
    let items = grocery::list_items(&db).await.map_err(reject)?;

    Ok(warp::reply::json(&items))
}

async fn ingest_ingredients(data: FormData, db: Arc<Database>) -> Result<impl Reply, Rejection> {
    let form = Form::from_data(data);
    if !form.has("ingredients") {
        return Err(reject(
            HttpError::InvalidRequest.new("Ingredients array is required"),
        ));
    }
    let ingredients = form
        .get_value::<IngredientList>("ingredients")
        .map_err(reject)?
        .0;

    let items = grocery::ingest_ingredients(ingredients, &db)
        .await
        .map_err(reject)?;

    Ok(warp::reply::json(&items))
}

async fn update_grocery_item(
    id: Id,
    data: FormData,
    db: Arc<Database>,
) -> Result<impl Reply, Rejection> {
    let form = Form::from_data(data);
    let checked = form
        .get_bool_opt("checked")
        .map_err(|e| reject(e.into()))?;

    let item = grocery::set_item_checked(id, checked, &db)
        .await
        .map_err(reject)?;

    Ok(warp::reply::json(&item))
}

async fn toggle_grocery_item(id: Id, db: Arc<Database>) -> Result<impl Reply, Rejection> {
    let item = grocery::set_item_checked(id, None, &db)
        .await
        .map_err(reject)?;

    Ok(warp::reply::json(&item))
}

async fn remove_grocery_item(id: Id, db: Arc<Database>) -> Result<impl Reply, Rejection> {
    grocery::remove_item(id, &db).await.map_err(reject)?;

    Ok(warp::reply::json(&Confirmation {
        message: String::from("Grocery item deleted successfully"),
    }))
}

async fn remove_checked_items(db: Arc<Database>) -> Result<impl Reply, Rejection> {
    let removed = grocery::remove_checked_items(&db).await.map_err(reject)?;

    Ok(warp::reply::json(&RemovedChecked {
        message: String::from("Checked items removed successfully"),
        removed_count: removed,
    }))
}

async fn clear_grocery_list(db: Arc<Database>) -> Result<impl Reply, Rejection> {
    grocery::clear_items(&db).await.map_err(reject)?;

    Ok(warp::reply::json(&Confirmation {
        message: String::from("Grocery list cleared successfully"),
    }))
}

async fn reorder_grocery_items(data: FormData, db: Arc<Database>) -> Result<impl Reply, Rejection> {
    let form = Form::from_data(data);
    if !form.has("itemIds") {
        return Err(reject(
            HttpError::InvalidRequest.new("itemIds array is required"),
        ));
    }
    let ids = form.get_value::<IdList>("itemIds").map_err(reject)?.0;

    let items = grocery::reorder_items(ids, &db).await.map_err(reject)?;

    Ok(warp::reply::json(&items))
}
