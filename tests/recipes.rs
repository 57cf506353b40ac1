use recip_ez::actions::recipes;
use recip_ez::schema::RecipeDraft;
use recip_ez::{Database, Ingredient};
use tempfile::TempDir;

fn database() -> (TempDir, Database) {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::open(dir.path()).unwrap();
    (dir, db)
}

fn draft(title: &str) -> RecipeDraft {
    RecipeDraft {
        title: title.to_string(),
        ingredients: vec![Ingredient {
            name: String::from("Flour"),
            amount: String::from("2"),
            unit: String::from("cups"),
        }],
        instructions: String::from("Mix and bake."),
        tags: vec![String::from("baking")],
    }
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let (_dir, db) = database();

    let created = recipes::create_recipe(draft("Bread"), &db).await.unwrap();
    assert_eq!(created.id, 1);
    assert!(created.updated_at.is_none());

    let fetched = recipes::get_recipe(created.id, &db).await.unwrap();
    assert_eq!(fetched.title, "Bread");
    assert_eq!(fetched.ingredients, created.ingredients);
    assert_eq!(fetched.instructions, "Mix and bake.");
    assert_eq!(fetched.tags, vec!["baking"]);
    assert_eq!(fetched.created_at, created.created_at);
}

#[tokio::test]
async fn ids_follow_the_max_plus_one_scheme() {
    let (_dir, db) = database();

    recipes::create_recipe(draft("One"), &db).await.unwrap();
    recipes::create_recipe(draft("Two"), &db).await.unwrap();
    let third = recipes::create_recipe(draft("Three"), &db).await.unwrap();
    assert_eq!(third.id, 3);

    recipes::delete_recipe(3, &db).await.unwrap();
    let fourth = recipes::create_recipe(draft("Four"), &db).await.unwrap();
    assert_eq!(fourth.id, 3);

    recipes::delete_recipe(1, &db).await.unwrap();
    recipes::delete_recipe(2, &db).await.unwrap();
    recipes::delete_recipe(3, &db).await.unwrap();
    let fresh = recipes::create_recipe(draft("Fresh"), &db).await.unwrap();
    assert_eq!(fresh.id, 1);
}

#[tokio::test]
async fn update_replaces_fields_and_preserves_identity() {
    let (_dir, db) = database();

    let created = recipes::create_recipe(draft("Bread"), &db).await.unwrap();

    let updated = recipes::update_recipe(
        created.id,
        RecipeDraft {
            title: String::from("Sourdough"),
            ingredients: vec![Ingredient {
                name: String::from("Starter"),
                amount: String::new(),
                unit: String::new(),
            }],
            instructions: String::from("Ferment, then bake."),
            tags: vec![],
        },
        &db,
    )
    .await
    .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at.is_some());
    assert_eq!(updated.title, "Sourdough");
    assert_eq!(updated.ingredients.len(), 1);
    assert_eq!(updated.ingredients[0].name, "Starter");
    assert!(updated.tags.is_empty());

    let fetched = recipes::get_recipe(created.id, &db).await.unwrap();
    assert_eq!(fetched.title, "Sourdough");
    assert!(fetched.updated_at.is_some());
}

#[tokio::test]
async fn missing_recipes_are_not_found() {
    let (_dir, db) = database();

    assert_eq!(recipes::get_recipe(1, &db).await.unwrap_err().code, 404);
    assert_eq!(recipes::delete_recipe(1, &db).await.unwrap_err().code, 404);
    assert_eq!(
        recipes::update_recipe(1, draft("Ghost"), &db)
            .await
            .unwrap_err()
            .code,
        404
    );
}

#[tokio::test]
async fn delete_removes_only_the_target() {
    let (_dir, db) = database();

    recipes::create_recipe(draft("One"), &db).await.unwrap();
    recipes::create_recipe(draft("Two"), &db).await.unwrap();

    recipes::delete_recipe(1, &db).await.unwrap();

    let list = recipes::list_recipes(&db).await.unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id, 2);
}

#[tokio::test]
async fn reorder_persists_a_full_permutation_and_rejects_the_rest() {
    let (_dir, db) = database();

    recipes::create_recipe(draft("One"), &db).await.unwrap();
    recipes::create_recipe(draft("Two"), &db).await.unwrap();
    recipes::create_recipe(draft("Three"), &db).await.unwrap();

    let list = recipes::reorder_recipes(vec![2, 3, 1], &db).await.unwrap();
    let ids: Vec<i32> = list.iter().map(|recipe| recipe.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);

    let list = recipes::list_recipes(&db).await.unwrap();
    let ids: Vec<i32> = list.iter().map(|recipe| recipe.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);

    for ids in [vec![2, 3], vec![2, 3, 3], vec![2, 3, 4]] {
        let result = recipes::reorder_recipes(ids, &db).await;
        assert_eq!(result.unwrap_err().code, 400);
    }
}
