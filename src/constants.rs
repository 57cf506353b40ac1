pub const DEFAULT_PORT: u16 = 3000;

pub const DATA_DIR: &str = "data";
pub const RECIPES_FILE: &str = "recipes.json";
pub const GROCERY_LIST_FILE: &str = "grocery-list.json";
