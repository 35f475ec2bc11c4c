use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Category/ingredient id 0 is the "none selected" sentinel carried over from
// the submission forms: no link row is written for it.

#[derive(Serialize, Deserialize, Debug)]
pub struct RRecipeCreate {
    pub description: String,
    #[serde(default)]
    pub category_id: i32,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RRecipeUpdate {
    pub description: String,
    #[serde(default)]
    pub category_id: i32,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RAddCategory {
    pub category_id: i32,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RAddIngredient {
    pub ingredient_id: i32,
}

#[derive(Deserialize, Debug)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct OwnerRes {
    pub id: Uuid,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CategoryLinkRes {
    pub link_id: i32,
    pub category_id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct IngredientLinkRes {
    pub link_id: i32,
    pub ingredient_id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RecipeDetailsRes {
    pub id: i32,
    pub description: String,
    pub owner: Option<OwnerRes>,
    pub categories: Vec<CategoryLinkRes>,
    pub ingredients: Vec<IngredientLinkRes>,
    pub is_owner: bool,
}
