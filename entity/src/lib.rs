pub mod category;
pub mod category_recipe;
pub mod ingredient;
pub mod ingredient_recipe;
pub mod recipe;
pub mod user;

/*
 Recipes are owned by the user that created them; ownership never moves.
 Categories and ingredients are shared vocabulary, linked to recipes through
 the category_recipe / ingredient_recipe join rows so a single link can be
 removed without touching either side.
 */
