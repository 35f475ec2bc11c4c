use crate::db::service::DbService;
use crate::types::error::AppError;
use chrono::Utc;
use entity::category::Model as CategoryModel;
use entity::category_recipe::{
    ActiveModel as CategoryRecipeActive, Entity as CategoryRecipe, Model as CategoryRecipeModel,
};
use entity::ingredient::Model as IngredientModel;
use entity::ingredient_recipe::{
    ActiveModel as IngredientRecipeActive, Entity as IngredientRecipe,
    Model as IngredientRecipeModel,
};
use entity::recipe::{ActiveModel as RecipeActive, Entity as Recipe, Model as RecipeModel};
use entity::user::Model as UserModel;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, TransactionTrait};

/// The one ownership predicate. A recipe with no owner belongs to nobody.
pub fn owns(user: &UserModel, recipe: &RecipeModel) -> bool {
    recipe.user_id == Some(user.id)
}

/// Everything the detail view needs in one load: the recipe, its owner, and
/// its category/ingredient links with the linked rows.
pub struct RecipeDetails {
    pub recipe: RecipeModel,
    pub owner: Option<UserModel>,
    pub categories: Vec<(CategoryRecipeModel, Option<CategoryModel>)>,
    pub ingredients: Vec<(IngredientRecipeModel, Option<IngredientModel>)>,
}

impl DbService {
    pub async fn list_recipes(&self) -> Result<Vec<RecipeModel>, AppError> {
        Ok(Recipe::find().all(&self.db).await?)
    }

    /// Case-insensitive substring match on the description. An empty query
    /// matches everything.
    pub async fn search_recipes(&self, query: &str) -> Result<Vec<RecipeModel>, AppError> {
        let pattern = format!("%{}%", query.to_lowercase());
        Ok(Recipe::find()
            .filter(
                Expr::expr(Func::lower(Expr::col((
                    Recipe,
                    entity::recipe::Column::Description,
                ))))
                .like(pattern.as_str()),
            )
            .all(&self.db)
            .await?)
    }

    pub async fn get_recipe(&self, id: i32) -> Result<RecipeModel, AppError> {
        Recipe::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// The single authorization gate used by every mutation: the recipe must
    /// exist and belong to the caller.
    pub async fn get_owned_recipe(
        &self,
        user: &UserModel,
        id: i32,
    ) -> Result<RecipeModel, AppError> {
        let recipe = self.get_recipe(id).await?;
        if !owns(user, &recipe) {
            return Err(AppError::Forbidden);
        }
        Ok(recipe)
    }

    pub async fn get_recipe_details(&self, id: i32) -> Result<RecipeDetails, AppError> {
        let (recipe, owner) = Recipe::find_by_id(id)
            .find_also_related(entity::user::Entity)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let categories = CategoryRecipe::find()
            .filter(entity::category_recipe::Column::RecipeId.eq(id))
            .find_also_related(entity::category::Entity)
            .all(&self.db)
            .await?;

        let ingredients = IngredientRecipe::find()
            .filter(entity::ingredient_recipe::Column::RecipeId.eq(id))
            .find_also_related(entity::ingredient::Entity)
            .all(&self.db)
            .await?;

        Ok(RecipeDetails { recipe, owner, categories, ingredients })
    }

    /// Insert the recipe and, for a non-sentinel category id, its first
    /// category link in one transaction.
    pub async fn create_recipe(
        &self,
        owner: &UserModel,
        description: String,
        category_id: i32,
    ) -> Result<RecipeModel, AppError> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let recipe = RecipeActive {
            description: Set(description),
            user_id: Set(Some(owner.id)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        if category_id != 0 {
            CategoryRecipeActive {
                recipe_id: Set(recipe.id),
                category_id: Set(category_id),
                created_at: Set(now),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;
        Ok(recipe)
    }

    /// Overwrite the recipe fields; the owner is never touched.
    pub async fn update_recipe(
        &self,
        user: &UserModel,
        id: i32,
        description: String,
        category_id: i32,
    ) -> Result<RecipeModel, AppError> {
        let recipe = self.get_owned_recipe(user, id).await?;
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let mut am: RecipeActive = recipe.into();
        am.description = Set(description);
        am.updated_at = Set(now);
        let updated = am.update(&txn).await?;

        if category_id != 0 {
            CategoryRecipeActive {
                recipe_id: Set(updated.id),
                category_id: Set(category_id),
                created_at: Set(now),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;
        Ok(updated)
    }

    /// Join rows go with the recipe via the schema's cascading foreign keys.
    pub async fn delete_recipe(&self, user: &UserModel, id: i32) -> Result<(), AppError> {
        let recipe = self.get_owned_recipe(user, id).await?;
        let am: RecipeActive = recipe.into();
        am.delete(&self.db).await?;
        Ok(())
    }

    /// Sentinel category id 0 means "nothing selected" and is a no-op.
    pub async fn add_category_link(
        &self,
        user: &UserModel,
        recipe_id: i32,
        category_id: i32,
    ) -> Result<Option<CategoryRecipeModel>, AppError> {
        let recipe = self.get_owned_recipe(user, recipe_id).await?;
        if category_id == 0 {
            return Ok(None);
        }
        let link = CategoryRecipeActive {
            recipe_id: Set(recipe.id),
            category_id: Set(category_id),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        Ok(Some(link))
    }

    /// Removes exactly the targeted link; siblings for the same recipe stay.
    pub async fn delete_category_link(
        &self,
        user: &UserModel,
        join_id: i32,
    ) -> Result<(), AppError> {
        let link = CategoryRecipe::find_by_id(join_id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;
        self.get_owned_recipe(user, link.recipe_id).await?;
        let am: CategoryRecipeActive = link.into();
        am.delete(&self.db).await?;
        Ok(())
    }

    pub async fn add_ingredient_link(
        &self,
        user: &UserModel,
        recipe_id: i32,
        ingredient_id: i32,
    ) -> Result<Option<IngredientRecipeModel>, AppError> {
        let recipe = self.get_owned_recipe(user, recipe_id).await?;
        if ingredient_id == 0 {
            return Ok(None);
        }
        let link = IngredientRecipeActive {
            recipe_id: Set(recipe.id),
            ingredient_id: Set(ingredient_id),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        Ok(Some(link))
    }

    pub async fn delete_ingredient_link(
        &self,
        user: &UserModel,
        join_id: i32,
    ) -> Result<(), AppError> {
        let link = IngredientRecipe::find_by_id(join_id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;
        self.get_owned_recipe(user, link.recipe_id).await?;
        let am: IngredientRecipeActive = link.into();
        am.delete(&self.db).await?;
        Ok(())
    }
}
