use crate::db::service::DbService;
use crate::types::error::AppError;
use entity::ingredient::{
    ActiveModel as IngredientActive, Entity as Ingredient, Model as IngredientModel,
};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

impl DbService {
    pub async fn list_ingredients(&self) -> Result<Vec<IngredientModel>, AppError> {
        Ok(Ingredient::find().all(&self.db).await?)
    }

    pub async fn create_ingredient(&self, name: String) -> Result<IngredientModel, AppError> {
        Ok(IngredientActive {
            name: Set(name),
            ..Default::default()
        }
        .insert(&self.db)
        .await?)
    }
}
