use crate::db::service::DbService;
use crate::types::error::AppError;
use entity::category::{ActiveModel as CategoryActive, Entity as Category, Model as CategoryModel};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

impl DbService {
    pub async fn list_categories(&self) -> Result<Vec<CategoryModel>, AppError> {
        Ok(Category::find().all(&self.db).await?)
    }

    pub async fn create_category(&self, name: String) -> Result<CategoryModel, AppError> {
        Ok(CategoryActive {
            name: Set(name),
            ..Default::default()
        }
        .insert(&self.db)
        .await?)
    }
}
