use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "recipes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub user_id: Option<Uuid>, // FK -> users.id (nullable; legacy rows have no owner)
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to   = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    User,

    #[sea_orm(has_many = "super::category_recipe::Entity")]
    CategoryRecipe,

    #[sea_orm(has_many = "super::ingredient_recipe::Entity")]
    IngredientRecipe,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::category_recipe::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CategoryRecipe.def()
    }
}

impl Related<super::ingredient_recipe::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IngredientRecipe.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
