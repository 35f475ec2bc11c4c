use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::category_recipe::Entity")]
    CategoryRecipe,
}

impl Related<super::category_recipe::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CategoryRecipe.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
