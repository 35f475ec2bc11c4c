use sea_orm_migration::prelude::*;

use crate::m20250715_000002_create_recipes_table::Recipes;
use crate::m20250715_000004_create_ingredients_table::Ingredients;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum IngredientRecipe {
    Table,
    Id,
    RecipeId,
    IngredientId,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(IngredientRecipe::Table)
                .col(
                    ColumnDef::new(IngredientRecipe::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(ColumnDef::new(IngredientRecipe::RecipeId).integer().not_null())
                .col(ColumnDef::new(IngredientRecipe::IngredientId).integer().not_null())
                .col(
                    ColumnDef::new(IngredientRecipe::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_ingredient_recipe_recipe")
                        .from(IngredientRecipe::Table, IngredientRecipe::RecipeId)
                        .to(Recipes::Table, Recipes::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_ingredient_recipe_ingredient")
                        .from(IngredientRecipe::Table, IngredientRecipe::IngredientId)
                        .to(Ingredients::Table, Ingredients::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_ingredient_recipe_recipe")
                .table(IngredientRecipe::Table)
                .col(IngredientRecipe::RecipeId)
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_ingredient_recipe_ingredient")
                .table(IngredientRecipe::Table)
                .col(IngredientRecipe::IngredientId)
                .to_owned(),
        )
        .await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(
            Table::drop()
                .table(IngredientRecipe::Table)
                .if_exists()
                .to_owned(),
        )
        .await?;
        Ok(())
    }
}
