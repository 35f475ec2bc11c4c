use sea_orm_migration::prelude::*;

use crate::m20250715_000002_create_recipes_table::Recipes;
use crate::m20250715_000003_create_categories_table::Categories;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum CategoryRecipe {
    Table,
    Id,
    RecipeId,
    CategoryId,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // Surrogate id so a single link can be deleted without touching its siblings
        m.create_table(
            Table::create()
                .table(CategoryRecipe::Table)
                .col(
                    ColumnDef::new(CategoryRecipe::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(ColumnDef::new(CategoryRecipe::RecipeId).integer().not_null())
                .col(ColumnDef::new(CategoryRecipe::CategoryId).integer().not_null())
                .col(
                    ColumnDef::new(CategoryRecipe::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_category_recipe_recipe")
                        .from(CategoryRecipe::Table, CategoryRecipe::RecipeId)
                        .to(Recipes::Table, Recipes::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_category_recipe_category")
                        .from(CategoryRecipe::Table, CategoryRecipe::CategoryId)
                        .to(Categories::Table, Categories::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_category_recipe_recipe")
                .table(CategoryRecipe::Table)
                .col(CategoryRecipe::RecipeId)
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_category_recipe_category")
                .table(CategoryRecipe::Table)
                .col(CategoryRecipe::CategoryId)
                .to_owned(),
        )
        .await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(
            Table::drop()
                .table(CategoryRecipe::Table)
                .if_exists()
                .to_owned(),
        )
        .await?;
        Ok(())
    }
}
