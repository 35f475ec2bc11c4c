pub use sea_orm_migration::prelude::*;

mod m20250715_000001_create_users_table;
mod m20250715_000002_create_recipes_table;
mod m20250715_000003_create_categories_table;
mod m20250715_000004_create_ingredients_table;
mod m20250715_000005_create_category_recipe_table;
mod m20250715_000006_create_ingredient_recipe_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250715_000001_create_users_table::Migration),
            Box::new(m20250715_000002_create_recipes_table::Migration),
            Box::new(m20250715_000003_create_categories_table::Migration),
            Box::new(m20250715_000004_create_ingredients_table::Migration),
            Box::new(m20250715_000005_create_category_recipe_table::Migration),
            Box::new(m20250715_000006_create_ingredient_recipe_table::Migration),
        ]
    }
}
