use recipe_box::db::service::DbService;
use std::path::PathBuf;
use std::sync::Arc;
use uuid::Uuid;

pub mod client;

/// A fresh migrated database per test. SQLite keeps the suite
/// self-contained; each context gets its own file so tests can run in
/// parallel without sharing state.
pub struct TestContext {
    pub db: Arc<DbService>,
    db_path: PathBuf,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let db_path = std::env::temp_dir().join(format!("recipe-box-test-{}.sqlite", Uuid::new_v4()));
        let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

        let db = Arc::new(
            DbService::new(&db_url)
                .await
                .expect("Failed to initialize database service"),
        );

        TestContext { db, db_path }
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_path);
    }
}

// Test data helpers
pub mod test_data {
    use recipe_box::types::recipe::RRecipeCreate;
    use recipe_box::types::user::RUserCreate;

    #[allow(dead_code)]
    pub fn sample_user() -> RUserCreate {
        RUserCreate {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
        }
    }

    #[allow(dead_code)]
    pub fn sample_recipe(description: &str, category_id: i32) -> RRecipeCreate {
        RRecipeCreate {
            description: description.to_string(),
            category_id,
        }
    }
}
