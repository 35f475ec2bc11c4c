use actix_web::{web, App};
use recipe_box::{
    db::service::DbService,
    types::{error::AppError, user::DBUserCreate},
    utils::token::{construct_token, encrypt, new_token},
};
use std::sync::Arc;
use uuid::Uuid;

pub struct TestClient {
    pub db: Arc<DbService>,
}

impl TestClient {
    pub fn new(db: Arc<DbService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(recipe_box::routes::configure_routes)
    }

    /// Seed a user directly and return its id plus a usable access token.
    #[allow(dead_code)]
    pub async fn create_test_user(&self, email: Option<String>) -> Result<(Uuid, String), AppError> {
        let user_token = new_token();
        let auth_hash = encrypt(&user_token).expect("Failed to encrypt token");
        let random_id = Uuid::new_v4();

        let email = email.unwrap_or_else(|| format!("user-{}@test.com", random_id));

        let user_id = self
            .db
            .create_user(DBUserCreate {
                name: "Test User".to_string(),
                email,
                auth_hash,
            })
            .await?;

        let access_token = construct_token(&user_id, &user_token);

        Ok((user_id, access_token))
    }

    #[allow(dead_code)]
    pub async fn create_test_category(&self, name: &str) -> entity::category::Model {
        self.db
            .create_category(name.to_string())
            .await
            .expect("Failed to create category")
    }

    #[allow(dead_code)]
    pub async fn create_test_ingredient(&self, name: &str) -> entity::ingredient::Model {
        self.db
            .create_ingredient(name.to_string())
            .await
            .expect("Failed to create ingredient")
    }

    /// Seed a recipe owned by the given user, bypassing the HTTP surface.
    #[allow(dead_code)]
    pub async fn create_test_recipe(
        &self,
        owner_id: Uuid,
        description: &str,
        category_id: i32,
    ) -> entity::recipe::Model {
        let owner = self
            .db
            .get_user_by_id(&owner_id)
            .await
            .expect("Owner does not exist");
        self.db
            .create_recipe(&owner, description.to_string(), category_id)
            .await
            .expect("Failed to create recipe")
    }
}
