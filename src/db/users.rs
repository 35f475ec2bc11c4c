use crate::db::service::DbService;
use crate::types::{error::AppError, user::DBUserCreate};
use crate::utils::token::{self, extract_token_parts, verify};
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};
use uuid::Uuid;

impl DbService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn get_user_by_id(&self, id: &Uuid) -> Result<UserModel, AppError> {
        User::find_by_id(*id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Signup: create user.
    pub async fn create_user(&self, payload: DBUserCreate) -> Result<Uuid, AppError> {
        if self.user_exists_by_email(&payload.email).await? {
            return Err(AppError::AlreadyExists);
        }
        let uid = token::new_id();
        let now = Utc::now();

        User::insert(UserActive {
            id: Set(uid),
            name: Set(payload.name),
            email: Set(payload.email),
            auth_hash: Set(payload.auth_hash),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(&self.db)
        .await?;

        Ok(uid)
    }

    /// Resolve the bearer token into its user, verifying the raw token
    /// against the stored argon2 hash.
    pub async fn authenticate(&self, access_token: &str) -> Result<UserModel, AppError> {
        let (user_id, raw_token) =
            extract_token_parts(access_token).ok_or(AppError::Unauthorized)?;

        let user = User::find_by_id(user_id)
            .one(&self.db)
            .await?
            .ok_or(AppError::Unauthorized)?;

        if !verify(&raw_token, &user.auth_hash).unwrap_or(false) {
            return Err(AppError::Unauthorized);
        }

        Ok(user)
    }

    /// Optional-auth variant for public routes that only need to know who is
    /// looking, if anyone. A missing or invalid token is an anonymous viewer.
    pub async fn principal_from(&self, bearer: Option<&str>) -> Option<UserModel> {
        match bearer {
            Some(token) => self.authenticate(token).await.ok(),
            None => None,
        }
    }
}
