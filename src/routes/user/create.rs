use crate::db::service::DbService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RUserCreate, UserCreateRes};
use crate::utils::token::{construct_token, encrypt, new_token};
use actix_web::{post, web};
use std::sync::Arc;

#[post("")]
pub async fn create(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    body: web::Json<RUserCreate>,
) -> ApiResult<UserCreateRes> {
    let token = new_token();
    let auth_hash = encrypt(&token).map_err(|e| AppError::Internal(e.to_string()))?;

    let user_id = db
        .create_user(DBUserCreate {
            name: body.name.clone(),
            email: body.email.clone(),
            auth_hash,
        })
        .await?;

    // the raw token is only ever handed out here, hashed at rest
    let access_token = construct_token(&user_id, &token);

    Ok(ApiResponse::Created(UserCreateRes {
        id: user_id.to_string(),
        token: access_token,
    }))
}
