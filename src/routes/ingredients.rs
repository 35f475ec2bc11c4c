use crate::db::service::DbService;
use crate::types::ingredient::RIngredientCreate;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{get, post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

#[get("")]
pub async fn list(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
) -> ApiResult<Vec<entity::ingredient::Model>> {
    Ok(ApiResponse::Ok(db.list_ingredients().await?))
}

#[post("")]
pub async fn create(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<DbService>>,
    body: web::Json<RIngredientCreate>,
) -> ApiResult<entity::ingredient::Model> {
    db.authenticate(auth.token()).await?;
    let ingredient = db.create_ingredient(body.name.clone()).await?;
    Ok(ApiResponse::Created(ingredient))
}
