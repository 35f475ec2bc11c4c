use crate::db::service::DbService;
use crate::types::category::RCategoryCreate;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{get, post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

#[get("")]
pub async fn list(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
) -> ApiResult<Vec<entity::category::Model>> {
    Ok(ApiResponse::Ok(db.list_categories().await?))
}

#[post("")]
pub async fn create(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<DbService>>,
    body: web::Json<RCategoryCreate>,
) -> ApiResult<entity::category::Model> {
    db.authenticate(auth.token()).await?;
    let category = db.create_category(body.name.clone()).await?;
    Ok(ApiResponse::Created(category))
}
