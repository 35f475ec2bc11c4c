use crate::db::service::DbService;
use crate::types::recipe::RAddCategory;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{delete, post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

#[post("/{id}/categories")]
pub async fn add_link(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<DbService>>,
    path: web::Path<i32>,
    body: web::Json<RAddCategory>,
) -> ApiResult<entity::category_recipe::Model> {
    let principal = db.authenticate(auth.token()).await?;

    let link = db
        .add_category_link(&principal, path.into_inner(), body.category_id)
        .await?;

    Ok(match link {
        Some(link) => ApiResponse::Created(link),
        // sentinel id, nothing to link
        None => ApiResponse::NoContent,
    })
}

#[delete("/categories/{join_id}")]
pub async fn delete_link(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<DbService>>,
    path: web::Path<i32>,
) -> ApiResult<()> {
    let principal = db.authenticate(auth.token()).await?;
    db.delete_category_link(&principal, path.into_inner()).await?;
    Ok(ApiResponse::NoContent)
}
