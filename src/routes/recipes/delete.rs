use crate::db::service::DbService;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{delete, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

#[delete("/{id}")]
pub async fn delete(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<DbService>>,
    path: web::Path<i32>,
) -> ApiResult<()> {
    let principal = db.authenticate(auth.token()).await?;
    db.delete_recipe(&principal, path.into_inner()).await?;
    Ok(ApiResponse::NoContent)
}
