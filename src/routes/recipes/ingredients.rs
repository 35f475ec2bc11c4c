use crate::db::service::DbService;
use crate::types::recipe::RAddIngredient;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{delete, post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

#[post("/{id}/ingredients")]
pub async fn add_link(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<DbService>>,
    path: web::Path<i32>,
    body: web::Json<RAddIngredient>,
) -> ApiResult<entity::ingredient_recipe::Model> {
    let principal = db.authenticate(auth.token()).await?;

    let link = db
        .add_ingredient_link(&principal, path.into_inner(), body.ingredient_id)
        .await?;

    Ok(match link {
        Some(link) => ApiResponse::Created(link),
        None => ApiResponse::NoContent,
    })
}

#[delete("/ingredients/{join_id}")]
pub async fn delete_link(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<DbService>>,
    path: web::Path<i32>,
) -> ApiResult<()> {
    let principal = db.authenticate(auth.token()).await?;
    db.delete_ingredient_link(&principal, path.into_inner()).await?;
    Ok(ApiResponse::NoContent)
}
