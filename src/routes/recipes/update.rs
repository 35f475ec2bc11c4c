use crate::db::service::DbService;
use crate::types::recipe::RRecipeUpdate;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{put, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

#[put("/{id}")]
pub async fn update(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<DbService>>,
    path: web::Path<i32>,
    body: web::Json<RRecipeUpdate>,
) -> ApiResult<entity::recipe::Model> {
    let principal = db.authenticate(auth.token()).await?;

    let updated = db
        .update_recipe(
            &principal,
            path.into_inner(),
            body.description.clone(),
            body.category_id,
        )
        .await?;

    Ok(ApiResponse::Ok(updated))
}
