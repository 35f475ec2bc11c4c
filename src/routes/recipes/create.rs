use crate::db::service::DbService;
use crate::types::recipe::RRecipeCreate;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

#[post("")]
pub async fn create(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<DbService>>,
    body: web::Json<RRecipeCreate>,
) -> ApiResult<entity::recipe::Model> {
    let principal = db.authenticate(auth.token()).await?;

    let recipe = db
        .create_recipe(&principal, body.description.clone(), body.category_id)
        .await?;

    Ok(ApiResponse::Created(recipe))
}
