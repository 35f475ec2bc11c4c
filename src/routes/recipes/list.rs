use crate::db::service::DbService;
use crate::types::recipe::SearchQuery;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{get, web};
use std::sync::Arc;

#[get("")]
pub async fn list(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
) -> ApiResult<Vec<entity::recipe::Model>> {
    Ok(ApiResponse::Ok(db.list_recipes().await?))
}

// An absent or empty query matches every recipe.
#[get("/search")]
pub async fn search(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    query: web::Query<SearchQuery>,
) -> ApiResult<Vec<entity::recipe::Model>> {
    let q = query.q.clone().unwrap_or_default();
    Ok(ApiResponse::Ok(db.search_recipes(&q).await?))
}
