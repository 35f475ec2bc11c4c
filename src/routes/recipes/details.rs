use crate::db::recipes::owns;
use crate::db::service::DbService;
use crate::types::recipe::{CategoryLinkRes, IngredientLinkRes, OwnerRes, RecipeDetailsRes};
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

// Public view; a bearer token is only used to decide whether the caller sees
// the recipe as their own.
#[get("/{id}")]
pub async fn details(
    _req: actix_web::HttpRequest,
    auth: Option<BearerAuth>,
    db: web::Data<Arc<DbService>>,
    path: web::Path<i32>,
) -> ApiResult<RecipeDetailsRes> {
    let id = path.into_inner();
    let viewer = db.principal_from(auth.as_ref().map(|a| a.token())).await;

    let details = db.get_recipe_details(id).await?;
    let is_owner = viewer
        .as_ref()
        .map(|u| owns(u, &details.recipe))
        .unwrap_or(false);

    Ok(ApiResponse::Ok(RecipeDetailsRes {
        id: details.recipe.id,
        description: details.recipe.description,
        owner: details.owner.map(|o| OwnerRes { id: o.id, name: o.name }),
        categories: details
            .categories
            .into_iter()
            .map(|(link, category)| CategoryLinkRes {
                link_id: link.id,
                category_id: link.category_id,
                name: category.map(|c| c.name).unwrap_or_default(),
            })
            .collect(),
        ingredients: details
            .ingredients
            .into_iter()
            .map(|(link, ingredient)| IngredientLinkRes {
                link_id: link.id,
                ingredient_id: link.ingredient_id,
                name: ingredient.map(|i| i.name).unwrap_or_default(),
            })
            .collect(),
        is_owner,
    }))
}
