mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, TestContext};
use recipe_box::types::recipe::RRecipeUpdate;

#[tokio::test]
async fn test_update_by_non_owner_is_forbidden() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (owner_id, _owner_token) = client.create_test_user(None).await.expect("seed owner");
    let (_other_id, other_token) = client.create_test_user(None).await.expect("seed other");
    let recipe = client.create_test_recipe(owner_id, "Original", 0).await;

    let req = test::TestRequest::put()
        .uri(&format!("/recipes/{}", recipe.id))
        .insert_header(("Authorization", format!("Bearer {}", other_token)))
        .set_json(RRecipeUpdate { description: "Hijacked".to_string(), category_id: 0 })
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // Nothing was overwritten
    let req = test::TestRequest::get()
        .uri(&format!("/recipes/{}", recipe.id))
        .to_request();
    let details: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(details["description"], "Original");
}

#[tokio::test]
async fn test_owner_can_update() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (owner_id, owner_token) = client.create_test_user(None).await.expect("seed owner");
    let recipe = client.create_test_recipe(owner_id, "Original", 0).await;

    let req = test::TestRequest::put()
        .uri(&format!("/recipes/{}", recipe.id))
        .insert_header(("Authorization", format!("Bearer {}", owner_token)))
        .set_json(RRecipeUpdate { description: "Improved".to_string(), category_id: 0 })
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let updated: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(updated["description"], "Improved");
    // the owner reference is untouched by edits
    assert_eq!(updated["user_id"], owner_id.to_string());
}

#[tokio::test]
async fn test_delete_by_non_owner_is_forbidden() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (owner_id, _owner_token) = client.create_test_user(None).await.expect("seed owner");
    let (_other_id, other_token) = client.create_test_user(None).await.expect("seed other");
    let recipe = client.create_test_recipe(owner_id, "Keep me", 0).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/recipes/{}", recipe.id))
        .insert_header(("Authorization", format!("Bearer {}", other_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::get()
        .uri(&format!("/recipes/{}", recipe.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_owner_can_delete_and_links_cascade() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (owner_id, owner_token) = client.create_test_user(None).await.expect("seed owner");
    let category = client.create_test_category("Dinner").await;
    let recipe = client.create_test_recipe(owner_id, "Stew", category.id).await;

    let req = test::TestRequest::get()
        .uri(&format!("/recipes/{}", recipe.id))
        .to_request();
    let details: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    let link_id = details["categories"][0]["link_id"].as_i64().unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/recipes/{}", recipe.id))
        .insert_header(("Authorization", format!("Bearer {}", owner_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri(&format!("/recipes/{}", recipe.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // The join row went with the recipe
    let req = test::TestRequest::delete()
        .uri(&format!("/recipes/categories/{}", link_id))
        .insert_header(("Authorization", format!("Bearer {}", owner_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_recipe_not_found() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (_user_id, token) = client.create_test_user(None).await.expect("seed user");

    let req = test::TestRequest::delete()
        .uri("/recipes/9999")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_mutations_require_auth() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (owner_id, _token) = client.create_test_user(None).await.expect("seed owner");
    let recipe = client.create_test_recipe(owner_id, "Untouchable", 0).await;

    let req = test::TestRequest::put()
        .uri(&format!("/recipes/{}", recipe.id))
        .set_json(RRecipeUpdate { description: "Nope".to_string(), category_id: 0 })
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );

    let req = test::TestRequest::delete()
        .uri(&format!("/recipes/{}", recipe.id))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );
}
