use actix_web::web;

pub mod categories;
pub mod health;
pub mod ingredients;
pub mod recipes;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").service(health::health));
    cfg.service(
        web::scope("/user").service(web::scope("/create").service(user::create::create)),
    );
    // literal segments first so /search and the link routes are not
    // swallowed by the /{id} patterns
    cfg.service(
        web::scope("/recipes")
            .service(recipes::list::search)
            .service(recipes::categories::delete_link)
            .service(recipes::ingredients::delete_link)
            .service(recipes::list::list)
            .service(recipes::create::create)
            .service(recipes::details::details)
            .service(recipes::update::update)
            .service(recipes::delete::delete)
            .service(recipes::categories::add_link)
            .service(recipes::ingredients::add_link),
    );
    cfg.service(
        web::scope("/categories")
            .service(categories::list)
            .service(categories::create),
    );
    cfg.service(
        web::scope("/ingredients")
            .service(ingredients::list)
            .service(ingredients::create),
    );
}
