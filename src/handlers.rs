use actix_web::web;

pub mod note;

pub async fn index() -> impl actix_web::Responder {
    actix_web::HttpResponse::Ok().finish()
}

/// Registers every route. `/api/notes` is a legacy alias of `/notes`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(crate::errors::json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(crate::errors::query_error_handler))
        .route("/", web::get().to(index))
        .service(
            web::resource(["/notes", "/api/notes"])
                .route(web::get().to(note::query::list))
                .route(web::post().to(note::post::new))
                .route(web::put().to(note::mutate::update))
                .route(web::delete().to(note::mutate::del)),
        );
}
