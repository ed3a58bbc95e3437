use actix_web::{web, HttpResponse};
use diesel::prelude::*;

use crate::{
    db::{with_connection, ConnectionProvider},
    errors::{ApiResponse, ServerError},
    models::note::Note,
    schema::notes::dsl::*,
};

/// Every note, newest first.
pub async fn list(provider: web::Data<ConnectionProvider>) -> Result<HttpResponse, ServerError> {
    let pool = provider.acquire().await?;

    let result = web::block(move || -> Result<Vec<Note>, ServerError> {
        with_connection!(pool, |connection| {
            Ok(notes
                .order((created_at.desc(), id.desc()))
                .load::<Note>(connection)?)
        })
    })
    .await??;

    Ok(HttpResponse::Ok().json(ApiResponse::data(result)))
}
