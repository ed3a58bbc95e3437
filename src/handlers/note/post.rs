use actix_web::{web, HttpResponse};
use diesel::prelude::*;

use crate::{
    db::{with_connection, ConnectionProvider},
    errors::{ApiResponse, ServerError},
    models::note::{Note, NoteInput},
    schema::notes::dsl::notes,
};

pub async fn new(
    input: web::Json<NoteInput>,
    provider: web::Data<ConnectionProvider>,
) -> Result<HttpResponse, ServerError> {
    let pool = provider.acquire().await?;
    let note = Note::new(input.validate()?);

    let created = web::block(move || -> Result<Note, ServerError> {
        with_connection!(pool, |connection| {
            diesel::insert_into(notes).values(&note).execute(connection)?;
        });
        Ok(note)
    })
    .await??;

    Ok(HttpResponse::Created().json(ApiResponse::data(created)))
}
