use actix_web::{web, HttpResponse};
use diesel::prelude::*;

use crate::{
    db::{with_connection, ConnectionProvider},
    errors::{ApiResponse, ServerError},
    models::note::{IdQuery, Note, NoteInput},
    schema::notes::dsl::*,
};

/// Replaces title and content of an existing note. `createdAt` and the id
/// stay as they were.
pub async fn update(
    query: web::Query<IdQuery>,
    input: web::Json<NoteInput>,
    provider: web::Data<ConnectionProvider>,
) -> Result<HttpResponse, ServerError> {
    let pool = provider.acquire().await?;
    let note_id = query.id().ok_or(ServerError::MissingId)?.to_owned();
    let fields = input.validate()?;

    let updated = web::block(move || -> Result<Option<Note>, ServerError> {
        with_connection!(pool, |connection| {
            Ok(connection.transaction::<_, diesel::result::Error, _>(|connection| {
                let changed = diesel::update(notes.find(note_id.as_str()))
                    .set((title.eq(&fields.title), content.eq(&fields.content)))
                    .execute(connection)?;
                if changed == 0 {
                    return Ok(None);
                }
                notes
                    .find(note_id.as_str())
                    .first::<Note>(connection)
                    .optional()
            })?)
        })
    })
    .await??;

    match updated {
        Some(note) => Ok(HttpResponse::Ok().json(ApiResponse::data(note))),
        None => Err(ServerError::NotFound),
    }
}

/// Removes a note and returns it so the caller can confirm what went.
pub async fn del(
    query: web::Query<IdQuery>,
    provider: web::Data<ConnectionProvider>,
) -> Result<HttpResponse, ServerError> {
    let pool = provider.acquire().await?;
    let note_id = query.id().ok_or(ServerError::MissingId)?.to_owned();

    let deleted = web::block(move || -> Result<Option<Note>, ServerError> {
        with_connection!(pool, |connection| {
            Ok(connection.transaction::<_, diesel::result::Error, _>(|connection| {
                let note = notes
                    .find(note_id.as_str())
                    .first::<Note>(connection)
                    .optional()?;
                if note.is_some() {
                    diesel::delete(notes.find(note_id.as_str())).execute(connection)?;
                }
                Ok(note)
            })?)
        })
    })
    .await??;

    match deleted {
        Some(note) => Ok(HttpResponse::Ok().json(ApiResponse::data(note))),
        None => Err(ServerError::NotFound),
    }
}
