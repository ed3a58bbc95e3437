//! Client side of the notes API: a typed HTTP client and the note list a
//! front end keeps in memory.
//!
//! [`NoteStore`] only changes its list after the server confirmed a
//! write. On failure the list stays as it was and a user-facing message
//! is recorded in [`NoteStore::error`].

use derive_more::Display;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_derive::Deserialize;

use crate::models::note::{Note, NoteInput};

#[derive(Debug, Display)]
pub enum ClientError {
    #[display(fmt = "request failed: {}", _0)]
    Http(reqwest::Error),
    #[display(fmt = "server answered {}: {}", status, message)]
    Api { status: StatusCode, message: String },
    #[display(fmt = "response carried no data")]
    MissingData,
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::Http(e)
    }
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    success: bool,
    data: Option<T>,
    error: Option<String>,
}

#[derive(Clone, Debug)]
pub struct NotesClient {
    http: reqwest::Client,
    endpoint: String,
}

impl NotesClient {
    /// `base_url` is the server root, e.g. `http://localhost:8080`.
    pub fn new(base_url: &str) -> Self {
        NotesClient {
            http: reqwest::Client::new(),
            endpoint: format!("{}/notes", base_url.trim_end_matches('/')),
        }
    }

    pub async fn list(&self) -> Result<Vec<Note>, ClientError> {
        let response = self.http.get(&self.endpoint).send().await?;
        Self::unwrap_envelope(response).await
    }

    pub async fn create(&self, input: &NoteInput) -> Result<Note, ClientError> {
        let response = self.http.post(&self.endpoint).json(input).send().await?;
        Self::unwrap_envelope(response).await
    }

    pub async fn update(&self, id: &str, input: &NoteInput) -> Result<Note, ClientError> {
        let response = self
            .http
            .put(&self.endpoint)
            .query(&[("id", id)])
            .json(input)
            .send()
            .await?;
        Self::unwrap_envelope(response).await
    }

    pub async fn delete(&self, id: &str) -> Result<Note, ClientError> {
        let response = self
            .http
            .delete(&self.endpoint)
            .query(&[("id", id)])
            .send()
            .await?;
        Self::unwrap_envelope(response).await
    }

    async fn unwrap_envelope<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        let envelope: Envelope<T> = response.json().await?;
        if !status.is_success() || !envelope.success {
            return Err(ClientError::Api {
                status,
                message: envelope.error.unwrap_or_else(|| status.to_string()),
            });
        }
        envelope.data.ok_or(ClientError::MissingData)
    }
}

#[derive(Debug)]
pub struct NoteStore {
    client: NotesClient,
    pub notes: Vec<Note>,
    pub is_loading: bool,
    pub is_saving: bool,
    pub editing: Option<Note>,
    pub error: Option<String>,
}

impl NoteStore {
    pub fn new(client: NotesClient) -> Self {
        NoteStore {
            client,
            notes: Vec::new(),
            is_loading: false,
            is_saving: false,
            editing: None,
            error: None,
        }
    }

    /// Replaces the local list with the server's.
    pub async fn fetch_notes(&mut self) -> Result<(), ClientError> {
        self.is_loading = true;
        self.error = None;
        let result = self.client.list().await;
        self.is_loading = false;

        match result {
            Ok(notes) => {
                self.notes = notes;
                Ok(())
            }
            Err(e) => {
                log::error!("fetching notes failed: {e}");
                self.error = Some("Unable to load notes. Please try again.".to_string());
                Err(e)
            }
        }
    }

    pub fn begin_edit(&mut self, note: Note) {
        self.editing = Some(note);
        self.error = None;
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Updates the note being edited, or creates a new one when nothing is
    /// being edited.
    pub async fn save(&mut self, input: NoteInput) -> Result<Note, ClientError> {
        self.is_saving = true;
        self.error = None;
        let result = match &self.editing {
            Some(note) => self.client.update(&note.id, &input).await,
            None => self.client.create(&input).await,
        };
        self.is_saving = false;

        match result {
            Ok(saved) => {
                if self.editing.take().is_some() {
                    self.apply_updated(saved.clone());
                } else {
                    self.apply_created(saved.clone());
                }
                Ok(saved)
            }
            Err(e) => {
                let message = if self.editing.is_some() {
                    "Failed to update note"
                } else {
                    "Failed to create note"
                };
                log::error!("{message}: {e}");
                self.error = Some(message.to_string());
                Err(e)
            }
        }
    }

    pub async fn delete(&mut self, id: &str) -> Result<Note, ClientError> {
        self.error = None;
        match self.client.delete(id).await {
            Ok(deleted) => {
                self.apply_deleted(&deleted.id);
                Ok(deleted)
            }
            Err(e) => {
                log::error!("deleting note {id} failed: {e}");
                self.error = Some("Failed to delete note".to_string());
                Err(e)
            }
        }
    }

    fn apply_created(&mut self, note: Note) {
        self.notes.insert(0, note);
    }

    fn apply_updated(&mut self, note: Note) {
        if let Some(slot) = self.notes.iter_mut().find(|n| n.id == note.id) {
            *slot = note;
        }
    }

    fn apply_deleted(&mut self, id: &str) {
        self.notes.retain(|n| n.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::NoteFields;

    fn note(title: &str) -> Note {
        Note::new(NoteFields {
            title: title.to_string(),
            content: format!("{title} body"),
        })
    }

    fn store_with(notes: Vec<Note>) -> NoteStore {
        let mut store = NoteStore::new(NotesClient::new("http://127.0.0.1:1"));
        store.notes = notes;
        store
    }

    #[test]
    fn endpoint_ignores_trailing_slash() {
        assert_eq!(
            NotesClient::new("http://localhost:8080/").endpoint,
            "http://localhost:8080/notes"
        );
    }

    #[test]
    fn created_note_is_prepended() {
        let older = note("older");
        let mut store = store_with(vec![older.clone()]);
        let newer = note("newer");
        store.apply_created(newer.clone());
        assert_eq!(store.notes, vec![newer, older]);
    }

    #[test]
    fn updated_note_replaces_entry_in_place() {
        let (a, b, c) = (note("a"), note("b"), note("c"));
        let mut store = store_with(vec![a.clone(), b.clone(), c.clone()]);

        let mut edited = b.clone();
        edited.title = "b2".into();
        store.apply_updated(edited.clone());
        assert_eq!(store.notes, vec![a, edited, c]);
    }

    #[test]
    fn deleted_note_is_removed_by_id() {
        let (a, b) = (note("a"), note("b"));
        let mut store = store_with(vec![a.clone(), b.clone()]);
        store.apply_deleted(&a.id);
        assert_eq!(store.notes, vec![b]);
    }

    #[actix_web::test]
    async fn failed_save_leaves_list_untouched() {
        let existing = note("existing");
        let mut store = store_with(vec![existing.clone()]);

        assert!(store.save(NoteInput::new("t", "c")).await.is_err());
        assert_eq!(store.notes, vec![existing.clone()]);
        assert_eq!(store.error.as_deref(), Some("Failed to create note"));
        assert!(!store.is_saving);

        store.begin_edit(existing.clone());
        assert!(store.save(NoteInput::new("t", "c")).await.is_err());
        assert_eq!(store.error.as_deref(), Some("Failed to update note"));
        assert_eq!(store.editing, Some(existing));
    }
}
