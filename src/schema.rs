diesel::table! {
    notes (id) {
        id -> Varchar,
        title -> Varchar,
        content -> Text,
        created_at -> Timestamp,
    }
}
