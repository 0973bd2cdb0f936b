table! {
    posts (id) {
        id -> Text,
        title -> Text,
        body -> Text,
        created_at -> Text,
        updated_at -> Text,
    }
}
