//! Diesel schema for task and ownership persistence.

diesel::table! {
    /// Stored tasks.
    tasks (id) {
        /// Store-assigned task identifier.
        id -> Uuid,
        /// Non-empty title.
        title -> Text,
        /// Free-text description; empty when absent.
        description -> Text,
        /// Completion flag.
        is_done -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// One row per task naming the user that owns it.
    ownerships (task_id) {
        /// Owned task; deleting the task cascades here.
        task_id -> Uuid,
        /// Owning user.
        user_id -> Uuid,
    }
}

diesel::joinable!(ownerships -> tasks (task_id));
diesel::allow_tables_to_appear_in_same_query!(tasks, ownerships);
