//! Diesel schema for task persistence and its membership edge tables.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Internal task identifier.
        id -> Uuid,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Workflow status.
        #[max_length = 10]
        status -> Varchar,
        /// Progress percentage within 0..=100.
        progress -> Int4,
        /// Visibility flag; `false` marks a soft-deleted task.
        is_active -> Bool,
        /// Optional due date.
        due_date -> Nullable<Timestamptz>,
        /// Owner's user identifier.
        owner_id -> Uuid,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Participant membership edges, composite-keyed.
    task_participants (task_id, user_id) {
        /// Task side of the edge.
        task_id -> Uuid,
        /// User side of the edge.
        user_id -> Uuid,
    }
}

diesel::table! {
    /// Label attachment edges, composite-keyed.
    task_labels (task_id, label_id) {
        /// Task side of the edge.
        task_id -> Uuid,
        /// Label side of the edge.
        label_id -> Uuid,
    }
}

diesel::allow_tables_to_appear_in_same_query!(tasks, task_participants, task_labels);
