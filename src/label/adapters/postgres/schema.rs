//! Diesel schema for label catalog persistence.

diesel::table! {
    /// Label records with unique names and display colours.
    labels (id) {
        /// Internal label identifier.
        id -> Uuid,
        /// Globally unique label name.
        #[max_length = 255]
        name -> Varchar,
        /// Display colour as a `#RRGGBB` hex triplet.
        #[max_length = 7]
        color -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
