//! Diesel schema for user account persistence.

diesel::table! {
    /// User account records.
    users (id) {
        /// Internal user identifier.
        id -> Uuid,
        /// Unique email address, lowercase-normalized.
        #[max_length = 255]
        email -> Varchar,
        /// Given name.
        #[max_length = 100]
        first_name -> Varchar,
        /// Family name.
        #[max_length = 100]
        last_name -> Varchar,
        /// Salted credential digest in `salt$digest` form.
        hashed_password -> Text,
    }
}
