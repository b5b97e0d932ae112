//! Diesel table definitions for the PostgreSQL schema.
//!
//! The service only reads from these tables; the shipped migration exists to
//! create them in test databases. Keep column order in sync with the
//! migration, because row structs load positionally.

diesel::table! {
    /// Directory of users.
    ws_user (user_id) {
        /// Primary key assigned by the owning system.
        user_id -> Int8,
        full_name -> Varchar,
        user_email -> Varchar,
        birth_date -> Timestamptz,
        create_time -> Timestamptz,
        update_time -> Timestamptz,
        /// Mobile number in international format without `+`.
        msisdn -> Varchar,
    }
}
