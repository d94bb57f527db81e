//! Domain data types

pub mod contact;

pub use contact::{Contact, ContactRecord, PhoneNumber};
