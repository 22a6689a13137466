//! Data models for the contact list.

pub mod contact;

pub use contact::Contact;
