//! SeaORM entities for the three resource tables plus connection helpers.
//!
//! The tables are independent; `book.author` is plain text.

pub mod db;
pub mod author;
pub mod book;
pub mod user;
