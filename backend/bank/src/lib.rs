//! # Bank
//!
//! Everything the server and the client agree on: the weapon catalog and the JSON payloads.
pub mod payloads;
pub mod weapons;

use weapons::Catalog;

pub fn get_catalog() -> Catalog {
    Catalog::new()
}
