//! Entity module - Contains the SeaORM entity definitions for the database.
//! The inventory schema is a single `products` table; the Model struct carries
//! the row data and the Entity struct drives queries against it.

pub mod product;

pub use product::{Column as ProductColumn, Entity as Product, Model as ProductModel};
