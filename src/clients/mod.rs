//! Handles for talking to the resource actors.
//!
//! A handle is a cheap, cloneable wrapper around the actor's request channel.
//! It converts framework failures into the domain error of its resource.

#[macro_use]
mod macros;

mod client_directory;
mod order_book;
mod product_catalog;

pub use client_directory::ClientDirectory;
pub use order_book::OrderBook;
pub use product_catalog::ProductCatalog;
