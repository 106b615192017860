//! Client (customer) records.

pub mod entity;
pub mod error;

pub use error::*;

use crate::actor_framework::{sequential_ids, ResourceActor};
use crate::clients::ClientDirectory;
use crate::domain::Client;

/// Creates a new Client actor and its directory handle.
pub fn new(buffer_size: usize) -> (ResourceActor<Client>, ClientDirectory) {
    let (actor, inner) = ResourceActor::new(buffer_size, sequential_ids("client"));
    (actor, ClientDirectory::new(inner))
}
