//! Domain types for the pet catalog.
//! - `Pet` is the only stored entity; everything else rides along as payload.
//! - Status is kept as opaque text on the record; `PetStatus` names the documented values.

pub mod api_response;
pub mod errors;
pub mod pet;

pub use api_response::ApiResponse;
pub use pet::{Category, Pet, PetForm, PetStatus};
