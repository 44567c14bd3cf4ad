//! Service layer for the pet catalog.
//! - `storage::pet_store` is the in-memory record store and the single owner of pet identity.
//! - `catalog::PetCatalog` is the seam the HTTP layer depends on.
//! - `file::attachments` stores image uploads; it never touches the catalog.

pub mod catalog;
pub mod errors;
pub mod file;
pub mod runtime;
pub mod storage;
#[cfg(test)]
mod test_support;

pub use catalog::PetCatalog;
pub use storage::pet_store::PetStore;
