use models::Pet;

use crate::errors::ServiceError;
use crate::storage::pet_store::PetStore;

/// Trait abstraction over the pet record store consumed by the HTTP layer.
/// All calls are synchronous and bounded; absence is reported through `Option`/`bool`.
/// `add` only fails when no id is left to assign.
pub trait PetCatalog: Send + Sync {
    fn get_by_id(&self, id: i64) -> Option<Pet>;
    fn add(&self, pet: Pet) -> Result<Pet, ServiceError>;
    fn delete(&self, id: i64) -> bool;
    fn find_by_status(&self, filter: &str) -> Vec<Pet>;
    fn find_by_tags(&self, filter: &str) -> Vec<Pet>;
    fn update_fields(&self, id: i64, name: Option<&str>, status: Option<&str>) -> Option<Pet>;
}

impl PetCatalog for PetStore {
    fn get_by_id(&self, id: i64) -> Option<Pet> { PetStore::get_by_id(self, id) }
    fn add(&self, pet: Pet) -> Result<Pet, ServiceError> { PetStore::add(self, pet) }
    fn delete(&self, id: i64) -> bool { PetStore::delete(self, id) }
    fn find_by_status(&self, filter: &str) -> Vec<Pet> { PetStore::find_by_status(self, filter) }
    fn find_by_tags(&self, filter: &str) -> Vec<Pet> { PetStore::find_by_tags(self, filter) }
    fn update_fields(&self, id: i64, name: Option<&str>, status: Option<&str>) -> Option<Pet> {
        PetStore::update_fields(self, id, name, status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::tagged;
    use models::PetStatus;
    use std::sync::Arc;

    #[test]
    fn store_is_usable_behind_the_trait_object() -> Result<(), ServiceError> {
        let catalog: Arc<dyn PetCatalog> = Arc::new(PetStore::new());
        let pet = catalog.add(tagged("Fido", PetStatus::Available, &["tag1"]))?;
        assert_eq!(catalog.get_by_id(pet.id), Some(pet.clone()));
        assert_eq!(catalog.find_by_tags("tag1").len(), 1);
        assert_eq!(catalog.find_by_status("available").len(), 1);
        assert!(catalog.update_fields(pet.id, Some("Rex"), None).is_some());
        assert!(catalog.delete(pet.id));
        assert!(catalog.get_by_id(pet.id).is_none());
        Ok(())
    }
}
