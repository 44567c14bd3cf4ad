#![cfg(test)]
use models::{Pet, PetStatus};

/// Unassigned record with a name and one of the documented statuses.
pub fn pet(name: &str, status: PetStatus) -> Pet {
    Pet {
        name: Some(name.to_string()),
        status: Some(status.as_str().to_string()),
        ..Pet::default()
    }
}

pub fn tagged(name: &str, status: PetStatus, tags: &[&str]) -> Pet {
    Pet { tags: tags.iter().map(|t| t.to_string()).collect(), ..pet(name, status) }
}

pub fn with_id(mut pet: Pet, id: i64) -> Pet {
    pet.id = id;
    pet
}
