use std::fmt;

use serde::{Deserialize, Serialize};

const DOG_SPECIES: &str = "dog";
const CAT_SPECIES: &str = "cat";

/// One row of the pet seed dataset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PetData {
    pub name: String,
    pub age: u32,
    pub species: String,
}

impl PetData {
    pub fn new(name: impl Into<String>, age: u32, species: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            species: species.into(),
        }
    }
}

/// Variant tag deciding which vocalization an animal has.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AnimalKind {
    Generic,
    Dog,
    Cat,
}

/// An animal stocked by the pet shop.
///
/// Equality only looks at name, age and species, so a generic animal whose
/// species is `"dog"` equals a dog with the same name and age.
#[derive(Debug, Clone, Serialize)]
pub struct Animal {
    name: String,
    age: u32,
    species: String,
    kind: AnimalKind,
}

impl Animal {
    /// Creates a generic animal; the species is kept exactly as given.
    pub fn new(name: impl Into<String>, age: u32, species: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            species: species.into(),
            kind: AnimalKind::Generic,
        }
    }

    pub fn dog(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
            species: DOG_SPECIES.into(),
            kind: AnimalKind::Dog,
        }
    }

    pub fn cat(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
            species: CAT_SPECIES.into(),
            kind: AnimalKind::Cat,
        }
    }

    /// Picks the variant from the dataset species.
    pub fn from_pet_data(data: &PetData) -> Self {
        match data.species.as_str() {
            DOG_SPECIES => Self::dog(data.name.clone(), data.age),
            CAT_SPECIES => Self::cat(data.name.clone(), data.age),
            _ => Self::new(data.name.clone(), data.age, data.species.clone()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    pub fn kind(&self) -> AnimalKind {
        self.kind
    }

    /// Ages the animal by one year and returns the announcement line.
    pub fn celebrate_birthday(&mut self) -> String {
        self.age += 1;
        format!("It's {}'s birthday.", self.name)
    }

    pub fn woof(&self) -> Option<String> {
        matches!(self.kind, AnimalKind::Dog).then(|| format!("{} says woof!", self.name))
    }

    pub fn meow(&self) -> Option<String> {
        matches!(self.kind, AnimalKind::Cat).then(|| format!("{} says meow!", self.name))
    }

    pub fn vocalization(&self) -> Option<String> {
        match self.kind {
            AnimalKind::Dog => self.woof(),
            AnimalKind::Cat => self.meow(),
            AnimalKind::Generic => None,
        }
    }
}

impl PartialEq for Animal {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.age == other.age && self.species == other.species
    }
}

impl Eq for Animal {}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {} ({})", self.name, self.age, self.species)
    }
}

impl From<&PetData> for Animal {
    fn from(data: &PetData) -> Self {
        Self::from_pet_data(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_animal_keeps_fields() {
        let animal = Animal::new("Fluffy", 16, "cat");
        assert_eq!(animal.name(), "Fluffy");
        assert_eq!(animal.age(), 16);
        assert_eq!(animal.species(), "cat");
        assert_eq!(animal.kind(), AnimalKind::Generic);
    }

    #[test]
    fn display_renders_name_age_species() {
        assert_eq!(Animal::new("Spot", 5, "dog").to_string(), "Spot, 5 (dog)");
        assert_eq!(Animal::cat("Fluffy", 16).to_string(), "Fluffy, 16 (cat)");
    }

    #[test]
    fn dog_and_cat_fix_species() {
        assert_eq!(Animal::dog("Fido", 9).species(), "dog");
        assert_eq!(Animal::cat("Ginger", 8).species(), "cat");
    }

    #[test]
    fn equality_uses_field_values() {
        assert_eq!(Animal::dog("Spot", 5), Animal::dog("Spot", 5));
        assert_ne!(Animal::dog("Spot", 5), Animal::dog("Fido", 9));
        assert_ne!(Animal::dog("Spot", 5), Animal::dog("Spot", 6));
    }

    #[test]
    fn equality_ignores_variant() {
        let dog = Animal::dog("Spot", 5);
        let generic = Animal::new("Spot", 5, "dog");
        assert_eq!(dog, generic);
        assert_eq!(generic, dog);
    }

    #[test]
    fn birthday_increments_age_once() {
        let mut animal = Animal::new("Spot", 5, "dog");
        let line = animal.celebrate_birthday();
        assert_eq!(line, "It's Spot's birthday.");
        assert_eq!(animal.age(), 6);
    }

    #[test]
    fn only_dogs_woof_and_only_cats_meow() {
        let dog = Animal::dog("Spot", 5);
        let cat = Animal::cat("Fluffy", 16);
        let fish = Animal::new("Nemo", 1, "fish");

        assert_eq!(dog.woof().as_deref(), Some("Spot says woof!"));
        assert_eq!(dog.meow(), None);
        assert_eq!(cat.meow().as_deref(), Some("Fluffy says meow!"));
        assert_eq!(cat.woof(), None);
        assert_eq!(fish.vocalization(), None);
    }

    #[test]
    fn from_pet_data_selects_variant() {
        let dog = Animal::from_pet_data(&PetData::new("Buddy", 3, "dog"));
        let cat = Animal::from(&PetData::new("Ginger", 8, "cat"));
        let rabbit = Animal::from_pet_data(&PetData::new("Floppy", 2, "rabbit"));

        assert_eq!(dog.kind(), AnimalKind::Dog);
        assert_eq!(cat.kind(), AnimalKind::Cat);
        assert_eq!(rabbit.kind(), AnimalKind::Generic);
        assert_eq!(rabbit.species(), "rabbit");
    }
}
