use std::fmt;

use crate::domain::{Animal, PetData};
use crate::errors::ValidationError;

/// Result of offering an animal for sale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaleOutcome {
    /// The first equal animal was removed from the shop.
    Sold(Animal),
    /// Nothing equal was in stock; the shop is unchanged.
    NotForSale(Animal),
}

impl SaleOutcome {
    pub fn is_sold(&self) -> bool {
        matches!(self, SaleOutcome::Sold(_))
    }
}

impl fmt::Display for SaleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaleOutcome::Sold(pet) => write!(
                f,
                "{} the {} has found a new home.",
                pet.name(),
                pet.species()
            ),
            SaleOutcome::NotForSale(pet) => write!(
                f,
                "{} the {} is not for sale in our shop.",
                pet.name(),
                pet.species()
            ),
        }
    }
}

/// Ordered stock of animals. Everything present is for sale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetShop {
    pets: Vec<Animal>,
}

impl PetShop {
    pub fn new(pets: Vec<Animal>) -> Self {
        Self { pets }
    }

    pub fn from_pet_dataset(dataset: &[PetData]) -> Self {
        Self::new(dataset.iter().map(Animal::from_pet_data).collect())
    }

    pub fn pets(&self) -> &[Animal] {
        &self.pets
    }

    pub fn len(&self) -> usize {
        self.pets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }

    pub fn contains(&self, pet: &Animal) -> bool {
        self.pets.contains(pet)
    }

    /// Returns the first animal in stock order with exactly this name.
    pub fn find_pet_with_name(&self, name: &str) -> Result<&Animal, ValidationError> {
        self.pets
            .iter()
            .find(|pet| pet.name() == name)
            .ok_or_else(|| ValidationError::PetNotFound(name.to_string()))
    }

    pub fn find_pet_with_name_mut(&mut self, name: &str) -> Result<&mut Animal, ValidationError> {
        self.pets
            .iter_mut()
            .find(|pet| pet.name() == name)
            .ok_or_else(|| ValidationError::PetNotFound(name.to_string()))
    }

    pub fn add_pet(&mut self, pet: Animal) {
        tracing::debug!(pet = %pet, "pet added to stock");
        self.pets.push(pet);
    }

    pub fn sell_pet(&mut self, pet: &Animal) -> SaleOutcome {
        match self.pets.iter().position(|candidate| candidate == pet) {
            Some(index) => {
                let sold = self.pets.remove(index);
                tracing::info!(pet = %sold, remaining = self.pets.len(), "pet sold");
                SaleOutcome::Sold(sold)
            }
            None => {
                tracing::warn!(pet = %pet, "pet not in stock");
                SaleOutcome::NotForSale(pet.clone())
            }
        }
    }
}
