use crate::cli::io::Console;
use crate::core::{PetShop, SaleOutcome};
use crate::domain::Animal;
use crate::errors::CliError;

/// Console front end over a [`PetShop`]. Each operation prints at most one line.
pub struct PetShopSession<C> {
    shop: PetShop,
    console: C,
}

impl<C: Console> PetShopSession<C> {
    pub fn new(shop: PetShop, console: C) -> Self {
        Self { shop, console }
    }

    pub fn shop(&self) -> &PetShop {
        &self.shop
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_parts(self) -> (PetShop, C) {
        (self.shop, self.console)
    }

    pub fn add_pet(&mut self, pet: Animal) {
        self.shop.add_pet(pet);
    }

    /// Ages the first pet with this name and announces it.
    pub fn celebrate_birthday(&mut self, name: &str) -> Result<(), CliError> {
        match self.shop.find_pet_with_name_mut(name) {
            Ok(pet) => {
                let line = pet.celebrate_birthday();
                self.console.info(&line)
            }
            Err(err) => self.console.error(&err.to_string()),
        }
    }

    /// Lets the first pet with this name speak. Generic animals stay silent.
    pub fn vocalize(&mut self, name: &str) -> Result<(), CliError> {
        let line = match self.shop.find_pet_with_name(name) {
            Ok(pet) => pet.vocalization(),
            Err(err) => return self.console.error(&err.to_string()),
        };
        match line {
            Some(line) => self.console.info(&line),
            None => {
                tracing::debug!(name, "pet has no vocalization");
                Ok(())
            }
        }
    }

    pub fn sell_pet(&mut self, pet: &Animal) -> Result<SaleOutcome, CliError> {
        let outcome = self.shop.sell_pet(pet);
        let line = outcome.to_string();
        if outcome.is_sold() {
            self.console.success(&line)?;
        } else {
            self.console.warning(&line)?;
        }
        Ok(outcome)
    }

    /// Looks the pet up by name first; a failed lookup prints its message instead.
    pub fn sell_pet_named(&mut self, name: &str) -> Result<Option<SaleOutcome>, CliError> {
        let pet = match self.shop.find_pet_with_name(name) {
            Ok(pet) => pet.clone(),
            Err(err) => {
                self.console.error(&err.to_string())?;
                return Ok(None);
            }
        };
        self.sell_pet(&pet).map(Some)
    }

    /// The first pet in stock celebrates its birthday, then the third pet is sold.
    pub fn run_demonstration(&mut self) -> Result<(), CliError> {
        if let Some(first) = self.shop.pets().first() {
            let name = first.name().to_string();
            self.celebrate_birthday(&name)?;
        }
        if let Some(third) = self.shop.pets().get(2).cloned() {
            self.sell_pet(&third)?;
        }
        Ok(())
    }
}
