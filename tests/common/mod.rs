#![allow(dead_code)]

use challenge_core::{
    cli::{test_mode::ScriptedConsole, AtmSession, PetShopSession},
    core::{datasets::account_dataset, Atm, PetShop},
    domain::Animal,
};

/// ATM seeded with the canonical accounts, answering prompts from `inputs`.
pub fn atm_session(inputs: &[&str]) -> AtmSession<ScriptedConsole> {
    let atm = Atm::from_account_dataset(&account_dataset());
    AtmSession::new(atm, ScriptedConsole::new(inputs.iter().copied()))
}

pub fn balance_of(session: &AtmSession<ScriptedConsole>, account_number: &str) -> f64 {
    session
        .atm()
        .account(account_number)
        .expect("account exists")
        .balance()
}

pub fn shop_with_ginger() -> PetShop {
    PetShop::new(vec![
        Animal::dog("Spot", 5),
        Animal::cat("Fluffy", 16),
        Animal::cat("Ginger", 8),
        Animal::new("Floppy", 2, "rabbit"),
    ])
}

pub fn shop_without_ginger() -> PetShop {
    PetShop::new(vec![
        Animal::dog("Spot", 5),
        Animal::cat("Fluffy", 16),
        Animal::new("Floppy", 2, "rabbit"),
    ])
}

pub fn shop_with_nemo() -> PetShop {
    PetShop::new(vec![
        Animal::dog("Buddy", 3),
        Animal::dog("Fido", 9),
        Animal::new("Nemo", 1, "fish"),
    ])
}

pub fn shop_without_nemo() -> PetShop {
    PetShop::new(vec![Animal::dog("Buddy", 3), Animal::dog("Fido", 9)])
}

pub fn pet_session(shop: PetShop) -> PetShopSession<ScriptedConsole> {
    PetShopSession::new(shop, ScriptedConsole::default())
}
