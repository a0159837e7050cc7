pub mod account;
pub mod animal;

pub use account::{AccountData, BankAccount};
pub use animal::{Animal, AnimalKind, PetData};
