//! In-memory registries behind the console front ends.

pub mod atm;
pub mod datasets;
pub mod pet_shop;

pub use atm::Atm;
pub use pet_shop::{PetShop, SaleOutcome};
