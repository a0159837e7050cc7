use crate::domain::{AccountData, PetData};

/// Accounts the ATM is seeded with at start-up.
pub fn account_dataset() -> Vec<AccountData> {
    vec![
        AccountData::new("12169553", "Alice Smith", 50.0),
        AccountData::new("82309802", "Bob Jones", 200.0),
        AccountData::new("38987723", "Charlie Taylor", 100.0),
        AccountData::new("32605081", "David Brown", 70.0),
        AccountData::new("87630077", "Eve Williams", 20.0),
        AccountData::new("04985834", "Frank Wilson", 250.0),
        AccountData::new("77195058", "Grace Johnson", 150.0),
        AccountData::new("83670310", "Heidi Davies", 125.0),
        AccountData::new("40469993", "Ivan Patel", 175.0),
        AccountData::new("92174700", "Judy Robinson", 220.0),
        AccountData::new("75029429", "Mallory Wright", 30.0),
    ]
}

/// Animals the pet shop is stocked with at start-up.
pub fn pet_dataset() -> Vec<PetData> {
    vec![
        PetData::new("Spot", 5, "dog"),
        PetData::new("Fluffy", 16, "cat"),
        PetData::new("Buddy", 3, "dog"),
        PetData::new("Fido", 9, "dog"),
        PetData::new("Nemo", 1, "fish"),
        PetData::new("Ginger", 8, "cat"),
        PetData::new("Floppy", 2, "rabbit"),
    ]
}
