use soroban_sdk::{contracttype, Address, String};

/// Storage keys for the item registry contract.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Admin address for role management
    Admin,
    /// Last assigned item id
    ItemCounter,
    /// Item record by id
    Item(u64),
    /// Minter role flag by address
    Minter(Address),
}

/// A registered item: current custodian plus the metadata reference set at
/// mint time. The uri is never rewritten after minting.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Item {
    pub owner: Address,
    pub uri: String,
}
