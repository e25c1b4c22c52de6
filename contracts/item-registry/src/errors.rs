use soroban_sdk::contracterror;

/// Error codes for the item registry contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Contract has not been initialized
    NotInitialized = 2,
    /// Caller does not hold the required role
    Unauthorized = 3,
    /// No item registered under the given id
    ItemNotFound = 4,
    /// Transfer sender is not the current custodian
    NotCustodian = 5,
}
