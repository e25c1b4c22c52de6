use soroban_sdk::{contractclient, Address, Env, String};

/// Capability surface of the item registry: role-gated minting plus
/// custodian-authorized transfer of custody. The marketplace never assumes
/// anything about the registry beyond these two calls.
#[contractclient(name = "ItemRegistryClient")]
pub trait ItemRegistry {
    /// Mint a new item to `to`, returning the assigned id.
    fn mint(env: Env, minter: Address, to: Address, uri: String) -> u64;

    /// Move custody of `item_id` from `from` to `to`.
    fn transfer(env: Env, from: Address, to: Address, item_id: u64);
}
