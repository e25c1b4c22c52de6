#![no_std]

mod errors;
mod events;
mod storage;
mod types;

use soroban_sdk::{contract, contractimpl, Address, Env, String};

use errors::Error;
use types::Item;

/// Custody and ownership source of truth for marketplace items.
///
/// Items are identified by sequential u64 ids assigned at mint time.
/// Minting is gated by a role grant; custody moves only through `transfer`,
/// authorized by the current custodian.
#[contract]
pub struct ItemRegistry;

#[contractimpl]
impl ItemRegistry {
    /// Initialize the registry with the admin that manages minter roles.
    pub fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        if storage::has_admin(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();
        storage::set_admin(&env, &admin);

        events::emit_registry_initialized(&env, admin);
        Ok(())
    }

    // ========== ROLE MANAGEMENT ==========

    /// Grant the minter role (admin only)
    pub fn grant_minter_role(env: Env, admin: Address, minter: Address) -> Result<(), Error> {
        Self::require_admin(&env, &admin)?;
        storage::add_minter(&env, &minter);

        events::emit_minter_granted(&env, minter);
        Ok(())
    }

    /// Revoke the minter role (admin only)
    pub fn revoke_minter_role(env: Env, admin: Address, minter: Address) -> Result<(), Error> {
        Self::require_admin(&env, &admin)?;
        storage::remove_minter(&env, &minter);

        events::emit_minter_revoked(&env, minter);
        Ok(())
    }

    /// Check if an address holds the minter role
    pub fn is_minter(env: Env, who: Address) -> bool {
        storage::is_minter(&env, &who)
    }

    // ========== ITEMS ==========

    /// Mint a new item to `to` with the next sequential id.
    ///
    /// `minter` must authorize the call and hold the minter role.
    pub fn mint(env: Env, minter: Address, to: Address, uri: String) -> Result<u64, Error> {
        minter.require_auth();
        if !storage::has_admin(&env) {
            return Err(Error::NotInitialized);
        }
        if !storage::is_minter(&env, &minter) {
            return Err(Error::Unauthorized);
        }

        let item_id = storage::increment_item_counter(&env);
        let item = Item {
            owner: to.clone(),
            uri: uri.clone(),
        };
        storage::set_item(&env, item_id, &item);

        events::emit_item_minted(&env, item_id, to, uri);
        Ok(item_id)
    }

    /// Transfer item custody from `from` to `to`.
    ///
    /// `from` must authorize the call and be the current custodian.
    pub fn transfer(env: Env, from: Address, to: Address, item_id: u64) -> Result<(), Error> {
        from.require_auth();

        let mut item = storage::get_item(&env, item_id).ok_or(Error::ItemNotFound)?;
        if item.owner != from {
            return Err(Error::NotCustodian);
        }

        item.owner = to.clone();
        storage::set_item(&env, item_id, &item);

        events::emit_item_transferred(&env, item_id, from, to);
        Ok(())
    }

    // ========== QUERIES ==========

    /// Current custodian of an item
    pub fn owner_of(env: Env, item_id: u64) -> Result<Address, Error> {
        let item = storage::get_item(&env, item_id).ok_or(Error::ItemNotFound)?;
        Ok(item.owner)
    }

    /// Metadata reference stored at mint time
    pub fn item_uri(env: Env, item_id: u64) -> Result<String, Error> {
        let item = storage::get_item(&env, item_id).ok_or(Error::ItemNotFound)?;
        Ok(item.uri)
    }

    /// Number of items minted so far
    pub fn total_items(env: Env) -> u64 {
        storage::get_item_counter(&env)
    }

    /// Get admin address
    pub fn get_admin(env: Env) -> Result<Address, Error> {
        if !storage::has_admin(&env) {
            return Err(Error::NotInitialized);
        }
        Ok(storage::get_admin(&env))
    }

    // ========== INTERNAL HELPERS ==========

    fn require_admin(env: &Env, admin: &Address) -> Result<(), Error> {
        if !storage::has_admin(env) {
            return Err(Error::NotInitialized);
        }
        admin.require_auth();
        let stored_admin = storage::get_admin(env);
        if *admin != stored_admin {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }
}
