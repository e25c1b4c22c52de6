#![no_std]

mod auction;
mod errors;
mod events;
mod listing;
mod registry;
mod storage;
mod types;

use soroban_sdk::{contract, contractimpl, Address, Env, String};

use crate::errors::Error;
use crate::events::{
    AuctionPeriodUpdatedEventData, InitializedEventData, ItemCreatedEventData,
    MinParticipantsUpdatedEventData,
};
use crate::registry::ItemRegistryClient;
use crate::types::{Auction, Listing, MarketplaceConfig};

/// Default auction duration (3 days)
const DEFAULT_AUCTION_PERIOD: u64 = 3 * 24 * 60 * 60;

/// Default number of bids required for an auction sale to go through
const DEFAULT_MIN_PARTICIPANTS: u32 = 2;

/// Escrow marketplace for unique items.
///
/// Items are sold either at a fixed price or through a time-boxed English
/// auction, settled in a fungible payment token. While a sale is open the
/// marketplace holds the item (and, for auctions, the highest bid) in
/// escrow; every transition is validated from stored state only, so any
/// account may safely call any entry point at any time.
#[contract]
pub struct Marketplace;

#[contractimpl]
impl Marketplace {
    /// Initialize the marketplace with its admin and collaborator
    /// contracts. Auction policy starts at the defaults.
    pub fn initialize(
        env: Env,
        admin: Address,
        item_registry: Address,
        payment_token: Address,
    ) -> Result<(), Error> {
        if storage::has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        let config = MarketplaceConfig {
            admin: admin.clone(),
            item_registry: item_registry.clone(),
            payment_token: payment_token.clone(),
            auction_period: DEFAULT_AUCTION_PERIOD,
            auction_min_participants: DEFAULT_MIN_PARTICIPANTS,
        };
        storage::set_config(&env, &config);

        InitializedEventData {
            admin,
            item_registry,
            payment_token,
        }
        .publish(&env);

        Ok(())
    }

    // ========================================================================
    // MINTING
    // ========================================================================

    /// Create a new item in the registry, assigning custody to `recipient`.
    ///
    /// Open to any caller; the marketplace itself holds the minter role. A
    /// rejected mint means the deployment never granted that role, which is
    /// surfaced as a collaborator fault and never retried.
    pub fn create_item(env: Env, uri: String, recipient: Address) -> Result<u64, Error> {
        let config = storage::get_config(&env).ok_or(Error::NotInitialized)?;

        let registry = ItemRegistryClient::new(&env, &config.item_registry);
        let item_id = match registry.try_mint(&env.current_contract_address(), &recipient, &uri) {
            Ok(Ok(item_id)) => item_id,
            _ => return Err(Error::CollaboratorFailure),
        };

        ItemCreatedEventData {
            item_id,
            owner: recipient,
            uri,
        }
        .publish(&env);

        Ok(item_id)
    }

    // ========================================================================
    // FIXED-PRICE SALE
    // ========================================================================

    /// List an owned item at a fixed price, taking it into escrow.
    pub fn list_item(env: Env, seller: Address, item_id: u64, price: i128) -> Result<(), Error> {
        listing::list_item(&env, seller, item_id, price)
    }

    /// Cancel an active listing and return the item to the seller.
    pub fn cancel(env: Env, seller: Address, item_id: u64) -> Result<(), Error> {
        listing::cancel(&env, seller, item_id)
    }

    /// Buy a listed item at its asking price.
    pub fn buy_item(env: Env, buyer: Address, item_id: u64) -> Result<(), Error> {
        listing::buy_item(&env, buyer, item_id)
    }

    // ========================================================================
    // AUCTION
    // ========================================================================

    /// Put an owned item up for auction, taking it into escrow.
    pub fn list_item_on_auction(
        env: Env,
        seller: Address,
        item_id: u64,
        start_price: i128,
    ) -> Result<(), Error> {
        auction::list_item_on_auction(&env, seller, item_id, start_price)
    }

    /// Place a bid, escrowing the amount and refunding the outbid account.
    pub fn make_bid(env: Env, bidder: Address, item_id: u64, amount: i128) -> Result<(), Error> {
        auction::make_bid(&env, bidder, item_id, amount)
    }

    /// Settle an expired auction. Permissionless.
    pub fn finish_auction(env: Env, item_id: u64) -> Result<(), Error> {
        auction::finish_auction(&env, item_id)
    }

    // ========================================================================
    // ADMINISTRATION
    // ========================================================================

    /// Update the auction duration for subsequently listed auctions
    /// (admin only)
    pub fn update_auction_period(env: Env, admin: Address, period: u64) -> Result<(), Error> {
        let mut config = Self::require_admin(&env, &admin)?;

        if period == 0 {
            return Err(Error::InvalidDuration);
        }

        config.auction_period = period;
        storage::set_config(&env, &config);

        AuctionPeriodUpdatedEventData { admin, period }.publish(&env);
        Ok(())
    }

    /// Update the participant threshold for subsequently listed auctions
    /// (admin only)
    pub fn update_auction_min_participants(
        env: Env,
        admin: Address,
        count: u32,
    ) -> Result<(), Error> {
        let mut config = Self::require_admin(&env, &admin)?;

        config.auction_min_participants = count;
        storage::set_config(&env, &config);

        MinParticipantsUpdatedEventData { admin, count }.publish(&env);
        Ok(())
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// Current auction duration in seconds
    pub fn auction_period(env: Env) -> Result<u64, Error> {
        let config = storage::get_config(&env).ok_or(Error::NotInitialized)?;
        Ok(config.auction_period)
    }

    /// Current participant threshold
    pub fn auction_min_participants(env: Env) -> Result<u32, Error> {
        let config = storage::get_config(&env).ok_or(Error::NotInitialized)?;
        Ok(config.auction_min_participants)
    }

    /// Get marketplace configuration
    pub fn get_config(env: Env) -> Result<MarketplaceConfig, Error> {
        storage::get_config(&env).ok_or(Error::NotInitialized)
    }

    /// Get the listing record for an item, including closed ones
    pub fn get_listing(env: Env, item_id: u64) -> Result<Listing, Error> {
        storage::get_listing(&env, item_id).ok_or(Error::NotListed)
    }

    /// Get the auction record for an item, including settled ones
    pub fn get_auction(env: Env, item_id: u64) -> Result<Auction, Error> {
        storage::get_auction(&env, item_id).ok_or(Error::NotOnAuction)
    }

    // ========================================================================
    // INTERNAL HELPERS
    // ========================================================================

    fn require_admin(env: &Env, admin: &Address) -> Result<MarketplaceConfig, Error> {
        let config = storage::get_config(env).ok_or(Error::NotInitialized)?;
        admin.require_auth();
        if *admin != config.admin {
            return Err(Error::Unauthorized);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod test;
