use soroban_sdk::{token, Address, Env};

use crate::errors::Error;
use crate::events::{BuyCompletedEventData, ListingChangedEventData};
use crate::registry::ItemRegistryClient;
use crate::storage;
use crate::types::Listing;

pub fn list_item(env: &Env, seller: Address, item_id: u64, price: i128) -> Result<(), Error> {
    seller.require_auth();
    let config = storage::get_config(env).ok_or(Error::NotInitialized)?;

    if price <= 0 {
        return Err(Error::InvalidPrice);
    }
    if storage::listing_active(env, item_id) {
        return Err(Error::AlreadyListed);
    }
    if storage::auction_active(env, item_id) {
        return Err(Error::AlreadyOnAuction);
    }

    // Pull the item into escrow. The registry enforces that the seller is
    // the current custodian.
    let registry = ItemRegistryClient::new(env, &config.item_registry);
    registry.transfer(&seller, &env.current_contract_address(), &item_id);

    let listing = Listing {
        seller,
        price,
        active: true,
    };
    storage::save_listing(env, item_id, &listing);

    ListingChangedEventData {
        item_id,
        price,
        active: true,
    }
    .publish(env);

    Ok(())
}

pub fn cancel(env: &Env, seller: Address, item_id: u64) -> Result<(), Error> {
    seller.require_auth();
    let config = storage::get_config(env).ok_or(Error::NotInitialized)?;

    let mut listing = match storage::get_listing(env, item_id) {
        Some(listing) if listing.active && listing.seller == seller => listing,
        _ => return Err(Error::NotPermitted),
    };

    let registry = ItemRegistryClient::new(env, &config.item_registry);
    registry.transfer(&env.current_contract_address(), &seller, &item_id);

    listing.active = false;
    storage::save_listing(env, item_id, &listing);

    ListingChangedEventData {
        item_id,
        price: 0,
        active: false,
    }
    .publish(env);

    Ok(())
}

pub fn buy_item(env: &Env, buyer: Address, item_id: u64) -> Result<(), Error> {
    buyer.require_auth();
    let config = storage::get_config(env).ok_or(Error::NotInitialized)?;

    let mut listing = match storage::get_listing(env, item_id) {
        Some(listing) if listing.active => listing,
        _ => return Err(Error::NotListed),
    };
    if listing.seller == buyer {
        return Err(Error::SameParty);
    }

    // Single-step settlement: the price moves straight from the buyer's
    // pre-authorized allowance to the seller, no payment escrow.
    let token = token::TokenClient::new(env, &config.payment_token);
    token.transfer_from(
        &env.current_contract_address(),
        &buyer,
        &listing.seller,
        &listing.price,
    );

    let registry = ItemRegistryClient::new(env, &config.item_registry);
    registry.transfer(&env.current_contract_address(), &buyer, &item_id);

    listing.active = false;
    storage::save_listing(env, item_id, &listing);

    BuyCompletedEventData {
        item_id,
        buyer,
        price: listing.price,
    }
    .publish(env);

    Ok(())
}
