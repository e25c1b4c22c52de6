use crate::types::{Auction, DataKey, Listing, MarketplaceConfig};
use soroban_sdk::Env;

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Option<MarketplaceConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &MarketplaceConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_listing(env: &Env, item_id: u64) -> Option<Listing> {
    let key = DataKey::Listing(item_id);
    env.storage().persistent().get(&key)
}

pub fn save_listing(env: &Env, item_id: u64, listing: &Listing) {
    let key = DataKey::Listing(item_id);
    env.storage().persistent().set(&key, listing);
}

pub fn listing_active(env: &Env, item_id: u64) -> bool {
    match get_listing(env, item_id) {
        Some(listing) => listing.active,
        None => false,
    }
}

pub fn get_auction(env: &Env, item_id: u64) -> Option<Auction> {
    let key = DataKey::Auction(item_id);
    env.storage().persistent().get(&key)
}

pub fn save_auction(env: &Env, item_id: u64, auction: &Auction) {
    let key = DataKey::Auction(item_id);
    env.storage().persistent().set(&key, auction);
}

pub fn auction_active(env: &Env, item_id: u64) -> bool {
    match get_auction(env, item_id) {
        Some(auction) => auction.active,
        None => false,
    }
}
