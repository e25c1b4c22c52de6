use soroban_sdk::{token, Address, Env};

use crate::errors::Error;
use crate::events::{AuctionFinishedEventData, AuctionListedEventData, BidPlacedEventData};
use crate::registry::ItemRegistryClient;
use crate::storage;
use crate::types::{Auction, Bid, BidState};

pub fn list_item_on_auction(
    env: &Env,
    seller: Address,
    item_id: u64,
    start_price: i128,
) -> Result<(), Error> {
    seller.require_auth();
    let config = storage::get_config(env).ok_or(Error::NotInitialized)?;

    if start_price <= 0 {
        return Err(Error::InvalidPrice);
    }
    if storage::auction_active(env, item_id) {
        return Err(Error::AlreadyOnAuction);
    }
    if storage::listing_active(env, item_id) {
        return Err(Error::AlreadyListed);
    }

    let registry = ItemRegistryClient::new(env, &config.item_registry);
    registry.transfer(&seller, &env.current_contract_address(), &item_id);

    // Policy is captured here; later admin updates do not reach this lot.
    let auction = Auction {
        seller,
        start_price,
        highest: BidState::NoBid,
        bid_count: 0,
        end_time: env.ledger().timestamp() + config.auction_period,
        min_participants: config.auction_min_participants,
        active: true,
    };
    storage::save_auction(env, item_id, &auction);

    AuctionListedEventData {
        item_id,
        start_price,
    }
    .publish(env);

    Ok(())
}

pub fn make_bid(env: &Env, bidder: Address, item_id: u64, amount: i128) -> Result<(), Error> {
    bidder.require_auth();
    let config = storage::get_config(env).ok_or(Error::NotInitialized)?;

    let mut auction = match storage::get_auction(env, item_id) {
        Some(auction) if auction.active => auction,
        _ => return Err(Error::NotOnAuction),
    };
    if env.ledger().timestamp() >= auction.end_time {
        return Err(Error::AuctionExpired);
    }
    // The first bid must exceed the start price, every later bid the
    // current highest.
    if amount <= auction.current_price() {
        return Err(Error::BidTooLow);
    }

    let token = token::TokenClient::new(env, &config.payment_token);
    let contract = env.current_contract_address();

    // Refund the outbid account in full, then escrow the new bid, so the
    // held balance for this auction always equals the highest bid.
    if let BidState::Placed(previous) = &auction.highest {
        token.transfer(&contract, &previous.bidder, &previous.amount);
    }
    token.transfer_from(&contract, &bidder, &contract, &amount);

    auction.highest = BidState::Placed(Bid {
        bidder: bidder.clone(),
        amount,
    });
    auction.bid_count += 1;
    storage::save_auction(env, item_id, &auction);

    BidPlacedEventData {
        item_id,
        bidder,
        amount,
    }
    .publish(env);

    Ok(())
}

/// Settle an expired auction. Callable by anyone; the outcome depends only
/// on the stored auction and the clock.
pub fn finish_auction(env: &Env, item_id: u64) -> Result<(), Error> {
    let config = storage::get_config(env).ok_or(Error::NotInitialized)?;

    let mut auction = match storage::get_auction(env, item_id) {
        Some(auction) if auction.active => auction,
        _ => return Err(Error::NotOnAuction),
    };
    if env.ledger().timestamp() < auction.end_time {
        return Err(Error::TooEarly);
    }

    let registry = ItemRegistryClient::new(env, &config.item_registry);
    let token = token::TokenClient::new(env, &config.payment_token);
    let contract = env.current_contract_address();

    let (winner, amount) = match &auction.highest {
        BidState::Placed(bid) if auction.bid_count >= auction.min_participants => {
            registry.transfer(&contract, &bid.bidder, &item_id);
            token.transfer(&contract, &auction.seller, &bid.amount);
            (bid.bidder.clone(), bid.amount)
        }
        BidState::Placed(bid) => {
            // Not enough participants: unwind the lot in full.
            token.transfer(&contract, &bid.bidder, &bid.amount);
            registry.transfer(&contract, &auction.seller, &item_id);
            (auction.seller.clone(), 0)
        }
        BidState::NoBid => {
            registry.transfer(&contract, &auction.seller, &item_id);
            (auction.seller.clone(), 0)
        }
    };

    auction.active = false;
    storage::save_auction(env, item_id, &auction);

    AuctionFinishedEventData {
        item_id,
        winner,
        amount,
    }
    .publish(env);

    Ok(())
}
