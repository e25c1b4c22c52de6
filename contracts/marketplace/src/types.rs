use soroban_sdk::{contracttype, Address};

/// Storage keys for the marketplace contract.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Contract-wide configuration
    Config,
    /// Fixed-price listing by item id
    Listing(u64),
    /// Auction by item id
    Auction(u64),
}

/// Collaborator addresses plus the administrator-controlled auction policy.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketplaceConfig {
    pub admin: Address,
    pub item_registry: Address,
    pub payment_token: Address,
    pub auction_period: u64,
    pub auction_min_participants: u32,
}

/// Fixed-price listing for a single item. While active, the marketplace
/// holds custody of the item.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Listing {
    pub seller: Address,
    pub price: i128,
    pub active: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bid {
    pub bidder: Address,
    pub amount: i128,
}

/// Highest claim on an auction. A bid of exactly the start price is a real
/// bid and stays distinguishable from "no bid yet".
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BidState {
    NoBid,
    Placed(Bid),
}

/// English auction for a single item. `end_time` and `min_participants`
/// are fixed when the item is listed; later policy updates do not reach
/// auctions already in flight.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub seller: Address,
    pub start_price: i128,
    pub highest: BidState,
    pub bid_count: u32,
    pub end_time: u64,
    pub min_participants: u32,
    pub active: bool,
}

impl Auction {
    /// The amount the next bid must strictly exceed.
    pub fn current_price(&self) -> i128 {
        match &self.highest {
            BidState::NoBid => self.start_price,
            BidState::Placed(bid) => bid.amount,
        }
    }
}
