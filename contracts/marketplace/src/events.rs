use soroban_sdk::{contractevent, Address, String};

/// Event emitted when the marketplace is initialized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEventData {
    #[topic]
    pub admin: Address,
    pub item_registry: Address,
    pub payment_token: Address,
}

/// Event emitted when a new item is minted through the gateway
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemCreatedEventData {
    #[topic]
    pub item_id: u64,
    pub owner: Address,
    pub uri: String,
}

/// Event emitted when a fixed-price listing is opened or closed.
/// A closed listing reports price 0 and active = false.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListingChangedEventData {
    #[topic]
    pub item_id: u64,
    pub price: i128,
    pub active: bool,
}

/// Event emitted when a fixed-price sale settles
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BuyCompletedEventData {
    #[topic]
    pub item_id: u64,
    pub buyer: Address,
    pub price: i128,
}

/// Event emitted when an item goes on auction
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionListedEventData {
    #[topic]
    pub item_id: u64,
    pub start_price: i128,
}

/// Event emitted when a bid is accepted
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlacedEventData {
    #[topic]
    pub item_id: u64,
    pub bidder: Address,
    pub amount: i128,
}

/// Event emitted when an auction settles. A no-sale outcome reports the
/// seller as winner with amount 0.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionFinishedEventData {
    #[topic]
    pub item_id: u64,
    pub winner: Address,
    pub amount: i128,
}

/// Event emitted when the auction period is updated
#[contractevent(topics = ["auction_period_updated"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionPeriodUpdatedEventData {
    #[topic]
    pub admin: Address,
    pub period: u64,
}

/// Event emitted when the participant threshold is updated
#[contractevent(topics = ["min_participants_updated"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MinParticipantsUpdatedEventData {
    #[topic]
    pub admin: Address,
    pub count: u32,
}
