use soroban_sdk::contracterror;

/// Error codes for the marketplace contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Contract has not been initialized
    NotInitialized = 2,
    /// Caller is not the configured admin
    Unauthorized = 3,
    /// Price must be strictly positive
    InvalidPrice = 4,
    /// An active fixed-price listing already exists for the item
    AlreadyListed = 5,
    /// An active auction already exists for the item
    AlreadyOnAuction = 6,
    /// No active fixed-price listing for the item
    NotListed = 7,
    /// No active auction for the item
    NotOnAuction = 8,
    /// Caller is not the seller of an active listing
    NotPermitted = 9,
    /// Seller and buyer must differ
    SameParty = 10,
    /// Bid does not exceed the current price
    BidTooLow = 11,
    /// Auction deadline has passed, bids are no longer accepted
    AuctionExpired = 12,
    /// Auction deadline has not passed yet
    TooEarly = 13,
    /// Auction period must be non-zero
    InvalidDuration = 14,
    /// A registry call failed; the deployment is misconfigured
    CollaboratorFailure = 15,
}
