pub mod mint_test;

use soroban_sdk::{
    testutils::{Address as _, Ledger, LedgerInfo},
    token, Address, Env, String,
};

use crate::{Marketplace, MarketplaceClient};
use item_registry::{ItemRegistry, ItemRegistryClient};

pub const INITIAL_BALANCE: i128 = 100;
pub const ITEM_PRICE: i128 = 2;
pub const AUCTION_PERIOD: u64 = 3 * 24 * 60 * 60;

pub struct Setup {
    pub env: Env,
    pub marketplace: MarketplaceClient<'static>,
    pub marketplace_address: Address,
    pub registry: ItemRegistryClient<'static>,
    pub token: token::TokenClient<'static>,
    pub admin: Address,
    pub account1: Address,
    pub account2: Address,
    pub account3: Address,
}

pub fn setup_test() -> Setup {
    let env = Env::default();
    env.mock_all_auths();

    env.ledger().set(LedgerInfo {
        timestamp: 1000,
        protocol_version: 23,
        sequence_number: 1,
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: 100,
        min_persistent_entry_ttl: 100,
        max_entry_ttl: 1000000,
    });

    let admin = Address::generate(&env);
    let account1 = Address::generate(&env);
    let account2 = Address::generate(&env);
    let account3 = Address::generate(&env);

    let registry_address = env.register(ItemRegistry, ());
    let registry = ItemRegistryClient::new(&env, &registry_address);
    registry.initialize(&admin);

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin.clone());
    let token_address = token_contract.address();
    let token = token::TokenClient::new(&env, &token_address);
    let token_admin_client = token::StellarAssetClient::new(&env, &token_address);

    let marketplace_address = env.register(Marketplace, ());
    let marketplace = MarketplaceClient::new(&env, &marketplace_address);
    marketplace.initialize(&admin, &registry_address, &token_address);
    registry.grant_minter_role(&admin, &marketplace_address);

    for account in [&account1, &account2, &account3] {
        token_admin_client.mint(account, &INITIAL_BALANCE);
        token.approve(account, &marketplace_address, &INITIAL_BALANCE, &1000);
    }

    Setup {
        env,
        marketplace,
        marketplace_address,
        registry,
        token,
        admin,
        account1,
        account2,
        account3,
    }
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().set(LedgerInfo {
        timestamp: env.ledger().timestamp() + seconds,
        protocol_version: 23,
        sequence_number: env.ledger().sequence(),
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: 100,
        min_persistent_entry_ttl: 100,
        max_entry_ttl: 1000000,
    });
}

pub fn mint_item(s: &Setup, to: &Address) -> u64 {
    let uri = String::from_str(&s.env, "https://ipfs.metadata/1");
    s.marketplace.create_item(&uri, to)
}
