use crate::types::{DataKey, Item};
use soroban_sdk::{Address, Env};

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn get_admin(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Admin).unwrap()
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_item_counter(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ItemCounter)
        .unwrap_or(0)
}

pub fn increment_item_counter(env: &Env) -> u64 {
    let counter = get_item_counter(env) + 1;
    env.storage().instance().set(&DataKey::ItemCounter, &counter);
    counter
}

pub fn get_item(env: &Env, item_id: u64) -> Option<Item> {
    let key = DataKey::Item(item_id);
    env.storage().persistent().get(&key)
}

pub fn set_item(env: &Env, item_id: u64, item: &Item) {
    let key = DataKey::Item(item_id);
    env.storage().persistent().set(&key, item);
}

pub fn is_minter(env: &Env, who: &Address) -> bool {
    let key = DataKey::Minter(who.clone());
    env.storage().persistent().has(&key)
}

pub fn add_minter(env: &Env, who: &Address) {
    let key = DataKey::Minter(who.clone());
    env.storage().persistent().set(&key, &true);
}

pub fn remove_minter(env: &Env, who: &Address) {
    let key = DataKey::Minter(who.clone());
    env.storage().persistent().remove(&key);
}
