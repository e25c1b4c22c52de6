use soroban_sdk::{contracttype, Address, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryInitializedEvent {
    pub admin: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemMintedEvent {
    pub item_id: u64,
    pub owner: Address,
    pub uri: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemTransferredEvent {
    pub item_id: u64,
    pub from: Address,
    pub to: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MinterGrantedEvent {
    pub minter: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MinterRevokedEvent {
    pub minter: Address,
}

pub fn emit_registry_initialized(env: &Env, admin: Address) {
    let event = RegistryInitializedEvent { admin: admin.clone() };
    env.events().publish(("registry_initialized", admin), event);
}

pub fn emit_item_minted(env: &Env, item_id: u64, owner: Address, uri: String) {
    let event = ItemMintedEvent {
        item_id,
        owner: owner.clone(),
        uri,
    };
    env.events().publish(("item_minted", item_id), event);
}

pub fn emit_item_transferred(env: &Env, item_id: u64, from: Address, to: Address) {
    let event = ItemTransferredEvent { item_id, from, to };
    env.events().publish(("item_transferred", item_id), event);
}

pub fn emit_minter_granted(env: &Env, minter: Address) {
    let event = MinterGrantedEvent {
        minter: minter.clone(),
    };
    env.events().publish(("minter_granted", minter), event);
}

pub fn emit_minter_revoked(env: &Env, minter: Address) {
    let event = MinterRevokedEvent {
        minter: minter.clone(),
    };
    env.events().publish(("minter_revoked", minter), event);
}
