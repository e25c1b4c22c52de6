use soroban_sdk::String;

use crate::errors::Error;
use crate::test::{mint_item, setup_test};

#[test]
fn test_create_item_for_specified_account() {
    let s = setup_test();

    let uri = String::from_str(&s.env, "https://ipfs.metadata/1");
    let item_id = s.marketplace.create_item(&uri, &s.account1);

    assert_eq!(item_id, 1);
    assert_eq!(s.registry.owner_of(&item_id), s.account1);
    assert_eq!(s.registry.item_uri(&item_id), uri);
}

#[test]
fn test_create_item_assigns_sequential_ids() {
    let s = setup_test();

    assert_eq!(mint_item(&s, &s.account1), 1);
    assert_eq!(mint_item(&s, &s.account2), 2);
    assert_eq!(s.registry.total_items(), 2);
    assert_eq!(s.registry.owner_of(&2), s.account2);
}

#[test]
fn test_create_item_without_minter_role() {
    let s = setup_test();
    s.registry
        .revoke_minter_role(&s.admin, &s.marketplace_address);

    let uri = String::from_str(&s.env, "https://ipfs.metadata/1");
    let result = s.marketplace.try_create_item(&uri, &s.account1);
    assert_eq!(result, Err(Ok(Error::CollaboratorFailure)));
}
