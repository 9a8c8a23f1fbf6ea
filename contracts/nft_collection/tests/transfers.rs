#![cfg(test)]
#![cfg(not(tarpaulin_include))]
use nft_collection::CollectionError;
use setup::{TestEnv, PRICE};
use soroban_sdk::testutils::{storage::Instance as _, Address as _, Ledger};
use soroban_sdk::Address;

// TTL aplicado pelo contrato ao storage de instância
const INSTANCE_TTL: u32 = 6_307_200;

#[test]
fn test_holder_transfers_minted_token() {
    let t = TestEnv::new();
    let ana = t.buyer(0);
    let stranger = Address::generate(&t.env);
    t.client.mint(&ana, &PRICE);

    // Transferências secundárias não passam pela allowlist
    t.client.transfer(&ana, &stranger, &0);

    assert_eq!(t.client.owner_of(&0), stranger);
    assert_eq!(t.client.balance(&ana), 0);
    assert_eq!(t.client.balance(&stranger), 1);
    assert_eq!(t.client.minted_by(&ana), 1);
}

#[test]
fn test_non_holder_cannot_transfer() {
    let t = TestEnv::new();
    let ana = t.buyer(0);
    let john = t.buyer(1);
    t.client.mint(&ana, &PRICE);

    let res = t.client.try_transfer(&john, &john, &0);
    assert_eq!(res.unwrap_err().unwrap(), CollectionError::IncorrectOwner);

    let res = t.client.try_transfer(&ana, &john, &5);
    assert_eq!(res.unwrap_err().unwrap(), CollectionError::NonExistentToken);
}

#[test]
fn test_approved_spender_moves_token_once() {
    let t = TestEnv::new();
    let ana = t.buyer(0);
    let market = Address::generate(&t.env);
    let buyer = Address::generate(&t.env);
    t.client.mint(&ana, &PRICE);

    let res = t.client.try_transfer_from(&market, &ana, &buyer, &0);
    assert_eq!(res.unwrap_err().unwrap(), CollectionError::InsufficientApproval);

    t.client.approve(&ana, &market, &0);
    assert_eq!(t.client.get_approved(&0), Some(market.clone()));

    t.client.transfer_from(&market, &ana, &buyer, &0);
    assert_eq!(t.client.owner_of(&0), buyer);
    assert_eq!(t.client.get_approved(&0), None);

    let res = t.client.try_transfer_from(&market, &buyer, &ana, &0);
    assert_eq!(res.unwrap_err().unwrap(), CollectionError::InsufficientApproval);
}

#[test]
fn test_operator_for_all_tokens() {
    let t = TestEnv::new();
    let ana = t.buyer(0);
    let operator = Address::generate(&t.env);
    let vault = Address::generate(&t.env);
    t.client.mint(&ana, &PRICE);
    t.client.mint(&ana, &PRICE);

    t.client.approve_for_all(&ana, &operator, &true);
    assert!(t.client.is_approved_for_all(&ana, &operator));

    t.client.transfer_from(&operator, &ana, &vault, &0);
    t.client.transfer_from(&operator, &ana, &vault, &1);
    assert_eq!(t.client.balance(&vault), 2);

    t.client.approve_for_all(&ana, &operator, &false);
    assert!(!t.client.is_approved_for_all(&ana, &operator));
}

#[test]
fn test_get_approved_unknown_token() {
    let t = TestEnv::new();
    let res = t.client.try_get_approved(&3);
    assert_eq!(res.unwrap_err().unwrap(), CollectionError::NonExistentToken);
}

#[test]
fn test_secondary_trading_keeps_instance_alive() {
    let t = TestEnv::new();
    let ana = t.buyer(0);
    let john = t.buyer(1);
    t.client.mint(&ana, &PRICE);

    // Leituras estendem as entradas persistentes do token e do saldo
    assert_eq!(t.client.owner_of(&0), ana);
    assert_eq!(t.client.balance(&ana), 1);

    // Avança até a instância ficar abaixo do threshold de bump
    t.env.ledger().with_mut(|info| {
        info.sequence_number += 5_800_000;
    });
    let remaining = t.env.as_contract(&t.contract_id, || t.env.storage().instance().get_ttl());
    assert_eq!(remaining, INSTANCE_TTL - 5_800_000);

    // Nenhum mint nem saque: só mercado secundário
    t.client.transfer(&ana, &john, &0);

    let remaining = t.env.as_contract(&t.contract_id, || t.env.storage().instance().get_ttl());
    assert_eq!(remaining, INSTANCE_TTL);
    assert_eq!(t.client.owner_of(&0), john);
}
