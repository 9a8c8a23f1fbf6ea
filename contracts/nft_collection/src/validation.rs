use soroban_sdk::{Address, Env, String};
use crate::storage;
use crate::types::Failure;

// ============================================================================
// VALIDAÇÕES DO MINT (a ordem de chamada define qual erro aparece primeiro)
// ============================================================================

/// Valida se o endereço está na allowlist
pub fn require_allowed(env: &Env, caller: &Address) -> Result<(), Failure> {
    if !storage::is_allowed(env, caller) {
        return Err(Failure::NotAllowed(caller.clone()));
    }
    Ok(())
}

/// Valida se o endereço ainda pode mintar mais um NFT
pub fn require_quota_available(env: &Env, caller: &Address) -> Result<(), Failure> {
    let minted = storage::get_minted_by(env, caller);
    if minted >= storage::MAX_NFTS_PER_ADDRESS {
        return Err(Failure::MaxNftsPerAddressReached(caller.clone()));
    }
    Ok(())
}

/// Valida se o supply total não será excedido
pub fn require_supply_available(env: &Env) -> Result<(), Failure> {
    if storage::get_token_ids(env) >= storage::TOTAL_SUPPLY {
        return Err(Failure::MaximumTotalSupplyReached);
    }
    Ok(())
}

/// Valida se o pagamento cobre o preço
pub fn require_sufficient_payment(payment: i128) -> Result<(), Failure> {
    if payment < storage::NFT_PRICE {
        return Err(Failure::NotEnoughPrice(payment));
    }
    Ok(())
}

// ============================================================================
// VALIDAÇÕES GERAIS
// ============================================================================

/// Valida se o caller é o owner do contrato
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), Failure> {
    if caller != &storage::get_owner(env) {
        return Err(Failure::OwnableUnauthorizedAccount(caller.clone()));
    }
    Ok(())
}

/// Valida se o amount é válido (> 0)
pub fn require_positive_amount(amount: i128) -> Result<(), Failure> {
    if amount <= 0 {
        return Err(Failure::InvalidAmount(amount));
    }
    Ok(())
}

/// Valida a base URI recebida no initialize
pub fn require_valid_base_uri(uri: &String) -> Result<(), Failure> {
    let len = uri.len();
    if len > storage::MAX_BASE_URI_LEN {
        return Err(Failure::InvalidBaseUri);
    }
    let mut buf = [0u8; storage::MAX_BASE_URI_LEN as usize];
    let bytes = &mut buf[..len as usize];
    uri.copy_into_slice(bytes);
    if core::str::from_utf8(bytes).is_err() {
        return Err(Failure::InvalidBaseUri);
    }
    Ok(())
}
