use soroban_sdk::{token, Address, Env};
use crate::events;
use crate::guard::ReentrancyGuard;
use crate::nft;
use crate::storage;
use crate::types::Failure;
use crate::validation;

// ============================================================================
// LEDGER DA COLEÇÃO - MINT (CEI)
// ============================================================================

/// Minta o próximo id sequencial para `caller`, cobrando `payment` no ativo de
/// pagamento e devolvendo o que passar de `NFT_PRICE`.
///
/// Retorna o id mintado. Qualquer erro aborta a chamada inteira e o host
/// desfaz storage e transferências.
pub fn mint(env: &Env, caller: &Address, payment: i128) -> Result<u32, Failure> {
    let _lock = ReentrancyGuard::acquire(env)?;

    // === CHECKS ===
    validation::require_allowed(env, caller)?;
    validation::require_quota_available(env, caller)?;
    validation::require_supply_available(env)?;
    validation::require_sufficient_payment(payment)?;

    // === EFFECTS ===
    let token_id = storage::get_token_ids(env);
    let next_id = token_id.checked_add(1).ok_or(Failure::MathOverflow)?;
    let minted = storage::get_minted_by(env, caller)
        .checked_add(1)
        .ok_or(Failure::MathOverflow)?;

    nft::mint(env, caller, token_id)?;
    storage::set_token_ids(env, next_id);
    storage::set_minted_by(env, caller, minted);

    // === INTERACTIONS ===
    let asset = token::Client::new(env, &storage::get_payment_token(env));
    let this = env.current_contract_address();
    asset.transfer(caller, &this, &payment);

    let excess = payment - storage::NFT_PRICE;
    if excess > 0 {
        asset.transfer(&this, caller, &excess);
        events::emit_refund(env, caller, excess);
    }

    Ok(token_id)
}

/// Quantidade de tokens já emitidos (também o próximo id).
pub fn token_ids(env: &Env) -> u32 {
    storage::get_token_ids(env)
}

pub fn minted_by(env: &Env, addr: &Address) -> u32 {
    storage::get_minted_by(env, addr)
}
