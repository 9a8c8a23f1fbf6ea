use soroban_sdk::{token, Address, Env};
use crate::events;
use crate::guard::ReentrancyGuard;
use crate::storage;
use crate::types::Failure;
use crate::validation;

// ============================================================================
// TESOURARIA
// ============================================================================

/// Saldo do contrato no ativo de pagamento.
pub fn balance(env: &Env) -> i128 {
    let asset = token::Client::new(env, &storage::get_payment_token(env));
    asset.balance(&env.current_contract_address())
}

/// Envia todo o saldo da tesouraria para o owner.
///
/// Só o owner pode chamar (`OwnableUnauthorizedAccount`). O lock fica tomado
/// durante a transferência, que é o ponto em que o destinatário ganha controle;
/// uma chamada aninhada encontra o lock e falha com `ReentrantCall`.
/// Saldo zero é um no-op bem sucedido. Retorna o valor sacado.
pub fn withdraw(env: &Env, caller: &Address) -> Result<i128, Failure> {
    validation::require_owner(env, caller)?;
    let _lock = ReentrancyGuard::acquire(env)?;

    let amount = balance(env);
    if amount == 0 {
        return Ok(0);
    }

    let owner = storage::get_owner(env);
    let asset = token::Client::new(env, &storage::get_payment_token(env));
    asset.transfer(&env.current_contract_address(), &owner, &amount);

    events::emit_withdraw(env, &owner, amount);
    Ok(amount)
}

/// Depósito direto de `amount` vindo de `from`.
pub fn deposit(env: &Env, from: &Address, amount: i128) -> Result<(), Failure> {
    validation::require_positive_amount(amount)?;

    let asset = token::Client::new(env, &storage::get_payment_token(env));
    asset.transfer(from, &env.current_contract_address(), &amount);

    events::emit_deposit(env, from, amount);
    Ok(())
}
