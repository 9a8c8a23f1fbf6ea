use soroban_sdk::{Address, Env};
use crate::events;
use crate::storage;
use crate::types::Failure;

// ============================================================================
// NFT PADRÃO (estilo SEP-50)
// ============================================================================
//
// Componente reutilizável de posse de tokens não fungíveis. Não sabe nada de
// allowlist, preço ou supply: quem cria ids novos é o ledger da coleção, que
// chama `mint` aqui. A autenticação (`require_auth`) fica na borda do contrato.

/// Registra `token_id` como pertencente a `to` e emite `transfer` com `from = None`.
pub fn mint(env: &Env, to: &Address, token_id: u32) -> Result<(), Failure> {
    if storage::get_token_owner(env, token_id).is_some() {
        return Err(Failure::TokenAlreadyMinted(token_id));
    }

    let balance = storage::get_nft_balance(env, to)
        .checked_add(1)
        .ok_or(Failure::MathOverflow)?;

    storage::set_token_owner(env, token_id, to);
    storage::set_nft_balance(env, to, balance);

    events::emit_transfer(env, None, to, token_id);
    Ok(())
}

pub fn owner_of(env: &Env, token_id: u32) -> Result<Address, Failure> {
    storage::get_token_owner(env, token_id).ok_or(Failure::NonExistentToken(token_id))
}

pub fn balance(env: &Env, owner: &Address) -> u32 {
    storage::get_nft_balance(env, owner)
}

/// Transferência iniciada pelo próprio dono.
pub fn transfer(env: &Env, from: &Address, to: &Address, token_id: u32) -> Result<(), Failure> {
    let owner = owner_of(env, token_id)?;
    if &owner != from {
        return Err(Failure::IncorrectOwner(from.clone()));
    }
    move_token(env, from, to, token_id)
}

/// Transferência feita por `spender` com aprovação do dono.
pub fn transfer_from(
    env: &Env,
    spender: &Address,
    from: &Address,
    to: &Address,
    token_id: u32,
) -> Result<(), Failure> {
    let owner = owner_of(env, token_id)?;
    if &owner != from {
        return Err(Failure::IncorrectOwner(from.clone()));
    }
    if !can_manage(env, &owner, spender, token_id) {
        return Err(Failure::InsufficientApproval(spender.clone()));
    }
    move_token(env, from, to, token_id)
}

/// Aprova `approved` para um único token. `approver` deve ser o dono ou operador.
pub fn approve(
    env: &Env,
    approver: &Address,
    approved: &Address,
    token_id: u32,
) -> Result<(), Failure> {
    let owner = owner_of(env, token_id)?;
    if approver != &owner && !storage::is_operator(env, &owner, approver) {
        return Err(Failure::InsufficientApproval(approver.clone()));
    }

    storage::set_approved(env, token_id, approved);
    events::emit_approve(env, &owner, approved, token_id);
    Ok(())
}

pub fn approve_for_all(env: &Env, owner: &Address, operator: &Address, approved: bool) {
    storage::set_operator(env, owner, operator, approved);
    events::emit_approve_for_all(env, owner, operator, approved);
}

pub fn get_approved(env: &Env, token_id: u32) -> Result<Option<Address>, Failure> {
    owner_of(env, token_id)?;
    Ok(storage::get_approved(env, token_id))
}

pub fn is_approved_for_all(env: &Env, owner: &Address, operator: &Address) -> bool {
    storage::is_operator(env, owner, operator)
}

// ============================================================================
// FUNÇÕES AUXILIARES
// ============================================================================

fn can_manage(env: &Env, owner: &Address, spender: &Address, token_id: u32) -> bool {
    if spender == owner || storage::is_operator(env, owner, spender) {
        return true;
    }
    storage::get_approved(env, token_id).as_ref() == Some(spender)
}

fn move_token(env: &Env, from: &Address, to: &Address, token_id: u32) -> Result<(), Failure> {
    if from == to {
        events::emit_transfer(env, Some(from.clone()), to, token_id);
        return Ok(());
    }

    let from_balance = storage::get_nft_balance(env, from)
        .checked_sub(1)
        .ok_or(Failure::MathOverflow)?;
    let to_balance = storage::get_nft_balance(env, to)
        .checked_add(1)
        .ok_or(Failure::MathOverflow)?;

    storage::remove_approved(env, token_id);
    storage::set_token_owner(env, token_id, to);
    storage::set_nft_balance(env, from, from_balance);
    storage::set_nft_balance(env, to, to_balance);

    events::emit_transfer(env, Some(from.clone()), to, token_id);
    Ok(())
}
