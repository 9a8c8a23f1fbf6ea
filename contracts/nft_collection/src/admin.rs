use soroban_sdk::{Address, Env};
use crate::events;
use crate::storage;
use crate::types::Failure;
use crate::validation;

// ============================================================================
// OWNERSHIP
// ============================================================================

/// Passa o controle do contrato (e do saque) para `new_owner`.
pub fn transfer_ownership(env: &Env, caller: &Address, new_owner: &Address) -> Result<(), Failure> {
    validation::require_owner(env, caller)?;
    storage::bump_critical_storage(env);

    storage::set_owner(env, new_owner);
    events::emit_ownership_transferred(env, caller, new_owner);

    Ok(())
}
