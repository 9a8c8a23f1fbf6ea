use soroban_sdk::Env;
use crate::storage;
use crate::types::Failure;

// ============================================================================
// REENTRANCY GUARD (RAII)
// ============================================================================

/// Lock de reentrância com escopo.
///
/// `acquire` falha com [`Failure::ReentrantCall`] se o lock já está tomado.
/// O lock é liberado no `Drop`, então qualquer saída da função protegida
/// (retorno normal, `?` ou erro) devolve o contrato ao estado destravado.
pub struct ReentrancyGuard<'a> {
    env: &'a Env,
}

impl<'a> ReentrancyGuard<'a> {
    pub fn acquire(env: &'a Env) -> Result<Self, Failure> {
        if storage::is_reentrancy_locked(env) {
            return Err(Failure::ReentrantCall);
        }
        storage::set_reentrancy_guard(env, true);
        Ok(Self { env })
    }
}

impl Drop for ReentrancyGuard<'_> {
    fn drop(&mut self) {
        storage::set_reentrancy_guard(self.env, false);
    }
}
