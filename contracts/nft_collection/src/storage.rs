use soroban_sdk::{panic_with_error, symbol_short, Address, Env, String};
use crate::types::CollectionError;

// ============================================================================
// CONSTANTES
// ============================================================================

/// Nome fixo da coleção
pub const NAME: &str = "NFT Collection";

/// Símbolo fixo da coleção
pub const SYMBOL: &str = "NFTC";

/// Supply máximo da coleção (ids 0..=9)
pub const TOTAL_SUPPLY: u32 = 10;

/// Preço unitário: 0.05 do ativo nativo com 7 decimais
pub const NFT_PRICE: i128 = 500_000; // 0.05 × 10^7

/// Limite de NFTs mintados por endereço
pub const MAX_NFTS_PER_ADDRESS: u32 = 2;

/// Tamanho máximo da base URI, em bytes
pub const MAX_BASE_URI_LEN: u32 = 200;

/// TTL para storage crítico (1 ano em ledgers ~= 6.3M ledgers)
const CRITICAL_STORAGE_TTL: u32 = 6_307_200;

/// TTL threshold para bump (30 dias ~= 518K ledgers)
const CRITICAL_STORAGE_THRESHOLD: u32 = 518_400;

// ============================================================================
// FUNÇÕES DE BUMP (TTL)
// ============================================================================

/// Faz bump do TTL do storage de instância (owner, contadores, lock, config)
pub fn bump_critical_storage(env: &Env) {
    env.storage().instance().extend_ttl(
        CRITICAL_STORAGE_THRESHOLD,
        CRITICAL_STORAGE_TTL,
    );
}

fn bump_persistent<K>(env: &Env, key: &K)
where
    K: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    if env.storage().persistent().has(key) {
        env.storage().persistent().extend_ttl(
            key,
            CRITICAL_STORAGE_THRESHOLD,
            CRITICAL_STORAGE_TTL,
        );
    }
}

// ============================================================================
// INICIALIZAÇÃO
// ============================================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&symbol_short!("owner"))
}

// ============================================================================
// OWNER
// ============================================================================

pub fn get_owner(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&symbol_short!("owner"))
        .unwrap_or_else(|| panic_with_error!(env, CollectionError::NotInitialized))
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&symbol_short!("owner"), owner);
}

// ============================================================================
// CONFIGURAÇÃO (ATIVO DE PAGAMENTO E BASE URI)
// ============================================================================

pub fn get_payment_token(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&symbol_short!("pay_tok"))
        .unwrap_or_else(|| panic_with_error!(env, CollectionError::NotInitialized))
}

pub fn set_payment_token(env: &Env, token: &Address) {
    env.storage().instance().set(&symbol_short!("pay_tok"), token);
}

pub fn get_base_uri(env: &Env) -> String {
    env.storage()
        .instance()
        .get(&symbol_short!("base_uri"))
        .unwrap_or_else(|| panic_with_error!(env, CollectionError::NotInitialized))
}

pub fn set_base_uri(env: &Env, uri: &String) {
    env.storage().instance().set(&symbol_short!("base_uri"), uri);
}

// ============================================================================
// CONTADOR DE TOKENS EMITIDOS
// ============================================================================

pub fn get_token_ids(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&symbol_short!("token_ids"))
        .unwrap_or(0)
}

pub fn set_token_ids(env: &Env, count: u32) {
    env.storage().instance().set(&symbol_short!("token_ids"), &count);
}

// ============================================================================
// ALLOWLIST (imutável após initialize)
// ============================================================================

pub fn is_allowed(env: &Env, addr: &Address) -> bool {
    let key = (symbol_short!("allowed"), addr);
    bump_persistent(env, &key);
    env.storage().persistent().get(&key).unwrap_or(false)
}

/// Só é chamado por `initialize`. Retorna `false` se o endereço já estava na lista.
pub fn add_to_allowlist(env: &Env, addr: &Address) -> bool {
    let key = (symbol_short!("allowed"), addr);
    if env.storage().persistent().has(&key) {
        return false;
    }
    env.storage().persistent().set(&key, &true);
    true
}

pub fn get_allowlist_size(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&symbol_short!("allow_cnt"))
        .unwrap_or(0)
}

pub fn set_allowlist_size(env: &Env, size: u32) {
    env.storage().instance().set(&symbol_short!("allow_cnt"), &size);
}

// ============================================================================
// MINTS POR ENDEREÇO
// ============================================================================

pub fn get_minted_by(env: &Env, addr: &Address) -> u32 {
    let key = (symbol_short!("minted"), addr);
    bump_persistent(env, &key);
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_minted_by(env: &Env, addr: &Address, count: u32) {
    let key = (symbol_short!("minted"), addr);
    env.storage().persistent().set(&key, &count);
}

// ============================================================================
// REENTRANCY LOCK
// ============================================================================

pub fn is_reentrancy_locked(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&symbol_short!("locked"))
        .unwrap_or(false)
}

pub fn set_reentrancy_guard(env: &Env, locked: bool) {
    env.storage().instance().set(&symbol_short!("locked"), &locked);
}

// ============================================================================
// NFT: DONOS, SALDOS E APROVAÇÕES
// ============================================================================

pub fn get_token_owner(env: &Env, token_id: u32) -> Option<Address> {
    let key = (symbol_short!("owner_of"), token_id);
    bump_persistent(env, &key);
    env.storage().persistent().get(&key)
}

pub fn set_token_owner(env: &Env, token_id: u32, owner: &Address) {
    let key = (symbol_short!("owner_of"), token_id);
    env.storage().persistent().set(&key, owner);
}

pub fn get_nft_balance(env: &Env, owner: &Address) -> u32 {
    let key = (symbol_short!("nft_bal"), owner);
    bump_persistent(env, &key);
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_nft_balance(env: &Env, owner: &Address, balance: u32) {
    let key = (symbol_short!("nft_bal"), owner);
    env.storage().persistent().set(&key, &balance);
}

pub fn get_approved(env: &Env, token_id: u32) -> Option<Address> {
    let key = (symbol_short!("approved"), token_id);
    bump_persistent(env, &key);
    env.storage().persistent().get(&key)
}

pub fn set_approved(env: &Env, token_id: u32, approved: &Address) {
    let key = (symbol_short!("approved"), token_id);
    env.storage().persistent().set(&key, approved);
}

pub fn remove_approved(env: &Env, token_id: u32) {
    let key = (symbol_short!("approved"), token_id);
    env.storage().persistent().remove(&key);
}

pub fn is_operator(env: &Env, owner: &Address, operator: &Address) -> bool {
    let key = (symbol_short!("operator"), owner, operator);
    bump_persistent(env, &key);
    env.storage().persistent().get(&key).unwrap_or(false)
}

pub fn set_operator(env: &Env, owner: &Address, operator: &Address, approved: bool) {
    let key = (symbol_short!("operator"), owner, operator);
    if approved {
        env.storage().persistent().set(&key, &true);
    } else {
        env.storage().persistent().remove(&key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NftCollection;
    use soroban_sdk::testutils::{storage::Persistent as _, Address as _};

    #[test]
    fn test_approval_reads_extend_ttl() {
        let env = Env::default();
        let contract_id = env.register_contract(None, NftCollection);
        let owner = Address::generate(&env);
        let spender = Address::generate(&env);

        env.as_contract(&contract_id, || {
            set_approved(&env, 0, &spender);
            set_operator(&env, &owner, &spender, true);

            let approved_key = (symbol_short!("approved"), 0u32);
            let operator_key = (symbol_short!("operator"), &owner, &spender);
            assert!(env.storage().persistent().get_ttl(&approved_key) < CRITICAL_STORAGE_THRESHOLD);
            assert!(env.storage().persistent().get_ttl(&operator_key) < CRITICAL_STORAGE_THRESHOLD);

            assert_eq!(get_approved(&env, 0), Some(spender.clone()));
            assert!(is_operator(&env, &owner, &spender));

            assert_eq!(env.storage().persistent().get_ttl(&approved_key), CRITICAL_STORAGE_TTL);
            assert_eq!(env.storage().persistent().get_ttl(&operator_key), CRITICAL_STORAGE_TTL);
        });
    }
}
