use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};
use crate::admin;
use crate::ledger;
use crate::metadata;
use crate::nft;
use crate::storage;
use crate::treasury;
use crate::types::CollectionError;
use crate::validation;

//
// CONTRATO PRINCIPAL - NFT COLLECTION
//

#[contract]
pub struct NftCollection;

#[contractimpl]
impl NftCollection {

    //
    // INICIALIZAÇÃO
    //

    /// Inicializa a coleção.
    ///
    /// # Parâmetros
    /// - `owner`: Endereço que pode sacar a tesouraria
    /// - `payment_token`: Contrato SEP-41 usado para pagamento (ex: XLM nativo)
    /// - `base_uri`: Prefixo das URIs dos tokens
    /// - `allowlist`: Endereços autorizados a mintar. Duplicatas são ignoradas
    ///   e a lista não muda mais depois daqui.
    ///
    /// # Erros
    /// - `AlreadyInitialized`: Se o contrato já foi inicializado
    /// - `InvalidBaseUri`: URI longa demais ou fora de UTF-8
    pub fn initialize(
        env: Env,
        owner: Address,
        payment_token: Address,
        base_uri: String,
        allowlist: Vec<Address>,
    ) -> Result<(), CollectionError> {
        // CHECKS
        if storage::is_initialized(&env) {
            return Err(CollectionError::AlreadyInitialized);
        }
        owner.require_auth();
        validation::require_valid_base_uri(&base_uri).map_err(|f| f.report(&env))?;

        // EFFECTS
        storage::set_owner(&env, &owner);
        storage::set_payment_token(&env, &payment_token);
        storage::set_base_uri(&env, &base_uri);
        storage::set_token_ids(&env, 0);

        let mut size: u32 = 0;
        for addr in allowlist.iter() {
            if storage::add_to_allowlist(&env, &addr) {
                size += 1;
            }
        }
        storage::set_allowlist_size(&env, size);
        storage::bump_critical_storage(&env);

        Ok(())
    }

    //
    // LEDGER DA COLEÇÃO
    //

    /// Minta um NFT para `caller` pagando `payment` no ativo de pagamento.
    ///
    /// Validações, nesta ordem: allowlist, cota por endereço, supply total,
    /// preço. O excesso sobre `NFT_PRICE` é devolvido na mesma chamada.
    /// Retorna o id mintado.
    pub fn mint(env: Env, caller: Address, payment: i128) -> Result<u32, CollectionError> {
        caller.require_auth();
        storage::bump_critical_storage(&env);

        ledger::mint(&env, &caller, payment).map_err(|f| f.report(&env))
    }

    /// Quantidade de tokens mintados até agora.
    pub fn token_ids(env: Env) -> u32 {
        storage::bump_critical_storage(&env);
        ledger::token_ids(&env)
    }

    pub fn minted_by(env: Env, addr: Address) -> u32 {
        storage::bump_critical_storage(&env);
        ledger::minted_by(&env, &addr)
    }

    pub fn is_allowed(env: Env, addr: Address) -> bool {
        storage::bump_critical_storage(&env);
        storage::is_allowed(&env, &addr)
    }

    pub fn allowlist_size(env: Env) -> u32 {
        storage::bump_critical_storage(&env);
        storage::get_allowlist_size(&env)
    }

    //
    // TESOURARIA
    //

    /// Saca todo o saldo para o owner. Protegido contra reentrância.
    pub fn withdraw(env: Env, caller: Address) -> Result<i128, CollectionError> {
        caller.require_auth();
        storage::bump_critical_storage(&env);

        treasury::withdraw(&env, &caller).map_err(|f| f.report(&env))
    }

    /// Envia `amount` do ativo de pagamento direto para a tesouraria.
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<(), CollectionError> {
        from.require_auth();
        storage::bump_critical_storage(&env);

        treasury::deposit(&env, &from, amount).map_err(|f| f.report(&env))
    }

    pub fn treasury_balance(env: Env) -> i128 {
        storage::bump_critical_storage(&env);
        treasury::balance(&env)
    }

    //
    // CONFIGURAÇÃO FIXA (Leitura)
    //

    pub fn name(env: Env) -> String {
        String::from_str(&env, storage::NAME)
    }

    pub fn symbol(env: Env) -> String {
        String::from_str(&env, storage::SYMBOL)
    }

    /// TOTAL_SUPPLY
    pub fn total_supply(_env: Env) -> u32 {
        storage::TOTAL_SUPPLY
    }

    /// NFT_PRICE, em stroops
    pub fn nft_price(_env: Env) -> i128 {
        storage::NFT_PRICE
    }

    pub fn max_per_address(_env: Env) -> u32 {
        storage::MAX_NFTS_PER_ADDRESS
    }

    pub fn payment_token(env: Env) -> Address {
        storage::bump_critical_storage(&env);
        storage::get_payment_token(&env)
    }

    pub fn base_uri(env: Env) -> String {
        storage::bump_critical_storage(&env);
        storage::get_base_uri(&env)
    }

    pub fn token_uri(env: Env, token_id: u32) -> Result<String, CollectionError> {
        storage::bump_critical_storage(&env);
        metadata::token_uri(&env, token_id).map_err(|f| f.report(&env))
    }

    //
    // OWNERSHIP
    //

    pub fn owner(env: Env) -> Address {
        storage::bump_critical_storage(&env);
        storage::get_owner(&env)
    }

    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), CollectionError> {
        caller.require_auth();
        storage::bump_critical_storage(&env);
        admin::transfer_ownership(&env, &caller, &new_owner).map_err(|f| f.report(&env))
    }

    //
    // NFT PADRÃO (SEP-50)
    //

    pub fn balance(env: Env, owner: Address) -> u32 {
        storage::bump_critical_storage(&env);
        nft::balance(&env, &owner)
    }

    pub fn owner_of(env: Env, token_id: u32) -> Result<Address, CollectionError> {
        storage::bump_critical_storage(&env);
        nft::owner_of(&env, token_id).map_err(|f| f.report(&env))
    }

    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        token_id: u32,
    ) -> Result<(), CollectionError> {
        from.require_auth();
        storage::bump_critical_storage(&env);
        nft::transfer(&env, &from, &to, token_id).map_err(|f| f.report(&env))
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u32,
    ) -> Result<(), CollectionError> {
        spender.require_auth();
        storage::bump_critical_storage(&env);
        nft::transfer_from(&env, &spender, &from, &to, token_id).map_err(|f| f.report(&env))
    }

    pub fn approve(
        env: Env,
        approver: Address,
        approved: Address,
        token_id: u32,
    ) -> Result<(), CollectionError> {
        approver.require_auth();
        storage::bump_critical_storage(&env);
        nft::approve(&env, &approver, &approved, token_id).map_err(|f| f.report(&env))
    }

    pub fn approve_for_all(env: Env, owner: Address, operator: Address, approved: bool) {
        owner.require_auth();
        storage::bump_critical_storage(&env);
        nft::approve_for_all(&env, &owner, &operator, approved);
    }

    pub fn get_approved(env: Env, token_id: u32) -> Result<Option<Address>, CollectionError> {
        storage::bump_critical_storage(&env);
        nft::get_approved(&env, token_id).map_err(|f| f.report(&env))
    }

    pub fn is_approved_for_all(env: Env, owner: Address, operator: Address) -> bool {
        storage::bump_critical_storage(&env);
        nft::is_approved_for_all(&env, &owner, &operator)
    }
}
