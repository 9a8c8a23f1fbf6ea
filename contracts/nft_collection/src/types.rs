use soroban_sdk::{contracterror, log, Address, Env};

// ============================================================================
// ERROS DO CONTRATO
// ============================================================================

/// Códigos de erro expostos na fronteira do contrato.
///
/// Os valores são estáveis: clientes off-chain fazem match pelo número.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CollectionError {
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Mint
    NotAllowed = 3,
    MaxNftsPerAddressReached = 4,
    MaximumTotalSupplyReached = 5,
    NotEnoughPrice = 6,

    // Tesouraria / ownership
    OwnableUnauthorizedAccount = 7,
    ReentrantCall = 8,
    InvalidAmount = 9,

    // NFT padrão
    NonExistentToken = 10,
    IncorrectOwner = 11,
    InsufficientApproval = 12,
    TokenAlreadyMinted = 13,

    InvalidBaseUri = 14,
    MathOverflow = 15,
}

// ============================================================================
// FALHAS INTERNAS (COM PAYLOAD)
// ============================================================================

/// Falha de uma operação interna, carregando o valor que a causou.
///
/// `#[contracterror]` só aceita enums sem payload, então os módulos internos
/// trabalham com `Failure` e a conversão para `CollectionError` acontece na
/// borda, em [`Failure::report`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Failure {
    NotAllowed(Address),
    MaxNftsPerAddressReached(Address),
    MaximumTotalSupplyReached,
    NotEnoughPrice(i128),
    OwnableUnauthorizedAccount(Address),
    ReentrantCall,
    InvalidAmount(i128),
    NonExistentToken(u32),
    IncorrectOwner(Address),
    InsufficientApproval(Address),
    TokenAlreadyMinted(u32),
    InvalidBaseUri,
    MathOverflow,
}

impl Failure {
    /// Código de erro correspondente na fronteira.
    pub fn code(&self) -> CollectionError {
        match self {
            Failure::NotAllowed(_) => CollectionError::NotAllowed,
            Failure::MaxNftsPerAddressReached(_) => CollectionError::MaxNftsPerAddressReached,
            Failure::MaximumTotalSupplyReached => CollectionError::MaximumTotalSupplyReached,
            Failure::NotEnoughPrice(_) => CollectionError::NotEnoughPrice,
            Failure::OwnableUnauthorizedAccount(_) => CollectionError::OwnableUnauthorizedAccount,
            Failure::ReentrantCall => CollectionError::ReentrantCall,
            Failure::InvalidAmount(_) => CollectionError::InvalidAmount,
            Failure::NonExistentToken(_) => CollectionError::NonExistentToken,
            Failure::IncorrectOwner(_) => CollectionError::IncorrectOwner,
            Failure::InsufficientApproval(_) => CollectionError::InsufficientApproval,
            Failure::TokenAlreadyMinted(_) => CollectionError::TokenAlreadyMinted,
            Failure::InvalidBaseUri => CollectionError::InvalidBaseUri,
            Failure::MathOverflow => CollectionError::MathOverflow,
        }
    }

    /// Registra o payload no log de diagnóstico e devolve o código.
    pub fn report(self, env: &Env) -> CollectionError {
        match &self {
            Failure::NotAllowed(account) => log!(env, "not allowed", account.clone()),
            Failure::MaxNftsPerAddressReached(account) => {
                log!(env, "max nfts per address reached", account.clone())
            }
            Failure::NotEnoughPrice(paid) => log!(env, "not enough price", *paid),
            Failure::OwnableUnauthorizedAccount(account) => {
                log!(env, "unauthorized account", account.clone())
            }
            Failure::ReentrantCall => log!(env, "reentrant call"),
            Failure::InvalidAmount(amount) => log!(env, "invalid amount", *amount),
            Failure::NonExistentToken(token_id) => log!(env, "non existent token", *token_id),
            Failure::IncorrectOwner(account) => log!(env, "incorrect owner", account.clone()),
            Failure::InsufficientApproval(account) => {
                log!(env, "insufficient approval", account.clone())
            }
            Failure::TokenAlreadyMinted(token_id) => log!(env, "token already minted", *token_id),
            Failure::MaximumTotalSupplyReached
            | Failure::InvalidBaseUri
            | Failure::MathOverflow => {}
        }
        self.code()
    }
}
