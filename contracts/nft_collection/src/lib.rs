#![no_std]

pub mod storage;
pub mod types;
mod validation;
mod guard;
mod events;
mod nft;
mod metadata;
mod ledger;
mod treasury;
mod admin;
pub mod collection;

// ============================================================================
// CONTRATO PRINCIPAL
// ============================================================================

pub use collection::{NftCollection, NftCollectionClient};
pub use types::*;
