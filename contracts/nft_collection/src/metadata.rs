use soroban_sdk::{Env, String};
use crate::nft;
use crate::storage;
use crate::types::Failure;

// Maior u32 tem 10 dígitos decimais
const MAX_ID_DIGITS: usize = 10;

/// URI do token: base URI seguida do id em decimal.
pub fn token_uri(env: &Env, token_id: u32) -> Result<String, Failure> {
    nft::owner_of(env, token_id)?;

    let base = storage::get_base_uri(env);
    let base_len = base.len() as usize;
    // initialize já limita o tamanho; o buffer abaixo depende disso
    if base_len > storage::MAX_BASE_URI_LEN as usize {
        return Err(Failure::InvalidBaseUri);
    }

    let mut buf = [0u8; storage::MAX_BASE_URI_LEN as usize + MAX_ID_DIGITS];
    base.copy_into_slice(&mut buf[..base_len]);
    let len = base_len + write_decimal(&mut buf[base_len..], token_id);

    let uri = core::str::from_utf8(&buf[..len]).map_err(|_| Failure::InvalidBaseUri)?;
    Ok(String::from_str(env, uri))
}

/// Escreve `value` em decimal no começo de `out` e retorna quantos bytes usou.
fn write_decimal(out: &mut [u8], mut value: u32) -> usize {
    let mut digits = [0u8; MAX_ID_DIGITS];
    let mut n = 0;
    loop {
        digits[n] = b'0' + (value % 10) as u8;
        n += 1;
        value /= 10;
        if value == 0 {
            break;
        }
    }
    for (i, digit) in digits[..n].iter().rev().enumerate() {
        out[i] = *digit;
    }
    n
}
