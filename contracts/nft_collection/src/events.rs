use soroban_sdk::{Address, Env, symbol_short};

//
// EVENTOS DA COLEÇÃO
//

// Transferência de NFT (from = None no mint)
pub fn emit_transfer(env: &Env, from: Option<Address>, to: &Address, token_id: u32) {
    env.events().publish(
        (symbol_short!("transfer"), from, to),
        token_id,
    );
}

// Aprovação de um token específico
pub fn emit_approve(env: &Env, owner: &Address, approved: &Address, token_id: u32) {
    env.events().publish(
        (symbol_short!("approve"), owner, approved),
        token_id,
    );
}

// Operador para todos os tokens do owner
pub fn emit_approve_for_all(env: &Env, owner: &Address, operator: &Address, approved: bool) {
    env.events().publish(
        (symbol_short!("appr_all"), owner, operator),
        approved,
    );
}

// Devolução do excesso pago no mint
pub fn emit_refund(env: &Env, to: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("refund"), to),
        amount,
    );
}

// Depósito direto na tesouraria
pub fn emit_deposit(env: &Env, from: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("deposit"), from),
        amount,
    );
}

// Saque do owner
pub fn emit_withdraw(env: &Env, to: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("withdraw"), to),
        amount,
    );
}

// Troca de owner
pub fn emit_ownership_transferred(env: &Env, previous: &Address, new_owner: &Address) {
    env.events().publish(
        (symbol_short!("own_xfer"), previous),
        new_owner.clone(),
    );
}

//
// TESTES
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NftCollection;
    use soroban_sdk::{testutils::Address as _, testutils::Events, vec, Env, IntoVal};

    #[test]
    fn test_emit_transfer() {
        let env = Env::default();
        let contract_id = env.register_contract(None, NftCollection);
        let a = Address::generate(&env);
        let b = Address::generate(&env);
        env.as_contract(&contract_id, || {
            emit_transfer(&env, None, &a, 0);
            emit_transfer(&env, Some(a.clone()), &b, 0);
        });
        assert_eq!(env.events().all().len(), 2);
    }

    #[test]
    fn test_approvals() {
        let env = Env::default();
        let contract_id = env.register_contract(None, NftCollection);
        let o = Address::generate(&env);
        let s = Address::generate(&env);
        env.as_contract(&contract_id, || {
            emit_approve(&env, &o, &s, 3);
            emit_approve_for_all(&env, &o, &s, true);
        });
        assert_eq!(env.events().all().len(), 2);
    }

    #[test]
    fn test_treasury_events() {
        let env = Env::default();
        let contract_id = env.register_contract(None, NftCollection);
        let a = Address::generate(&env);
        env.as_contract(&contract_id, || {
            emit_refund(&env, &a, 500_000);
            emit_deposit(&env, &a, 10_000_000);
            emit_withdraw(&env, &a, 10_500_000);
        });

        let expected = vec![
            &env,
            (
                contract_id.clone(),
                (symbol_short!("refund"), a.clone()).into_val(&env),
                500_000_i128.into_val(&env),
            ),
            (
                contract_id.clone(),
                (symbol_short!("deposit"), a.clone()).into_val(&env),
                10_000_000_i128.into_val(&env),
            ),
            (
                contract_id.clone(),
                (symbol_short!("withdraw"), a.clone()).into_val(&env),
                10_500_000_i128.into_val(&env),
            ),
        ];
        assert_eq!(env.events().all(), expected);
    }

    #[test]
    fn test_ownership() {
        let env = Env::default();
        let contract_id = env.register_contract(None, NftCollection);
        let a = Address::generate(&env);
        let b = Address::generate(&env);
        env.as_contract(&contract_id, || {
            emit_ownership_transferred(&env, &a, &b);
        });
        assert_eq!(env.events().all().len(), 1);
    }
}
