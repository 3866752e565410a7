//! Operation formatting for logs and diagnostics

use pubdata_spec::{DepositOp, Operation, RegistryOp};

/// Format an operation as one line of text
pub fn format(op: &Operation) -> String {
    match op {
        Operation::Registry(RegistryOp {
            account_id,
            public_key,
        }) => {
            let sign = if public_key.sign() { '-' } else { '+' };
            format!(
                "registry account={} sign={} ay={:#x}",
                account_id,
                sign,
                public_key.ay()
            )
        }
        Operation::Deposit(DepositOp {
            account_id,
            token_id,
            amount,
        }) => format!(
            "deposit account={} token={} amount={}",
            account_id, token_id, amount
        ),
    }
}
