mod transaction;

pub use transaction::{Transaction, TransactionKind};

#[cfg(test)]
mod tests;
