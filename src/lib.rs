// Amount Kit - Core Library
// Branded amount validators for tokenized-asset forms, shared by the CLI, API server and tests

pub mod precision;
pub mod error;
pub mod options;
pub mod amount;
pub mod specialized;
pub mod helpers;
pub mod registry;

#[cfg(feature = "server")]
pub mod server;

// Re-export commonly used types
pub use error::{
    IssueCode, ValidationIssue, ValidationError, InvalidAmount, UnknownKind,
};
pub use options::{
    AmountOptions, ErrorMessages, MAX_SAFE_INTEGER,
};
pub use amount::{
    amount, Amount, AmountKind, AmountValidator, NumericInput, Plain, SafeParse,
};
pub use specialized::{
    monetary_amount, percentage, whole_amount, crypto_amount,
    Monetary, Percent, Whole, Crypto,
    MonetaryAmount, Percentage, WholeAmount, CryptoAmount,
    ValidatorKind,
};
pub use helpers::{
    is_amount, get_amount,
    is_monetary_amount, get_monetary_amount,
    is_percentage, get_percentage,
    is_whole_amount, get_whole_amount,
    is_crypto_amount, get_crypto_amount,
};
pub use registry::{
    SchemaRegistry, SchemaDefinition, SchemaType, register_amount_schemas,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
