// 🛡️ Guards & Getters - boolean checks and flat-error parses per validator
//
// `is_*` never fails; `get_*` returns the branded value or `InvalidAmount`.
// Both go through the same validator, so is_x(v) == get_x(v).is_ok().

use crate::amount::{amount, Amount, AmountKind, AmountValidator, NumericInput};
use crate::error::InvalidAmount;
use crate::options::AmountOptions;
use crate::specialized::{
    crypto_amount, monetary_amount, percentage, whole_amount, CryptoAmount, MonetaryAmount,
    Percentage, WholeAmount,
};

fn guarded<K: AmountKind, I: NumericInput>(
    validator: AmountValidator<K>,
    value: I,
) -> Result<Amount<K>, InvalidAmount> {
    validator.parse(&value).map_err(|error| {
        log::debug!("Rejected {} {}: {}", K::LABEL, value.describe(), error);
        InvalidAmount {
            label: K::LABEL,
            value: value.describe(),
        }
    })
}

// ============================================================================
// AMOUNT
// ============================================================================

pub fn is_amount<I: NumericInput>(value: I, options: &AmountOptions) -> bool {
    amount(options).accepts(value)
}

pub fn get_amount<I: NumericInput>(value: I, options: &AmountOptions) -> Result<Amount, InvalidAmount> {
    guarded(amount(options), value)
}

// ============================================================================
// MONETARY AMOUNT
// ============================================================================

pub fn is_monetary_amount<I: NumericInput>(value: I, options: &AmountOptions) -> bool {
    monetary_amount(options).accepts(value)
}

pub fn get_monetary_amount<I: NumericInput>(
    value: I,
    options: &AmountOptions,
) -> Result<MonetaryAmount, InvalidAmount> {
    guarded(monetary_amount(options), value)
}

// ============================================================================
// PERCENTAGE
// ============================================================================

pub fn is_percentage<I: NumericInput>(value: I, options: &AmountOptions) -> bool {
    percentage(options).accepts(value)
}

pub fn get_percentage<I: NumericInput>(value: I, options: &AmountOptions) -> Result<Percentage, InvalidAmount> {
    guarded(percentage(options), value)
}

// ============================================================================
// WHOLE AMOUNT
// ============================================================================

pub fn is_whole_amount<I: NumericInput>(value: I, options: &AmountOptions) -> bool {
    whole_amount(options).accepts(value)
}

pub fn get_whole_amount<I: NumericInput>(value: I, options: &AmountOptions) -> Result<WholeAmount, InvalidAmount> {
    guarded(whole_amount(options), value)
}

// ============================================================================
// CRYPTO AMOUNT
// ============================================================================

pub fn is_crypto_amount<I: NumericInput>(value: I, options: &AmountOptions) -> bool {
    crypto_amount(options).accepts(value)
}

pub fn get_crypto_amount<I: NumericInput>(value: I, options: &AmountOptions) -> Result<CryptoAmount, InvalidAmount> {
    guarded(crypto_amount(options), value)
}

// ============================================================================
// TESTS
// ============================================================================
