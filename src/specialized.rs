// 🎯 Specialized Validators - fixed configurations of the base validator
//
//   monetary_amount  2 decimals
//   percentage       0..=100, 2 decimals, zero allowed
//   whole_amount     integers only
//   crypto_amount    18 decimals

use std::fmt;
use std::str::FromStr;

use crate::amount::{amount, Amount, AmountKind, AmountValidator, NumericInput, Plain, SafeParse};
use crate::error::{UnknownKind, ValidationError};
use crate::options::AmountOptions;
use crate::registry::SchemaDefinition;

pub const MONETARY_DECIMALS: u32 = 2;
pub const PERCENTAGE_DECIMALS: u32 = 2;
pub const CRYPTO_DECIMALS: u32 = 18;

// ============================================================================
// BRANDS
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Monetary;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percent;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Whole;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Crypto;

pub type MonetaryAmount = Amount<Monetary>;
pub type Percentage = Amount<Percent>;
pub type WholeAmount = Amount<Whole>;
pub type CryptoAmount = Amount<Crypto>;

impl AmountKind for Monetary {
    const LABEL: &'static str = "monetary amount";

    fn default_validator() -> AmountValidator<Self> {
        monetary_amount(&AmountOptions::default())
    }
}

impl AmountKind for Percent {
    const LABEL: &'static str = "percentage";

    fn default_validator() -> AmountValidator<Self> {
        percentage(&AmountOptions::default())
    }
}

impl AmountKind for Whole {
    const LABEL: &'static str = "whole amount";

    fn default_validator() -> AmountValidator<Self> {
        whole_amount(&AmountOptions::default())
    }
}

impl AmountKind for Crypto {
    const LABEL: &'static str = "crypto amount";

    fn default_validator() -> AmountValidator<Self> {
        crypto_amount(&AmountOptions::default())
    }
}

// ============================================================================
// FACTORIES
// ============================================================================

/// Currency-style amount: 2 decimals, minimum 0.01 unless zero is allowed.
pub fn monetary_amount(options: &AmountOptions) -> AmountValidator<Monetary> {
    let resolved = options.clone().with_decimals(MONETARY_DECIMALS);
    AmountValidator::from_options(&resolved)
}

/// 0 to 100 inclusive with 2 decimals. Only the error messages are configurable.
pub fn percentage(options: &AmountOptions) -> AmountValidator<Percent> {
    let resolved = AmountOptions::new()
        .with_min(0.0)
        .with_max(100.0)
        .with_decimals(PERCENTAGE_DECIMALS)
        .allow_zero(true)
        .with_error_messages(options.error_messages.clone());
    AmountValidator::from_options(&resolved)
}

/// Integer counts. Fractional input fails with `NotAWholeNumber` before any bound check.
pub fn whole_amount(options: &AmountOptions) -> AmountValidator<Whole> {
    let resolved = options.clone().with_decimals(0);
    AmountValidator::from_options(&resolved).require_whole()
}

/// Token quantities with up to 18 decimals.
pub fn crypto_amount(options: &AmountOptions) -> AmountValidator<Crypto> {
    let resolved = options.clone().with_decimals(CRYPTO_DECIMALS);
    AmountValidator::from_options(&resolved)
}

// ============================================================================
// RUNTIME DISPATCH
// ============================================================================

/// Validator selected by name, for callers that only know the kind at runtime
/// (CLI arguments, HTTP paths).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidatorKind {
    Amount,
    MonetaryAmount,
    Percentage,
    WholeAmount,
    CryptoAmount,
}

impl ValidatorKind {
    pub const ALL: [ValidatorKind; 5] = [
        ValidatorKind::Amount,
        ValidatorKind::MonetaryAmount,
        ValidatorKind::Percentage,
        ValidatorKind::WholeAmount,
        ValidatorKind::CryptoAmount,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ValidatorKind::Amount => Plain::LABEL,
            ValidatorKind::MonetaryAmount => Monetary::LABEL,
            ValidatorKind::Percentage => Percent::LABEL,
            ValidatorKind::WholeAmount => Whole::LABEL,
            ValidatorKind::CryptoAmount => Crypto::LABEL,
        }
    }

    /// Registry ID
    pub fn schema_id(&self) -> &'static str {
        match self {
            ValidatorKind::Amount => "amount",
            ValidatorKind::MonetaryAmount => "monetaryAmount",
            ValidatorKind::Percentage => "percentage",
            ValidatorKind::WholeAmount => "wholeAmount",
            ValidatorKind::CryptoAmount => "cryptoAmount",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ValidatorKind::Amount => "Amount",
            ValidatorKind::MonetaryAmount => "Monetary Amount",
            ValidatorKind::Percentage => "Percentage",
            ValidatorKind::WholeAmount => "Whole Amount",
            ValidatorKind::CryptoAmount => "Crypto Amount",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ValidatorKind::Amount => "Positive finite number within the configured bounds",
            ValidatorKind::MonetaryAmount => "Monetary value with at most 2 decimal places",
            ValidatorKind::Percentage => "Percentage between 0 and 100 with at most 2 decimal places",
            ValidatorKind::WholeAmount => "Whole number of units",
            ValidatorKind::CryptoAmount => "Token quantity with up to 18 decimal places",
        }
    }

    pub fn examples(&self) -> &'static [f64] {
        match self {
            ValidatorKind::Amount => &[100.0, 1234.56],
            ValidatorKind::MonetaryAmount => &[100.0, 1234.56],
            ValidatorKind::Percentage => &[5.0, 12.5, 100.0],
            ValidatorKind::WholeAmount => &[1.0, 100.0],
            ValidatorKind::CryptoAmount => &[1.0, 0.000000000000000001, 1000.555],
        }
    }

    /// Validate `input` with this kind's validator, built from `options`.
    pub fn check<I: NumericInput>(&self, input: I, options: &AmountOptions) -> Result<f64, ValidationError> {
        match self {
            ValidatorKind::Amount => amount(options).parse(input).map(Amount::get),
            ValidatorKind::MonetaryAmount => monetary_amount(options).parse(input).map(Amount::get),
            ValidatorKind::Percentage => percentage(options).parse(input).map(Amount::get),
            ValidatorKind::WholeAmount => whole_amount(options).parse(input).map(Amount::get),
            ValidatorKind::CryptoAmount => crypto_amount(options).parse(input).map(Amount::get),
        }
    }

    /// Non-failing variant of [`ValidatorKind::check`], re-branded as a plain amount.
    pub fn safe_parse<I: NumericInput>(&self, input: I, options: &AmountOptions) -> SafeParse<Plain> {
        match self {
            ValidatorKind::Amount => amount(options).safe_parse(input),
            ValidatorKind::MonetaryAmount => monetary_amount(options).safe_parse(input).widen(),
            ValidatorKind::Percentage => percentage(options).safe_parse(input).widen(),
            ValidatorKind::WholeAmount => whole_amount(options).safe_parse(input).widen(),
            ValidatorKind::CryptoAmount => crypto_amount(options).safe_parse(input).widen(),
        }
    }

    /// Schema metadata for this kind under `options`
    pub fn schema(&self, options: &AmountOptions) -> SchemaDefinition {
        let (id, title) = (self.schema_id(), self.title());
        match self {
            ValidatorKind::Amount => amount(options).schema(id, title),
            ValidatorKind::MonetaryAmount => monetary_amount(options).schema(id, title),
            ValidatorKind::Percentage => percentage(options).schema(id, title),
            ValidatorKind::WholeAmount => whole_amount(options).schema(id, title),
            ValidatorKind::CryptoAmount => crypto_amount(options).schema(id, title),
        }
    }
}

impl fmt::Display for ValidatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.schema_id())
    }
}

impl FromStr for ValidatorKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "amount" => Ok(ValidatorKind::Amount),
            "monetary" | "monetaryamount" => Ok(ValidatorKind::MonetaryAmount),
            "percent" | "percentage" => Ok(ValidatorKind::Percentage),
            "whole" | "wholeamount" => Ok(ValidatorKind::WholeAmount),
            "crypto" | "cryptoamount" => Ok(ValidatorKind::CryptoAmount),
            _ => Err(UnknownKind(s.to_string())),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IssueCode;
    use rstest::rstest;

    fn defaults() -> AmountOptions {
        AmountOptions::default()
    }

    // ------------------------------------------------------------------
    // monetary_amount
    // ------------------------------------------------------------------

    #[test]
    fn test_monetary_two_decimals() {
        let validator = monetary_amount(&defaults());
        assert_eq!(validator.parse(10.99).unwrap(), 10.99);
        assert!(validator.parse(10.999).unwrap_err().has(IssueCode::TooManyDecimals));
    }

    #[test]
    fn test_monetary_minimum() {
        let validator = monetary_amount(&defaults());
        assert_eq!(validator.minimum(), 0.01);
        assert_eq!(validator.parse(0.01).unwrap(), 0.01);
        assert!(validator.parse(0.0).unwrap_err().has(IssueCode::BelowMinimum));
    }

    #[test]
    fn test_monetary_allow_zero() {
        let validator = monetary_amount(&AmountOptions::new().allow_zero(true));
        assert_eq!(validator.parse(0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_monetary_ignores_decimals_override() {
        let validator = monetary_amount(&AmountOptions::new().with_decimals(6));
        assert_eq!(validator.decimals(), Some(MONETARY_DECIMALS));
    }

    // ------------------------------------------------------------------
    // percentage
    // ------------------------------------------------------------------

    #[rstest]
    #[case(0.0)]
    #[case(12.5)]
    #[case(99.99)]
    #[case(100.0)]
    fn test_percentage_accepts(#[case] value: f64) {
        assert_eq!(percentage(&defaults()).parse(value).unwrap(), value);
    }

    #[rstest]
    #[case(100.01, IssueCode::AboveMaximum)]
    #[case(-0.01, IssueCode::BelowMinimum)]
    #[case(50.125, IssueCode::TooManyDecimals)]
    fn test_percentage_rejects(#[case] value: f64, #[case] code: IssueCode) {
        let err = percentage(&defaults()).parse(value).unwrap_err();
        assert_eq!(err.codes(), vec![code]);
    }

    #[test]
    fn test_percentage_bounds_are_fixed() {
        let validator = percentage(&AmountOptions::new().with_min(10.0).with_max(500.0).allow_zero(false));
        assert_eq!(validator.minimum(), 0.0);
        assert_eq!(validator.maximum(), 100.0);
        assert!(validator.parse(0.0).is_ok());
    }

    #[test]
    fn test_percentage_keeps_custom_messages() {
        let validator = percentage(&AmountOptions::new().with_max_message("Cannot exceed 100%"));
        assert_eq!(validator.parse(150.0).unwrap_err().to_string(), "Cannot exceed 100%");
    }

    // ------------------------------------------------------------------
    // whole_amount
    // ------------------------------------------------------------------

    #[test]
    fn test_whole_rejects_fraction_first() {
        let err = whole_amount(&defaults()).parse(10.5).unwrap_err();
        // NotAWholeNumber alone, not TooManyDecimals
        assert_eq!(err.codes(), vec![IssueCode::NotAWholeNumber]);
        assert_eq!(err.to_string(), "Amount must be a whole number");
    }

    #[test]
    fn test_whole_fraction_below_minimum_still_not_whole() {
        let err = whole_amount(&defaults()).parse(0.5).unwrap_err();
        assert_eq!(err.codes(), vec![IssueCode::NotAWholeNumber]);
    }

    #[test]
    fn test_whole_zero() {
        assert!(whole_amount(&defaults()).parse(0.0).unwrap_err().has(IssueCode::BelowMinimum));
        assert_eq!(whole_amount(&AmountOptions::new().allow_zero(true)).parse(0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_whole_accepts_integers() {
        let validator = whole_amount(&AmountOptions::new().with_max(1000.0));
        assert_eq!(validator.parse(1.0).unwrap(), 1.0);
        assert_eq!(validator.parse(1000_u32).unwrap(), 1000.0);
        assert!(validator.parse(1001.0).unwrap_err().has(IssueCode::AboveMaximum));
    }

    // ------------------------------------------------------------------
    // crypto_amount
    // ------------------------------------------------------------------

    #[test]
    fn test_crypto_eighteen_decimals() {
        let validator = crypto_amount(&defaults());
        assert_eq!(validator.parse(0.000000000000000001).unwrap(), 1e-18);
        assert_eq!(validator.parse(1000.555).unwrap(), 1000.555);
    }

    #[test]
    fn test_crypto_nineteenth_decimal() {
        let err = crypto_amount(&defaults()).parse(0.0000000000000000015).unwrap_err();
        assert_eq!(err.codes(), vec![IssueCode::TooManyDecimals]);
    }

    #[test]
    fn test_crypto_below_smallest_unit() {
        let err = crypto_amount(&defaults()).parse(1e-19).unwrap_err();
        assert!(err.has(IssueCode::BelowMinimum));
    }

    #[test]
    fn test_crypto_unrepresentable_digit_collapses() {
        // 1.0000000000000000001 is exactly 1.0 as an f64
        assert!(crypto_amount(&defaults()).parse(1.0000000000000000001).is_ok());
    }

    // ------------------------------------------------------------------
    // dispatch
    // ------------------------------------------------------------------

    #[rstest]
    #[case("amount", ValidatorKind::Amount)]
    #[case("monetary", ValidatorKind::MonetaryAmount)]
    #[case("monetaryAmount", ValidatorKind::MonetaryAmount)]
    #[case("monetary-amount", ValidatorKind::MonetaryAmount)]
    #[case("Percentage", ValidatorKind::Percentage)]
    #[case("whole_amount", ValidatorKind::WholeAmount)]
    #[case("crypto", ValidatorKind::CryptoAmount)]
    fn test_kind_from_str(#[case] name: &str, #[case] expected: ValidatorKind) {
        assert_eq!(name.parse::<ValidatorKind>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_kind() {
        let err = "bitcoin".parse::<ValidatorKind>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown validator kind: bitcoin");
    }

    #[test]
    fn test_kind_display_roundtrips() {
        for kind in ValidatorKind::ALL {
            assert_eq!(kind.to_string().parse::<ValidatorKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_dispatch_matches_factories() {
        let options = defaults();
        assert!(ValidatorKind::MonetaryAmount.check(10.999, &options).is_err());
        assert_eq!(ValidatorKind::CryptoAmount.check(10.999, &options).unwrap(), 10.999);

        let outcome = ValidatorKind::WholeAmount.safe_parse(2.5, &options);
        assert!(!outcome.success);
        assert!(outcome.error.unwrap().has(IssueCode::NotAWholeNumber));
    }

    #[test]
    fn test_specialized_amount_widens() {
        let monetary: MonetaryAmount = monetary_amount(&defaults()).parse(25.5).unwrap();
        let plain: Amount = monetary.as_amount();
        assert_eq!(plain.get(), 25.5);
    }

    #[test]
    fn test_specialized_deserialize_uses_kind_defaults() {
        let ok: MonetaryAmount = serde_json::from_str("19.99").unwrap();
        assert_eq!(ok, 19.99);
        assert!(serde_json::from_str::<MonetaryAmount>("19.999").is_err());
        assert!(serde_json::from_str::<Percentage>("101").is_err());
        assert!(serde_json::from_str::<WholeAmount>("2.5").is_err());
        let tiny: CryptoAmount = serde_json::from_str("0.000000000000000001").unwrap();
        assert_eq!(tiny, 1e-18);
    }
}
