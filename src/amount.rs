// 💰 Amount Validator - bounds + decimal precision, branded results
//
// One fallible check drives both `parse` (Result) and `safe_parse` (serializable outcome).

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

use crate::error::{IssueCode, ValidationError, ValidationIssue};
use crate::options::{AmountOptions, ErrorMessages};
use crate::precision::{decimal_places, is_whole, smallest_step};
use crate::registry::{SchemaDefinition, SchemaType};

// ============================================================================
// AMOUNT KINDS (BRANDS)
// ============================================================================

/// Zero-sized marker distinguishing one family of validated amounts from another.
pub trait AmountKind:
    Copy + Clone + fmt::Debug + Default + PartialEq + PartialOrd + Send + Sync + 'static
{
    /// Human-readable label used in error summaries ("monetary amount")
    const LABEL: &'static str;

    /// Validator used when deserializing a bare number into this kind
    fn default_validator() -> AmountValidator<Self>;
}

/// Brand for amounts checked by the base validator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Plain;

impl AmountKind for Plain {
    const LABEL: &'static str = "amount";

    fn default_validator() -> AmountValidator<Self> {
        amount(&AmountOptions::default())
    }
}

// ============================================================================
// AMOUNT
// ============================================================================

/// A validated amount. Only validators construct these.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount<K: AmountKind = Plain> {
    value: f64,
    kind: PhantomData<K>,
}

impl<K: AmountKind> Amount<K> {
    fn branded(value: f64) -> Self {
        Amount {
            value,
            kind: PhantomData,
        }
    }

    /// The underlying number
    pub fn get(self) -> f64 {
        self.value
    }

    /// Widen a specialized amount to the plain brand
    pub fn as_amount(self) -> Amount<Plain> {
        Amount::branded(self.value)
    }
}

impl<K: AmountKind> fmt::Display for Amount<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<K: AmountKind> From<Amount<K>> for f64 {
    fn from(amount: Amount<K>) -> Self {
        amount.value
    }
}

impl<K: AmountKind> PartialEq<f64> for Amount<K> {
    fn eq(&self, other: &f64) -> bool {
        self.value == *other
    }
}

impl<K: AmountKind> Serialize for Amount<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value)
    }
}

impl<'de, K: AmountKind> Deserialize<'de> for Amount<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        K::default_validator().parse(&raw).map_err(de::Error::custom)
    }
}

// ============================================================================
// NUMERIC INPUT
// ============================================================================

/// Anything a validator can be handed. Non-numbers fail with `WrongType`.
pub trait NumericInput {
    /// The number, or the name of the type that was received instead
    fn to_number(&self) -> Result<f64, &'static str>;

    /// How the input is echoed back in error summaries
    fn describe(&self) -> String;
}

impl NumericInput for f64 {
    fn to_number(&self) -> Result<f64, &'static str> {
        Ok(*self)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl NumericInput for f32 {
    fn to_number(&self) -> Result<f64, &'static str> {
        Ok(f64::from(*self))
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl NumericInput for i32 {
    fn to_number(&self) -> Result<f64, &'static str> {
        Ok(f64::from(*self))
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl NumericInput for u32 {
    fn to_number(&self) -> Result<f64, &'static str> {
        Ok(f64::from(*self))
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl NumericInput for i64 {
    fn to_number(&self) -> Result<f64, &'static str> {
        Ok(*self as f64)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl NumericInput for u64 {
    fn to_number(&self) -> Result<f64, &'static str> {
        Ok(*self as f64)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl NumericInput for str {
    fn to_number(&self) -> Result<f64, &'static str> {
        Err("string")
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl NumericInput for String {
    fn to_number(&self) -> Result<f64, &'static str> {
        Err("string")
    }

    fn describe(&self) -> String {
        self.clone()
    }
}

impl NumericInput for serde_json::Value {
    fn to_number(&self) -> Result<f64, &'static str> {
        use serde_json::Value;

        match self {
            Value::Number(n) => n.as_f64().ok_or("number"),
            Value::String(_) => Err("string"),
            Value::Null => Err("null"),
            Value::Bool(_) => Err("boolean"),
            Value::Array(_) => Err("array"),
            Value::Object(_) => Err("object"),
        }
    }

    fn describe(&self) -> String {
        match self {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl<T: NumericInput> NumericInput for Option<T> {
    fn to_number(&self) -> Result<f64, &'static str> {
        match self {
            Some(inner) => inner.to_number(),
            None => Err("null"),
        }
    }

    fn describe(&self) -> String {
        match self {
            Some(inner) => inner.describe(),
            None => "null".to_string(),
        }
    }
}

impl<T: NumericInput + ?Sized> NumericInput for &T {
    fn to_number(&self) -> Result<f64, &'static str> {
        (**self).to_number()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

// ============================================================================
// SAFE PARSE OUTCOME
// ============================================================================

/// Non-failing parse outcome: `{success, data}` or `{success, error}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound = "")]
pub struct SafeParse<K: AmountKind = Plain> {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Amount<K>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ValidationError>,
}

impl<K: AmountKind> SafeParse<K> {
    pub fn into_result(self) -> Result<Amount<K>, ValidationError> {
        match (self.data, self.error) {
            (Some(data), _) => Ok(data),
            (None, Some(error)) => Err(error),
            (None, None) => Err(ValidationError::new(Vec::new())),
        }
    }

    /// Re-brand as a plain amount outcome
    pub fn widen(self) -> SafeParse<Plain> {
        SafeParse {
            success: self.success,
            data: self.data.map(Amount::as_amount),
            error: self.error,
        }
    }
}

impl<K: AmountKind> From<Result<Amount<K>, ValidationError>> for SafeParse<K> {
    fn from(result: Result<Amount<K>, ValidationError>) -> Self {
        match result {
            Ok(data) => SafeParse {
                success: true,
                data: Some(data),
                error: None,
            },
            Err(error) => SafeParse {
                success: false,
                data: None,
                error: Some(error),
            },
        }
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// A reusable, immutable amount validator. Defaults are resolved at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct AmountValidator<K: AmountKind = Plain> {
    minimum: f64,
    maximum: f64,
    decimals: Option<u32>,
    whole: bool,
    messages: ErrorMessages,
    kind: PhantomData<K>,
}

impl<K: AmountKind> AmountValidator<K> {
    pub(crate) fn from_options(options: &AmountOptions) -> Self {
        AmountValidator {
            minimum: options.effective_minimum(),
            maximum: options.effective_maximum(),
            decimals: options.decimals,
            whole: false,
            messages: options.error_messages.clone(),
            kind: PhantomData,
        }
    }

    /// Reject fractional input before the bound checks
    pub(crate) fn require_whole(mut self) -> Self {
        self.whole = true;
        self
    }

    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    pub fn decimals(&self) -> Option<u32> {
        self.decimals
    }

    /// Validate and brand, failing with every issue found.
    pub fn parse<I: NumericInput>(&self, input: I) -> Result<Amount<K>, ValidationError> {
        self.check(&input).map(Amount::branded)
    }

    /// Validate without failing; the outcome says whether it passed.
    pub fn safe_parse<I: NumericInput>(&self, input: I) -> SafeParse<K> {
        self.parse(input).into()
    }

    /// Whether `input` would pass
    pub fn accepts<I: NumericInput>(&self, input: I) -> bool {
        self.check(&input).is_ok()
    }

    fn check<I: NumericInput + ?Sized>(&self, input: &I) -> Result<f64, ValidationError> {
        // Type and finiteness are fatal: nothing else is meaningful without a number
        let value = match input.to_number() {
            Ok(value) => value,
            Err(received) => {
                let message = self
                    .messages
                    .type_
                    .clone()
                    .unwrap_or_else(|| format!("Expected number, received {}", received));
                return Err(ValidationError::single(ValidationIssue::new(
                    IssueCode::WrongType,
                    message,
                )));
            }
        };

        if !value.is_finite() {
            let message = self
                .messages
                .type_
                .clone()
                .unwrap_or_else(|| format!("Amount must be a finite number, received {}", value));
            return Err(ValidationError::single(ValidationIssue::new(
                IssueCode::NotFinite,
                message,
            )));
        }

        if self.whole && !is_whole(value) {
            let message = self
                .messages
                .whole
                .clone()
                .unwrap_or_else(|| "Amount must be a whole number".to_string());
            return Err(ValidationError::single(ValidationIssue::new(
                IssueCode::NotAWholeNumber,
                message,
            )));
        }

        let mut issues = Vec::new();

        if value < self.minimum {
            let message = self
                .messages
                .min
                .clone()
                .unwrap_or_else(|| format!("Amount must be at least {}", self.minimum));
            issues.push(ValidationIssue::new(IssueCode::BelowMinimum, message).with_bound(self.minimum));
        }

        if value > self.maximum {
            let message = self
                .messages
                .max
                .clone()
                .unwrap_or_else(|| format!("Amount must not exceed {}", self.maximum));
            issues.push(ValidationIssue::new(IssueCode::AboveMaximum, message).with_bound(self.maximum));
        }

        if let Some(decimals) = self.decimals {
            let found = decimal_places(value);
            if found > decimals as usize {
                let message = self
                    .messages
                    .decimals
                    .clone()
                    .unwrap_or_else(|| format!("Amount must have at most {} decimal places", decimals));
                issues.push(
                    ValidationIssue::new(IssueCode::TooManyDecimals, message).with_bound(f64::from(decimals)),
                );
            }
        }

        if issues.is_empty() {
            Ok(value)
        } else {
            Err(ValidationError::new(issues))
        }
    }

    /// Documentation metadata describing this validator's resolved configuration
    pub fn schema(&self, id: impl Into<String>, title: impl Into<String>) -> SchemaDefinition {
        let type_ = if self.whole || self.decimals == Some(0) {
            SchemaType::Integer
        } else {
            SchemaType::Number
        };

        let definition = SchemaDefinition::new(id, title, type_)
            .with_minimum(self.minimum)
            .with_maximum(self.maximum);

        match self.decimals {
            Some(decimals) => definition.with_multiple_of(smallest_step(decimals)),
            None => definition,
        }
    }
}

/// Base validator factory.
pub fn amount(options: &AmountOptions) -> AmountValidator<Plain> {
    AmountValidator::from_options(options)
}

// ============================================================================
// TESTS
// ============================================================================
