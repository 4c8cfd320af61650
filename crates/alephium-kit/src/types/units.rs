//! ALPH token amount type.

use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::ops::{Add, Sub};
use std::str::FromStr;
use std::sync::LazyLock;

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use rand::Rng;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AmountError;

/// Number of decimal places of one ALPH.
const DECIMALS: usize = 18;
/// NanoALPH in one ALPH.
const NANO_PER_ALPH: u64 = 1_000_000_000;

/// attoALPH in one ALPH (10^18).
static ATTO_PER_ALPH: LazyLock<BigUint> =
    LazyLock::new(|| BigUint::from(1_000_000_000_000_000_000u64));
/// attoALPH in one nanoALPH (10^9).
static ATTO_PER_NANOALPH: LazyLock<BigUint> = LazyLock::new(|| BigUint::from(NANO_PER_ALPH));

/// Unit suffix used by [`AlphToken::pretty`].
pub const ALPH_SYMBOL: &str = "ALPH";

/// An ALPH amount with attoALPH precision (10^-18 ALPH).
///
/// Backed by an arbitrary-precision unsigned integer, so there is no
/// overflow for any realistic supply and no floating-point rounding.
///
/// # Creating Amounts
///
/// ```
/// use alephium_kit::AlphToken;
///
/// let twelve = AlphToken::alph(12);
/// let parsed = AlphToken::from_alph_str("12").unwrap();
/// assert_eq!(twelve, parsed);
///
/// let raw = AlphToken::from_attoalph_str("12000000000000000000").unwrap();
/// assert_eq!(raw, twelve);
/// ```
///
/// # String Forms
///
/// `Display` writes the exact attoALPH integer, which is also the wire
/// format. [`AlphToken::pretty`] gives a human-readable ALPH figure.
///
/// ```
/// use alephium_kit::AlphToken;
///
/// let amount = AlphToken::from_alph_str("12.12").unwrap();
/// assert_eq!(amount.to_string(), "12120000000000000000");
/// assert_eq!(amount.pretty(), "12.12 ALPH");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AlphToken(BigUint);

impl AlphToken {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Zero ALPH.
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    /// Create from whole ALPH.
    ///
    /// # Example
    ///
    /// ```
    /// use alephium_kit::AlphToken;
    ///
    /// assert_eq!(AlphToken::alph(2).to_string(), "2000000000000000000");
    /// ```
    pub fn alph(alph: u64) -> Self {
        Self(BigUint::from(alph) * &*ATTO_PER_ALPH)
    }

    /// Create from nanoALPH (10^-9 ALPH).
    pub fn nanoalph(nano: u64) -> Self {
        Self(BigUint::from(nano) * &*ATTO_PER_NANOALPH)
    }

    /// Create from attoALPH, the smallest unit.
    pub fn from_attoalph(atto: impl Into<BigUint>) -> Self {
        Self(atto.into())
    }

    /// Parse a human decimal ALPH string: `digits` or `digits.digits`.
    ///
    /// The fractional part is right-padded to 18 digits, or truncated if
    /// longer (no rounding), then joined to the integer part.
    ///
    /// # Example
    ///
    /// ```
    /// use alephium_kit::AlphToken;
    ///
    /// let amount = AlphToken::from_alph_str("1.5").unwrap();
    /// assert_eq!(amount.to_string(), "1500000000000000000");
    /// assert!(AlphToken::from_alph_str("-1").is_err());
    /// ```
    pub fn from_alph_str(s: &str) -> Result<Self, AmountError> {
        let invalid = || AmountError::InvalidAmount(s.to_string());

        match s.split_once('.') {
            None => {
                let whole = parse_digits(s).ok_or_else(invalid)?;
                Ok(Self(whole * &*ATTO_PER_ALPH))
            }
            Some((whole, fraction)) => {
                if !is_digits(whole) || !is_digits(fraction) {
                    return Err(invalid());
                }
                let fraction = &fraction[..fraction.len().min(DECIMALS)];
                let joined = format!("{whole}{fraction:0<width$}", width = DECIMALS);
                parse_digits(&joined).map(Self).ok_or_else(invalid)
            }
        }
    }

    /// Parse a raw attoALPH integer string.
    pub fn from_attoalph_str(s: &str) -> Result<Self, AmountError> {
        parse_digits(s)
            .map(Self)
            .ok_or_else(|| AmountError::InvalidAmount(s.to_string()))
    }

    /// Pseudo-random amount below `upper_alph` ALPH, with nanoALPH precision.
    ///
    /// Intended for tests and tooling, not for anything security relevant.
    pub fn random(upper_alph: u64) -> Self {
        if upper_alph == 0 {
            return Self::zero();
        }
        let mut rng = rand::thread_rng();
        let whole = rng.gen_range(0..upper_alph);
        let nano = rng.gen_range(0..NANO_PER_ALPH);
        Self(BigUint::from(whole) * &*ATTO_PER_ALPH + BigUint::from(nano) * &*ATTO_PER_NANOALPH)
    }

    /// Pseudo-random amount of fewer than `upper_nano` nanoALPH.
    pub fn random_nano(upper_nano: u64) -> Self {
        if upper_nano == 0 {
            return Self::zero();
        }
        Self::nanoalph(rand::thread_rng().gen_range(0..upper_nano))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the raw attoALPH value.
    pub fn as_attoalph(&self) -> &BigUint {
        &self.0
    }

    /// Get whole nanoALPH (truncated, saturating at `u64::MAX`).
    pub fn as_nanoalph(&self) -> u64 {
        self.nano().to_u64().unwrap_or(u64::MAX)
    }

    /// Get the value as ALPH (nanoALPH precision, may lose precision).
    pub fn as_alph_f64(&self) -> f64 {
        self.nano().to_f64().unwrap_or(f64::INFINITY) / NANO_PER_ALPH as f64
    }

    /// Check if zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn nano(&self) -> BigUint {
        &self.0 / &*ATTO_PER_NANOALPH
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Subtract, failing if the result would be negative.
    pub fn subtract(&self, other: &Self) -> Result<Self, AmountError> {
        self.checked_sub(other).ok_or(AmountError::Underflow)
    }

    /// Checked subtraction.
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.cmp(&other.0) {
            Ordering::Less => None,
            _ => Some(Self(&self.0 - &other.0)),
        }
    }

    /// Saturating subtraction.
    pub fn saturating_sub(&self, other: &Self) -> Self {
        self.checked_sub(other).unwrap_or_default()
    }

    /// Multiply by an integer factor.
    pub fn multiply(&self, factor: u64) -> Self {
        Self(&self.0 * factor)
    }

    /// Truncating integer division.
    ///
    /// # Example
    ///
    /// ```
    /// use alephium_kit::AlphToken;
    ///
    /// let third = AlphToken::from_attoalph(10u32).divide(3).unwrap();
    /// assert_eq!(third.to_string(), "3");
    /// ```
    pub fn divide(&self, divisor: u64) -> Result<Self, AmountError> {
        if divisor == 0 {
            return Err(AmountError::DivisionByZero);
        }
        Ok(Self(&self.0 / divisor))
    }

    // ========================================================================
    // Formatting
    // ========================================================================

    /// Human-readable form.
    ///
    /// Amounts above one nanoALPH worth of attoALPH (10^9) are shown in ALPH,
    /// truncated to nine decimals with trailing zeros trimmed. Smaller amounts
    /// are shown as the raw attoALPH integer.
    ///
    /// The threshold is kept from the Go client, the rendering is not: a
    /// whole amount is `"12 ALPH"` where the Go client printed `"12.ALPH"`,
    /// and the unit is always separated by a space.
    pub fn pretty(&self) -> String {
        if self.0 <= *ATTO_PER_NANOALPH {
            return self.0.to_string();
        }

        let nano = self.nano();
        let whole = &nano / NANO_PER_ALPH;
        let fraction = (&nano % NANO_PER_ALPH).to_u64().unwrap_or_default();
        let fraction = format!("{fraction:09}");
        let fraction = fraction.trim_end_matches('0');

        if fraction.is_empty() {
            format!("{whole} {ALPH_SYMBOL}")
        } else {
            format!("{whole}.{fraction} {ALPH_SYMBOL}")
        }
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_digits(s: &str) -> Option<BigUint> {
    if !is_digits(s) {
        return None;
    }
    BigUint::parse_bytes(s.as_bytes(), 10)
}

impl FromStr for AlphToken {
    type Err = AmountError;

    /// Accepts `"1.5"`, `"1.5 ALPH"` and `"1500 attoALPH"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some(value) = s.strip_suffix("attoALPH") {
            return Self::from_attoalph_str(value.trim_end());
        }
        if let Some(value) = s.strip_suffix(ALPH_SYMBOL) {
            return Self::from_alph_str(value.trim_end());
        }
        Self::from_alph_str(s)
    }
}

impl TryFrom<&str> for AlphToken {
    type Error = AmountError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Display for AlphToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for AlphToken {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<'a> Add<&'a AlphToken> for &'a AlphToken {
    type Output = AlphToken;

    fn add(self, other: &'a AlphToken) -> AlphToken {
        AlphToken(&self.0 + &other.0)
    }
}

/// Panics if `other` is larger than `self`; use [`AlphToken::subtract`] or
/// [`AlphToken::checked_sub`] for untrusted values.
impl Sub for AlphToken {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl<'a> Sub<&'a AlphToken> for &'a AlphToken {
    type Output = AlphToken;

    fn sub(self, other: &'a AlphToken) -> AlphToken {
        AlphToken(&self.0 - &other.0)
    }
}

// Serde: attoALPH as a quoted integer string, the node's wire format
impl Serialize for AlphToken {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for AlphToken {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_any(AlphTokenVisitor)
    }
}

/// Accepts only a quoted attoALPH integer; anything else is an
/// [`AmountError::InvalidAmount`].
struct AlphTokenVisitor;

fn invalid<E: de::Error>(value: impl Display) -> E {
    E::custom(AmountError::InvalidAmount(value.to_string()))
}

impl<'de> Visitor<'de> for AlphTokenVisitor {
    type Value = AlphToken;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an attoALPH amount as a quoted integer")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<AlphToken, E> {
        AlphToken::from_attoalph_str(v).map_err(E::custom)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<AlphToken, E> {
        Err(invalid(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<AlphToken, E> {
        Err(invalid(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<AlphToken, E> {
        Err(invalid(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<AlphToken, E> {
        Err(invalid(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<AlphToken, E> {
        Err(invalid("null"))
    }

    fn visit_none<E: de::Error>(self) -> Result<AlphToken, E> {
        Err(invalid("null"))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, _: A) -> Result<AlphToken, A::Error> {
        Err(invalid("array"))
    }

    fn visit_map<A: MapAccess<'de>>(self, _: A) -> Result<AlphToken, A::Error> {
        Err(invalid("object"))
    }
}

// ============================================================================
// IntoAlphToken trait
// ============================================================================

/// Trait for types that can be converted into an [`AlphToken`].
///
/// Lets amount-taking methods accept both typed values and runtime strings.
///
/// ```
/// use alephium_kit::{AlphToken, IntoAlphToken};
///
/// fn example(amount: impl IntoAlphToken) -> AlphToken {
///     amount.into_alph_token().unwrap()
/// }
///
/// assert_eq!(example(AlphToken::alph(5)), example("5 ALPH"));
/// ```
pub trait IntoAlphToken {
    /// Convert into an AlphToken.
    fn into_alph_token(self) -> Result<AlphToken, AmountError>;
}

impl IntoAlphToken for AlphToken {
    fn into_alph_token(self) -> Result<AlphToken, AmountError> {
        Ok(self)
    }
}

impl IntoAlphToken for &AlphToken {
    fn into_alph_token(self) -> Result<AlphToken, AmountError> {
        Ok(self.clone())
    }
}

impl IntoAlphToken for &str {
    fn into_alph_token(self) -> Result<AlphToken, AmountError> {
        self.parse()
    }
}

impl IntoAlphToken for String {
    fn into_alph_token(self) -> Result<AlphToken, AmountError> {
        self.parse()
    }
}
