//! Conversions between byte counts and human-readable sizes.
//!
//! Two unit families exist: decimal (`KB`, `MB`, ... base 1000) and binary
//! (`KiB`, `MiB`, ... base 1024). Parsing is case-insensitive.

use std::fmt;
use std::str::FromStr;

/// Errors raised while converting sizes
#[derive(Debug, Clone, PartialEq)]
pub enum SizeError {
    /// The unit is not one of B, KB..TB, KiB..TiB
    InvalidUnit(String),

    /// The amount cannot be read as a number
    NotNumeric(String),

    /// The amount is negative or not finite
    InvalidSize(String),
}

impl fmt::Display for SizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeError::InvalidUnit(unit) => write!(f, "Invalid data size format {}", unit),
            SizeError::NotNumeric(raw) => write!(f, "Cannot format {} in bytes", raw),
            SizeError::InvalidSize(raw) => write!(f, "Invalid data size {}", raw),
        }
    }
}

impl std::error::Error for SizeError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitFamily {
    /// Base 1000: KB, MB, GB, TB
    Decimal,
    /// Base 1024: KiB, MiB, GiB, TiB
    Binary,
}

impl UnitFamily {
    pub fn from_decimal(decimal_factors: bool) -> Self {
        if decimal_factors {
            UnitFamily::Decimal
        } else {
            UnitFamily::Binary
        }
    }

    pub fn step(self) -> u64 {
        match self {
            UnitFamily::Decimal => 1000,
            UnitFamily::Binary => 1024,
        }
    }

    /// Units from bytes upwards.
    pub fn units(self) -> [SizeUnit; 5] {
        match self {
            UnitFamily::Decimal => [
                SizeUnit::B,
                SizeUnit::KB,
                SizeUnit::MB,
                SizeUnit::GB,
                SizeUnit::TB,
            ],
            UnitFamily::Binary => [
                SizeUnit::B,
                SizeUnit::KiB,
                SizeUnit::MiB,
                SizeUnit::GiB,
                SizeUnit::TiB,
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeUnit {
    B,
    KB,
    MB,
    GB,
    TB,
    KiB,
    MiB,
    GiB,
    TiB,
}

impl SizeUnit {
    /// `None` for plain bytes, which belong to both families.
    pub fn family(self) -> Option<UnitFamily> {
        match self {
            SizeUnit::B => None,
            SizeUnit::KB | SizeUnit::MB | SizeUnit::GB | SizeUnit::TB => Some(UnitFamily::Decimal),
            SizeUnit::KiB | SizeUnit::MiB | SizeUnit::GiB | SizeUnit::TiB => {
                Some(UnitFamily::Binary)
            }
        }
    }

    /// How many times the family step applies: K=1, M=2, G=3, T=4.
    pub fn power(self) -> u32 {
        match self {
            SizeUnit::B => 0,
            SizeUnit::KB | SizeUnit::KiB => 1,
            SizeUnit::MB | SizeUnit::MiB => 2,
            SizeUnit::GB | SizeUnit::GiB => 3,
            SizeUnit::TB | SizeUnit::TiB => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SizeUnit::B => "B",
            SizeUnit::KB => "KB",
            SizeUnit::MB => "MB",
            SizeUnit::GB => "GB",
            SizeUnit::TB => "TB",
            SizeUnit::KiB => "KiB",
            SizeUnit::MiB => "MiB",
            SizeUnit::GiB => "GiB",
            SizeUnit::TiB => "TiB",
        }
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SizeUnit {
    type Err = SizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "B" => Ok(SizeUnit::B),
            "KB" => Ok(SizeUnit::KB),
            "MB" => Ok(SizeUnit::MB),
            "GB" => Ok(SizeUnit::GB),
            "TB" => Ok(SizeUnit::TB),
            "KIB" => Ok(SizeUnit::KiB),
            "MIB" => Ok(SizeUnit::MiB),
            "GIB" => Ok(SizeUnit::GiB),
            "TIB" => Ok(SizeUnit::TiB),
            _ => Err(SizeError::InvalidUnit(s.to_string())),
        }
    }
}

/// An amount paired with a unit, e.g. `42MB` or `1.5 GiB`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeValue {
    pub amount: f64,
    pub unit: SizeUnit,
}

impl SizeValue {
    pub fn new(amount: f64, unit: SizeUnit) -> Result<Self, SizeError> {
        check_amount(amount, &amount.to_string())?;
        Ok(Self { amount, unit })
    }

    pub fn to_bytes(&self) -> Result<u64, SizeError> {
        scale(self.amount, self.unit)
    }
}

impl FromStr for SizeValue {
    type Err = SizeError;

    /// A bare number counts as bytes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .find(|c: char| c.is_ascii_alphabetic())
            .unwrap_or(s.len());
        let (amount, unit) = s.split_at(split);
        let amount = parse_amount(amount.trim())?;
        let unit = match unit.trim() {
            "" => SizeUnit::B,
            unit => unit.parse()?,
        };
        SizeValue::new(amount, unit)
    }
}

impl fmt::Display for SizeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.unit)
    }
}

/// Convert `size` expressed in `unit` to a byte count.
///
/// The unit is case-insensitive. The result is truncated, not rounded.
pub fn to_bytes(size: f64, unit: &str) -> Result<u64, SizeError> {
    check_amount(size, &size.to_string())?;
    let unit: SizeUnit = unit.parse()?;
    scale(size, unit)
}

/// Like [`to_bytes`] for an amount that still has to be read as a number.
pub fn to_bytes_str(size: &str, unit: &str) -> Result<u64, SizeError> {
    to_bytes(parse_amount(size)?, unit)
}

fn scale(size: f64, unit: SizeUnit) -> Result<u64, SizeError> {
    check_amount(size, &size.to_string())?;
    let mut bytes = size;
    if let Some(family) = unit.family() {
        let step = family.step() as f64;
        // One multiplication per prefix step, so truncation sees the same
        // float as a step-by-step conversion would.
        for _ in 0..unit.power() {
            bytes *= step;
        }
    }
    // `as` would saturate; 2^64 itself is already out of range.
    if bytes >= u64::MAX as f64 {
        return Err(SizeError::InvalidSize(format!("{}{}", size, unit)));
    }
    Ok(bytes as u64)
}

/// Format a byte count with the largest fitting unit of the chosen family.
///
/// Two decimals at most, trailing zeros dropped. A value that would round up
/// to the next unit is shown as `<step-1>.99` of the current one, so the
/// output is `1023.99KiB` rather than `1024KiB`.
///
/// ```
/// use nimbus_core::format_size;
///
/// assert_eq!(format_size(999, true), "999B");
/// assert_eq!(format_size(1000, true), "1KB");
/// assert_eq!(format_size(1024 * 1024 - 1, false), "1023.99KiB");
/// ```
pub fn format_size(bytes: u64, decimal_factors: bool) -> String {
    format_amount(bytes as f64, UnitFamily::from_decimal(decimal_factors))
}

/// Like [`format_size`] for textual input.
pub fn format_size_str(raw: &str, decimal_factors: bool) -> Result<String, SizeError> {
    let size = parse_amount(raw)?;
    Ok(format_amount(size, UnitFamily::from_decimal(decimal_factors)))
}

fn format_amount(size: f64, family: UnitFamily) -> String {
    let units = family.units();
    let step = family.step();
    let fstep = step as f64;

    let mut size = size;
    let mut unit = units[0];
    for (i, candidate) in units.iter().enumerate() {
        unit = *candidate;
        if size < fstep || i + 1 == units.len() {
            break;
        }
        size /= fstep;
    }

    let mut text = format!("{:.2}", size);
    if size <= fstep {
        text = text.replace(&step.to_string(), &format!("{}.99", step - 1));
    }
    while text.contains('.') && (text.ends_with('0') || text.ends_with('.')) {
        text.pop();
    }

    format!("{}{}", text, unit)
}

fn parse_amount(raw: &str) -> Result<f64, SizeError> {
    let amount: f64 = raw
        .trim()
        .parse()
        .map_err(|_| SizeError::NotNumeric(raw.to_string()))?;
    check_amount(amount, raw)?;
    Ok(amount)
}

fn check_amount(amount: f64, raw: &str) -> Result<(), SizeError> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(())
    } else {
        Err(SizeError::InvalidSize(raw.to_string()))
    }
}
