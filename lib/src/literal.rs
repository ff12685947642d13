//! Integer literals as they appear on the command line and in linker map files.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralError {
    Empty,
    Negative,
    LeadingZero,
    InvalidDigit { radix: u32 },
    Overflow,
}

impl fmt::Display for LiteralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralError::Empty => write!(f, "expected an integer, found no digits"),
            LiteralError::Negative => write!(f, "expected a non-negative integer"),
            LiteralError::LeadingZero => {
                write!(f, "leading zeros are not allowed in decimal literals, use a 0o prefix for octal")
            }
            LiteralError::InvalidDigit { radix } => write!(f, "invalid digit for a base {} literal", radix),
            LiteralError::Overflow => write!(f, "value does not fit in 32 bits"),
        }
    }
}

impl core::error::Error for LiteralError {}

/// Parses a decimal, `0x`, `0o` or `0b` literal. Underscores may separate digits.
pub fn parse_u32(src: &str) -> Result<u32, LiteralError> {
    let src = src.trim();
    let src = match src.strip_prefix('+') {
        Some(rest) => rest,
        None if src.starts_with('-') => return Err(LiteralError::Negative),
        None => src,
    };

    let (radix, digits) = match src.get(..2) {
        Some("0x" | "0X") => (16, &src[2..]),
        Some("0o" | "0O") => (8, &src[2..]),
        Some("0b" | "0B") => (2, &src[2..]),
        _ => (10, src),
    };

    let digits = digits.strip_prefix('_').filter(|_| radix != 10).unwrap_or(digits);
    if digits.is_empty() {
        return Err(LiteralError::Empty);
    }
    if digits.starts_with('_') || digits.ends_with('_') || digits.contains("__") {
        return Err(LiteralError::InvalidDigit { radix });
    }
    if radix == 10 && digits.starts_with('0') && digits.bytes().any(|b| b != b'0' && b != b'_') {
        return Err(LiteralError::LeadingZero);
    }

    let mut value = 0u32;
    for c in digits.chars().filter(|&c| c != '_') {
        let digit = c.to_digit(radix).ok_or(LiteralError::InvalidDigit { radix })?;
        value = value
            .checked_mul(radix)
            .and_then(|v| v.checked_add(digit))
            .ok_or(LiteralError::Overflow)?;
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes() {
        assert_eq!(parse_u32("0x10004000"), Ok(0x1000_4000));
        assert_eq!(parse_u32("0X2000_0000"), Ok(0x2000_0000));
        assert_eq!(parse_u32("0o777"), Ok(0o777));
        assert_eq!(parse_u32("0b1010"), Ok(10));
        assert_eq!(parse_u32("268451840"), Ok(0x1000_4000));
        assert_eq!(parse_u32("0"), Ok(0));
        assert_eq!(parse_u32("000"), Ok(0));
        assert_eq!(parse_u32("  42\n"), Ok(42));
        assert_eq!(parse_u32("0x_ff"), Ok(0xff));
    }

    #[test]
    fn rejects_malformed() {
        assert_eq!(parse_u32(""), Err(LiteralError::Empty));
        assert_eq!(parse_u32("0x"), Err(LiteralError::Empty));
        assert_eq!(parse_u32("-1"), Err(LiteralError::Negative));
        assert_eq!(parse_u32("010"), Err(LiteralError::LeadingZero));
        assert_eq!(parse_u32("0xfg"), Err(LiteralError::InvalidDigit { radix: 16 }));
        assert_eq!(parse_u32("0b102"), Err(LiteralError::InvalidDigit { radix: 2 }));
        assert_eq!(parse_u32("1__0"), Err(LiteralError::InvalidDigit { radix: 10 }));
        assert_eq!(parse_u32("_1"), Err(LiteralError::InvalidDigit { radix: 10 }));
        assert_eq!(parse_u32("12ab"), Err(LiteralError::InvalidDigit { radix: 10 }));
    }

    #[test]
    fn overflow() {
        assert_eq!(parse_u32("0xffffffff"), Ok(u32::MAX));
        assert_eq!(parse_u32("0x100000000"), Err(LiteralError::Overflow));
        assert_eq!(parse_u32("4294967296"), Err(LiteralError::Overflow));
    }
}
