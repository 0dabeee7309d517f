//! ASCII character classes used by the lexer.
//!
//! Classification is byte-based and deliberately ASCII-only: no byte at or
//! above 0x80 is a letter, digit or whitespace here.

/// Checks if a byte can start an identifier: `a-z`, `A-Z` or `_`.
///
/// # Example
///
/// ```
/// use monkey_lex::ascii::is_ident_start;
///
/// assert!(is_ident_start(b'a'));
/// assert!(is_ident_start(b'_'));
/// assert!(!is_ident_start(b'1'));
/// ```
#[inline]
pub fn is_ident_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

/// Checks if a byte continues an identifier.
///
/// Identifiers are runs of letters and underscores only. Digits end an
/// identifier, so `x1` scans as `x` followed by `1`.
///
/// # Example
///
/// ```
/// use monkey_lex::ascii::is_ident_continue;
///
/// assert!(is_ident_continue(b'z'));
/// assert!(!is_ident_continue(b'1'));
/// ```
#[inline]
pub fn is_ident_continue(byte: u8) -> bool {
    is_ident_start(byte)
}

/// Checks if a byte is a decimal digit.
#[inline]
pub fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// Checks if a byte is insignificant whitespace.
///
/// Exactly space, tab, newline and carriage return. Form feed and vertical
/// tab are not whitespace.
#[inline]
pub fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}
