//! Input validation for shed names.
//!
//! Two identifier rules exist: one for parameter and secret-in-template
//! names, one for command names and secret keys. Violations map to distinct
//! error kinds so callers can match on them.

use crate::error::{Result, ValidationError};

/// Maximum length of a parameter or in-template secret name, in bytes.
pub const PARAMETER_NAME_MAX: usize = 40;

/// Maximum length of a command name or secret key, in bytes.
pub const COMMAND_NAME_MAX: usize = 32;

/// Symbols that may never appear in a parameter name.
const SYMBOLS: &str = "!@#$%^&*()-+=[]{};:'\",.<>?/\\|`~";

const NAME_DETAILS: &str =
    "names may only contain letters, numbers, and underscores, and must start with a letter";
const NAME_LENGTH: &str = "it must be between 1 and 32 characters long";

/// Validate a parameter name (also used for secret names inside templates,
/// after the `!` sigil is stripped).
///
/// Names must start with a letter, contain no symbols from the forbidden
/// set, no spaces, and be at most 40 bytes long.
pub fn validate_parameter_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName.into());
    }

    let first = name.chars().next().unwrap_or_default();
    if !first.is_ascii_alphabetic() {
        return Err(ValidationError::StartsWithInvalidChar(name.to_string()).into());
    }

    if name.chars().any(|c| SYMBOLS.contains(c)) {
        return Err(ValidationError::ContainsInvalidSymbol(name.to_string()).into());
    }

    if name.len() > PARAMETER_NAME_MAX {
        return Err(ValidationError::TooLong(name.to_string()).into());
    }

    if name.contains(' ') {
        return Err(ValidationError::ContainsSpace(name.to_string()).into());
    }

    Ok(())
}

/// Validate a command name or secret key.
///
/// Names must start with a letter, contain only letters, digits, and
/// underscores, and be between 1 and 32 bytes long. All violations surface
/// as the aggregate `InvalidCommandName` kind.
pub fn validate_command_name(name: &str) -> Result<()> {
    if name.is_empty() || name.len() > COMMAND_NAME_MAX {
        return Err(ValidationError::InvalidCommandName {
            name: name.to_string(),
            reason: NAME_LENGTH,
        }
        .into());
    }

    let mut chars = name.chars();
    let first = chars.next().unwrap_or_default();
    if !first.is_ascii_alphabetic() {
        return Err(ValidationError::InvalidCommandName {
            name: name.to_string(),
            reason: NAME_DETAILS,
        }
        .into());
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ValidationError::InvalidCommandName {
            name: name.to_string(),
            reason: NAME_DETAILS,
        }
        .into());
    }

    Ok(())
}
