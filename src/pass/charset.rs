//! Character set building for password generation.

use crate::options::GenerationOptions;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
pub(crate) const SYMBOLS: &[u8] = b"!@#$%^&*()+_-=}{[]|:;'/?.><,`~";

/// Visually ambiguous characters dropped by `exclude_similar_characters`.
const SIMILAR: &[u8] = b"ilLI|`oO0";

/// Build the character pool from the enabled classes, in fixed order:
/// lowercase, uppercase, digits, symbols. Lowercase letters are always
/// included regardless of the `lowercase` option.
pub fn build(options: &GenerationOptions) -> Vec<u8> {
    let mut pool: Vec<u8> = Vec::new();

    pool.extend_from_slice(LOWERCASE);

    if options.uppercase {
        pool.extend_from_slice(UPPERCASE);
    }

    if options.numbers {
        pool.extend_from_slice(DIGITS);
    }

    if options.symbols {
        pool.extend_from_slice(SYMBOLS);
    }

    if options.exclude_similar_characters {
        pool.retain(|b| !SIMILAR.contains(b));
    }

    pool
}

/// Effective pool size after filtering (for entropy calculation).
pub fn size(options: &GenerationOptions) -> usize {
    build(options).len()
}
