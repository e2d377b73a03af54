//! Password generation.

use zeroize::Zeroize;

use super::{charset, rules};
use crate::options::{ConfigError, GenerationOptions};
use crate::rand;

/// Draw `length` bytes from the pool, independently and with replacement.
fn draw(length: usize, pool: &[u8]) -> String {
    let bytes: Vec<u8> = (0..length)
        .map(|_| pool[rand::next_index(pool.len())])
        .collect();
    // Safety: pool is all ASCII
    unsafe { String::from_utf8_unchecked(bytes) }
}

/// Generate a single password.
///
/// In strict mode, whole candidates are regenerated until every enabled
/// class appears in the output. The retry loop is iterative and uncapped:
/// an unsatisfiable option set (length shorter than the rules can fit, or
/// a required class the pool cannot produce) never returns. Callers who
/// need bounded latency must check satisfiability first.
pub fn generate(options: &GenerationOptions) -> Result<String, ConfigError> {
    options.validate()?;

    let pool = charset::build(options);
    let mut password = draw(options.length, &pool);

    if options.strict {
        // Plain loop, never recursion: retry depth must not grow the stack.
        while !rules::satisfied(&password, options) {
            password.zeroize();
            password = draw(options.length, &pool);
        }
    }

    Ok(password)
}

/// Generate `count` passwords with the same options.
///
/// Each password runs the full single path; only the OS entropy source is
/// shared between iterations.
pub fn generate_many(
    count: usize,
    options: &GenerationOptions,
) -> Result<Vec<String>, ConfigError> {
    let mut passwords = Vec::with_capacity(count);

    for _ in 0..count {
        passwords.push(generate(options)?);
    }

    Ok(passwords)
}
