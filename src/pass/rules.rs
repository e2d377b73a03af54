//! Strict-mode composition rules.

use super::charset;
use crate::options::GenerationOptions;

#[inline]
fn has_symbol(password: &str) -> bool {
    password.bytes().any(|b| charset::SYMBOLS.contains(&b))
}

/// Check a candidate against every enabled class requirement.
///
/// Tests the final string only. Whether the pool that produced the
/// candidate actually contained a class is irrelevant here.
pub fn satisfied(password: &str, options: &GenerationOptions) -> bool {
    if options.lowercase && !password.bytes().any(|b| b.is_ascii_lowercase()) {
        return false;
    }
    if options.uppercase && !password.bytes().any(|b| b.is_ascii_uppercase()) {
        return false;
    }
    if options.numbers && !password.bytes().any(|b| b.is_ascii_digit()) {
        return false;
    }
    if options.symbols && !has_symbol(password) {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_classes() -> GenerationOptions {
        GenerationOptions {
            numbers: true,
            symbols: true,
            strict: true,
            ..Default::default()
        }
    }

    #[test]
    fn every_class_represented_passes() {
        assert!(satisfied("aB3!", &all_classes()));
    }

    #[test]
    fn missing_class_fails() {
        let options = all_classes();
        assert!(!satisfied("ab3!", &options)); // no uppercase
        assert!(!satisfied("aB3a", &options)); // no symbol
        assert!(!satisfied("aB!a", &options)); // no digit
        assert!(!satisfied("BB3!", &options)); // no lowercase
    }

    #[test]
    fn disabled_classes_impose_nothing() {
        let options = GenerationOptions::default();
        assert!(satisfied("aB", &options));
        // uppercase enabled by default, so all-lowercase fails
        assert!(!satisfied("ab", &options));
    }

    #[test]
    fn lowercase_requirement_tracks_its_option() {
        let options = GenerationOptions {
            lowercase: false,
            ..Default::default()
        };
        assert!(satisfied("AB", &options));
    }

    #[test]
    fn check_is_pool_independent() {
        // A digit satisfies the numbers rule even though the default pool
        // would never have produced one.
        let options = GenerationOptions {
            numbers: true,
            ..Default::default()
        };
        assert!(satisfied("aB3", &options));
    }
}
