//! Password generation options.

/// Options for a single generation run.
///
/// `lowercase` does not remove lowercase letters from the pool (they are
/// always eligible); it only controls whether strict mode requires one in
/// the output.
#[derive(Debug, Clone)]
pub struct GenerationOptions {
    pub length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub numbers: bool,
    pub symbols: bool,
    pub exclude_similar_characters: bool,
    pub strict: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: 10,
            lowercase: true,
            uppercase: true,
            numbers: false,
            symbols: false,
            exclude_similar_characters: false,
            strict: false,
        }
    }
}

impl GenerationOptions {
    /// Minimum length strict mode can satisfy: one slot for lowercase plus
    /// one per enabled class among numbers, symbols, uppercase.
    pub fn min_strict_length(&self) -> usize {
        1 + usize::from(self.numbers) + usize::from(self.symbols) + usize::from(self.uppercase)
    }

    /// Check the strict-mode length invariant. No-op when strict is off.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.strict {
            let min = self.min_strict_length();
            if self.length < min {
                return Err(ConfigError::StrictLengthTooShort {
                    length: self.length,
                    min,
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    StrictLengthTooShort { length: usize, min: usize },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::StrictLengthTooShort { length, min } => write!(
                f,
                "Length {} too short for strict rules (need at least {})",
                length, min
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = GenerationOptions::default();
        assert_eq!(options.length, 10);
        assert!(options.lowercase);
        assert!(options.uppercase);
        assert!(!options.numbers);
        assert!(!options.symbols);
        assert!(!options.exclude_similar_characters);
        assert!(!options.strict);
    }

    #[test]
    fn strict_minimum_counts_enabled_classes() {
        let mut options = GenerationOptions {
            uppercase: false,
            ..Default::default()
        };
        assert_eq!(options.min_strict_length(), 1);

        options.uppercase = true;
        options.numbers = true;
        options.symbols = true;
        assert_eq!(options.min_strict_length(), 4);
    }

    #[test]
    fn strict_length_too_short_rejected() {
        let options = GenerationOptions {
            length: 3,
            numbers: true,
            symbols: true,
            uppercase: true,
            strict: true,
            ..Default::default()
        };
        assert_eq!(
            options.validate(),
            Err(ConfigError::StrictLengthTooShort { length: 3, min: 4 })
        );
    }

    #[test]
    fn short_length_fine_without_strict() {
        let options = GenerationOptions {
            length: 3,
            numbers: true,
            symbols: true,
            ..Default::default()
        };
        assert_eq!(options.validate(), Ok(()));
    }
}
