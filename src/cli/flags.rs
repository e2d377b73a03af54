use passgen::GenerationOptions;

#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub info: bool,
    pub numbers: bool,
    pub symbols: bool,
    pub strict: bool,
    pub exclude_similar: bool,
    pub no_uppercase: bool,
    pub no_lowercase: bool,
    pub length: Option<usize>,
    pub count: Option<usize>,
}

impl CliFlags {
    /// Resolve flags into generation options, defaults for the rest.
    pub fn to_options(&self) -> GenerationOptions {
        let mut options = GenerationOptions::default();

        if let Some(length) = self.length {
            options.length = length;
        }
        options.numbers = self.numbers;
        options.symbols = self.symbols;
        options.strict = self.strict;
        options.exclude_similar_characters = self.exclude_similar;
        options.uppercase = !self.no_uppercase;
        options.lowercase = !self.no_lowercase;

        options
    }
}
