use super::CliFlags;

#[derive(Debug)]
pub enum ParseError {
    InvalidNumber(String),
    UnknownArg(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
        }
    }
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-i" | "--info" => flags.info = true,
            "--numbers" => flags.numbers = true,
            "--symbols" => flags.symbols = true,
            "--strict" => flags.strict = true,
            "--exclude-similar" => flags.exclude_similar = true,
            "--no-uppercase" => flags.no_uppercase = true,
            "--no-lowercase" => flags.no_lowercase = true,
            "-l" | "--length" => {
                i += 1;
                if i < args.len() {
                    flags.length = Some(args[i].parse().map_err(|_| {
                        ParseError::InvalidNumber(args[i].clone())
                    })?);
                }
            }
            "-n" | "--number" => {
                i += 1;
                if i < args.len() {
                    flags.count = Some(args[i].parse().map_err(|_| {
                        ParseError::InvalidNumber(args[i].clone())
                    })?);
                }
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("passgen")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_long_and_short_flags() {
        let flags = parse(&args(&["-l", "16", "--numbers", "--strict"])).unwrap();
        assert_eq!(flags.length, Some(16));
        assert!(flags.numbers);
        assert!(flags.strict);
        assert!(!flags.symbols);
    }

    #[test]
    fn rejects_unknown_argument() {
        assert!(matches!(
            parse(&args(&["--bogus"])),
            Err(ParseError::UnknownArg(_))
        ));
    }

    #[test]
    fn rejects_non_numeric_length() {
        assert!(matches!(
            parse(&args(&["--length", "lots"])),
            Err(ParseError::InvalidNumber(_))
        ));
    }
}
