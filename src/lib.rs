//! Random password generation with configurable composition rules.
//!
//! Builds a character pool from enabled classes (lowercase, uppercase,
//! digits, symbols), then draws from it using the operating system's
//! secure random source. Strict mode retries until every enabled class
//! is represented in the output.
//!
//! ```
//! use passgen::GenerationOptions;
//!
//! let options = GenerationOptions {
//!     length: 12,
//!     numbers: true,
//!     strict: true,
//!     ..Default::default()
//! };
//! let password = passgen::generate(&options).unwrap();
//! assert_eq!(password.len(), 12);
//! ```

pub mod options;
pub mod pass;
pub mod rand;

pub use options::{ConfigError, GenerationOptions};
pub use pass::{generate, generate_many};
