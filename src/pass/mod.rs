//! Password generation core: pool building, rules, and the draw loop.

pub mod charset;
mod generate;
pub mod rules;

pub use generate::generate;
pub use generate::generate_many;
