//! Built-in input formats

pub mod latex;
pub mod pandoc;

pub use latex::LatexFormat;
pub use pandoc::PandocFormat;
