use thiserror::Error;

/// Errors raised when layout values are constructed from invalid input.
///
/// Layout values ([`Fractions`](crate::Fractions), [`Thickness`](crate::Thickness),
/// [`Color`](crate::Color)) are validated once, at construction. Everything
/// computed from them afterwards is infallible.
///
/// # Non-Exhaustive
///
/// This enum is marked `#[non_exhaustive]` to allow adding new variants
/// in future versions without breaking downstream code. When matching
/// on this error, always include a wildcard pattern:
///
/// ```
/// use ayumi::{Fractions, LayoutError};
///
/// match Fractions::new(0.8, 0.2) {
///     Err(LayoutError::UnorderedFractions { begin, end }) => {
///         eprintln!("{} is not before {}", begin, end);
///     }
///     Err(LayoutError::FractionOutOfRange { name, value }) => {
///         eprintln!("{} fraction {} is outside [0, 1]", name, value);
///     }
///     Err(error) => eprintln!("Layout error: {}", error),
///     Ok(_) => unreachable!(),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum LayoutError {
    /// A begin or end fraction lies outside `[0, 1]` or is NaN.
    #[error("{name} fraction must lie within [0, 1], got {value}")]
    FractionOutOfRange {
        /// Which fraction was rejected (`"begin"` or `"end"`)
        name: &'static str,
        /// The rejected value
        value: f32,
    },

    /// The begin fraction is not strictly before the end fraction.
    #[error("begin fraction {begin} must be less than end fraction {end}")]
    UnorderedFractions {
        /// The begin fraction
        begin: f32,
        /// The end fraction
        end: f32,
    },

    /// A line thickness is negative or not finite.
    #[error("line thickness must be a finite, non-negative number, got {0}")]
    InvalidThickness(f32),

    /// A color literal could not be parsed.
    ///
    /// Accepted forms are `#RRGGBB` and `#RRGGBBAA`.
    #[error("invalid color literal: {0}")]
    InvalidColor(String),
}
