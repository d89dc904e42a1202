//! Errors raised while building syntax trees.

use std::fmt;

/// Error type for tree construction and random generation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// The alphabet cannot enumerate its propositions, so none can be drawn.
    NotEnumerable {
        /// Type name of the offending alphabet.
        alphabet: &'static str,
    },
    /// The alphabet is enumerable but has no propositions.
    EmptyAlphabet,
    /// An internal node is required but there is no operator to draw.
    EmptyOperatorSet,
    /// A nullary operator was supplied for internal positions while such operators are rejected.
    NullaryOperator {
        /// Symbol of the offending operator.
        symbol: String,
    },
    /// A node was built with a number of children different from its operator's arity.
    ArityMismatch {
        symbol: String,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotEnumerable { alphabet } => write!(
                f,
                "cannot enumerate propositions of alphabet `{}`: implement `Alphabet::atoms` for it",
                alphabet
            ),
            Error::EmptyAlphabet => write!(f, "alphabet has no propositions to draw"),
            Error::EmptyOperatorSet => write!(f, "no operators available to build an internal node"),
            Error::NullaryOperator { symbol } => {
                write!(f, "nullary operator `{}` cannot occupy an internal position", symbol)
            }
            Error::ArityMismatch { symbol, expected, found } => write!(
                f,
                "operator `{}` takes {} operand(s), but {} were given",
                symbol, expected, found
            ),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_not_enumerable() {
        let err = Error::NotEnumerable { alphabet: "Foo" };
        let msg = err.to_string();
        assert!(msg.contains("`Foo`"));
        assert!(msg.contains("Alphabet::atoms"));
    }

    #[test]
    fn test_display_arity_mismatch() {
        let err = Error::ArityMismatch {
            symbol: "∧".to_string(),
            expected: 2,
            found: 1,
        };
        assert_eq!(err.to_string(), "operator `∧` takes 2 operand(s), but 1 were given");
    }
}
