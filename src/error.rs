//! Error types for sqliterally

use thiserror::Error;

/// Result type alias for fragment construction and query building
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A fragment pair must carry exactly one more piece than values
    #[error("malformed fragment: {pieces} piece(s) for {values} value(s), expected {expected}")]
    MalformedFragment {
        pieces: usize,
        values: usize,
        expected: usize,
    },

    /// The query has no populated clause to build from
    #[error("cannot build a query without any clause")]
    EmptyBuild,
}

impl Error {
    pub(crate) fn malformed(pieces: usize, values: usize) -> Self {
        Self::MalformedFragment {
            pieces,
            values,
            expected: values + 1,
        }
    }

    pub fn is_malformed_fragment(&self) -> bool {
        matches!(self, Self::MalformedFragment { .. })
    }

    pub fn is_empty_build(&self) -> bool {
        matches!(self, Self::EmptyBuild)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message() {
        let err = Error::malformed(3, 1);
        assert!(err.is_malformed_fragment());
        assert_eq!(
            "malformed fragment: 3 piece(s) for 1 value(s), expected 2",
            err.to_string()
        );
    }

    #[test]
    fn test_empty_build_message() {
        assert!(Error::EmptyBuild.is_empty_build());
        assert_eq!("cannot build a query without any clause", Error::EmptyBuild.to_string());
    }
}
