use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the cascade engine.
///
/// Every fallible operation in the crate returns this instead of panicking.
/// Variants carry enough context to point at the offending input or segment.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid reset or advance parameter.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// A parent segment whose geometry cannot be branched (zero-length axis,
    /// or a child vector lying in the z = 0 plane).
    #[error("degenerate direction in generation {generation}, segment {segment}: {reason}")]
    DegenerateGeometry {
        /// Index of the generation that was being produced.
        generation: usize,
        /// Frontier index of the parent segment.
        segment: usize,
        /// What went wrong.
        reason: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_is_informative() {
        let e = Error::InvalidParam("min_energy must be > 0".to_string());
        let msg = format!("{e}");
        assert!(msg.contains("invalid parameter"));
        assert!(msg.contains("min_energy"));
    }

    #[test]
    fn degenerate_error_names_segment() {
        let e = Error::DegenerateGeometry {
            generation: 3,
            segment: 7,
            reason: "zero-length axis",
        };
        let msg = e.to_string();
        assert!(msg.contains("generation 3"));
        assert!(msg.contains("segment 7"));
        assert!(msg.contains("zero-length axis"));
    }
}
