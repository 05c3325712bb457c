use super::types::TreeError;

impl TreeError {
    /// Returns true if the caller passed input of the wrong shape.
    #[must_use]
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            TreeError::NotAMapping { .. }
                | TreeError::NotASequence { .. }
                | TreeError::NonScalarIdentifier { .. }
                | TreeError::Unidentified { .. }
                | TreeError::MalformedPair { .. }
        )
    }

    /// Returns true if the error came from decoding embedded JSON.
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, TreeError::Decode(_))
    }

    /// Returns true if the error came from an invalid configuration.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, TreeError::Configuration(_))
    }

    /// Returns true if the input exceeded the configured nesting limit.
    #[must_use]
    pub fn is_depth_exceeded(&self) -> bool {
        matches!(self, TreeError::DepthExceeded { .. })
    }
}
