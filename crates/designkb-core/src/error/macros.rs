//! Error macros for designkb

/// Macro for returning corpus errors
#[macro_export]
macro_rules! bail_corpus {
    ($family:expr, $reason:expr) => {
        return Err($crate::error::DesignKbError::corpus_unavailable(
            $family, $reason,
        ))
    };
}

/// Macro for returning selector errors
#[macro_export]
macro_rules! bail_selector {
    ($reason:expr) => {
        return Err($crate::error::DesignKbError::invalid_selector($reason))
    };
}
