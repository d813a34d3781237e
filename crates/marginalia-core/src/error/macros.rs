//! Error macros for marginalia

/// Return early with a validation error
#[macro_export]
macro_rules! bail_validation {
    ($msg:expr) => {
        return Err($crate::error::MarginaliaError::validation($msg))
    };
}

/// Return early with a usage error
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::MarginaliaError::UsageError($msg.to_string()))
    };
}
