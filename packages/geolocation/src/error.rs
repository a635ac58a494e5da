use thiserror::Error;

/// Result type for geolocation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Why the platform did not hand out a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("geolocation is not supported in this environment")]
    Unsupported,

    #[error("permission to read the position was denied")]
    PermissionDenied,

    #[error("position information is unavailable")]
    PositionUnavailable,

    #[error("timed out waiting for a position")]
    Timeout,

    #[error("unknown geolocation error (code {0})")]
    Unknown(u16),
}

impl Error {
    pub const PERMISSION_DENIED: u16 = 1;
    pub const POSITION_UNAVAILABLE: u16 = 2;
    pub const TIMEOUT: u16 = 3;

    /// Classify a `GeolocationPositionError.code` reported by the platform.
    pub fn from_code(code: u16) -> Self {
        match code {
            Self::PERMISSION_DENIED => Self::PermissionDenied,
            Self::POSITION_UNAVAILABLE => Self::PositionUnavailable,
            Self::TIMEOUT => Self::Timeout,
            other => Self::Unknown(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_platform_codes() {
        assert_eq!(Error::from_code(1), Error::PermissionDenied);
        assert_eq!(Error::from_code(2), Error::PositionUnavailable);
        assert_eq!(Error::from_code(3), Error::Timeout);
        assert_eq!(Error::from_code(0), Error::Unknown(0));
        assert_eq!(Error::from_code(42), Error::Unknown(42));
    }
}
