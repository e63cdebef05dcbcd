//! Geometry errors.

use pagerect_cdp::CdpError;
use thiserror::Error;

/// Geometry errors.
///
/// Nothing here is recovered locally; callers decide whether to retry.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// The element has no border box: not rendered, `display: none` or detached.
    #[error("Element has no rect (not rendered or detached)")]
    NoRect,

    /// The remote query itself failed.
    #[error(transparent)]
    Transport(#[from] CdpError),

    /// The measurement does not apply to this context.
    #[error("Unsupported context: {0}")]
    UnsupportedContext(String),

    /// The browser answered with something structurally unexpected.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl GeometryError {
    pub fn is_no_rect(&self) -> bool {
        matches!(self, GeometryError::NoRect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_is_transparent() {
        let err = GeometryError::from(CdpError::Timeout("Request DOM.getBoxModel timed out".into()));
        assert_eq!(err.to_string(), "Timeout: Request DOM.getBoxModel timed out");
        assert!(!err.is_no_rect());
    }

    #[test]
    fn test_no_rect_display() {
        let err = GeometryError::NoRect;
        assert!(err.is_no_rect());
        assert!(err.to_string().contains("no rect"));
    }
}
