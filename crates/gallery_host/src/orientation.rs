//! Device orientation contracts.

use std::{cell::RefCell, rc::Rc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Coarse device orientation derived from the host's orientation type string.
pub enum DeviceOrientation {
    /// Any `landscape-*` orientation.
    Landscape,
    /// Any `portrait-*` orientation.
    Portrait,
}

impl DeviceOrientation {
    /// Classifies a raw orientation type such as `landscape-primary`.
    ///
    /// Returns `None` for strings naming neither orientation.
    pub fn from_type(raw: &str) -> Option<Self> {
        if raw.contains("landscape") {
            Some(Self::Landscape)
        } else if raw.contains("portrait") {
            Some(Self::Portrait)
        } else {
            None
        }
    }
}

/// Host service exposing the current screen orientation.
pub trait OrientationService {
    /// Returns the raw orientation type (for example `portrait-primary`), if the host exposes one.
    fn orientation_type(&self) -> Option<String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Orientation service for hosts without a screen orientation API.
pub struct NoopOrientationService;

impl OrientationService for NoopOrientationService {
    fn orientation_type(&self) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone, Default)]
/// Orientation service reporting a settable fixed value.
pub struct FixedOrientationService {
    current: Rc<RefCell<Option<String>>>,
}

impl FixedOrientationService {
    /// Creates a service reporting `orientation_type`.
    pub fn new(orientation_type: impl Into<String>) -> Self {
        Self {
            current: Rc::new(RefCell::new(Some(orientation_type.into()))),
        }
    }

    /// Replaces the reported orientation type.
    pub fn set(&self, orientation_type: Option<String>) {
        *self.current.borrow_mut() = orientation_type;
    }
}

impl OrientationService for FixedOrientationService {
    fn orientation_type(&self) -> Option<String> {
        self.current.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_types_classify_by_substring() {
        assert_eq!(
            DeviceOrientation::from_type("landscape-primary"),
            Some(DeviceOrientation::Landscape)
        );
        assert_eq!(
            DeviceOrientation::from_type("landscape-secondary"),
            Some(DeviceOrientation::Landscape)
        );
        assert_eq!(
            DeviceOrientation::from_type("portrait-primary"),
            Some(DeviceOrientation::Portrait)
        );
        assert_eq!(DeviceOrientation::from_type("upside-down"), None);
        assert_eq!(DeviceOrientation::from_type(""), None);
    }

    #[test]
    fn fixed_service_reports_latest_value() {
        let service = FixedOrientationService::new("portrait-primary");
        assert_eq!(service.orientation_type().as_deref(), Some("portrait-primary"));
        service.set(None);
        assert_eq!(service.orientation_type(), None);
    }
}
