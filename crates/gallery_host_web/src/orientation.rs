//! Screen orientation adapter reading `screen.orientation.type`.

use gallery_host::OrientationService;

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser orientation service backed by the Screen Orientation API.
pub struct WebOrientationService;

impl OrientationService for WebOrientationService {
    fn orientation_type(&self) -> Option<String> {
        bridge::screen_orientation_type()
    }
}
