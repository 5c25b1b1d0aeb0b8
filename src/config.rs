// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The knobs of the renderer.  The defaults reproduce the classic
//! centered view: 500 iterations, an escape radius of 2, a contrast
//! exponent of 0.2, and a window whose shorter axis spans 1.25 escape
//! radii, centered on the origin.

use errors::RenderError;

/// Iteration cap past which a point is presumed inside the set.
pub const MAX_ITERATIONS: u32 = 500;
/// Escape radius.  The kernel compares against its square.
pub const BOUND_RADIUS: f64 = 2.0;
/// Exponent of the color transfer curve.
pub const CONTRAST: f64 = 0.2;
/// How many escape radii the shorter image axis spans.
pub const VIEW_SCALE: f64 = 1.25;

/// Parameters shared by every band of a render.  Once a render has
/// started this is only ever borrowed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Iteration cap.
    pub max_iterations: u32,
    /// Escape radius.
    pub bound_radius: f64,
    /// Exponent applied to the normalized escape time.
    pub contrast: f64,
    /// Extent of the shorter image axis, in escape radii.
    pub view_scale: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            max_iterations: MAX_ITERATIONS,
            bound_radius: BOUND_RADIUS,
            contrast: CONTRAST,
            view_scale: VIEW_SCALE,
        }
    }
}

impl RenderConfig {
    /// Replace the iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Replace the escape radius.
    pub fn with_bound_radius(mut self, bound_radius: f64) -> Self {
        self.bound_radius = bound_radius;
        self
    }

    /// Replace the contrast exponent.
    pub fn with_contrast(mut self, contrast: f64) -> Self {
        self.contrast = contrast;
        self
    }

    /// Replace the view scale.
    pub fn with_view_scale(mut self, view_scale: f64) -> Self {
        self.view_scale = view_scale;
        self
    }

    /// The square of the escape radius, as the kernel uses it.
    pub fn bound_squared(&self) -> f64 {
        self.bound_radius * self.bound_radius
    }

    /// Rejects values the kernel cannot render sensibly.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.max_iterations == 0 {
            return Err(RenderError::InvalidConfig(
                "iteration cap must be at least 1".to_string(),
            ));
        }
        if !(self.bound_radius.is_finite() && self.bound_radius > 0.0) {
            return Err(RenderError::InvalidConfig(format!(
                "escape radius must be positive, got {}",
                self.bound_radius
            )));
        }
        if !(self.contrast.is_finite() && self.contrast > 0.0) {
            return Err(RenderError::InvalidConfig(format!(
                "contrast must be positive, got {}",
                self.contrast
            )));
        }
        if !(self.view_scale.is_finite() && self.view_scale > 0.0) {
            return Err(RenderError::InvalidConfig(format!(
                "view scale must be positive, got {}",
                self.view_scale
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_classic_view() {
        let config = RenderConfig::default();
        assert_eq!(config.max_iterations, 500);
        assert_eq!(config.bound_squared(), 4.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_iterations_are_refused() {
        let config = RenderConfig::default().with_max_iterations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn non_positive_contrast_is_refused() {
        assert!(RenderConfig::default().with_contrast(0.0).validate().is_err());
        assert!(RenderConfig::default()
            .with_contrast(::std::f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn negative_radius_and_scale_are_refused() {
        assert!(RenderConfig::default().with_bound_radius(-2.0).validate().is_err());
        assert!(RenderConfig::default().with_view_scale(0.0).validate().is_err());
    }
}
