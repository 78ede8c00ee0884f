//! Host-platform collaborators: the viewport snapshot and the device
//! pixel grid.
//!
//! The scaling core never queries the windowing system itself. The host
//! supplies a viewport snapshot and a pixel-density rounding rule at
//! configuration time through the traits below.

use thiserror::Error;

use crate::core::factor::ViewportMetrics;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlatformError {
    #[error("Invalid pixel density: {0}")]
    InvalidDensity(f32),
    #[error("Invalid display dimensions: {width}x{height}")]
    InvalidDimensions { width: f32, height: f32 },
}

pub type Result<T> = std::result::Result<T, PlatformError>;

/// Source of the current viewport dimensions in logical units.
pub trait ViewportSource {
    fn viewport(&self) -> ViewportMetrics;
}

/// Rounds a scaled value to the nearest pixel boundary the device can
/// actually address.
pub trait PixelGrid {
    fn round_to_nearest(&self, value: f32) -> f32;
}

/// Pixel grid of a physical display: values snap to the nearest multiple
/// of `1 / density` logical units, the finest subpixel step the device
/// can render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DevicePixelGrid {
    density: f32,
}

impl DevicePixelGrid {
    pub fn new(density: f32) -> Result<Self> {
        if !(density > 0.0 && density.is_finite()) {
            return Err(PlatformError::InvalidDensity(density));
        }
        Ok(Self { density })
    }

    pub fn density(&self) -> f32 {
        self.density
    }
}

impl PixelGrid for DevicePixelGrid {
    fn round_to_nearest(&self, value: f32) -> f32 {
        (value * self.density).round() / self.density
    }
}

/// Pass-through grid: no rounding at all. Useful for tests and for hosts
/// that defer rounding to a later pipeline stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityGrid;

impl PixelGrid for IdentityGrid {
    fn round_to_nearest(&self, value: f32) -> f32 {
        value
    }
}

/// Configuration-time snapshot of the host display: viewport dimensions
/// plus pixel density, bundled as a single collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostDisplay {
    viewport: ViewportMetrics,
    grid: DevicePixelGrid,
}

impl HostDisplay {
    pub fn new(width: f32, height: f32, density: f32) -> Result<Self> {
        if !(width > 0.0 && width.is_finite()) || !(height > 0.0 && height.is_finite()) {
            return Err(PlatformError::InvalidDimensions { width, height });
        }
        Ok(Self {
            viewport: ViewportMetrics::new(width, height),
            grid: DevicePixelGrid::new(density)?,
        })
    }

    pub fn density(&self) -> f32 {
        self.grid.density()
    }
}

impl ViewportSource for HostDisplay {
    fn viewport(&self) -> ViewportMetrics {
        self.viewport
    }
}

impl PixelGrid for HostDisplay {
    fn round_to_nearest(&self, value: f32) -> f32 {
        self.grid.round_to_nearest(value)
    }
}
