use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::ScalingConfig;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FactorError {
    #[error("Invalid design dimensions: {width}x{height}")]
    InvalidDesignSize { width: f32, height: f32 },
    #[error("Invalid viewport dimensions: {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
    #[error("Invalid minimal factor: {0}")]
    InvalidMinimalFactor(f32),
}

pub type Result<T> = std::result::Result<T, FactorError>;

/// Snapshot of the host viewport in logical units, taken once at
/// configuration time. Not live-updating; recompute factors explicitly
/// when the viewport changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportMetrics {
    pub width: f32,
    pub height: f32,
}

impl ViewportMetrics {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// The derived scaling triple. Immutable once computed; `average` is always
/// the arithmetic mean of `width` and `height`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalingFactors {
    pub width: f32,
    pub height: f32,
    pub average: f32,
}

/// Derives per-axis scaling factors from a viewport snapshot and a design
/// reference size.
///
/// A plain `actual / design` ratio shrinks styles drastically on very small
/// devices and magnifies them unboundedly on large tablets. Factors below
/// the configured floor are therefore averaged toward the floor instead of
/// hard-clamped to it, so the transition has no visible discontinuity at
/// the floor boundary.
pub struct FactorCalculator;

impl FactorCalculator {
    pub fn compute(viewport: ViewportMetrics, config: &ScalingConfig) -> Result<ScalingFactors> {
        if !(viewport.width > 0.0 && viewport.width.is_finite())
            || !(viewport.height > 0.0 && viewport.height.is_finite())
        {
            return Err(FactorError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if !(config.design_width > 0.0 && config.design_width.is_finite())
            || !(config.design_height > 0.0 && config.design_height.is_finite())
        {
            return Err(FactorError::InvalidDesignSize {
                width: config.design_width,
                height: config.design_height,
            });
        }
        if !(config.minimal_factor >= 0.0 && config.minimal_factor.is_finite()) {
            return Err(FactorError::InvalidMinimalFactor(config.minimal_factor));
        }

        let width = Self::smooth(viewport.width / config.design_width, config.minimal_factor);
        let height = Self::smooth(viewport.height / config.design_height, config.minimal_factor);
        let average = (width + height) / 2.0;

        debug!(width, height, average, "derived scaling factors");

        Ok(ScalingFactors {
            width,
            height,
            average,
        })
    }

    fn smooth(raw: f32, floor: f32) -> f32 {
        if raw < floor {
            (raw + floor) / 2.0
        } else {
            raw
        }
    }
}
