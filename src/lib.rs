//! Device-independent scaling for declarative UI style trees.
//!
//! Style values are authored in "design units": pixels at a fixed reference
//! screen size. At configuration time the engine derives three scaling
//! factors from the actual viewport (width, height, and their average);
//! every style tree then passes through a recursive rewrite that multiplies
//! recognized layout properties by the factor for their axis and rounds the
//! result to the device pixel grid. Colors, keyword enums, and unrecognized
//! properties pass through untouched.
//!
//! The transform is pure and synchronous. Factors are computed once and
//! shared read-only, so rewrite calls on independent trees may run
//! concurrently without coordination; viewport updates republish the whole
//! factor triple atomically.

use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;
use tracing::debug;

pub mod core;
pub mod platform;

pub use crate::core::{
    FactorCalculator, FactorError, PropertyAxis, RewriteOptions, ScalingFactors, SheetRegistry,
    StyleError, StyleNode, StyleRewriter, StyleValue, ViewportMetrics,
};
pub use crate::platform::{
    DevicePixelGrid, HostDisplay, IdentityGrid, PixelGrid, PlatformError, ViewportSource,
};

#[derive(Error, Debug)]
pub enum ScaleError {
    #[error("Factor computation failed: {0}")]
    Factor(#[from] FactorError),
    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),
    #[error("Style error: {0}")]
    Style(#[from] StyleError),
}

pub type Result<T> = std::result::Result<T, ScaleError>;

/// Scaling behavior of one deployment profile.
///
/// `design_width`/`design_height` name the reference screen the styles were
/// authored against; `minimal_factor` is the floor that small-screen factors
/// are smoothed toward. The two boolean flags carry the differences between
/// the historical rewrite profiles.
#[derive(Debug, Clone)]
pub struct ScalingConfig {
    pub design_width: f32,
    pub design_height: f32,
    pub minimal_factor: f32,
    /// Coerce fully-numeric string values to numbers (type normalization
    /// only, never scaled).
    pub coerce_numeric_strings: bool,
    /// Honor the `staticWidth`/`staticHeight` virtual properties.
    pub static_dimensions: bool,
}

impl Default for ScalingConfig {
    fn default() -> Self {
        Self {
            design_width: 428.0,
            design_height: 926.0,
            minimal_factor: 1.0,
            coerce_numeric_strings: true,
            static_dimensions: false,
        }
    }
}

impl ScalingConfig {
    /// The original deployment profile: 414x896 reference design with an
    /// aggressive 1.2 floor, static dimensions, and no string coercion.
    pub fn legacy() -> Self {
        Self {
            design_width: 414.0,
            design_height: 896.0,
            minimal_factor: 1.2,
            coerce_numeric_strings: false,
            static_dimensions: true,
        }
    }
}

/// The engine facade: computes factors once from the host display, rewrites
/// style trees on demand, and hands finished sheets to the registry.
///
/// One scaler instance serves an entire application. Rewrites only read the
/// factor triple, which is replaced wholesale on viewport updates, so
/// concurrent `create` calls never observe a torn triple.
pub struct StyleScaler {
    config: ScalingConfig,
    factors: RwLock<Arc<ScalingFactors>>,
    grid: Arc<dyn PixelGrid + Send + Sync>,
    registry: SheetRegistry,
}

impl StyleScaler {
    /// Build a scaler from a host display snapshot. Fails fast on
    /// non-positive design dimensions or factor floor rather than producing
    /// NaN or infinite factors.
    pub fn new(display: HostDisplay, config: ScalingConfig) -> Result<Self> {
        let viewport = display.viewport();
        Self::with_grid(viewport, Arc::new(display), config)
    }

    /// Build a scaler with an explicit pixel grid, for hosts whose rounding
    /// rule is not a plain density snap.
    pub fn with_grid(
        viewport: ViewportMetrics,
        grid: Arc<dyn PixelGrid + Send + Sync>,
        config: ScalingConfig,
    ) -> Result<Self> {
        let factors = FactorCalculator::compute(viewport, &config)?;
        Ok(Self {
            config,
            factors: RwLock::new(Arc::new(factors)),
            grid,
            registry: SheetRegistry::new(),
        })
    }

    pub fn config(&self) -> &ScalingConfig {
        &self.config
    }

    pub fn factors(&self) -> ScalingFactors {
        **self.factors.read()
    }

    /// Recompute factors for a new viewport snapshot and publish the whole
    /// triple atomically. In-flight rewrites keep the triple they started
    /// with; subsequent rewrites see the new one.
    pub fn update_viewport(&self, viewport: ViewportMetrics) -> Result<()> {
        let factors = FactorCalculator::compute(viewport, &self.config)?;
        *self.factors.write() = Arc::new(factors);
        debug!(
            width = viewport.width,
            height = viewport.height,
            "republished scaling factors"
        );
        Ok(())
    }

    /// Rewrite a style tree from design units into device values and return
    /// it. Single application only: feeding the result back in scales it
    /// again.
    pub fn create(&self, mut styles: StyleNode) -> StyleNode {
        self.rewriter().rewrite(&mut styles);
        styles
    }

    /// Rewrite a sheet and register it under a name for later lookup.
    pub fn register(&self, name: &str, styles: StyleNode) -> Arc<StyleNode> {
        let rewritten = self.create(styles);
        self.registry.insert(name, rewritten)
    }

    pub fn sheet(&self, name: &str) -> Option<Arc<StyleNode>> {
        self.registry.get(name)
    }

    pub fn require_sheet(&self, name: &str) -> Result<Arc<StyleNode>> {
        self.registry.require(name).map_err(Into::into)
    }

    pub fn registry(&self) -> &SheetRegistry {
        &self.registry
    }

    /// Scale a single number along the horizontal axis and round it to the
    /// pixel grid.
    pub fn width_of(&self, value: f32) -> f32 {
        self.grid.round_to_nearest(self.factors().width * value)
    }

    /// Scale a single number along the vertical axis and round it to the
    /// pixel grid.
    pub fn height_of(&self, value: f32) -> f32 {
        self.grid.round_to_nearest(self.factors().height * value)
    }

    /// Scale a single number by the average factor and round it to the
    /// pixel grid.
    pub fn average_of(&self, value: f32) -> f32 {
        self.grid.round_to_nearest(self.factors().average * value)
    }

    fn rewriter(&self) -> StyleRewriter {
        StyleRewriter::new(
            self.factors(),
            Arc::clone(&self.grid),
            RewriteOptions::from(&self.config),
        )
    }
}

impl std::fmt::Debug for StyleScaler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleScaler")
            .field("config", &self.config)
            .field("factors", &self.factors())
            .field("sheets", &self.registry.len())
            .finish_non_exhaustive()
    }
}
