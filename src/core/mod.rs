pub mod factor;
pub mod style;

pub use factor::{FactorCalculator, FactorError, ScalingFactors, ViewportMetrics};
pub use style::{
    PropertyAxis, RewriteOptions, SheetRegistry, StyleError, StyleNode, StyleRewriter, StyleValue,
};
