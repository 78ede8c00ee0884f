use std::sync::Arc;

use smallvec::SmallVec;

use super::{StyleNode, StyleValue};
use crate::core::factor::ScalingFactors;
use crate::platform::PixelGrid;
use crate::ScalingConfig;

/// Marker property: forces the carrying node's axis-classified properties
/// onto the average factor. Consumed during traversal, never emitted.
const AVERAGE_MARKER: &str = "useAverageFactor";

/// Virtual property: expands into `width` and `height`, both scaled by the
/// average factor.
const SQUARE: &str = "square";

/// Virtual properties: rename to `width`/`height` without scaling. Only
/// honored when static dimensions are enabled.
const STATIC_WIDTH: &str = "staticWidth";
const STATIC_HEIGHT: &str = "staticHeight";

/// Properties scaled along the vertical axis. Sorted for binary search.
static VERTICAL_PROPERTIES: &[&str] = &[
    "borderBottomLeftRadius",
    "borderBottomRightRadius",
    "borderTopLeftRadius",
    "borderTopRightRadius",
    "bottom",
    "fontSize",
    "height",
    "lineHeight",
    "marginBottom",
    "marginTop",
    "marginVertical",
    "paddingBottom",
    "paddingTop",
    "paddingVertical",
    "top",
];

/// Properties scaled along the horizontal axis. Sorted for binary search.
static HORIZONTAL_PROPERTIES: &[&str] = &[
    "left",
    "marginHorizontal",
    "marginLeft",
    "marginRight",
    "minWidth",
    "paddingHorizontal",
    "paddingLeft",
    "paddingRight",
    "right",
    "width",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyAxis {
    Horizontal,
    Vertical,
    Average,
}

impl PropertyAxis {
    /// Classify a property name against the fixed allow-list. Names outside
    /// the table return `None` and pass through the rewrite untouched.
    pub fn classify(name: &str) -> Option<Self> {
        if VERTICAL_PROPERTIES.binary_search(&name).is_ok() {
            return Some(Self::Vertical);
        }
        if HORIZONTAL_PROPERTIES.binary_search(&name).is_ok() {
            return Some(Self::Horizontal);
        }
        if name == "borderRadius" {
            return Some(Self::Average);
        }
        None
    }
}

/// Behavior toggles unifying the two historical rewrite profiles.
#[derive(Debug, Clone, Copy, Default)]
pub struct RewriteOptions {
    /// Coerce fully-numeric string values to numbers (type normalization
    /// only; coerced values are never scaled). `fontWeight` is exempt.
    pub coerce_numeric_strings: bool,
    /// Honor the `staticWidth`/`staticHeight` virtual properties.
    pub static_dimensions: bool,
}

impl From<&ScalingConfig> for RewriteOptions {
    fn from(config: &ScalingConfig) -> Self {
        Self {
            coerce_numeric_strings: config.coerce_numeric_strings,
            static_dimensions: config.static_dimensions,
        }
    }
}

/// Rewrites style trees from design units into device-appropriate values.
///
/// Traversal is depth-first and in-place. Factors are consumed read-only,
/// so one rewriter (or any number of clones) may serve concurrent rewrite
/// calls against independent trees without coordination.
#[derive(Clone)]
pub struct StyleRewriter {
    factors: ScalingFactors,
    grid: Arc<dyn PixelGrid + Send + Sync>,
    options: RewriteOptions,
}

impl StyleRewriter {
    pub fn new(
        factors: ScalingFactors,
        grid: Arc<dyn PixelGrid + Send + Sync>,
        options: RewriteOptions,
    ) -> Self {
        Self {
            factors,
            grid,
            options,
        }
    }

    pub fn factors(&self) -> ScalingFactors {
        self.factors
    }

    /// Rewrite every recognized numeric property of the tree in place.
    ///
    /// Single-application contract: rewriting is deterministic but not
    /// idempotent. Feeding an already-rewritten tree back in scales it a
    /// second time.
    pub fn rewrite(&self, node: &mut StyleNode) {
        self.rewrite_node(node);
    }

    fn rewrite_node(&self, node: &mut StyleNode) {
        // The marker is metadata, not a style property: consume it first so
        // it never reaches the output, whatever value it carries.
        let use_average = matches!(
            node.remove(AVERAGE_MARKER),
            Some(StyleValue::Bool(true))
        );

        // Virtual properties expand before classification so the axis table
        // stays pure data. Expanded outputs are final: they are inserted
        // after the classification pass and win over same-named siblings.
        let expanded = self.expand_virtual(node);

        let names: Vec<String> = node.keys().cloned().collect();
        for name in &names {
            let Some(value) = node.get_mut(name) else {
                continue;
            };
            match value {
                StyleValue::Node(child) => self.rewrite_node(child),
                StyleValue::List(items) => {
                    for item in items.iter_mut() {
                        if let StyleValue::Node(child) = item {
                            self.rewrite_node(child);
                        }
                    }
                }
                StyleValue::Number(n) => {
                    if let Some(axis) = PropertyAxis::classify(name) {
                        let factor = self.factor_for(axis, use_average);
                        *n = self.grid.round_to_nearest(factor * *n);
                    }
                }
                StyleValue::String(s) => {
                    // Numeric-looking strings normalize to numbers without
                    // re-entering the classification table. fontWeight is a
                    // string enum and stays a string in every profile.
                    if self.options.coerce_numeric_strings && name != "fontWeight" {
                        if let Some(parsed) = s.parse::<f32>().ok().filter(|v| v.is_finite()) {
                            *value = StyleValue::Number(parsed);
                        }
                    }
                }
                StyleValue::Bool(_) => {}
            }
        }

        for (name, value) in expanded {
            node.set(name, value);
        }
    }

    fn expand_virtual(&self, node: &mut StyleNode) -> SmallVec<[(&'static str, StyleValue); 4]> {
        let mut expanded = SmallVec::new();

        if let Some(side) = node.number(SQUARE) {
            node.remove(SQUARE);
            let scaled = self.grid.round_to_nearest(self.factors.average * side);
            expanded.push(("width", StyleValue::Number(scaled)));
            expanded.push(("height", StyleValue::Number(scaled)));
        }

        if self.options.static_dimensions {
            if let Some(width) = node.number(STATIC_WIDTH) {
                node.remove(STATIC_WIDTH);
                expanded.push(("width", StyleValue::Number(width)));
            }
            if let Some(height) = node.number(STATIC_HEIGHT) {
                node.remove(STATIC_HEIGHT);
                expanded.push(("height", StyleValue::Number(height)));
            }
        }

        expanded
    }

    fn factor_for(&self, axis: PropertyAxis, use_average: bool) -> f32 {
        match axis {
            PropertyAxis::Average => self.factors.average,
            _ if use_average => self.factors.average,
            PropertyAxis::Horizontal => self.factors.width,
            PropertyAxis::Vertical => self.factors.height,
        }
    }
}

impl std::fmt::Debug for StyleRewriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleRewriter")
            .field("factors", &self.factors)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
