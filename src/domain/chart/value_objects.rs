use derive_more::Display;
use serde::Serialize;
use strum::{AsRefStr, EnumString};

use crate::number_utils::to_fixed;

/// Value Object - Chart type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[display(fmt = "Line")]
    #[strum(serialize = "line")]
    Line,
}

/// Value Object - CSS colour of the dataset line
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize)]
#[display(fmt = "{}", _0)]
pub struct LineColor(String);

impl LineColor {
    pub fn new(css: impl Into<String>) -> Self {
        Self(css.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// How the tooltip picks the point it describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionMode {
    /// Closest point to the pointer.
    Nearest,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisOptions {
    pub display: bool,
    pub begin_at_zero: bool,
    /// Prepended to every tick label.
    pub tick_prefix: String,
}

impl AxisOptions {
    pub fn hidden() -> Self {
        Self { display: false, begin_at_zero: false, tick_prefix: String::new() }
    }

    pub fn currency() -> Self {
        Self { display: true, begin_at_zero: false, tick_prefix: "$".to_string() }
    }

    /// Tick label: prefix followed by the plain numeric value.
    pub fn format_tick(&self, value: f64) -> String {
        format!("{}{}", self.tick_prefix, value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipOptions {
    pub mode: InteractionMode,
    /// When false the tooltip shows even if the pointer is not over a point.
    pub intersect: bool,
    pub label_prefix: String,
    pub decimals: u32,
}

impl Default for TooltipOptions {
    fn default() -> Self {
        Self { mode: InteractionMode::Nearest, intersect: false, label_prefix: "$".to_string(), decimals: 2 }
    }
}

impl TooltipOptions {
    pub fn format_label(&self, value: f64) -> String {
        format!("{}{}", self.label_prefix, to_fixed(value, self.decimals))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub x_axis: AxisOptions,
    pub y_axis: AxisOptions,
    pub tooltip: TooltipOptions,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            x_axis: AxisOptions::hidden(),
            y_axis: AxisOptions::currency(),
            tooltip: TooltipOptions::default(),
        }
    }
}
