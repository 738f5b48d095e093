use super::value_objects::{ChartOptions, ChartType, LineColor};
use crate::domain::market_data::PriceHistory;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: LineColor,
    pub fill: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// Everything a chart surface needs to draw one line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl ChartConfig {
    /// Line chart of `history`: one label per date, prices rounded to cents.
    pub fn price_line(history: &PriceHistory, label: &str, color: LineColor) -> Self {
        let dataset = Dataset {
            label: label.to_string(),
            data: history.prices().map(|p| p.rounded_to_cents()).collect(),
            border_color: color,
            fill: false,
        };
        Self {
            chart_type: ChartType::Line,
            data: ChartData {
                labels: history.labels().map(|d| d.to_string()).collect(),
                datasets: vec![dataset],
            },
            options: ChartOptions::default(),
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.data.labels
    }

    /// Values of the first dataset.
    pub fn values(&self) -> &[f64] {
        self.data.datasets.first().map(|d| d.data.as_slice()).unwrap_or(&[])
    }

    pub fn line_color(&self) -> Option<&LineColor> {
        self.data.datasets.first().map(|d| &d.border_color)
    }

    pub fn point_count(&self) -> usize {
        self.values().len()
    }
}
