use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::geometry::ChartLayout;
use crate::config::PopupConfig;
use crate::domain::{
    chart::{ChartConfig, ChartInstance, ChartSurface},
    errors::{AppError, RenderingResult},
    logging::{LogComponent, get_logger},
};
use crate::event_utils::pointer_listeners;
use crate::log_warn;

const FONT: &str = "11px sans-serif";
const GRID_COLOR: &str = "rgba(0, 0, 0, 0.1)";
const TICK_COLOR: &str = "#666";
const TOOLTIP_BG: &str = "rgba(0, 0, 0, 0.8)";
const LINE_WIDTH: f64 = 2.0;

/// Draws line charts on the popup canvas, looked up by element id.
pub struct CanvasChartSurface {
    canvas_id: String,
    fallback_width: u32,
    fallback_height: u32,
}

impl CanvasChartSurface {
    pub fn new(canvas_id: impl Into<String>, config: &PopupConfig) -> Self {
        Self {
            canvas_id: canvas_id.into(),
            fallback_width: config.fallback_width,
            fallback_height: config.fallback_height,
        }
    }

    /// Canvas element and 2D context, with the backing store sized to the
    /// element's layout size (responsive, aspect ratio not kept).
    fn canvas_context(&self) -> RenderingResult<(HtmlCanvasElement, CanvasRenderingContext2d)> {
        let canvas = gloo::utils::document()
            .get_element_by_id(&self.canvas_id)
            .ok_or_else(|| AppError::RenderingError(format!("canvas #{} not found", self.canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| AppError::RenderingError(format!("#{} is not a canvas", self.canvas_id)))?;

        let width = u32::try_from(canvas.client_width()).ok().filter(|w| *w > 0);
        let height = u32::try_from(canvas.client_height()).ok().filter(|h| *h > 0);
        canvas.set_width(width.unwrap_or(self.fallback_width));
        canvas.set_height(height.unwrap_or(self.fallback_height));

        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| AppError::RenderingError("2D context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AppError::RenderingError("Failed to cast to 2D context".to_string()))?;

        Ok((canvas, context))
    }
}

impl ChartSurface for CanvasChartSurface {
    type Instance = CanvasChart;

    fn create(&self, config: ChartConfig) -> RenderingResult<CanvasChart> {
        let (canvas, context) = self.canvas_context()?;
        let scene = Rc::new(ChartScene::new(config, canvas.width() as f64, canvas.height() as f64));
        scene.draw(&context)?;

        let listeners = {
            let (move_scene, move_ctx) = (scene.clone(), context.clone());
            let (leave_scene, leave_ctx) = (scene.clone(), context.clone());
            pointer_listeners(
                &canvas,
                move |x, y| {
                    if let Err(e) = move_scene.draw_with_tooltip(&move_ctx, x, y) {
                        log_warn!(LogComponent::Infrastructure("CanvasChart"), "tooltip redraw failed: {:?}", e);
                    }
                },
                move || {
                    if let Err(e) = leave_scene.draw(&leave_ctx) {
                        log_warn!(LogComponent::Infrastructure("CanvasChart"), "redraw failed: {:?}", e);
                    }
                },
            )
        };

        get_logger().debug(
            LogComponent::Infrastructure("CanvasChart"),
            &format!("chart created with {} points", scene.config.point_count()),
        );

        Ok(CanvasChart { canvas, context, listeners })
    }

    fn show_message(&self, message: &str) -> RenderingResult<()> {
        let (canvas, context) = self.canvas_context()?;
        let (w, h) = (canvas.width() as f64, canvas.height() as f64);
        context.clear_rect(0.0, 0.0, w, h);
        context.set_font(FONT);
        context.set_fill_style_str(TICK_COLOR);
        context.set_text_align("center");
        context.set_text_baseline("middle");
        context.fill_text(message, w / 2.0, h / 2.0)?;
        Ok(())
    }
}

/// A chart drawn on the canvas plus its pointer listeners.
pub struct CanvasChart {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    listeners: Vec<EventListener>,
}

impl ChartInstance for CanvasChart {
    fn destroy(self) {
        drop(self.listeners);
        self.context
            .clear_rect(0.0, 0.0, self.canvas.width() as f64, self.canvas.height() as f64);
    }
}

/// Immutable drawing data shared by the instance and its listeners.
struct ChartScene {
    config: ChartConfig,
    layout: ChartLayout,
}

impl ChartScene {
    fn new(config: ChartConfig, width: f64, height: f64) -> Self {
        let layout = ChartLayout::new(width, height, config.values());
        Self { config, layout }
    }

    fn draw(&self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        let layout = &self.layout;
        ctx.clear_rect(0.0, 0.0, layout.width, layout.height);
        ctx.set_font(FONT);

        if self.config.options.y_axis.display {
            self.draw_y_axis(ctx)?;
        }

        let values = self.config.values();
        if values.is_empty() {
            return Ok(());
        }

        let color = self.config.line_color().map(|c| c.as_str()).unwrap_or("black");
        ctx.set_stroke_style_str(color);
        ctx.set_line_width(LINE_WIDTH);
        ctx.begin_path();
        for (i, &v) in values.iter().enumerate() {
            let (x, y) = (layout.x_at(i), layout.y_at(v));
            if i == 0 { ctx.move_to(x, y) } else { ctx.line_to(x, y) }
        }
        ctx.stroke();
        Ok(())
    }

    fn draw_y_axis(&self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        let layout = &self.layout;
        ctx.set_text_align("right");
        ctx.set_text_baseline("middle");
        ctx.set_line_width(1.0);
        ctx.set_stroke_style_str(GRID_COLOR);
        ctx.set_fill_style_str(TICK_COLOR);
        for tick in layout.y_ticks() {
            let y = layout.y_at(tick);
            ctx.begin_path();
            ctx.move_to(layout.left(), y);
            ctx.line_to(layout.right(), y);
            ctx.stroke();
            ctx.fill_text(&self.config.options.y_axis.format_tick(tick), layout.left() - 6.0, y)?;
        }
        Ok(())
    }

    fn draw_with_tooltip(&self, ctx: &CanvasRenderingContext2d, x: f64, y: f64) -> Result<(), JsValue> {
        self.draw(ctx)?;
        let values = self.config.values();
        let Some(index) = self.layout.nearest_index(values, x, y) else {
            return Ok(());
        };

        let layout = &self.layout;
        let (px, py) = (layout.x_at(index), layout.y_at(values[index]));
        let color = self.config.line_color().map(|c| c.as_str()).unwrap_or("black");
        ctx.set_fill_style_str(color);
        ctx.begin_path();
        ctx.arc(px, py, 3.0, 0.0, std::f64::consts::TAU)?;
        ctx.fill();

        let title = self.config.labels().get(index).map(String::as_str).unwrap_or_default();
        let body = self.config.options.tooltip.format_label(values[index]);
        let text_width = ctx.measure_text(title)?.width().max(ctx.measure_text(&body)?.width());
        let (box_w, box_h) = (text_width + 12.0, 36.0);
        let box_x = if px + 8.0 + box_w > layout.width { px - 8.0 - box_w } else { px + 8.0 };
        let box_y = (py - box_h / 2.0).clamp(0.0, (layout.height - box_h).max(0.0));

        ctx.set_fill_style_str(TOOLTIP_BG);
        ctx.fill_rect(box_x, box_y, box_w, box_h);
        ctx.set_fill_style_str("white");
        ctx.set_text_align("left");
        ctx.set_text_baseline("top");
        ctx.fill_text(title, box_x + 6.0, box_y + 4.0)?;
        ctx.fill_text(&body, box_x + 6.0, box_y + 19.0)?;
        Ok(())
    }
}
