use crate::domain::chart::ChartConfig;
use crate::domain::errors::RenderingResult;

/// A live chart bound to a drawing surface.
pub trait ChartInstance {
    /// Release listeners and clear the surface.
    fn destroy(self);
}

/// Something a chart can be drawn on, e.g. the popup canvas.
pub trait ChartSurface {
    type Instance: ChartInstance;

    fn create(&self, config: ChartConfig) -> RenderingResult<Self::Instance>;

    /// Replace the surface contents with a centred text message.
    fn show_message(&self, message: &str) -> RenderingResult<()>;
}
