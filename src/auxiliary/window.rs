use winit::dpi::{LogicalPosition, LogicalSize};
use winit::error::OsError;
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

use crate::auxiliary::config::Config;

/// Create a centered window sized to the configured display surface.
///
/// Returns the window, its physical width and height, and the hidpi factor.
pub fn create_window(
    title: &str,
    config: &Config,
    event_loop: &EventLoop<()>,
) -> Result<(Window, u32, u32, f64), OsError> {
    // Create a hidden window so we can position it before showing it
    let window = WindowBuilder::new()
        .with_visible(false)
        .with_title(title)
        .build(event_loop)?;
    let hidpi_factor = window.scale_factor();

    let width = f64::from(config.display_width());
    let height = f64::from(config.display_height());
    let (monitor_width, monitor_height) = {
        if let Some(monitor) = window.current_monitor() {
            let size = monitor.size().to_logical::<f64>(hidpi_factor);
            (size.width, size.height)
        } else {
            (width, height)
        }
    };

    // Shrinking below the logical grid would leave less than one screen pixel per cell
    let min_size = LogicalSize::new(
        f64::from(config.logical_width()),
        f64::from(config.logical_height()),
    );
    let default_size = LogicalSize::new(width, height);
    let center = LogicalPosition::new(
        ((monitor_width - width) / 2.0).max(0.0),
        ((monitor_height - height) / 2.0).max(0.0),
    );
    window.set_inner_size(default_size);
    window.set_min_inner_size(Some(min_size));
    window.set_outer_position(center);
    window.set_visible(true);

    let size = default_size.to_physical::<f64>(hidpi_factor);

    Ok((
        window,
        size.width.round() as u32,
        size.height.round() as u32,
        hidpi_factor,
    ))
}
