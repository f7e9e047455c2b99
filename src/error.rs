use thiserror::Error;

/// Failures setting up the display. Nothing in the generation pipeline can fail.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("failed to create pixel surface: {0}")]
    Pixels(#[from] pixels::Error),
}
