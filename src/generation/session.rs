#![deny(clippy::all)]
#![forbid(unsafe_code)]

use std::time::Instant;

use log::{debug, info, warn};

use crate::auxiliary::config::Config;
use crate::generation::painter::PixelPainter;
use crate::generation::sampler::IdentifierSampler;
use crate::traits_and_structs::collaborators::{LocationSlot, RenderTarget};
use crate::traits_and_structs::pixel_buffer::PixelBuffer;

/// Drives renders: picks the identifier, paints, presents and persists.
///
/// The only state kept between renders is which identifier is on screen.
pub struct Session<L: LocationSlot> {
    painter: PixelPainter,
    sampler: IdentifierSampler,
    location: L,
    current: Option<String>,
}

impl<L: LocationSlot> Session<L> {
    pub fn new(config: &Config, sampler: IdentifierSampler, location: L) -> Self {
        Self {
            painter: PixelPainter::new(config),
            sampler,
            location,
            current: None,
        }
    }

    /// The identifier currently displayed, if anything has been rendered.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    /// Render whatever the location slot holds, or a fresh identifier if it is empty.
    pub fn resume<T: RenderTarget + ?Sized>(&mut self, target: &mut T) -> PixelBuffer {
        let saved = match self.location.load() {
            Ok(saved) => saved.filter(|s| !s.is_empty()),
            Err(e) => {
                warn!("ignoring saved identifier: {}", e);
                None
            }
        };
        if let Some(id) = &saved {
            info!("resuming {:?}", id);
        }
        self.render(saved.as_deref(), target)
    }

    /// Render user input. Submitting the displayed identifier again, or nothing at
    /// all, asks for something new instead.
    pub fn submit<T: RenderTarget + ?Sized>(&mut self, input: &str, target: &mut T) -> PixelBuffer {
        if input.is_empty() || self.current.as_deref() == Some(input) {
            let fresh = self.fresh_identifier();
            self.render(Some(&fresh), target)
        } else {
            self.render(Some(input), target)
        }
    }

    /// Paint `identifier` (sampling one if `None`), hand it to `target` and persist it.
    pub fn render<T: RenderTarget + ?Sized>(
        &mut self,
        identifier: Option<&str>,
        target: &mut T,
    ) -> PixelBuffer {
        let start = Instant::now();
        let identifier = match identifier {
            Some(id) => id.to_owned(),
            None => self.sampler.sample(None),
        };

        let buffer = self.painter.paint(&identifier);
        target.present(&buffer);

        if let Err(e) = self.location.store(&identifier) {
            warn!("could not save identifier: {}", e);
        }
        debug!(
            "rendered {}x{} for {:?} in {:?}",
            buffer.width(),
            buffer.height(),
            identifier,
            start.elapsed()
        );
        self.current = Some(identifier);
        buffer
    }

    fn fresh_identifier(&mut self) -> String {
        loop {
            let id = self.sampler.sample(None);
            if self.current.as_deref() != Some(id.as_str()) {
                return id;
            }
            debug!("sampled the displayed identifier again, redrawing");
        }
    }
}
