#![deny(clippy::all)]
#![forbid(unsafe_code)]

use log::{debug, error, info};
use pixels::{Pixels, SurfaceTexture};
use winit::event::{Event, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit_input_helper::WinitInputHelper;

use crate::auxiliary::config::Config;
use crate::auxiliary::diagnostics::summary;
use crate::auxiliary::location::FileLocation;
use crate::auxiliary::window::create_window;
use crate::error::AppError;
use crate::generation::sampler::IdentifierSampler;
use crate::generation::session::Session;
use crate::projects::entry::{Entry, EntryAction};

const TITLE: &str = "pixel_seed";

fn title(current: Option<&str>, entry: &Entry) -> String {
    format!("{} #{}  > {}", TITLE, current.unwrap_or_default(), entry.text())
}

pub fn run_seeded(config: Config) -> Result<(), AppError> {
    env_logger::init();
    let event_loop = EventLoop::new();
    let mut input = WinitInputHelper::new();
    let (window, p_width, p_height, mut _hidpi_factor) =
        create_window(TITLE, &config, &event_loop)?;

    let surface_texture = SurfaceTexture::new(p_width, p_height, &window);
    // pixels upscales the logical grid to the surface without smoothing
    let mut pixels = Pixels::new(config.logical_width(), config.logical_height(), surface_texture)?;

    let sampler = IdentifierSampler::new(&config);
    let counts = summary(&config, sampler.alphabet().len());
    info!("{}", counts);
    println!("{}", counts);

    let location = FileLocation::new(config.location_path());
    let mut session = Session::new(&config, sampler, location);
    session.resume(&mut pixels);

    let mut entry = Entry::new(config.max_identifier_length());
    entry.reset(session.current());
    window.set_title(&title(session.current(), &entry));

    event_loop.run(move |event, _, control_flow| {
        // The one and only event that winit_input_helper doesn't have for us...
        if let Event::RedrawRequested(_) = event {
            if pixels
                .render()
                .map_err(|e| error!("pixels.render() failed: {}", e))
                .is_err()
            {
                *control_flow = ControlFlow::Exit;
                return;
            }
        }

        // ...and typed text, which arrives as characters rather than keys.
        if let Event::WindowEvent {
            event: WindowEvent::ReceivedCharacter(c),
            ..
        } = &event
        {
            let action = entry.push(*c);
            if action == EntryAction::Submit {
                let submitted = entry.text().to_owned();
                debug!("submitted {:?}", submitted);
                session.submit(&submitted, &mut pixels);
                entry.reset(session.current());
                window.request_redraw();
            }
            if action != EntryAction::Ignored {
                window.set_title(&title(session.current(), &entry));
            }
        }

        // For everything else, let winit_input_helper collect events to build its state.
        if input.update(&event) {
            // Close events
            if input.key_pressed(VirtualKeyCode::Escape) || input.quit() {
                *control_flow = ControlFlow::Exit;
                return;
            }
            // Adjust high DPI factor
            if let Some(factor) = input.scale_factor_changed() {
                _hidpi_factor = factor;
            }
            // Resize the window
            if let Some(size) = input.window_resized() {
                pixels.resize_surface(size.width, size.height);
                window.request_redraw();
            }
        }
    });
}
