// filepath: src/app.rs
//! Main application logic for hypr-paint

use hypr_paint::config::PaintConfig;
use hypr_paint::draw::{compose_frame, Canvas};
use hypr_paint::input::{route_pointer, PointerInput};
use hypr_paint::raster::Raster;
use hypr_paint::surface::PaintSurface;
use hypr_paint::text::TextRenderer;
use log::{debug, info};
use smithay_client_toolkit::{
    compositor::CompositorState,
    output::OutputState,
    registry::RegistryState,
    seat::SeatState,
    shell::{xdg::window::Window, WaylandSurface},
    shm::{slot::SlotPool, Shm},
};
use wayland_client::protocol::{wl_pointer, wl_shm};

pub struct AppData {
    registry_state: RegistryState,
    output_state: OutputState,
    seat_state: SeatState,
    _compositor_state: CompositorState,
    shm_state: Shm,
    window: Window,
    pool: SlotPool,
    configured: bool,
    needs_redraw: bool,
    pub(crate) exit: bool,
    pointer: Option<wl_pointer::WlPointer>,
    surface: PaintSurface<Raster>,
    text: Option<TextRenderer>,
}

impl AppData {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        registry_state: RegistryState,
        output_state: OutputState,
        seat_state: SeatState,
        compositor_state: CompositorState,
        shm_state: Shm,
        window: Window,
        pool: SlotPool,
        surface: PaintSurface<Raster>,
        text: Option<TextRenderer>,
        config: &PaintConfig,
    ) -> Self {
        let (width, height) = surface.window_size();
        info!("Configuring window {}x{}", width, height);
        window.set_title(config.title.clone());
        window.set_app_id("hypr-paint");
        // fixed size, the layout is never recomputed
        window.set_min_size(Some((width, height)));
        window.set_max_size(Some((width, height)));
        window.wl_surface().commit();

        Self {
            registry_state,
            output_state,
            seat_state,
            _compositor_state: compositor_state,
            shm_state,
            window,
            pool,
            configured: false,
            needs_redraw: false,
            exit: false,
            pointer: None,
            surface,
            text,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    pub fn set_configured(&mut self, configured: bool) {
        self.configured = configured;
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    pub fn handle_input(&mut self, input: PointerInput) {
        debug!("Routing pointer input {:?}", input);
        if route_pointer(&mut self.surface, input) {
            self.request_redraw();
        }
    }

    pub fn draw(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        if !self.configured {
            debug!("draw() called before surface is configured, skipping");
            return Ok(());
        }

        let (width, height) = self.surface.window_size();
        let stride = width * 4;
        debug!("Drawing frame {}x{}", width, height);

        let (buffer, pixels) = self.pool.create_buffer(
            width as i32,
            height as i32,
            stride as i32,
            wl_shm::Format::Argb8888,
        )?;

        let mut canvas = Canvas::new(pixels, width, height);
        compose_frame(&mut canvas, &self.surface, self.text.as_ref());

        let wl_surface = self.window.wl_surface();
        buffer.attach_to(wl_surface)?;
        wl_surface.damage_buffer(0, 0, width as i32, height as i32);
        wl_surface.commit();

        self.needs_redraw = false;
        Ok(())
    }

    pub fn registry_state(&mut self) -> &mut RegistryState {
        &mut self.registry_state
    }

    pub fn output_state(&mut self) -> &mut OutputState {
        &mut self.output_state
    }

    pub fn seat_state(&mut self) -> &mut SeatState {
        &mut self.seat_state
    }

    pub fn shm_state(&mut self) -> &mut Shm {
        &mut self.shm_state
    }

    pub fn set_pointer(&mut self, pointer: Option<wl_pointer::WlPointer>) {
        self.pointer = pointer;
        info!("Pointer set: {:?}", self.pointer.is_some());
    }

    pub fn close(&mut self) {
        info!("Window closed");
        self.exit = true;
    }
}
