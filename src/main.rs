// filepath: src/main.rs

mod app;
mod pointer;
mod wayland;

use app::AppData;
use calloop::EventLoop;
use calloop_wayland_source::WaylandSource;
use hypr_paint::config::PaintConfig;
use hypr_paint::palette::STANDARD_PALETTE;
use hypr_paint::raster::Raster;
use hypr_paint::surface::PaintSurface;
use hypr_paint::text::TextRenderer;
use log::{info, warn};
use smithay_client_toolkit::{
    compositor::CompositorState,
    output::OutputState,
    registry::RegistryState,
    seat::SeatState,
    shell::xdg::{window::WindowDecorations, XdgShell},
    shm::{slot::SlotPool, Shm},
};
use std::time::Duration;
use wayland_client::{globals::registry_queue_init, Connection};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Starting hypr-paint");

    let config = PaintConfig::load_from_file().unwrap_or_else(|e| {
        warn!("Failed to load configuration, using defaults: {}", e);
        PaintConfig::default()
    });
    info!("Configuration loaded");

    let conn = Connection::connect_to_env()?;
    let (globals, mut event_queue) = registry_queue_init(&conn)?;
    let qh = event_queue.handle();

    let compositor = CompositorState::bind(&globals, &qh)?;
    let xdg_shell = XdgShell::bind(&globals, &qh)?;
    let shm = Shm::bind(&globals, &qh)?;
    let seat_state = SeatState::new(&globals, &qh);

    let raster = Raster::new(config.canvas_width, config.canvas_height);
    let surface = PaintSurface::new(raster, STANDARD_PALETTE, config.palette_position);
    let (width, height) = surface.window_size();

    let pool = SlotPool::new(width as usize * height as usize * 4, &shm)?;
    let text = TextRenderer::load(config.font_path.as_deref(), config.label_size);

    let wl_surface = compositor.create_surface(&qh);
    let window = xdg_shell.create_window(wl_surface, WindowDecorations::RequestServer, &qh);

    let mut app_data = AppData::new(
        RegistryState::new(&globals),
        OutputState::new(&globals, &qh),
        seat_state,
        compositor,
        shm,
        window,
        pool,
        surface,
        text,
        &config,
    );

    info!("Performing initial round-trip");
    event_queue.roundtrip(&mut app_data)?;

    let mut event_loop: EventLoop<AppData> = EventLoop::try_new()?;
    WaylandSource::new(conn.clone(), event_queue)
        .insert(event_loop.handle())
        .map_err(|e| e.error)?;

    info!("Entering event loop");
    while !app_data.exit {
        event_loop.dispatch(Duration::from_millis(16), &mut app_data)?;

        if app_data.is_configured() && app_data.needs_redraw() {
            if let Err(e) = app_data.draw() {
                warn!("Frame draw failed: {}", e);
            }
        }
    }

    info!("Exiting");
    Ok(())
}
