use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;
use raylib::prelude::*;

mod bounds;
mod config;
mod constants;
mod driver;
mod image_set;
mod state;
mod ticker;
mod texture_loader;
mod view;

use crate::config::PanZoomConfig;
use crate::constants::*;
use crate::driver::RotationDriver;
use crate::image_set::{ImageInfo, ImageSet};
use crate::texture_loader::load_textures;
use crate::view::PanZoomView;

/// Pan-and-zoom image carousel demo.
#[derive(Parser)]
#[command(name = "pzimage")]
struct Cli {
    /// Directory containing the images to rotate through
    directory: PathBuf,

    /// Seconds an image is displayed before the next one is picked
    #[arg(long, default_value_t = 10.0)]
    display_interval: f32,

    /// Seconds the eased pan/zoom transition lasts
    #[arg(long, default_value_t = DEFAULT_TRANSITION_DURATION)]
    transition_duration: f32,

    /// Image opacity, 0.0 to 1.0
    #[arg(long, default_value_t = 0.8)]
    opacity: f32,

    /// Height of the image frame in pixels
    #[arg(long, default_value_t = DEFAULT_FRAME_HEIGHT)]
    frame_height: f32,

    /// Minimum zoom level in tenths of scale
    #[arg(long, default_value_t = DEFAULT_MIN_ZOOM_LEVEL)]
    min_zoom_level: u32,

    /// Maximum zoom level in tenths of scale
    #[arg(long, default_value_t = DEFAULT_MAX_ZOOM_LEVEL)]
    max_zoom_level: u32,

    /// Caption drawn over the bottom right corner of the frame
    #[arg(long, default_value = "Welcome to")]
    caption: String,

    /// Headline drawn under the caption
    #[arg(long, default_value = "New York")]
    headline: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Pan & Zoom Carousel")
        .vsync()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Images ---
    let textures = load_textures(&mut rl, &thread, &cli.directory)?;
    info!("loaded {} images from {}", textures.len(), cli.directory.display());

    let images = ImageSet::new(
        textures
            .iter()
            .map(|t| ImageInfo::new(t.width() as f32, t.height() as f32))
            .collect(),
    )?;

    // The frame spans the window; the component default interval is
    // 5 s, the demo deliberately runs a slower 10 s rotation.
    let pz_config = PanZoomConfig {
        frame_width: WINDOW_WIDTH as f32,
        frame_height: cli.frame_height,
        opacity: cli.opacity,
        display_interval: cli.display_interval,
        transition_duration: cli.transition_duration,
        min_zoom_level: cli.min_zoom_level,
        max_zoom_level: cli.max_zoom_level,
    };

    let mut view = PanZoomView::new(pz_config);
    let mut driver = RotationDriver::new(images, pz_config)?;

    // First image appears right away; the interval only paces the rest.
    driver.activate(&mut view);

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        driver.advance(dt, &mut view);
        view.update(dt);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);

        view.draw(&mut d, &textures, 0.0, 0.0);
        draw_captions(&mut d, &cli, pz_config.frame_height);
    }

    driver.deactivate();
    Ok(())
}

/// Caption and headline, right-aligned at the bottom of the frame with a
/// drop shadow so they read on bright images.
fn draw_captions(d: &mut RaylibDrawHandle, cli: &Cli, frame_height: f32) {
    const CAPTION_SIZE: i32 = 20;
    const HEADLINE_SIZE: i32 = 40;
    const MARGIN: i32 = 16;

    let right = WINDOW_WIDTH - MARGIN;
    let headline_y = frame_height as i32 - MARGIN - HEADLINE_SIZE;
    let caption_y = headline_y - CAPTION_SIZE - 4;

    draw_shadowed_text(d, &cli.caption, right, caption_y, CAPTION_SIZE);
    draw_shadowed_text(d, &cli.headline, right, headline_y, HEADLINE_SIZE);
}

fn draw_shadowed_text(d: &mut RaylibDrawHandle, text: &str, right: i32, y: i32, size: i32) {
    let x = right - measure_text(text, size);
    d.draw_text(text, x + 2, y + 2, size, Color::BLACK);
    d.draw_text(text, x, y, size, Color::RAYWHITE);
}
