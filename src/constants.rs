pub const WINDOW_WIDTH: i32 = 800;            // Width of the demo window
pub const WINDOW_HEIGHT: i32 = 600;           // Height of the demo window
pub const FPS: u32 = 60;                      // Frames per second

pub const DEFAULT_FRAME_HEIGHT: f32 = 200.0;      // Height of the image frame (pixels)
pub const DEFAULT_OPACITY: f32 = 1.0;             // Image opacity (0.0 ..= 1.0)
pub const DEFAULT_DISPLAY_INTERVAL: f32 = 5.0;    // Seconds an image is shown before the next pick
pub const DEFAULT_TRANSITION_DURATION: f32 = 5.0; // Seconds of eased pan/zoom per change
pub const DEFAULT_MIN_ZOOM_LEVEL: u32 = 3;        // Zoom levels are integer tenths of scale
pub const DEFAULT_MAX_ZOOM_LEVEL: u32 = 7;
