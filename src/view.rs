use raylib::prelude::*;

use crate::bounds::DisplayParams;
use crate::config::PanZoomConfig;
use crate::driver::PresentationHost;

/// Animated pan/zoom view over a set of textures.
///
/// Each `render` call from the driver becomes the target of an eased
/// transition: the view captures its current offset and scale as the
/// start, swaps the displayed image immediately and glides the
/// parameters over the configured transition duration. `draw` clips to
/// the frame rectangle, so panning never spills outside it.
pub struct PanZoomView {
    config: PanZoomConfig,
    current_image: usize,
    opacity: f32,

    offset: Vector2,
    scale: f32,

    start_offset: Vector2,
    start_scale: f32,

    end_offset: Vector2,
    end_scale: f32,

    animation_timer: f32,
    is_animating: bool,
}

impl PanZoomView {
    pub fn new(config: PanZoomConfig) -> Self {
        Self {
            config,
            current_image: 0,
            opacity: config.opacity,
            offset: Vector2::new(0.0, 0.0),
            scale: 1.0,
            start_offset: Vector2::new(0.0, 0.0),
            start_scale: 1.0,
            end_offset: Vector2::new(0.0, 0.0),
            end_scale: 1.0,
            animation_timer: 0.0,
            is_animating: false,
        }
    }

    pub fn current_image(&self) -> usize {
        self.current_image
    }

    pub fn offset(&self) -> Vector2 {
        self.offset
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    pub fn update(&mut self, dt: f32) {
        if !self.is_animating {
            return;
        }
        self.animation_timer += dt;
        let t = (self.animation_timer / self.config.transition_duration).min(1.0);
        let eased = ease_in_out_cubic(t);

        self.offset = self.start_offset.lerp(self.end_offset, eased);
        self.scale = raylib::core::math::lerp(self.start_scale, self.end_scale, eased);

        if self.animation_timer >= self.config.transition_duration {
            self.is_animating = false;
            self.offset = self.end_offset;
            self.scale = self.end_scale;
        }
    }

    /// Draw the current image into the frame whose top-left corner is at
    /// (frame_x, frame_y). `textures` is indexed by the image indices of
    /// the set the driver was built with.
    pub fn draw(
        &self,
        d: &mut RaylibDrawHandle,
        textures: &[Texture2D],
        frame_x: f32,
        frame_y: f32,
    ) {
        let Some(texture) = textures.get(self.current_image) else {
            return;
        };

        let mut d = d.begin_scissor_mode(
            frame_x as i32,
            frame_y as i32,
            self.config.frame_width as i32,
            self.config.frame_height as i32,
        );

        let tex_width = texture.width() as f32;
        let tex_height = texture.height() as f32;
        let scaled_width = tex_width * self.scale;
        let scaled_height = tex_height * self.scale;

        // Screen y grows downward; a positive y offset pans the image up.
        let center = Vector2::new(
            frame_x + self.config.frame_width / 2.0 + self.offset.x,
            frame_y + self.config.frame_height / 2.0 - self.offset.y,
        );
        let origin = Vector2::new(scaled_width / 2.0, scaled_height / 2.0);
        let tint = Color::new(255, 255, 255, (self.opacity * 255.0) as u8);

        d.draw_texture_pro(
            texture,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            Rectangle::new(center.x, center.y, scaled_width, scaled_height),
            origin,
            0.0,
            tint,
        );
    }
}

impl PresentationHost for PanZoomView {
    fn render(&mut self, params: DisplayParams, opacity: f32) {
        self.current_image = params.image;
        self.opacity = opacity;

        self.start_offset = self.offset;
        self.start_scale = self.scale;
        self.end_offset = Vector2::new(params.offset_x as f32, params.offset_y as f32);
        self.end_scale = params.scale_factor;

        self.animation_timer = 0.0;
        self.is_animating = true;
    }
}

fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> PanZoomConfig {
        PanZoomConfig {
            frame_width: 400.0,
            frame_height: 200.0,
            transition_duration: 4.0,
            ..PanZoomConfig::default()
        }
    }

    fn params(image: usize, scale_factor: f32, offset_x: i32, offset_y: i32) -> DisplayParams {
        DisplayParams {
            image,
            scale_factor,
            offset_x,
            offset_y,
        }
    }

    #[test]
    fn ease_hits_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
        assert!((ease_in_out_cubic(0.25) - 0.0625).abs() < 1e-6);
    }

    #[test]
    fn starts_static_at_natural_scale() {
        let view = PanZoomView::new(test_config());
        assert!(!view.is_animating());
        assert_eq!(view.scale(), 1.0);
        assert_eq!(view.offset(), Vector2::new(0.0, 0.0));
    }

    #[test]
    fn render_swaps_the_image_immediately() {
        let mut view = PanZoomView::new(test_config());
        view.render(params(3, 0.5, 100, -40), 0.8);
        assert_eq!(view.current_image(), 3);
        assert!(view.is_animating());
        // Parameters have not moved yet; they animate from here.
        assert_eq!(view.scale(), 1.0);
    }

    #[test]
    fn halfway_through_the_transition_sits_halfway() {
        let mut view = PanZoomView::new(test_config());
        view.render(params(0, 0.6, 100, -40), 1.0);
        view.update(2.0);
        assert!((view.offset().x - 50.0).abs() < 1e-4);
        assert!((view.offset().y + 20.0).abs() < 1e-4);
        assert!((view.scale() - 0.8).abs() < 1e-4);
        assert!(view.is_animating());
    }

    #[test]
    fn snaps_exactly_to_the_target_at_the_end() {
        let mut view = PanZoomView::new(test_config());
        view.render(params(1, 0.5, 150, 150), 1.0);
        view.update(4.0);
        assert!(!view.is_animating());
        assert_eq!(view.offset(), Vector2::new(150.0, 150.0));
        assert_eq!(view.scale(), 0.5);

        // Further time leaves the settled state untouched.
        view.update(10.0);
        assert_eq!(view.offset(), Vector2::new(150.0, 150.0));
    }

    #[test]
    fn new_render_restarts_from_the_current_pose() {
        let mut view = PanZoomView::new(test_config());
        view.render(params(0, 0.6, 100, 0), 1.0);
        view.update(2.0);
        let mid_offset = view.offset();
        let mid_scale = view.scale();

        view.render(params(1, 0.3, -60, 20), 1.0);
        assert_eq!(view.offset(), mid_offset);
        assert_eq!(view.scale(), mid_scale);

        view.update(4.0);
        assert_eq!(view.offset(), Vector2::new(-60.0, 20.0));
        assert!((view.scale() - 0.3).abs() < 1e-6);
    }
}
