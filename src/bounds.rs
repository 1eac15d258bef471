use rand::Rng;

use crate::config::PanZoomConfig;
use crate::image_set::ImageInfo;

/// Target of one pan/zoom cycle: which image to show, how far to zoom
/// and where to pan. Recomputed from scratch on every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayParams {
    pub image: usize,
    pub scale_factor: f32,
    pub offset_x: i32,
    pub offset_y: i32,
}

/// Draw a scale factor uniformly from the configured tenths range.
pub fn draw_scale_factor<R: Rng + ?Sized>(rng: &mut R, config: &PanZoomConfig) -> f32 {
    rng.random_range(config.min_zoom_level..=config.max_zoom_level) as f32 / 10.0
}

/// Maximum pan distance per axis that keeps the frame inside the scaled
/// image, assuming the scaled image covers the frame in that axis.
///
/// When it does not (the caller picked a zoom range too small for the
/// frame), the limit comes back negative and the offset draw degenerates
/// to 0: the image stays centered and its edges show, but nothing
/// faults. Covering the frame is the caller's contract, not checked
/// here.
pub fn pan_limits(scale_factor: f32, image: ImageInfo, config: &PanZoomConfig) -> (f32, f32) {
    let limit_x = scale_factor * (image.width / 2.0 - config.frame_width / 2.0);
    let limit_y = scale_factor * (image.height / 2.0 - config.frame_height / 2.0);
    (limit_x, limit_y)
}

/// Draw an integer offset uniformly from [-limit, limit], truncating the
/// limit to whole pixels.
pub fn draw_offset<R: Rng + ?Sized>(rng: &mut R, limit: f32) -> i32 {
    let span = limit.max(0.0) as i32;
    rng.random_range(-span..=span)
}

/// Compute fresh display parameters for the given image: one scale draw,
/// then one independent offset draw per axis.
pub fn draw_params<R: Rng + ?Sized>(
    rng: &mut R,
    image_index: usize,
    image: ImageInfo,
    config: &PanZoomConfig,
) -> DisplayParams {
    let scale_factor = draw_scale_factor(rng, config);
    let (limit_x, limit_y) = pan_limits(scale_factor, image, config);
    DisplayParams {
        image: image_index,
        scale_factor,
        offset_x: draw_offset(rng, limit_x),
        offset_y: draw_offset(rng, limit_y),
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn test_config() -> PanZoomConfig {
        PanZoomConfig {
            frame_width: 400.0,
            frame_height: 200.0,
            ..PanZoomConfig::default()
        }
    }

    #[test]
    fn limits_match_worked_example() {
        // 1000x800 image in a 400x200 frame at half scale.
        let image = ImageInfo::new(1000.0, 800.0);
        let (limit_x, limit_y) = pan_limits(0.5, image, &test_config());
        assert_eq!(limit_x, 150.0);
        assert_eq!(limit_y, 150.0);
    }

    #[test]
    fn offsets_stay_within_limits() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1000 {
            let offset = draw_offset(&mut rng, 150.0);
            assert!((-150..=150).contains(&offset));
        }
    }

    #[test]
    fn negative_limit_degenerates_to_center() {
        // Image smaller than the frame: pan is impossible, stay put.
        let mut rng = StdRng::seed_from_u64(12);
        for _ in 0..50 {
            assert_eq!(draw_offset(&mut rng, -80.0), 0);
        }
    }

    #[test]
    fn scale_factor_is_a_configured_tenth() {
        let config = test_config();
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..1000 {
            let scale = draw_scale_factor(&mut rng, &config);
            let tenths = (scale * 10.0).round() as u32;
            assert!((config.min_zoom_level..=config.max_zoom_level).contains(&tenths));
            assert!((scale - tenths as f32 / 10.0).abs() < 1e-6);
        }
    }

    #[test]
    fn pinned_zoom_range_always_yields_that_scale() {
        let config = PanZoomConfig {
            min_zoom_level: 10,
            max_zoom_level: 10,
            ..test_config()
        };
        let mut rng = StdRng::seed_from_u64(14);
        for _ in 0..100 {
            assert_eq!(draw_scale_factor(&mut rng, &config), 1.0);
        }
    }

    #[test]
    fn params_honor_limits_for_every_draw() {
        let config = test_config();
        let image = ImageInfo::new(1000.0, 800.0);
        let mut rng = StdRng::seed_from_u64(15);
        for _ in 0..1000 {
            let params = draw_params(&mut rng, 0, image, &config);
            let (limit_x, limit_y) = pan_limits(params.scale_factor, image, &config);
            assert!(params.offset_x.abs() as f32 <= limit_x);
            assert!(params.offset_y.abs() as f32 <= limit_y);
        }
    }
}
