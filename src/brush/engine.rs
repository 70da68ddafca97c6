//! Dab application - ties mask evaluation and blending to the raster
//! surface
//!
//! One dab is the fetch-blend-write cycle for a single window: read the
//! `2r x 2r` region under the brush, blend the mask into it, and write it
//! back. The surface owns all edge clipping; the engine always asks for
//! the full window so mask indices line up with window indices.

use super::blend::blend_window;
use super::mask::MaskCache;
use super::sampler::sample_positions;
use super::{BrushSpec, KernelKind};
use crate::core::errors::CoreError;
use crate::input::Position;
use crate::raster::RasterSurface;

/// Paint one dab centered on `center`.
///
/// The window's top-left corner is `(center - radius)` on both axes; it
/// may straddle the buffer edges, in which case the surface clips.
pub fn paint_dab(
    surface: &mut dyn RasterSurface,
    cache: &MaskCache,
    spec: &BrushSpec,
    kind: KernelKind,
    center: Position,
) -> Result<(), CoreError> {
    let radius = spec.mask_radius();
    let size = 2 * radius;
    let mask = cache.get(radius, kind);

    let mut window = surface.read_window(
        center.x - radius as i32,
        center.y - radius as i32,
        size,
        size,
    )?;
    blend_window(&mut window, &mask, spec.color, spec.flow_rate, kind);
    surface.write_window(&window)
}

/// Paint one motion sample: a single dab for most tools, a gap-filling
/// run of dabs for the Linear tool.
pub fn paint_sample(
    surface: &mut dyn RasterSurface,
    cache: &MaskCache,
    spec: &BrushSpec,
    kind: KernelKind,
    previous: Option<Position>,
    current: Position,
) -> Result<(), CoreError> {
    for position in sample_positions(kind, previous, current) {
        paint_dab(surface, cache, spec, kind, position)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush::Color;
    use crate::raster::PixelBuffer;

    const WHITE: [u8; 4] = [255, 255, 255, 255];

    #[test]
    fn test_constant_dab_paints_exact_disc() {
        // Constant tool, radius 5, #FF0000, flow 1.0, white 200x200 buffer
        let mut buffer = PixelBuffer::filled(200, 200, WHITE);
        let cache = MaskCache::new();
        let spec = BrushSpec::new(5.0, Color::new(255, 0, 0), 1.0);

        paint_dab(
            &mut buffer,
            &cache,
            &spec,
            KernelKind::Constant,
            Position::new(100, 100),
        )
        .unwrap();

        // Every pixel of the 10x10 window at distance <= 5 from the
        // center is pure red; everything else is untouched white
        for y in 90..110u32 {
            for x in 90..110u32 {
                let dx = 100.0 - x as f32;
                let dy = 100.0 - y as f32;
                let distance = (dx * dx + dy * dy).sqrt();
                let in_window = (95..105).contains(&x) && (95..105).contains(&y);

                let pixel = buffer.pixel(x, y).unwrap();
                if in_window && distance <= 5.0 {
                    assert_eq!(pixel, &[255, 0, 0, 255], "painted pixel ({x}, {y})");
                } else {
                    assert_eq!(pixel, &WHITE, "untouched pixel ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn test_linear_dab_half_flow_center_blend() {
        let mut buffer = PixelBuffer::filled(200, 200, WHITE);
        let cache = MaskCache::new();
        let spec = BrushSpec::new(5.0, Color::new(255, 0, 0), 0.5);

        paint_dab(
            &mut buffer,
            &cache,
            &spec,
            KernelKind::Linear,
            Position::new(100, 100),
        )
        .unwrap();

        let center = buffer.pixel(100, 100).unwrap();
        assert_eq!(center[0], 255);
        assert!(center[1] == 127 || center[1] == 128);
        assert!(center[2] == 127 || center[2] == 128);
        assert_eq!(center[3], 255);
    }

    #[test]
    fn test_dab_at_origin_clips_to_buffer_corner() {
        // Radius 10 at (0, 0) on 640x480: the window straddles the
        // top-left corner and must clip, not crash
        let mut buffer = PixelBuffer::filled(640, 480, WHITE);
        let cache = MaskCache::new();
        let spec = BrushSpec::new(10.0, Color::BLACK, 1.0);

        paint_dab(
            &mut buffer,
            &cache,
            &spec,
            KernelKind::Constant,
            Position::new(0, 0),
        )
        .unwrap();

        assert_eq!(buffer.pixel(0, 0), Some([0, 0, 0, 255].as_slice()));
        // Beyond the radius the buffer is untouched
        assert_eq!(buffer.pixel(20, 20), Some(WHITE.as_slice()));
    }

    #[test]
    fn test_gap_filled_sample_covers_every_column() {
        let mut buffer = PixelBuffer::filled(200, 200, WHITE);
        let cache = MaskCache::new();
        let spec = BrushSpec::new(5.0, Color::new(255, 0, 0), 1.0);

        paint_sample(
            &mut buffer,
            &cache,
            &spec,
            KernelKind::Linear,
            Some(Position::new(50, 50)),
            Position::new(60, 50),
        )
        .unwrap();

        // Continuous line: every intermediate x has a touched pixel at
        // y = 50
        for x in 51..=60u32 {
            let pixel = buffer.pixel(x, 50).unwrap();
            assert_ne!(pixel, &WHITE, "gap at x = {x}");
        }
    }
}
