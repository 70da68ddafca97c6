//! Blend engine - applies a weight mask and brush color into window pixels
//!
//! Standard kernels blend each channel toward the brush color by
//! `weight * flow_rate`. The Trippy kernel deliberately cross-wires the
//! channels: new red derives from old blue, new blue from old red, and
//! new green ignores the old green entirely. That channel swap is flavor,
//! not a defect.

use super::mask::Mask;
use super::{Color, KernelKind};
use crate::raster::PixelWindow;

/// Blend `mask`-weighted paint into `window` in place.
///
/// Sentinel (outside-circle) pixels are left untouched; every painted
/// pixel is forced fully opaque. Ripple and Trippy weights arrive
/// unclamped and may be far outside [0, 1] or even non-finite near
/// Trippy's tangent poles; channel values are resolved to the byte range
/// only at the final write.
pub fn blend_window(
    window: &mut PixelWindow,
    mask: &Mask,
    color: Color,
    flow_rate: f32,
    kind: KernelKind,
) {
    debug_assert_eq!(window.width as usize, mask.size());
    debug_assert_eq!(window.height as usize, mask.size());

    let (r, g, b) = (color.r as f32, color.g as f32, color.b as f32);

    for row in 0..window.height as usize {
        for col in 0..window.width as usize {
            let Some(weight) = mask.weight(row, col) else {
                continue;
            };
            let wf = weight * flow_rate;
            let pixel = window.pixel_mut(row, col);

            match kind {
                KernelKind::Trippy => {
                    let old_r = pixel[0] as f32;
                    let old_b = pixel[2] as f32;
                    pixel[0] = to_channel_byte(r * wf + (1.0 - wf) * old_b);
                    // The green term blends toward a constant rather than
                    // the old green value.
                    pixel[1] = to_channel_byte(g * wf + (1.0 - wf));
                    pixel[2] = to_channel_byte(b * wf + (1.0 - wf) * old_r);
                }
                _ => {
                    for (channel, paint) in pixel.iter_mut().zip([r, g, b]) {
                        let old = *channel as f32;
                        *channel = to_channel_byte(paint * wf + (1.0 - wf) * old);
                    }
                }
            }

            pixel[3] = 255;
        }
    }
}

/// Resolve a blended channel value to a byte.
///
/// The `as` cast saturates and maps NaN to 0, which also absorbs the
/// non-finite values Trippy produces near its tangent poles.
#[inline]
fn to_channel_byte(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
