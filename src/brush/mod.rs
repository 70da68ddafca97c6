//! Brush data model - colors, brush specs, and falloff kernels

mod blend;
mod engine;
mod mask;
mod sampler;

pub use blend::blend_window;
pub use engine::{paint_dab, paint_sample};
pub use mask::{compute_mask, Mask, MaskCache};
pub use sampler::sample_positions;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::errors::CoreError;

/// sRGB color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Color {
    type Err = CoreError;

    /// Parse a `#RRGGBB` hex literal, the format the host color picker emits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidColor(s.to_string());

        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range| u8::from_str_radix(&hex[range], 16).map_err(|_| invalid());

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

/// Brush parameters captured for the duration of one stroke sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushSpec {
    /// Brush radius in pixels (line width / 2), must be positive
    pub radius: f32,
    /// Base paint color
    pub color: Color,
    /// Flow rate (0.0 - 1.0), scales how strongly each dab affects the buffer
    pub flow_rate: f32,
}

impl BrushSpec {
    pub fn new(radius: f32, color: Color, flow_rate: f32) -> Self {
        Self {
            radius: radius.max(f32::MIN_POSITIVE),
            color,
            flow_rate: flow_rate.clamp(0.0, 1.0),
        }
    }

    /// Derive the radius from a user-selected line width.
    pub fn from_line_width(width: f32, color: Color, flow_rate: f32) -> Self {
        Self::new(width / 2.0, color, flow_rate)
    }

    /// Integer radius used for mask evaluation and window placement.
    pub fn mask_radius(&self) -> u32 {
        (self.radius.round() as u32).max(1)
    }
}

impl Default for BrushSpec {
    fn default() -> Self {
        // Matches the default controls: 5px line width, black, 0.5 flow
        Self::new(2.5, Color::BLACK, 0.5)
    }
}

/// The six radial falloff profiles.
///
/// Each kernel maps distance-from-center to a blend weight. Constant,
/// Linear, Quadratic, and Gaussian stay in [0, 1]; Ripple and Trippy are
/// deliberately left unclamped, which produces ring-shaped highlights
/// (Ripple) and spike-heavy near-discontinuities (Trippy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KernelKind {
    /// Full-strength binary disc
    Constant,
    /// `1 - d/r`
    Linear,
    /// `1 - (d/r)^2`
    Quadratic,
    /// `e^(-(2d/r)^2)`
    Gaussian,
    /// `cos(d)`, oscillating in absolute distance, can go negative
    Ripple,
    /// Six-fold nested tangent of `d/r`, unstable near the poles
    Trippy,
}

impl KernelKind {
    /// Evaluate the kernel at `distance` from the brush center.
    ///
    /// Returns `None` outside the effective radius (the pixel is left
    /// untouched by the blend engine).
    pub fn weight(&self, distance: f32, radius: f32) -> Option<f32> {
        if distance > radius {
            return None;
        }

        let w = match self {
            KernelKind::Constant => 1.0,
            KernelKind::Linear => 1.0 - distance / radius,
            KernelKind::Quadratic => {
                let t = distance / radius;
                1.0 - t * t
            }
            KernelKind::Gaussian => {
                let t = 2.0 * distance / radius;
                (-(t * t)).exp()
            }
            KernelKind::Ripple => distance.cos(),
            KernelKind::Trippy => {
                let mut w = distance / radius;
                for _ in 0..6 {
                    w = w.tan();
                }
                w
            }
        };

        Some(w)
    }

    /// Whether every non-sentinel weight lies in [0, 1].
    pub fn is_bounded(&self) -> bool {
        !matches!(self, KernelKind::Ripple | KernelKind::Trippy)
    }

    /// Whether the tool paints the press coordinate itself.
    ///
    /// The Constant tool only paints on motion samples; the other five
    /// render the very first point of the gesture.
    pub fn paints_on_press(&self) -> bool {
        !matches!(self, KernelKind::Constant)
    }

    /// Whether the sampler fills the gap between consecutive motion
    /// samples with a scan-line walk (Linear tool only).
    pub fn fills_path_gaps(&self) -> bool {
        matches!(self, KernelKind::Linear)
    }

    pub const ALL: [KernelKind; 6] = [
        KernelKind::Constant,
        KernelKind::Linear,
        KernelKind::Quadratic,
        KernelKind::Gaussian,
        KernelKind::Ripple,
        KernelKind::Trippy,
    ];
}

/// Host-supplied brush controls, read once per gesture start.
pub trait BrushParams {
    fn radius(&self) -> f32;
    fn color(&self) -> Color;
    fn flow_rate(&self) -> f32;
    fn tool(&self) -> KernelKind;

    /// Snapshot the live controls into an immutable spec.
    fn capture(&self) -> BrushSpec {
        BrushSpec::new(self.radius(), self.color(), self.flow_rate())
    }
}

/// Fixed parameter set for hosts without live controls (and for tests).
#[derive(Debug, Clone, Copy)]
pub struct FixedBrushParams {
    pub spec: BrushSpec,
    pub tool: KernelKind,
}

impl FixedBrushParams {
    pub fn new(spec: BrushSpec, tool: KernelKind) -> Self {
        Self { spec, tool }
    }
}

impl BrushParams for FixedBrushParams {
    fn radius(&self) -> f32 {
        self.spec.radius
    }

    fn color(&self) -> Color {
        self.spec.color
    }

    fn flow_rate(&self) -> f32 {
        self.spec.flow_rate
    }

    fn tool(&self) -> KernelKind {
        self.tool
    }
}
