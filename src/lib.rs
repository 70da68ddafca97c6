//! Airbrush - brush stroke compositor with radial falloff kernels
//!
//! The core algorithm: given a cursor position, a brush radius, a base
//! color, and a flow rate, compute a per-pixel opacity kernel over a
//! square window and alpha-blend it into the existing raster buffer, once
//! per motion sample of a drag gesture. Six kernels are supported
//! (constant, linear, quadratic, Gaussian, ripple, trippy); the linear
//! tool additionally scan-line fills gaps between motion samples.
//!
//! The host supplies the pixel buffer (via [`raster::RasterSurface`]),
//! the pointer events, and the brush controls; the compositor owns
//! everything in between.

pub mod brush;
pub mod core;
pub mod input;
pub mod raster;
pub mod tools;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging for embedding hosts.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "airbrush=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("airbrush compositor initializing");
}
