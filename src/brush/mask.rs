//! Kernel evaluator - per-window weight masks
//!
//! A mask is the precomputed grid of kernel weights for one brush window.
//! Masks are translation-invariant, so one mask per (radius, kind) pair
//! serves every window of a stroke; [`MaskCache`] memoizes them.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::KernelKind;

/// Square grid of per-pixel kernel weights, row-major.
///
/// The grid is `2r x 2r`; index `(r, r)` corresponds to distance zero.
/// `None` marks pixels outside the brush's effective radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Mask {
    radius: u32,
    size: usize,
    weights: Vec<Option<f32>>,
}

impl Mask {
    /// Side length of the square grid (`2 * radius`).
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Weight at grid position `(row, col)`, `None` outside the circle.
    pub fn weight(&self, row: usize, col: usize) -> Option<f32> {
        self.weights[row * self.size + col]
    }

    pub fn weights(&self) -> &[Option<f32>] {
        &self.weights
    }
}

/// Evaluate `kind` over a `2r x 2r` window centered on the brush's
/// contact point.
pub fn compute_mask(radius: u32, kind: KernelKind) -> Mask {
    let radius = radius.max(1);
    let size = (2 * radius) as usize;
    let r = radius as f32;

    let mut weights = Vec::with_capacity(size * size);
    for row in 0..size {
        let dy = (r - row as f32).abs();
        for col in 0..size {
            let dx = (r - col as f32).abs();
            let distance = (dx * dx + dy * dy).sqrt();
            weights.push(kind.weight(distance, r));
        }
    }

    Mask {
        radius,
        size,
        weights,
    }
}

/// Memoized masks keyed by (radius, kernel kind).
#[derive(Debug, Default)]
pub struct MaskCache {
    masks: RwLock<HashMap<(u32, KernelKind), Arc<Mask>>>,
}

impl MaskCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the mask for `(radius, kind)`, computing it on first use.
    pub fn get(&self, radius: u32, kind: KernelKind) -> Arc<Mask> {
        let key = (radius.max(1), kind);

        if let Some(mask) = self.masks.read().get(&key) {
            return Arc::clone(mask);
        }

        let mask = Arc::new(compute_mask(key.0, kind));
        tracing::debug!(radius = key.0, ?kind, "computed brush mask");

        // Another caller may have raced us between the read and the write;
        // keep whichever entry landed first.
        Arc::clone(
            self.masks
                .write()
                .entry(key)
                .or_insert_with(|| Arc::clone(&mask)),
        )
    }

    pub fn len(&self) -> usize {
        self.masks.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.masks.read().is_empty()
    }

    pub fn clear(&self) {
        self.masks.write().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_dimensions() {
        for radius in [1, 3, 5, 25] {
            let mask = compute_mask(radius, KernelKind::Linear);
            assert_eq!(mask.size(), (2 * radius) as usize);
            assert_eq!(mask.weights().len(), mask.size() * mask.size());
        }
    }

    #[test]
    fn test_center_weight_matches_kernel_at_zero() {
        for kind in [
            KernelKind::Constant,
            KernelKind::Linear,
            KernelKind::Quadratic,
            KernelKind::Gaussian,
            KernelKind::Ripple,
        ] {
            let mask = compute_mask(5, kind);
            let center = mask.weight(5, 5).unwrap();
            assert!((center - 1.0).abs() < 1e-6, "{kind:?} center was {center}");
        }
    }

    #[test]
    fn test_corners_are_outside_circle() {
        let mask = compute_mask(5, KernelKind::Constant);
        let last = mask.size() - 1;
        assert!(mask.weight(0, 0).is_none());
        assert!(mask.weight(0, last).is_none());
        assert!(mask.weight(last, 0).is_none());
        assert!(mask.weight(last, last).is_none());
    }

    #[test]
    fn test_constant_mask_is_binary_disc() {
        let mask = compute_mask(5, KernelKind::Constant);
        for &w in mask.weights() {
            if let Some(w) = w {
                assert_eq!(w, 1.0);
            }
        }
    }

    #[test]
    fn test_distance_five_is_inside_radius_five() {
        // The sentinel triggers strictly beyond the radius, so a pixel at
        // exactly d == r is still painted.
        let mask = compute_mask(5, KernelKind::Constant);
        assert_eq!(mask.weight(5, 0), Some(1.0)); // dx = 5, dy = 0
        assert_eq!(mask.weight(0, 5), Some(1.0)); // dx = 0, dy = 5
    }

    #[test]
    fn test_cache_reuses_masks() {
        let cache = MaskCache::new();
        let first = cache.get(5, KernelKind::Gaussian);
        let second = cache.get(5, KernelKind::Gaussian);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);

        cache.get(5, KernelKind::Linear);
        cache.get(6, KernelKind::Gaussian);
        assert_eq!(cache.len(), 3);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cached_mask_equals_direct_computation() {
        let cache = MaskCache::new();
        let cached = cache.get(7, KernelKind::Quadratic);
        assert_eq!(*cached, compute_mask(7, KernelKind::Quadratic));
    }
}
