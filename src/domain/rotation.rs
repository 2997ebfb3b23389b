// SPDX-License-Identifier: MPL-2.0
//! Drag-to-frame arithmetic.
//!
//! Horizontal pointer displacement is converted into a signed number of frame
//! steps, which is then applied to an anchor index with wrap-around so that
//! the last frame is adjacent to the first.
//!
//! # Example
//!
//! ```
//! use iced_turntable::domain::rotation::{frame_shift, wrap_frame_index};
//! use iced_turntable::domain::Sensitivity;
//!
//! // 720px wide, 36 frames, sensitivity 6 => 3.33px per frame
//! let shift = frame_shift(40.0, 720.0, 36, Sensitivity::DEFAULT);
//! assert_eq!(shift, 12);
//! assert_eq!(wrap_frame_index(0, -1, 36), 35);
//! assert_eq!(wrap_frame_index(35, 3, 36), 2);
//! ```

use super::ui::Sensitivity;

/// Pixels of horizontal drag that correspond to one frame step.
///
/// Sensitivity divides the per-frame width: a higher value means fewer pixels
/// per step, so a faster spin for the same drag.
#[must_use]
pub fn pixels_per_frame(container_width: f32, frame_count: usize, sensitivity: Sensitivity) -> f32 {
    #[allow(clippy::cast_precision_loss)]
    let frames = frame_count as f32;
    container_width / frames / sensitivity.value()
}

/// Signed number of frame steps for a drag displacement, rounded toward
/// negative infinity.
///
/// Returns 0 when the geometry is degenerate (no frames, zero-width container).
#[must_use]
pub fn frame_shift(
    delta_px: f32,
    container_width: f32,
    frame_count: usize,
    sensitivity: Sensitivity,
) -> i64 {
    if frame_count == 0 {
        return 0;
    }
    let per_frame = pixels_per_frame(container_width, frame_count, sensitivity);
    if !per_frame.is_finite() || per_frame <= 0.0 {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation)]
    let shift = (delta_px / per_frame).floor() as i64;
    shift
}

/// Applies a signed shift to an anchor index, normalized into `[0, frame_count)`.
///
/// Returns 0 when `frame_count` is 0.
#[must_use]
pub fn wrap_frame_index(anchor: usize, shift: i64, frame_count: usize) -> usize {
    if frame_count == 0 {
        return 0;
    }
    #[allow(clippy::cast_possible_wrap)]
    let count = frame_count as i64;
    #[allow(clippy::cast_possible_wrap)]
    let anchor = (anchor as i64).rem_euclid(count);
    // Reduce first: a saturated shift would overflow the sum.
    let shift = shift.rem_euclid(count);
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    let wrapped = (anchor + shift).rem_euclid(count) as usize;
    wrapped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_backwards_from_first_frame() {
        assert_eq!(wrap_frame_index(0, -1, 36), 35);
    }

    #[test]
    fn wrap_forwards_past_last_frame() {
        assert_eq!(wrap_frame_index(35, 3, 36), 2);
    }

    #[test]
    fn wrap_handles_multiple_full_turns() {
        assert_eq!(wrap_frame_index(5, 36 * 4 + 1, 36), 6);
        assert_eq!(wrap_frame_index(5, -(36 * 4) - 6, 36), 35);
    }

    #[test]
    fn wrap_always_lands_in_range() {
        for anchor in 0..12 {
            for shift in -50..50 {
                let index = wrap_frame_index(anchor, shift, 12);
                assert!(index < 12, "anchor {anchor} shift {shift} gave {index}");
            }
        }
    }

    #[test]
    fn wrap_survives_extreme_shifts() {
        assert_eq!(wrap_frame_index(35, i64::MAX, 36), (35 + i64::MAX % 36) as usize % 36);
        assert_eq!(wrap_frame_index(0, i64::MIN, 36), i64::MIN.rem_euclid(36) as usize);
        assert!(wrap_frame_index(usize::MAX, i64::MAX, 36) < 36);
    }

    #[test]
    fn saturated_shift_from_tiny_width_does_not_panic() {
        let shift = frame_shift(500.0, f32::MIN_POSITIVE, 36, Sensitivity::DEFAULT);
        assert_eq!(shift, i64::MAX);
        assert!(wrap_frame_index(10, shift, 36) < 36);
    }

    #[test]
    fn wrap_with_zero_frames_is_zero() {
        assert_eq!(wrap_frame_index(3, 7, 0), 0);
    }

    #[test]
    fn pixels_per_frame_matches_reference_geometry() {
        let per_frame = pixels_per_frame(720.0, 36, Sensitivity::DEFAULT);
        assert!((per_frame - 3.333).abs() < 0.01);
    }

    #[test]
    fn forty_pixel_drag_moves_twelve_frames() {
        assert_eq!(frame_shift(40.0, 720.0, 36, Sensitivity::DEFAULT), 12);
    }

    #[test]
    fn negative_drag_floors_toward_negative_infinity() {
        // -1px is a fraction of a frame to the left, which floors to -1.
        assert_eq!(frame_shift(-1.0, 720.0, 36, Sensitivity::DEFAULT), -1);
        assert_eq!(frame_shift(1.0, 720.0, 36, Sensitivity::DEFAULT), 0);
    }

    #[test]
    fn sensitivity_divides_pixels_per_frame() {
        let low = Sensitivity::new(1.0).unwrap();
        let high = Sensitivity::new(12.0).unwrap();
        assert!((pixels_per_frame(720.0, 36, low) - 20.0).abs() < f32::EPSILON);
        assert_eq!(frame_shift(40.0, 720.0, 36, low), 2);
        assert_eq!(frame_shift(40.0, 720.0, 36, high), 24);
    }

    #[test]
    fn degenerate_geometry_does_not_move() {
        assert_eq!(frame_shift(40.0, 0.0, 36, Sensitivity::DEFAULT), 0);
        assert_eq!(frame_shift(40.0, 720.0, 0, Sensitivity::DEFAULT), 0);
    }
}
