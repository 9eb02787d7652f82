//! Motion curves for the fall and celebration tweens.

/// Accelerating curve: starts slow, ends fast. `factor` steers how
/// aggressive the ramp is (1.0 is a plain quadratic).
pub fn accelerate(t: f32, factor: f32) -> f32 {
    t.clamp(0.0, 1.0).powf(2.0 * factor)
}

/// Smooth in-out curve, used for the giant berry scale-up.
pub fn smooth(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    (1.0 - (std::f32::consts::PI * t).cos()) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        assert_eq!(accelerate(0.0, 1.2), 0.0);
        assert_eq!(accelerate(1.0, 1.2), 1.0);
        assert_eq!(smooth(0.0), 0.0);
        assert!((smooth(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn accelerate_lags_behind_linear() {
        for i in 1..10 {
            let t = i as f32 / 10.0;
            assert!(accelerate(t, 1.2) < t);
        }
    }

    #[test]
    fn curves_are_monotonic() {
        let mut prev_a = 0.0;
        let mut prev_s = 0.0;
        for i in 1..=100 {
            let t = i as f32 / 100.0;
            let a = accelerate(t, 1.2);
            let s = smooth(t);
            assert!(a >= prev_a);
            assert!(s >= prev_s);
            prev_a = a;
            prev_s = s;
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(accelerate(-1.0, 1.2), 0.0);
        assert_eq!(accelerate(2.0, 1.2), 1.0);
        assert_eq!(smooth(-1.0), 0.0);
    }
}
