//! Affine mapping of single values from one range onto another.
//!
//! All arithmetic is done in `i128` so millisecond positions times pixel widths can't
//! overflow, and the result is rounded to the nearest unit (ties toward +∞).

use crate::core::range::Range;
use crate::core::units::{div_round, Unit};
use crate::error::{Result, SeekBarError};

/// Map `x` from `from` onto `to` without clamping.
///
/// The result may overshoot `to` on either side when `x` lies outside `from`.
pub fn translate_unclamped(x: Unit, from: &Range, to: &Range) -> Result<Unit> {
    if from.width() == 0 {
        return Err(SeekBarError::DegenerateRange {
            lower: from.lower(),
            upper: from.upper(),
        });
    }
    let offset = div_round(
        to.width() as i128 * (x as i128 - from.lower() as i128),
        from.width() as i128,
    );
    let result = to.lower() as i128 + offset;
    tracing::trace!(x, %from, %to, result = result as Unit, "translate");
    Ok(saturate(result))
}

/// Map `x` from `from` onto `to`, clamping the result into `to`
pub fn translate(x: Unit, from: &Range, to: &Range) -> Result<Unit> {
    Ok(to.clamp(translate_unclamped(x, from, to)?))
}

/// Convert a distance measured against `from` into the same distance against `to`
pub fn scale(delta: Unit, from: &Range, to: &Range) -> Result<Unit> {
    if from.width() == 0 {
        return Err(SeekBarError::DegenerateRange {
            lower: from.lower(),
            upper: from.upper(),
        });
    }
    Ok(saturate(div_round(
        to.width() as i128 * delta as i128,
        from.width() as i128,
    )))
}

fn saturate(value: i128) -> Unit {
    value.clamp(Unit::MIN as i128, Unit::MAX as i128) as Unit
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn range(lower: Unit, upper: Unit) -> Range {
        Range::new(lower, upper).unwrap()
    }

    #[test]
    fn test_translate_identity() {
        let r = range(-30, 50);
        for x in [-30, 0, 17, 50] {
            assert_eq!(translate(x, &r, &r).unwrap(), x);
        }
    }

    #[test]
    fn test_translate_model_to_view() {
        let visible = range(0, 60_000);
        let view = range(0, 1080);

        assert_eq!(translate(30_000, &visible, &view).unwrap(), 540);
        assert_eq!(translate(0, &visible, &view).unwrap(), 0);
        assert_eq!(translate(60_000, &visible, &view).unwrap(), 1080);
        // 25 000 * 1080 / 60 000 = 450
        assert_eq!(translate(25_000, &visible, &view).unwrap(), 450);
    }

    #[test]
    fn test_translate_with_offsets() {
        let visible = range(-28_000, 32_000);
        let view = range(72, 1152);

        assert_eq!(translate(-28_000, &visible, &view).unwrap(), 72);
        assert_eq!(translate(2_000, &visible, &view).unwrap(), 612);
    }

    #[test]
    fn test_translate_clamps() {
        let visible = range(0, 1000);
        let view = range(0, 100);

        assert_eq!(translate(-500, &visible, &view).unwrap(), 0);
        assert_eq!(translate(2000, &visible, &view).unwrap(), 100);
    }

    #[test]
    fn test_translate_unclamped_overshoots() {
        let visible = range(0, 1000);
        let view = range(0, 100);

        assert_eq!(translate_unclamped(-500, &visible, &view).unwrap(), -50);
        assert_eq!(translate_unclamped(2000, &visible, &view).unwrap(), 200);
    }

    #[test]
    fn test_translate_rounds_to_nearest() {
        let from = range(0, 3);
        let to = range(0, 10);
        // 1 * 10 / 3 = 3.33
        assert_eq!(translate(1, &from, &to).unwrap(), 3);
        // 2 * 10 / 3 = 6.67
        assert_eq!(translate(2, &from, &to).unwrap(), 7);
    }

    #[test]
    fn test_translate_large_values_dont_overflow() {
        let from = range(0, i64::MAX / 2);
        let to = range(0, i64::MAX / 2);
        let x = i64::MAX / 4;
        assert_eq!(translate(x, &from, &to).unwrap(), x);
    }

    #[test]
    fn test_degenerate_source() {
        let empty = range(5, 5);
        let view = range(0, 100);
        assert!(matches!(
            translate(5, &empty, &view),
            Err(SeekBarError::DegenerateRange { lower: 5, upper: 5 })
        ));
        assert!(translate_unclamped(5, &empty, &view).is_err());
        assert!(scale(5, &empty, &view).is_err());
    }

    #[test]
    fn test_degenerate_target_is_fine() {
        let view = range(0, 100);
        let point = range(7, 7);
        assert_eq!(translate(50, &view, &point).unwrap(), 7);
    }

    #[test]
    fn test_scale() {
        let view = range(0, 1080);
        let visible = range(0, 60_000);
        // one pixel is 55.5 ms
        assert_eq!(scale(1, &view, &visible).unwrap(), 56);
        assert_eq!(scale(-18, &view, &visible).unwrap(), -1000);
        assert_eq!(scale(4_000, &visible, &view).unwrap(), 72);
    }

    proptest! {
        #[test]
        fn prop_round_trip_when_target_is_not_narrower(
            a_lower in -100_000i64..100_000,
            a_width in 1i64..10_000,
            b_lower in -100_000i64..100_000,
            extra in 0i64..100_000,
            t in 0.0f64..1.0,
        ) {
            let a = range(a_lower, a_lower + a_width);
            let b = range(b_lower, b_lower + a_width + extra);
            let x = a_lower + (t * a_width as f64) as i64;

            let there = translate(x, &a, &b).unwrap();
            prop_assert_eq!(translate(there, &b, &a).unwrap(), x);
        }

        #[test]
        fn prop_clamped_result_is_inside_target(
            x in -1_000_000i64..1_000_000,
            from_lower in -10_000i64..10_000,
            from_width in 1i64..10_000,
            to_lower in -10_000i64..10_000,
            to_width in 0i64..10_000,
        ) {
            let from = range(from_lower, from_lower + from_width);
            let to = range(to_lower, to_lower + to_width);
            prop_assert!(to.contains(translate(x, &from, &to).unwrap()));
        }
    }
}
