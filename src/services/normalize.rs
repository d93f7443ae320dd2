/// Min-max rescaling of one comparison dimension to 0-100.
///
/// Only the present values define the range; a missing value scores 0 and
/// does not drag the minimum down. When every present value is equal each of
/// them scores 100. With `invert` set, lower raw values score higher.
pub fn min_max(values: &[Option<f64>], invert: bool) -> Vec<f64> {
    let (min, max) = values
        .iter()
        .flatten()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |range: Option<(f64, f64)>, v| match range {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
        .unwrap_or((0.0, 1.0));

    values
        .iter()
        .map(|value| match value {
            Some(v) if v.is_finite() => {
                if max == min {
                    return 100.0;
                }
                let scaled = ((v - min) / (max - min) * 100.0).clamp(0.0, 100.0);
                if invert {
                    100.0 - scaled
                } else {
                    scaled
                }
            }
            _ => 0.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spread_values() {
        assert_eq!(
            min_max(&[Some(10.0), Some(20.0), Some(30.0)], false),
            vec![0.0, 50.0, 100.0]
        );
        assert_eq!(
            min_max(&[Some(10.0), Some(20.0), Some(30.0)], true),
            vec![100.0, 50.0, 0.0]
        );
    }

    #[test]
    fn equal_values_tie_at_the_top() {
        assert_eq!(min_max(&[Some(5000.0), Some(5000.0)], false), vec![100.0, 100.0]);
        assert_eq!(min_max(&[Some(5000.0), Some(5000.0)], true), vec![100.0, 100.0]);
        assert_eq!(min_max(&[Some(3.0)], true), vec![100.0]);
    }

    #[test]
    fn missing_values_score_zero() {
        for invert in [false, true] {
            let out = min_max(&[Some(1.0), None, Some(3.0)], invert);
            assert_eq!(out[1], 0.0);
            assert_eq!(out.len(), 3);
        }
    }

    #[test]
    fn missing_values_do_not_widen_the_range() {
        // Were None treated as zero, 300k would no longer be the minimum.
        assert_eq!(
            min_max(&[Some(300000.0), Some(500000.0), None], true),
            vec![100.0, 0.0, 0.0]
        );
    }

    #[test]
    fn all_missing() {
        assert_eq!(min_max(&[None, None], false), vec![0.0, 0.0]);
        assert!(min_max(&[], true).is_empty());
    }

    #[test]
    fn invert_mirrors_plain_output() {
        let values = [Some(7.0), Some(-2.5), None, Some(40.0), Some(13.0)];
        let plain = min_max(&values, false);
        let inverted = min_max(&values, true);

        for (idx, value) in values.iter().enumerate() {
            if value.is_some() {
                assert!((inverted[idx] - (100.0 - plain[idx])).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn output_stays_in_range() {
        let sets: [&[Option<f64>]; 4] = [
            &[Some(1e12), Some(-1e12), Some(0.0)],
            &[Some(0.1), Some(0.2), None],
            &[Some(f64::NAN), Some(4.0), Some(2.0)],
            &[Some(f64::INFINITY), None, Some(1.0)],
        ];

        for values in sets {
            for invert in [false, true] {
                let out = min_max(values, invert);
                assert_eq!(out.len(), values.len());
                assert!(out.iter().all(|v| (0.0..=100.0).contains(v)), "{out:?}");
            }
        }
    }
}
