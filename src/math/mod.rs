pub mod vec;

/// Inclusive float range: yields `start`, `start + step`, ... for as long as
/// the accumulated value stays `<= stop`.
///
/// Panics when `step` is not positive, since the range would never terminate
/// or never yield.
pub fn seq(start: f64, stop: f64, step: f64) -> impl Iterator<Item = f64> {
    assert!(step > 0.0, "seq step must be positive, got {step}");

    std::iter::successors(Some(start), move |v| Some(v + step)).take_while(move |v| *v <= stop)
}

#[cfg(test)]
mod tests {
    use super::seq;

    #[test]
    fn bounds_are_inclusive() {
        let step = 4.0 / 1001.0;
        let values: Vec<f64> = seq(-step, step, step).collect();

        assert_eq!(values.len(), 3);
        assert_eq!(values[0], -step);
        assert_eq!(values[1], 0.0);
        assert_eq!(values[2], step);
    }

    #[test]
    fn empty_when_start_is_past_stop() {
        assert_eq!(seq(1.0, 0.0, 0.5).count(), 0);
    }

    #[test]
    fn integer_grid() {
        assert_eq!(seq(-11.0, 11.0, 1.0).count(), 23);
    }

    #[test]
    #[should_panic(expected = "step must be positive")]
    fn rejects_non_positive_step() {
        let _ = seq(0.0, 1.0, 0.0);
    }
}
