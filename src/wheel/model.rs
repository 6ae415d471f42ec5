use std::f64::consts::PI;

use crate::errors::LunchwheelError;

use super::WheelOption;

/// Geometry of the selection wheel: the option set, the current rotation and
/// the angular width of one segment. Pure state, no I/O.
pub struct WheelModel {
    options: Vec<WheelOption>,
    /// Radians. Unbounded during a spin; only wrapped when reading the
    /// winning index.
    current_angle: f64,
    segment_arc: f64,
}

impl WheelModel {
    pub fn new(options: Vec<WheelOption>) -> Result<Self, LunchwheelError> {
        let mut model = Self {
            options: Vec::new(),
            current_angle: 0.,
            segment_arc: 0.,
        };
        model.set_options(options)?;
        Ok(model)
    }

    /// Replaces the option set, resets the rotation and recomputes the
    /// segment arc. The wheel cannot be empty.
    pub fn set_options(&mut self, options: Vec<WheelOption>) -> Result<(), LunchwheelError> {
        if options.is_empty() {
            return Err(LunchwheelError::InvalidOptions);
        }
        self.segment_arc = 2. * PI / options.len() as f64;
        self.options = options;
        self.current_angle = 0.;
        Ok(())
    }

    pub fn options(&self) -> &[WheelOption] {
        &self.options
    }

    pub fn current_angle(&self) -> f64 {
        self.current_angle
    }

    pub fn segment_arc(&self) -> f64 {
        self.segment_arc
    }

    /// Rotates the wheel by a per-tick velocity expressed in degrees.
    pub fn advance_angle(&mut self, delta_degrees: f64) {
        self.current_angle += delta_degrees * PI / 180.;
    }

    /// Index of the segment currently facing the pointer. The pointer sits
    /// at the top of the wheel (+90 degrees) and reads segments in the
    /// direction opposite to the draw order, hence the `N - 1 - raw`
    /// inversion.
    pub fn winning_index(&self) -> usize {
        let n = self.options.len();
        let degrees = self.current_angle * 180. / PI + 90.;
        let normalized = degrees.rem_euclid(360.);
        let raw = (normalized / (360. / n as f64)).floor() as usize;
        // rem_euclid keeps normalized below 360, but the division can still
        // round up to n on boundary values
        n - 1 - raw.min(n - 1)
    }

    pub fn winning_option(&self) -> &WheelOption {
        &self.options[self.winning_index()]
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn named_options(count: usize) -> Vec<WheelOption> {
        (0..count)
            .map(|i| WheelOption::new(format!("Place {i}"), format!("https://example.com/{i}")))
            .collect()
    }

    #[test]
    fn test_empty_options_rejected() {
        assert!(matches!(
            WheelModel::new(Vec::new()),
            Err(LunchwheelError::InvalidOptions)
        ));

        let mut model = WheelModel::new(named_options(4)).unwrap();
        assert!(matches!(
            model.set_options(Vec::new()),
            Err(LunchwheelError::InvalidOptions)
        ));
        // the failed call must not disturb the existing wheel
        assert_eq!(model.options().len(), 4);
    }

    #[test]
    fn test_set_options_resets_rotation() {
        let mut model = WheelModel::new(named_options(4)).unwrap();
        model.advance_angle(123.);
        model.set_options(named_options(8)).unwrap();
        assert_eq!(model.current_angle(), 0.);
        assert_eq!(model.segment_arc(), 2. * PI / 8.);
    }

    #[test]
    fn test_single_option_always_wins() {
        let mut model = WheelModel::new(named_options(1)).unwrap();
        for _ in 0..500 {
            model.advance_angle(17.3);
            assert_eq!(model.winning_index(), 0);
        }
    }

    #[test]
    fn test_pointer_inversion_at_rest() {
        // at angle 0 the pointer (+90 degrees) reads raw segment 1 of 4,
        // which maps to index 4 - 1 - 1 = 2
        let model = WheelModel::new(named_options(4)).unwrap();
        assert_eq!(model.winning_index(), 2);
    }

    #[test]
    fn test_periodic_over_full_turns() {
        let mut model = WheelModel::new(named_options(7)).unwrap();
        // sample mid-segment rotations to stay away from boundary rounding
        for step in 0..70 {
            model.set_options(named_options(7)).unwrap();
            model.advance_angle(f64::from(step) * 5.1 + 2.5);
            let before = model.winning_index();
            model.advance_angle(360.);
            assert_eq!(model.winning_index(), before);
            model.advance_angle(3. * 360.);
            assert_eq!(model.winning_index(), before);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(512))]

        #[test]
        fn prop_winning_index_in_range(
            count in 1usize..40,
            delta in -1.0e6f64..1.0e6f64,
        ) {
            let mut model = WheelModel::new(named_options(count)).unwrap();
            model.advance_angle(delta);
            prop_assert!(model.winning_index() < count);
        }
    }
}
