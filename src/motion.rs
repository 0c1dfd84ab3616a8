/// Pointer range, in pixels from the element centre, mapped onto the full tilt.
const TILT_RANGE_PX: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub max_degrees: f64,
}

impl Tilt {
    pub const fn new(max_degrees: f64) -> Self {
        Self { max_degrees }
    }

    /// `(rotate_x, rotate_y)` in degrees for a pointer offset from the element centre.
    pub fn rotation(&self, dx: f64, dy: f64) -> (f64, f64) {
        let x = dx.clamp(-TILT_RANGE_PX, TILT_RANGE_PX) / TILT_RANGE_PX;
        let y = dy.clamp(-TILT_RANGE_PX, TILT_RANGE_PX) / TILT_RANGE_PX;
        // pointer below centre tips the top edge away
        (-y * self.max_degrees, x * self.max_degrees)
    }

    pub fn transform(&self, dx: f64, dy: f64) -> String {
        let (rx, ry) = self.rotation(dx, dy);
        format!("perspective(1000px) rotateX({rx:.2}deg) rotateY({ry:.2}deg)")
    }

    pub fn rest() -> String {
        "perspective(1000px) rotateX(0deg) rotateY(0deg)".to_string()
    }
}

/// Inline style for a tilted element.
pub fn tilt_style(transform: &str) -> String {
    format!("transform: {transform}; transform-style: preserve-3d")
}

pub const ABOUT_IMAGE_TILT: Tilt = Tilt::new(5.0);
pub const PROJECT_CARD_TILT: Tilt = Tilt::new(8.0);

/// Inline delay for the `index`th item of a staggered list. Covers both the reveal
/// transitions and the keyframe entrances.
pub fn stagger_delay(base: f64, index: usize, step: f64) -> String {
    let delay = base + index as f64 * step;
    format!("transition-delay: {delay:.2}s; animation-delay: {delay:.2}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tilt_centre_is_flat() {
        assert_eq!(PROJECT_CARD_TILT.rotation(0.0, 0.0), (0.0, 0.0));
        assert!(ABOUT_IMAGE_TILT
            .transform(10.0, 0.0)
            .ends_with("rotateY(0.50deg)"));
    }

    #[test]
    fn test_tilt_mapping_and_clamp() {
        let (rx, ry) = ABOUT_IMAGE_TILT.rotation(50.0, -50.0);
        assert_eq!((rx, ry), (2.5, 2.5));

        assert_eq!(PROJECT_CARD_TILT.rotation(400.0, 400.0), (-8.0, 8.0));
        assert_eq!(PROJECT_CARD_TILT.rotation(-400.0, -400.0), (8.0, -8.0));
    }

    #[test]
    fn test_tilt_style() {
        assert_eq!(
            tilt_style(&Tilt::rest()),
            "transform: perspective(1000px) rotateX(0deg) rotateY(0deg); transform-style: preserve-3d"
        );
    }

    #[test]
    fn test_stagger_delay() {
        assert_eq!(
            stagger_delay(0.6, 0, 0.1),
            "transition-delay: 0.60s; animation-delay: 0.60s"
        );
        assert!(stagger_delay(0.6, 2, 0.1).starts_with("transition-delay: 0.80s"));
    }
}
