// ---------------------------------------------------------------------------
// Band scale: state name → horizontal band
// ---------------------------------------------------------------------------

/// Discrete scale mapping an ordered domain of names onto equal-width
/// bands across a pixel range, with padding between bands.
#[derive(Debug, Clone)]
pub struct BandScale {
    domain: Vec<String>,
    range: f32,
    padding_inner: f32,
}

impl BandScale {
    /// `range` is the pixel width of the drawing area; `padding_inner`
    /// the fraction of each step left empty between bands.
    pub fn new(range: f32, padding_inner: f32) -> Self {
        BandScale {
            domain: Vec::new(),
            range,
            padding_inner,
        }
    }

    /// Replace the domain with a fresh ordered list of names.
    pub fn set_domain(&mut self, domain: Vec<String>) {
        self.domain = domain;
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    /// Distance between the left edges of adjacent bands.
    pub fn step(&self) -> f32 {
        let n = self.domain.len();
        if n == 0 {
            return 0.0;
        }
        self.range / (n as f32 - self.padding_inner).max(1.0)
    }

    /// Width of one band.
    pub fn bandwidth(&self) -> f32 {
        self.step() * (1.0 - self.padding_inner)
    }

    /// Left edge of the band for `name`, or None when it is not in the
    /// domain.
    pub fn position(&self, name: &str) -> Option<f32> {
        self.domain
            .iter()
            .position(|d| d == name)
            .map(|i| i as f32 * self.step())
    }
}

// ---------------------------------------------------------------------------
// Linear scale: percent value → vertical pixel extent
// ---------------------------------------------------------------------------

/// Continuous scale mapping a `[0, max]` domain onto the vertical
/// extent of the drawing area, top-down: `map(0)` is the baseline at
/// the bottom, `map(max)` the top.
#[derive(Debug, Clone)]
pub struct LinearScale {
    domain_max: f64,
    range: f32,
}

impl LinearScale {
    /// `range` is the pixel height of the drawing area.
    pub fn new(range: f32) -> Self {
        LinearScale {
            domain_max: 0.0,
            range,
        }
    }

    /// Replace the domain. A non-positive max is the defined degenerate
    /// domain `[0, 0]`: every value maps to the baseline.
    pub fn set_domain_max(&mut self, max: f64) {
        self.domain_max = if max.is_finite() && max > 0.0 { max } else { 0.0 };
    }

    pub fn domain_max(&self) -> f64 {
        self.domain_max
    }

    /// Distance of `value` from the top of the drawing area (the y
    /// coordinate of a bar's upper edge).
    pub fn map(&self, value: f64) -> f32 {
        if self.domain_max <= 0.0 {
            return self.range;
        }
        self.range * (1.0 - (value / self.domain_max) as f32)
    }

    /// Pixel height of a bar for `value`.
    pub fn extent(&self, value: f64) -> f32 {
        self.range - self.map(value)
    }

    /// Evenly spaced tick values covering the domain, at a round step
    /// (1/2/5 × a power of ten) close to the requested count.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        if self.domain_max <= 0.0 || count == 0 {
            return vec![0.0];
        }
        let raw_step = self.domain_max / count as f64;
        let magnitude = 10f64.powf(raw_step.log10().floor());
        let normalized = raw_step / magnitude;
        let nice = if normalized < 1.5 {
            1.0
        } else if normalized < 3.0 {
            2.0
        } else if normalized < 7.0 {
            5.0
        } else {
            10.0
        };
        let step = nice * magnitude;

        let mut ticks = Vec::new();
        let mut value = 0.0;
        while value <= self.domain_max + step * 1e-9 {
            ticks.push(value);
            value += step;
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn band_scale_divides_the_range() {
        let mut scale = BandScale::new(1100.0, 0.2);
        scale.set_domain(vec!["California".to_string(), "Texas".to_string()]);

        // Two bands: step = range / (2 - 0.2), bandwidth = 0.8 step.
        let step = 1100.0 / 1.8;
        assert!(approx(scale.step(), step));
        assert!(approx(scale.bandwidth(), step * 0.8));
        assert!(approx(scale.position("California").unwrap(), 0.0));
        assert!(approx(scale.position("Texas").unwrap(), step));
        // The last band's right edge lands on the range end.
        assert!(approx(step + scale.bandwidth(), 1100.0));
    }

    #[test]
    fn band_scale_handles_missing_and_empty() {
        let mut scale = BandScale::new(1100.0, 0.2);
        assert_eq!(scale.step(), 0.0);
        assert_eq!(scale.position("Nowhere"), None);

        scale.set_domain(vec!["California".to_string()]);
        assert_eq!(scale.position("Texas"), None);
        // A single band never exceeds the range.
        assert!(scale.bandwidth() <= 1100.0);
    }

    #[test]
    fn linear_scale_is_proportional() {
        let mut scale = LinearScale::new(530.0);
        scale.set_domain_max(25.4);

        assert!(approx(scale.map(0.0), 530.0));
        assert!(approx(scale.map(25.4), 0.0));
        assert!(approx(scale.extent(25.4), 530.0));
        // Half the value, half the extent.
        assert!(approx(scale.extent(12.7), 265.0));
        // Higher percent, taller bar.
        assert!(scale.extent(18.0) < scale.extent(25.4));
    }

    #[test]
    fn degenerate_domain_maps_to_the_baseline() {
        let mut scale = LinearScale::new(530.0);
        scale.set_domain_max(0.0);
        assert_eq!(scale.map(10.0), 530.0);
        assert_eq!(scale.extent(10.0), 0.0);

        scale.set_domain_max(f64::NAN);
        assert_eq!(scale.domain_max(), 0.0);
    }

    #[test]
    fn ticks_use_round_steps() {
        let mut scale = LinearScale::new(530.0);
        scale.set_domain_max(25.4);

        let ticks = scale.ticks(10);
        assert_eq!(ticks[0], 0.0);
        assert_eq!(ticks[1], 2.0);
        assert_eq!(*ticks.last().unwrap(), 24.0);

        scale.set_domain_max(0.0);
        assert_eq!(scale.ticks(10), vec![0.0]);
    }
}
