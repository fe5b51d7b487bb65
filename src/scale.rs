/// Area-proportional radius scale: a power scale with exponent 0.5 over the
/// domain `[0, domain_max]`, so bubble *area* (not radius) tracks the value.
#[derive(Debug, Clone, Copy)]
pub struct RadiusScale {
    domain_max: f64,
    min_radius: f64,
    max_radius: f64,
}

impl RadiusScale {
    pub fn new(domain_max: f64, min_radius: f64, max_radius: f64) -> Self {
        Self {
            domain_max,
            min_radius,
            max_radius,
        }
    }

    /// Radius for a value. Monotone non-decreasing; `radius(0)` is the range
    /// minimum and `radius(domain_max)` the range maximum. Values outside the
    /// domain (including negatives) clamp to the nearest end.
    pub fn radius(&self, value: f64) -> f64 {
        if self.domain_max <= 0.0 {
            return self.min_radius;
        }
        let t = (value / self.domain_max).clamp(0.0, 1.0).sqrt();
        self.min_radius + (self.max_radius - self.min_radius) * t
    }
}
