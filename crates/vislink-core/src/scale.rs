/// Linear map from a numeric domain onto a numeric range.
///
/// A degenerate domain (`d0 == d1`) maps every input onto the start of the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Scale over the extent of `values`; `None` when no value is finite.
    pub fn from_extent(values: impl IntoIterator<Item = f64>, range: (f64, f64)) -> Option<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values.into_iter().filter(|v| v.is_finite()) {
            min = min.min(v);
            max = max.max(v);
        }
        (min <= max).then(|| Self::new((min, max), range))
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 || !span.is_finite() {
            return r0;
        }
        let t = (value - d0) / span;
        // Endpoint-exact form: t == 0 yields r0 and t == 1 yields r1 bit-for-bit.
        r0 * (1.0 - t) + r1 * t
    }
}

#[cfg(test)]
mod tests {
    use super::LinearScale;

    #[test]
    fn maps_domain_endpoints_onto_range_endpoints() {
        let s = LinearScale::new((0.0, 10.0), (0.05, 0.9));
        assert_eq!(s.map(0.0), 0.05);
        assert_eq!(s.map(10.0), 0.9);
        assert!((s.map(5.0) - 0.475).abs() < 1e-12);
    }

    #[test]
    fn degenerate_domain_maps_to_range_start() {
        let s = LinearScale::new((0.0, 0.0), (0.05, 0.9));
        assert_eq!(s.map(0.0), 0.05);
        assert_eq!(s.map(7.0), 0.05);
    }

    #[test]
    fn extent_ignores_non_finite_values() {
        let s = LinearScale::from_extent([3.0, f64::NAN, 1.0, 8.0], (10.0, 100.0)).unwrap();
        assert_eq!(s.domain(), (1.0, 8.0));
        assert!(LinearScale::from_extent([f64::NAN], (0.0, 1.0)).is_none());
    }
}
