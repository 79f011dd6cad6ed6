//! Performance curves.
//!
//! Capacity sizing of DX coils scales the rated capacity by a curve of
//! entering wet-bulb and outdoor dry-bulb temperature. Curves are referenced
//! by [`CurveId`] and evaluated through a [`CurveEvaluator`], so a host can
//! back the lookup with its own curve library.

/// Handle to a curve known to a [`CurveEvaluator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurveId(usize);

impl CurveId {
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Evaluates two-variable performance curves.
pub trait CurveEvaluator {
    /// Returns the curve value at `(x, y)`, or `None` for an unknown curve.
    fn evaluate(&self, curve: CurveId, x: f64, y: f64) -> Option<f64>;
}

/// Closed interval used to clamp curve inputs and outputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    pub min: f64,
    pub max: f64,
}

impl Limits {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn clamp(self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }
}

/// `z = c0 + c1·x + c2·x² + c3·y + c4·y² + c5·x·y`
///
/// Inputs are clamped to their limits before evaluation, and the result is
/// clamped to the output limits when present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Biquadratic {
    pub coefficients: [f64; 6],
    pub x_limits: Option<Limits>,
    pub y_limits: Option<Limits>,
    pub output_limits: Option<Limits>,
}

impl Biquadratic {
    /// An unbounded biquadratic.
    #[must_use]
    pub fn new(coefficients: [f64; 6]) -> Self {
        Self {
            coefficients,
            x_limits: None,
            y_limits: None,
            output_limits: None,
        }
    }

    #[must_use]
    pub fn with_x_limits(mut self, min: f64, max: f64) -> Self {
        self.x_limits = Some(Limits::new(min, max));
        self
    }

    #[must_use]
    pub fn with_y_limits(mut self, min: f64, max: f64) -> Self {
        self.y_limits = Some(Limits::new(min, max));
        self
    }

    #[must_use]
    pub fn with_output_limits(mut self, min: f64, max: f64) -> Self {
        self.output_limits = Some(Limits::new(min, max));
        self
    }

    #[must_use]
    pub fn value(&self, x: f64, y: f64) -> f64 {
        let x = self.x_limits.map_or(x, |l| l.clamp(x));
        let y = self.y_limits.map_or(y, |l| l.clamp(y));
        let [c0, c1, c2, c3, c4, c5] = self.coefficients;
        let z = c0 + c1 * x + c2 * x * x + c3 * y + c4 * y * y + c5 * x * y;
        self.output_limits.map_or(z, |l| l.clamp(z))
    }
}

/// An in-memory curve library.
#[derive(Debug, Clone, Default)]
pub struct CurveSet {
    curves: Vec<Biquadratic>,
}

impl CurveSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a curve and returns its handle.
    pub fn insert(&mut self, curve: Biquadratic) -> CurveId {
        self.curves.push(curve);
        CurveId(self.curves.len() - 1)
    }

    #[must_use]
    pub fn get(&self, id: CurveId) -> Option<&Biquadratic> {
        self.curves.get(id.0)
    }
}

impl CurveEvaluator for CurveSet {
    fn evaluate(&self, curve: CurveId, x: f64, y: f64) -> Option<f64> {
        self.get(curve).map(|c| c.value(x, y))
    }
}

impl<T: CurveEvaluator + ?Sized> CurveEvaluator for &T {
    fn evaluate(&self, curve: CurveId, x: f64, y: f64) -> Option<f64> {
        (**self).evaluate(curve, x, y)
    }
}

/// No curves; every lookup misses.
impl CurveEvaluator for () {
    fn evaluate(&self, _curve: CurveId, _x: f64, _y: f64) -> Option<f64> {
        None
    }
}
