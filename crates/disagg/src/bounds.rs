//! Optional temperature context just outside the record.

/// Temperature extremes of a day adjacent to the record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryExtension {
    /// Minimum temperature [°C].
    pub t_min: f64,
    /// Maximum temperature [°C].
    pub t_max: f64,
}

impl BoundaryExtension {
    /// Creates a new boundary day.
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }
}

/// Extremes for the day before (`begin`) and after (`end`) the record.
///
/// A missing side repeats the nearest pair of real knots.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TemperatureBounds {
    begin: Option<BoundaryExtension>,
    end: Option<BoundaryExtension>,
}

impl TemperatureBounds {
    /// No boundary context on either side.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the day before the record.
    pub fn with_begin(mut self, t_min: f64, t_max: f64) -> Self {
        self.begin = Some(BoundaryExtension::new(t_min, t_max));
        self
    }

    /// Sets the day after the record.
    pub fn with_end(mut self, t_min: f64, t_max: f64) -> Self {
        self.end = Some(BoundaryExtension::new(t_min, t_max));
        self
    }

    /// Returns the day before the record, if given.
    pub fn begin(&self) -> Option<BoundaryExtension> {
        self.begin
    }

    /// Returns the day after the record, if given.
    pub fn end(&self) -> Option<BoundaryExtension> {
        self.end
    }
}
