/// Tunables shared by every search.
///
/// Floating-point tolerances decide which itineraries count as "tied", so they
/// are carried explicitly instead of living in hidden constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Tolerance used when comparing accumulated distances in the
    /// single-criterion search
    pub epsilon: f64,
    /// Tolerance used by the Pareto search when matching queue entries and
    /// parent labels against stored labels
    pub label_epsilon: f64,
    /// Upper bound on the number of routes a single query may enumerate
    pub max_routes: usize,
}

impl SearchConfig {
    /// Create a configuration with the default tolerances
    pub fn new() -> Self {
        SearchConfig {
            epsilon: 1e-9,
            label_epsilon: 1e-3,
            max_routes: 10_000,
        }
    }

    /// Set the tie tolerance of the single-criterion search
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = clamp_tolerance(epsilon);
        self
    }

    /// Set the label matching tolerance of the Pareto search
    pub fn with_label_epsilon(mut self, epsilon: f64) -> Self {
        self.label_epsilon = clamp_tolerance(epsilon);
        self
    }

    /// Set the maximum number of routes returned per query (at least one)
    pub fn with_max_routes(mut self, max_routes: usize) -> Self {
        self.max_routes = max_routes.max(1);
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_tolerance(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.max(0.0)
    }
}
