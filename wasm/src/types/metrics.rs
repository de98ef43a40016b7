#[derive(Clone, Copy, Debug, Default)]
pub struct QueryMetrics {
    pub last_query_duration_ms: f64,
    pub queries_served: u64,
}

impl QueryMetrics {
    pub fn record_query(&mut self, duration: f64) {
        self.queries_served = self.queries_served.wrapping_add(1);
        if duration >= 0.0 {
            self.last_query_duration_ms = duration;
        }
    }
}
