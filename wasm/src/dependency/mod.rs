mod performance;

pub use performance::Stopwatch;
