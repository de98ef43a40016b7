#[cfg(target_arch = "wasm32")]
thread_local! {
    static PAGE_CLOCK: Option<web_sys::Performance> =
        web_sys::window().and_then(|window| window.performance());
}

#[cfg(target_arch = "wasm32")]
fn page_clock_ms() -> f64 {
    PAGE_CLOCK.with(|clock| clock.as_ref().map(web_sys::Performance::now).unwrap_or(0.0))
}

#[cfg(not(target_arch = "wasm32"))]
fn page_clock_ms() -> f64 {
    0.0
}

/// Times one counter query against the page clock.
///
/// Reads 0 ms when no clock is exposed (workers without `window`, native
/// test builds) or when the clock steps backwards.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started_ms: f64,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            started_ms: page_clock_ms(),
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        if self.started_ms <= 0.0 {
            return 0.0;
        }
        (page_clock_ms() - self.started_ms).max(0.0)
    }
}
