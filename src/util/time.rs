//! Wall-clock stamps for the navigation debug log.

/// Seconds since the UNIX epoch.
#[cfg(not(target_arch = "wasm32"))]
pub fn now_secs() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs_f64())
        .unwrap_or(0.0)
}

/// Seconds since page load.
#[cfg(target_arch = "wasm32")]
pub fn now_secs() -> f64 {
    let Some(performance) = web_sys::window().and_then(|window| window.performance()) else {
        return 0.0;
    };
    performance.now() / 1000.0
}

/// `HH:MM:SS` within the day (UTC natively, since page load on the web).
pub fn clock_label(secs: f64) -> String {
    let secs = secs.max(0.0) as u64 % 86_400;
    format!("{:02}:{:02}:{:02}", secs / 3600, secs / 60 % 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_label_wraps_at_midnight() {
        assert_eq!(clock_label(0.0), "00:00:00");
        assert_eq!(clock_label(3_723.9), "01:02:03");
        assert_eq!(clock_label(86_400.0 + 59.0), "00:00:59");
        assert_eq!(clock_label(-5.0), "00:00:00");
    }
}
