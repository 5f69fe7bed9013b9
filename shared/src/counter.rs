//! ==============================================================================
//! counter.rs - statistic counter animation
//! ==============================================================================
//!
//! animates a displayed integer from 0 to a target over a fixed duration with
//! an ease-out cubic curve. the browser side feeds animation-frame timestamps
//! into `CounterAnimation::frame` and stops scheduling once it reports done.
//!
//! ==============================================================================

/// default animation length in milliseconds
pub const DEFAULT_DURATION_MS: f64 = 1500.0;

/// ease-out cubic: `1 - (1 - t)^3`, with `t` clamped to [0, 1]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// parse a `data-count` attribute with integer-prefix semantics
///
/// leading whitespace, an optional sign, then decimal digits; anything after
/// the digits is ignored (`"1,200"` -> 1). returns `None` when no digit follows.
pub fn parse_count(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = rest
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = rest[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// one frame of output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// value to display
    pub value: i64,
    /// true once progress reached 1; no further frames should be requested
    pub done: bool,
}

/// a single run of the counter animation
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: i64,
    duration_ms: f64,
    start_ms: f64,
}

impl CounterAnimation {
    pub fn new(target: i64, duration_ms: f64, start_ms: f64) -> Self {
        Self { target, duration_ms, start_ms }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    /// progress in [0, 1] at timestamp `now_ms`
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// value to display at `now_ms`
    pub fn frame(&self, now_ms: f64) -> Frame {
        let progress = self.progress(now_ms);
        let value = (ease_out_cubic(progress) * self.target as f64).round() as i64;
        Frame { value, done: progress >= 1.0 }
    }
}
