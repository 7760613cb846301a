/// Split a duration into whole hours, minutes and seconds (fraction dropped).
fn split_seconds(duration_seconds: f64) -> (u64, u64, u64) {
    let total = if duration_seconds.is_finite() && duration_seconds > 0.0 {
        duration_seconds as u64
    } else {
        0
    };
    (total / 3600, (total % 3600) / 60, total % 60)
}

/// Compact clock-style duration: `m:ss`, or `h:mm:ss` from one hour up.
pub fn formatted_duration(duration_seconds: f64) -> String {
    let (hours, minutes, seconds) = split_seconds(duration_seconds);
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

fn unit(value: u64, singular: &str) -> String {
    if value == 1 {
        format!("{value} {singular}")
    } else {
        format!("{value} {singular}s")
    }
}

/// Spelled-out duration for screen readers, e.g. `3 minutes 45 seconds`.
///
/// Zero-valued units are skipped, except that a zero duration reads as `0 seconds`.
pub fn accessible_duration(duration_seconds: f64) -> String {
    let (hours, minutes, seconds) = split_seconds(duration_seconds);

    let mut parts: Vec<String> = Vec::new();
    if hours > 0 {
        parts.push(unit(hours, "hour"));
    }
    if minutes > 0 {
        parts.push(unit(minutes, "minute"));
    }
    if seconds > 0 || parts.is_empty() {
        parts.push(unit(seconds, "second"));
    }

    parts.join(" ")
}
