use log::warn;

/// Parse a time string in HH:MM format
pub fn parse_hhmm(time_str: &str) -> Option<(u32, u32)> {
    let parts: Vec<&str> = time_str.split(':').collect();
    if parts.len() != 2 {
        return None;
    }
    let hour = parts[0].parse::<u32>().ok()?;
    let minute = parts[1].parse::<u32>().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some((hour, minute))
}

/// Render an HH:MM string on a 12-hour clock ("13:05" becomes "1:05 PM").
/// Unparseable input is logged and returned unchanged; formatting is never
/// fatal.
pub fn format_time(raw: &str) -> String {
    match parse_hhmm(raw) {
        Some((hour, minute)) => {
            let suffix = if hour < 12 { "AM" } else { "PM" };
            let hour12 = match hour % 12 {
                0 => 12,
                h => h,
            };
            format!("{}:{:02} {}", hour12, minute, suffix)
        }
        None => {
            warn!("Could not parse time string '{}', leaving it unformatted", raw);
            raw.to_string()
        }
    }
}
