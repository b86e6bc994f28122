/// 24-hour to 12-hour display conversion.

/// Converts a "HH:MM" 24-hour string into "H:MM AM|PM".
///
/// The hour loses its leading zero; 12 is used for both midnight and noon;
/// the minutes substring is passed through verbatim, zero-padding included.
/// Malformed input (missing colon, non-numeric or out-of-range hour) is a
/// precondition violation and returns an error.
pub fn format_12_hour(time: &str) -> Result<String, String> {
    let (hours_str, minutes) = time
        .split_once(':')
        .ok_or_else(|| format!("time '{}' is not HH:MM", time))?;

    let hours: u32 = hours_str
        .trim()
        .parse()
        .map_err(|_| format!("time '{}' has a non-numeric hour", time))?;

    if hours > 23 {
        return Err(format!("time '{}' has an out-of-range hour", time));
    }

    let suffix = if hours >= 12 { "PM" } else { "AM" };
    let display_hour = match hours % 12 {
        0 => 12,
        h => h,
    };

    Ok(format!("{}:{} {}", display_hour, minutes, suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midnight_is_twelve_am() {
        assert_eq!(format_12_hour("00:00").unwrap(), "12:00 AM");
    }

    #[test]
    fn test_noon_is_twelve_pm() {
        assert_eq!(format_12_hour("12:00").unwrap(), "12:00 PM");
    }

    #[test]
    fn test_afternoon_drops_leading_zero() {
        assert_eq!(format_12_hour("13:05").unwrap(), "1:05 PM");
        assert_eq!(format_12_hour("15:45").unwrap(), "3:45 PM");
    }

    #[test]
    fn test_last_minute_of_day() {
        assert_eq!(format_12_hour("23:59").unwrap(), "11:59 PM");
    }

    #[test]
    fn test_morning_hour_keeps_minute_padding() {
        assert_eq!(format_12_hour("05:00").unwrap(), "5:00 AM");
        assert_eq!(format_12_hour("09:07").unwrap(), "9:07 AM");
    }

    #[test]
    fn test_eleven_am_boundary() {
        assert_eq!(format_12_hour("11:59").unwrap(), "11:59 AM");
        assert_eq!(format_12_hour("12:01").unwrap(), "12:01 PM");
    }

    #[test]
    fn test_malformed_input_is_an_error() {
        assert!(format_12_hour("noon").is_err());
        assert!(format_12_hour("25:00").is_err());
        assert!(format_12_hour("xx:30").is_err());
    }
}
