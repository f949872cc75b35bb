//! Форматирование значений для панели статистики и экспорта.

use serde::Serialize;

const BYTE_UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Форматирует размер в байтах с двоичными единицами (1 KB = 1024 Bytes)
///
/// Up to two decimals, trailing zeros dropped. Values below one byte and
/// non-finite input render as "0 Bytes"; everything past TB stays in TB.
///
/// # Примеры
/// ```
/// use contracts::shared::format::format_bytes;
/// assert_eq!(format_bytes(1536.0), "1.5 KB");
/// assert_eq!(format_bytes(0.0), "0 Bytes");
/// ```
pub fn format_bytes(bytes: f64) -> String {
    if !bytes.is_finite() || bytes < 1.0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes;
    let mut unit = 0;
    while value >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{} {}", trim_decimals(value), BYTE_UNITS[unit])
}

fn trim_decimals(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Server memory figures arrive in megabytes.
pub fn megabytes_to_bytes(megabytes: f64) -> f64 {
    megabytes * 1024.0 * 1024.0
}

/// Whole hours of uptime, rounded down.
pub fn format_uptime_hours(uptime_seconds: f64) -> u64 {
    if !uptime_seconds.is_finite() || uptime_seconds <= 0.0 {
        return 0;
    }
    (uptime_seconds / 3600.0).floor() as u64
}

/// Pretty JSON with 2-space indentation.
pub fn format_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0.0), "0 Bytes");
        assert_eq!(format_bytes(512.0), "512 Bytes");
        assert_eq!(format_bytes(1024.0), "1 KB");
        assert_eq!(format_bytes(1536.0), "1.5 KB");
        assert_eq!(format_bytes(1_073_741_824.0), "1 GB");
        assert_eq!(format_bytes(1_258_291.2), "1.2 MB");
    }

    #[test]
    fn test_format_bytes_bounds() {
        assert_eq!(format_bytes(-5.0), "0 Bytes");
        assert_eq!(format_bytes(f64::NAN), "0 Bytes");
        assert_eq!(format_bytes(1024.0_f64.powi(5)), "1024 TB");
    }

    #[test]
    fn test_megabytes_to_bytes() {
        assert_eq!(format_bytes(megabytes_to_bytes(512.0)), "512 MB");
        assert_eq!(format_bytes(megabytes_to_bytes(2048.0)), "2 GB");
    }

    #[test]
    fn test_format_uptime_hours() {
        assert_eq!(format_uptime_hours(0.0), 0);
        assert_eq!(format_uptime_hours(3599.0), 0);
        assert_eq!(format_uptime_hours(7200.0), 2);
        assert_eq!(format_uptime_hours(90061.0), 25);
    }

    #[test]
    fn test_format_json_uses_two_spaces() {
        let text = format_json(&json!({ "a": [1, 2] })).unwrap();
        assert_eq!(text, "{\n  \"a\": [\n    1,\n    2\n  ]\n}");
    }
}
