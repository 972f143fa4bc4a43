const SIZE_FACTOR: f64 = 1024.0;
const SIZE_UNITS: [&str; 6] = ["", "K", "M", "G", "T", "P"];

/// Scale a byte count into its largest unit below 1024, e.g. `1536` -> `"1.50KB"`.
///
/// Values beyond the petabyte range stay in `P` and may exceed 1024.
pub fn format_size(value: f64, suffix: &str) -> String {
    let mut scaled = value;
    let mut unit = 0;
    while scaled >= SIZE_FACTOR && unit < SIZE_UNITS.len() - 1 {
        scaled /= SIZE_FACTOR;
        unit += 1;
    }
    format!("{:.2}{}{}", scaled, SIZE_UNITS[unit], suffix)
}

/// [`format_size`] with the default `B` suffix.
pub fn format_bytes(bytes: u64) -> String {
    format_size(bytes as f64, "B")
}

pub fn print_error(message: &str) {
    eprintln!("\x1b[31m❌ Error: {}\x1b[0m", message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_bytes() {
        assert_eq!(format_bytes(0), "0.00B");
    }

    #[test]
    fn scales_to_kilobytes() {
        assert_eq!(format_bytes(1536), "1.50KB");
        assert_eq!(format_size(1536.0, "iB"), "1.50KiB");
    }

    #[test]
    fn stays_below_factor() {
        assert_eq!(format_bytes(1023), "1023.00B");
        assert_eq!(format_bytes(1024), "1.00KB");
        assert_eq!(format_bytes(8 * 1024 * 1024 * 1024), "8.00GB");
    }

    #[test]
    fn picks_smallest_unit_that_fits() {
        for (bytes, unit) in [(5u64 << 20, "MB"), (3u64 << 40, "TB"), (2u64 << 50, "PB")] {
            let out = format_bytes(bytes);
            assert!(out.ends_with(unit), "{out}");
            let number: f64 = out.trim_end_matches(unit).parse().unwrap();
            assert!(number < 1024.0);
        }
    }

    #[test]
    fn exabytes_stay_in_petabytes() {
        let bytes = 4096.0 * 1024f64.powi(5);
        assert_eq!(format_size(bytes, "B"), "4096.00PB");
    }

    #[test]
    fn memory_percent_goes_through_byte_scaling() {
        // Memory percentage is rendered like a byte count, not as a plain percentage.
        let rendered = format!("{}%", format_size(45.0, "B"));
        assert_eq!(rendered, "45.00B%");
        assert_ne!(rendered, "45.00%");
    }
}
