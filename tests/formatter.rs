#[cfg(test)]
mod tests {
    use kintai::libs::formatter::format_hours;

    #[test]
    fn test_whole_numbers_print_without_decimals() {
        assert_eq!(format_hours(3.0), "3");
        assert_eq!(format_hours(0.0), "0");
        assert_eq!(format_hours(160.0), "160");
    }

    #[test]
    fn test_fractions_keep_significant_digits_only() {
        assert_eq!(format_hours(3.5), "3.5");
        assert_eq!(format_hours(3.25), "3.25");
        assert_eq!(format_hours(0.5), "0.5");
        assert_eq!(format_hours(7.1), "7.1");
    }

    #[test]
    fn test_values_round_to_two_decimals_before_stripping() {
        assert_eq!(format_hours(3.2500001), "3.25");
        assert_eq!(format_hours(3.999999), "4");
        assert_eq!(format_hours(1.004), "1");
    }
}
