/// Values that divide evenly are returned as computed, everything else is
/// rounded to the nearest tenth of the stored value.
fn exact_or_rounded(value: f64, exact: bool) -> f64 {
    if exact {
        return value;
    }
    // `{:.1}` rounds the exact binary value, scaling by 10 first would not
    format!("{value:.1}").parse().unwrap_or(value)
}

pub mod temperature {
    use super::exact_or_rounded;

    pub fn fahrenheit_to_celsius(temp_f: f64) -> f64 {
        let scaled = (temp_f - 32.0) * 5.0;
        exact_or_rounded(scaled / 9.0, scaled % 9.0 == 0.0)
    }

    #[test]
    fn test_fahrenheit_to_celsius() {
        assert_eq!(fahrenheit_to_celsius(32.0), 0.0);
        assert_eq!(fahrenheit_to_celsius(212.0), 100.0);
        assert_eq!(fahrenheit_to_celsius(50.0), 10.0);
        assert_eq!(fahrenheit_to_celsius(100.0), 37.8);
        assert_eq!(fahrenheit_to_celsius(0.0), -17.8);
        assert_eq!(fahrenheit_to_celsius(45.5), 7.5);
    }
}

pub mod stats {
    use super::exact_or_rounded;

    /// `count` must be non-zero.
    pub fn mean(total: f64, count: usize) -> f64 {
        let count = count as f64;
        exact_or_rounded(total / count, total % count == 0.0)
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(10.0, 2), 5.0);
        assert_eq!(mean(10.0, 3), 3.3);
        assert_eq!(mean(141.0, 3), 47.0);
        assert_eq!(mean(20.0, 3), 6.7);
    }

    #[test]
    fn test_mean_rounds_stored_value() {
        // 30.15 and 0.35 are stored slightly below the written value
        assert_eq!(mean(60.3, 2), 30.1);
        assert_eq!(mean(0.7, 2), 0.3);
        assert_eq!(super::temperature::fahrenheit_to_celsius(mean(60.3, 2)), -1.1);
    }
}
