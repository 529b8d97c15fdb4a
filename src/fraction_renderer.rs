/// Fractions shown as a single glyph, checked before the general approximation.
const COMMON_FRACTIONS: &[(f64, char)] = &[
    (1.0 / 4.0, '¼'),
    (1.0 / 3.0, '⅓'),
    (1.0 / 2.0, '½'),
    (2.0 / 3.0, '⅔'),
    (3.0 / 4.0, '¾'),
];

const COMMON_FRACTION_TOLERANCE: f64 = 0.01;
const APPROXIMATION_TOLERANCE: f64 = 0.015;
/// Largest denominator the approximator will produce. Eighths are the finest
/// subdivision found on ordinary measuring cups and spoons.
const MAX_DENOMINATOR: u64 = 8;

/// Renders a quantity as kitchen-friendly text: "2", "1 ½", "3/8", "2.45".
pub fn render(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    if value < 0.0 {
        return format!("-{}", render(-value));
    }

    let mut whole = value.trunc();
    let fraction = value - whole;

    if fraction < COMMON_FRACTION_TOLERANCE {
        return format_whole(whole);
    }
    if fraction > 1.0 - COMMON_FRACTION_TOLERANCE {
        return format_whole(whole + 1.0);
    }

    if let Some(glyph) = common_fraction_glyph(fraction) {
        return with_whole(whole, &glyph.to_string());
    }

    match approximate_fraction(fraction, APPROXIMATION_TOLERANCE, MAX_DENOMINATOR) {
        Some((0, _)) => format_whole(whole),
        Some((numerator, denominator)) if numerator >= denominator => {
            whole += (numerator / denominator) as f64;
            format_whole(whole)
        }
        Some((numerator, denominator)) => {
            with_whole(whole, &format!("{}/{}", numerator, denominator))
        }
        None => format_decimal(value),
    }
}

/// Looks up the glyph whose value lies within tolerance of `fraction`.
pub fn common_fraction_glyph(fraction: f64) -> Option<char> {
    COMMON_FRACTIONS
        .iter()
        .find(|(target, _)| (fraction - target).abs() <= COMMON_FRACTION_TOLERANCE)
        .map(|(_, glyph)| *glyph)
}

/// Returns the smallest-denominator fraction within `tolerance` of `fraction`, never
/// exceeding `max_denominator`. Every denominator is tried, so fractions that are not
/// continued-fraction convergents (5/7 for 0.7) are still found.
pub fn approximate_fraction(fraction: f64, tolerance: f64, max_denominator: u64) -> Option<(u64, u64)> {
    if !(0.0..1.0).contains(&fraction) {
        return None;
    }
    (1..=max_denominator).find_map(|denominator| {
        let numerator = (fraction * denominator as f64).round();
        ((numerator / denominator as f64 - fraction).abs() <= tolerance)
            .then_some((numerator as u64, denominator))
    })
}

fn with_whole(whole: f64, fraction_text: &str) -> String {
    if whole == 0.0 {
        fraction_text.to_string()
    } else {
        format!("{} {}", format_whole(whole), fraction_text)
    }
}

fn format_whole(whole: f64) -> String {
    format!("{:.0}", whole)
}

fn format_decimal(value: f64) -> String {
    let text = format!("{:.2}", value);
    if !text.contains('.') {
        return text;
    }
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_whole_numbers() {
        assert_eq!(render(2.0), "2");
        assert_eq!(render(0.0), "0");
        assert_eq!(render(12.0), "12");
    }

    #[test]
    fn test_render_common_fractions() {
        assert_eq!(render(0.5), "½");
        assert_eq!(render(0.25), "¼");
        assert_eq!(render(1.5), "1 ½");
        assert_eq!(render(2.75), "2 ¾");
        assert_eq!(render(1.0 / 3.0), "⅓");
        assert_eq!(render(2.0 / 3.0 + 1.0), "1 ⅔");
    }

    #[test]
    fn test_render_snaps_to_common_fraction_within_tolerance() {
        assert_eq!(render(0.505), "½");
        assert_eq!(render(0.33), "⅓");
    }

    #[test]
    fn test_render_snaps_near_whole_values() {
        assert_eq!(render(2.995), "3");
        assert_eq!(render(3.004), "3");
        assert_eq!(render(0.1 * 3.0 * 10.0), "3");
    }

    #[test]
    fn test_render_general_fractions() {
        assert_eq!(render(0.125), "1/8");
        assert_eq!(render(1.375), "1 3/8");
        assert_eq!(render(0.2), "1/5");
        assert_eq!(render(2.6), "2 3/5");
        assert_eq!(render(0.3), "2/7");
        assert_eq!(render(0.7), "5/7");
        assert_eq!(render(1.7), "1 5/7");
    }

    #[test]
    fn test_render_decimal_fallback() {
        assert_eq!(render(0.45), "0.45");
        assert_eq!(render(2.45), "2.45");
        assert_eq!(render(0.1), "0.1");
    }

    #[test]
    fn test_render_degenerate_inputs() {
        assert_eq!(render(f64::NAN), "0");
        assert_eq!(render(f64::INFINITY), "0");
        assert_eq!(render(-1.5), "-1 ½");
    }

    #[test]
    fn test_approximate_fraction_prefers_small_denominators() {
        assert_eq!(approximate_fraction(0.5, 0.015, 8), Some((1, 2)));
        assert_eq!(approximate_fraction(0.375, 0.015, 8), Some((3, 8)));
        assert_eq!(approximate_fraction(0.1, 0.015, 8), None);
        assert_eq!(approximate_fraction(0.1, 0.015, 10), Some((1, 9)));
        assert_eq!(approximate_fraction(0.7, 0.015, 8), Some((5, 7)));
        assert_eq!(approximate_fraction(1.5, 0.015, 8), None);
    }

    #[test]
    fn test_common_fraction_glyph_lookup() {
        assert_eq!(common_fraction_glyph(0.75), Some('¾'));
        assert_eq!(common_fraction_glyph(0.6), None);
    }
}
