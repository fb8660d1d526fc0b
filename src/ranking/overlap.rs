/// Discount applied to overlap ratios of 0.5 and above
const OVERLAP_DISCOUNT: f64 = 0.3;

/// Per-character overlap between an input and a preset Han string.
///
/// Every input char (duplicates included) that occurs anywhere in `preset`
/// counts once. The count is divided by the preset length; ratios of 0.5 or
/// more are discounted by 0.3. An empty preset scores 0.
pub fn match_name_character(input: &str, preset: &str) -> f64 {
    let preset_len = preset.chars().count();
    if preset_len == 0 {
        return 0.0;
    }

    let hits = input.chars().filter(|&c| preset.contains(c)).count();
    let ratio = hits as f64 / preset_len as f64;

    if ratio >= 0.5 {
        ratio - OVERLAP_DISCOUNT
    } else {
        ratio
    }
}

/// Han similarity of an input against a record's Han part.
///
/// Containment scores `len(input) / len(record)`, otherwise the character
/// overlap is used. A record without Han scores 0.
pub fn han_ratio(input_han: &str, record_han: &str) -> f64 {
    let record_len = record_han.chars().count();
    if record_len == 0 {
        return 0.0;
    }

    if record_han.contains(input_han) {
        input_han.chars().count() as f64 / record_len as f64
    } else {
        match_name_character(input_han, record_han)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_full_overlap_is_discounted() {
        assert_close(match_name_character("华文吴", "华文吴"), 0.7);
    }

    #[test]
    fn test_partial_overlap_above_half() {
        // 2/3 - 0.3
        assert_close(match_name_character("吴华", "华文吴"), 2.0 / 3.0 - 0.3);
    }

    #[test]
    fn test_no_overlap() {
        assert_eq!(match_name_character("abc", "华文吴"), 0.0);
    }

    #[test]
    fn test_foreign_chars_do_not_count() {
        assert_close(match_name_character("吴abc", "华文吴"), 1.0 / 3.0);
    }

    #[test]
    fn test_below_half_is_not_discounted() {
        assert_close(match_name_character("吴", "华文吴"), 1.0 / 3.0);
    }

    #[test]
    fn test_repeated_input_chars_count_again() {
        // 吴 twice against a single 吴: 2/3 - 0.3
        assert_close(match_name_character("吴吴", "华文吴"), 2.0 / 3.0 - 0.3);
    }

    #[test]
    fn test_empty_input_or_preset() {
        assert_eq!(match_name_character("", "华文吴"), 0.0);
        assert_eq!(match_name_character("华", ""), 0.0);
    }

    #[test]
    fn test_han_ratio_containment() {
        assert_eq!(han_ratio("月林张", "月林张"), 1.0);
        assert_close(han_ratio("安妮", "李安妮"), 2.0 / 3.0);
        assert_close(han_ratio("李", "本雅明李"), 0.25);
    }

    #[test]
    fn test_han_ratio_falls_back_to_overlap() {
        assert_close(han_ratio("吴华", "华文吴"), 2.0 / 3.0 - 0.3);
        assert_eq!(han_ratio("方正", "本雅明李"), 0.0);
    }

    #[test]
    fn test_han_ratio_empty_record() {
        assert_eq!(han_ratio("李", ""), 0.0);
        assert_eq!(han_ratio("", ""), 0.0);
    }
}
