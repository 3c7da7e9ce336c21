//! Text fitting helpers for timeline titles.

use eframe::egui;

const ELLIPSIS: &str = "…";

/// Shortens `text` with a trailing ellipsis until `measure` says it fits.
///
/// `measure` returns the rendered width of a candidate string. Returns an
/// empty string when not even the ellipsis fits.
pub fn fit_with_ellipsis(text: &str, max_width: f32, measure: impl Fn(&str) -> f32) -> String {
    if measure(text) <= max_width {
        return text.to_string();
    }
    if measure(ELLIPSIS) > max_width {
        return String::new();
    }

    // Largest prefix (in chars) that still fits together with the ellipsis.
    let chars: Vec<char> = text.chars().collect();
    let (mut low, mut high) = (0usize, chars.len());
    while low < high {
        let mid = (low + high + 1) / 2;
        let mut candidate: String = chars[..mid].iter().collect();
        candidate.push_str(ELLIPSIS);
        if measure(&candidate) <= max_width {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    let mut result: String = chars[..low].iter().collect();
    result.push_str(ELLIPSIS);
    result
}

/// [`fit_with_ellipsis`] measured with the painter's font metrics.
pub fn truncate_text_to_fit(
    text: &str,
    available_width: f32,
    font_id: &egui::FontId,
    painter: &egui::Painter,
) -> String {
    fit_with_ellipsis(text, available_width, |candidate| {
        painter
            .layout_no_wrap(candidate.to_string(), font_id.clone(), egui::Color32::WHITE)
            .size()
            .x
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn width(s: &str) -> f32 {
        s.chars().count() as f32 * 10.0
    }

    #[test]
    fn test_fits_unchanged() {
        assert_eq!(fit_with_ellipsis("2016 - 2020", 200.0, width), "2016 - 2020");
    }

    #[test]
    fn test_truncates() {
        assert_eq!(fit_with_ellipsis("abcdefgh", 50.0, width), "abcd…");
    }

    #[test]
    fn test_too_narrow() {
        assert_eq!(fit_with_ellipsis("abc", 5.0, width), "");
        assert_eq!(fit_with_ellipsis("abc", 10.0, width), "…");
    }
}
