#![forbid(unsafe_code)]

//! Tone searches over a palette's chroma profile.
//!
//! Chroma is not monotone in tone: every palette has a tone where its hue
//! carries the most chroma, with chroma falling off toward both black and
//! white. These searches walk integer tones to find the most colorful end of
//! a tone range.

use tonelab_hct::{Hct, TonalPalette};

/// The tone in `[lower_bound, upper_bound]` closest to the palette's maximum
/// chroma, after scaling the palette chroma by `chroma_multiplier`.
#[must_use]
pub fn t_max_c(
    palette: &TonalPalette,
    lower_bound: f64,
    upper_bound: f64,
    chroma_multiplier: f64,
) -> f64 {
    let answer = find_best_tone_for_chroma(
        palette.hue,
        palette.chroma * chroma_multiplier,
        100.0,
        true,
    );
    answer.clamp(lower_bound, upper_bound)
}

/// The tone in `[lower_bound, upper_bound]` closest to the palette's maximum
/// chroma when approached from black.
#[must_use]
pub fn t_min_c(palette: &TonalPalette, lower_bound: f64, upper_bound: f64) -> f64 {
    let answer = find_best_tone_for_chroma(palette.hue, palette.chroma, 0.0, false);
    answer.clamp(lower_bound, upper_bound)
}

/// Hill-climbs from `tone` one integer step at a time, keeping each step
/// that strictly increases measured chroma. `by_decreasing_tone` selects the
/// walk direction. When the requested chroma is unreachable the walk covers
/// the whole tone range and `answer` holds the peak-chroma tone.
fn find_best_tone_for_chroma(
    hue: f64,
    chroma: f64,
    mut tone: f64,
    by_decreasing_tone: bool,
) -> f64 {
    let mut answer = tone;
    let mut best_candidate = Hct::from(hue, chroma, answer);

    while best_candidate.chroma() < chroma {
        if !(0.0..=100.0).contains(&tone) {
            break;
        }
        tone += if by_decreasing_tone { -1.0 } else { 1.0 };
        let new_candidate = Hct::from(hue, chroma, tone);
        if best_candidate.chroma() < new_candidate.chroma() {
            best_candidate = new_candidate;
            answer = tone;
        }
    }

    answer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_max_c_respects_bounds() {
        let palette = TonalPalette::from_hue_and_chroma(280.0, 60.0);
        let tone = t_max_c(&palette, 30.0, 40.0, 1.0);
        assert!((30.0..=40.0).contains(&tone));
    }

    #[test]
    fn t_min_c_respects_bounds() {
        let palette = TonalPalette::from_hue_and_chroma(120.0, 40.0);
        let tone = t_min_c(&palette, 60.0, 100.0);
        assert!((60.0..=100.0).contains(&tone));
    }

    #[test]
    fn unclamped_search_lands_near_peak_chroma() {
        let palette = TonalPalette::from_hue_and_chroma(27.0, 113.0);
        let tone = t_max_c(&palette, 0.0, 100.0, 1.0);
        let at_peak = Hct::from(27.0, 113.0, tone).chroma();
        let above = Hct::from(27.0, 113.0, (tone + 5.0).min(100.0)).chroma();
        let below = Hct::from(27.0, 113.0, (tone - 5.0).max(0.0)).chroma();
        assert!(at_peak + 1e-6 >= above.min(below));
    }

    #[test]
    fn unreachable_chroma_returns_the_peak_tone() {
        // No tone carries chroma 200 at this hue, so the walk scans the whole
        // range and must report the most chromatic tone, not where it stopped.
        let palette = TonalPalette::from_hue_and_chroma(280.0, 200.0);
        let tone = t_max_c(&palette, 0.0, 100.0, 1.0);
        let at_answer = Hct::from(280.0, 200.0, tone).chroma();
        for t in 0..=100 {
            assert!(at_answer + 1e-6 >= Hct::from(280.0, 200.0, f64::from(t)).chroma());
        }
        assert!(tone > 0.0 && tone < 100.0);
    }

    #[test]
    fn unreachable_chroma_from_black_returns_the_peak_tone() {
        let palette = TonalPalette::from_hue_and_chroma(200.0, 200.0);
        let tone = t_min_c(&palette, 0.0, 100.0);
        let at_answer = Hct::from(200.0, 200.0, tone).chroma();
        for t in 0..=100 {
            assert!(at_answer + 1e-6 >= Hct::from(200.0, 200.0, f64::from(t)).chroma());
        }
        assert!(tone > 0.0 && tone < 100.0);
    }

    #[test]
    fn low_chroma_palette_search_stays_in_gamut() {
        let palette = TonalPalette::from_hue_and_chroma(280.0, 4.0);
        let tone = t_max_c(&palette, 0.0, 100.0, 1.0);
        assert!((0.0..=100.0).contains(&tone));
    }
}
