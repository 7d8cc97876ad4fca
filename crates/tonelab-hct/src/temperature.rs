#![forbid(unsafe_code)]

//! Color temperature theory: complements and analogous sets.
//!
//! Implements Ou, Woodcock and Wright's cool-warm factor over Lab/LCH, with
//! lazy caches so the 360-hue sweeps only run when first needed.

use crate::argb::Argb;
use crate::hct::Hct;
use crate::math;
use std::collections::HashMap;
use std::sync::OnceLock;

pub struct TemperatureCache {
    input: Hct,
    complement: OnceLock<Hct>,
    hcts_by_temp: OnceLock<Vec<Hct>>,
    hcts_by_hue: OnceLock<Vec<Hct>>,
    temps_by_hct: OnceLock<HashMap<Argb, f64>>,
}

impl TemperatureCache {
    #[must_use]
    pub fn new(input: Hct) -> Self {
        Self {
            input,
            complement: OnceLock::new(),
            hcts_by_temp: OnceLock::new(),
            hcts_by_hue: OnceLock::new(),
            temps_by_hct: OnceLock::new(),
        }
    }

    /// A color that complements the input aesthetically: across the color
    /// wheel, and just as cool-warm as the input is warm-cool.
    pub fn complement(&self) -> Hct {
        *self.complement.get_or_init(|| {
            let coldest = self.coldest();
            let warmest = self.warmest();
            let temps = self.temps_by_hct();

            let coldest_hue = coldest.hue();
            let coldest_temp = temps[&coldest.to_argb()];
            let warmest_hue = warmest.hue();
            let warmest_temp = temps[&warmest.to_argb()];

            let range = warmest_temp - coldest_temp;
            let start_is_coldest_to_warmest =
                is_between(self.input.hue(), coldest_hue, warmest_hue);
            let start_hue = if start_is_coldest_to_warmest {
                warmest_hue
            } else {
                coldest_hue
            };
            let end_hue = if start_is_coldest_to_warmest {
                coldest_hue
            } else {
                warmest_hue
            };

            let hcts_by_hue = self.hcts_by_hue();
            let mut answer = hcts_by_hue[self.input.hue().round() as usize % 360];
            let mut smallest_error = 1000.0;
            let complement_relative_temp = 1.0 - self.relative_temperature(&self.input);

            // Walk the opposite section of the wheel and take the color whose
            // relative temperature is closest to the inverse percentile.
            let mut hue_addend = 0.0;
            while hue_addend <= 360.0 {
                let hue = math::sanitize_degrees(start_hue + hue_addend);
                if !is_between(hue, start_hue, end_hue) {
                    hue_addend += 1.0;
                    continue;
                }
                let candidate = hcts_by_hue[hue.round() as usize % 360];
                let relative_temp = (temps[&candidate.to_argb()] - coldest_temp) / range;
                let error = (complement_relative_temp - relative_temp).abs();
                if error < smallest_error {
                    smallest_error = error;
                    answer = candidate;
                }
                hue_addend += 1.0;
            }
            answer
        })
    }

    /// Five colors that pair well with the input, equidistant in temperature
    /// and adjacent in hue.
    pub fn analogous(&self) -> Vec<Hct> {
        self.analogous_with(5, 12)
    }

    /// A set of `count` colors from a wheel of `divisions` sections,
    /// equidistant in temperature. Undefined when either argument is zero;
    /// colors repeat when `divisions < count`.
    pub fn analogous_with(&self, count: usize, divisions: usize) -> Vec<Hct> {
        let start_hue = self.input.hue().round() as i32;
        let hcts_by_hue = self.hcts_by_hue();
        let start_hct = hcts_by_hue[math::sanitize_degrees_int(start_hue) as usize % 360];
        let mut last_temp = self.relative_temperature(&start_hct);

        let mut all_colors = vec![start_hct];

        let mut absolute_total_temp_delta = 0.0;
        for i in 0..360 {
            let hue = math::sanitize_degrees_int(start_hue + i);
            let hct = hcts_by_hue[hue as usize % 360];
            let temp = self.relative_temperature(&hct);
            absolute_total_temp_delta += (temp - last_temp).abs();
            last_temp = temp;
        }

        let mut hue_addend = 1;
        let temp_step = absolute_total_temp_delta / divisions as f64;
        let mut total_temp_delta = 0.0;
        last_temp = self.relative_temperature(&start_hct);

        while all_colors.len() < divisions {
            let hue = math::sanitize_degrees_int(start_hue + hue_addend);
            let hct = hcts_by_hue[hue as usize % 360];
            let temp = self.relative_temperature(&hct);
            total_temp_delta += (temp - last_temp).abs();

            let mut desired_total_delta = all_colors.len() as f64 * temp_step;
            let mut index_satisfied = total_temp_delta >= desired_total_delta;
            let mut index_addend = 1;

            // Keep re-inserting this hue while its temperature covers the next
            // slot. Handles wheels without `divisions` discrete temp steps.
            while index_satisfied && all_colors.len() < divisions {
                all_colors.push(hct);
                desired_total_delta = (all_colors.len() + index_addend) as f64 * temp_step;
                index_satisfied = total_temp_delta >= desired_total_delta;
                index_addend += 1;
            }
            last_temp = temp;
            hue_addend += 1;

            if hue_addend > 360 {
                while all_colors.len() < divisions {
                    all_colors.push(hct);
                }
                break;
            }
        }

        let mut answers = vec![self.input];

        let ccw_count = ((count as f64 - 1.0) / 2.0).floor() as usize;
        for i in 1..=ccw_count {
            let mut index = 0i32 - i as i32;
            while index < 0 {
                index += all_colors.len() as i32;
            }
            answers.insert(0, all_colors[index as usize % all_colors.len()]);
        }

        let cw_count = count - ccw_count - 1;
        for i in 1..=cw_count {
            answers.push(all_colors[i % all_colors.len()]);
        }

        answers
    }

    /// Temperature relative to all colors with the same chroma and tone, 0-1.
    pub fn relative_temperature(&self, hct: &Hct) -> f64 {
        let temps = self.temps_by_hct();
        let coldest_temp = temps[&self.coldest().to_argb()];
        let warmest_temp = temps[&self.warmest().to_argb()];

        let range = warmest_temp - coldest_temp;
        let difference_from_coldest = temps[&hct.to_argb()] - coldest_temp;

        // At T100 only white exists, so there is no range at all.
        if range == 0.0 {
            0.5
        } else {
            difference_from_coldest / range
        }
    }

    fn coldest(&self) -> Hct {
        self.hcts_by_temp()[0]
    }

    fn warmest(&self) -> Hct {
        let hcts = self.hcts_by_temp();
        hcts[hcts.len() - 1]
    }

    // All hues at the input's chroma and tone, sorted by hue.
    fn hcts_by_hue(&self) -> &[Hct] {
        self.hcts_by_hue.get_or_init(|| {
            (0..360)
                .map(|hue| Hct::from(f64::from(hue), self.input.chroma(), self.input.tone()))
                .collect()
        })
    }

    // Same colors, sorted coldest first.
    fn hcts_by_temp(&self) -> &[Hct] {
        self.hcts_by_temp.get_or_init(|| {
            let mut hcts = self.hcts_by_hue().to_vec();
            hcts.push(self.input);
            let temps = self.temps_by_hct();
            hcts.sort_by(|a, b| {
                let temp_a = temps[&a.to_argb()];
                let temp_b = temps[&b.to_argb()];
                temp_a
                    .partial_cmp(&temp_b)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            hcts
        })
    }

    fn temps_by_hct(&self) -> &HashMap<Argb, f64> {
        self.temps_by_hct.get_or_init(|| {
            let mut all_hcts = self.hcts_by_hue().to_vec();
            all_hcts.push(self.input);
            all_hcts
                .into_iter()
                .map(|hct| (hct.to_argb(), raw_temperature(&hct)))
                .collect()
        })
    }
}

/// Cool-warm factor of a color: negative is cool, positive is warm.
///
/// Ou, Woodcock and Wright's algorithm over Lab/LCH.
#[must_use]
pub fn raw_temperature(color: &Hct) -> f64 {
    let lab = color.to_argb().to_lab();
    let hue = math::sanitize_degrees(lab.b.atan2(lab.a).to_degrees());
    let chroma = lab.a.hypot(lab.b);
    -0.5 + 0.02
        * chroma.powf(1.07)
        * math::sanitize_degrees(hue - 50.0).to_radians().cos()
}

// Whether `angle` falls inside the clockwise arc from `a` to `b`.
fn is_between(angle: f64, a: f64, b: f64) -> bool {
    if a < b {
        a <= angle && angle <= b
    } else {
        a <= angle || angle <= b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blue_is_colder_than_red() {
        let blue = Hct::from_argb(Argb(0xFF0000FF));
        let red = Hct::from_argb(Argb(0xFFFF0000));
        assert!(raw_temperature(&blue) < raw_temperature(&red));
    }

    #[test]
    fn complement_of_blue_is_orangish() {
        let blue = Hct::from_argb(Argb::from_rgb(12, 187, 212));
        let cache = TemperatureCache::new(blue);
        let complement = cache.complement();
        assert!(complement.hue() > 50.0);
        assert!(complement.hue() < 70.0);
        assert!(raw_temperature(&complement) > raw_temperature(&blue));
    }

    #[test]
    fn analogous_returns_five() {
        let cache = TemperatureCache::new(Hct::from_argb(Argb(0xFF0000FF)));
        assert_eq!(cache.analogous().len(), 5);
    }
}
