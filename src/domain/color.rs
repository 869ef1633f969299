//! Pipe colors picked by hue at fixed saturation and lightness.

use super::{Coordinate, HueSelector};

pub const COLOR_SATURATION: f64 = 100.0;
pub const COLOR_LIGHTNESS: f64 = 55.0;

#[derive(Clone)]
pub struct ColorGenerator {
    selector: HueSelector,
    saturation: f64,
    lightness: f64,
}

impl ColorGenerator {
    pub fn new(selector: HueSelector) -> Self {
        Self {
            selector,
            saturation: COLOR_SATURATION,
            lightness: COLOR_LIGHTNESS,
        }
    }

    pub fn with_saturation_and_lightness(self, saturation: f64, lightness: f64) -> Self {
        Self {
            saturation,
            lightness,
            ..self
        }
    }

    pub fn selector(&self) -> &HueSelector {
        &self.selector
    }

    /// RGB color with every channel in [0, 1], interpreted as x = red, y = green, z = blue.
    pub fn generate_color(&self) -> Coordinate {
        let hue = (self.selector)();
        let [r, g, b] = hsl_to_rgb(hue, self.saturation, self.lightness);
        let color = Coordinate::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0);

        log::debug!("generated color {color} from hue {hue:.1}");

        color
    }
}

/// Converts hue in degrees, saturation and lightness in percent into 8-bit RGB channels.
///
/// Hues outside [0, 360) wrap around, saturation and lightness are clamped to [0, 100].
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> [u8; 3] {
    let h = hue.rem_euclid(360.0) / 360.0;
    let s = saturation.clamp(0.0, 100.0) / 100.0;
    let l = lightness.clamp(0.0, 100.0) / 100.0;

    if s == 0.0 {
        let value = to_channel(l);
        return [value, value, value];
    }

    let t2 = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let t1 = 2.0 * l - t2;

    let mut rgb = [0; 3];
    for (i, channel) in rgb.iter_mut().enumerate() {
        let mut t3 = h + 1.0 / 3.0 * -(i as f64 - 1.0);
        if t3 < 0.0 {
            t3 += 1.0;
        }
        if t3 > 1.0 {
            t3 -= 1.0;
        }

        let value = if 6.0 * t3 < 1.0 {
            t1 + (t2 - t1) * 6.0 * t3
        } else if 2.0 * t3 < 1.0 {
            t2
        } else if 3.0 * t3 < 2.0 {
            t1 + (t2 - t1) * (2.0 / 3.0 - t3) * 6.0
        } else {
            t1
        };
        *channel = to_channel(value);
    }
    rgb
}

fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}
