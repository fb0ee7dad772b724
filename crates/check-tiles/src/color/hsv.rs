//! HSV color type
//!
//! Hexcone model with every component normalized to `0.0..=1.0`; hue is a
//! fraction of a full turn rather than degrees.

use super::Rgb;

/// A color in hue/saturation/value form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue as a fraction of a turn (`0.0..1.0`)
    pub h: f64,
    /// Saturation (`0.0..=1.0`)
    pub s: f64,
    /// Value, the maximum channel (`0.0..=1.0`)
    pub v: f64,
}

impl Hsv {
    #[inline]
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Convert normalized RGB channels (`0.0..=1.0`) to HSV.
    pub fn from_rgb_f64(r: f64, g: f64, b: f64) -> Self {
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let v = max;
        if min == max {
            return Self::new(0.0, 0.0, v);
        }

        let range = max - min;
        let s = range / max;
        let rc = (max - r) / range;
        let gc = (max - g) / range;
        let bc = (max - b) / range;

        let h = if r == max {
            bc - gc
        } else if g == max {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };

        Self::new((h / 6.0).rem_euclid(1.0), s, v)
    }

    /// Convert to normalized RGB channels (`0.0..=1.0`).
    pub fn to_rgb_f64(self) -> (f64, f64, f64) {
        let Self { h, s, v } = self;
        if s == 0.0 {
            return (v, v, v);
        }

        let sector = (h * 6.0).floor();
        let f = h * 6.0 - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        match (sector as i64).rem_euclid(6) {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        }
    }

    /// Convert to 8-bit RGB, truncating each channel.
    ///
    /// Channels are clamped into range first, so any `Hsv` yields a valid
    /// color even if a component drifted outside `0.0..=1.0`.
    pub fn to_rgb8(self) -> Rgb {
        let (r, g, b) = self.to_rgb_f64();
        let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0) as u8;
        Rgb::new(channel(r), channel(g), channel(b))
    }

    /// Return a copy with `delta` added to the value channel, clamped to
    /// `0.0..=1.0`.
    #[inline]
    pub fn shift_value(self, delta: f64) -> Self {
        Self::new(self.h, self.s, (self.v + delta).clamp(0.0, 1.0))
    }
}

impl From<Rgb> for Hsv {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb_f64(
            rgb.r as f64 / 255.0,
            rgb.g as f64 / 255.0,
            rgb.b as f64 / 255.0,
        )
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
    fn test_primaries() {
        let red = Hsv::from(Rgb::new(255, 0, 0));
        assert_close(red.h, 0.0);
        assert_close(red.s, 1.0);
        assert_close(red.v, 1.0);

        let green = Hsv::from(Rgb::new(0, 255, 0));
        assert_close(green.h, 1.0 / 3.0);

        let blue = Hsv::from(Rgb::new(0, 0, 255));
        assert_close(blue.h, 2.0 / 3.0);
    }

    #[test]
    fn test_grey_has_no_hue_or_saturation() {
        let grey = Hsv::from(Rgb::new(128, 128, 128));
        assert_eq!(grey.h, 0.0);
        assert_eq!(grey.s, 0.0);
        assert_close(grey.v, 128.0 / 255.0);
        assert_eq!(grey.to_rgb8(), Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_magenta_wraps_hue_into_unit_range() {
        // red is max and blue > green: raw hue is negative before wrapping
        let hsv = Hsv::from(Rgb::new(255, 0, 128));
        assert!(hsv.h > 0.9 && hsv.h < 1.0, "hue {} not wrapped", hsv.h);
    }

    #[test]
    fn test_round_trip_of_representative_colors() {
        for rgb in [
            Rgb::new(255, 0, 0),
            Rgb::new(0, 128, 128),
            Rgb::new(255, 255, 0),
            Rgb::new(255, 255, 255),
            Rgb::new(0, 0, 0),
        ] {
            assert_eq!(Hsv::from(rgb).to_rgb8(), rgb);
        }
    }

    #[test]
    fn test_each_sector_maps_back_to_its_primary_mix() {
        let cases = [
            (0.0, (1.0, 0.0, 0.0)),
            (1.0 / 6.0, (1.0, 1.0, 0.0)),
            (2.0 / 6.0, (0.0, 1.0, 0.0)),
            (3.0 / 6.0, (0.0, 1.0, 1.0)),
            (4.0 / 6.0, (0.0, 0.0, 1.0)),
            (5.0 / 6.0, (1.0, 0.0, 1.0)),
        ];
        for (h, (r, g, b)) in cases {
            let (ar, ag, ab) = Hsv::new(h, 1.0, 1.0).to_rgb_f64();
            assert_close(ar, r);
            assert_close(ag, g);
            assert_close(ab, b);
        }
    }

    #[test]
    fn test_shift_value_clamps() {
        let hsv = Hsv::new(0.25, 0.5, 0.9);
        assert_eq!(hsv.shift_value(0.4).v, 1.0);
        assert_eq!(hsv.shift_value(-2.0).v, 0.0);
        assert_close(hsv.shift_value(-0.4).v, 0.5);
        assert_eq!(hsv.shift_value(0.4).h, 0.25);
        assert_eq!(hsv.shift_value(0.4).s, 0.5);
    }
}
