//! Scales shared by the views: RGB gradients and "nice" linear domains.
//!
//! These mirror the D3.js behaviour the renderers rely on, so the colors and
//! axis bounds computed here match what D3 would have produced in the browser.

use std::fmt;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `#rgb`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if !digits.is_ascii() {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match digits.len() {
            6 => Some(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                let expand = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 17);
                Some(Self::new(expand(0)?, expand(1)?, expand(2)?))
            }
            _ => None,
        }
    }

    /// Linear interpolation in RGB space, `t` clamped to `[0, 1]`.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let mix = |a: u8, b: u8| {
            let v = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

/// CSS functional notation, the same form `d3.interpolateRgb` emits.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Maps `[0, max]` onto a two-color gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequentialColorScale {
    max: f64,
    low: Rgb,
    high: Rgb,
}

impl SequentialColorScale {
    pub fn new(max: f64, low: Rgb, high: Rgb) -> Self {
        Self { max, low, high }
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Position of `value` along the gradient. A zero or invalid domain maps
    /// everything to the bottom of the gradient.
    pub fn position(&self, value: f64) -> f64 {
        if self.max > 0.0 && self.max.is_finite() && value.is_finite() {
            (value / self.max).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    pub fn color(&self, value: f64) -> Rgb {
        self.low.lerp(self.high, self.position(value))
    }
}

/// Step between ticks for roughly `count` ticks over `[start, stop]`.
///
/// Positive results are the step itself; negative results encode the inverse
/// of a sub-unit step (`-10` means a step of `0.1`), which keeps the arithmetic
/// exact for small ranges.
pub fn tick_increment(start: f64, stop: f64, count: u32) -> f64 {
    let step = (stop - start) / f64::from(count.max(1));
    if step <= 0.0 || !step.is_finite() {
        return 0.0;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -10f64.powf(-power) / factor
    }
}

/// Extend `[start, stop]` outward to round tick boundaries.
pub fn nice_domain(start: f64, stop: f64, count: u32) -> (f64, f64) {
    let (mut start, mut stop) = if stop < start { (stop, start) } else { (start, stop) };
    let mut prestep = None;
    for _ in 0..10 {
        let step = tick_increment(start, stop, count);
        if prestep == Some(step) {
            break;
        }
        if step > 0.0 {
            start = (start / step).floor() * step;
            stop = (stop / step).ceil() * step;
        } else if step < 0.0 {
            start = (start * step).ceil() / step;
            stop = (stop * step).floor() / step;
        } else {
            break;
        }
        prestep = Some(step);
    }
    (start, stop)
}

/// Upper bound of a `[0, max]` value axis after rounding to nice ticks.
pub fn nice_upper_bound(max: f64) -> f64 {
    if max <= 0.0 || !max.is_finite() {
        return 0.0;
    }
    nice_domain(0.0, max, 10).1
}
