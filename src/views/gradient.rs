//! Background gradient for table cells (`RdYlBu_r`).

use ratatui::style::Color;

/// ColorBrewer RdYlBu, reversed: low values blue, high values red.
const RD_YL_BU_R: [(u8, u8, u8); 11] = [
    (0x31, 0x36, 0x95),
    (0x45, 0x75, 0xb4),
    (0x74, 0xad, 0xd1),
    (0xab, 0xd9, 0xe9),
    (0xe0, 0xf3, 0xf8),
    (0xff, 0xff, 0xbf),
    (0xfe, 0xe0, 0x90),
    (0xfd, 0xae, 0x61),
    (0xf4, 0x6d, 0x43),
    (0xd7, 0x30, 0x27),
    (0xa5, 0x00, 0x26),
];

/// Backgrounds darker than this get light text.
const TEXT_COLOR_THRESHOLD: f64 = 0.408;

/// Cell colors for one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shade {
    pub bg: Color,
    pub fg: Color,
}

/// Position of `value` within `[low, high]`, in `[0, 1]`. A flat column maps to 0.
pub fn normalize(value: f64, low: f64, high: f64) -> f64 {
    let span = high - low;
    if span <= 0.0 || !span.is_finite() {
        return 0.0;
    }
    ((value - low) / span).clamp(0.0, 1.0)
}

/// Colormap lookup with linear interpolation between stops.
pub fn colormap(t: f64) -> (u8, u8, u8) {
    let scaled = t.clamp(0.0, 1.0) * (RD_YL_BU_R.len() - 1) as f64;
    let lower = scaled.floor() as usize;
    let upper = (lower + 1).min(RD_YL_BU_R.len() - 1);
    let frac = scaled - lower as f64;

    let (r0, g0, b0) = RD_YL_BU_R[lower];
    let (r1, g1, b1) = RD_YL_BU_R[upper];
    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
    (mix(r0, r1), mix(g0, g1), mix(b0, b1))
}

/// WCAG relative luminance of an sRGB color.
fn relative_luminance((r, g, b): (u8, u8, u8)) -> f64 {
    let channel = |c: u8| {
        let c = c as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * channel(r) + 0.7152 * channel(g) + 0.0722 * channel(b)
}

pub fn shade(value: f64, low: f64, high: f64) -> Shade {
    let rgb = colormap(normalize(value, low, high));
    let fg = if relative_luminance(rgb) < TEXT_COLOR_THRESHOLD {
        Color::Rgb(0xf1, 0xf1, 0xf1)
    } else {
        Color::Rgb(0, 0, 0)
    };
    Shade {
        bg: Color::Rgb(rgb.0, rgb.1, rgb.2),
        fg,
    }
}

/// Min and max of a column, `None` when empty.
pub fn column_range(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values.into_iter().fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extremes_map_to_blue_and_red() {
        assert_eq!(colormap(0.0), (0x31, 0x36, 0x95));
        assert_eq!(colormap(1.0), (0xa5, 0x00, 0x26));
        assert_eq!(colormap(0.5), (0xff, 0xff, 0xbf));
    }

    #[test]
    fn test_flat_column_uses_lowest_color() {
        assert_eq!(normalize(5.0, 5.0, 5.0), 0.0);
        assert_eq!(shade(5.0, 5.0, 5.0).bg, Color::Rgb(0x31, 0x36, 0x95));
    }

    #[test]
    fn test_text_contrasts_with_background() {
        assert_eq!(shade(0.0, 0.0, 10.0).fg, Color::Rgb(0xf1, 0xf1, 0xf1));
        assert_eq!(shade(5.0, 0.0, 10.0).fg, Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_column_range() {
        assert_eq!(column_range([3.0, -1.0, 7.5]), Some((-1.0, 7.5)));
        assert_eq!(column_range(Vec::<f64>::new()), None);
    }
}
