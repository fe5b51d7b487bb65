//! Fixed region → color mapping (ColorBrewer YlGnBu, five steps).

use plotters::style::RGBColor;

/// Regions in palette order.
pub const REGIONS: [&str; 5] = ["Americas", "Europe", "Asia", "Africa", "Oceania"];

const COLORS: [RGBColor; 5] = [
    RGBColor(0xff, 0xff, 0xcc),
    RGBColor(0xa1, 0xda, 0xb4),
    RGBColor(0x41, 0xb6, 0xc4),
    RGBColor(0x2c, 0x7f, 0xb8),
    RGBColor(0x25, 0x34, 0x94),
];

const FALLBACK: RGBColor = RGBColor(0x99, 0x99, 0x99);

/// Fill color for a region; unknown regions get a neutral gray.
pub fn region_color(region: &str) -> RGBColor {
    REGIONS
        .iter()
        .position(|r| *r == region)
        .map(|i| COLORS[i])
        .unwrap_or(FALLBACK)
}

/// Outline color: the fill darkened roughly the way d3's `.darker()` does.
pub fn darker(c: RGBColor) -> RGBColor {
    RGBColor(
        (c.0 as f64 * 0.7) as u8,
        (c.1 as f64 * 0.7) as u8,
        (c.2 as f64 * 0.7) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_regions_have_distinct_colors() {
        let mut seen = Vec::new();
        for region in REGIONS {
            let c = region_color(region);
            assert!(!seen.contains(&(c.0, c.1, c.2)));
            seen.push((c.0, c.1, c.2));
        }
    }

    #[test]
    fn unknown_region_falls_back() {
        let c = region_color("Atlantis");
        assert_eq!((c.0, c.1, c.2), (0x99, 0x99, 0x99));
    }

    #[test]
    fn darker_darkens_each_channel() {
        let c = darker(RGBColor(200, 100, 0));
        assert!(c.0 < 200 && c.1 < 100);
        assert_eq!(c.2, 0);
    }
}
