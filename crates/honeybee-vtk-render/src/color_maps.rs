//! Legend color sets and value-to-color mapping.

use glam::Vec3;
use honeybee_vtk_core::{ColorSet, LegendConfig};

/// A color map for mapping scalar values to colors.
#[derive(Debug, Clone)]
pub struct ColorMap {
    /// Color set this map was built from.
    pub color_set: ColorSet,
    /// Color samples (evenly spaced from 0 to 1).
    pub colors: Vec<Vec3>,
}

impl ColorMap {
    /// Builds the color map of a legend color set.
    pub fn new(color_set: ColorSet) -> Self {
        let rgb: &[[u8; 3]] = match color_set {
            ColorSet::Original => &[
                [75, 107, 169],
                [115, 147, 202],
                [170, 200, 247],
                [193, 213, 208],
                [245, 239, 103],
                [252, 230, 74],
                [239, 156, 21],
                [234, 123, 0],
                [234, 74, 0],
                [234, 38, 0],
            ],
            ColorSet::Nuanced => &[
                [49, 54, 149],
                [69, 117, 180],
                [116, 173, 209],
                [171, 217, 233],
                [224, 243, 248],
                [255, 255, 191],
                [254, 224, 144],
                [253, 174, 97],
                [244, 109, 67],
                [215, 48, 39],
                [165, 0, 38],
            ],
            ColorSet::Ecotect => &[
                [0, 0, 255],
                [53, 0, 202],
                [107, 0, 148],
                [160, 0, 95],
                [214, 0, 41],
                [255, 12, 0],
                [255, 66, 0],
                [255, 119, 0],
                [255, 173, 0],
                [255, 226, 0],
                [255, 255, 0],
            ],
            ColorSet::BlackToWhite => &[[0, 0, 0], [255, 255, 255]],
            ColorSet::BlueGreenRed => &[[0, 0, 255], [0, 255, 100], [255, 0, 0]],
        };

        let colors = rgb
            .iter()
            .map(|[r, g, b]| Vec3::new(f32::from(*r), f32::from(*g), f32::from(*b)) / 255.0)
            .collect();
        Self { color_set, colors }
    }

    /// Samples the color map at a given value (0 to 1).
    pub fn sample(&self, t: f32) -> Vec3 {
        let t = t.clamp(0.0, 1.0);

        if self.colors.is_empty() {
            return Vec3::ZERO;
        }

        if self.colors.len() == 1 {
            return self.colors[0];
        }

        let n = self.colors.len() - 1;
        let idx = (t * n as f32).floor() as usize;
        let idx = idx.min(n - 1);
        let frac = t * n as f32 - idx as f32;

        self.colors[idx].lerp(self.colors[idx + 1], frac)
    }
}

/// Resolved legend for one dataset: color map and value range.
#[derive(Debug, Clone)]
pub struct Legend {
    /// Title shown on the legend.
    pub title: String,
    pub color_map: ColorMap,
    pub min: f64,
    pub max: f64,
    /// Number of discrete colors on the legend.
    pub color_count: usize,
    /// Number of labels, `None` for the toolkit default.
    pub label_count: Option<u32>,
}

impl Legend {
    /// Resolves a legend config against the data it colors.
    ///
    /// An autocalculated min or max is taken from `values`. An autocalculated
    /// color count is the number of colors in the color set.
    pub fn from_config(
        identifier: &str,
        unit: &str,
        config: &LegendConfig,
        values: &[f64],
    ) -> Self {
        let color_map = ColorMap::new(config.color_set);
        let data_min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let data_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let min = config
            .min
            .value()
            .unwrap_or(if data_min.is_finite() { data_min } else { 0.0 });
        let max = config
            .max
            .value()
            .unwrap_or(if data_max.is_finite() { data_max } else { 1.0 });

        let color_count = config
            .color_count
            .value()
            .map_or(color_map.colors.len(), |c| c as usize)
            .max(1);
        let label_count = config
            .label_count
            .value()
            .map(|l| l.min(u32::try_from(color_count).unwrap_or(u32::MAX)));

        Self {
            title: format!("{identifier} ({unit})"),
            color_map,
            min,
            max,
            color_count,
            label_count,
        }
    }

    /// Color of a single value, snapped to one of `color_count` bins.
    pub fn color(&self, value: f64) -> Vec3 {
        let range = self.max - self.min;
        let t = if range.abs() < f64::EPSILON {
            0.0
        } else {
            ((value - self.min) / range).clamp(0.0, 1.0)
        };

        if self.color_count == 1 {
            return self.color_map.sample(0.0);
        }
        let bins = self.color_count as f64;
        let bin = (t * bins).floor().min(bins - 1.0);
        self.color_map.sample((bin / (bins - 1.0)) as f32)
    }

    /// Colors for every value.
    pub fn colors(&self, values: &[f64]) -> Vec<Vec3> {
        values.iter().map(|v| self.color(*v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use honeybee_vtk_core::Autocalculate;

    #[test]
    fn test_color_map_ends() {
        let map = ColorMap::new(ColorSet::BlackToWhite);
        assert_eq!(map.sample(0.0), Vec3::ZERO);
        assert_eq!(map.sample(1.0), Vec3::ONE);
        assert!((map.sample(0.5) - Vec3::splat(0.5)).length() < 1e-6);
        assert_eq!(map.sample(-3.0), Vec3::ZERO);
    }

    #[test]
    fn test_every_color_set_has_colors() {
        for set in [
            ColorSet::Original,
            ColorSet::Nuanced,
            ColorSet::Ecotect,
            ColorSet::BlackToWhite,
            ColorSet::BlueGreenRed,
        ] {
            assert!(ColorMap::new(set).colors.len() >= 2);
        }
    }

    #[test]
    fn test_autocalculated_range() {
        let legend = Legend::from_config("DF", "%", &LegendConfig::default(), &[2.0, 8.0, 5.0]);
        assert_eq!(legend.min, 2.0);
        assert_eq!(legend.max, 8.0);
        assert_eq!(legend.color_count, 11);
        assert_eq!(legend.title, "DF (%)");
    }

    #[test]
    fn test_explicit_range_and_bins() {
        let config = LegendConfig {
            color_set: ColorSet::BlackToWhite,
            min: Autocalculate::Value(0.0),
            max: Autocalculate::Value(10.0),
            color_count: Autocalculate::Value(2),
            label_count: Autocalculate::Value(9),
            ..LegendConfig::default()
        };
        let legend = Legend::from_config("T", "C", &config, &[100.0]);
        assert_eq!(legend.label_count, Some(2));

        let colors = legend.colors(&[1.0, 4.9, 5.1, 42.0]);
        assert_eq!(colors[0], Vec3::ZERO);
        assert_eq!(colors[1], Vec3::ZERO);
        assert_eq!(colors[2], Vec3::ONE);
        assert_eq!(colors[3], Vec3::ONE);
    }
}
