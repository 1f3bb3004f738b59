//! Configuration for result data mounted on a model.
//!
//! A config file is a JSON object whose values are [`DataConfig`] entries:
//!
//! ```json
//! {
//!   "daylight-factor": {
//!     "identifier": "Daylight-Factor",
//!     "object_type": "grid",
//!     "unit": "Percentage",
//!     "path": "results/daylight-factor",
//!     "legend_parameters": { "color_set": "nuanced", "min": 0, "max": 10 }
//!   }
//! }
//! ```
//!
//! Each data folder holds a `grids_info.json` listing the grids it has results
//! for, and one result file per grid named after the grid identifier.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{HbVtkError, Result};
use crate::model::GridInfo;

/// Name of the file that catalogues the result files of a data folder.
pub const GRIDS_INFO_FILE: &str = "grids_info.json";

/// Marker for a value that is computed from the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AutocalculateTag {
    /// `{"type": "Autocalculate"}`
    Autocalculate,
}

/// Either an explicit value or `{"type": "Autocalculate"}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Autocalculate<T> {
    /// Computed from the data.
    Auto(AutocalculateTag),
    /// Given explicitly.
    Value(T),
}

impl<T> Default for Autocalculate<T> {
    fn default() -> Self {
        Self::Auto(AutocalculateTag::Autocalculate)
    }
}

impl<T: Copy> Autocalculate<T> {
    /// Returns the explicit value, if any.
    pub fn value(&self) -> Option<T> {
        match self {
            Self::Auto(_) => None,
            Self::Value(v) => Some(*v),
        }
    }

    /// Whether the value is computed from the data.
    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Auto(_))
    }
}

/// Color sets available for legends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorSet {
    /// Blue to red through yellow.
    Original,
    /// Diverging blue to red.
    Nuanced,
    /// Blue to yellow through red.
    #[default]
    Ecotect,
    /// Black to white.
    BlackToWhite,
    /// Blue, green, red.
    BlueGreenRed,
}

/// Legend orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Laid out left to right.
    #[default]
    Horizontal,
    /// Laid out bottom to top.
    Vertical,
}

/// Number formatting of legend labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecimalCount {
    /// Toolkit default formatting.
    #[default]
    Default,
    /// No decimals.
    Integer,
    /// Two decimals.
    DecimalTwo,
    /// Three decimals.
    DecimalThree,
}

impl DecimalCount {
    /// printf-style label format for this setting.
    pub fn label_format(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Integer => Some("%-#6.0f"),
            Self::DecimalTwo => Some("%-#6.2f"),
            Self::DecimalThree => Some("%-#6.3f"),
        }
    }
}

/// Model objects that data can be mapped onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSetName {
    Wall,
    Aperture,
    Shade,
    Door,
    Floor,
    RoofCeiling,
    AirBoundary,
    Grid,
}

/// Text settings for a legend title or its labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// RGB color of the text.
    pub color: [u8; 3],
    /// Text size in points.
    pub size: i32,
    /// Whether the text is bold.
    pub bold: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            color: [0, 0, 0],
            size: 30,
            bold: false,
        }
    }
}

impl TextConfig {
    /// Checks the text settings.
    pub fn validate(&self) -> Result<()> {
        if self.size < 0 {
            return Err(HbVtkError::invalid(
                "size",
                "text size cannot be a negative number",
            ));
        }
        Ok(())
    }
}

/// Legend settings for a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendConfig {
    pub color_set: ColorSet,
    /// Lower end of the legend.
    pub min: Autocalculate<f64>,
    /// Upper end of the legend.
    pub max: Autocalculate<f64>,
    pub hide_legend: bool,
    pub orientation: Orientation,
    /// Fraction of the viewport width used by the legend.
    pub width: f64,
    /// Fraction of the viewport height used by the legend.
    pub height: f64,
    /// Fractions of viewport width and height where the legend sits.
    pub position: [f64; 2],
    pub color_count: Autocalculate<u32>,
    /// Must not exceed the color count.
    pub label_count: Autocalculate<u32>,
    pub decimal_count: DecimalCount,
    /// Whether title and labels come before the color bar.
    pub preceding_labels: bool,
    pub label_parameters: TextConfig,
    pub title_parameters: TextConfig,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            color_set: ColorSet::Ecotect,
            min: Autocalculate::default(),
            max: Autocalculate::default(),
            hide_legend: false,
            orientation: Orientation::Horizontal,
            width: 0.45,
            height: 0.05,
            position: [0.5, 0.1],
            color_count: Autocalculate::default(),
            label_count: Autocalculate::default(),
            decimal_count: DecimalCount::Default,
            preceding_labels: false,
            label_parameters: TextConfig::default(),
            title_parameters: TextConfig {
                bold: true,
                ..TextConfig::default()
            },
        }
    }
}

impl LegendConfig {
    /// Checks text sizes and that the legend fits at its position.
    ///
    /// `id` names the dataset in error messages.
    pub fn validate(&self, id: &str) -> Result<()> {
        self.label_parameters.validate()?;
        self.title_parameters.validate()?;

        let [x, y] = self.position;
        if self.width >= 0.5 && x >= 0.5 && self.width > x {
            return Err(HbVtkError::invalid(
                "legend_parameters",
                format!(
                    "width of legend {id}, {} cannot be greater than the position \
                     of legend in X direction {x}",
                    self.width
                ),
            ));
        }
        if self.height >= 0.5 && y >= 0.5 && self.height > y {
            return Err(HbVtkError::invalid(
                "legend_parameters",
                format!(
                    "height of legend {id}, {} cannot be greater than the position \
                     of legend in Y direction {y}",
                    self.height
                ),
            ));
        }
        Ok(())
    }
}

/// Simulation results to load on a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Name given to the data, unique within a config file.
    pub identifier: String,
    /// Model object the data is mapped onto.
    pub object_type: DataSetName,
    /// Unit of the data.
    pub unit: String,
    /// Folder with result files and `grids_info.json`.
    pub path: PathBuf,
    /// Whether the data is hidden in exported images.
    #[serde(default)]
    pub hide: bool,
    #[serde(default)]
    pub legend_parameters: LegendConfig,
}

impl DataConfig {
    /// Checks the folder path and legend settings.
    pub fn validate(&self) -> Result<()> {
        if !self.path.is_dir() {
            return Err(HbVtkError::invalid(
                "path",
                format!("{} is not a valid folder path", self.path.display()),
            ));
        }
        self.legend_parameters.validate(&self.identifier)
    }

    /// Legend parameters that apply to exported images.
    ///
    /// Hidden data gets no legend.
    pub fn active_legend(&self) -> Option<&LegendConfig> {
        if self.hide {
            log::warn!(
                "{:?} is not colored by {}, legend parameters will be ignored",
                self.object_type,
                self.identifier
            );
            return None;
        }

        let legend = &self.legend_parameters;
        if legend.min.is_auto() && legend.max.is_auto() {
            log::warn!(
                "legend min and max for {} are not provided and will be computed from data",
                self.identifier
            );
        }
        Some(legend)
    }

    /// Reads `grids_info.json` from the data folder.
    pub fn grids_info(&self) -> Result<Vec<GridInfo>> {
        let text = fs::read_to_string(self.path.join(GRIDS_INFO_FILE))?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Checks that the result files line up with the sensor grids of a model.
    pub fn validate_against(&self, grids: &[GridInfo]) -> Result<()> {
        if grids.is_empty() {
            return Err(HbVtkError::GridMismatch(
                "sensor grids are not loaded on this model".to_string(),
            ));
        }

        let info = self.grids_info()?;
        if info.len() != grids.len() {
            return Err(HbVtkError::GridMismatch(format!(
                "the number of result files {} for {} does not match the number of \
                 sensor grids in the model {}",
                info.len(),
                self.identifier,
                grids.len()
            )));
        }

        let same_order = info
            .iter()
            .zip(grids)
            .all(|(i, g)| i.identifier == g.identifier);
        if !same_order {
            return Err(HbVtkError::GridMismatch(format!(
                "the identifiers of the sensor grids in the model do not match the \
                 identifiers in {GRIDS_INFO_FILE} for {}",
                self.identifier
            )));
        }

        let mismatched: Vec<&str> = info
            .iter()
            .zip(grids)
            .filter(|(i, g)| i.count != g.count)
            .map(|(i, _)| i.identifier.as_str())
            .collect();
        if !mismatched.is_empty() {
            return Err(HbVtkError::GridMismatch(format!(
                "file lengths of result files must match the number of sensors on \
                 grids, these do not match: {}",
                mismatched.join(", ")
            )));
        }

        Ok(())
    }

    /// Loads one list of values per grid, in `grids_info.json` order.
    pub fn load_results(&self) -> Result<Vec<Vec<f64>>> {
        let info = self.grids_info()?;
        let files = result_files(&self.path)?;

        info.iter()
            .map(|grid| {
                let file = files
                    .iter()
                    .find(|f| f.file_stem().is_some_and(|s| s == grid.identifier.as_str()))
                    .ok_or_else(|| {
                        HbVtkError::GridMismatch(format!(
                            "no result file for grid {} in {}",
                            grid.identifier,
                            self.path.display()
                        ))
                    })?;
                read_values(file)
            })
            .collect()
    }
}

fn result_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().map_or(true, |ext| ext != "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn read_values(file: &Path) -> Result<Vec<f64>> {
    fs::read_to_string(file)?
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.parse::<f64>().map_err(|e| {
                HbVtkError::invalid(
                    "results",
                    format!("'{line}' in {} is not a number: {e}", file.display()),
                )
            })
        })
        .collect()
}

/// Parses and validates every data config in a config file.
///
/// Entries come back ordered by their key in the file.
pub fn load_config(path: impl AsRef<Path>) -> Result<Vec<DataConfig>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let entries: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&text)?;

    let mut seen = HashSet::new();
    let mut configs = Vec::with_capacity(entries.len());
    for value in entries.into_iter().map(|(_, v)| v) {
        let data: DataConfig = serde_json::from_value(value)?;
        data.validate()?;
        if !seen.insert(data.identifier.clone()) {
            return Err(HbVtkError::invalid(
                "identifier",
                format!("{} is used by more than one dataset", data.identifier),
            ));
        }
        configs.push(data);
    }

    log::info!("loaded {} data configs from {}", configs.len(), path.display());
    Ok(configs)
}
