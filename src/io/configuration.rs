//! Run configuration: defaults, settings file, overrides and validation
//!
//! Settings are layered lowest first: compiled-in defaults, an optional YAML
//! settings file, `key=value` overrides, then dedicated command-line flags.
//! [`Settings::resolve`] validates the result once and produces the immutable
//! [`RunConfig`] the placement engine is built from.

use crate::algorithm::fitness::{Aggregation, FitnessEvaluator};
use crate::color::distance::SQUARED_EUCLIDEAN;
use crate::color::{ColorSpace, DistanceRegistry};
use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use crate::spatial::Coordinate;
use image::ImageFormat;
use serde::Deserialize;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;

// Default values for configurable parameters
/// Average aggregation unless configured otherwise
pub const DEFAULT_AVERAGE: bool = true;
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Fitness window side length (3x3 ring)
pub const DEFAULT_NEIGHBOURHOOD_WIDTH: usize = 3;
/// Quantization levels per channel
pub const DEFAULT_COLOR_DEPTH: usize = 64;
/// Distance function registry name
pub const DEFAULT_COLOR_DISTANCE: &str = SQUARED_EUCLIDEAN;
/// Number of checkpoint images
pub const DEFAULT_IMAGE_AMOUNT: usize = 10;
/// Grid width; 512 x 512 = 64³
pub const DEFAULT_IMAGE_WIDTH: usize = 512;
/// Grid height
pub const DEFAULT_IMAGE_HEIGHT: usize = 512;
/// Checkpoint output directory
pub const DEFAULT_IMAGE_PATH: &str = ".";
/// Checkpoint file name prefix
pub const DEFAULT_IMAGE_PREFIX: &str = "allrgb";
/// Checkpoint file format, as a file extension
pub const DEFAULT_IMAGE_FORMAT: &str = "png";
/// Origin column; grid centre
pub const DEFAULT_START_X: usize = 256;
/// Origin row; grid centre
pub const DEFAULT_START_Y: usize = 256;

/// Optional namespace accepted in front of override keys
pub const SETTING_PREFIX: &str = "allrgb.";

/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Colour cube settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorSettings {
    /// Quantization levels per channel
    pub depth: usize,
    /// Distance function registry name
    pub distance: String,
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            depth: DEFAULT_COLOR_DEPTH,
            distance: DEFAULT_COLOR_DISTANCE.to_string(),
        }
    }
}

/// Grid and checkpoint export settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImageSettings {
    /// Number of checkpoint images
    pub amount: usize,
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// Output directory
    pub path: PathBuf,
    /// File name prefix
    pub prefix: String,
    /// File format extension
    pub format: String,
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            amount: DEFAULT_IMAGE_AMOUNT,
            width: DEFAULT_IMAGE_WIDTH,
            height: DEFAULT_IMAGE_HEIGHT,
            path: PathBuf::from(DEFAULT_IMAGE_PATH),
            prefix: DEFAULT_IMAGE_PREFIX.to_string(),
            format: DEFAULT_IMAGE_FORMAT.to_string(),
        }
    }
}

/// Origin of the first placement
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StartSettings {
    /// Origin column
    pub x: usize,
    /// Origin row
    pub y: usize,
}

impl Default for StartSettings {
    fn default() -> Self {
        Self {
            x: DEFAULT_START_X,
            y: DEFAULT_START_Y,
        }
    }
}

/// Unvalidated settings as read from defaults, file and overrides
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Average (`true`) or minimum (`false`) aggregation
    pub average: bool,
    /// Shuffle seed
    pub seed: u64,
    /// Fitness window side length, odd
    pub neighbourhood_width: usize,
    /// Colour cube settings
    pub color: ColorSettings,
    /// Grid and export settings
    pub image: ImageSettings,
    /// Origin of the first placement
    pub start: StartSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            average: DEFAULT_AVERAGE,
            seed: DEFAULT_SEED,
            neighbourhood_width: DEFAULT_NEIGHBOURHOOD_WIDTH,
            color: ColorSettings::default(),
            image: ImageSettings::default(),
            start: StartSettings::default(),
        }
    }
}

impl Settings {
    /// Parse YAML settings text over the defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid settings YAML
    pub fn from_yaml(text: &str) -> Result<Self> {
        Self::parse(text, None)
    }

    /// Read a YAML settings file over the defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| AlgorithmError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::parse(&text, Some(path))?;
        tracing::debug!(path = %path.display(), "loaded settings file");
        Ok(settings)
    }

    fn parse(text: &str, path: Option<&Path>) -> Result<Self> {
        // An empty document means "all defaults"
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(|source| AlgorithmError::ConfigParse {
            path: path.map(Path::to_path_buf),
            source,
        })
    }

    /// Apply a `key=value` override
    ///
    /// # Errors
    ///
    /// Returns an error if the argument has no `=`, the key is unknown or the
    /// value does not parse
    pub fn apply_override(&mut self, assignment: &str) -> Result<()> {
        let (key, value) = assignment.split_once('=').ok_or_else(|| {
            invalid_parameter("override", &assignment, &"expected KEY=VALUE")
        })?;
        self.set(key.trim(), value.trim())
    }

    /// Set one setting by its dotted key, e.g. `color.depth`
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value does not parse
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let key = key.strip_prefix(SETTING_PREFIX).unwrap_or(key);
        match key {
            "average" => self.average = parse_value("average", value)?,
            "seed" => self.seed = parse_value("seed", value)?,
            "neighbourhood_width" => {
                self.neighbourhood_width = parse_value("neighbourhood_width", value)?;
            }
            "color.depth" => self.color.depth = parse_value("color.depth", value)?,
            "color.distance" => self.color.distance = value.to_string(),
            "image.amount" => self.image.amount = parse_value("image.amount", value)?,
            "image.width" => self.image.width = parse_value("image.width", value)?,
            "image.height" => self.image.height = parse_value("image.height", value)?,
            "image.path" => self.image.path = PathBuf::from(value),
            "image.prefix" => self.image.prefix = value.to_string(),
            "image.format" => self.image.format = value.to_string(),
            "start.x" => self.start.x = parse_value("start.x", value)?,
            "start.y" => self.start.y = parse_value("start.y", value)?,
            _ => {
                return Err(AlgorithmError::UnknownSetting {
                    key: key.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Validate and freeze the settings
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `color.depth³` differs from `image.width × image.height`
    /// - `neighbourhood_width` is even or zero
    /// - The origin lies outside the grid
    /// - `image.amount` exceeds the number of cells
    /// - The distance name or image format is unknown
    pub fn resolve(&self, registry: &DistanceRegistry) -> Result<RunConfig> {
        let Self {
            average,
            seed,
            neighbourhood_width,
            color,
            image,
            start,
        } = self;

        if image.width == 0 || image.height == 0 {
            return Err(invalid_parameter(
                "image.width",
                &format!("{}x{}", image.width, image.height),
                &"grid dimensions must be at least 1",
            ));
        }
        let space = ColorSpace::for_grid(color.depth, image.width, image.height)?;

        if neighbourhood_width % 2 == 0 {
            return Err(invalid_parameter(
                "neighbourhood_width",
                neighbourhood_width,
                &"must be an odd number",
            ));
        }

        let origin = Coordinate::new(start.x, start.y);
        if start.x >= image.width || start.y >= image.height {
            return Err(invalid_parameter(
                "start",
                &origin,
                &format!("outside {}x{} grid", image.width, image.height),
            ));
        }

        if image.amount > space.len() {
            return Err(invalid_parameter(
                "image.amount",
                &image.amount,
                &format!("cannot exceed the {} placements", space.len()),
            ));
        }

        let distance = registry.resolve(&color.distance)?;
        let format = ImageFormat::from_extension(&image.format).ok_or_else(|| {
            invalid_parameter("image.format", &image.format, &"unsupported image format")
        })?;

        Ok(RunConfig {
            width: image.width,
            height: image.height,
            depth: color.depth,
            seed: *seed,
            evaluator: FitnessEvaluator::new(
                *neighbourhood_width,
                Aggregation::from_average_flag(*average),
                distance,
            ),
            checkpoint_amount: image.amount,
            origin,
            output: OutputSettings {
                directory: image.path.clone(),
                prefix: image.prefix.clone(),
                extension: image.format.clone(),
                format,
            },
        })
    }
}

fn parse_value<T>(parameter: &'static str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    value
        .parse()
        .map_err(|error: T::Err| invalid_parameter(parameter, &value, &error))
}

/// Where and how checkpoint images are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSettings {
    /// Output directory
    pub directory: PathBuf,
    /// File name prefix
    pub prefix: String,
    /// File extension as configured
    pub extension: String,
    /// Encoder selected from the extension
    pub format: ImageFormat,
}

/// Validated, immutable configuration of one run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// Quantization levels per channel
    pub depth: usize,
    /// Shuffle seed
    pub seed: u64,
    /// Fitness window, aggregation and distance
    pub evaluator: FitnessEvaluator,
    /// Number of checkpoint images
    pub checkpoint_amount: usize,
    /// Cell receiving the first colour
    pub origin: Coordinate,
    /// Checkpoint export destination
    pub output: OutputSettings,
}

impl RunConfig {
    /// Total number of placements
    pub const fn total(&self) -> usize {
        self.width * self.height
    }
}
