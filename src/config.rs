//! Serializable coloring configuration.
//!
//! ```
//! use chart_color::{ColorConfig, ColorMapper, Preset, ScaleChoice};
//!
//! let config = ColorConfig { colors: ScaleChoice::Preset(Preset::Linear),
//!                            elastic_color: true };
//! let mapper = ColorMapper::<f64>::from_config(&config);
//! assert!(mapper.elastic_color());
//! ```

use serde::{Deserialize, Serialize};

use crate::{Preset, ScaleSpec};

/// A scale that can be written down: a preset name such as
/// `"ordinal"` or `"linear"`, or a list of colors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScaleChoice {
    Preset(Preset),
    Palette(Vec<String>),
}

impl Default for ScaleChoice {
    fn default() -> Self { ScaleChoice::Preset(Preset::default()) }
}

impl From<ScaleChoice> for ScaleSpec {
    fn from(c: ScaleChoice) -> Self {
        match c {
            ScaleChoice::Preset(p) => ScaleSpec::Preset(p),
            ScaleChoice::Palette(colors) => ScaleSpec::Palette(colors),
        }
    }
}

/// Coloring part of a chart configuration.  Missing fields take their
/// default value (ordinal scale, elastic coloring off).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub colors: ScaleChoice,
    pub elastic_color: bool,
}
