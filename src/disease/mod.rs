//! Disease colors and per-color status.
//!
//! - `DiseaseColor`: the four real colors
//! - `ColorSet`: compact set of colors (placement blocking)
//! - `ColorMap`: one value per color, indexed by `DiseaseColor`
//! - `DiseaseStatus`: cube reserve and cure marker

pub mod color;
pub mod status;

pub use color::{ColorMap, ColorSet, DiseaseColor};
pub use status::DiseaseStatus;
