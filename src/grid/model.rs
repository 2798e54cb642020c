use std::path::Path;

use crate::{
    foundation::core::{Edges, Orientation},
    foundation::error::{TileGridError, TileGridResult},
    grid::packer::{self, PackResult},
};

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
/// One tile in the grid.
///
/// Ordering among tiles is significant and fixed by the caller: insertion
/// order is visual order, left-to-right then top-to-bottom.
pub struct TileSpec {
    /// Number of grid columns this tile occupies. Must be >= 1.
    #[serde(default = "default_column_span")]
    pub column_span: u32,
    /// Hidden tiles contribute no box and do not advance the cursor.
    #[serde(default = "default_visible")]
    pub visible: bool,
}

impl TileSpec {
    /// A visible tile spanning `column_span` columns.
    pub fn spanning(column_span: u32) -> Self {
        Self {
            column_span,
            visible: true,
        }
    }
}

impl Default for TileSpec {
    fn default() -> Self {
        Self::spanning(1)
    }
}

fn default_column_span() -> u32 {
    1
}

fn default_visible() -> bool {
    true
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize, PartialEq)]
/// Layout configuration for one packing pass.
///
/// A config is a pure value: whoever observes the host settings store
/// rebuilds one of these before each layout pass, and the packer never
/// retains it.
pub struct LayoutConfig {
    /// Number of grid columns before landscape duplication.
    #[serde(default = "default_columns")]
    pub columns: u32,
    /// Gap in pixels between adjacent tiles and rows. Halved in single-row
    /// mode.
    #[serde(default)]
    pub cell_gap_px: f64,
    /// Never wrap to a second row; used for horizontally scrollable strips.
    #[serde(default)]
    pub single_row: bool,
    /// Double the column count when the orientation is landscape.
    #[serde(default)]
    pub duplicate_columns_landscape: bool,
    /// Fixed cell width for single-row mode. When unset the cell width is
    /// computed from the available width and clamped to the min/max bounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_cell_width_px: Option<f64>,
    /// Lower clamp for the computed single-row cell width.
    #[serde(default)]
    pub min_cell_width_px: f64,
    /// Upper clamp for the computed single-row cell width.
    #[serde(default = "default_max_cell_width")]
    pub max_cell_width_px: f64,
    /// Row height in grid mode. Ignored in single-row mode, where the cell
    /// height is the full available height.
    #[serde(default)]
    pub cell_height_px: f64,
    /// Width of the container the grid is packed into.
    pub available_width_px: f64,
    /// Height of the container the grid is packed into.
    pub available_height_px: f64,
    /// Padding around the packed tiles.
    #[serde(default)]
    pub padding: Edges,
}

fn default_columns() -> u32 {
    3
}

fn default_max_cell_width() -> f64 {
    f64::MAX
}

impl LayoutConfig {
    /// Column count after landscape duplication is applied.
    pub fn effective_columns(&self, orientation: Orientation) -> u32 {
        if self.duplicate_columns_landscape && orientation.is_landscape() {
            self.columns.saturating_mul(2)
        } else {
            self.columns
        }
    }

    /// Validate config invariants.
    pub fn validate(&self) -> TileGridResult<()> {
        if self.columns == 0 {
            return Err(TileGridError::config("columns must be > 0"));
        }
        if !self.cell_gap_px.is_finite() || self.cell_gap_px < 0.0 {
            return Err(TileGridError::config(
                "cell_gap_px must be finite and >= 0",
            ));
        }
        if !self.available_width_px.is_finite() || self.available_width_px <= 0.0 {
            return Err(TileGridError::config(
                "available_width_px must be finite and > 0",
            ));
        }
        if !self.available_height_px.is_finite() || self.available_height_px <= 0.0 {
            return Err(TileGridError::config(
                "available_height_px must be finite and > 0",
            ));
        }
        if !self.min_cell_width_px.is_finite() || self.min_cell_width_px < 0.0 {
            return Err(TileGridError::config(
                "min_cell_width_px must be finite and >= 0",
            ));
        }
        if !self.max_cell_width_px.is_finite() || self.max_cell_width_px < self.min_cell_width_px {
            return Err(TileGridError::config(
                "max_cell_width_px must be finite and >= min_cell_width_px",
            ));
        }
        if let Some(w) = self.fixed_cell_width_px
            && (!w.is_finite() || w <= 0.0)
        {
            return Err(TileGridError::config(
                "fixed_cell_width_px must be finite and > 0 when set",
            ));
        }
        if !self.single_row && (!self.cell_height_px.is_finite() || self.cell_height_px <= 0.0) {
            return Err(TileGridError::config(
                "cell_height_px must be finite and > 0 in grid mode",
            ));
        }
        for (name, value) in [
            ("left", self.padding.left),
            ("right", self.padding.right),
            ("top", self.padding.top),
            ("bottom", self.padding.bottom),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(TileGridError::config(format!(
                    "padding.{name} must be finite and >= 0",
                )));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize, PartialEq)]
/// A complete grid document: tiles, layout configuration and orientation.
///
/// A grid spec is a pure data model that can be:
/// - built programmatically (see [`crate::GridSpecBuilder`])
/// - serialized/deserialized via Serde (JSON)
///
/// Packing a spec is performed by [`crate::pack`] or [`GridSpec::pack`].
pub struct GridSpec {
    /// Ordered tile descriptors.
    pub tiles: Vec<TileSpec>,
    /// Layout configuration.
    pub config: LayoutConfig,
    /// Display orientation supplied by the caller.
    #[serde(default)]
    pub orientation: Orientation,
}

impl GridSpec {
    /// Validate the config and every tile descriptor.
    pub fn validate(&self) -> TileGridResult<()> {
        self.config.validate()?;
        validate_tiles(&self.tiles)
    }

    /// Pack this spec into tile geometry.
    pub fn pack(&self) -> TileGridResult<PackResult> {
        packer::pack(&self.tiles, &self.config, self.orientation)
    }

    /// Parse and validate a grid document from a JSON string.
    pub fn from_json_str(json: &str) -> TileGridResult<Self> {
        let spec: Self =
            serde_json::from_str(json).map_err(|e| TileGridError::serde(e.to_string()))?;
        spec.validate()?;
        Ok(spec)
    }

    /// Load and validate a grid document from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> TileGridResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("read '{}': {e}", path.display()))?;
        Self::from_json_str(&json)
    }
}

pub(crate) fn validate_tiles(tiles: &[TileSpec]) -> TileGridResult<()> {
    for (idx, tile) in tiles.iter().enumerate() {
        if tile.column_span == 0 {
            return Err(TileGridError::config(format!(
                "tile {idx} column_span must be >= 1"
            )));
        }
    }
    Ok(())
}
