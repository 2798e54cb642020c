use crate::{
    foundation::core::Orientation,
    foundation::error::{TileGridError, TileGridResult},
    grid::model::{GridSpec, LayoutConfig, TileSpec},
};

/// Builder for assembling a [`GridSpec`] programmatically.
///
/// Tiles are appended in visual order. `build` validates the finished spec.
#[derive(Debug)]
pub struct GridSpecBuilder {
    config: LayoutConfig,
    orientation: Orientation,
    tiles: Vec<TileSpec>,
}

impl GridSpecBuilder {
    /// Start a spec from a layout configuration.
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            orientation: Orientation::Portrait,
            tiles: Vec::new(),
        }
    }

    /// Set the display orientation.
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Append a tile descriptor.
    pub fn tile(mut self, tile: TileSpec) -> Self {
        self.tiles.push(tile);
        self
    }

    /// Append a visible tile spanning `column_span` columns.
    pub fn tile_span(self, column_span: u32) -> TileGridResult<Self> {
        if column_span == 0 {
            return Err(TileGridError::config("tile column_span must be >= 1"));
        }
        Ok(self.tile(TileSpec::spanning(column_span)))
    }

    /// Append a hidden tile spanning `column_span` columns.
    pub fn hidden_tile_span(self, column_span: u32) -> TileGridResult<Self> {
        if column_span == 0 {
            return Err(TileGridError::config("tile column_span must be >= 1"));
        }
        Ok(self.tile(TileSpec {
            column_span,
            visible: false,
        }))
    }

    /// Validate and produce the finished [`GridSpec`].
    pub fn build(self) -> TileGridResult<GridSpec> {
        let spec = GridSpec {
            tiles: self.tiles,
            config: self.config,
            orientation: self.orientation,
        };
        spec.validate()?;
        Ok(spec)
    }
}
