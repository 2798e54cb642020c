use crate::{
    foundation::core::{Orientation, Point, Rect, Size},
    foundation::error::TileGridResult,
    grid::model::{LayoutConfig, TileSpec, validate_tiles},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// The pixel box assigned to one visible tile.
pub struct TileBox {
    /// Left edge, relative to the container.
    pub x: f64,
    /// Top edge, relative to the container.
    pub y: f64,
    /// Box width.
    pub width: f64,
    /// Box height.
    pub height: f64,
}

impl TileBox {
    /// Top-left corner.
    pub fn origin(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Box dimensions.
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The box as a [`Rect`].
    pub fn to_rect(self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Output of one packing pass.
///
/// `boxes` is aligned with the input tile order; hidden tiles hold `None`.
/// A result is recomputed from scratch on every call and carries no identity
/// of its own.
pub struct PackResult {
    /// One entry per input tile, `None` for hidden tiles.
    pub boxes: Vec<Option<TileBox>>,
    /// Required container width.
    pub container_width: f64,
    /// Required container height.
    pub container_height: f64,
}

impl PackResult {
    /// Box for the tile at `index`, if it was visible.
    pub fn box_for(&self, index: usize) -> Option<TileBox> {
        self.boxes.get(index).copied().flatten()
    }

    /// Visible boxes with their input tile indices, in input order.
    pub fn visible_boxes(&self) -> impl Iterator<Item = (usize, TileBox)> + '_ {
        self.boxes
            .iter()
            .enumerate()
            .filter_map(|(idx, tile_box)| tile_box.map(|b| (idx, b)))
    }

    /// Required container dimensions.
    pub fn container_size(&self) -> Size {
        Size::new(self.container_width, self.container_height)
    }
}

/// Pack `tiles` into the grid described by `config`.
///
/// Pure and deterministic: the packer performs only arithmetic over its
/// inputs and retains no references to them, so identical inputs produce an
/// identical [`PackResult`]. Fails with [`crate::TileGridError::Config`] when
/// the config or a tile descriptor is invalid; everything else, including
/// zero tiles and spans wider than the grid, is defined behavior.
#[tracing::instrument(skip(tiles, config), fields(tile_count = tiles.len()))]
pub fn pack(
    tiles: &[TileSpec],
    config: &LayoutConfig,
    orientation: Orientation,
) -> TileGridResult<PackResult> {
    config.validate()?;
    validate_tiles(tiles)?;

    if config.single_row {
        Ok(pack_single_row(tiles, config))
    } else {
        Ok(pack_grid(tiles, config, orientation))
    }
}

/// Wrapped grid: row-major placement with forced row breaks.
fn pack_grid(tiles: &[TileSpec], config: &LayoutConfig, orientation: Orientation) -> PackResult {
    let eff = u64::from(config.effective_columns(orientation));
    let eff_f = eff as f64;
    let gap = config.cell_gap_px;
    let pad = config.padding;

    let content_width = config.available_width_px - pad.horizontal();
    let cell_width = ((content_width - (eff_f - 1.0) * gap) / eff_f).floor();
    // Tall narrow grids derive each tile's height from its own width instead
    // of the configured row height.
    let derive_heights = eff > 3 && !orientation.is_landscape();

    let mut boxes = Vec::with_capacity(tiles.len());
    let mut x = pad.left;
    let mut y = pad.top;
    let mut cursor: u64 = 0;

    for tile in tiles {
        if !tile.visible {
            boxes.push(None);
            continue;
        }
        let span = u64::from(tile.column_span);
        let span_f = span as f64;
        let col = cursor % eff;

        let width = span_f * cell_width + (span_f - 1.0) * gap;
        let height = if derive_heights {
            ((width * eff_f - 1.0) / eff_f).floor()
        } else {
            config.cell_height_px
        };

        // Push the tile to the next row if it can't fit on this one, with
        // the dead tail of the broken row counted as consumed. A span wider
        // than the whole grid trips this even at column 0: the tile starts a
        // fresh row below and overhangs the container.
        if col + span > eff {
            x = pad.left;
            y += height + gap;
            if col > 0 {
                cursor += eff - col;
            }
        }

        boxes.push(Some(TileBox {
            x,
            y,
            width,
            height,
        }));

        // Step past the gap, or rewind to the left edge when the cursor
        // lands exactly on a row boundary.
        cursor += span;
        if cursor % eff == 0 {
            x = pad.left;
            y += height + gap;
        } else {
            x += width + gap;
        }
    }

    // Row count is taken against the configured column count, not the
    // duplicated one, so a landscape grid reserves its portrait height.
    let rows = cursor.div_ceil(u64::from(config.columns));
    let container_height = if rows == 0 {
        pad.vertical()
    } else {
        let rows_f = rows as f64;
        rows_f * config.cell_height_px + (rows_f - 1.0) * gap + pad.vertical()
    };

    PackResult {
        boxes,
        container_width: config.available_width_px,
        container_height,
    }
}

/// Single-row strip: no wrapping, halved gap, full-height cells.
fn pack_single_row(tiles: &[TileSpec], config: &LayoutConfig) -> PackResult {
    let gap = config.cell_gap_px / 2.0;
    let pad = config.padding;
    let cell_height = config.available_height_px;
    let cell_width = match config.fixed_cell_width_px {
        Some(width) => width,
        None => {
            let total_span: u32 = tiles
                .iter()
                .filter(|tile| tile.visible)
                .map(|tile| tile.column_span)
                .sum();
            let total_span = f64::from(total_span.max(1));
            let content_width =
                config.available_width_px - pad.horizontal() - (total_span - 1.0) * gap;
            (content_width / total_span)
                .floor()
                .clamp(config.min_cell_width_px, config.max_cell_width_px)
        }
    };

    let mut boxes = Vec::with_capacity(tiles.len());
    let mut x = pad.left;
    let mut strip_width = 0.0;
    let mut visible = 0usize;

    for tile in tiles {
        if !tile.visible {
            boxes.push(None);
            continue;
        }
        let span_f = f64::from(tile.column_span);
        let width = span_f * cell_width + (span_f - 1.0) * gap;
        boxes.push(Some(TileBox {
            x,
            y: pad.top,
            width,
            height: cell_height,
        }));
        x += width + gap;
        strip_width += width + gap;
        visible += 1;
    }
    if visible > 0 {
        strip_width -= gap; // no gap after the last tile
    }

    PackResult {
        boxes,
        container_width: strip_width + pad.horizontal(),
        container_height: cell_height + pad.vertical(),
    }
}
