#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Text size and padding for a tile label.
pub struct TextStyle {
    /// Label text size in pixels.
    pub size_px: f64,
    /// Padding between a tile's icon and its label, in pixels.
    pub padding_px: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Tile label typography, bucketed by column count.
///
/// Denser grids get smaller labels. Column counts without a bucket of their
/// own fall back to the three-column style.
pub struct TileTypography {
    /// Style for three-column grids (and the fallback).
    #[serde(default = "default_three_col")]
    pub three_col: TextStyle,
    /// Style for four-column grids.
    #[serde(default = "default_four_col")]
    pub four_col: TextStyle,
    /// Style for five-column grids.
    #[serde(default = "default_five_col")]
    pub five_col: TextStyle,
}

fn default_three_col() -> TextStyle {
    TextStyle {
        size_px: 12.0,
        padding_px: 16.0,
    }
}

fn default_four_col() -> TextStyle {
    TextStyle {
        size_px: 11.0,
        padding_px: 12.0,
    }
}

fn default_five_col() -> TextStyle {
    TextStyle {
        size_px: 10.0,
        padding_px: 8.0,
    }
}

impl Default for TileTypography {
    fn default() -> Self {
        Self {
            three_col: default_three_col(),
            four_col: default_four_col(),
            five_col: default_five_col(),
        }
    }
}

impl TileTypography {
    /// Style for a grid with `columns` columns.
    pub fn style_for_columns(&self, columns: u32) -> TextStyle {
        match columns {
            5 => self.five_col,
            4 => self.four_col,
            _ => self.three_col,
        }
    }
}
