//! Tilegrid packs a sequence of tile descriptors into a quick-settings style
//! grid and reports pure geometry: one pixel box per visible tile plus the
//! container's own required size.
//!
//! # Pipeline overview
//!
//! 1. **Describe**: build a [`GridSpec`] (tiles + [`LayoutConfig`] +
//!    [`Orientation`]), by hand, via [`GridSpecBuilder`], or from JSON
//! 2. **Pack**: `GridSpec -> PackResult` (where every visible tile lands,
//!    and how big the container must be)
//! 3. **Apply**: a host UI layer positions its tile widgets from the returned
//!    [`TileBox`]es; this crate never touches a drawing primitive
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: packing is pure and stable for a given
//!   input; identical inputs compare equal ([`PackResult`] is `PartialEq`).
//! - **No IO in the packer**: settings and orientation are plain values
//!   supplied by the caller; JSON only enters at the document boundary.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod grid;

pub use foundation::core::{Edges, Orientation, Point, Rect, Size};
pub use foundation::error::{TileGridError, TileGridResult};
pub use grid::dsl::GridSpecBuilder;
pub use grid::model::{GridSpec, LayoutConfig, TileSpec};
pub use grid::packer::{PackResult, TileBox, pack};
pub use grid::typography::{TextStyle, TileTypography};
