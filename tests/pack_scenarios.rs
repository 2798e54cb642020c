use tilegrid::{Edges, LayoutConfig, Orientation, PackResult, TileBox, TileSpec, pack};

fn grid_config() -> LayoutConfig {
    LayoutConfig {
        columns: 3,
        cell_gap_px: 8.0,
        single_row: false,
        duplicate_columns_landscape: false,
        fixed_cell_width_px: None,
        min_cell_width_px: 0.0,
        max_cell_width_px: f64::MAX,
        cell_height_px: 120.0,
        available_width_px: 300.0,
        available_height_px: 600.0,
        padding: Edges::default(),
    }
}

fn span_one_tiles(count: usize) -> Vec<TileSpec> {
    vec![TileSpec::spanning(1); count]
}

fn overlaps(a: TileBox, b: TileBox) -> bool {
    a.x < b.x + b.width && b.x < a.x + a.width && a.y < b.y + b.height && b.y < a.y + a.height
}

fn assert_disjoint(packed: &PackResult) {
    let boxes: Vec<_> = packed.visible_boxes().collect();
    for (i, &(_, a)) in boxes.iter().enumerate() {
        for &(_, b) in &boxes[i + 1..] {
            assert!(!overlaps(a, b), "{a:?} overlaps {b:?}");
        }
    }
}

#[test]
fn scenario_a_two_rows_of_three() {
    let packed = pack(&span_one_tiles(6), &grid_config(), Orientation::Portrait).unwrap();

    // cell width = floor((300 - 2*8) / 3) = 94
    let expected = [
        (0.0, 0.0),
        (102.0, 0.0),
        (204.0, 0.0),
        (0.0, 128.0),
        (102.0, 128.0),
        (204.0, 128.0),
    ];
    for (idx, (x, y)) in expected.into_iter().enumerate() {
        let tile_box = packed.box_for(idx).unwrap();
        assert_eq!((tile_box.x, tile_box.y), (x, y), "tile {idx}");
        assert_eq!(tile_box.width, 94.0);
        assert_eq!(tile_box.height, 120.0);
    }
    assert_eq!(packed.container_width, 300.0);
    assert_eq!(packed.container_height, 2.0 * 120.0 + 8.0);
    assert_disjoint(&packed);
}

#[test]
fn scenario_b_forced_row_break() {
    let tiles = [
        TileSpec::spanning(2),
        TileSpec::spanning(2),
        TileSpec::spanning(1),
    ];
    let packed = pack(&tiles, &grid_config(), Orientation::Portrait).unwrap();

    let first = packed.box_for(0).unwrap();
    let second = packed.box_for(1).unwrap();
    let third = packed.box_for(2).unwrap();

    // Tile 0 takes columns 0-1 of row 0; tile 1 cannot fit in the remaining
    // column and is forced down; tile 2 lands beside it in column 2.
    assert_eq!((first.x, first.y), (0.0, 0.0));
    assert_eq!(first.width, 2.0 * 94.0 + 8.0);
    assert_eq!((second.x, second.y), (0.0, 128.0));
    assert_eq!((third.x, third.y), (204.0, 128.0));
    assert_eq!(third.width, 94.0);
    assert_disjoint(&packed);
}

#[test]
fn scenario_c_single_row_auto_width() {
    let config = LayoutConfig {
        single_row: true,
        // member gap halves to 8 in single-row mode
        cell_gap_px: 16.0,
        min_cell_width_px: 40.0,
        max_cell_width_px: 200.0,
        available_width_px: 400.0,
        available_height_px: 90.0,
        ..grid_config()
    };
    let packed = pack(&span_one_tiles(4), &config, Orientation::Portrait).unwrap();

    // cell width = floor((400 - 3*8) / 4) = 94, within [40, 200]
    for idx in 0..4 {
        let tile_box = packed.box_for(idx).unwrap();
        assert_eq!(tile_box.width, 94.0);
        assert_eq!(tile_box.height, 90.0);
        assert_eq!(tile_box.x, idx as f64 * (94.0 + 8.0));
        assert_eq!(tile_box.y, 0.0);
    }
    assert_eq!(packed.container_width, 4.0 * 94.0 + 3.0 * 8.0);
    assert_eq!(packed.container_height, 90.0);
    assert_disjoint(&packed);
}

#[test]
fn scenario_d_landscape_duplication_changes_row_breaks() {
    let config = LayoutConfig {
        duplicate_columns_landscape: true,
        ..grid_config()
    };

    let portrait = pack(&span_one_tiles(6), &config, Orientation::Portrait).unwrap();
    let landscape = pack(&span_one_tiles(6), &config, Orientation::Landscape).unwrap();

    // Portrait wraps after three tiles; landscape fits all six on one row.
    assert_eq!(portrait.box_for(3).unwrap().y, 128.0);
    assert!(landscape.visible_boxes().all(|(_, b)| b.y == 0.0));

    // cell width = floor((300 - 5*8) / 6) = 43 with six effective columns
    assert_eq!(landscape.box_for(1).unwrap().x, 51.0);
    assert_eq!(landscape.box_for(0).unwrap().width, 43.0);

    // Row count stays relative to the configured columns, so both
    // orientations reserve the same container height.
    assert_eq!(portrait.container_height, 248.0);
    assert_eq!(landscape.container_height, 248.0);
    assert_disjoint(&landscape);
}

#[test]
fn scenario_e_zero_visible_tiles() {
    let config = LayoutConfig {
        padding: Edges {
            left: 0.0,
            right: 0.0,
            top: 4.0,
            bottom: 6.0,
        },
        ..grid_config()
    };

    let empty = pack(&[], &config, Orientation::Portrait).unwrap();
    assert!(empty.boxes.is_empty());
    assert_eq!(empty.container_height, 10.0);

    let hidden = [TileSpec {
        column_span: 1,
        visible: false,
    }];
    let packed = pack(&hidden, &config, Orientation::Portrait).unwrap();
    assert_eq!(packed.boxes, vec![None]);
    assert_eq!(packed.container_height, 10.0);
}

#[test]
fn packing_is_idempotent() {
    let tiles = [
        TileSpec::spanning(2),
        TileSpec {
            column_span: 1,
            visible: false,
        },
        TileSpec::spanning(1),
        TileSpec::spanning(3),
    ];
    let config = grid_config();

    let first = pack(&tiles, &config, Orientation::Portrait).unwrap();
    let second = pack(&tiles, &config, Orientation::Portrait).unwrap();
    assert_eq!(first, second);
}

#[test]
fn visible_boxes_preserve_input_order() {
    let tiles = [
        TileSpec::spanning(1),
        TileSpec {
            column_span: 2,
            visible: false,
        },
        TileSpec::spanning(2),
        TileSpec::spanning(1),
    ];
    let packed = pack(&tiles, &grid_config(), Orientation::Portrait).unwrap();

    let indices: Vec<usize> = packed.visible_boxes().map(|(idx, _)| idx).collect();
    assert_eq!(indices, vec![0, 2, 3]);
    assert_disjoint(&packed);
}

#[test]
fn no_row_overflows_without_a_forced_break() {
    // Walk a mixed-span sequence and rebuild each tile's starting column from
    // its x position; spans must fit within the effective columns.
    let tiles: Vec<TileSpec> = [1u32, 2, 1, 3, 1, 1, 2]
        .into_iter()
        .map(TileSpec::spanning)
        .collect();
    let config = grid_config();
    let packed = pack(&tiles, &config, Orientation::Portrait).unwrap();

    let cell_width = 94.0;
    for (idx, tile_box) in packed.visible_boxes() {
        let col = (tile_box.x / (cell_width + config.cell_gap_px)).round() as u32;
        let span = tiles[idx].column_span;
        assert!(
            col + span <= config.columns,
            "tile {idx} starts at column {col} with span {span}"
        );
    }
    assert_disjoint(&packed);
}
