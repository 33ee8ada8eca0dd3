// Theme loading and the JSON entry point

use block_layout_wasm::block_layout::{layout_block_json, BlockLayoutEngine, ConstantProvider, LayoutError};
use block_layout_wasm::models::{Block, Field, Input};

fn label_block() -> Block {
    Block::new("text").add_input(Input::dummy().with_field(Field::label(20.0, 10.0)))
}

#[test]
fn test_theme_yaml_round_trip() {
    let mut constants = ConstantProvider::default();
    constants.large_padding = 12.0;
    constants.add_start_hats = true;

    let yaml = constants.to_yaml().expect("theme should serialize");
    let loaded = ConstantProvider::from_yaml(&yaml).expect("theme should load");
    assert_eq!(loaded, constants);
}

#[test]
fn test_custom_padding_changes_width() {
    let constants = ConstantProvider::from_yaml("large_padding: 16\n").unwrap();
    let engine = BlockLayoutEngine::new(constants).unwrap();
    let info = engine.compute_layout(&label_block()).unwrap();
    assert_eq!(info.width, 20.0 + 2.0 * 16.0);
}

#[test]
fn test_theme_start_hats_apply_to_top_blocks_only() {
    let constants = ConstantProvider::from_yaml("add_start_hats: true\n").unwrap();
    let engine = BlockLayoutEngine::new(constants).unwrap();

    let info = engine.compute_layout(&label_block()).unwrap();
    assert!(info.header().elements.iter().any(|elem| elem.is_hat()));

    let mut opted_out = label_block();
    opted_out.hat = Some(block_layout_wasm::models::HatStyle::None);
    let info = engine.compute_layout(&opted_out).unwrap();
    assert!(!info.header().elements.iter().any(|elem| elem.is_hat()));
}

#[test]
fn test_min_block_height_from_theme() {
    let constants = ConstantProvider::from_json(r#"{"min_block_height": 60}"#).unwrap();
    let engine = BlockLayoutEngine::new(constants).unwrap();
    let info = engine.compute_layout(&label_block()).unwrap();
    assert_eq!(info.height, 60.0);
    assert_eq!(info.footer().y_pos + info.footer().height, 60.0);
}

#[test]
fn test_invalid_theme_values_rejected() {
    let err = ConstantProvider::from_yaml("notch_width: .nan\n").unwrap_err();
    assert!(matches!(err, LayoutError::InvalidTheme(_)));
}

#[test]
fn test_json_entry_point_uses_camel_case() {
    let block = r#"{
        "blockType": "controls_if",
        "inputsInline": false,
        "previousConnection": {"kind": "previous"},
        "inputs": [
            {"kind": "value", "fields": [{"width": 12, "height": 10}]},
            {"kind": "statement", "connection": {"kind": "input", "target": {"width": 80, "height": 40, "connection": "previous"}}}
        ]
    }"#;
    let out = layout_block_json(block, Some(r#"{"large_padding": 10}"#)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert!(value["statementEdge"].is_number());
    assert!(value["widthWithChildren"].as_f64().unwrap() >= value["width"].as_f64().unwrap());
    assert_eq!(value["rows"][0]["kind"], "header");
    assert_eq!(value["rows"][0]["elements"][0]["kind"]["type"], "roundCorner");
    assert_eq!(value["isInsertionMarker"], false);
}

#[test]
fn test_json_entry_point_rejects_bad_blocks() {
    let block = r#"{"inputs": [{"kind": "dummy", "fields": [{"width": -3, "height": 10}]}]}"#;
    assert!(matches!(
        layout_block_json(block, None),
        Err(LayoutError::InvalidDimension { .. })
    ));
}

#[test]
fn test_theme_that_would_yield_negative_gaps_is_rejected() {
    let err = ConstantProvider::from_yaml("large_padding: 0.5\n").unwrap_err();
    assert!(matches!(err, LayoutError::InvalidTheme(_)));

    let mut constants = ConstantProvider::default();
    constants.large_padding = 0.5;
    assert!(matches!(
        BlockLayoutEngine::new(constants),
        Err(LayoutError::InvalidTheme(_))
    ));
}

#[test]
fn test_smallest_large_padding_keeps_positions_ordered() {
    let constants = ConstantProvider::from_yaml("large_padding: 1\n").unwrap();
    let engine = BlockLayoutEngine::new(constants).unwrap();
    let block = Block::new("loop").add_input(Input::statement().with_field(Field::editable(10.0, 10.0)));
    let info = engine.compute_layout(&block).unwrap();

    let row = &info.rows[2];
    assert!(row.elements.iter().all(|elem| elem.width >= 0.0));
    for pair in row.elements.windows(2) {
        assert!(pair[0].x_pos <= pair[1].x_pos);
    }
}
