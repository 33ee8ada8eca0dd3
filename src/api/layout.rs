//! Block layout WASM API
//!
//! Exposes the layout engine to JavaScript, both as free functions and as
//! a `BlockLayoutEngine` class that keeps a theme between calls.

use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, layout_error, now_ms, serialize};
use crate::block_layout::{self, ConstantProvider};
use crate::models::Block;
use crate::{wasm_log, wasm_warn};

fn constants_from_js(constants: JsValue) -> Result<ConstantProvider, JsValue> {
    if constants.is_undefined() || constants.is_null() {
        return Ok(ConstantProvider::default());
    }
    let constants: ConstantProvider = deserialize(constants, "Theme deserialization error")?;
    constants.validate().map_err(layout_error)?;
    Ok(constants)
}

/// Compute the layout of one block
///
/// # Parameters
/// * `block` - Block content model (JS object)
/// * `constants` - Optional theme constants; defaults when undefined
///
/// # Returns
/// The block's `RenderInfo` as a JS object
#[wasm_bindgen(js_name = computeBlockLayout)]
pub fn compute_block_layout(block: JsValue, constants: JsValue) -> Result<JsValue, JsValue> {
    let block: Block = deserialize(block, "Block deserialization error")?;
    let engine = block_layout::BlockLayoutEngine::new(constants_from_js(constants)?)
        .map_err(layout_error)?;

    let info = engine.compute_layout(&block).map_err(layout_error)?;
    serialize(&info, "Layout serialization error")
}

/// Compute the layout of a block given as JSON, returning JSON
#[wasm_bindgen(js_name = computeBlockLayoutJson)]
pub fn compute_block_layout_json(block_json: &str, theme_json: Option<String>) -> Result<String, JsValue> {
    block_layout::layout_block_json(block_json, theme_json.as_deref()).map_err(layout_error)
}

/// Layout engine with a persistent theme
#[wasm_bindgen(js_name = BlockLayoutEngine)]
pub struct BlockLayoutEngineHandle {
    engine: block_layout::BlockLayoutEngine,
}

#[wasm_bindgen(js_class = BlockLayoutEngine)]
impl BlockLayoutEngineHandle {
    /// Create an engine with the default theme
    #[wasm_bindgen(constructor)]
    pub fn new() -> BlockLayoutEngineHandle {
        BlockLayoutEngineHandle {
            engine: block_layout::BlockLayoutEngine::default(),
        }
    }

    /// Create an engine from a YAML theme
    #[wasm_bindgen(js_name = fromThemeYaml)]
    pub fn from_theme_yaml(yaml: &str) -> Result<BlockLayoutEngineHandle, JsValue> {
        let constants = ConstantProvider::from_yaml(yaml).map_err(layout_error)?;
        let engine = block_layout::BlockLayoutEngine::new(constants).map_err(layout_error)?;
        wasm_log!("Loaded block layout theme from YAML");
        Ok(BlockLayoutEngineHandle { engine })
    }

    /// Compute the layout of one block with this engine's theme
    #[wasm_bindgen(js_name = computeLayout)]
    pub fn compute_layout(&self, block: JsValue) -> Result<JsValue, JsValue> {
        let block: Block = deserialize(block, "Block deserialization error")?;

        let start = now_ms();
        let info = self.engine.compute_layout(&block).map_err(layout_error)?;
        let elapsed = now_ms() - start;
        if elapsed > 16.0 {
            wasm_warn!("Layout of '{}' took {:.1}ms", block.block_type, elapsed);
        }

        serialize(&info, "Layout serialization error")
    }

    /// Replace the theme; the previous theme stays on error
    #[wasm_bindgen(js_name = setConstants)]
    pub fn set_constants(&mut self, constants: JsValue) -> Result<(), JsValue> {
        let constants = constants_from_js(constants)?;
        self.engine = block_layout::BlockLayoutEngine::new(constants).map_err(layout_error)?;
        web_sys::console::debug_1(&JsValue::from_str("[WASM] Block layout theme updated"));
        Ok(())
    }

    /// Current theme constants as a JS object
    #[wasm_bindgen(js_name = getConstants)]
    pub fn get_constants(&self) -> Result<JsValue, JsValue> {
        serialize(self.engine.constants(), "Theme serialization error")
    }

    /// Current theme constants as YAML
    #[wasm_bindgen(js_name = getConstantsYaml)]
    pub fn get_constants_yaml(&self) -> Result<String, JsValue> {
        self.engine.constants().to_yaml().map_err(layout_error)
    }
}

impl Default for BlockLayoutEngineHandle {
    fn default() -> Self {
        Self::new()
    }
}
