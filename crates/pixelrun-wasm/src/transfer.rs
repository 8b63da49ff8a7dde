//! Import helper bindings: saved segment files, resuming and list planning.

use crate::types::{strings_from_js, strings_to_array};
use pixelrun_core::{transfer, ImportPlan, ImportTarget};
use wasm_bindgen::prelude::*;

/// Join segments one per line.
#[wasm_bindgen]
pub fn to_lines(segments: JsValue) -> Result<String, JsValue> {
    let segments = strings_from_js(segments)?;
    Ok(transfer::to_lines(&segments))
}

/// Split a saved segment file into segments, skipping blank lines.
#[wasm_bindgen]
pub fn from_lines(text: &str) -> js_sys::Array {
    strings_to_array(&transfer::from_lines(text))
}

/// Segments still to import after an interruption.
///
/// The segment containing `last_successful` is included so it is imported
/// again. Returns an empty array if no segment contains it.
#[wasm_bindgen]
pub fn resume_from(segments: JsValue, last_successful: &str) -> Result<js_sys::Array, JsValue> {
    let segments = strings_from_js(segments)?;
    Ok(strings_to_array(transfer::resume_from(
        &segments,
        last_successful,
    )))
}

/// How many in-game lists `segment_count` segments need.
///
/// `target` is `"variableImport"` or `"listCreate"` (the default when
/// `undefined`). Returns `{ segments, fullLists, remainder }`.
#[wasm_bindgen]
pub fn import_plan(segment_count: usize, target: JsValue) -> Result<JsValue, JsValue> {
    let target: ImportTarget = if target.is_undefined() || target.is_null() {
        ImportTarget::default()
    } else {
        serde_wasm_bindgen::from_value(target)
            .map_err(|e| JsValue::from_str(&format!("Invalid import target: {}", e)))?
    };
    let plan = ImportPlan::new(segment_count, target);
    serde_wasm_bindgen::to_value(&plan).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn array(items: &[&str]) -> JsValue {
        strings_to_array(items).into()
    }

    #[wasm_bindgen_test]
    fn test_lines_round_trip() {
        let text = to_lines(array(&["3!", "]"])).unwrap();
        assert_eq!(text, "3!\n]");

        let back = from_lines(&text);
        assert_eq!(back.length(), 2);
        assert_eq!(back.get(1).as_string().unwrap(), "]");
    }

    #[wasm_bindgen_test]
    fn test_resume_from() {
        let rest = resume_from(array(&["aa", "bb", "cc"]), "bb").unwrap();
        assert_eq!(rest.length(), 2);
        assert_eq!(rest.get(0).as_string().unwrap(), "bb");

        let none = resume_from(array(&["aa"]), "zz").unwrap();
        assert_eq!(none.length(), 0);
    }

    #[wasm_bindgen_test]
    fn test_import_plan() {
        let value = import_plan(130, JsValue::UNDEFINED).unwrap();
        let plan: ImportPlan = serde_wasm_bindgen::from_value(value).unwrap();
        assert_eq!(plan.full_lists, 2);
        assert_eq!(plan.remainder, 2);

        let value = import_plan(100, JsValue::from_str("variableImport")).unwrap();
        let plan: ImportPlan = serde_wasm_bindgen::from_value(value).unwrap();
        assert_eq!(plan.total_lists(), 2);
    }

    #[wasm_bindgen_test]
    fn test_import_plan_bad_target() {
        assert!(import_plan(1, JsValue::from_str("clipboard")).is_err());
    }
}
