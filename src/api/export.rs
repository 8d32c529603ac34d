//! PNG export of the capture area
//!
//! The rasterizer is the page's global `html2canvas` function, consumed as
//! a black box: element in, promise of a canvas out. Before invoking it the
//! settings panel is hidden and the capture root is marked with an
//! `exporting` class (the stylesheet hides selection outlines under it);
//! both are restored whether the export succeeds or fails.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlAnchorElement, HtmlCanvasElement, HtmlElement};

use crate::{wasm_error, wasm_info};

/// Element id of the settings panel hidden during capture
const SETTINGS_PANEL_ID: &str = "settingPanel";

/// Class set on the capture root while exporting; CSS hides selection
/// outlines and drag handles under it
const EXPORTING_CLASS: &str = "exporting";

/// Device-scale factor passed to the rasterizer
const EXPORT_SCALE: f64 = 2.0;

#[wasm_bindgen]
extern "C" {
    /// The page-supplied rasterization library (element + options -> canvas)
    #[wasm_bindgen(catch)]
    fn html2canvas(element: &Element, options: &JsValue) -> Result<js_sys::Promise, JsValue>;
}

/// UI chrome hidden for the capture; restored on drop so every exit path
/// (including rasterizer failure) puts the page back together.
struct HiddenChrome {
    panel: Option<HtmlElement>,
    root: Element,
}

impl HiddenChrome {
    fn hide(document: &Document, root: &Element) -> Self {
        let panel = document
            .get_element_by_id(SETTINGS_PANEL_ID)
            .and_then(|e| e.dyn_into::<HtmlElement>().ok());
        if let Some(panel) = &panel {
            let _ = panel.style().set_property("display", "none");
        }
        let _ = root.class_list().add_1(EXPORTING_CLASS);
        Self {
            panel,
            root: root.clone(),
        }
    }
}

impl Drop for HiddenChrome {
    fn drop(&mut self) {
        if let Some(panel) = &self.panel {
            let _ = panel.style().set_property("display", "block");
        }
        let _ = self.root.class_list().remove_1(EXPORTING_CLASS);
    }
}

/// Rasterizer options: fixed scale, transparent background, CORS images
/// allowed, tainting not.
fn rasterizer_options() -> Result<JsValue, JsValue> {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"scale".into(), &JsValue::from_f64(EXPORT_SCALE))?;
    js_sys::Reflect::set(&options, &"backgroundColor".into(), &JsValue::NULL)?;
    js_sys::Reflect::set(&options, &"useCORS".into(), &JsValue::TRUE)?;
    js_sys::Reflect::set(&options, &"allowTaint".into(), &JsValue::FALSE)?;
    Ok(options.into())
}

/// Trigger a browser download of a data URL via a hidden anchor
fn trigger_download(document: &Document, data_url: &str, filename: &str) -> Result<(), JsValue> {
    let anchor: HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(|_| JsValue::from_str("Anchor cast failed"))?;
    anchor.set_href(data_url);
    anchor.set_download(filename);
    let _ = anchor.style().set_property("display", "none");

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("Missing document body"))?;
    body.append_child(&anchor)?;
    anchor.click();
    anchor.remove();
    Ok(())
}

/// Rasterize the element with the given id and download it as a PNG.
///
/// # Parameters
/// - `element_id`: id of the capture area (e.g. "capture-area")
/// - `filename`: download filename, e.g. "table.png"
#[wasm_bindgen(js_name = exportPng)]
pub async fn export_png(element_id: String, filename: String) -> Result<(), JsValue> {
    wasm_info!("exportPng called: element='{}' file='{}'", element_id, filename);

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document available"))?;
    let element = document.get_element_by_id(&element_id).ok_or_else(|| {
        JsValue::from_str(&format!("Capture element '{}' not found", element_id))
    })?;

    let _chrome = HiddenChrome::hide(&document, &element);

    let promise = html2canvas(&element, &rasterizer_options()?).map_err(|e| {
        wasm_error!("Rasterization library unavailable: {:?}", e);
        JsValue::from_str("Image capture is unavailable on this page")
    })?;
    let canvas_value = JsFuture::from(promise).await.map_err(|e| {
        wasm_error!("Rasterization failed: {:?}", e);
        JsValue::from_str("Capturing the table as an image failed")
    })?;
    let canvas: HtmlCanvasElement = canvas_value
        .dyn_into()
        .map_err(|_| JsValue::from_str("Rasterizer did not return a canvas"))?;

    let data_url = canvas.to_data_url_with_type("image/png")?;
    trigger_download(&document, &data_url, &filename)?;

    wasm_info!("exportPng completed: {}", filename);
    Ok(())
}
