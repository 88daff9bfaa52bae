//! News chat widget — WASM entry point.
//!
//! This crate is the composition root (DI wiring layer).
//! It builds the HTTP adapter and conversation driver and hands them to
//! the egui UI.

mod app;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// WASM entry point — called from index.html
#[wasm_bindgen(start)]
pub async fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("News chat widget starting...");

    let web_options = eframe::WebOptions::default();

    let document = web_sys::window()
        .expect("No window")
        .document()
        .expect("No document");
    let canvas = document
        .get_element_by_id("newschat_canvas")
        .expect("No canvas element with id 'newschat_canvas'")
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .expect("Element is not a canvas");

    let config = app::load_config();

    wasm_bindgen_futures::spawn_local(async move {
        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| Ok(Box::new(app::NewsChatApp::new(cc, config)))),
            )
            .await
            .expect("Failed to start eframe");
    });
}
