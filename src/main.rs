use web_academy::LearnApp;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    web_academy::telemetry::init_logging();
    log::info!("arrancando Web Academy {}", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Web Academy",
        options,
        Box::new(|cc| Ok(Box::new(LearnApp::new(cc)))),
    )
}

// Web: se monta sobre el canvas "the_canvas_id"
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();
    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("no window")
            .document()
            .expect("no document");
        let canvas = document
            .get_element_by_id("the_canvas_id")
            .expect("canvas 'the_canvas_id' not found")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("'the_canvas_id' is not a canvas");

        let result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(LearnApp::new(cc)))),
            )
            .await;
        if let Err(err) = result {
            log::error!("no se pudo arrancar la app: {err:?}");
        }
    });
}
