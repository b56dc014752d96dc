use gemdash_core::ChartSurface;
use js_sys::{Array, Reflect, JSON};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::ChartConfig;

#[wasm_bindgen]
extern "C" {
    /// The host page's charting library entry point (Chart.js-compatible
    /// constructor on the global object).
    #[wasm_bindgen(js_name = Chart)]
    type JsChart;

    #[wasm_bindgen(constructor, js_class = "Chart")]
    fn new(ctx: &CanvasRenderingContext2d, config: &JsValue) -> JsChart;

    #[wasm_bindgen(method)]
    fn update(this: &JsChart);

    #[wasm_bindgen(method)]
    fn resize(this: &JsChart);

    #[wasm_bindgen(method)]
    fn destroy(this: &JsChart);
}

/// Live chart bound to a canvas. Construction fails (non-fatally for the
/// caller) when the canvas or its 2d context is missing; the host logs it
/// and carries on without that chart.
pub struct ChartHandle {
    chart: JsChart,
}

impl ChartHandle {
    pub fn new(canvas_id: &str, config: &ChartConfig) -> Result<ChartHandle, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str("canvas not found"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("not a canvas"))?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("not a 2d context"))?;
        // Same JSON-string bridge as the rest of the wasm boundary: the
        // config is serde-serialized once and parsed on the JS side.
        let json =
            serde_json::to_string(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let parsed = JSON::parse(&json)?;
        Ok(ChartHandle {
            chart: JsChart::new(&ctx, &parsed),
        })
    }

    fn swap_data(&self, labels: &[String], purchases: &[f64], sales: &[f64]) -> Result<(), JsValue> {
        let data = Reflect::get(&self.chart, &JsValue::from_str("data"))?;
        let js_labels = Array::new();
        for label in labels {
            js_labels.push(&JsValue::from_str(label));
        }
        Reflect::set(&data, &JsValue::from_str("labels"), &js_labels)?;

        let datasets: Array = Reflect::get(&data, &JsValue::from_str("datasets"))?.dyn_into()?;
        for (index, values) in [purchases, sales].into_iter().enumerate() {
            let dataset = datasets.get(index as u32);
            if dataset.is_undefined() {
                continue;
            }
            let js_values = Array::new();
            for value in values {
                js_values.push(&JsValue::from_f64(*value));
            }
            Reflect::set(&dataset, &JsValue::from_str("data"), &js_values)?;
        }
        Ok(())
    }
}

impl ChartSurface for ChartHandle {
    fn replace_data(&mut self, labels: &[String], purchases: &[f64], sales: &[f64]) {
        if let Err(err) = self.swap_data(labels, purchases, sales) {
            web_sys::console::warn_1(&err);
        }
    }

    fn redraw(&mut self) {
        self.chart.update();
    }

    fn resize(&mut self) {
        self.chart.resize();
    }
}

impl Drop for ChartHandle {
    fn drop(&mut self) {
        self.chart.destroy();
    }
}
