use std::rc::Rc;

use ::common::charts::ChartPoint;
use plotly::common::{Fill, Line, Marker, Mode};
use plotly::{Bar, Layout, Scatter};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue);
}

/// Line + markers through `points`, in the order given
pub fn line_trace(points: &[ChartPoint], name: &str, color: &str) -> Option<Value> {
    let (x, y) = split(points);
    let trace = Scatter::new(x, y)
        .mode(Mode::LinesMarkers)
        .name(name)
        .line(Line::new().color(color.to_string()).width(2.0));
    to_value(&trace)
}

pub fn bar_trace(points: &[ChartPoint], name: &str, color: &str) -> Option<Value> {
    let (x, y) = split(points);
    let trace = Bar::new(x, y)
        .name(name)
        .marker(Marker::new().color(color.to_string()));
    to_value(&trace)
}

/// Filled line for the yearly report; the first series fills to zero, the
/// rest to the series below.
pub fn area_trace(years: Vec<String>, values: Vec<f64>, name: &str, color: &str, first: bool) -> Option<Value> {
    let fill = if first { Fill::ToZeroY } else { Fill::ToNextY };
    let trace = Scatter::new(years, values)
        .mode(Mode::Lines)
        .name(name)
        .fill(fill)
        .line(Line::new().color(color.to_string()).width(2.0));
    to_value(&trace)
}

fn split(points: &[ChartPoint]) -> (Vec<String>, Vec<f64>) {
    points.iter().map(|p| (p.x.clone(), p.y)).unzip()
}

fn to_value<T: Serialize>(trace: &T) -> Option<Value> {
    match serde_json::to_value(trace) {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!("Failed to serialize chart trace: {}", e);
            None
        }
    }
}

/// Maps become plain objects, which is what Plotly reads.
fn to_js(value: &impl Serialize) -> Option<JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| log::error!("Failed to hand chart data to Plotly: {}", e))
        .ok()
}

#[derive(Properties, PartialEq)]
pub struct PlotlyChartProps {
    pub div_id: AttrValue,
    pub traces: Rc<Vec<Value>>,
    #[prop_or(300)]
    pub height: usize,
}

/// Draws into its own div whenever the traces change
#[function_component(PlotlyChart)]
pub fn plotly_chart(props: &PlotlyChartProps) -> Html {
    let container_ref = use_node_ref();
    let height = props.height;

    use_effect_with(
        (container_ref.clone(), props.traces.clone(), props.div_id.clone()),
        move |(container_ref, traces, div_id)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id(div_id);

                let layout = Layout::new().height(height).show_legend(traces.len() > 1);
                match (to_js(traces.as_ref()), to_js(&layout)) {
                    (Some(data), Some(layout)) => {
                        log::trace!("Plotting {} traces into {}", traces.len(), div_id);
                        newPlot(div_id, data, layout);
                    }
                    _ => log::warn!("Skipping chart {}", div_id),
                }
            }
            || ()
        },
    );

    html! {
        <div ref={container_ref} style={format!("width:100%; height:{}px;", height)}></div>
    }
}
