//! Host element for one Chart.js chart.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id handed to `js_bridge::render_chart`
    pub id: String,
    #[props(default = 320)]
    pub min_height: u32,
}

/// Fixed-height box; the bridge appends a canvas to the inner div.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let height = props.min_height;
    rsx! {
        div {
            style: "height: {height}px; position: relative; width: 100%; margin-bottom: 12px;",
            div {
                id: "{props.id}",
                style: "width: 100%; height: 100%;",
            }
        }
    }
}
