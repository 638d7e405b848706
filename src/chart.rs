//! Stats Chart
//!
//! Static bar chart on an HTML5 canvas, drawn once per page load as an
//! explicit post-render step. The right panel only renders the canvas; the
//! hosting `main` calls [`init_stats_chart`] after mounting.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// DOM id of the stats canvas rendered by the right panel
pub const STATS_CANVAS_ID: &str = "stats-chart";

/// Fixed labels for the stats bars
pub const STATS_LABELS: [&str; 3] = ["Followers", "Likes", "Views"];

/// Fixed values for the stats bars
pub const STATS_VALUES: [f64; 3] = [12.0, 19.0, 3.0];

/// Bar colors, one per label
const BAR_COLORS: [&str; 3] = [
    "#6366f1", // Indigo (followers)
    "#ec4899", // Pink (likes)
    "#f59e0b", // Amber (views)
];

/// A bar's rectangle in canvas coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Draw the stats chart if the canvas is present.
///
/// Called once by `main` after the tree is mounted. A missing canvas means
/// there is nothing to draw; there is no update or teardown path.
pub fn init_stats_chart() {
    let canvas = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(STATS_CANVAS_ID))
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok());

    if let Some(canvas) = canvas {
        draw_stats_chart(&canvas);
    }
}

/// Draw the chart on canvas
pub fn draw_stats_chart(canvas: &HtmlCanvasElement) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    let bars = bar_layout(width, height, &STATS_VALUES);

    for (idx, bar) in bars.iter().enumerate() {
        let color = BAR_COLORS[idx % BAR_COLORS.len()];
        ctx.set_fill_style(&color.into());
        ctx.fill_rect(bar.x, bar.y, bar.width, bar.height);

        // Value above the bar
        ctx.set_fill_style(&"#e5e7eb".into()); // gray-200
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(
            &format!("{}", STATS_VALUES[idx]),
            bar.x + bar.width / 2.0 - 6.0,
            bar.y - 4.0,
        );

        // Label under the baseline
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        let _ = ctx.fill_text(
            STATS_LABELS[idx],
            bar.x + bar.width / 2.0 - 24.0,
            height - 6.0,
        );
    }

    // Baseline
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);
    ctx.begin_path();
    let baseline = height - layout_margins().bottom;
    ctx.move_to(layout_margins().left, baseline);
    ctx.line_to(width - layout_margins().right, baseline);
    ctx.stroke();
}

#[derive(Clone, Copy)]
struct Margins {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

fn layout_margins() -> Margins {
    Margins {
        left: 10.0,
        right: 10.0,
        top: 18.0,
        bottom: 22.0,
    }
}

/// Compute the bar rectangles for a set of values.
///
/// Bars share the chart area evenly with half-bar gaps; heights scale so the
/// largest value touches the top margin. All-zero values produce zero-height
/// bars sitting on the baseline.
pub fn bar_layout(width: f64, height: f64, values: &[f64]) -> Vec<BarRect> {
    if values.is_empty() {
        return Vec::new();
    }

    let margins = layout_margins();
    let chart_width = width - margins.left - margins.right;
    let chart_height = height - margins.top - margins.bottom;
    let baseline = height - margins.bottom;

    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let scale = if max > 0.0 { chart_height / max } else { 0.0 };

    // n bars and n+1 half-bar gaps around and between them
    let slot = chart_width / (values.len() as f64 * 1.5 + 0.5);
    let gap = slot / 2.0;

    values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let bar_height = value.max(0.0) * scale;
            BarRect {
                x: margins.left + gap + i as f64 * (slot + gap),
                y: baseline - bar_height,
                width: slot,
                height: bar_height,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f64 = 240.0;
    const HEIGHT: f64 = 160.0;

    #[test]
    fn bars_stay_inside_chart_area() {
        let bars = bar_layout(WIDTH, HEIGHT, &STATS_VALUES);
        assert_eq!(bars.len(), STATS_VALUES.len());
        for bar in &bars {
            assert!(bar.x >= layout_margins().left);
            assert!(bar.x + bar.width <= WIDTH - layout_margins().right + 1e-9);
            assert!(bar.y >= layout_margins().top - 1e-9);
            assert!(bar.y + bar.height <= HEIGHT - layout_margins().bottom + 1e-9);
        }
    }

    #[test]
    fn heights_scale_with_values() {
        let bars = bar_layout(WIDTH, HEIGHT, &STATS_VALUES);
        // 19 is the max and should touch the top margin
        assert!((bars[1].y - layout_margins().top).abs() < 1e-9);
        // 12/19 and 3/19 of the tallest bar
        assert!((bars[0].height - bars[1].height * 12.0 / 19.0).abs() < 1e-9);
        assert!((bars[2].height - bars[1].height * 3.0 / 19.0).abs() < 1e-9);
    }

    #[test]
    fn zero_values_sit_on_baseline() {
        let bars = bar_layout(WIDTH, HEIGHT, &[0.0, 0.0]);
        for bar in &bars {
            assert_eq!(bar.height, 0.0);
            assert!((bar.y - (HEIGHT - layout_margins().bottom)).abs() < 1e-9);
        }
    }

    #[test]
    fn no_values_no_bars() {
        assert!(bar_layout(WIDTH, HEIGHT, &[]).is_empty());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn init_without_canvas_is_a_no_op() {
        // The test page has no stats canvas; init must return quietly.
        init_stats_chart();
    }
}
