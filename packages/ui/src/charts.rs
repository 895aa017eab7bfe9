//! Inline-SVG rendering of the server-computed chart series. The client
//! never aggregates: it scales the numbers it was given into a viewBox and
//! nothing more.

use dioxus::prelude::*;

use api::{ApiClient, ChartData, ChartSeries};
use store::{QueryCache, QueryKey};

use crate::components::Spinner;
use crate::hooks::{cached_query, QueryState};
use crate::use_session;

const VIEW_W: f64 = 300.0;
const VIEW_H: f64 = 120.0;
const PAD: f64 = 8.0;

/// Scale a series into `points` for an SVG polyline. Empty input produces
/// an empty string; a flat series draws a centered horizontal line.
pub fn polyline_points(data: &[f64], width: f64, height: f64) -> String {
    if data.is_empty() {
        return String::new();
    }
    let min = data.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    let inner_w = width - 2.0 * PAD;
    let inner_h = height - 2.0 * PAD;
    let step = if data.len() > 1 {
        inner_w / (data.len() - 1) as f64
    } else {
        0.0
    };

    data.iter()
        .enumerate()
        .map(|(i, value)| {
            let x = PAD + step * i as f64;
            let y = if span == 0.0 {
                height / 2.0
            } else {
                PAD + inner_h * (1.0 - (value - min) / span)
            };
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Bar geometry for the allocation chart: `(x, y, w, h)` per value.
pub fn bar_rects(data: &[f64], width: f64, height: f64) -> Vec<(f64, f64, f64, f64)> {
    if data.is_empty() {
        return Vec::new();
    }
    let max = data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let inner_w = width - 2.0 * PAD;
    let inner_h = height - 2.0 * PAD;
    let slot = inner_w / data.len() as f64;
    let bar_w = (slot * 0.6).max(1.0);

    data.iter()
        .enumerate()
        .map(|(i, value)| {
            let h = if max > 0.0 {
                inner_h * (value / max).max(0.0)
            } else {
                0.0
            };
            let x = PAD + slot * i as f64 + (slot - bar_w) / 2.0;
            let y = height - PAD - h;
            (x, y, bar_w, h)
        })
        .collect()
}

#[component]
fn LineChart(title: String, series: ChartSeries) -> Element {
    let points = polyline_points(&series.data, VIEW_W, VIEW_H);
    rsx! {
        div {
            class: "chart-card",
            h3 { "{title}" }
            svg {
                class: "chart-svg",
                view_box: "0 0 {VIEW_W} {VIEW_H}",
                preserve_aspect_ratio: "none",
                polyline {
                    class: "chart-line",
                    points: "{points}",
                    fill: "none",
                }
            }
            div {
                class: "chart-labels",
                for label in series.labels.iter() {
                    span { key: "{label}", "{label}" }
                }
            }
        }
    }
}

#[component]
fn BarChart(title: String, series: ChartSeries) -> Element {
    let rects: Vec<(usize, String, String, String, String)> = bar_rects(&series.data, VIEW_W, VIEW_H)
        .into_iter()
        .enumerate()
        .map(|(i, (x, y, w, h))| {
            (
                i,
                format!("{x:.1}"),
                format!("{y:.1}"),
                format!("{w:.1}"),
                format!("{h:.1}"),
            )
        })
        .collect();
    rsx! {
        div {
            class: "chart-card",
            h3 { "{title}" }
            svg {
                class: "chart-svg",
                view_box: "0 0 {VIEW_W} {VIEW_H}",
                preserve_aspect_ratio: "none",
                for (i, x, y, w, h) in rects {
                    rect {
                        key: "{i}",
                        class: "chart-bar",
                        x: "{x}",
                        y: "{y}",
                        width: "{w}",
                        height: "{h}",
                    }
                }
            }
            div {
                class: "chart-labels",
                for label in series.labels.iter() {
                    span { key: "{label}", "{label}" }
                }
            }
        }
    }
}

/// The four dashboard charts for one period.
#[component]
pub fn ChartsPanel(#[props(default = "6months".to_string())] period: String) -> Element {
    let client = use_context::<ApiClient>();
    let cache = use_context::<QueryCache>();
    let session = use_session();
    let mut charts = use_signal(|| QueryState::<ChartData>::Loading);

    let period_key = period.clone();
    let _loader = use_resource(move || {
        let client = client.clone();
        let cache = cache.clone();
        let period = period_key.clone();
        async move {
            let Some(user_id) = session().user_id().map(str::to_string) else {
                return;
            };
            let key = QueryKey::DashboardCharts {
                user_id: user_id.clone(),
                period: period.clone(),
            };
            let fetch = {
                let client = client.clone();
                let user_id = user_id.clone();
                let period = period.clone();
                move || {
                    let client = client.clone();
                    let user_id = user_id.clone();
                    let period = period.clone();
                    async move { client.dashboard_charts(&user_id, &period).await }
                }
            };
            charts.set(QueryState::from_result(
                cached_query(&cache, key, fetch).await,
            ));
        }
    });

    match charts() {
        QueryState::Loading => rsx! {
            Spinner { label: "Loading charts…" }
        },
        QueryState::Failed(message) => rsx! {
            div { class: "load-error", "Could not load charts: {message}" }
        },
        QueryState::Ready(data) => rsx! {
            div {
                class: "charts-grid",
                LineChart { title: "Spending", series: data.spending_chart }
                LineChart { title: "Savings", series: data.savings_chart }
                LineChart { title: "Investments", series: data.investment_chart }
                BarChart { title: "Allocation", series: data.allocation_chart }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series_draws_nothing() {
        assert_eq!(polyline_points(&[], VIEW_W, VIEW_H), "");
        assert!(bar_rects(&[], VIEW_W, VIEW_H).is_empty());
    }

    #[test]
    fn points_span_the_padded_width() {
        let points = polyline_points(&[1.0, 2.0, 3.0], 300.0, 120.0);
        let pairs: Vec<&str> = points.split(' ').collect();
        assert_eq!(pairs.len(), 3);
        assert!(pairs[0].starts_with("8.0,"));
        assert!(pairs[2].starts_with("292.0,"));
        // highest value maps to the top padding, lowest to the bottom
        assert!(pairs[0].ends_with(",112.0"));
        assert!(pairs[2].ends_with(",8.0"));
    }

    #[test]
    fn flat_series_is_a_centered_line() {
        let points = polyline_points(&[5.0, 5.0], 300.0, 120.0);
        for pair in points.split(' ') {
            assert!(pair.ends_with(",60.0"));
        }
    }

    #[test]
    fn bars_scale_against_the_maximum() {
        let rects = bar_rects(&[50.0, 100.0], 300.0, 120.0);
        assert_eq!(rects.len(), 2);
        let (_, _, _, h_small) = rects[0];
        let (_, _, _, h_big) = rects[1];
        assert!((h_big - 2.0 * h_small).abs() < 1e-6);
        assert!((h_big - 104.0).abs() < 1e-6);
    }
}
