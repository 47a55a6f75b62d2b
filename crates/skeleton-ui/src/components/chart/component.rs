use dioxus::prelude::*;
use rand::Rng;

use crate::components::pulse::PulseUnit;

/// Number of bars drawn by every chart skeleton.
pub const CHART_BAR_COUNT: usize = 7;
/// Shortest bar, as a percentage of the plot height.
pub const MIN_BAR_HEIGHT: u8 = 20;
/// Tallest bar, as a percentage of the plot height.
pub const MAX_BAR_HEIGHT: u8 = 100;

/// Draw one height per bar from `rng`, each within
/// `MIN_BAR_HEIGHT..=MAX_BAR_HEIGHT`.
pub fn bar_heights<R: Rng + ?Sized>(rng: &mut R) -> [u8; CHART_BAR_COUNT] {
    std::array::from_fn(|_| rng.gen_range(MIN_BAR_HEIGHT..=MAX_BAR_HEIGHT))
}

/// Bar chart placeholder with freshly randomized bar heights on every render.
#[component]
pub fn ChartSkeleton() -> Element {
    let heights = bar_heights(&mut rand::thread_rng());
    tracing::trace!(?heights, "chart skeleton bar heights");

    rsx! {
        ChartSkeletonBars { heights }
    }
}

/// Bar chart placeholder drawn with caller-supplied bar heights.
#[component]
pub fn ChartSkeletonBars(heights: [u8; CHART_BAR_COUNT]) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "skeleton-chart", "data-skeleton": "chart",
            PulseUnit { class: "skeleton-line-lg w-1/3" }
            div { class: "skeleton-chart-plot",
                for (index, height) in heights.iter().enumerate() {
                    PulseUnit {
                        key: "{index}",
                        class: "skeleton-chart-bar",
                        style: "height: {height}%",
                    }
                }
            }
            div { class: "skeleton-chart-axis",
                for index in 0..CHART_BAR_COUNT {
                    PulseUnit { key: "{index}", class: "skeleton-line skeleton-chart-tick" }
                }
            }
        }
    }
}
