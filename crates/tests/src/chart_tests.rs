use std::collections::HashSet;

use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use skeleton_ui::{
    bar_heights, ChartSkeleton, ChartSkeletonBars, ListSkeleton, CHART_BAR_COUNT,
};

use crate::common::*;

fn bar_count(html: &str) -> usize {
    html.matches("skeleton-chart-bar").count()
}

#[test]
fn chart_draws_seven_bars_every_time() {
    for _ in 0..20 {
        assert_eq!(bar_count(&render_component(ChartSkeleton)), CHART_BAR_COUNT);
    }
}

#[test]
fn chart_heights_are_not_fixed() {
    let seen: HashSet<String> = (0..10).map(|_| render_component(ChartSkeleton)).collect();
    assert!(seen.len() > 1, "ten renders produced identical bar heights");
}

#[test]
fn seeded_heights_render_stable_markup() {
    let seeded = |seed| {
        let heights = bar_heights(&mut StdRng::seed_from_u64(seed));
        render(rsx! { ChartSkeletonBars { heights } })
    };
    assert_eq!(seeded(1), seeded(1));
    assert_ne!(seeded(1), seeded(2));
}

#[test]
fn chart_list_gives_each_item_seven_bars() {
    let html = render(rsx! { ListSkeleton { count: 3, item: ChartSkeleton } });
    assert_eq!(count_kind(&html, "chart"), 3);
    assert_eq!(bar_count(&html), 3 * CHART_BAR_COUNT);
}
