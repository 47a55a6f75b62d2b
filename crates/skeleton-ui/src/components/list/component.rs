use dioxus::prelude::*;

use crate::components::cards::CardSkeleton;

/// Items rendered by [`ListSkeleton`] when no count is given.
pub const DEFAULT_LIST_COUNT: i64 = 5;

fn default_item() -> fn() -> Element {
    CardSkeleton
}

/// Number of items to render for a requested count; negative counts render nothing.
pub fn list_len(count: i64) -> usize {
    if count < 0 {
        tracing::debug!(count, "negative list skeleton count treated as zero");
    }
    usize::try_from(count).unwrap_or(0)
}

/// Vertical stack of `count` copies of `item`.
///
/// `item` is called directly while rendering the list, so it must not use
/// hooks. Every built-in skeleton qualifies.
#[component]
pub fn ListSkeleton(
    #[props(default = DEFAULT_LIST_COUNT)] count: i64,
    #[props(default = default_item())] item: fn() -> Element,
) -> Element {
    let len = list_len(count);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "skeleton-list", "data-skeleton": "list",
            for index in 0..len {
                div { key: "{index}", class: "skeleton-list-item", {item()} }
            }
        }
    }
}
