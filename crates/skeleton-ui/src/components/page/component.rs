use dioxus::prelude::*;

use crate::components::cards::StatCardSkeleton;
use crate::components::list::ListSkeleton;
use crate::components::pulse::PulseUnit;

/// Items shown in the page body list.
pub const PAGE_LIST_COUNT: i64 = 3;

/// Full-page placeholder: header block, two stat tiles, then a short card list.
#[component]
pub fn PageSkeleton() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "skeleton-page", "data-skeleton": "page",
            PulseUnit { class: "skeleton-page-header" }
            div { class: "skeleton-page-stats",
                StatCardSkeleton {}
                StatCardSkeleton {}
            }
            ListSkeleton { count: PAGE_LIST_COUNT }
        }
    }
}
