use dioxus::prelude::*;
use skeleton_ui::{ListSkeleton, PulseUnit, SkeletonKind, ALL_KINDS, DEFAULT_LIST_COUNT};

fn main() {
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else {
        "unknown"
    }
}

/// Parse the list count field; anything unparseable shows an empty list.
fn parse_count(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}

#[component]
fn App() -> Element {
    let mut selected = use_signal(SkeletonKind::default);
    let mut count = use_signal(|| DEFAULT_LIST_COUNT);

    use_hook(|| tracing::info!(platform = client_platform(), "skeleton gallery started"));

    rsx! {
        main { class: "gallery",
            h1 { "Skeleton gallery" }

            section { class: "gallery-controls",
                label { r#for: "gallery-kind", "Item" }
                select {
                    id: "gallery-kind",
                    value: "{selected().as_str()}",
                    onchange: move |evt| {
                        let kind = SkeletonKind::from_key(&evt.value());
                        tracing::info!(%kind, "gallery kind selected");
                        selected.set(kind);
                    },
                    for kind in ALL_KINDS {
                        option { key: "{kind}", value: "{kind.as_str()}", "{kind.display_name()}" }
                    }
                }
                label { r#for: "gallery-count", "Count" }
                input {
                    id: "gallery-count",
                    r#type: "number",
                    value: "{count}",
                    oninput: move |evt| count.set(parse_count(&evt.value())),
                }
            }

            section { class: "gallery-list",
                h2 { "List of {selected().display_name()}" }
                ListSkeleton { count: count(), item: selected().component() }
            }

            section { class: "gallery-pulse",
                h2 { "Pulse unit" }
                PulseUnit { class: "skeleton-line w-3/4" }
            }

            for kind in ALL_KINDS {
                section { key: "{kind}", class: "gallery-entry",
                    h2 { "{kind.display_name()}" }
                    {kind.component()()}
                }
            }
        }
    }
}
