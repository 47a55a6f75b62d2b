use dioxus::prelude::*;

use crate::components::pulse::PulseUnit;

const CARD_STYLES: Asset = asset!("./style.css");

/// Generic content card: avatar with a two-line heading above a short body.
#[component]
pub fn CardSkeleton() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: CARD_STYLES }
        div { class: "skeleton-card", "data-skeleton": "card",
            div { class: "skeleton-row",
                PulseUnit { class: "skeleton-circle skeleton-avatar" }
                div { class: "skeleton-stack skeleton-grow",
                    PulseUnit { class: "skeleton-line w-1/2" }
                    PulseUnit { class: "skeleton-line w-1/3" }
                }
            }
            div { class: "skeleton-stack",
                PulseUnit { class: "skeleton-line" }
                PulseUnit { class: "skeleton-line" }
                PulseUnit { class: "skeleton-line w-2/3" }
            }
        }
    }
}

/// Task row: checkbox, title and meta line, trailing status badge.
#[component]
pub fn TaskCardSkeleton() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: CARD_STYLES }
        div { class: "skeleton-card skeleton-row", "data-skeleton": "task-card",
            PulseUnit { class: "skeleton-checkbox" }
            div { class: "skeleton-stack skeleton-grow",
                PulseUnit { class: "skeleton-line w-3/4" }
                PulseUnit { class: "skeleton-line w-1/3" }
            }
            PulseUnit { class: "skeleton-pill" }
        }
    }
}

/// Dashboard stat tile: icon, a large centered number and its label.
#[component]
pub fn StatCardSkeleton() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: CARD_STYLES }
        div { class: "skeleton-card skeleton-stat", "data-skeleton": "stat-card",
            PulseUnit { class: "skeleton-square" }
            PulseUnit { class: "skeleton-line-lg skeleton-stat-value" }
            PulseUnit { class: "skeleton-line w-1/2" }
        }
    }
}

/// Achievement badge: icon block, two lines of text and a progress bar.
#[component]
pub fn AchievementCardSkeleton() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: CARD_STYLES }
        div { class: "skeleton-card skeleton-row", "data-skeleton": "achievement-card",
            PulseUnit { class: "skeleton-square skeleton-icon-lg" }
            div { class: "skeleton-stack skeleton-grow",
                PulseUnit { class: "skeleton-line w-2/3" }
                PulseUnit { class: "skeleton-line w-1/2" }
                PulseUnit { class: "skeleton-bar" }
            }
        }
    }
}

/// Quest card: title with reward pill, description, progress and two actions.
#[component]
pub fn QuestCardSkeleton() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: CARD_STYLES }
        div { class: "skeleton-card", "data-skeleton": "quest-card",
            div { class: "skeleton-row skeleton-between",
                PulseUnit { class: "skeleton-line-lg w-1/2" }
                PulseUnit { class: "skeleton-pill" }
            }
            div { class: "skeleton-stack",
                PulseUnit { class: "skeleton-line" }
                PulseUnit { class: "skeleton-line w-3/4" }
            }
            PulseUnit { class: "skeleton-bar" }
            div { class: "skeleton-actions",
                PulseUnit { class: "skeleton-button" }
                PulseUnit { class: "skeleton-button" }
            }
        }
    }
}

/// Profile banner: large avatar, name and handle, then three stat blocks.
#[component]
pub fn ProfileHeaderSkeleton() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: CARD_STYLES }
        div { class: "skeleton-profile", "data-skeleton": "profile-header",
            PulseUnit { class: "skeleton-circle skeleton-avatar-lg" }
            div { class: "skeleton-stack skeleton-profile-identity",
                PulseUnit { class: "skeleton-line-lg w-1/3" }
                PulseUnit { class: "skeleton-line w-1/4" }
            }
            div { class: "skeleton-profile-stats",
                for slot in 0..3 {
                    div { key: "{slot}", class: "skeleton-stack skeleton-profile-stat",
                        PulseUnit { class: "skeleton-line-lg" }
                        PulseUnit { class: "skeleton-line w-2/3" }
                    }
                }
            }
        }
    }
}
