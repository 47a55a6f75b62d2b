//! Loading placeholders for Dioxus apps.
//!
//! Every skeleton is a hook-free component that renders a fixed silhouette of
//! pulsing blocks. Zero-prop skeletons are plain `fn() -> Element` values, so
//! they can be handed to [`ListSkeleton`] or looked up by name through
//! [`SkeletonKind`].

pub mod components;
pub mod registry;

pub use components::*;
pub use registry::{SkeletonKind, UnknownSkeleton, ALL_KINDS};
