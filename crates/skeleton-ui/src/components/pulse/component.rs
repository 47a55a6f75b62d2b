use dioxus::prelude::*;

/// Base treatment shared by every placeholder block: pulsing, translucent, rounded.
pub const PULSE_CLASS: &str = "skeleton-pulse";

/// A single pulsing placeholder block.
///
/// Caller classes are appended after [`PULSE_CLASS`] verbatim, so sizing
/// utilities such as `"h-4 w-3/4"` layer on top of the base treatment.
/// Any other global attribute (`style`, `id`, ...) passes straight through.
#[component]
pub fn PulseUnit(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![Attribute::new("class", PULSE_CLASS, None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
        }
    }
}
