use pretty_assertions::assert_eq;
use skeleton_ui::{SkeletonKind, UnknownSkeleton, ALL_KINDS};

use crate::common::*;

#[test]
fn every_kind_renders_its_own_root() {
    for kind in ALL_KINDS {
        let html = render_component(kind.component());
        assert_eq!(count_kind(&html, kind.as_str()), 1, "{kind}");
    }
}

#[test]
fn deterministic_kinds_render_identically() {
    for kind in ALL_KINDS.iter().filter(|kind| **kind != SkeletonKind::Chart) {
        assert_eq!(
            render_component(kind.component()),
            render_component(kind.component()),
            "{kind}"
        );
    }
}

#[test]
fn display_matches_key() {
    for kind in ALL_KINDS {
        assert_eq!(kind.to_string(), kind.as_str());
    }
}

#[test]
fn strict_and_lenient_lookup_disagree_on_unknown_keys() {
    assert_eq!(
        "spinner".parse::<SkeletonKind>(),
        Err(UnknownSkeleton("spinner".to_string()))
    );
    assert_eq!(SkeletonKind::from_key("spinner"), SkeletonKind::Card);
}

#[test]
fn unknown_skeleton_is_a_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(UnknownSkeleton("x".into()));
    assert_eq!(err.to_string(), r#"unknown skeleton kind: "x""#);
}
