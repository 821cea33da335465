//! Cross-cutting rendering scenarios: device scaling, clamping,
//! background composition order, animation attachment, wrap flow.

use crate::device::DeviceKind;
use crate::render::render_block;
use bloq_model::{
    Animation, AnimationKind, Block, BlockId, BlockKind, Column, HeaderBackground, ImageSide,
    Overlay, Spacing, Typography,
};

fn sized_text(font_size: f64) -> Block {
    let mut block = Block::new(BlockKind::Text);
    if let Block::Text { typography, .. } = &mut block {
        *typography = Some(Typography {
            font_size: Some(font_size),
            ..Default::default()
        });
    }
    block
}

#[test]
fn test_font_size_scales_per_device() {
    let block = sized_text(40.0);
    let cases = [
        (DeviceKind::Mobile, "26px"),
        (DeviceKind::Tablet, "34px"),
        (DeviceKind::Desktop, "40px"),
    ];
    for (device, expected) in cases {
        let node = render_block(&block, device);
        let content = node.find_class("block-content").unwrap();
        assert_eq!(content.style("font-size"), Some(expected), "{device:?}");
    }
}

#[test]
fn test_padding_uses_the_coarser_spacing_scale() {
    let mut block = sized_text(40.0);
    if let Block::Text { spacing, .. } = &mut block {
        *spacing = Some(Spacing {
            padding_top: Some(40.0),
            ..Default::default()
        });
    }

    let node = render_block(&block, DeviceKind::Mobile);
    // 40 × 0.6, not 40 × 0.65: font and spacing factors are distinct.
    assert_eq!(node.style("padding-top"), Some("24px"));
    let content = node.find_class("block-content").unwrap();
    assert_eq!(content.style("font-size"), Some("26px"));
}

#[test]
fn test_corrupt_numeric_values_are_clamped_before_use() {
    let mut block = sized_text(9_999.0);
    if let Block::Text { spacing, .. } = &mut block {
        *spacing = Some(Spacing {
            padding_top: Some(-50.0),
            ..Default::default()
        });
    }

    let node = render_block(&block, DeviceKind::Desktop);
    let content = node.find_class("block-content").unwrap();
    assert_eq!(content.style("font-size"), Some("200px"));
    assert_eq!(node.style("padding-top"), Some("0px"));
}

#[test]
fn test_header_height_is_clamped_to_viewport_range() {
    let mut block = Block::new(BlockKind::Header);
    if let Block::Header { height_vh, .. } = &mut block {
        *height_vh = Some(400.0);
    }
    let node = render_block(&block, DeviceKind::Desktop);
    assert_eq!(node.style("height"), Some("100vh"));
}

fn overlay_header() -> Block {
    Block::Header {
        id: BlockId::new(),
        title: "Tonight's specials".to_string(),
        subtitle: Some("Fresh from the coast".to_string()),
        tagline: None,
        background: HeaderBackground::Image {
            src: "https://cdn.example/hero.jpg".to_string(),
            focal_x: None,
            focal_y: None,
            blur: None,
            opacity: None,
        },
        overlay_enabled: Some(true),
        overlay: Some(Overlay {
            opacity: Some(60.0),
            ..Default::default()
        }),
        typography: None,
        height_vh: None,
        animation: None,
    }
}

#[test]
fn test_header_overlay_sits_between_image_and_content() {
    let node = render_block(&overlay_header(), DeviceKind::Desktop);

    let image_index = node.child_index_of("header-bg-image").unwrap();
    let overlay_index = node.child_index_of("header-overlay").unwrap();
    let content_index = node.child_index_of("header-content").unwrap();

    assert!(image_index < overlay_index, "overlay must be above the image");
    assert!(overlay_index < content_index, "overlay must be below the title");

    let overlay = &node.children()[overlay_index];
    assert_eq!(overlay.style("opacity"), Some("0.6"));
}

#[test]
fn test_overlay_needs_explicit_tint() {
    let mut block = overlay_header();
    if let Block::Header { overlay, .. } = &mut block {
        // Enabled, but neither color nor opacity was set.
        *overlay = Some(Overlay {
            brightness: Some(110.0),
            ..Default::default()
        });
    }
    let node = render_block(&block, DeviceKind::Desktop);
    assert!(node.child_index_of("header-overlay").is_none());
}

#[test]
fn test_overlay_skipped_for_color_background() {
    let mut block = overlay_header();
    if let Block::Header { background, .. } = &mut block {
        *background = HeaderBackground::Color { color: Some("#222".to_string()) };
    }
    let node = render_block(&block, DeviceKind::Desktop);
    assert!(node.child_index_of("header-overlay").is_none());
}

#[test]
fn test_overlay_skipped_when_disabled() {
    let mut block = overlay_header();
    if let Block::Header { overlay_enabled, .. } = &mut block {
        *overlay_enabled = Some(false);
    }
    let node = render_block(&block, DeviceKind::Desktop);
    assert!(node.child_index_of("header-overlay").is_none());
}

#[test]
fn test_gradient_background_supports_overlay() {
    let mut block = overlay_header();
    if let Block::Header { background, .. } = &mut block {
        *background = HeaderBackground::Gradient {
            from: "#7c2d12".to_string(),
            to: "#431407".to_string(),
            angle: Some(135.0),
        };
    }
    let node = render_block(&block, DeviceKind::Desktop);
    assert_eq!(
        node.style("background-image"),
        Some("linear-gradient(135deg, #7c2d12, #431407)")
    );
    assert!(node.child_index_of("header-overlay").is_some());
}

#[test]
fn test_animation_attaches_named_transition() {
    let mut block = Block::new(BlockKind::Heading);
    if let Block::Heading { animation, .. } = &mut block {
        *animation = Some(Animation {
            kind: Some(AnimationKind::SlideUp),
            duration_ms: Some(600.0),
            delay_ms: Some(150.0),
        });
    }

    let node = render_block(&block, DeviceKind::Desktop);
    assert!(node.has_class("anim"));
    assert!(node.has_class("anim-slide-up"));
    assert_eq!(node.style("animation-duration"), Some("600ms"));
    assert_eq!(node.style("animation-delay"), Some("150ms"));
}

#[test]
fn test_disabled_animation_attaches_nothing_at_all() {
    let node = render_block(&Block::new(BlockKind::Heading), DeviceKind::Desktop);
    assert!(!node.has_class("anim"));
    assert!(node.style("animation-duration").is_none());
    assert!(node.style("animation-delay").is_none());
}

fn wrap_column(side: ImageSide, wrap: bool) -> Block {
    let mut image = Block::new(BlockKind::Image);
    if let Block::Image { src, .. } = &mut image {
        *src = "https://cdn.example/dish.jpg".to_string();
    }
    let mut text = Block::new(BlockKind::Text);
    if let Block::Text { text, .. } = &mut text {
        *text = "A long description that wants to flow around the photo".to_string();
    }

    Block::TwoCol {
        id: BlockId::new(),
        left: Column {
            text: Some(Box::new(text)),
            image: Some(Box::new(image)),
            wrap: Some(wrap),
            image_side: Some(side),
            wrap_gap: None,
        },
        right: Column::default(),
        ratio: None,
        gap: None,
        padding: None,
        animation: None,
    }
}

#[test]
fn test_wrap_floats_image_with_shape_exclusion() {
    let node = render_block(&wrap_column(ImageSide::Right, true), DeviceKind::Desktop);
    let column = node.find_class("column-wrap").unwrap();

    let image = column.find_class("image-block").unwrap();
    assert_eq!(image.style("float"), Some("right"));
    assert_eq!(image.style("shape-outside"), Some("margin-box"));
    assert!(image.style("margin-left").is_some());
    // Floated image precedes the text in flow order.
    assert_eq!(column.child_index_of("image-block"), Some(0));
}

#[test]
fn test_top_bottom_alignment_stacks_instead_of_wrapping() {
    // Wrap is mutually exclusive with vertical alignment.
    let node = render_block(&wrap_column(ImageSide::Bottom, true), DeviceKind::Desktop);
    assert!(node.find_class("column-wrap").is_none());

    let column = node.find_class("column").unwrap();
    assert_eq!(column.style("flex-direction"), Some("column"));
    assert_eq!(column.child_index_of("text-block"), Some(0));
    assert_eq!(column.child_index_of("image-block"), Some(1));
}
