//! Per-block rendering behavior.

use crate::device::DeviceKind;
use crate::render::{render, render_block, render_config};
use bloq_model::{
    Background, Block, BlockId, BlockKind, ButtonVariant, Column, CompositionConfig, ImageSide,
    LayoutMode, Position, Typography,
};

fn text_block(content: &str) -> Block {
    let mut block = Block::new(BlockKind::Text);
    if let Block::Text { text, .. } = &mut block {
        *text = content.to_string();
    }
    block
}

#[test]
fn test_render_is_deterministic() {
    let blocks = vec![
        Block::new(BlockKind::Header),
        text_block("hello"),
        Block::new(BlockKind::Button),
        Block::new(BlockKind::TwoCol),
    ];
    let first = render(&blocks, DeviceKind::Tablet);
    let second = render(&blocks, DeviceKind::Tablet);
    assert_eq!(first, second);
}

#[test]
fn test_structured_order_follows_array_order() {
    let blocks = vec![text_block("one"), text_block("two"), text_block("three")];
    let tree = render(&blocks, DeviceKind::Desktop);
    assert_eq!(tree.nodes.len(), 3);
    assert_eq!(tree.nodes[0].text_content(), "one");
    assert_eq!(tree.nodes[2].text_content(), "three");
}

#[test]
fn test_heading_and_text_use_distinct_tags_and_defaults() {
    let heading = render_block(&Block::new(BlockKind::Heading), DeviceKind::Desktop);
    let text = render_block(&Block::new(BlockKind::Text), DeviceKind::Desktop);

    let heading_content = heading.find_class("block-content").unwrap();
    let text_content = text.find_class("block-content").unwrap();
    assert_eq!(heading_content.tag(), Some("h2"));
    assert_eq!(text_content.tag(), Some("p"));
    // Block-kind defaults differ along the same fallback chain.
    assert_eq!(heading_content.style("font-size"), Some("32px"));
    assert_eq!(text_content.style("font-size"), Some("16px"));
}

#[test]
fn test_button_solid_variant_and_new_tab() {
    let mut block = Block::new(BlockKind::Button);
    if let Block::Button {
        href,
        new_tab,
        shadow,
        ..
    } = &mut block
    {
        *href = Some("https://example.com/menu".to_string());
        *new_tab = Some(true);
        *shadow = Some(true);
    }

    let node = render_block(&block, DeviceKind::Desktop);
    assert_eq!(node.tag(), Some("a"));
    assert!(node.has_class("btn-solid"));
    assert_eq!(node.attr("href"), Some("https://example.com/menu"));
    assert_eq!(node.attr("target"), Some("_blank"));
    assert_eq!(node.attr("rel"), Some("noopener"));
    assert!(node.style("box-shadow").is_some());
    assert_eq!(node.style("background-color"), Some("#c2410c"));
}

#[test]
fn test_button_outline_uses_border_not_fill() {
    let mut block = Block::new(BlockKind::Button);
    if let Block::Button { variant, color, .. } = &mut block {
        *variant = Some(ButtonVariant::Outline);
        *color = Some("#0f766e".to_string());
    }

    let node = render_block(&block, DeviceKind::Desktop);
    assert!(node.has_class("btn-outline"));
    assert_eq!(node.style("background-color"), Some("transparent"));
    assert_eq!(node.style("border"), Some("2px solid #0f766e"));
    assert_eq!(node.style("color"), Some("#0f766e"));
}

#[test]
fn test_divider_defaults() {
    let node = render_block(&Block::new(BlockKind::Divider), DeviceKind::Desktop);
    assert_eq!(node.tag(), Some("hr"));
    assert_eq!(node.style("height"), Some("1px"));
    assert_eq!(node.style("border"), Some("none"));
    assert_eq!(node.style("background-color"), Some("#e5e7eb"));
}

#[test]
fn test_spacer_height_uses_spacing_scale() {
    let node = render_block(&Block::new(BlockKind::Spacer), DeviceKind::Mobile);
    // 32 default × 0.6 spacing scale.
    assert_eq!(node.style("height"), Some("19.2px"));
}

#[test]
fn test_image_attributes_and_focal_point() {
    let mut block = Block::new(BlockKind::Image);
    if let Block::Image {
        src,
        alt,
        focal_x,
        focal_y,
        corner_radius,
        ..
    } = &mut block
    {
        *src = "https://cdn.example/hero.jpg".to_string();
        *alt = Some("Wood-fired oven".to_string());
        *focal_x = Some(25.0);
        *focal_y = Some(75.0);
        *corner_radius = Some(12.0);
    }

    let node = render_block(&block, DeviceKind::Desktop);
    let img = node
        .children()
        .iter()
        .find(|c| c.tag() == Some("img"))
        .unwrap();
    assert_eq!(img.attr("src"), Some("https://cdn.example/hero.jpg"));
    assert_eq!(img.attr("alt"), Some("Wood-fired oven"));
    assert_eq!(img.style("object-fit"), Some("cover"));
    assert_eq!(img.style("object-position"), Some("25% 75%"));
    assert_eq!(img.style("border-radius"), Some("12px"));
}

#[test]
fn test_typography_fallback_chain_is_stable_across_sparse_records() {
    // An empty typography record must resolve exactly like no record.
    let bare = text_block("a");
    let mut sparse = text_block("a");
    if let Block::Text { typography, .. } = &mut sparse {
        *typography = Some(Typography::default());
    }

    let bare_node = render_block(&bare, DeviceKind::Tablet);
    let sparse_node = render_block(&sparse, DeviceKind::Tablet);
    let bare_content = bare_node.find_class("block-content").unwrap();
    let sparse_content = sparse_node.find_class("block-content").unwrap();
    assert_eq!(
        bare_content.style("font-size"),
        sparse_content.style("font-size")
    );
    assert_eq!(bare_content.style("color"), sparse_content.style("color"));
}

#[test]
fn test_freeform_placement_and_z_order() {
    let mut config = CompositionConfig::new(LayoutMode::Freeform);
    config.blocks.push(text_block("back"));
    config.blocks.push(text_block("front"));
    let back = config.blocks[0].id();
    let front = config.blocks[1].id();
    config.positions.insert(
        back,
        Position {
            x_pct: 10.0,
            y_pct: 20.0,
            w_pct: Some(40.0),
            ..Default::default()
        },
    );
    config.positions.insert(
        front,
        Position {
            x_pct: 15.0,
            y_pct: 25.0,
            z: Some(40),
            rotate_deg: Some(10.0),
            ..Default::default()
        },
    );

    let tree = render_config(&config, DeviceKind::Desktop);
    let canvas = &tree.nodes[0];
    assert!(canvas.has_class("freeform"));
    assert_eq!(canvas.style("position"), Some("relative"));

    let items = canvas.children();
    assert_eq!(items[0].style("left"), Some("10%"));
    assert_eq!(items[0].style("top"), Some("20%"));
    assert_eq!(items[0].style("width"), Some("40%"));
    // Array index breaks ties when no explicit z is stored.
    assert_eq!(items[0].style("z-index"), Some("0"));
    // Explicit z wins.
    assert_eq!(items[1].style("z-index"), Some("40"));
    assert_eq!(items[1].style("transform"), Some("rotate(10deg)"));
}

#[test]
fn test_block_without_position_defaults_to_origin() {
    let mut config = CompositionConfig::new(LayoutMode::Freeform);
    config.blocks.push(text_block("loose"));

    let tree = render_config(&config, DeviceKind::Desktop);
    let item = &tree.nodes[0].children()[0];
    assert_eq!(item.style("left"), Some("0%"));
    assert_eq!(item.style("top"), Some("0%"));
}

#[test]
fn test_page_background_applies_to_canvas() {
    let mut config = CompositionConfig::new(LayoutMode::Structured);
    config.background = Some(Background {
        color: Some("#fffbeb".to_string()),
        ..Default::default()
    });

    let tree = render_config(&config, DeviceKind::Desktop);
    assert_eq!(tree.nodes[0].style("background-color"), Some("#fffbeb"));
}

#[test]
fn test_two_col_ratio_controls_flex_basis() {
    let block = Block::TwoCol {
        id: BlockId::new(),
        left: Column::default(),
        right: Column::default(),
        ratio: Some(70.0),
        gap: Some(30.0),
        padding: None,
        animation: None,
    };

    let node = render_block(&block, DeviceKind::Desktop);
    let columns = node.children();
    assert_eq!(columns[0].style("flex-basis"), Some("70%"));
    assert_eq!(columns[1].style("flex-basis"), Some("30%"));
    assert_eq!(node.style("gap"), Some("30px"));
}

#[test]
fn test_nested_column_blocks_render_as_full_blocks() {
    let block = Block::TwoCol {
        id: BlockId::new(),
        left: Column {
            text: Some(Box::new(text_block("inside"))),
            image: None,
            wrap: None,
            image_side: Some(ImageSide::Top),
            wrap_gap: None,
        },
        right: Column::default(),
        ratio: None,
        gap: None,
        padding: None,
        animation: None,
    };

    let node = render_block(&block, DeviceKind::Desktop);
    let nested = node.find_class("text-block").unwrap();
    assert_eq!(nested.text_content(), "inside");
}
