//! # Renderer
//!
//! Pure function from a block collection and a device kind to a visual
//! tree.
//!
//! ## Determinism contract
//!
//! **INVARIANT: rendering is fully deterministic.**
//!
//! For any block collection + device kind, `render()` MUST produce an
//! identical tree on every invocation:
//!
//! - Same blocks → same node structure, byte-for-byte
//! - Style and attribute maps are ordered
//! - No I/O, no mutation of inputs, no time/random/environment reads
//!
//! Device kind is a rendering input, not block state: the host re-runs
//! the renderer whenever the viewport crosses a breakpoint boundary,
//! even when the blocks are unchanged.
//!
//! ## Composition order
//!
//! Backgrounds layer bottom to top: fill (color or gradient) → image →
//! overlay tint → foreground content. The overlay is only composed when
//! the fill mode is gradient or image AND a tint was explicitly set.

use crate::device::DeviceKind;
use crate::tokens::*;
use crate::vnode::{VisualNode, VisualTree};
use bloq_model::{
    Alignment, Animation, Background, Block, ButtonVariant, Column, CompositionConfig,
    HeaderBackground, ImageFit, ImageSide, LayoutMode, Overlay, PageLayout, Position, Spacing,
    Typography,
};
use tracing::{debug, instrument};

/// Render a block collection in document order.
#[instrument(skip(blocks), fields(blocks = blocks.len(), device = ?device))]
pub fn render(blocks: &[Block], device: DeviceKind) -> VisualTree {
    let mut tree = VisualTree::new();
    for block in blocks {
        debug!(block_id = %block.id(), kind = %block.kind(), "rendering block");
        tree.add_node(render_block(block, device));
    }
    tree
}

/// Render a whole composition: page background, structured flow or
/// freeform canvas, and every block.
#[instrument(skip(config), fields(blocks = config.blocks.len(), mode = ?config.mode, device = ?device))]
pub fn render_config(config: &CompositionConfig, device: DeviceKind) -> VisualTree {
    let mut canvas = VisualNode::element("div").with_class("canvas");
    canvas = compose_background(canvas, config.background.as_ref(), None);

    match config.mode {
        LayoutMode::Structured => {
            canvas = canvas.with_class("structured");
            if config.layout == Some(PageLayout::Split) {
                canvas = canvas.with_class("layout-split");
            }
            if let Some(align) = config.structured_group_align {
                canvas = canvas.with_style("text-align", align_css(align));
            }
            for block in &config.blocks {
                canvas = canvas.with_child(render_block(block, device));
            }
        }
        LayoutMode::Freeform => {
            canvas = canvas
                .with_class("freeform")
                .with_style("position", "relative");
            for (index, block) in config.blocks.iter().enumerate() {
                let position = config
                    .positions
                    .get(&block.id())
                    .copied()
                    .unwrap_or_default();
                canvas = canvas.with_child(freeform_item(
                    render_block(block, device),
                    position,
                    index,
                ));
            }
        }
    }

    let mut tree = VisualTree::new();
    tree.add_node(canvas);
    tree
}

/// Render one block to its visual subtree.
pub fn render_block(block: &Block, device: DeviceKind) -> VisualNode {
    match block {
        Block::Heading {
            text,
            align,
            typography,
            background,
            spacing,
            overlay,
            animation,
            ..
        } => render_text_like(
            block,
            "h2",
            "heading-block",
            text,
            *align,
            typography.as_ref(),
            background.as_ref(),
            spacing.as_ref(),
            overlay.as_ref(),
            animation.as_ref(),
            DEFAULT_HEADING_SIZE,
            device,
        ),

        Block::Text {
            text,
            align,
            typography,
            background,
            spacing,
            overlay,
            animation,
            ..
        } => render_text_like(
            block,
            "p",
            "text-block",
            text,
            *align,
            typography.as_ref(),
            background.as_ref(),
            spacing.as_ref(),
            overlay.as_ref(),
            animation.as_ref(),
            DEFAULT_TEXT_SIZE,
            device,
        ),

        Block::Image { .. } => render_image(block, device),
        Block::Button { .. } => render_button(block, device),
        Block::Divider { .. } => render_divider(block, device),
        Block::Spacer { .. } => render_spacer(block, device),
        Block::TwoCol { .. } => render_two_col(block, device),
        Block::Header { .. } => render_header(block, device),
    }
}

fn container(block: &Block, kind_class: &str) -> VisualNode {
    VisualNode::element("div")
        .with_class("block")
        .with_class(kind_class)
        .with_attr("data-block-id", block.id().to_string())
}

#[allow(clippy::too_many_arguments)]
fn render_text_like(
    block: &Block,
    content_tag: &str,
    kind_class: &str,
    text: &str,
    align: Option<Alignment>,
    typography: Option<&Typography>,
    background: Option<&Background>,
    spacing: Option<&Spacing>,
    overlay: Option<&Overlay>,
    animation: Option<&Animation>,
    base_size: f64,
    device: DeviceKind,
) -> VisualNode {
    let mut node = container(block, kind_class);
    node = apply_spacing(node, spacing, device);
    node = compose_background(node, background, overlay);

    let mut content = VisualNode::element(content_tag)
        .with_class("block-content")
        .with_child(VisualNode::text(text));
    content = apply_typography(content, typography, base_size, DEFAULT_TEXT_COLOR, device);
    if let Some(align) = align {
        content = content.with_style("text-align", align_css(align));
    }

    node = node.with_child(content);
    apply_animation(node, animation)
}

fn render_image(block: &Block, device: DeviceKind) -> VisualNode {
    let Block::Image {
        src,
        alt,
        width_pct,
        fit,
        aspect_ratio,
        focal_x,
        focal_y,
        corner_radius,
        background,
        overlay,
        animation,
        ..
    } = block
    else {
        unreachable!("render_image called on non-image block");
    };

    let mut node = container(block, "image-block")
        .with_style("position", "relative")
        .with_style(
            "width",
            pct(resolve(*width_pct, WIDTH_PCT_RANGE, 100.0)),
        );
    node = compose_background(node, background.as_ref(), None);

    let mut img = VisualNode::element("img")
        .with_attr("src", src)
        .with_attr("alt", alt.clone().unwrap_or_default())
        .with_style("width", "100%")
        .with_style("object-fit", fit.unwrap_or(ImageFit::Cover).as_css())
        .with_style(
            "object-position",
            format!(
                "{}% {}%",
                fmt(resolve(*focal_x, FOCAL_RANGE, 50.0)),
                fmt(resolve(*focal_y, FOCAL_RANGE, 50.0)),
            ),
        );
    if let Some(ratio) = aspect_ratio {
        img = img.with_style("aspect-ratio", fmt(clamp_to(*ratio, ASPECT_RATIO_RANGE)));
    }
    if let Some(radius) = corner_radius {
        img = img.with_style("border-radius", px(clamp_to(*radius, RADIUS_RANGE)));
    }
    node = node.with_child(img);

    // The img itself is the image layer here; an explicit tint sits
    // above it and below any caption content.
    if let Some(overlay) = overlay {
        if overlay.is_tinted() {
            node = node.with_child(overlay_layer(overlay, "block-overlay"));
        }
    }

    apply_animation(node, animation.as_ref())
}

fn render_button(block: &Block, device: DeviceKind) -> VisualNode {
    let Block::Button {
        label,
        href,
        new_tab,
        variant,
        color,
        text_color,
        typography,
        spacing,
        radius,
        shadow,
        animation,
        ..
    } = block
    else {
        unreachable!("render_button called on non-button block");
    };

    let variant = variant.unwrap_or(ButtonVariant::Solid);
    let accent = color.as_deref().unwrap_or(DEFAULT_ACCENT_COLOR);

    let mut node = VisualNode::element("a")
        .with_class("block")
        .with_class("button-block")
        .with_class("btn")
        .with_attr("data-block-id", block.id().to_string())
        .with_attr("href", href.as_deref().unwrap_or("#"))
        .with_style("display", "inline-block")
        .with_style("text-decoration", "none");

    if *new_tab == Some(true) {
        node = node
            .with_attr("target", "_blank")
            .with_attr("rel", "noopener");
    }

    node = match variant {
        ButtonVariant::Solid => node
            .with_class("btn-solid")
            .with_style("background-color", accent)
            .with_style(
                "color",
                text_color.as_deref().unwrap_or(DEFAULT_BUTTON_TEXT_COLOR),
            ),
        ButtonVariant::Outline => node
            .with_class("btn-outline")
            .with_style("background-color", "transparent")
            .with_style("border", format!("2px solid {accent}"))
            .with_style("color", text_color.as_deref().unwrap_or(accent)),
        ButtonVariant::Ghost => node
            .with_class("btn-ghost")
            .with_style("background-color", "transparent")
            .with_style("color", text_color.as_deref().unwrap_or(accent)),
    };

    node = apply_typography(
        node,
        typography.as_ref(),
        DEFAULT_BUTTON_SIZE,
        DEFAULT_BUTTON_TEXT_COLOR,
        device,
    );
    // Typography color resolution targets body text; the variant rules
    // above already picked the button color, so restore it when no
    // explicit typography color overrides it.
    if typography.as_ref().and_then(|t| t.color.as_ref()).is_none() {
        node = match variant {
            ButtonVariant::Solid => node.with_style(
                "color",
                text_color.as_deref().unwrap_or(DEFAULT_BUTTON_TEXT_COLOR),
            ),
            ButtonVariant::Outline | ButtonVariant::Ghost => {
                node.with_style("color", text_color.as_deref().unwrap_or(accent))
            }
        };
    }

    if spacing.is_some() {
        node = apply_spacing(node, spacing.as_ref(), device);
    } else {
        let scale = device.spacing_scale();
        node = node
            .with_style("padding-top", px(scaled(DEFAULT_BUTTON_PADDING_Y, scale)))
            .with_style("padding-bottom", px(scaled(DEFAULT_BUTTON_PADDING_Y, scale)))
            .with_style("padding-left", px(scaled(DEFAULT_BUTTON_PADDING_X, scale)))
            .with_style("padding-right", px(scaled(DEFAULT_BUTTON_PADDING_X, scale)));
    }

    if let Some(radius) = radius {
        node = node.with_style("border-radius", px(clamp_to(*radius, RADIUS_RANGE)));
    }
    if *shadow == Some(true) {
        node = node.with_style("box-shadow", "0 2px 8px rgba(0, 0, 0, 0.25)");
    }

    node = node.with_child(VisualNode::text(label));
    apply_animation(node, animation.as_ref())
}

fn render_divider(block: &Block, device: DeviceKind) -> VisualNode {
    let Block::Divider {
        thickness,
        color,
        spacing,
        animation,
        ..
    } = block
    else {
        unreachable!("render_divider called on non-divider block");
    };

    let mut node = VisualNode::element("hr")
        .with_class("block")
        .with_class("divider-block")
        .with_attr("data-block-id", block.id().to_string())
        .with_style("border", "none")
        .with_style("height", px(resolve(*thickness, THICKNESS_RANGE, 1.0)))
        .with_style(
            "background-color",
            color.as_deref().unwrap_or(DEFAULT_DIVIDER_COLOR),
        );
    node = apply_spacing(node, spacing.as_ref(), device);
    apply_animation(node, animation.as_ref())
}

fn render_spacer(block: &Block, device: DeviceKind) -> VisualNode {
    let Block::Spacer {
        height, background, ..
    } = block
    else {
        unreachable!("render_spacer called on non-spacer block");
    };

    let height = scaled(
        resolve(*height, SPACER_HEIGHT_RANGE, 32.0),
        device.spacing_scale(),
    );
    let node = container(block, "spacer-block").with_style("height", px(height));
    compose_background(node, background.as_ref(), None)
}

fn render_two_col(block: &Block, device: DeviceKind) -> VisualNode {
    let Block::TwoCol {
        left,
        right,
        ratio,
        gap,
        padding,
        animation,
        ..
    } = block
    else {
        unreachable!("render_two_col called on non-two-col block");
    };

    let ratio = resolve(*ratio, RATIO_RANGE, 50.0);
    let gap = scaled(
        resolve(*gap, GAP_RANGE, DEFAULT_TWO_COL_GAP),
        device.spacing_scale(),
    );

    let mut node = container(block, "two-col-block")
        .with_style("display", "flex")
        .with_style("gap", px(gap));
    if let Some(padding) = padding {
        node = node.with_style(
            "padding",
            px(scaled(
                clamp_to(*padding, PADDING_RANGE),
                device.spacing_scale(),
            )),
        );
    }

    let left = render_column(left, device).with_style("flex-basis", pct(ratio));
    let right = render_column(right, device).with_style("flex-basis", pct(100.0 - ratio));
    node = node.with_child(left).with_child(right);
    apply_animation(node, animation.as_ref())
}

fn render_column(column: &Column, device: DeviceKind) -> VisualNode {
    let mut node = VisualNode::element("div").with_class("column");

    let image = column.image.as_deref().map(|b| render_block(b, device));
    let text = column.text.as_deref().map(|b| render_block(b, device));
    let side = column.image_side.unwrap_or(ImageSide::Top);
    let wrap = column.wrap == Some(true) && side.supports_wrap();

    if wrap {
        if let Some(image) = image {
            // Float with a shape exclusion so the following text flows
            // around the image. Mutually exclusive with top/bottom,
            // which always stack.
            let gap = scaled(
                resolve(column.wrap_gap, GAP_RANGE, DEFAULT_WRAP_GAP),
                device.spacing_scale(),
            );
            let (float_side, gap_margin) = match side {
                ImageSide::Left => ("left", "margin-right"),
                _ => ("right", "margin-left"),
            };
            let image = image
                .with_style("float", float_side)
                .with_style("shape-outside", "margin-box")
                .with_style(gap_margin, px(gap))
                .with_style("margin-bottom", px(gap));
            node = node.with_class("column-wrap").with_child(image);
            if let Some(text) = text {
                node = node.with_child(text);
            }
            return node;
        }
        if let Some(text) = text {
            node = node.with_child(text);
        }
        return node;
    }

    let (direction, ordered) = match side {
        ImageSide::Top => ("column", [image, text]),
        ImageSide::Bottom => ("column", [text, image]),
        ImageSide::Left => ("row", [image, text]),
        ImageSide::Right => ("row", [text, image]),
    };
    node = node
        .with_style("display", "flex")
        .with_style("flex-direction", direction);
    for child in ordered.into_iter().flatten() {
        node = node.with_child(child);
    }
    node
}

fn render_header(block: &Block, device: DeviceKind) -> VisualNode {
    let Block::Header {
        title,
        subtitle,
        tagline,
        background,
        overlay_enabled,
        overlay,
        typography,
        height_vh,
        animation,
        ..
    } = block
    else {
        unreachable!("render_header called on non-header block");
    };

    let mut node = VisualNode::element("header")
        .with_class("block")
        .with_class("header-block")
        .with_attr("data-block-id", block.id().to_string())
        .with_style("position", "relative")
        .with_style(
            "height",
            format!("{}vh", fmt(resolve(*height_vh, HEADER_HEIGHT_VH_RANGE, 60.0))),
        );

    // Fill layer.
    match background {
        HeaderBackground::Color { color } => {
            node = node.with_style(
                "background-color",
                color.as_deref().unwrap_or(DEFAULT_HEADER_BG_COLOR),
            );
        }
        HeaderBackground::Gradient { from, to, angle } => {
            node = node.with_style(
                "background-image",
                format!(
                    "linear-gradient({}deg, {from}, {to})",
                    fmt(angle.map_or(180.0, |a| clamp_to(a, (0.0, 360.0))))
                ),
            );
        }
        HeaderBackground::Image {
            src,
            focal_x,
            focal_y,
            blur,
            opacity,
        } => {
            let mut layer = VisualNode::element("div")
                .with_class("header-bg-image")
                .with_style("position", "absolute")
                .with_style("inset", "0")
                .with_style("background-image", format!("url({src})"))
                .with_style("background-size", "cover")
                .with_style(
                    "background-position",
                    format!(
                        "{}% {}%",
                        fmt(resolve(*focal_x, FOCAL_RANGE, 50.0)),
                        fmt(resolve(*focal_y, FOCAL_RANGE, 50.0)),
                    ),
                );
            if let Some(blur) = blur {
                layer = layer.with_style("filter", format!("blur({}px)", fmt(clamp_to(*blur, BLUR_RANGE))));
            }
            if let Some(opacity) = opacity {
                layer = layer.with_style("opacity", fmt(clamp_to(*opacity, OPACITY_RANGE) / 100.0));
            }
            node = node.with_child(layer);
        }
    }

    // Overlay tint: gradient/image fills only, and only when the
    // operator explicitly set a tint.
    if *overlay_enabled == Some(true) && background.supports_overlay() {
        if let Some(overlay) = overlay {
            if overlay.is_tinted() {
                node = node.with_child(overlay_layer(overlay, "header-overlay"));
            }
        }
    }

    // Foreground content always sits above every background layer.
    let mut content = VisualNode::element("div")
        .with_class("header-content")
        .with_style("position", "relative");

    let mut title_node = VisualNode::element("h1")
        .with_class("header-title")
        .with_child(VisualNode::text(title));
    title_node = apply_typography(
        title_node,
        typography.as_ref(),
        DEFAULT_HEADER_TITLE_SIZE,
        DEFAULT_HEADER_TEXT_COLOR,
        device,
    );
    content = content.with_child(title_node);

    if let Some(subtitle) = subtitle {
        let size = scaled(DEFAULT_HEADER_SUBTITLE_SIZE, device.font_scale());
        let color = typography
            .as_ref()
            .and_then(|t| t.color.as_deref())
            .unwrap_or(DEFAULT_HEADER_TEXT_COLOR);
        content = content.with_child(
            VisualNode::element("p")
                .with_class("header-subtitle")
                .with_style("font-size", px(size))
                .with_style("color", color)
                .with_child(VisualNode::text(subtitle)),
        );
    }

    if let Some(tagline) = tagline {
        content = content.with_child(
            VisualNode::element("span")
                .with_class("header-tagline")
                .with_child(VisualNode::text(tagline)),
        );
    }

    node = node.with_child(content);
    apply_animation(node, animation.as_ref())
}

/// Layer a generic background onto a container: fill color on the
/// container itself, then an image layer, then an overlay tint when the
/// image is present and a tint was explicitly set. Content children are
/// appended by the caller afterwards, which keeps them on top.
fn compose_background(
    mut node: VisualNode,
    background: Option<&Background>,
    overlay: Option<&Overlay>,
) -> VisualNode {
    let Some(background) = background else {
        return node;
    };

    if let Some(color) = &background.color {
        node = node.with_style("background-color", color);
    }

    if let Some(image) = &background.image {
        node = node.with_style("position", "relative");
        let mut layer = VisualNode::element("div")
            .with_class("block-bg-image")
            .with_style("position", "absolute")
            .with_style("inset", "0")
            .with_style("background-image", format!("url({image})"))
            .with_style("background-size", "cover")
            .with_style("background-position", "center");
        if let Some(opacity) = background.opacity {
            layer = layer.with_style("opacity", fmt(clamp_to(opacity, OPACITY_RANGE) / 100.0));
        }
        if let Some(blur) = background.blur {
            layer = layer.with_style("filter", format!("blur({}px)", fmt(clamp_to(blur, BLUR_RANGE))));
        }
        node = node.with_child(layer);

        if let Some(overlay) = overlay {
            if overlay.is_tinted() {
                node = node.with_child(overlay_layer(overlay, "block-overlay"));
            }
        }
    }

    node
}

fn overlay_layer(overlay: &Overlay, class: &str) -> VisualNode {
    let mut node = VisualNode::element("div")
        .with_class(class)
        .with_style("position", "absolute")
        .with_style("inset", "0")
        .with_style(
            "background-color",
            overlay.color.as_deref().unwrap_or(DEFAULT_OVERLAY_COLOR),
        )
        .with_style(
            "opacity",
            fmt(resolve(overlay.opacity, OPACITY_RANGE, DEFAULT_OVERLAY_OPACITY) / 100.0),
        );

    let mut filters = Vec::new();
    if let Some(brightness) = overlay.brightness {
        filters.push(format!("brightness({}%)", fmt(clamp_to(brightness, FILTER_RANGE))));
    }
    if let Some(contrast) = overlay.contrast {
        filters.push(format!("contrast({}%)", fmt(clamp_to(contrast, FILTER_RANGE))));
    }
    if let Some(saturation) = overlay.saturation {
        filters.push(format!("saturate({}%)", fmt(clamp_to(saturation, FILTER_RANGE))));
    }
    if !filters.is_empty() {
        node = node.with_style("backdrop-filter", filters.join(" "));
    }

    node
}

fn apply_typography(
    mut node: VisualNode,
    typography: Option<&Typography>,
    base_size: f64,
    base_color: &str,
    device: DeviceKind,
) -> VisualNode {
    let explicit_size = typography.and_then(|t| t.font_size);
    let size = scaled(
        resolve(explicit_size, FONT_SIZE_RANGE, base_size),
        device.font_scale(),
    );
    node = node.with_style("font-size", px(size));

    let color = typography
        .and_then(|t| t.color.as_deref())
        .unwrap_or(base_color);
    node = node.with_style("color", color);

    if let Some(typography) = typography {
        match typography.bold {
            Some(true) => node = node.with_style("font-weight", "700"),
            Some(false) => node = node.with_style("font-weight", "400"),
            None => {}
        }
        if typography.italic == Some(true) {
            node = node.with_style("font-style", "italic");
        }
        if typography.underline == Some(true) {
            node = node.with_style("text-decoration", "underline");
        }
        if let Some(family) = &typography.font_family {
            node = node.with_style("font-family", family);
        }
        if let Some(spacing) = typography.letter_spacing {
            node = node.with_style(
                "letter-spacing",
                px(scaled(
                    clamp_to(spacing, LETTER_SPACING_RANGE),
                    device.font_scale(),
                )),
            );
        }
        if let Some(line_height) = typography.line_height {
            node = node.with_style("line-height", fmt(clamp_to(line_height, LINE_HEIGHT_RANGE)));
        }
    }

    node
}

fn apply_spacing(mut node: VisualNode, spacing: Option<&Spacing>, device: DeviceKind) -> VisualNode {
    let Some(spacing) = spacing else {
        return node;
    };
    let scale = device.spacing_scale();

    let paddings = [
        (spacing.padding_top, "padding-top"),
        (spacing.padding_right, "padding-right"),
        (spacing.padding_bottom, "padding-bottom"),
        (spacing.padding_left, "padding-left"),
    ];
    for (value, property) in paddings {
        if let Some(value) = value {
            node = node.with_style(property, px(scaled(clamp_to(value, PADDING_RANGE), scale)));
        }
    }

    let margins = [
        (spacing.margin_top, "margin-top"),
        (spacing.margin_bottom, "margin-bottom"),
    ];
    for (value, property) in margins {
        if let Some(value) = value {
            node = node.with_style(property, px(scaled(clamp_to(value, MARGIN_RANGE), scale)));
        }
    }

    node
}

/// Attach the named entrance transition, or nothing at all when the
/// block has no animation kind. Disabled is the absence of the class,
/// not a zero-duration transition.
fn apply_animation(node: VisualNode, animation: Option<&Animation>) -> VisualNode {
    let Some(animation) = animation else {
        return node;
    };
    let Some(kind) = animation.kind else {
        return node;
    };

    node.with_class("anim")
        .with_class(format!("anim-{}", kind.as_str()))
        .with_style(
            "animation-duration",
            ms(resolve(
                animation.duration_ms,
                ANIMATION_MS_RANGE,
                DEFAULT_ANIMATION_DURATION_MS,
            )),
        )
        .with_style(
            "animation-delay",
            ms(resolve(
                animation.delay_ms,
                ANIMATION_MS_RANGE,
                DEFAULT_ANIMATION_DELAY_MS,
            )),
        )
}

fn freeform_item(inner: VisualNode, position: Position, index: usize) -> VisualNode {
    let position = position.clamped();
    let mut node = VisualNode::element("div")
        .with_class("freeform-item")
        .with_style("position", "absolute")
        .with_style("left", pct(position.x_pct))
        .with_style("top", pct(position.y_pct));

    if let Some(w) = position.w_pct {
        node = node.with_style("width", pct(w));
    }
    if let Some(h) = position.h_pct {
        node = node.with_style("height", pct(h));
    }

    // Explicit z wins; array order breaks ties.
    let z = position.z.unwrap_or(index as i32);
    node = node.with_style("z-index", z.to_string());

    if let Some(deg) = position.rotate_deg {
        node = node.with_style("transform", format!("rotate({}deg)", fmt(deg)));
    }

    node.with_child(inner)
}

fn align_css(align: Alignment) -> &'static str {
    match align {
        Alignment::Left => "left",
        Alignment::Center => "center",
        Alignment::Right => "right",
    }
}

/// Scale and round to two decimals so binary float noise never leaks
/// into the output (40 × 0.65 must read 26, not 26.000000000000004).
fn scaled(value: f64, scale: f64) -> f64 {
    (value * scale * 100.0).round() / 100.0
}

fn fmt(value: f64) -> String {
    format!("{}", value)
}

fn px(value: f64) -> String {
    format!("{}px", value)
}

fn pct(value: f64) -> String {
    format!("{}%", value)
}

fn ms(value: f64) -> String {
    format!("{}ms", value)
}
