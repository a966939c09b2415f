//! Named end-to-end scenarios, through both the pure stages and the
//! stateful canvas.

use zencanvas::*;

const SCREEN: Region = Region::new(0, 0, 800, 600);

fn run(config: CanvasConfig, screen: Region, frame: FrameInfo) -> (InnerLayout, ClippedCanvas) {
    let layout = config.validate().unwrap().compute_inner(&frame);
    let clipped = layout.clip(screen, &frame);
    (layout, clipped)
}

#[test]
fn stretch_fills_outer() {
    let (layout, clipped) = run(CanvasConfig::new(SCREEN), SCREEN, FrameInfo::new(640, 480));
    assert_eq!(layout.inner_region, SCREEN);
    assert!(clipped.empty_regions.iter().all(Region::is_empty));
    assert_eq!(clipped.visibility_mask(), 0b1_0000);
    assert_eq!(clipped.source_subset, Rect::full(640, 480));
}

#[test]
fn matching_aspect_fills_outer() {
    let (layout, clipped) = run(
        CanvasConfig::new(SCREEN).keep_aspect_ratio(true),
        SCREEN,
        FrameInfo::new(640, 480),
    );
    assert_eq!(layout.inner_region, SCREEN);
    assert_eq!(clipped.visibility_mask(), 0b1_0000);
}

#[test]
fn widescreen_letterbox() {
    let (layout, clipped) = run(
        CanvasConfig::new(SCREEN).keep_aspect_ratio(true),
        SCREEN,
        FrameInfo::new(1280, 720),
    );
    assert_eq!(layout.inner_region, Region::new(0, 75, 800, 450));
    assert_eq!(clipped.empty_region(EmptyRegion::Top), Region::new(0, 0, 800, 75));
    assert_eq!(clipped.empty_region(EmptyRegion::Bottom), Region::new(0, 525, 800, 75));
    assert!(clipped.empty_region(EmptyRegion::Left).is_empty());
    assert!(clipped.empty_region(EmptyRegion::Right).is_empty());
    assert_eq!(clipped.visibility_mask(), 0b1_0011);
    assert_eq!(clipped.source_subset, Rect::full(1280, 720));
}

#[test]
fn outer_partially_off_left_edge() {
    let config = CanvasConfig::new(Region::new(-100, 0, 800, 600));
    let frame = FrameInfo::new(800, 600);

    let (_, clipped) = run(config.clone(), SCREEN, frame);
    assert_eq!(clipped.clipped_outer_region, Region::new(0, 0, 700, 600));
    assert_eq!(clipped.clipped_inner_region, Region::new(0, 0, 700, 600));
    assert!(clipped.empty_region(EmptyRegion::Left).is_empty());
    assert_eq!(clipped.visibility_mask(), 0b1_0000);
    // Left 100 source columns are off screen.
    assert_eq!(clipped.source_subset, Rect::new(100, 0, 700, 600));

    // Upside down, the hidden columns are on the source's right.
    let (_, clipped) = run(config.rotation(InnerRotation::Rotate180), SCREEN, frame);
    assert_eq!(clipped.source_subset, Rect::new(0, 0, 700, 600));
}

#[test]
fn margins_with_pillarbox() {
    let config = CanvasConfig::new(SCREEN)
        .margins(Margins::new(10, 20, 30, 40))
        .keep_aspect_ratio(true);
    let (layout, clipped) = run(config, SCREEN, FrameInfo::new(480, 640));
    // Available 760x540, 3:4 frame → 405x540, 355 leftover: 177 left, 178 right.
    assert_eq!(layout.available_region, Region::new(10, 20, 760, 540));
    assert_eq!(layout.inner_region, Region::new(187, 20, 405, 540));
    assert_eq!(clipped.empty_region(EmptyRegion::Top), Region::new(0, 0, 800, 20));
    assert_eq!(clipped.empty_region(EmptyRegion::Bottom), Region::new(0, 560, 800, 40));
    assert_eq!(clipped.empty_region(EmptyRegion::Left), Region::new(0, 20, 187, 540));
    assert_eq!(clipped.empty_region(EmptyRegion::Right), Region::new(592, 20, 208, 540));
    assert_eq!(clipped.visibility_mask(), 0b1_1111);
}

#[test]
fn quarter_turn_uses_transposed_aspect() {
    let config = CanvasConfig::new(SCREEN)
        .keep_aspect_ratio(true)
        .rotation(InnerRotation::Rotate90);
    let (layout, clipped) = run(config, SCREEN, FrameInfo::new(1280, 720));
    // Displayed 720x1280 → 337x600 centered.
    assert_eq!(layout.inner_region, Region::new(231, 0, 337, 600));
    assert_eq!(clipped.visibility_mask(), 0b1_1100);
}

#[test]
fn oversized_margins_degenerate_quietly() {
    let config = CanvasConfig::new(SCREEN)
        .margins(Margins::uniform(500))
        .keep_aspect_ratio(true);
    let (layout, clipped) = run(config, SCREEN, FrameInfo::new(640, 480));
    assert!(layout.available_region.is_empty());
    assert!(layout.inner_region.is_empty());
    assert!(!clipped.is_inner_visible());
    assert_eq!(clipped.source_subset, Rect::default());
    let painted: u64 = clipped.visible_empty_regions().map(|(_, r)| r.area()).sum();
    assert_eq!(painted, SCREEN.area());
}

#[test]
fn zero_size_frame_and_screen() {
    let (layout, clipped) = run(
        CanvasConfig::new(SCREEN).keep_aspect_ratio(true),
        SCREEN,
        FrameInfo::new(0, 0),
    );
    assert_eq!(layout.inner_region, SCREEN);
    assert_eq!(clipped.source_subset, Rect::default());

    let (_, clipped) = run(CanvasConfig::new(SCREEN), Region::EMPTY, FrameInfo::new(640, 480));
    assert_eq!(clipped.visibility_mask(), 0);
}

#[test]
fn negative_margins_rejected_at_configuration() {
    let err = Margins::try_from_signed(0, -1, 0, 0).unwrap_err();
    assert_eq!(
        err,
        CanvasError::NegativeMargin {
            side: MarginSide::Top,
            value: -1
        }
    );
    assert_eq!(err.to_string(), "top margin is negative (-1)");
}

#[test]
fn stateful_canvas_two_calls() {
    let config = CanvasConfig::new(Region::new(-100, 0, 800, 600))
        .keep_aspect_ratio(true)
        .fill_color(FillColor::from_rgba(0x10, 0x20, 0x30, 0xFF));
    let mut canvas = Canvas::new(config).unwrap();
    let frame = FrameInfo::new(1280, 720);

    assert_eq!(canvas.visibility_mask(), 0);
    assert_eq!(canvas.calculate_inner_region(&frame), Region::new(-100, 75, 800, 450));
    let subset = canvas.clip(SCREEN, &frame);

    // 100 of 800 screen columns hidden → 160 of 1280 source columns.
    assert_eq!(subset, Rect::new(160, 0, 1120, 720));
    assert_eq!(canvas.clipped_outer_region(), Region::new(0, 0, 700, 600));
    assert_eq!(canvas.clipped_inner_region(), Region::new(0, 75, 700, 450));
    assert_eq!(canvas.empty_regions()[EmptyRegion::Top.index()], Region::new(0, 0, 700, 75));
    assert_eq!(canvas.fill_color().to_u32(), 0x1020_30FF);
    assert!(canvas.visibility().contains(VisibleRegion::EmptyBottom));
    assert!(!canvas.visibility().contains(VisibleRegion::EmptyLeft));

    // Same inputs again: same outputs.
    let first = *canvas.clipped().unwrap();
    canvas.calculate_inner_region(&frame);
    canvas.clip(SCREEN, &frame);
    assert_eq!(*canvas.clipped().unwrap(), first);
}

#[test]
fn trace_events_reach_a_subscriber() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();

    let (_, clipped) = run(
        CanvasConfig::new(SCREEN).keep_aspect_ratio(true),
        SCREEN,
        FrameInfo::new(1280, 720),
    );
    assert!(clipped.is_inner_visible());
    assert!(
        CanvasConfig::new(Region::new(i32::MAX, 0, 10, 10))
            .validate()
            .is_err()
    );
}
