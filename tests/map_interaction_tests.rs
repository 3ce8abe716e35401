use quakemap::prelude::*;

fn assert_close(a: Point, b: Point) {
    assert!(
        (a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6,
        "expected {b:?}, got {a:?}"
    );
}

fn size() -> Size {
    Size::new(800.0, 600.0)
}

fn rendered_map(markers: Vec<EventMarker>) -> (QuakeMap, RenderContext) {
    let mut map = QuakeMap::new(size());
    map.set_markers(markers);
    let mut ctx = RenderContext::new(800.0, 600.0);
    map.render(Some(&mut ctx));
    (map, ctx)
}

fn selections(rx: &quakemap::crossbeam_channel::Receiver<MapEvent>) -> Vec<String> {
    rx.try_iter()
        .filter_map(|event| match event {
            MapEvent::MarkerSelected { id } => Some(id),
            MapEvent::ViewChanged { .. } => None,
        })
        .collect()
}

#[test]
fn test_center_on_puts_location_at_canvas_center() {
    let mut map = QuakeMap::new(size());
    let sf = GeoPoint::new(37.7749, -122.4194);
    map.center_on(&sf, 5.0);

    assert_eq!(map.transform().zoom(), 5.0);
    let device = map.transform().to_device(&project(&sf, size()));
    assert_close(device, Point::new(400.0, 300.0));
}

#[test]
fn test_wheel_zoom_keeps_pivot_fixed() {
    let (mut map, _) = rendered_map(Vec::new());
    let pivot = Point::new(200.0, 150.0);
    let under_pivot = map.transform().to_plane(&pivot);

    let response = map.handle_input(&InputEvent::Wheel {
        delta_y: 120.0,
        position: pivot,
    });

    assert!(response.prevent_default);
    assert!((map.transform().zoom() - 0.9).abs() < 1e-12);
    assert_close(map.transform().to_plane(&pivot), under_pivot);
}

#[test]
fn test_wheel_never_leaves_zoom_bounds() {
    let (mut map, _) = rendered_map(Vec::new());
    for _ in 0..50 {
        let response = map.handle_input(&InputEvent::Wheel {
            delta_y: -1.0,
            position: Point::new(10.0, 10.0),
        });
        assert!(response.prevent_default);
    }
    assert_eq!(map.transform().zoom(), 5.0);

    for _ in 0..80 {
        map.handle_input(&InputEvent::Wheel {
            delta_y: 1.0,
            position: Point::new(790.0, 590.0),
        });
    }
    assert_eq!(map.transform().zoom(), 0.5);
}

#[test]
fn test_click_selects_marker_under_pointer() {
    let (mut map, _) = rendered_map(vec![
        EventMarker::new("far", GeoPoint::new(45.0, 90.0), 4.0),
        EventMarker::new("origin", GeoPoint::new(0.0, 0.0), 6.5),
    ]);
    let events = map.subscribe();

    // (0, 0) projects to the middle of an 800x600 plane
    let position = Point::new(405.0, 298.0);
    map.handle_input(&InputEvent::PointerDown { position });
    map.handle_input(&InputEvent::PointerUp { position });
    map.handle_input(&InputEvent::Click { position });

    assert_eq!(selections(&events), vec!["origin".to_string()]);
}

#[test]
fn test_click_on_empty_map_selects_nothing() {
    let (mut map, _) = rendered_map(vec![EventMarker::new("a", GeoPoint::new(0.0, 0.0), 3.0)]);
    let events = map.subscribe();

    let response = map.handle_input(&InputEvent::Click {
        position: Point::new(20.0, 20.0),
    });

    assert_eq!(response.handled, EventHandled::NotHandled);
    assert!(selections(&events).is_empty());
}

#[test]
fn test_overlapping_markers_pick_first_in_draw_order() {
    let (mut map, _) = rendered_map(vec![
        EventMarker::new("first", GeoPoint::new(0.0, 0.0), 2.0),
        EventMarker::new("second", GeoPoint::new(0.0, 0.0), 7.5),
    ]);
    let events = map.subscribe();

    map.handle_input(&InputEvent::Click {
        position: Point::new(400.0, 300.0),
    });

    assert_eq!(selections(&events), vec!["first".to_string()]);
}

#[test]
fn test_drag_pan_depends_only_on_endpoints() {
    let (mut direct, _) = rendered_map(Vec::new());
    let (mut wandering, _) = rendered_map(Vec::new());

    let start = Point::new(100.0, 100.0);
    let end = Point::new(150.0, 130.0);

    direct.handle_input(&InputEvent::PointerDown { position: start });
    direct.handle_input(&InputEvent::PointerMove { position: end });
    direct.handle_input(&InputEvent::PointerUp { position: end });

    wandering.handle_input(&InputEvent::PointerDown { position: start });
    for step in 1..=40 {
        let t = step as f64;
        wandering.handle_input(&InputEvent::PointerMove {
            position: Point::new(100.0 + t * 7.3, 100.0 - t * 3.1),
        });
    }
    wandering.handle_input(&InputEvent::PointerMove { position: end });
    wandering.handle_input(&InputEvent::PointerUp { position: end });

    assert_close(direct.transform().pan(), Point::new(50.0, 30.0));
    assert_close(wandering.transform().pan(), direct.transform().pan());
    assert!(!direct.controller().is_dragging());
}

#[test]
fn test_click_ending_a_drag_is_ignored() {
    let (mut map, _) = rendered_map(vec![EventMarker::new("origin", GeoPoint::new(0.0, 0.0), 5.0)]);
    let events = map.subscribe();

    map.handle_input(&InputEvent::PointerDown {
        position: Point::new(380.0, 300.0),
    });
    map.handle_input(&InputEvent::PointerMove {
        position: Point::new(400.0, 300.0),
    });
    map.handle_input(&InputEvent::PointerUp {
        position: Point::new(400.0, 300.0),
    });
    map.handle_input(&InputEvent::Click {
        position: Point::new(400.0, 300.0),
    });

    assert!(selections(&events).is_empty());
}

#[test]
fn test_pointer_leave_ends_drag() {
    let (mut map, _) = rendered_map(Vec::new());
    map.handle_input(&InputEvent::PointerDown {
        position: Point::new(10.0, 10.0),
    });
    map.handle_input(&InputEvent::PointerLeave);

    let pan = map.transform().pan();
    map.handle_input(&InputEvent::PointerMove {
        position: Point::new(300.0, 300.0),
    });
    assert_eq!(map.transform().pan(), pan);
}

#[test]
fn test_strong_marker_style_at_any_zoom() {
    let marker = EventMarker::new("big", GeoPoint::new(0.0, 0.0), 6.5);
    let (mut map, mut ctx) = rendered_map(vec![marker]);

    for zoom in [1.0, 2.5, 5.0] {
        map.center_on(&GeoPoint::new(0.0, 0.0), zoom);
        map.render(Some(&mut ctx));

        let circles: Vec<_> = ctx.filled_circles().collect();
        assert_eq!(circles.len(), 1);
        let (center, radius, color) = circles[0];
        assert_close(center, Point::new(400.0, 300.0));
        assert!((radius - 20.0).abs() < 1e-9, "radius {radius} at zoom {zoom}");
        assert_eq!(color.to_hex(), "#ea580c");
        assert!(color.a < 255);
    }
}

#[test]
fn test_highlight_draws_opaque_outlined_marker() {
    let (mut map, mut ctx) = rendered_map(vec![
        EventMarker::new("a", GeoPoint::new(10.0, 10.0), 3.5),
        EventMarker::new("b", GeoPoint::new(-10.0, -10.0), 3.5),
    ]);
    map.set_highlighted(Some("b".to_string()));
    map.render(Some(&mut ctx));

    let alphas: Vec<u8> = ctx.filled_circles().map(|(_, _, color)| color.a).collect();
    assert_eq!(alphas.len(), 2);
    assert!(alphas[0] < 255);
    assert_eq!(alphas[1], 255);

    let outlines = ctx
        .get_drawing_queue()
        .iter()
        .filter(|cmd| matches!(cmd, DrawCommand::StrokeCircle { color, .. } if *color == Color::WHITE))
        .count();
    assert_eq!(outlines, 1);
}

#[test]
fn test_search_point_draws_ring_and_recenters() {
    let (mut map, mut ctx) = rendered_map(Vec::new());
    let point = parse_coordinates("35.68, 139.69").unwrap();
    map.set_search_point(Some(point));
    map.render(Some(&mut ctx));

    assert_eq!(map.transform().zoom(), 5.0);
    let ring = ctx.get_drawing_queue().iter().find_map(|cmd| match cmd {
        DrawCommand::StrokeCircle { center, radius, .. } => Some((*center, *radius)),
        _ => None,
    });
    let (center, radius) = ring.expect("search ring drawn");
    assert_close(center, Point::new(400.0, 300.0));
    assert!((radius - 14.0).abs() < 1e-9);
}

#[test]
fn test_feed_markers_are_clickable() {
    let feed = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "id": "older",
                "geometry": { "type": "Point", "coordinates": [-90.0, 45.0, 10.0] },
                "properties": { "mag": 4.2, "place": "Somewhere north", "time": 1000 }
            },
            {
                "id": "newer",
                "geometry": { "type": "Point", "coordinates": [90.0, -45.0, 5.0] },
                "properties": { "mag": 5.1, "place": "Somewhere south", "time": 2000 }
            }
        ]
    }"#;
    let markers = parse_feed(feed, &FeedFilter::default()).unwrap();
    assert_eq!(markers[0].id, "newer");

    let (mut map, _) = rendered_map(markers);
    let events = map.subscribe();

    // lng -90 / lat 45 lands at (200, 150) on 800x600
    map.handle_input(&InputEvent::Click {
        position: Point::new(201.0, 151.0),
    });
    assert_eq!(selections(&events), vec!["older".to_string()]);
}

#[test]
fn test_resize_keeps_view() {
    let (mut map, _) = rendered_map(Vec::new());
    map.handle_input(&InputEvent::Wheel {
        delta_y: -3.0,
        position: Point::new(100.0, 100.0),
    });
    let before = map.transform().clone();

    map.handle_input(&InputEvent::Resize {
        size: Size::new(1024.0, 768.0),
    });

    assert_eq!(map.transform(), &before);
    assert_eq!(map.controller().device_size(), Size::new(1024.0, 768.0));

    // The next frame projects onto the new plane under the same pan and zoom
    map.set_markers(vec![EventMarker::new("origin", GeoPoint::new(0.0, 0.0), 3.0)]);
    let mut ctx = RenderContext::new(1024.0, 768.0);
    map.render(Some(&mut ctx));

    let (center, _, _) = ctx.filled_circles().next().expect("marker drawn");
    assert_close(center, before.to_device(&Point::new(512.0, 384.0)));
    assert_eq!(map.transform(), &before);
}

#[test]
fn test_click_after_marker_swap_only_sees_new_markers() {
    let (mut map, _) = rendered_map(vec![EventMarker::new("old", GeoPoint::new(0.0, 0.0), 5.0)]);
    let events = map.subscribe();

    map.set_markers(vec![EventMarker::new("new", GeoPoint::new(45.0, 90.0), 5.0)]);
    map.handle_input(&InputEvent::Click {
        position: Point::new(400.0, 300.0),
    });
    assert!(selections(&events).is_empty());

    // lng 90 / lat 45 lands at (600, 150) on 800x600
    map.handle_input(&InputEvent::Click {
        position: Point::new(600.0, 150.0),
    });
    assert_eq!(selections(&events), vec!["new".to_string()]);
}

#[test]
fn test_click_before_any_render_selects_marker_under_pointer() {
    let mut map = QuakeMap::new(size());
    map.set_markers(vec![EventMarker::new("a", GeoPoint::new(0.0, 0.0), 3.0)]);
    let events = map.subscribe();

    let position = map.transform().to_device(&project(&GeoPoint::new(0.0, 0.0), size()));
    map.handle_input(&InputEvent::Click { position });

    assert_eq!(selections(&events), vec!["a".to_string()]);
}

#[test]
fn test_invalid_grid_spacing_does_not_stall_render() {
    let config = MapConfig {
        grid_spacing_deg: -30.0,
        ..MapConfig::default()
    };
    let mut map = QuakeMap::with_config(config, size());
    let mut ctx = RenderContext::new(800.0, 600.0);
    map.render(Some(&mut ctx));

    let lines = ctx
        .get_drawing_queue()
        .iter()
        .filter(|cmd| matches!(cmd, DrawCommand::Line { .. }))
        .count();
    assert_eq!(lines, 20);
}

#[test]
fn test_missing_surface_is_skipped() {
    let mut map = QuakeMap::new(size());
    map.set_markers(vec![EventMarker::new("a", GeoPoint::new(0.0, 0.0), 3.0)]);
    map.render(None);
    assert!(map.placements().is_empty());
}
