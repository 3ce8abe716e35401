use quakemap::prelude::*;

/// Drives a map without any UI and prints what it would draw
fn main() -> quakemap::Result<()> {
    env_logger::init();

    println!("Quakemap Headless Example");
    println!("=========================");

    let size = Size::new(1024.0, 512.0);
    let mut map = QuakeMap::new(size);
    let events = map.subscribe();

    map.set_markers(vec![
        EventMarker::new("ak1", GeoPoint::new(61.2, -149.9), 3.4).with_place("Anchorage, Alaska"),
        EventMarker::new("jp1", GeoPoint::new(38.1, 142.3), 6.5).with_place("Off the coast of Japan"),
        EventMarker::new("cl1", GeoPoint::new(-33.5, -71.6), 7.1).with_place("Valparaiso, Chile"),
    ]);

    let mut surface = RenderContext::new(size.width, size.height);
    map.render(Some(&mut surface));
    println!("Initial frame: {} draw commands", surface.get_drawing_queue().len());

    for (center, radius, color) in surface.filled_circles() {
        println!(
            "   circle at ({:.1}, {:.1}) r={:.1} color={}",
            center.x,
            center.y,
            radius,
            color.to_hex()
        );
    }

    // Search for Tokyo, then click the Japanese event
    let tokyo = parse_coordinates("35.68N 139.69E")?;
    map.set_search_point(Some(tokyo));
    map.render(Some(&mut surface));
    println!(
        "\nCentered on {:.2}, {:.2} at zoom {}",
        tokyo.lat,
        tokyo.lng,
        map.transform().zoom()
    );

    let japan = map.placements().iter().find(|p| p.id == "jp1").map(|p| p.plane);
    if let Some(plane) = japan {
        let device = map.transform().to_device(&plane);
        map.handle_input(&InputEvent::PointerDown { position: device });
        map.handle_input(&InputEvent::PointerUp { position: device });
        map.handle_input(&InputEvent::Click { position: device });
    }

    // Wheel out twice around the middle of the canvas
    for _ in 0..2 {
        let response = map.handle_input(&InputEvent::Wheel {
            delta_y: 100.0,
            position: size.center(),
        });
        println!("Wheel: zoom {:.3}, prevent default = {}", map.transform().zoom(), response.prevent_default);
    }

    for event in events.try_iter() {
        match event {
            MapEvent::MarkerSelected { id } => {
                println!("Selected marker {id}");
                map.set_highlighted(Some(id));
            }
            MapEvent::ViewChanged { pan, zoom } => {
                println!("View changed: pan ({:.1}, {:.1}) zoom {:.3}", pan.x, pan.y, zoom);
            }
        }
    }

    map.render(Some(&mut surface));
    let outlines = surface
        .get_drawing_queue()
        .iter()
        .filter(|cmd| matches!(cmd, DrawCommand::StrokeCircle { .. }))
        .count();
    println!("Final frame: {outlines} outlined circles");

    let nearby = ProximityAlertEvaluator::new(1000.0, 5.0).evaluate(&tokyo, map.markers());
    for alert in nearby {
        println!("Alert: M{:.1} {:.0} km away ({})", alert.magnitude, alert.distance_km, alert.place);
    }

    Ok(())
}
