use anyhow::Context as _;
use quakemap::{
    alerts::proximity::{ProximityAlert, ProximityAlertEvaluator},
    data::feed::{load_feed, FeedFilter},
    parse_coordinates,
    ui::widget::QuakeMapWidget,
    EventMarker, GeoPoint, MapEvent, QuakeMap, Size,
};
use quakemap::crossbeam_channel::Receiver;

/// Desktop viewer for a saved earthquake feed.
///
/// Usage: `quakemap-app [feed.geojson]`
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let markers = match std::env::args().nth(1) {
        Some(path) => load_feed(&path, &FeedFilter::default())
            .with_context(|| format!("loading feed {path}"))?,
        None => sample_markers(),
    };
    log::info!("loaded {} events", markers.len());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Quakemap - Seismic Event Viewer"),
        ..Default::default()
    };

    eframe::run_native(
        "quakemap-app",
        options,
        Box::new(move |_cc| Box::new(QuakeApp::new(markers))),
    )
    .map_err(|e| anyhow::anyhow!("eframe failed: {e}"))
}

fn sample_markers() -> Vec<EventMarker> {
    vec![
        EventMarker::new("sample-1", GeoPoint::new(38.1, 142.3), 6.5).with_place("Off the coast of Japan"),
        EventMarker::new("sample-2", GeoPoint::new(35.7, -117.6), 2.1).with_place("Ridgecrest, CA"),
        EventMarker::new("sample-3", GeoPoint::new(-33.5, -71.6), 5.4).with_place("Valparaiso, Chile"),
        EventMarker::new("sample-4", GeoPoint::new(36.2, 28.0), 4.3).with_place("Dodecanese Islands, Greece"),
        EventMarker::new("sample-5", GeoPoint::new(-6.2, 130.5), 7.2).with_place("Banda Sea"),
    ]
}

struct QuakeApp {
    map: QuakeMap,
    events: Receiver<MapEvent>,
    search_text: String,
    search_error: Option<String>,
    alerts: ProximityAlertEvaluator,
    nearby: Vec<ProximityAlert>,
}

impl QuakeApp {
    fn new(markers: Vec<EventMarker>) -> Self {
        let mut map = QuakeMap::new(Size::new(1200.0, 800.0));
        map.set_markers(markers);
        let events = map.subscribe();

        Self {
            map,
            events,
            search_text: String::new(),
            search_error: None,
            alerts: ProximityAlertEvaluator::default(),
            nearby: Vec::new(),
        }
    }

    fn search(&mut self) {
        match parse_coordinates(&self.search_text) {
            Ok(point) => {
                self.search_error = None;
                self.map.set_search_point(Some(point));
                self.nearby = self.alerts.evaluate(&point, self.map.markers());
            }
            Err(e) => self.search_error = Some(e.to_string()),
        }
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            if let MapEvent::MarkerSelected { id } = event {
                self.map.set_highlighted(Some(id));
            }
        }
    }

    fn selected(&self) -> Option<&EventMarker> {
        let id = self.map.highlighted()?;
        self.map.markers().iter().find(|m| m.id == id)
    }
}

impl eframe::App for QuakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("search").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Go to:");
                let edit = ui.text_edit_singleline(&mut self.search_text);
                if ui.button("Search").clicked()
                    || (edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)))
                {
                    self.search();
                }
                if ui.button("Reset view").clicked() {
                    self.map.set_search_point(None);
                    self.map.reset_view();
                    self.nearby.clear();
                }
                if let Some(err) = &self.search_error {
                    ui.colored_label(egui::Color32::from_rgb(220, 38, 38), err.as_str());
                }
            });
        });

        egui::SidePanel::right("details").min_width(240.0).show(ctx, |ui| {
            ui.heading("Selected event");
            match self.selected() {
                Some(marker) => {
                    ui.label(format!("M{:.1} ({})", marker.magnitude, marker.bucket()));
                    ui.label(marker.place.as_str());
                    if let Some(loc) = marker.location {
                        ui.label(format!("{:.3}, {:.3}", loc.lat, loc.lng));
                    }
                }
                None => {
                    ui.label("Click a marker");
                }
            }

            ui.separator();
            ui.heading("Near search point");
            for alert in &self.nearby {
                ui.label(format!(
                    "M{:.1} {:.0} km - {}",
                    alert.magnitude, alert.distance_km, alert.place
                ));
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add(QuakeMapWidget::new(&mut self.map));
        });

        self.drain_events();
    }
}
