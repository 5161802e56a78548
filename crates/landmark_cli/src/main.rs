//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `landmark_core` linkage with ping/version checks.
//! - Replay a short scripted session against in-memory projections and print
//!   the resulting list and store snapshot.

use landmark_core::{
    init_from_config, AppConfig, ClickTarget, CreateLandmark, GeolocationError, LandmarkApp,
    LandmarkError, LandmarkId, MemoryMap, MemoryProjector, Position, StaticGeolocation, UiEvent,
};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    println!("landmark_core ping={}", landmark_core::ping());
    println!("landmark_core version={}", landmark_core::core_version());

    let config = AppConfig::from_env();
    if let Err(err) = init_from_config(&config) {
        eprintln!("logging disabled: {err}");
    }

    match run_demo(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("demo session failed: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run_demo(config: AppConfig) -> Result<(), LandmarkError> {
    let projector = MemoryProjector::new(config.coordinate_precision);
    let mut app = LandmarkApp::new(config, MemoryMap::new(), projector);
    let center = app
        .start(&StaticGeolocation::failing(GeolocationError::PermissionDenied))
        .await;
    println!("map center={}", center.format(5));

    let museum = submit(&mut app, "Museum", "A place with art", 43.26, -79.92)?;
    let park = submit(&mut app, "Park", "Green space by the bay", 43.27, -79.88)?;

    app.handle(UiEvent::MarkerClicked(park))?;
    app.handle(UiEvent::ListEntryClicked {
        id: museum,
        target: ClickTarget::VisibilityToggle,
    })?;
    app.handle(UiEvent::VisibilityToggled {
        id: museum,
        visible: false,
    })?;
    println!("after selecting {park} and hiding {museum}:");
    print!("{}", app.projector().render_text());

    app.handle(UiEvent::DeleteClicked(park))?;
    println!("after deleting {park}:");
    print!("{}", app.projector().render_text());
    println!(
        "selected={}",
        app.selected()
            .map(|id| id.to_string())
            .unwrap_or_else(|| "none".to_string())
    );

    match serde_json::to_string_pretty(&app.store().list()) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("snapshot serialization failed: {err}"),
    }
    Ok(())
}

fn submit(
    app: &mut LandmarkApp<MemoryMap, MemoryProjector>,
    title: &str,
    description: &str,
    lat: f64,
    lng: f64,
) -> Result<LandmarkId, LandmarkError> {
    let request = CreateLandmark::new(title, description, Position::new(lat, lng)?, None);
    app.create(request)
}
