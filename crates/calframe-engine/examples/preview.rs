//! Renders a fixture frame and writes PNG previews to the current directory.
//!
//! ```sh
//! RUST_LOG=debug cargo run --example preview
//! ```

use std::path::Path;

use calframe_engine::{Event, FrameComposer, RenderConfig, StaticSource};
use calframe_testing::FrameProbe;
use chrono::{Duration, Local};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let now = Local::now();
    let events = vec![
        Event::new(
            now + Duration::hours(2),
            now + Duration::hours(3),
            "team sync",
            false,
        ),
        Event::new(
            now + Duration::days(1),
            now + Duration::days(3),
            "conference",
            false,
        ),
        Event::new(
            now + Duration::days(2),
            now + Duration::days(3),
            "inventory",
            true,
        ),
        Event::new(
            now + Duration::days(5),
            now + Duration::days(5) + Duration::hours(1),
            "dentist",
            false,
        ),
    ];

    let config = RenderConfig {
        monochrome: true,
        ..RenderConfig::default()
    };
    let mut composer = FrameComposer::new(config, StaticSource::new(events))?;
    let planes = composer.render(now)?;

    let probe = FrameProbe::new(planes);
    probe.save_flattened_png(Path::new("calframe-preview.png"))?;
    for index in 0..probe.plane_count() {
        probe.save_plane_png(index, Path::new(&format!("calframe-plane-{index}.png")))?;
    }
    println!("wrote calframe-preview.png and {} plane images", probe.plane_count());
    Ok(())
}
