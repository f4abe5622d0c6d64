//! Headless orrery run.
//!
//! Wires the pieces the way the page does: the scene starts from the fixed
//! local table, a background feed delivers a fresh dataset when (and if)
//! it answers within its bounded wait, and the tick loop keeps animating
//! regardless. Panels that a UI would render become log lines here.

use std::env;
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::bounded;
use orrery_engine::{RenderBuffer, SimConfig, Simulation, ViewKey};
use orrery_feeds::{apod, fetch::FeedOutcome, local, neo, stellarium, worker};

/// Bounded wait for every external feed.
const FEED_DEADLINE: Duration = Duration::from_secs(5);
/// How long the demo animates before exiting.
const RUN_SECONDS: f32 = 6.0;

fn main() {
    env_logger::init();

    let config = SimConfig::default();
    let mut sim = Simulation::new(config.clone());

    // Startup population from the fixed table; the feed refreshes it later.
    if let Err(err) = sim.rebuild(&local::fallback_dataset()) {
        log::error!("local table rejected: {err}");
        return;
    }
    log::info!("scene ready: {} bodies", sim.registry.len());

    let (tx, rx) = bounded(1);
    sim.attach_feed(rx);
    let feed = worker::spawn_dataset_feed(env::var("ORRERY_DATASET_URL").ok(), FEED_DEADLINE, tx);

    let panels = spawn_panel_feeds();

    let report = stellarium::probe();
    log::info!("{}: {} — {}", report.service, report.status, report.note);

    run_loop(&mut sim, &config);

    log::info!("dataset feed: {}", feed.status.get());
    feed.join();
    for panel in panels {
        if panel.join().is_err() {
            log::error!("panel feed panicked");
        }
    }
}

/// Fire the APOD and NEO panels in the background, page-style: each one
/// either fills its panel or reports itself offline.
fn spawn_panel_feeds() -> Vec<thread::JoinHandle<()>> {
    let api_key = env::var("NASA_API_KEY").unwrap_or_else(|_| "DEMO_KEY".to_string());

    let apod_key = api_key.clone();
    let apod = thread::spawn(move || match apod::fetch_apod(&apod_key, FEED_DEADLINE) {
        FeedOutcome::Fetched(payload) => log::info!("APOD: {}", apod::panel_line(&payload)),
        FeedOutcome::TimedOut => log::warn!("APOD: offline (timed out)"),
        FeedOutcome::Failed(reason) => log::warn!("APOD: offline ({reason})"),
    });

    let neo = thread::spawn(move || match neo::fetch_neo(&api_key, FEED_DEADLINE) {
        FeedOutcome::Fetched(payload) => {
            log::info!("NEO watch: {} objects this week", neo::element_count(&payload));
        }
        FeedOutcome::TimedOut => log::warn!("NEO watch: offline (timed out)"),
        FeedOutcome::Failed(reason) => log::warn!("NEO watch: offline ({reason})"),
    });

    vec![apod, neo]
}

fn run_loop(sim: &mut Simulation, config: &SimConfig) {
    let views = [
        ViewKey::OverviewSystem,
        ViewKey::EarthOrbit,
        ViewKey::AsteroidField,
        ViewKey::FractalTorus,
        ViewKey::Exoplanets,
    ];

    let mut clock = orrery_engine::FrameClock::new(config.tick_hz);
    let mut buffer = RenderBuffer::new();
    let mut last = Instant::now();
    let mut ticks: u64 = 0;
    let total_ticks = (RUN_SECONDS * config.tick_hz) as u64;

    while ticks < total_ticks {
        let now = Instant::now();
        let elapsed = now.duration_since(last).as_secs_f32();
        last = now;

        for _ in 0..clock.advance(elapsed) {
            sim.tick();
            ticks += 1;

            if ticks % 60 == 0 {
                let view = views[(ticks / 60) as usize % views.len()];
                sim.apply_view(view);
                if let Some(earth) = sim.registry.get("earth") {
                    log::info!(
                        "t+{}s earth at ({:.2}, {:.2}, {:.2}), camera {view:?}",
                        ticks / 60,
                        earth.position.x,
                        earth.position.y,
                        earth.position.z,
                    );
                }
            }
        }

        sim.snapshot(&mut buffer);
        thread::sleep(Duration::from_millis(4));
    }

    log::info!(
        "final frame: {} instances, {} orbit guides",
        buffer.instance_count(),
        buffer.guides.len()
    );
}
