/*
 * Boid Flocking Simulation
 *
 * Interactive viewer for the flocking engine. Boids follow cohesion,
 * separation and alignment, are turned back near the window edges and
 * leave optional trails. All parameters can be adjusted live.
 *
 * Usage: boids [preset.json]
 * Log output is controlled with RUST_LOG (default: info).
 */

use boids::app;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    nannou::app(app::model).update(app::update).run();
}
