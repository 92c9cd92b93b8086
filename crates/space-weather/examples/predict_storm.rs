//! Score the demo storm and a stream of simulated events
//!
//! Usage: cargo run -p space-weather --example predict_storm
//!
//! Output: CSV with one row per event

use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use space_weather::{
    demo_storm, predict_earth_impact, predict_satellite_damage, simulate_event,
};

fn main() {
    let mut rng = ChaChaRng::seed_from_u64(42);

    // CSV header
    println!("id,class,speed,satellite_risk,risk_score,earth_risk,impact_probability,downtime");

    let mut events = vec![demo_storm()];
    for _ in 0..10 {
        events.push(simulate_event(&mut rng));
    }

    for event in &events {
        let satellite = predict_satellite_damage(event);
        let earth = predict_earth_impact(event);
        println!(
            "{},{},{:.0},{},{:.3},{},{:.1},{}",
            event.id,
            event.flare_class,
            event.effective_speed(),
            satellite.risk_level,
            satellite.risk_score,
            earth.risk_level,
            earth.impact_probability,
            satellite.estimated_downtime,
        );
    }
}
