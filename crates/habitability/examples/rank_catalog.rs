//! Rank the demo exoplanet catalog by habitability
//!
//! Usage: cargo run -p habitability --example rank_catalog
//!
//! Output: CSV with one row per planet, best candidate first

use habitability::catalog::{demo_catalog, rank_by_habitability};

fn main() {
    // CSV header
    println!("name,host_star,overall,classification,similar_earth,biosignature,feasibility");

    for (planet, prediction) in rank_by_habitability(demo_catalog()) {
        let score = &prediction.habitability_score;
        println!(
            "{},{},{:.1},{},{:.2},{:.2},{}",
            planet.name,
            planet.host_star,
            score.overall,
            score.classification,
            prediction.similar_earth,
            prediction.biosignature_potential,
            prediction.mission_feasibility,
        );
    }
}
