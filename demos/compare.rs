//! Compares a few traced shapes and prints their similarity.
//!
//! Usage:
//! ```text
//! cargo run --example compare
//! RUST_LOG=shape_similarity=debug cargo run --example compare
//! ```

use std::f64::consts::PI;

use shape_similarity::math::Vector2;
use shape_similarity::operations::{FrechetDistance, Normalize, Resample};
use shape_similarity::{Curve, Result, ShapeSimilarity, SimilarityOptions};

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for the library.
    // Override with RUST_LOG (e.g. RUST_LOG=shape_similarity=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("shape_similarity=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let zigzag = Curve::from_xy(&[(0.0, 0.0), (2.0, 4.0), (18.0, -3.0)])?;
    let traced = Curve::from_xy(&[(0.3, -0.2), (2.2, 4.5), (16.0, -4.0)])?
        .translated(&Vector2::new(90.0, 90.0))
        .scaled(2000.0)
        .rotated(PI / 3.0);
    let triangle = Curve::from_xy(&[(0.0, 0.0), (2.0, 4.0), (4.0, 0.0), (0.0, 0.0)])?;
    let line = Curve::from_xy(&[(0.0, 0.0), (4.0, 4.0)])?;

    let free = SimilarityOptions::default();
    let restricted = SimilarityOptions::new().with_restrict_rotation_angle(0.3);

    let cases = [
        ("zigzag vs traced zigzag", &zigzag, &traced, &free),
        ("zigzag vs traced zigzag (±0.3 rad)", &zigzag, &traced, &restricted),
        ("triangle vs line", &triangle, &line, &free),
    ];

    for (name, c) in [("zigzag", &zigzag), ("triangle", &triangle), ("line", &line)] {
        println!(
            "{name:<9} {} segments, {}",
            c.segment_count(),
            if c.is_closed() { "closed" } else { "open" }
        );
    }
    println!();

    for (label, a, b, options) in cases {
        let cmp = ShapeSimilarity::new(a, b, options).execute_detailed()?;
        let n = options.estimation_points;
        let frechet = FrechetDistance::new(
            &Normalize::new(&Resample::new(a, n).execute()?).execute(),
            &Normalize::new(&Resample::new(&b.rotated(cmp.rotation), n).execute()?).execute(),
        )
        .execute();
        println!(
            "{label:<38} similarity {:.4}  rotation {:+.4} rad  frechet {:.4}",
            cmp.similarity, cmp.rotation, frechet
        );
    }

    Ok(())
}
