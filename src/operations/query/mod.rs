mod frechet;

pub use frechet::FrechetDistance;
