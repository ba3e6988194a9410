//! Scatter a random cloud, hull it, and print per-point membership.
//!
//! Usage:
//!   cargo run -p quickhull2d --example scatter -- [count] [seed]
//!
//! Set RUST_LOG=debug to see the solver's phase logging.

use quickhull2d::prelude::*;

fn main() {
    env_logger::init();
    let count = arg(1, 100);
    let seed = arg(2, 2026) as u64;

    let cfg = ScatterCfg {
        count,
        ..Default::default()
    };
    let points = scatter(&cfg, seed);
    match quick_hull_parallel(&points, &NullObserver, HullCfg::default()) {
        Ok(n) => {
            for (i, p) in points.iter().enumerate() {
                println!(
                    "point {} at ({:.2}, {:.2}) is {}part of the hull",
                    i + 1,
                    p.pos.x,
                    p.pos.y,
                    if p.on_hull() { "" } else { "not " }
                );
            }
            println!("hull has {n} vertices");
        }
        Err(e) => eprintln!("quick hull failed: {e}"),
    }
}

fn arg(i: usize, default: usize) -> usize {
    std::env::args()
        .nth(i)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
