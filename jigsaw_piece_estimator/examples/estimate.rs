use env_logger::{Builder, Env};
use jigsaw_piece_estimator::compute;
use std::env;

fn main() {
    Builder::from_env(Env::default().default_filter_or("debug"))
        .format_timestamp_millis()
        .init();
    let mut args = env::args().skip(1);
    let width = args.next().and_then(|s| s.parse().ok()).unwrap_or(33.0);
    let height = args.next().and_then(|s| s.parse().ok()).unwrap_or(22.8);
    let pieces = args.next().and_then(|s| s.parse().ok()).unwrap_or(1000);
    let report = compute(width, height, pieces, true).expect("Failed to estimate pieces");
    print!("{}", report);
}
