//! Prints the color that completes `#00a991 = rotate(multiply(screen(E, M), O)) + X`.
//!
//! E, M, and O are the bytes of `kiwi.com\0` read three at a time. Set `RUST_LOG=debug` to see
//! each step of the solve on stderr.

use colorsolve::{Rgb, Solver};
use tracing_subscriber::EnvFilter;

const TARGET: &str = "#00a991";
const EBONY: &str = "#6b6977";
const MAGENTA: &str = "#692e63";
const OLIVE: &str = "#6f6d00";

fn main() -> colorsolve::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let target: Rgb = TARGET.parse()?;
    let ebony: Rgb = EBONY.parse()?;
    let magenta: Rgb = MAGENTA.parse()?;
    let olive: Rgb = OLIVE.parse()?;

    let unknown = Solver::default().solve(target, ebony, magenta, olive);
    println!("{}", unknown);
    Ok(())
}
