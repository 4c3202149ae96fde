mod cli;

use cli::commands::Command;
use cli::Hanoi;
use structopt::StructOpt;

fn main() {
    init_logging();

    Hanoi::from_args().execute();

    #[cfg(feature = "instrumentation")]
    hanoi::instrumentation::print_timing_statistics();
}

#[cfg(not(feature = "instrumentation"))]
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

#[cfg(feature = "instrumentation")]
fn init_logging() {
    hanoi::instrumentation::init_tracing();
}
