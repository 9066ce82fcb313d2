mod cli;

use cli::commands::Command;
use cli::Connect4;
use structopt::StructOpt;

fn main() {
    env_logger::init();
    #[cfg(feature = "instrumentation")]
    connect_four::instrumentation::init();
    Connect4::from_args().execute();
}
