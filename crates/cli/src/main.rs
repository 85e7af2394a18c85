use clap::Parser as _;

use ces_cli::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    ces_cli::init_logger(args.verbose);
    ces_cli::run(&args)
}
