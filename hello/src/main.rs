use anyhow::Result;
use argh::FromArgs;
use hello::{GoProverb, print_quote};
use tracing_subscriber::EnvFilter;

#[derive(FromArgs)]
/// Print a quotation to standard output.
struct Args {
    #[argh(switch, short = 'v')]
    /// log debug output to stderr.
    verbose: bool,
}

fn main() -> Result<()> {
    let args: Args = argh::from_env();
    init_tracing(args.verbose);

    print_quote(&GoProverb, &mut std::io::stdout().lock())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}
