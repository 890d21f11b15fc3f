use clap::Parser;

// A bare invocation performs one full run; configuration comes from the
// environment, not from flags.
#[derive(Parser)]
#[command(name = "briefs")]
#[command(about = "Fetches RSS/Atom feeds, summarizes new items with Claude, renders a static page")]
#[command(version)]
pub struct Cli {}
