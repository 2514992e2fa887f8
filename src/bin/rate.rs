//! Standalone rating CLI.
//!
//! Rates one review text from the command line or stdin:
//!
//! ```text
//! rate "Super produkt, polecam!"
//! echo "Słaba jakość" | rate
//! ```
//!
//! Loads its own pipeline per invocation from the `STARGRADE_*` environment
//! (slower than the server path on repeated calls, by design).

use std::io::Read;

use anyhow::{Context, bail};
use clap::Parser;

use stargrade::config::Config;
use stargrade::constants::NO_INPUT_RATING;
use stargrade::pipeline::load_pipeline;

#[derive(Parser, Debug)]
#[command(name = "rate", about = "Predict a 1-5 star rating for a review text")]
struct Args {
    /// Review text; all arguments are joined with spaces. Reads stdin when
    /// omitted.
    text: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let text = if args.text.is_empty() {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read review text from stdin")?;
        buf
    } else {
        args.text.join(" ")
    };

    if text.trim().is_empty() {
        bail!("no review text given: pass it as arguments or on stdin");
    }

    let config = Config::from_env()?;
    config.validate()?;

    let pipeline = load_pipeline(&config)?;
    let rating = pipeline.predict(&text)?;

    if rating == NO_INPUT_RATING {
        bail!("no review text given: pass it as arguments or on stdin");
    }

    println!("{rating}");
    Ok(())
}
