//! Harness configuration from CLI flags and environment.

use clap::Parser;

use fibdev_core::MAX_LENGTH;

/// fibdev — exercise the Fibonacci device with writes, seeks and reads.
#[derive(Parser, Debug, Clone)]
#[command(name = "fibdev", version, about)]
pub struct AppConfig {
    /// Highest offset to read. Offsets past the device limit are clamped on seek.
    #[arg(
        short,
        long,
        default_value_t = MAX_LENGTH,
        env = "FIBDEV_OFFSET",
        value_parser = clap::value_parser!(i64).range(0..)
    )]
    pub offset: i64,

    /// Payload written to the device before reading.
    #[arg(short, long, default_value = "testing writing")]
    pub message: String,

    /// Skip the write pass.
    #[arg(long)]
    pub skip_writes: bool,

    /// Read forward only, without the backward pass.
    #[arg(long)]
    pub forward_only: bool,

    /// Quiet mode (only output the values).
    #[arg(short, long)]
    pub quiet: bool,

    /// Emit one JSON record per read.
    #[arg(long, conflicts_with = "quiet")]
    pub json: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Offsets visited by the read passes, forward then backward.
    pub fn read_offsets(&self) -> impl Iterator<Item = i64> {
        let backward = if self.forward_only {
            None
        } else {
            Some((0..=self.offset).rev())
        };
        (0..=self.offset).chain(backward.into_iter().flatten())
    }
}
