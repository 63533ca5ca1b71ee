//! Application entry point and dispatch.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::info;

use fibdev_device::{FibDevice, Whence};

use crate::config::AppConfig;
use crate::output::{OutputMode, Presenter, ReadRecord};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        clap_complete::generate(shell, &mut cmd, "fibdev", &mut std::io::stdout());
        return Ok(());
    }

    let device = FibDevice::default();
    let stdout = std::io::stdout();
    run_harness(&device, config, stdout.lock())?;
    Ok(())
}

/// Open a session on `device`, write the message once per offset, then
/// seek to and read every offset forward and backward.
///
/// Returns the output stream once everything has been reported.
pub fn run_harness<W: Write>(device: &FibDevice, config: &AppConfig, out: W) -> Result<W> {
    let mut presenter = Presenter::new(OutputMode::from_flags(config.quiet, config.json), out);
    let mut session = device
        .open()
        .context("failed to open character device")?;

    if !config.skip_writes {
        for _ in 0..=config.offset {
            let ack = session.write(config.message.as_bytes());
            presenter.present_write(ack)?;
        }
    }

    let mut reads = 0usize;
    for offset in config.read_offsets() {
        let position = session.seek(offset, Whence::Set);
        let value = session
            .read_value()
            .with_context(|| format!("read at offset {offset} failed"))?;
        presenter.present_read(&ReadRecord {
            offset,
            position,
            value,
        })?;
        reads += 1;
    }

    session.close();
    info!(reads, "harness finished");
    Ok(presenter.finish()?)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use fibdev_core::constants::exit_codes;

    fn config(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("fibdev").chain(args.iter().copied())).unwrap()
    }

    fn run_to_string(args: &[&str]) -> String {
        let device = FibDevice::default();
        let out = run_harness(&device, &config(args), Vec::new()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn text_run() {
        let out = run_to_string(&["-o", "2"]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3 + 6);
        assert_eq!(lines[0], "Writing to /dev/fibonacci, returned the sequence 1");
        assert_eq!(
            lines[3],
            "Reading from /dev/fibonacci at offset 0, returned the sequence 0."
        );
        assert_eq!(
            lines[5],
            "Reading from /dev/fibonacci at offset 2, returned the sequence 1."
        );
        assert_eq!(
            lines[8],
            "Reading from /dev/fibonacci at offset 0, returned the sequence 0."
        );
    }

    #[test]
    fn quiet_forward_values() {
        let out = run_to_string(&["-o", "10", "-q", "--forward-only"]);
        let values: Vec<&str> = out.lines().collect();
        assert_eq!(
            values,
            ["0", "1", "1", "2", "3", "5", "8", "13", "21", "34", "55"]
        );
    }

    #[test]
    fn offsets_past_limit_are_clamped() {
        let out = run_to_string(&["-o", "102", "--json", "--skip-writes", "--forward-only"]);
        let last: serde_json::Value = serde_json::from_str(out.lines().last().unwrap()).unwrap();
        assert_eq!(last["offset"], 102);
        assert_eq!(last["position"], 100);
        assert_eq!(last["value"], "354224848179261915075");
    }

    #[test]
    fn busy_device_fails() {
        let device = FibDevice::default();
        let _held = device.open().unwrap();
        let err = run_harness(&device, &config(&["-o", "1"]), Vec::new()).unwrap_err();
        assert_eq!(crate::errors::exit_code(&err), exit_codes::ERROR_BUSY);
    }

    #[test]
    fn session_released_after_run() {
        let device = FibDevice::default();
        run_harness(&device, &config(&["-o", "1", "-q"]), Vec::new()).unwrap();
        assert!(!device.in_use());
    }
}
