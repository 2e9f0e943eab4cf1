//! External probe invocation
//!
//! A probe is one run of an external tool whose text output lists devices.
//! Probes run to completion with no timeout; callers that need bounded
//! latency must wrap detection in their own timeout.

use crate::errors::{DetectError, DetectResult};
use std::future::Future;
use std::process::Stdio;
use tokio::process::Command;

/// Which output stream of the tool carries the device listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStream {
    Stdout,
    Stderr,
}

/// A single external command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Probe {
    pub program: String,
    pub args: Vec<String>,
    pub stream: ProbeStream,
}

impl Probe {
    pub fn new(program: &str, args: &[&str], stream: ProbeStream) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            stream,
        }
    }

    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Runs a probe and returns the text of its designated output stream
pub trait ProbeRunner {
    fn run(&self, probe: &Probe) -> impl Future<Output = DetectResult<String>> + Send;
}

impl<R: ProbeRunner + Sync> ProbeRunner for &R {
    fn run(&self, probe: &Probe) -> impl Future<Output = DetectResult<String>> + Send {
        (**self).run(probe)
    }
}

/// Runs probes as real child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProbeRunner;

impl ProbeRunner for SystemProbeRunner {
    async fn run(&self, probe: &Probe) -> DetectResult<String> {
        log::debug!("Executing probe: {}", probe.command_line());

        let output = Command::new(&probe.program)
            .args(&probe.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| DetectError::probe_launch(&probe.program, e))?;

        // ffmpeg exits non-zero after listing devices, so the status is informational only
        log::debug!("{} exited with {}", probe.program, output.status);

        let bytes = match probe.stream {
            ProbeStream::Stdout => &output.stdout,
            ProbeStream::Stderr => &output.stderr,
        };

        Ok(String::from_utf8_lossy(bytes).into_owned())
    }
}
