use log::warn;
use std::io::{self, BufRead, Write};

use crate::profile;
use crate::worker::{self, WorkerError};

/// Line protocol for running the engine out of process. Each JSON line is a
/// `WorkerRequest` answered by one `WorkerResponse` line, or by
/// `{"error": ...}` when the request cannot be served.
pub struct WorkerLoop<W: Write> {
    out: W,
}

impl<W: Write> WorkerLoop<W> {
    pub fn new(out: W) -> Self { Self { out } }

    fn cmd_profiles(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", serde_json::to_string(profile::all_profiles())?)
    }

    fn cmd_request(&mut self, line: &str) -> io::Result<()> {
        match worker::handle_json(line) {
            Ok(resp) => writeln!(self.out, "{}", resp),
            Err(e) => {
                if matches!(e, WorkerError::Payload(_)) { warn!("malformed request: {e}"); }
                writeln!(self.out, "{}", serde_json::json!({ "error": e.to_string() }))
            }
        }
    }

    /// Handles one line. Returns false on `quit`.
    pub fn handle_line(&mut self, line: &str) -> io::Result<bool> {
        let line = line.trim();
        if line.is_empty() { return Ok(true); }
        match line {
            "quit" => return Ok(false),
            "isready" => writeln!(self.out, "readyok")?,
            "profiles" => self.cmd_profiles()?,
            _ => self.cmd_request(line)?,
        }
        self.out.flush()?;
        Ok(true)
    }

    pub fn run_loop<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        for line in input.lines() {
            let line = match line { Ok(s) => s, Err(_) => break };
            if !self.handle_line(&line)? { break; }
        }
        Ok(())
    }
}
