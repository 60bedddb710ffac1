use super::hub::{Listener, ListenerError};
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

/// Listener that prints each message as `<name> received message: <message>`
pub struct ConsoleListener {
    name: String,
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleListener {
    /// Listener printing to stdout
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_output(name, io::stdout())
    }

    pub fn with_output(name: impl Into<String>, out: impl Write + Send + 'static) -> Self {
        Self {
            name: name.into(),
            out: Mutex::new(Box::new(out)),
        }
    }
}

impl Listener for ConsoleListener {
    fn name(&self) -> &str {
        &self.name
    }

    fn receive(&self, message: &str) -> Result<(), ListenerError> {
        let mut out = self.out.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        writeln!(out, "{} received message: {}", self.name, message)?;
        out.flush()?;
        Ok(())
    }
}

/// Shared, ordered capture of everything written to it
///
/// Clones write into the same buffer, so action reports and listener output
/// can be collected as one stream.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured output split into lines
    pub fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.buffer())
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn clear(&self) {
        self.buffer().clear();
    }

    fn buffer(&self) -> MutexGuard<'_, Vec<u8>> {
        self.buf.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Write for Transcript {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buffer().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
