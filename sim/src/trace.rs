//! JSON-lines tick trace.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use movement::TickSample;

/// Writes one JSON object per tick.
pub struct TraceWriter<W: Write> {
    out: W,
    rows: u64,
}

impl TraceWriter<BufWriter<File>> {
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> TraceWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, rows: 0 }
    }

    pub fn write(&mut self, sample: &TickSample) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, sample)?;
        self.out.write_all(b"\n")?;
        self.rows += 1;
        Ok(())
    }

    pub fn rows(&self) -> u64 {
        self.rows
    }

    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
