use std::io::{self, Write};

use libgame::world::{Renderer, Snapshot};

/// Writes one `generation<TAB>population` line per frame.
pub struct StatsRenderer<W: Write> {
    out: W,
}

impl<W: Write> StatsRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for StatsRenderer<W> {
    fn render(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()> {
        writeln!(self.out, "{}\t{}", snapshot.generation, snapshot.population)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
