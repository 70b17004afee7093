use std::io::{self, Write};

use colored::Colorize;
use libgame::world::{Renderer, Snapshot};

/// Draws the grid as text inside a frame of `=` rules and `||` walls, with the
/// generation number in the top rule.
pub struct TextRenderer<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()> {
        let grid = snapshot.grid;
        let generation = snapshot.generation.to_string();
        let rule = "=".repeat(grid.cols());

        writeln!(self.out, "  {rule}{generation}{rule}")?;

        let mut line = String::with_capacity(grid.cols() * 2 + 5);
        for row in grid.cells().chunks_exact(grid.cols()) {
            line.clear();
            line.push_str("|| ");

            for cell in row {
                if !cell.is_alive() {
                    line.push_str("  ");
                } else if self.color {
                    line.push_str(&"# ".bright_green().to_string());
                } else {
                    line.push_str("# ");
                }
            }

            line.push_str("||");
            writeln!(self.out, "{line}")?;
        }

        writeln!(self.out, "  {rule}{}{rule}", "=".repeat(generation.len()))?;
        self.out.flush()
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use libgame::board::Grid;

    use super::*;

    #[test]
    fn draws_framed_grid() {
        let grid = Grid::from_rows([[1u8, 0, 0], [0, 1, 1]]).unwrap();
        let mut renderer = TextRenderer::new(Vec::new(), false);

        renderer
            .render(&Snapshot {
                generation: 10,
                population: grid.population(),
                grid: &grid,
            })
            .unwrap();

        let output = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(
            output,
            "  ===10===\n\
             || #     ||\n\
             ||   # # ||\n  \
             ========\n"
        );
    }
}
