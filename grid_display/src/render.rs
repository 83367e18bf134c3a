// render.rs - Console rendering of a generation

use std::io::{self, Write};

use crossterm::{cursor, queue, style::Print, terminal::{Clear, ClearType}};

use conway::Grid;

/// Prints whole generations to a terminal (or any writer).
pub struct ConsoleRenderer<W: Write> {
    out: W,
    clear_screen: bool,
    alive: char,
    dead: char,
}

impl<W: Write> ConsoleRenderer<W> {
    /// Clears the screen before every frame.
    pub fn new(out: W) -> Self {
        Self { out, clear_screen: true, alive: '█', dead: '·' }
    }

    /// Appends frames one after another, for pipes and logs.
    pub fn plain(out: W) -> Self {
        Self { out, clear_screen: false, alive: '#', dead: '.' }
    }

    pub fn render(&mut self, grid: &Grid, generation: u64) -> io::Result<()> {
        if self.clear_screen {
            queue!(self.out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        }
        queue!(
            self.out,
            Print(format!(
                "generation {generation}  {}x{}  live {}\n",
                grid.width(),
                grid.height(),
                grid.live_count()
            ))
        )?;

        for row in grid.rows() {
            let line: String = row
                .iter()
                .map(|cell| if cell.is_alive() { self.alive } else { self.dead })
                .collect();
            queue!(self.out, Print(line), Print("\n"))?;
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_frame_has_header_and_rows() {
        let grid: Grid = ".#.\n##.\n".parse().unwrap();
        let mut renderer = ConsoleRenderer::plain(Vec::new());
        renderer.render(&grid, 4).unwrap();

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(text, "generation 4  3x2  live 3\n.#.\n##.\n");
    }

    #[test]
    fn empty_grid_prints_only_the_header() {
        let mut renderer = ConsoleRenderer::plain(Vec::new());
        renderer.render(&Grid::empty(), 0).unwrap();
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}
