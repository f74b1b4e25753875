use std::error::Error;
use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};

use rusty_maze::{generate, render, solve, CellId, Direction, Grid};

const STATUS_LINE: &str = "Use arrows; (n)ew; (r)estart; (q)uit";

const ORIGIN: CellId = CellId { row: 0, col: 0 };

/// Un labyrinthe dimensionné sur le terminal, déjà creusé.
fn make_maze() -> Result<Grid, Box<dyn Error>> {
    let (width, height) = terminal::size()?;
    let rows = (height.saturating_sub(2) / 2).max(1) as usize;
    let cols = (width.saturating_sub(1) / 4).max(1) as usize;

    let mut grid = Grid::new(rows, cols)?;
    generate(&mut grid);
    Ok(grid)
}

/// La boucle de session : grille courante, position du curseur, et le
/// résultat de la dernière résolution.
struct Game {
    grid: Grid,
    position: CellId,
    solved: bool,
}

impl Game {
    fn new() -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            grid: make_maze()?,
            position: ORIGIN,
            solved: false,
        })
    }

    fn draw(&self, out: &mut impl Write) -> io::Result<()> {
        queue!(out, Clear(ClearType::All))?;
        for (row, line) in render(&self.grid, self.solved).lines().enumerate() {
            queue!(out, MoveTo(0, row as u16), Print(line))?;
        }
        let status_row = (self.grid.rows() * 2 + 1) as u16;
        queue!(out, MoveTo(0, status_row), Print(STATUS_LINE))?;
        out.flush()
    }

    /// Avance d'une case si le passage est ouvert, puis retrace le
    /// chemin depuis l'origine.
    fn step(&mut self, direction: Direction) {
        if let Some(next) = self.grid.cell(self.position).neighbor(direction) {
            if !self.grid.has_wall(self.position, direction) {
                self.position = next;
                self.solved = solve(&mut self.grid, ORIGIN, self.position);
            }
        }
    }

    fn run(&mut self, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
        loop {
            self.draw(out)?;

            let key = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => key,
                _ => continue,
            };
            match key.code {
                KeyCode::Char('q') | KeyCode::Char('Q') => break,
                KeyCode::Up => self.step(Direction::North),
                KeyCode::Down => self.step(Direction::South),
                KeyCode::Left => self.step(Direction::West),
                KeyCode::Right => self.step(Direction::East),
                KeyCode::Char('n') | KeyCode::Char('N') => {
                    self.grid = make_maze()?;
                    self.position = ORIGIN;
                    self.solved = false;
                }
                KeyCode::Char('r') | KeyCode::Char('R') => {
                    self.position = ORIGIN;
                    self.solved = solve(&mut self.grid, ORIGIN, ORIGIN);
                }
                _ => {}
            }
        }
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let result = Game::new().and_then(|mut game| game.run(&mut stdout));

    execute!(stdout, Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}
