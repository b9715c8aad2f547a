use crate::core::{BoardSnapshot, Position};
use crossterm::{cursor, execute, style::Stylize, terminal};
use std::io::{stdout, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Evader,
    Pursuer1,
    Pursuer2,
    Goal,
    Empty,
}

impl Cell {
    fn symbol(self) -> char {
        match self {
            Cell::Evader => 'E',
            Cell::Pursuer1 => '1',
            Cell::Pursuer2 => '2',
            Cell::Goal => 'G',
            Cell::Empty => '.',
        }
    }
}

// 重なった場合は 逃走側 > 追跡者1 > 追跡者2 > ゴール の順で表示
fn cell_at(board: &BoardSnapshot, pos: Position) -> Cell {
    let p = &board.positions;
    if pos == p.evader {
        Cell::Evader
    } else if pos == p.pursuer1 {
        Cell::Pursuer1
    } else if pos == p.pursuer2 {
        Cell::Pursuer2
    } else if board.goals.contains(&pos) {
        Cell::Goal
    } else {
        Cell::Empty
    }
}

pub struct DisplayState {
    pub status_msg: Option<String>,
    pub clear_screen: bool,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            status_msg: None,
            clear_screen: true,
        }
    }
}

/// Plain-text grid, one row per line, `y` growing downwards.
pub fn format_board(board: &BoardSnapshot) -> String {
    let mut out = String::new();
    for y in 0..board.grid_size {
        let row: Vec<String> = (0..board.grid_size)
            .map(|x| cell_at(board, Position::new(x, y)).symbol().to_string())
            .collect();
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out
}

pub fn render_board(board: &BoardSnapshot, state: &DisplayState) -> std::io::Result<()> {
    let mut out = stdout();

    if state.clear_screen {
        execute!(
            out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
    }

    writeln!(out, "=== Grid Pursuit ===")?;
    match &state.status_msg {
        Some(msg) => writeln!(out, "{}", msg.clone().bold().yellow())?,
        None => writeln!(out)?,
    }
    writeln!(out)?;

    for y in 0..board.grid_size {
        for x in 0..board.grid_size {
            let cell = cell_at(board, Position::new(x, y));
            let text = cell.symbol().to_string();
            match cell {
                Cell::Evader => write!(out, "{} ", text.green().bold())?,
                Cell::Pursuer1 | Cell::Pursuer2 => write!(out, "{} ", text.red())?,
                Cell::Goal => write!(out, "{} ", text.cyan())?,
                Cell::Empty => write!(out, "{} ", text.dark_grey())?,
            }
        }
        writeln!(out)?;
    }
    writeln!(out)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Positions, GRID_SIZE};

    #[test]
    fn test_format_board_layout() {
        let board = BoardSnapshot {
            grid_size: GRID_SIZE,
            positions: Positions {
                evader: Position::new(0, 0),
                pursuer1: Position::new(4, 4),
                pursuer2: Position::new(5, 5),
            },
            goals: [Position::new(7, 7), Position::new(7, 0)],
        };

        let text = format_board(&board);
        let rows: Vec<&str> = text.lines().collect();

        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0], "E . . . . . . G");
        assert_eq!(rows[4], ". . . . 1 . . .");
        assert_eq!(rows[5], ". . . . . 2 . .");
        assert_eq!(rows[7], ". . . . . . . G");
    }

    #[test]
    fn test_caught_evader_drawn_on_top() {
        let board = BoardSnapshot {
            grid_size: GRID_SIZE,
            positions: Positions {
                evader: Position::new(3, 3),
                pursuer1: Position::new(3, 3),
                pursuer2: Position::new(5, 5),
            },
            goals: [Position::new(7, 7), Position::new(7, 0)],
        };
        let text = format_board(&board);
        assert_eq!(text.lines().nth(3), Some(". . . E . . . ."));
        assert!(!text.contains('1'));
    }
}
