//! A plain array-backed Connect 4 board

use anyhow::{anyhow, Result};
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use crate::{board::*, Move, CONNECT, HEIGHT, WIDTH};

// (column, row) steps for horizontal, vertical and both diagonal alignments
const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

#[derive(Clone, Debug)]
pub struct ArrayBoard {
    cells: [Option<Player>; WIDTH * HEIGHT], // cells are stored left-to-right, bottom-to-top
    heights: [usize; WIDTH],
    player: Player,
    game: String,
    num_moves: usize,
    state: GameState,
}

impl ArrayBoard {
    pub fn new() -> Self {
        Self {
            cells: [None; WIDTH * HEIGHT],
            heights: [0; WIDTH],
            player: Player::One,
            game: String::new(),
            num_moves: 0,
            state: GameState::Playing,
        }
    }

    /// Builds a position from a string of 1-indexed column numbers, e.g. "4453"
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10) {
                Some(column) => {
                    let _ = board.play_checked(column as usize)?;
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    /// Plays a 1-indexed column, refusing moves once the game has ended
    pub fn play_checked(&mut self, column_one_indexed: usize) -> Result<GameState> {
        if self.state != GameState::Playing {
            return Err(anyhow!("Invalid position, game is over"));
        }
        let column = column_one_indexed
            .checked_sub(1)
            .ok_or(InvalidMove::OutOfRange {
                column: column_one_indexed,
                width: WIDTH,
            })?;
        Ok(self.try_play(column)?)
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn num_moves(&self) -> usize {
        self.num_moves
    }

    /// The 1-indexed move history that produced this position
    pub fn moves(&self) -> &str {
        &self.game
    }

    pub fn display(&self) -> Result<()> {
        let mut stdout = stdout();

        let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
        stdout.queue(PrintStyledContent(style(cols + "\n")))?;
        for _ in 0..HEIGHT {
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
        stdout.flush()?;

        let (origin_x, origin_y) = crossterm::cursor::position()?;

        for (idx, cell) in self.cells.iter().enumerate() {
            let (pos_x, pos_y) = (
                origin_x + (idx % WIDTH) as u16,
                origin_y - (idx / WIDTH) as u16,
            );

            stdout
                .queue(MoveTo(pos_x, pos_y))?
                .queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(match cell {
                            Some(Player::One) => Color::Red,
                            Some(Player::Two) => Color::Yellow,
                            None => Color::DarkBlue,
                        }),
                ))?;
        }
        stdout
            .queue(MoveTo(origin_x + WIDTH as u16, origin_y))?
            .queue(PrintStyledContent(style("\n")))?;
        stdout.flush()?;
        Ok(())
    }

    fn try_play(&mut self, column: Move) -> Result<GameState, InvalidMove> {
        if column >= WIDTH {
            return Err(InvalidMove::OutOfRange {
                column,
                width: WIDTH,
            });
        }
        if !self.playable(column) {
            return Err(InvalidMove::ColumnFull { column });
        }

        // a finished game keeps its result
        if self.state == GameState::Playing {
            self.state = if self.check_winning_move(column) {
                match self.player {
                    Player::One => GameState::PlayerOneWin,
                    Player::Two => GameState::PlayerTwoWin,
                }
            } else if self.check_draw_move() {
                GameState::Draw
            } else {
                GameState::Playing
            };
        }
        self.play(column);
        self.game.push_str(&(column + 1).to_string());

        Ok(self.state)
    }

    fn check_draw_move(&self) -> bool {
        self.cells.iter().filter(|x| x.is_none()).count() == 1
    }

    fn playable(&self, column: usize) -> bool {
        self.heights[column] < HEIGHT
    }

    fn play(&mut self, column: usize) {
        self.cells[column + WIDTH * self.heights[column]] = Some(self.player);
        self.heights[column] += 1;
        self.num_moves += 1;
        self.player = self.player.other();
    }

    fn check_winning_move(&self, column: usize) -> bool {
        let player = Some(self.player);
        // check vertical alignment
        if self.heights[column] >= 3
            && self.cells[column + WIDTH * (self.heights[column] - 1)] == player
            && self.cells[column + WIDTH * (self.heights[column] - 2)] == player
            && self.cells[column + WIDTH * (self.heights[column] - 3)] == player
        {
            return true;
        }

        // check horizontal and diagonal alignment
        for dy_dx in -1i32..=1 {
            let mut run = 0;
            for dx in [-1i32, 1].iter() {
                let mut x = column as i32 + dx;
                let mut y = self.heights[column] as i32 + dx * dy_dx;
                while self.tile(x, y) == Some(player) {
                    x += dx;
                    y += dx * dy_dx;
                    run += 1;
                }
            }
            if run >= 3 {
                return true;
            }
        }

        false
    }

    // the tile at signed coordinates, or None when off the board
    fn tile(&self, column: i32, row: i32) -> Option<Option<Player>> {
        if column < 0 || column >= WIDTH as i32 || row < 0 || row >= HEIGHT as i32 {
            None
        } else {
            Some(self.cells[column as usize + WIDTH * row as usize])
        }
    }
}

impl Default for ArrayBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for ArrayBoard {
    type Player = Player;

    fn is_game_over(&self) -> bool {
        self.state != GameState::Playing
    }

    fn current_player(&self) -> Player {
        self.player
    }

    fn other_player(&self) -> Player {
        self.player.other()
    }

    fn cell(&self, row: usize, column: usize) -> Option<Player> {
        self.tile(column as i32, row as i32).flatten()
    }

    fn longest_chain(&self, player: Player) -> usize {
        let mut longest = 0;
        for (idx, cell) in self.cells.iter().enumerate() {
            if *cell != Some(player) {
                continue;
            }
            let (x, y) = ((idx % WIDTH) as i32, (idx / WIDTH) as i32);
            for (dx, dy) in DIRECTIONS.iter() {
                // only count runs from their first tile
                if self.tile(x - dx, y - dy) == Some(Some(player)) {
                    continue;
                }
                let mut run = 1;
                while self.tile(x + dx * run, y + dy * run) == Some(Some(player)) {
                    run += 1;
                }
                longest = longest.max(run as usize);
            }
        }
        longest
    }

    fn winning_line_count_through(&self, row: usize, column: usize, player: Player) -> usize {
        let blocker = Some(Some(player.other()));
        let (x, y) = (column as i32, row as i32);
        let mut count = 0;
        for (dx, dy) in DIRECTIONS.iter() {
            // every window of CONNECT tiles along this direction that covers (x, y)
            for offset in 0..CONNECT as i32 {
                let (start_x, start_y) = (x - dx * offset, y - dy * offset);
                let open = (0..CONNECT as i32).all(|i| {
                    let tile = self.tile(start_x + dx * i, start_y + dy * i);
                    tile.is_some() && tile != blocker
                });
                if open {
                    count += 1;
                }
            }
        }
        count
    }

    fn apply_move(&self, column: Move) -> Result<Self, InvalidMove> {
        let mut next = self.clone();
        next.try_play(column)?;
        Ok(next)
    }

    fn width(&self) -> usize {
        WIDTH
    }

    fn height(&self) -> usize {
        HEIGHT
    }
}
