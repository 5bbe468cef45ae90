use rand::Rng;
use Direction::*;

/// A board position, in board units. Both coordinates are multiples of the
/// grid size and always lie inside the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Up, Down, Left, Right];

    /// Unit vector in screen orientation (y grows downwards).
    pub fn vector(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// The playing field. Leaving one edge re-enters at the opposite edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
    grid_size: i32,
}

impl Board {
    /// Dimensions are assumed validated: positive multiples of `grid_size`.
    pub fn new(width: u32, height: u32, grid_size: u32) -> Self {
        Board { width: width as i32, height: height as i32, grid_size: grid_size as i32 }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn grid_size(&self) -> i32 {
        self.grid_size
    }

    pub fn columns(&self) -> i32 {
        self.width / self.grid_size
    }

    pub fn rows(&self) -> i32 {
        self.height / self.grid_size
    }

    pub fn cell_count(&self) -> usize {
        self.columns() as usize * self.rows() as usize
    }

    /// Middle of the board, snapped down onto the grid.
    pub fn center(&self) -> Cell {
        Cell::new(
            self.columns() / 2 * self.grid_size,
            self.rows() / 2 * self.grid_size,
        )
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    /// Moves one grid unit towards `direction`, wrapping each axis modulo the
    /// board dimension.
    pub fn step(&self, cell: Cell, direction: Direction) -> Cell {
        let (dx, dy) = direction.vector();
        Cell::new(
            (cell.x + dx * self.grid_size).rem_euclid(self.width),
            (cell.y + dy * self.grid_size).rem_euclid(self.height),
        )
    }

    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        Cell::new(
            rng.gen_range(0..self.columns()) * self.grid_size,
            rng.gen_range(0..self.rows()) * self.grid_size,
        )
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new(640, 480, 20)
    }
}
