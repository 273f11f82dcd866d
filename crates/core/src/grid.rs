//! Fixed-size wall/open occupancy grid queried by generation, collision, and sight checks.

use glam::Vec2;

use crate::types::Cell;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WallGrid {
    width: usize,
    height: usize,
    walls: Vec<bool>,
}

impl WallGrid {
    /// A grid where every cell is a wall.
    pub fn solid(width: usize, height: usize) -> Self {
        Self { width, height, walls: vec![true; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && (cell.x as usize) < self.width
            && (cell.y as usize) < self.height
    }

    /// Anything outside the grid counts as wall.
    pub fn is_wall(&self, cell: Cell) -> bool {
        if !self.in_bounds(cell) {
            return true;
        }
        self.walls[self.index(cell)]
    }

    pub fn is_open(&self, cell: Cell) -> bool {
        !self.is_wall(cell)
    }

    /// Whether the cell containing `point` (nearest-integer rounding) is a wall.
    pub fn is_wall_at(&self, point: Vec2) -> bool {
        self.is_wall(Cell::containing(point))
    }

    pub fn on_border(&self, cell: Cell) -> bool {
        cell.x == 0
            || cell.y == 0
            || cell.x as usize == self.width - 1
            || cell.y as usize == self.height - 1
    }

    /// Interior, still-walled cells are the only ones the carver may open.
    pub fn can_carve(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.on_border(cell) && self.is_wall(cell)
    }

    pub fn open(&mut self, cell: Cell) {
        if !self.in_bounds(cell) {
            return;
        }
        let idx = self.index(cell);
        self.walls[idx] = false;
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| Cell::new(x as i32, y as i32)))
    }

    pub fn open_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells().filter(|&cell| self.is_open(cell))
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + self.walls.len());
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        bytes.extend(self.walls.iter().map(|&wall| u8::from(wall)));
        bytes
    }

    /// One text row per grid row, top row first: `#` for wall, `.` for open.
    pub fn render_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                out.push(if self.is_wall(Cell::new(x as i32, y as i32)) { '#' } else { '.' });
            }
            out.push('\n');
        }
        out
    }

    fn index(&self, cell: Cell) -> usize {
        (cell.y as usize) * self.width + (cell.x as usize)
    }
}
