use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

use crate::data::Pos;

#[derive(Clone, PartialEq, Eq)]
pub struct Vec2d<T> {
    data: Vec<T>,
    width: i32,
    height: i32,
}

impl<T> Vec2d<T> {
    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    pub fn get(&self, pos: Pos) -> Option<&T> {
        if self.contains(pos) {
            Some(&self.data[self.index_of(pos)])
        } else {
            None
        }
    }

    pub(crate) fn positions(&self) -> Positions {
        Positions {
            width: self.width,
            height: self.height,
            next: 0,
        }
    }

    pub(crate) fn scratchpad<U: Default + Clone>(&self) -> Vec2d<U> {
        self.scratchpad_with_default(U::default())
    }

    pub(crate) fn scratchpad_with_default<U: Clone>(&self, default: U) -> Vec2d<U> {
        Vec2d {
            data: vec![default; self.data.len()],
            width: self.width,
            height: self.height,
        }
    }

    fn index_of(&self, pos: Pos) -> usize {
        debug_assert!(self.contains(pos), "{:?} outside of the grid", pos);
        pos.y as usize * self.width as usize + pos.x as usize
    }
}

impl<T: Clone> Vec2d<T> {
    /// Rows shorter than the longest one are padded with `pad`.
    pub fn new(rows: &[Vec<T>], pad: T) -> Self {
        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        let mut data = Vec::with_capacity(rows.len() * width);
        for row in rows {
            data.extend_from_slice(row);
            for _ in row.len()..width {
                data.push(pad.clone());
            }
        }
        Vec2d {
            data,
            width: width as i32,
            height: rows.len() as i32,
        }
    }
}

#[derive(Debug)]
pub(crate) struct Positions {
    width: i32,
    height: i32,
    next: i32,
}

impl Iterator for Positions {
    type Item = Pos;

    fn next(&mut self) -> Option<Pos> {
        if self.width == 0 || self.next >= self.width * self.height {
            return None;
        }
        let pos = Pos::new(self.next % self.width, self.next / self.width);
        self.next += 1;
        Some(pos)
    }
}

impl Display for Vec2d<bool> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.width == 0 {
            return Ok(());
        }
        for row in self.data.chunks(self.width as usize) {
            for &cell in row {
                write!(f, "{}", if cell { 1 } else { 0 })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: Debug> Debug for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.width == 0 {
            return Ok(());
        }
        for row in self.data.chunks(self.width as usize) {
            for cell in row {
                write!(f, "{:?} ", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, pos: Pos) -> &Self::Output {
        let index = self.index_of(pos);
        &self.data[index]
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, pos: Pos) -> &mut Self::Output {
        let index = self.index_of(pos);
        &mut self.data[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_and_indexing() {
        let grid = Vec2d::new(&[vec![1, 2, 3], vec![4]], 0);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid[Pos::new(2, 0)], 3);
        assert_eq!(grid[Pos::new(0, 1)], 4);
        assert_eq!(grid[Pos::new(2, 1)], 0);
        assert_eq!(grid.get(Pos::new(3, 0)), None);
        assert_eq!(grid.get(Pos::new(0, -1)), None);
        assert_eq!(grid.get(Pos::new(1, 1)), Some(&0));
    }

    #[test]
    fn positions_are_row_major() {
        let grid = Vec2d::new(&[vec![(); 2], vec![(); 2]], ());
        let positions: Vec<_> = grid.positions().collect();
        assert_eq!(
            positions,
            vec![Pos::new(0, 0), Pos::new(1, 0), Pos::new(0, 1), Pos::new(1, 1)]
        );
    }

    #[test]
    fn formatting_bools() {
        let mut grid: Vec2d<bool> = Vec2d::new(&[vec![false; 3], vec![false; 3]], false);
        grid[Pos::new(1, 1)] = true;
        assert_eq!(grid.to_string(), "000\n010\n");
    }
}
