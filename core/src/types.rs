/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Zero-based `(x, y)` grid position.
pub type Pos = (Coord, Coord);

pub const fn area(width: Coord, height: Coord) -> CellCount {
    width as CellCount * height as CellCount
}

/// Conversion into an `ndarray` index, `[x, y]` order throughout the crate.
pub trait GridIndex {
    type Output;
    fn grid_index(self) -> Self::Output;
}

impl GridIndex for Pos {
    type Output = [usize; 2];

    fn grid_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

const MOORE: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// The in-bounds part of the Moore neighborhood of `pos` on a grid of size
/// `bounds`: up to 8 positions, fewer at edges and corners.
pub fn moore_neighbors(pos: Pos, bounds: Pos) -> impl Iterator<Item = Pos> {
    MOORE.into_iter().filter_map(move |(dx, dy)| {
        let x = i32::from(pos.0) + dx;
        let y = i32::from(pos.1) + dy;
        let inside = x >= 0 && y >= 0 && x < i32::from(bounds.0) && y < i32::from(bounds.1);
        inside.then(|| (x as Coord, y as Coord))
    })
}
