use crate::direction::Direction;

/// Position of a cell inside its grid, row-major.
///
/// Neighbor links store these instead of references, so the graph's
/// A↔B cycles never turn into ownership cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellId {
    pub row: usize,
    pub col: usize,
}

impl CellId {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// État d'une cellule vis-à-vis du dernier chemin calculé.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathState {
    /// Not touched by the last solve pass.
    Unknown,
    /// On the discovered path.
    Correct,
    /// Explored and proven a dead end.
    Incorrect,
}

/// Une cellule du labyrinthe : liens vers ses voisines, murs, et
/// annotations laissées par le solveur.
///
/// Neighbor and wall slots are indexed by `Direction`. A wall flag is
/// only meaningful where a neighbor exists; the grid boundary reads as
/// permanently walled. Links and walls are mutated through the owning
/// [`Grid`](crate::grid::Grid) only, which keeps both endpoints of an
/// edge in agreement.
#[derive(Debug, Clone)]
pub struct Cell {
    id: CellId,
    neighbors: [Option<CellId>; 4],
    walls: [bool; 4],
    pub state: PathState,
    /// Direction of the next path cell, toward the goal.
    pub next: Option<Direction>,
    /// Direction of the previous path cell, back toward the start.
    pub previous: Option<Direction>,
}

impl Cell {
    pub(crate) fn new(id: CellId) -> Self {
        Self {
            id,
            neighbors: [None; 4],
            walls: [true; 4],
            state: PathState::Unknown,
            next: None,
            previous: None,
        }
    }

    pub fn id(&self) -> CellId {
        self.id
    }

    pub fn row(&self) -> usize {
        self.id.row
    }

    pub fn col(&self) -> usize {
        self.id.col
    }

    /// La voisine dans cette direction, s'il y en a une.
    pub fn neighbor(&self, direction: Direction) -> Option<CellId> {
        self.neighbors[direction as usize]
    }

    /// Wall state toward `direction`; the maze boundary counts as a wall.
    pub fn has_wall(&self, direction: Direction) -> bool {
        match self.neighbors[direction as usize] {
            Some(_) => self.walls[direction as usize],
            None => true,
        }
    }

    /// Every linked neighbor, in `Direction::ALL` order.
    pub fn neighbors(&self) -> impl Iterator<Item = (Direction, CellId)> + '_ {
        Direction::ALL
            .iter()
            .filter_map(move |&direction| self.neighbor(direction).map(|id| (direction, id)))
    }

    /// Les voisines accessibles : liées et sans mur entre les deux.
    pub fn unblocked_neighbors(&self) -> Vec<(Direction, CellId)> {
        self.neighbors()
            .filter(|&(direction, _)| !self.has_wall(direction))
            .collect()
    }

    pub(crate) fn set_neighbor(&mut self, direction: Direction, neighbor: CellId) {
        self.neighbors[direction as usize] = Some(neighbor);
        self.walls[direction as usize] = true;
    }

    pub(crate) fn clear_neighbor(&mut self, direction: Direction) {
        self.neighbors[direction as usize] = None;
        self.walls[direction as usize] = true;
    }

    pub(crate) fn set_wall_flag(&mut self, direction: Direction, blocked: bool) {
        self.walls[direction as usize] = blocked;
    }

    pub(crate) fn reset_path(&mut self) {
        self.state = PathState::Unknown;
        self.next = None;
        self.previous = None;
    }
}
