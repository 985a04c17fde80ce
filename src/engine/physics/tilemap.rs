// Solid/empty tile grid used for terrain collision

/// A rectangular grid of square tiles.
///
/// Columns outside the grid and rows below it count as solid, so bodies
/// can neither walk off the sides nor fall out of the level. Rows above the
/// grid are open sky.
#[derive(Debug, Clone)]
pub struct TileMap {
    columns: usize,
    rows: usize,
    tile_size: f32,
    solid: Vec<bool>,
}

impl TileMap {
    /// Create an empty map
    pub fn new(columns: usize, rows: usize, tile_size: f32) -> Self {
        Self {
            columns,
            rows,
            tile_size,
            solid: vec![false; columns * rows],
        }
    }

    /// Build a map from text rows; `#` is solid, anything else is empty.
    /// Short rows are padded with empty tiles.
    pub fn from_rows(rows: &[&str], tile_size: f32) -> Self {
        let columns = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let mut map = Self::new(columns, rows.len(), tile_size);
        for (row, line) in rows.iter().enumerate() {
            for (column, c) in line.chars().enumerate() {
                if c == '#' {
                    map.set_solid(column, row, true);
                }
            }
        }
        map
    }

    /// Mark a tile solid or empty; out-of-range tiles are ignored
    pub fn set_solid(&mut self, column: usize, row: usize, solid: bool) {
        if column < self.columns && row < self.rows {
            self.solid[row * self.columns + column] = solid;
        }
    }

    /// Solidity of a tile by grid coordinates
    pub fn is_solid(&self, column: i64, row: i64) -> bool {
        if column < 0 || column >= self.columns as i64 {
            return true;
        }
        if row >= self.rows as i64 {
            return true;
        }
        if row < 0 {
            return false;
        }
        self.solid[row as usize * self.columns + column as usize]
    }

    /// Grid index containing a world coordinate
    pub fn tile_index(&self, world: f32) -> i64 {
        (world / self.tile_size).floor() as i64
    }

    /// Check for any solid tile in an inclusive index rectangle
    pub fn any_solid(&self, columns: (i64, i64), rows: (i64, i64)) -> bool {
        (rows.0..=rows.1).any(|row| (columns.0..=columns.1).any(|col| self.is_solid(col, row)))
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    #[allow(dead_code)]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[allow(dead_code)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Level size in world units
    #[allow(dead_code)]
    pub fn world_width(&self) -> f32 {
        self.columns as f32 * self.tile_size
    }

    #[allow(dead_code)]
    pub fn world_height(&self) -> f32 {
        self.rows as f32 * self.tile_size
    }
}
