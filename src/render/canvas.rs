/// An opaque 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Drawing surface the scene is painted on
pub trait Canvas {
    /// Fill a `size`x`size` square whose top-left corner is at pixel (x, y)
    fn fill_rect(&mut self, x: i32, y: i32, size: u32, color: Rgb);

    /// Print an overlay line of text
    fn print(&mut self, text: &str);
}

/// Canvas that folds pixels back into board cells, one color per cell.
///
/// Used by the terminal front end, where a cell is the smallest thing
/// that can be drawn.
#[derive(Debug, Clone)]
pub struct CellCanvas {
    width: usize,
    height: usize,
    tile_size: u32,
    cells: Vec<Option<Rgb>>,
    overlay: Vec<String>,
}

impl CellCanvas {
    /// Canvas covering a `width_px`x`height_px` logical screen, one cell
    /// per `tile_size` square
    pub fn new(width_px: u32, height_px: u32, tile_size: u32) -> Self {
        let tile_size = tile_size.max(1);
        let width = (width_px / tile_size) as usize;
        let height = (height_px / tile_size) as usize;

        Self {
            width,
            height,
            tile_size,
            cells: vec![None; width * height],
            overlay: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Color painted last at cell (x, y), if any
    pub fn cell(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells[y * self.width + x]
    }

    pub fn overlay(&self) -> &[String] {
        &self.overlay
    }
}

impl Canvas for CellCanvas {
    fn fill_rect(&mut self, x: i32, y: i32, size: u32, color: Rgb) {
        let tile = self.tile_size as i32;
        let first_x = x.div_euclid(tile);
        let first_y = y.div_euclid(tile);
        let last_x = (x + size as i32 - 1).div_euclid(tile);
        let last_y = (y + size as i32 - 1).div_euclid(tile);

        for cy in first_y.max(0)..=last_y.min(self.height as i32 - 1) {
            for cx in first_x.max(0)..=last_x.min(self.width as i32 - 1) {
                self.cells[cy as usize * self.width + cx as usize] = Some(color);
            }
        }
    }

    fn print(&mut self, text: &str) {
        self.overlay.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);

    #[test]
    fn test_tile_maps_to_one_cell() {
        let mut canvas = CellCanvas::new(32, 24, 8);
        canvas.fill_rect(16, 8, 8, RED);

        assert_eq!(canvas.cell(2, 1), Some(RED));
        assert_eq!(canvas.cell(1, 1), None);
        assert_eq!(canvas.cell(3, 1), None);
        assert_eq!(canvas.cell(2, 2), None);
    }

    #[test]
    fn test_out_of_range_is_clipped() {
        let mut canvas = CellCanvas::new(32, 24, 8);
        canvas.fill_rect(-8, -8, 16, RED);
        canvas.fill_rect(100, 100, 8, RED);

        assert_eq!(canvas.cell(0, 0), Some(RED));
        assert_eq!(canvas.cell(1, 0), None);
        assert_eq!(canvas.cell(9, 9), None);
    }

    #[test]
    fn test_sized_from_logical_resolution() {
        let canvas = CellCanvas::new(384, 216, 8);
        assert_eq!((canvas.width(), canvas.height()), (48, 27));

        // A partial tile at the edge is not a cell
        let canvas = CellCanvas::new(20, 9, 8);
        assert_eq!((canvas.width(), canvas.height()), (2, 1));
    }

    #[test]
    fn test_overlay_text() {
        let mut canvas = CellCanvas::new(1, 1, 1);
        canvas.print("hello");
        assert_eq!(canvas.overlay(), &["hello".to_string()]);
    }
}
