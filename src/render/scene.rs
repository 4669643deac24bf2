use super::canvas::{Canvas, Rgb};
use crate::game::{GameConfig, GameState, Position};

pub const WALL_COLOR: Rgb = Rgb::new(127, 127, 127);
pub const FOOD_COLOR: Rgb = Rgb::new(255, 255, 0);
pub const SNAKE_COLOR: Rgb = Rgb::new(0, 255, 0);
pub const CRASHED_HEAD_COLOR: Rgb = Rgb::new(255, 0, 0);

/// Score overlay text
pub fn score_line(state: &GameState) -> String {
    format!(
        " [ Score: {} ] [ High Score: {} ]",
        state.score(),
        state.high_score
    )
}

/// Paint the whole board: walls, then food, then the snake from tail to
/// head so the head ends up on top. The head turns red once the game is over.
pub fn draw_scene(state: &GameState, config: &GameConfig, canvas: &mut impl Canvas) {
    let tile = config.tile_size;
    let mut fill = |pos: Position, color: Rgb| {
        canvas.fill_rect(pos.x * tile as i32, pos.y * tile as i32, tile, color);
    };

    for &wall in state.walls() {
        fill(wall, WALL_COLOR);
    }

    if let Some(food) = state.food {
        fill(food, FOOD_COLOR);
    }

    for (i, &segment) in state.snake_body().iter().enumerate().rev() {
        let color = if i == 0 && state.game_over {
            CRASHED_HEAD_COLOR
        } else {
            SNAKE_COLOR
        };
        fill(segment, color);
    }

    canvas.print(&score_line(state));
}
