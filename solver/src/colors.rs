//! Palette: black walls, white corridors, yellow start, orange goal, grey
//! visited cells, a red search head and a green solution.

use maze_term::Rgb;

pub const WALL: Rgb = Rgb(0, 0, 0);
pub const OPEN: Rgb = Rgb(255, 255, 255);
pub const START: Rgb = Rgb(255, 255, 0);
pub const GOAL: Rgb = Rgb(255, 165, 0);
pub const VISITED: Rgb = Rgb(200, 200, 200);
pub const CURRENT: Rgb = Rgb(255, 0, 0);
pub const SOLUTION: Rgb = Rgb(0, 255, 0);

pub const BACKGROUND: Rgb = Rgb(128, 128, 128);
pub const TEXT: Rgb = Rgb(255, 255, 255);
pub const TEXT_DIM: Rgb = Rgb(60, 60, 60);
