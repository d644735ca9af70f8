pub mod states;
pub mod params;
pub mod canvas;
pub mod lattice;
pub mod scheduler;
pub mod host;
pub mod interactive_grid;
pub mod gravity_well;
pub mod black_hole;
pub mod shape_data;
pub mod shapes;
pub mod dot_morph;
pub mod scroll;
pub mod cursor;
pub mod scenario;
