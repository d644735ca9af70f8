pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{NVec2, NVec3, GridPoint, DepthPoint, Star, Particle, Shockwave, Attractor};
pub use simulation::canvas::{Canvas, DisplayList, DrawCommand, Rgba, Stroke};
pub use simulation::host::{Effect, EffectHost, HostEvent, Listener, PointerEvent, Viewport};
pub use simulation::scheduler::{FrameLoop, FrameRequest, LoopState, ResizeDebouncer};
pub use simulation::interactive_grid::InteractiveGrid;
pub use simulation::gravity_well::GravityWell;
pub use simulation::black_hole::BlackHoleGame;
pub use simulation::dot_morph::DotMorph;
pub use simulation::scenario::{Scenario, build_effect};

pub use configuration::config::{ConfigError, EffectKind, ScenarioConfig};

pub use visualization::viewer::run_viewer;

pub use benchmark::benchmark::{bench_effects, run_headless};
