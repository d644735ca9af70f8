use std::path::PathBuf;

use proptest::prelude::*;

use motionfield::configuration::config::{ConfigError, EffectKind, ScenarioConfig};
use motionfield::simulation::black_hole::BlackHoleGame;
use motionfield::simulation::canvas::{Canvas, DisplayList, DrawCommand, Rgba};
use motionfield::simulation::cursor::{
    CursorLayer, CursorOverlay, ElementTree, TransformCache, CURSOR_HOVER_SIZE, CURSOR_SIZE, HOVER_ATTRIBUTE,
    PREVIEW_ATTRIBUTE, PREVIEW_OFFSET,
};
use motionfield::simulation::dot_morph::{floating_offset, DotMorph, MorphPhase};
use motionfield::simulation::gravity_well::GravityWell;
use motionfield::simulation::host::{Effect, EffectHost, HostEvent, Listener, PointerEvent, Viewport};
use motionfield::simulation::interactive_grid::InteractiveGrid;
use motionfield::simulation::lattice::Lattice;
use motionfield::simulation::params::{
    BlackHoleParams, DotMorphParams, Fidelity, GravityWellParams, InteractiveGridParams, Tiered,
};
use motionfield::simulation::scenario::Scenario;
use motionfield::simulation::scheduler::{FrameLoop, LoopState, ResizeDebouncer};
use motionfield::simulation::scroll::{ScrollProgress, ScrollState};
use motionfield::simulation::shapes::{path_points, resample, shape_points, ShapeKind, ShapeLibrary, DOT_COUNT};
use motionfield::simulation::states::NVec2;

const FRAME_MS: f64 = 1000.0 / 60.0;

/// Desktop-sized container at the origin
pub fn desktop() -> Viewport {
    Viewport::sized(1280.0, 720.0)
}

/// Phone-sized container, below the reduced-fidelity breakpoint
pub fn mobile() -> Viewport {
    Viewport::sized(390.0, 844.0)
}

/// Run `frames` steps of an effect directly, without a host
pub fn run_frames<E: Effect>(effect: &mut E, start_frame: u64, frames: u64) {
    for frame in start_frame..start_frame + frames {
        effect.step(frame as f64 * FRAME_MS);
    }
}

/// Black-hole game laid out for `viewport`
pub fn game_for(viewport: Viewport) -> BlackHoleGame {
    let mut game = BlackHoleGame::new(BlackHoleParams::default(), 42);
    game.resize(viewport);
    game
}

/// Park the hole just beside the first active star and step one frame.
/// Returns false once no active star remains.
pub fn chase_one(game: &mut BlackHoleGame, frame: u64) -> bool {
    let Some(target) = game.stars().iter().find(|s| s.active && !s.spawning).map(|s| s.x) else {
        return false;
    };
    game.pointer(PointerEvent::Move(target + NVec2::new(3.0, 0.0)));
    game.step(frame as f64 * FRAME_MS);
    true
}

/// Chase stars until the first explosion. Returns the frame it happened on.
pub fn play_until_explosion(game: &mut BlackHoleGame) -> u64 {
    let before = game.explosions();
    for frame in 0..20_000 {
        chase_one(game, frame);
        if game.explosions() > before {
            return frame;
        }
    }
    panic!("no explosion after 20000 frames, collected {}/{}", game.collected(), game.total_stars());
}

/// Effect that records the order of host callbacks
#[derive(Default)]
pub struct Recorder {
    pub calls: Vec<String>,
    pub progress: Option<f64>,
}

impl Effect for Recorder {
    fn name(&self) -> &'static str {
        "recorder"
    }

    fn listeners(&self) -> &'static [Listener] {
        &[Listener::Resize, Listener::PointerMove]
    }

    fn resize_debounce_ms(&self) -> f64 {
        100.0
    }

    fn resize(&mut self, viewport: Viewport) {
        self.calls.push(format!("resize {}x{}", viewport.width, viewport.height));
    }

    fn pointer(&mut self, event: PointerEvent) {
        if let PointerEvent::Move(at) = event {
            self.calls.push(format!("pointer {},{}", at.x, at.y));
        }
    }

    fn set_progress(&mut self, progress: f64) {
        self.progress = Some(progress);
    }

    fn step(&mut self, _now_ms: f64) {
        self.calls.push("step".to_string());
    }

    fn render(&mut self, canvas: &mut dyn Canvas) {
        canvas.clear(Rgba::TRANSPARENT);
        self.calls.push("render".to_string());
    }
}

fn scenario_path(file_name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

// ==================================================================================
// Lattice tests
// ==================================================================================

#[test]
fn lattice_layout_counts_and_offset() {
    let lattice = Lattice::layout(1280.0, 720.0, 60.0, 2, 1.0);

    // ceil(1280/60)=22, ceil(720/60)=12, plus two extra cells each
    assert_eq!(lattice.cols, 24);
    assert_eq!(lattice.rows, 14);
    assert_eq!(lattice.anchors.len(), 24 * 14);
    assert_eq!(lattice.anchors[0], NVec2::new(-60.0, -60.0));
    assert_eq!(lattice.anchors[lattice.index(1, 2)], NVec2::new(0.0, 60.0));
}

#[test]
fn lattice_edges_rows_then_columns() {
    let lattice = Lattice::layout(100.0, 50.0, 50.0, 1, 0.0); // 3 x 2
    let edges: Vec<(usize, usize)> = lattice.edges().collect();

    assert_eq!(edges.len(), 2 * 2 + 3);
    assert_eq!(edges[0], (0, 1));
    assert_eq!(edges[3], (4, 5));
    assert_eq!(edges[4], (0, 3));
}

#[test]
fn lattice_unmeasured_is_empty() {
    let lattice = Lattice::layout(0.0, 720.0, 60.0, 2, 1.0);
    assert_eq!(lattice.anchors.len(), 0);
    assert_eq!(lattice.edges().count(), 0);
}

// ==================================================================================
// Interactive grid tests
// ==================================================================================

#[test]
fn grid_reacts_only_inside_radius_on_first_frame() {
    let viewport = desktop();
    let mut host = EffectHost::new(InteractiveGrid::new(InteractiveGridParams::default()));
    let request = host.mount(viewport);

    let center = viewport.center();
    assert!(host.dispatch(HostEvent::PointerMove(center), 0.0));

    let mut list = DisplayList::new();
    host.frame(request, FRAME_MS, &mut list).expect("frame should run");

    let grid = host.effect();
    assert_eq!(grid.lattice().cols, 17); // gap 80 on a desktop viewport
    let radius_sq = 300.0 * 300.0;
    for p in grid.points() {
        let displacement = p.displacement_sq();
        if (p.base - center).norm_squared() < radius_sq {
            assert!(displacement > 0.0, "point {:?} inside radius did not move", p.base);
        } else {
            assert_eq!(displacement, 0.0, "point {:?} outside radius moved", p.base);
        }
    }
}

#[test]
fn grid_settles_back_onto_anchors() {
    let mut grid = InteractiveGrid::new(InteractiveGridParams::default());
    grid.resize(desktop());
    grid.pointer(PointerEvent::Move(desktop().center()));
    run_frames(&mut grid, 0, 30);
    assert!(grid.awake() > 0);

    grid.pointer(PointerEvent::Move(NVec2::new(-5000.0, -5000.0)));
    assert_eq!(grid.pointer_position(), NVec2::new(-5000.0, -5000.0));
    run_frames(&mut grid, 30, 300);

    assert_eq!(grid.awake(), 0);
    for p in grid.points() {
        assert!(p.displacement_sq() < 1e-12, "point {:?} did not settle", p.base);
    }
}

#[test]
fn grid_mobile_uses_wider_gap() {
    let mut grid = InteractiveGrid::new(InteractiveGridParams::default());
    grid.resize(mobile());
    // ceil(390/100)+1, ceil(844/100)+1
    assert_eq!(grid.lattice().cols, 5);
    assert_eq!(grid.lattice().rows, 10);
}

#[test]
fn grid_unmeasured_viewport_stays_uninitialized() {
    let mut grid = InteractiveGrid::new(InteractiveGridParams::default());
    grid.resize(Viewport::sized(0.0, 0.0));
    grid.step(0.0);

    let mut list = DisplayList::new();
    grid.render(&mut list);
    assert!(!grid.is_initialized());
    assert_eq!(list.commands(), &[DrawCommand::Clear(Rgba::TRANSPARENT)]);
}

// ==================================================================================
// Gravity well tests
// ==================================================================================

#[test]
fn gravity_well_sinks_under_pointer() {
    let mut well = GravityWell::new(GravityWellParams::default());
    well.resize(desktop());
    well.pointer(PointerEvent::Move(desktop().center()));
    run_frames(&mut well, 0, 120);

    let deepest = well.points().iter().map(|p| p.x.z).fold(0.0, f64::max);
    assert!(deepest > 200.0, "deepest point only reached z = {deepest}");
}

#[test]
fn gravity_well_returns_flat_after_leave() {
    let mut well = GravityWell::new(GravityWellParams::default());
    well.resize(desktop());
    well.pointer(PointerEvent::Move(NVec2::new(300.0, 200.0)));
    run_frames(&mut well, 0, 45);

    well.pointer(PointerEvent::Leave);
    assert_eq!(well.pointer_position(), None);
    run_frames(&mut well, 45, 600);

    for p in well.points() {
        assert!((p.x - p.base).norm() < 1e-6, "point {:?} drifted to {:?}", p.base, p.x);
        assert!(p.x.z.abs() < 1e-6);
    }
}

#[test]
fn gravity_well_edge_colour_ramp() {
    let well = GravityWell::new(GravityWellParams::default());

    assert_eq!(well.intensity(0.0), 0.0);
    assert_eq!(well.intensity(-50.0), 0.0);
    assert_eq!(well.intensity(250.0), 1.0);

    let flat = GravityWell::edge_color(0.0);
    assert_eq!((flat.r, flat.g, flat.b), (40, 40, 40));
    assert!((flat.a - 0.15).abs() < 1e-12);

    let deep = GravityWell::edge_color(1.0);
    assert_eq!((deep.r, deep.g, deep.b), (204, 255, 0));
    assert!((deep.a - 1.0).abs() < 1e-12);
}

#[test]
fn gravity_well_flat_projection_is_identity() {
    let mut well = GravityWell::new(GravityWellParams::default());
    well.resize(desktop());

    for segment in well.segments() {
        assert!(segment.from.x >= -100.0 && segment.from.x <= 1380.0);
        assert!(segment.from.y >= -100.0 && segment.from.y <= 820.0);
        assert_eq!(segment.intensity, 0.0);
    }
    // culled edges never reach the canvas
    assert!(well.segments().len() < well.lattice().edges().count());
}

// ==================================================================================
// Black-hole game tests
// ==================================================================================

#[test]
fn black_hole_round_sizes_by_fidelity() {
    assert_eq!(game_for(desktop()).total_stars(), 80);
    assert_eq!(game_for(mobile()).total_stars(), 40);
    assert_eq!(game_for(desktop()).round(), 1);
}

#[test]
fn black_hole_collected_is_monotonic_and_resets() {
    let mut game = game_for(desktop());
    let mut last = 0;
    let mut swallowed: Vec<usize> = Vec::new();

    for frame in 0..20_000 {
        chase_one(&mut game, frame);

        if game.explosions() == 1 {
            assert_eq!(game.collected(), 0);
            assert_eq!(game.round(), 2);
            assert!(game.stars().iter().all(|s| s.active && s.spawning));
            return;
        }

        assert!(game.collected() >= last, "collected went {} -> {}", last, game.collected());
        last = game.collected();

        // once swallowed, never back within the round
        for &i in &swallowed {
            assert!(!game.stars()[i].active, "star {i} came back");
        }
        swallowed = (0..game.total_stars()).filter(|&i| !game.stars()[i].active).collect();
        assert_eq!(swallowed.len(), game.collected());
    }
    panic!("round never finished");
}

#[test]
fn black_hole_explodes_once_per_crossing() {
    let mut game = game_for(desktop());
    let frame = play_until_explosion(&mut game);
    assert_eq!(game.explosions(), 1);
    assert_eq!(game.shockwaves().len(), 1);
    assert_eq!(game.particles().len(), 60);

    // the hole stays put: freshly spawned stars are not capturable yet
    game.step((frame + 1) as f64 * FRAME_MS);
    assert_eq!(game.explosions(), 1);
    assert_eq!(game.shockwaves().len(), 1);
}

#[test]
fn black_hole_explosion_frame_eases_by_finished_round() {
    let mut game = game_for(desktop());
    play_until_explosion(&mut game);

    // reset to 20, then one easing step toward the full-progress radius of 100
    assert!((game.attractor().radius - 28.0).abs() < 1e-9, "radius {}", game.attractor().radius);
    assert_eq!(game.progress(), 0.0);
}

#[test]
fn black_hole_rendering_does_not_change_the_round() {
    let mut quiet = game_for(desktop());
    let mut drawn = game_for(desktop());
    let mut list = DisplayList::new();

    let mut exploded_at = None;
    for frame in 0..20_000 {
        chase_one(&mut quiet, frame);
        chase_one(&mut drawn, frame);
        list.reset();
        drawn.render(&mut list);

        if quiet.explosions() > 0 || drawn.explosions() > 0 {
            exploded_at = Some(frame);
            break;
        }
    }
    assert!(exploded_at.is_some(), "round never finished");
    assert_eq!(quiet.explosions(), drawn.explosions());
    assert_eq!(quiet.total_stars(), drawn.total_stars());

    for (a, b) in quiet.stars().iter().zip(drawn.stars()) {
        assert_eq!(a.v, b.v);
        assert_eq!(a.size, b.size);
        assert_eq!(a.alpha, b.alpha);
    }
    for (a, b) in quiet.particles().iter().zip(drawn.particles()) {
        assert_eq!(a.v, b.v);
    }
}

#[test]
fn black_hole_cap_grows_desktop() {
    let mut game = game_for(desktop());
    play_until_explosion(&mut game);
    // min(floor(80 * 1.1), 120)
    assert_eq!(game.star_cap(), 88);
    assert_eq!(game.total_stars(), 88);
}

#[test]
fn black_hole_cap_grows_mobile() {
    let mut game = game_for(mobile());
    play_until_explosion(&mut game);
    // min(floor(40 * 1.1), 50)
    assert_eq!(game.star_cap(), 44);
    assert_eq!(game.particles().len(), 30);
}

#[test]
fn black_hole_cap_is_clamped() {
    let params = BlackHoleParams {
        initial_stars: Tiered::new(118, 40),
        ..BlackHoleParams::default()
    };
    let mut game = BlackHoleGame::new(params, 7);
    game.resize(desktop());
    play_until_explosion(&mut game);
    assert_eq!(game.star_cap(), 120);
}

#[test]
fn black_hole_empty_round_has_zero_progress() {
    let params = BlackHoleParams {
        initial_stars: Tiered::new(0, 0),
        ..BlackHoleParams::default()
    };
    let mut game = BlackHoleGame::new(params, 1);
    game.resize(desktop());
    game.pointer(PointerEvent::Move(desktop().center()));
    run_frames(&mut game, 0, 10);

    assert_eq!(game.progress(), 0.0);
    assert_eq!(game.explosions(), 0);
    assert!(game.attractor().radius.is_finite());
    assert!((game.attractor().radius - 20.0).abs() < 1e-9);
}

#[test]
fn black_hole_shockwave_fades_then_disappears() {
    let mut game = game_for(desktop());
    let mut frame = play_until_explosion(&mut game);
    let mut last_opacity = game.shockwaves()[0].opacity;

    // out of reach of every star, so no second round can finish
    game.pointer(PointerEvent::Move(NVec2::new(-5000.0, -5000.0)));
    let mut list = DisplayList::new();
    for _ in 0..100 {
        frame += 1;
        game.step(frame as f64 * FRAME_MS);
        list.reset();
        game.render(&mut list);

        let Some(wave) = game.shockwaves().first() else {
            break;
        };
        assert!(wave.opacity > 0.0);
        assert!(wave.opacity < last_opacity, "opacity {} !< {}", wave.opacity, last_opacity);
        last_opacity = wave.opacity;
    }
    assert!(game.shockwaves().is_empty());
}

#[test]
fn black_hole_idle_hint_points_at_nearest_star() {
    let mut game = game_for(desktop());
    // far corner, nowhere near the stars' gravity
    game.pointer(PointerEvent::Move(NVec2::new(-2000.0, -2000.0)));
    game.step(0.0);
    assert!(!game.is_idle());

    game.step(1500.0);
    assert!(game.is_idle());

    let mut list = DisplayList::new();
    game.render(&mut list);
    let arrows = list.commands().iter().filter(|c| matches!(c, DrawCommand::FillPolygon { .. })).count();
    assert_eq!(arrows, 1);
}

#[test]
fn black_hole_render_starts_black() {
    let mut game = game_for(desktop());
    game.step(0.0);
    let mut list = DisplayList::new();
    game.render(&mut list);

    assert_eq!(list.commands()[0], DrawCommand::Clear(Rgba::BLACK));
    assert_eq!(list.filled_circles().count(), 80 + 1); // stars plus the orb core
}

// ==================================================================================
// Shape library tests
// ==================================================================================

#[test]
fn shapes_all_resolve_to_dot_count() {
    let library = ShapeLibrary::build();
    assert_eq!(library.len(), ShapeKind::ALL.len());
    for kind in ShapeKind::ALL {
        assert_eq!(library.get(kind).len(), DOT_COUNT);
        assert!(library.get(kind).iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }
}

#[test]
fn shapes_lookup_matches_library() {
    let library = ShapeLibrary::shared();
    for kind in ShapeKind::ALL {
        assert_eq!(&shape_points(kind.index()), library.get(kind));
    }
    assert_eq!(&shape_points(42), library.get(ShapeKind::Logo));
    assert_eq!(shape_points(2), shape_points(2));
}

#[test]
fn shapes_index_past_end_is_logo() {
    assert_eq!(ShapeKind::from_index(7), ShapeKind::Logo);
    assert_eq!(ShapeKind::from_index(99), ShapeKind::Logo);
    assert_eq!(ShapeKind::from_index(0), ShapeKind::Puzzle);
}

#[test]
fn shapes_resample_single_point_fills_every_slot() {
    let only = NVec2::new(3.0, -4.0);
    assert!(resample(&[only]).iter().all(|p| *p == only));
    assert!(resample(&[]).iter().all(|p| *p == NVec2::zeros()));
}

#[test]
fn shapes_path_points_even_spacing() {
    let nodes = [NVec2::new(0.0, 0.0), NVec2::new(10.0, 0.0)];
    let points = path_points(&nodes, 5);
    assert_eq!(points.len(), 5);
    assert!((points[1].x - 2.0).abs() < 1e-12);
    assert!((points[4].x - 8.0).abs() < 1e-12);
    assert!(path_points(&nodes[..1], 5).is_empty());
}

proptest! {
    #[test]
    fn shapes_resample_any_length(raw in prop::collection::vec((-500.0f64..500.0, -500.0f64..500.0), 0..3000)) {
        let raw: Vec<NVec2> = raw.into_iter().map(|(x, y)| NVec2::new(x, y)).collect();
        let points = resample(&raw);
        prop_assert_eq!(points.len(), DOT_COUNT);
        if !raw.is_empty() {
            prop_assert!(points.iter().all(|p| raw.contains(p)));
            prop_assert_eq!(points[0], raw[0]);
        }
    }

    #[test]
    fn morph_phase_always_in_unit_range(progress in prop::num::f64::ANY) {
        let phase = MorphPhase::at(progress, &DotMorphParams::default());
        prop_assert!((0.0..=1.0).contains(&phase.t));
        prop_assert!((0.0..=1.0).contains(&phase.eased));
    }
}

// ==================================================================================
// Dot morph tests
// ==================================================================================

#[test]
fn morph_phase_boundaries() {
    let params = DotMorphParams::default();

    let start = MorphPhase::at(0.0, &params);
    assert_eq!((start.from, start.to, start.eased), (ShapeKind::Puzzle, ShapeKind::Eye, 0.0));

    // second half of the first phrase: past the hold, mid-snap
    let mid = MorphPhase::at(0.75 / 7.0 * 0.8, &params);
    assert_eq!(mid.from, ShapeKind::Puzzle);
    assert!(mid.t > 0.0 && mid.t < 1.0);

    let end = MorphPhase::at(1.0, &params);
    assert_eq!((end.from, end.to), (ShapeKind::Heart, ShapeKind::Logo));
    assert_eq!(end.t, 1.0);
}

#[test]
fn dot_morph_rest_at_first_shape() {
    let viewport = Viewport::sized(1280.0, 800.0);
    let mut morph = DotMorph::new(DotMorphParams::default());
    morph.resize(viewport);
    morph.set_progress(0.0);
    morph.step(0.0);

    let puzzle = ShapeLibrary::shared().get(ShapeKind::Puzzle);
    assert_eq!(morph.dots().len(), DOT_COUNT);
    for (i, dot) in morph.dots().iter().enumerate() {
        let expected = viewport.center() + puzzle[i] * 1.9 + floating_offset(i, morph.time(), 2.0);
        assert!((dot.center - expected).norm() < 1e-9, "dot {i} off its slot");
        assert!((dot.radius - 2.2).abs() < 1e-12);
    }
}

#[test]
fn dot_morph_end_at_logo() {
    let viewport = mobile();
    let mut morph = DotMorph::new(DotMorphParams::default());
    morph.resize(viewport);
    morph.set_progress(1.0);
    morph.step(0.0);

    assert_eq!(morph.render_scale(), 1.3);
    let logo = ShapeLibrary::shared().get(ShapeKind::Logo);
    for (i, dot) in morph.dots().iter().enumerate() {
        let expected = viewport.center() + logo[i] * 1.3 + floating_offset(i, morph.time(), 2.0);
        assert!((dot.center - expected).norm() < 1e-6, "dot {i} not on the logo");
    }
}

#[test]
fn dot_morph_nan_progress_is_zero() {
    let mut morph = DotMorph::new(DotMorphParams::default());
    morph.resize(desktop());
    morph.set_progress(f64::NAN);
    morph.step(0.0);

    assert_eq!(morph.progress(), 0.0);
    assert!(morph.dots().iter().all(|d| d.center.x.is_finite() && d.center.y.is_finite()));
}

// ==================================================================================
// Scroll tests
// ==================================================================================

#[test]
fn scroll_progress_guards_short_sections() {
    assert_eq!(ScrollProgress::from_scroll(100.0, 500.0, 800.0).value(), 0.0);
    assert_eq!(ScrollProgress::from_scroll(100.0, 800.0, 800.0).value(), 0.0);
    assert_eq!(ScrollProgress::from_scroll(f64::NAN, 5600.0, 800.0).value(), 0.0);
    assert_eq!(ScrollProgress::from_scroll(2400.0, 5600.0, 800.0).value(), 0.5);
    assert_eq!(ScrollProgress::from_scroll(-50.0, 5600.0, 800.0).value(), 0.0);
}

#[test]
fn scroll_wheel_clamps_to_range() {
    let mut scroll = ScrollState::new(5600.0, 60.0);
    assert_eq!(scroll.wheel(-3.0, 800.0).value(), 0.0);
    assert!((scroll.wheel(40.0, 800.0).value() - 0.5).abs() < 1e-12);
    assert_eq!(scroll.wheel(1000.0, 800.0).value(), 1.0);
    assert_eq!(scroll.offset, 4800.0);
}

// ==================================================================================
// Scheduler tests
// ==================================================================================

#[test]
fn frame_loop_rejects_stale_tokens() {
    let mut frame_loop = FrameLoop::new();
    let first = frame_loop.start();
    assert!(frame_loop.fire(first));
    assert!(!frame_loop.fire(first));

    let second = frame_loop.rearm().expect("running loop rearms");
    assert_ne!(first, second);
    assert!(second.id() > first.id());
    assert!(frame_loop.fire(second));
    assert_eq!(frame_loop.frames(), 2);
}

#[test]
fn frame_loop_cancel_is_idempotent() {
    let mut frame_loop = FrameLoop::new();
    let request = frame_loop.start();
    frame_loop.cancel();
    frame_loop.cancel();

    assert_eq!(frame_loop.state(), LoopState::Cancelled);
    assert_eq!(frame_loop.pending(), None);
    assert!(!frame_loop.fire(request));
    assert_eq!(frame_loop.rearm(), None);
}

#[test]
fn debouncer_keeps_latest_size() {
    let mut debouncer = ResizeDebouncer::new(100.0);
    debouncer.push(Viewport::sized(800.0, 600.0), 0.0);
    debouncer.push(Viewport::sized(900.0, 600.0), 50.0);
    debouncer.push(Viewport::sized(1000.0, 600.0), 90.0);

    assert_eq!(debouncer.poll(150.0), None);
    assert_eq!(debouncer.poll(190.0), Some(Viewport::sized(1000.0, 600.0)));
    assert_eq!(debouncer.poll(400.0), None);
    assert!(!debouncer.is_pending());
}

// ==================================================================================
// Host lifecycle tests
// ==================================================================================

#[test]
fn host_steps_before_render() {
    let mut host = EffectHost::new(Recorder::default());
    let request = host.mount(desktop());
    let mut list = DisplayList::new();
    let next = host.frame(request, 0.0, &mut list);

    assert!(next.is_some());
    assert_eq!(host.effect().calls, vec!["resize 1280x720", "step", "render"]);
}

#[test]
fn host_maps_pointer_into_container_space() {
    let mut host = EffectHost::new(Recorder::default());
    host.mount(Viewport { left: 100.0, top: 50.0, width: 400.0, height: 300.0 });
    host.dispatch(HostEvent::PointerMove(NVec2::new(150.0, 80.0)), 0.0);

    assert_eq!(host.effect().calls.last().map(String::as_str), Some("pointer 50,30"));
}

#[test]
fn host_debounces_resize_into_one_relayout() {
    let mut host = EffectHost::new(Recorder::default());
    let mut request = host.mount(desktop());
    let mut list = DisplayList::new();

    for (i, width) in [900.0, 1000.0, 1100.0].into_iter().enumerate() {
        host.dispatch(HostEvent::Resize(Viewport::sized(width, 700.0)), i as f64 * 10.0);
        request = host.frame(request, i as f64 * 10.0, &mut list).expect("loop running");
    }
    request = host.frame(request, 200.0, &mut list).expect("loop running");
    host.frame(request, 300.0, &mut list);

    let resizes: Vec<&String> = host.effect().calls.iter().filter(|c| c.starts_with("resize")).collect();
    assert_eq!(resizes, vec!["resize 1280x720", "resize 1100x700"]);
    assert_eq!(host.viewport(), Viewport::sized(1100.0, 700.0));
}

#[test]
fn host_ignores_unregistered_events() {
    let mut host = EffectHost::new(Recorder::default());
    host.mount(desktop());

    assert!(!host.dispatch(HostEvent::PointerLeave, 0.0));
    assert!(!host.dispatch(HostEvent::TouchMove(vec![NVec2::new(1.0, 1.0)]), 0.0));
}

#[test]
fn host_unmount_stops_everything() {
    let mut host = EffectHost::new(Recorder::default());
    let request = host.mount(desktop());
    host.unmount();
    host.unmount();

    let mut list = DisplayList::new();
    assert!(!host.is_mounted());
    assert!(host.listeners().is_empty());
    assert_eq!(host.frame(request, 0.0, &mut list), None);
    assert!(!host.dispatch(HostEvent::PointerMove(NVec2::zeros()), 0.0));
    host.set_progress(0.5);

    assert_eq!(host.effect().progress, None);
    assert_eq!(host.effect().calls, vec!["resize 1280x720"]);
    assert!(list.is_empty());
    assert_eq!(host.frame_loop().state(), LoopState::Cancelled);
}

#[test]
fn host_fidelity_breakpoint() {
    assert_eq!(Viewport::sized(767.0, 500.0).fidelity(), Fidelity::Reduced);
    assert_eq!(Viewport::sized(768.0, 500.0).fidelity(), Fidelity::Full);
}

// ==================================================================================
// Cursor tests
// ==================================================================================

/// Root, one preview card with a nested label, one plain hover card
fn cursor_tree() -> (ElementTree, usize, usize, usize, usize) {
    let mut tree = ElementTree::new();
    let root = tree.add(None, Some((NVec2::zeros(), NVec2::new(1280.0, 720.0))));
    let card = tree.add(Some(root), Some((NVec2::new(80.0, 200.0), NVec2::new(320.0, 180.0))));
    tree.set_attribute(card, HOVER_ATTRIBUTE, "");
    tree.set_attribute(card, PREVIEW_ATTRIBUTE, "img/work-01.jpg");
    let label = tree.add(Some(card), Some((NVec2::new(100.0, 340.0), NVec2::new(100.0, 20.0))));
    let plain = tree.add(Some(root), Some((NVec2::new(480.0, 200.0), NVec2::new(320.0, 180.0))));
    tree.set_attribute(plain, HOVER_ATTRIBUTE, "");
    (tree, root, card, label, plain)
}

#[test]
fn cursor_hover_resolves_through_ancestors() {
    let (tree, root, _card, label, plain) = cursor_tree();
    let mut overlay = CursorOverlay::new();

    let state = overlay.pointer_over(&tree, Some(label)).clone();
    assert!(state.hovering);
    assert_eq!(state.preview.as_deref(), Some("img/work-01.jpg"));
    assert!(overlay.preview_visible());
    assert_eq!(overlay.size(), CURSOR_HOVER_SIZE);

    overlay.pointer_over(&tree, Some(plain));
    assert!(overlay.hover().hovering);
    assert!(!overlay.preview_visible());

    overlay.pointer_over(&tree, Some(root));
    assert!(!overlay.hover().hovering);
    assert_eq!(overlay.size(), CURSOR_SIZE);
}

#[test]
fn cursor_hit_test_prefers_deepest() {
    let (tree, root, card, label, _plain) = cursor_tree();
    assert_eq!(tree.hit_test(NVec2::new(110.0, 350.0)), Some(label));
    assert_eq!(tree.hit_test(NVec2::new(90.0, 210.0)), Some(card));
    assert_eq!(tree.hit_test(NVec2::new(10.0, 10.0)), Some(root));
    assert_eq!(tree.hit_test(NVec2::new(5000.0, 10.0)), None);
}

#[test]
fn cursor_moves_write_two_transforms() {
    let mut overlay = CursorOverlay::new();
    let mut cache = TransformCache::default();
    overlay.pointer_moved(NVec2::new(200.0, 100.0), &mut cache);

    assert_eq!(cache.writes(), 2);
    assert_eq!(cache.get(CursorLayer::Cursor).map(|(at, _)| at), Some(NVec2::new(200.0, 100.0)));
    assert_eq!(
        cache.get(CursorLayer::Preview).map(|(at, _)| at),
        Some(NVec2::new(200.0, 100.0) + PREVIEW_OFFSET)
    );
    assert_eq!(overlay.position(), Some(NVec2::new(200.0, 100.0)));
}

// ==================================================================================
// Config and scenario tests
// ==================================================================================

#[test]
fn config_shipped_scenarios_load() {
    for file in [
        "black_hole.yaml",
        "black_hole_mobile.yaml",
        "interactive_grid.yaml",
        "gravity_well.yaml",
        "dot_morph.yaml",
        "portfolio_cursor.yaml",
    ] {
        let cfg = ScenarioConfig::from_path(&scenario_path(file));
        assert!(cfg.is_ok(), "{file}: {:?}", cfg.err());
    }
}

#[test]
fn config_overrides_keep_other_defaults() {
    let yaml = r#"
effect: "black_hole"
viewport: { width: 1280, height: 720 }
black_hole:
  idle_timeout_ms: 1500
  initial_stars: { full: 60, reduced: 30 }
"#;
    let cfg = ScenarioConfig::from_yaml_str(yaml).expect("valid scenario");
    assert_eq!(cfg.effect, EffectKind::BlackHole);
    assert_eq!(cfg.seed, 42);
    assert_eq!(cfg.black_hole.idle_timeout_ms, 1500.0);
    assert_eq!(cfg.black_hole.initial_stars, Tiered::new(60, 30));
    assert_eq!(cfg.black_hole.max_stars, Tiered::new(120, 50));
    assert!(!cfg.cursor.enabled);
}

#[test]
fn config_rejects_bad_input() {
    let zero = "effect: \"dot_morph\"\nviewport: { width: 0, height: 720 }\n";
    assert!(matches!(ScenarioConfig::from_yaml_str(zero), Err(ConfigError::InvalidViewport { .. })));

    let target = r#"
effect: "interactive_grid"
viewport: { width: 1280, height: 720 }
cursor:
  enabled: true
  targets:
    - bounds: [0, 0, 100, 100]
    - bounds: [0, 0, 100, -1]
"#;
    assert!(matches!(ScenarioConfig::from_yaml_str(target), Err(ConfigError::InvalidTarget { index: 1 })));

    let unknown = "effect: \"lava_lamp\"\nviewport: { width: 10, height: 10 }\n";
    assert!(matches!(ScenarioConfig::from_yaml_str(unknown), Err(ConfigError::Parse(_))));

    let missing = ScenarioConfig::from_path(&scenario_path("does_not_exist.yaml"));
    assert!(matches!(missing, Err(ConfigError::Io { .. })));
}

#[test]
fn scenario_wheel_drives_morph() {
    let cfg = ScenarioConfig::from_path(&scenario_path("dot_morph.yaml")).expect("shipped scenario");
    let mut scenario = Scenario::build_scenario(cfg);
    let mut list = DisplayList::new();

    assert!(scenario.advance(0.0, &mut list));
    assert_eq!(list.filled_circles().count(), DOT_COUNT);

    scenario.wheel(40.0); // 2400 px of 4800 scrollable
    let progress = scenario.scroll.as_ref().map(|s| s.progress(800.0).value());
    assert_eq!(progress, Some(0.5));

    scenario.unmount();
    list.reset();
    assert!(!scenario.advance(FRAME_MS, &mut list));
    assert!(list.is_empty());
}

#[test]
fn scenario_cursor_tracks_hover() {
    let cfg = ScenarioConfig::from_path(&scenario_path("portfolio_cursor.yaml")).expect("shipped scenario");
    let mut scenario = Scenario::build_scenario(cfg);
    let mut cache = TransformCache::default();

    let stage = scenario.cursor.as_mut().expect("cursor enabled");
    stage.pointer_moved(NVec2::new(100.0, 220.0), &mut cache);
    assert_eq!(stage.overlay.hover().preview.as_deref(), Some("img/work-01.jpg"));

    stage.pointer_moved(NVec2::new(900.0, 220.0), &mut cache);
    assert!(stage.overlay.hover().hovering);
    assert!(!stage.overlay.preview_visible());

    stage.pointer_moved(NVec2::new(10.0, 10.0), &mut cache);
    assert!(!stage.overlay.hover().hovering);
    assert_eq!(cache.writes(), 6);
}
