use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::window::{CursorLeft, PrimaryWindow, WindowResized};

use crate::simulation::canvas::{DisplayList, DrawCommand, Rgba};
use crate::simulation::cursor::{CursorLayer, TransformCache};
use crate::simulation::host::{HostEvent, Viewport};
use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec2;

/// Last recorded frame, replayed with gizmos
#[derive(Resource, Default)]
struct Frame(DisplayList);

/// Retained cursor transforms written on pointer moves
#[derive(Resource, Default)]
struct CursorTransforms(TransformCache);

const PREVIEW_SIZE: Vec2 = Vec2::new(200.0, 112.5); // 16:9
const PIXELS_PER_LINE: f64 = 60.0;

pub fn run_viewer(scenario: Scenario) {
    info!("run_viewer: starting Bevy viewer for {:?}", scenario.kind);

    let resolution = (scenario.viewport.width as f32, scenario.viewport.height as f32);

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(scenario)
        .init_resource::<Frame>()
        .init_resource::<CursorTransforms>()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "motionfield".into(),
                resolution: resolution.into(),
                ..default()
            }),
            ..default()
        }))
        .add_systems(Startup, setup_system)
        .add_systems(Update, (input_system, frame_system, draw_system, cursor_system).chain())
        .add_systems(Last, unmount_on_exit_system)
        .run();
}

fn setup_system(mut commands: Commands, scenario: Res<Scenario>, mut windows: Query<&mut Window, With<PrimaryWindow>>) {
    // 2D camera, origin at the window centre
    commands.spawn(Camera2dBundle::default());

    if scenario.cursor.is_some() {
        if let Ok(mut window) = windows.get_single_mut() {
            window.cursor.visible = false;
        }
    }
}

fn now_ms(time: &Time) -> f64 {
    time.elapsed_seconds_f64() * 1000.0
}

fn to_client(p: Vec2) -> NVec2 {
    NVec2::new(p.x as f64, p.y as f64)
}

/// Canvas space (origin top-left, y down) to world space (origin centre, y up)
fn to_world(p: &NVec2, window: &Window) -> Vec2 {
    Vec2::new(p.x as f32 - window.width() / 2.0, window.height() / 2.0 - p.y as f32)
}

fn to_color(c: Rgba) -> Color {
    Color::srgba(c.r as f32 / 255.0, c.g as f32 / 255.0, c.b as f32 / 255.0, c.a as f32)
}

#[allow(clippy::too_many_arguments)]
fn input_system(
    mut scenario: ResMut<Scenario>,
    mut transforms: ResMut<CursorTransforms>,
    time: Res<Time>,
    windows: Query<&Window, With<PrimaryWindow>>,
    touches: Res<Touches>,
    mut resized: EventReader<WindowResized>,
    mut left: EventReader<CursorLeft>,
    mut wheel: EventReader<MouseWheel>,
    mut last_cursor: Local<Option<Vec2>>,
) {
    let now = now_ms(&time);

    for event in resized.read() {
        let viewport = Viewport::sized(event.width as f64, event.height as f64);
        scenario.dispatch(HostEvent::Resize(viewport), now);
    }

    if let Ok(window) = windows.get_single() {
        if let Some(position) = window.cursor_position() {
            if *last_cursor != Some(position) {
                *last_cursor = Some(position);
                let client = to_client(position);
                scenario.dispatch(HostEvent::PointerMove(client), now);
                if let Some(cursor) = scenario.cursor.as_mut() {
                    cursor.pointer_moved(client, &mut transforms.0);
                }
            }
        }
    }

    let touch_points: Vec<NVec2> = touches.iter().map(|t| to_client(t.position())).collect();
    if !touch_points.is_empty() {
        scenario.dispatch(HostEvent::TouchMove(touch_points), now);
    }

    for _ in left.read() {
        *last_cursor = None;
        scenario.dispatch(HostEvent::PointerLeave, now);
    }

    for event in wheel.read() {
        // wheel up is positive, scrolling down the page is positive lines
        let lines = match event.unit {
            MouseScrollUnit::Line => -event.y as f64,
            MouseScrollUnit::Pixel => -event.y as f64 / PIXELS_PER_LINE,
        };
        scenario.wheel(lines);
    }
}

fn frame_system(mut scenario: ResMut<Scenario>, mut frame: ResMut<Frame>, time: Res<Time>) {
    frame.0.reset();
    scenario.advance(now_ms(&time), &mut frame.0);
}

/// Gizmos only stroke, so discs are filled with concentric rings
fn fill_disc(gizmos: &mut Gizmos, center: Vec2, radius: f32, color: Color) {
    let mut r = radius;
    while r > 0.0 {
        gizmos.circle_2d(center, r, color);
        r -= 1.0;
    }
}

fn draw_system(
    frame: Res<Frame>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut clear: ResMut<ClearColor>,
    mut gizmos: Gizmos,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    for command in frame.0.commands() {
        match command {
            DrawCommand::Clear(color) => {
                // transparent effects were tuned on a white page
                clear.0 = if color.a == 0.0 { Color::WHITE } else { to_color(*color) };
            }
            DrawCommand::Line { from, to, stroke } => {
                gizmos.line_2d(to_world(from, window), to_world(to, window), to_color(stroke.color));
            }
            DrawCommand::FillCircle { center, radius, color } => {
                fill_disc(&mut gizmos, to_world(center, window), *radius as f32, to_color(*color));
            }
            DrawCommand::StrokeCircle { center, radius, stroke } => {
                gizmos.circle_2d(to_world(center, window), *radius as f32, to_color(stroke.color));
            }
            DrawCommand::FillRect { min, size, color } => {
                let center = to_world(&(min + size / 2.0), window);
                gizmos.rect_2d(center, 0.0, Vec2::new(size.x as f32, size.y as f32), to_color(*color));
            }
            DrawCommand::FillPolygon { points, color } => {
                let mut outline: Vec<Vec2> = points.iter().map(|p| to_world(p, window)).collect();
                if let Some(first) = outline.first().copied() {
                    outline.push(first);
                }
                gizmos.linestrip_2d(outline, to_color(*color));
            }
            DrawCommand::RadialGlow { center, inner, outer, color } => {
                let center = to_world(center, window);
                let rings = 8;
                for k in 0..rings {
                    let t = k as f64 / rings as f64;
                    let r = inner + (outer - inner) * t;
                    let ring = color.with_alpha(color.a * (1.0 - t));
                    gizmos.circle_2d(center, r as f32, to_color(ring));
                }
            }
        }
    }
}

fn cursor_system(
    scenario: Res<Scenario>,
    transforms: Res<CursorTransforms>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut gizmos: Gizmos,
) {
    let (Some(stage), Ok(window)) = (scenario.cursor.as_ref(), windows.get_single()) else {
        return;
    };

    let lime = to_color(Rgba::NEON_LIME);
    if let Some((at, _)) = transforms.0.get(CursorLayer::Cursor) {
        fill_disc(&mut gizmos, to_world(&at, window), (stage.overlay.size() / 2.0) as f32, lime);
    }

    if stage.overlay.preview_visible() {
        if let Some((at, _)) = transforms.0.get(CursorLayer::Preview) {
            let top_left = to_world(&at, window);
            let center = top_left + Vec2::new(PREVIEW_SIZE.x / 2.0, -PREVIEW_SIZE.y / 2.0);
            gizmos.rect_2d(center, 0.0, PREVIEW_SIZE, Color::srgba(1.0, 1.0, 1.0, 0.2));
        }
    }
}

fn unmount_on_exit_system(mut exits: EventReader<AppExit>, mut scenario: ResMut<Scenario>) {
    if exits.read().next().is_some() {
        scenario.unmount();
    }
}
