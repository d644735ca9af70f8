use std::f64::consts::TAU;
use std::time::Instant;

use crate::configuration::config::{CursorConfig, EffectKind, ScenarioConfig, ViewportConfig};
use crate::simulation::canvas::DisplayList;
use crate::simulation::host::HostEvent;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec2;

const FRAME_MS: f64 = 1000.0 / 60.0;

/// Scripted pointer: a slow orbit around the viewport centre
fn orbit(width: f64, height: f64, frame: u64) -> NVec2 {
    let t = frame as f64 / 240.0 * TAU;
    let r = width.min(height) * 0.3;
    NVec2::new(width / 2.0 + r * t.cos(), height / 2.0 + r * t.sin())
}

/// Helper to build a default scenario config for `effect`
fn make_config(effect: EffectKind, width: f64, height: f64) -> ScenarioConfig {
    ScenarioConfig {
        effect,
        viewport: ViewportConfig { width, height },
        seed: 42,
        scroll: None,
        cursor: CursorConfig::default(),
        interactive_grid: Default::default(),
        gravity_well: Default::default(),
        black_hole: Default::default(),
        dot_morph: Default::default(),
    }
}

/// Drive a scenario for `frames` frames with a scripted pointer and scroll.
/// Returns the number of frames that actually ran.
pub fn run_headless(scenario: &mut Scenario, frames: u64) -> u64 {
    let mut list = DisplayList::new();
    let mut ran = 0;
    let mut commands = 0;

    for frame in 0..frames {
        let now = frame as f64 * FRAME_MS;
        let (w, h) = (scenario.viewport.width, scenario.viewport.height);

        scenario.dispatch(HostEvent::PointerMove(orbit(w, h, frame)), now);
        // one wheel line every few frames walks the morph through every shape
        if frame % 4 == 0 {
            scenario.wheel(1.0);
        }

        list.reset();
        if scenario.advance(now, &mut list) {
            ran += 1;
            commands += list.len();
        }
    }

    println!(
        "{}: {} frames, {:.1} draw calls per frame",
        scenario.host.effect().name(),
        ran,
        commands as f64 / ran.max(1) as f64
    );
    ran
}

/// Time every effect across phone to large desktop viewports
/// Paste output directly into excel to graph
pub fn bench_effects() {
    let kinds = [EffectKind::InteractiveGrid, EffectKind::GravityWell, EffectKind::BlackHole, EffectKind::DotMorph];
    let sizes = [(375.0, 667.0), (768.0, 1024.0), (1280.0, 720.0), (1920.0, 1080.0), (2560.0, 1440.0)];
    let warmup = 30;
    let frames = 300;

    println!("effect,width,height,ms_per_frame,draw_calls");

    for kind in kinds {
        for (w, h) in sizes {
            let mut scenario = Scenario::build_scenario(make_config(kind, w, h));
            let mut list = DisplayList::new();

            // Warm up so springs are moving, not asleep
            for frame in 0..warmup {
                let now = frame as f64 * FRAME_MS;
                scenario.dispatch(HostEvent::PointerMove(orbit(w, h, frame)), now);
                list.reset();
                scenario.advance(now, &mut list);
            }

            let mut draw_calls = 0;
            let t0 = Instant::now();
            for frame in warmup..warmup + frames {
                let now = frame as f64 * FRAME_MS;
                scenario.dispatch(HostEvent::PointerMove(orbit(w, h, frame)), now);
                list.reset();
                scenario.advance(now, &mut list);
                draw_calls += list.len();
            }
            let ms = t0.elapsed().as_secs_f64() * 1000.0 / frames as f64;

            println!(
                "{},{},{},{:.6},{}",
                scenario.host.effect().name(),
                w,
                h,
                ms,
                draw_calls / frames as usize
            );
            scenario.unmount();
        }
    }
}
