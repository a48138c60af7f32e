//! Scene drawing: hole, rock and HUD
//!
//! Drawing never touches simulation state. The rock's rough outline uses a
//! caller-supplied jitter RNG so physics stays reproducible regardless of
//! what is rendered.

use rand::Rng;

use super::{Color, RectMode, Surface};
use crate::consts::ROCK_JITTER;
use crate::sim::{Hole, Rock, SimState};

pub const BACKGROUND: Color = Color::gray(200);
pub const FLASH_BACKGROUND: Color = Color::rgb(255, 0, 0);
pub const HOLE_FILL: Color = Color::BLACK;
pub const LAYER_STROKE: Color = Color::gray(30);
pub const ROCK_FILL: Color = Color::gray(100);
pub const HUD_FILL: Color = Color::BLACK;
pub const HUD_TEXT_SIZE: f32 = 16.0;

/// Black shaft with a line at every rock layer
pub fn draw_hole<S: Surface + ?Sized>(surface: &mut S, hole: &Hole) {
    surface.fill(HOLE_FILL);
    surface.no_stroke();
    surface.rect(hole.x, hole.y, hole.width, hole.depth, RectMode::Corner);

    surface.stroke(LAYER_STROKE);
    for y in hole.marker_depths() {
        surface.line(hole.x, y, hole.right(), y);
    }
}

/// Rotated square with a little per-frame size jitter so it reads as rough stone
pub fn draw_rock<S: Surface + ?Sized, R: Rng>(surface: &mut S, rock: &Rock, jitter: &mut R) {
    surface.push();
    surface.translate(rock.pos.x, rock.pos.y);
    surface.rotate(rock.rotation);
    surface.fill(ROCK_FILL);
    surface.no_stroke();

    let size = rock.radius * 2.0;
    let w = size + jitter.random_range(-ROCK_JITTER..ROCK_JITTER);
    let h = size + jitter.random_range(-ROCK_JITTER..ROCK_JITTER);
    surface.rect(0.0, 0.0, w, h, RectMode::Center);

    surface.pop();
}

/// Depth and frame rate overlay, in screen space
pub fn draw_hud<S: Surface + ?Sized>(surface: &mut S, depth: i32, fps: f32) {
    surface.fill(HUD_FILL);
    surface.text_size(HUD_TEXT_SIZE);
    surface.text(&format!("Depth: {}m", depth), 10.0, 20.0);
    surface.text(&format!("Framerate: {}", fps.max(0.0).floor() as u32), 10.0, 40.0);
}

/// Draw a full frame: background, world under the camera transform, HUD
pub fn render_frame<S: Surface + ?Sized, R: Rng>(
    surface: &mut S,
    state: &SimState,
    flashing: bool,
    jitter: &mut R,
    fps: f32,
) {
    surface.background(if flashing { FLASH_BACKGROUND } else { BACKGROUND });

    surface.push();
    surface.translate(0.0, -state.camera.y);
    draw_hole(surface, &state.hole);
    draw_rock(surface, &state.rock, jitter);
    surface.pop();

    draw_hud(surface, state.depth(), fps);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::renderer::{DrawCommand, RecordingSurface};
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn count<F: Fn(&DrawCommand) -> bool>(surface: &RecordingSurface, f: F) -> usize {
        surface.commands().iter().filter(|&c| f(c)).count()
    }

    #[test]
    fn test_draw_hole() {
        let mut surface = RecordingSurface::new();
        draw_hole(&mut surface, &Hole::default());

        let cmds = surface.commands();
        assert_eq!(cmds[0], DrawCommand::Fill(HOLE_FILL));
        assert_eq!(cmds[1], DrawCommand::NoStroke);
        assert_eq!(
            cmds[2],
            DrawCommand::Rect {
                x: 175.0,
                y: 400.0,
                w: 50.0,
                h: 10_000.0,
                mode: RectMode::Corner
            }
        );
        assert_eq!(cmds[3], DrawCommand::Stroke(LAYER_STROKE));
        assert_eq!(count(&surface, |c| matches!(c, DrawCommand::Line { .. })), 200);
        assert_eq!(
            cmds[4],
            DrawCommand::Line {
                x1: 175.0,
                y1: 400.0,
                x2: 225.0,
                y2: 400.0
            }
        );
    }

    #[test]
    fn test_draw_rock_jitter_bounds() {
        let rock = Rock::new(Vec2::new(200.0, 300.0), Vec2::ZERO, ROCK_RADIUS, 0.0);
        let mut jitter = Pcg32::seed_from_u64(11);

        for _ in 0..200 {
            let mut surface = RecordingSurface::new();
            draw_rock(&mut surface, &rock, &mut jitter);
            assert_eq!(surface.depth(), 0);

            let rect = surface
                .commands()
                .iter()
                .find_map(|c| match c {
                    DrawCommand::Rect { w, h, mode, .. } => Some((*w, *h, *mode)),
                    _ => None,
                })
                .unwrap();
            assert_eq!(rect.2, RectMode::Center);
            assert!((rect.0 - 20.0).abs() <= ROCK_JITTER);
            assert!((rect.1 - 20.0).abs() <= ROCK_JITTER);
        }
    }

    #[test]
    fn test_draw_rock_transform() {
        let mut rock = Rock::new(Vec2::new(190.0, 800.0), Vec2::ZERO, ROCK_RADIUS, 0.0);
        rock.rotation = 0.4;
        let mut surface = RecordingSurface::new();
        draw_rock(&mut surface, &rock, &mut Pcg32::seed_from_u64(0));

        let cmds = surface.commands();
        assert_eq!(cmds[0], DrawCommand::Push);
        assert_eq!(cmds[1], DrawCommand::Translate(190.0, 800.0));
        assert_eq!(cmds[2], DrawCommand::Rotate(0.4));
        assert_eq!(cmds[3], DrawCommand::Fill(ROCK_FILL));
        assert_eq!(*cmds.last().unwrap(), DrawCommand::Pop);
    }

    #[test]
    fn test_draw_hud() {
        let mut surface = RecordingSurface::new();
        draw_hud(&mut surface, 1234, 59.7);
        assert_eq!(surface.texts(), vec!["Depth: 1234m", "Framerate: 59"]);
        assert!(surface.commands().contains(&DrawCommand::TextSize(16.0)));

        let mut surface = RecordingSurface::new();
        draw_hud(&mut surface, -350, 0.0);
        assert_eq!(surface.texts(), vec!["Depth: -350m", "Framerate: 0"]);
    }

    #[test]
    fn test_render_frame_structure() {
        let rock = Rock::new(Vec2::new(200.0, 2000.0), Vec2::ZERO, ROCK_RADIUS, 0.0);
        let mut state = SimState::with_bodies(1, rock, Hole::default());
        state.camera.update(state.rock.pos.y, &state.hole);

        let mut surface = RecordingSurface::new();
        let mut jitter = Pcg32::seed_from_u64(2);
        render_frame(&mut surface, &state, false, &mut jitter, 60.0);

        let cmds = surface.commands();
        assert_eq!(cmds[0], DrawCommand::Background(BACKGROUND));
        assert_eq!(cmds[1], DrawCommand::Push);
        assert_eq!(cmds[2], DrawCommand::Translate(0.0, -1700.0));
        assert_eq!(surface.depth(), 0);

        // HUD is drawn after the world transform is popped
        let last_pop = cmds.iter().rposition(|c| *c == DrawCommand::Pop).unwrap();
        let first_text = cmds
            .iter()
            .position(|c| matches!(c, DrawCommand::Text { .. }))
            .unwrap();
        assert!(first_text > last_pop);
        assert_eq!(surface.texts(), vec!["Depth: 1600m", "Framerate: 60"]);
    }

    #[test]
    fn test_render_frame_flash_background() {
        let state = SimState::new(1);
        let mut surface = RecordingSurface::new();
        render_frame(&mut surface, &state, true, &mut Pcg32::seed_from_u64(0), 60.0);
        assert_eq!(surface.commands()[0], DrawCommand::Background(FLASH_BACKGROUND));
    }
}
