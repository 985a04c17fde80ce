use std::rc::Rc;

use anyhow::Result;
use glam::Vec2;
use log::{debug, info};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

use engine::game_loop::GameLoop;
use engine::input::{Action, InputConfig, InputManager, KeyBindings, TouchConfig};
use engine::physics::{BodyConfig, TileBody};
use game::level::{demo_level, DEMO_SPAWN};
use game::player::{PlayerController, PlayerStats, Pose};

mod core;
mod engine;
mod game;

/// Everything advanced by one simulation tick
struct Session {
    input: InputManager,
    player: PlayerController,
    body: TileBody,
    game_loop: GameLoop,
    last_pose: Pose,
}

impl Session {
    fn new(viewport_width: f32) -> Result<Self> {
        let map = Rc::new(demo_level());
        let spawn = Vec2::new(DEMO_SPAWN.0, DEMO_SPAWN.1);
        let body = TileBody::new(map, BodyConfig::default(), spawn)?;

        let stats = PlayerStats::default();
        stats.validate()?;

        let config = InputConfig::new(KeyBindings::default(), TouchConfig::default())?;

        Ok(Self {
            input: InputManager::new(config, viewport_width),
            player: PlayerController::new(stats),
            body,
            game_loop: GameLoop::new(),
            last_pose: Pose::Idle,
        })
    }

    /// Run the ticks owed for this frame
    fn frame(&mut self) {
        let ticks = self.game_loop.begin_frame();

        if self.game_loop.is_paused() {
            if self.input.is_just_pressed(Action::PauseGame) {
                self.game_loop.toggle_pause();
            }
            self.input.end_frame();
            return;
        }

        let dt = self.game_loop.fixed_timestep();
        for _ in 0..ticks {
            if self.input.is_just_pressed(Action::PauseGame) {
                self.game_loop.toggle_pause();
                info!(
                    "Paused after {} ticks over {} frames",
                    self.game_loop.tick_count(),
                    self.game_loop.frame_count()
                );
                self.input.end_frame();
                return;
            }

            let pose = self.player.update(&mut self.body, self.input.state(), dt);
            if pose != self.last_pose {
                debug!(
                    target: "player",
                    "{} (flip {}) at {:?}, {:?} with {} jumps left",
                    pose.animation_name(),
                    self.player.facing().flip_horizontal(),
                    self.body.position(),
                    self.player.state(),
                    self.player.jumps_remaining()
                );
                self.last_pose = pose;
            }

            self.input.end_frame();
        }
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Pickle Platformer...");

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Pickle Platformer")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    let mut session = Session::new(window.inner_size().width as f32)?;

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!("Close requested, shutting down...");
                    elwt.exit();
                }
                WindowEvent::Resized(physical_size) => {
                    info!("Window resized to {:?}", physical_size);
                    session.input.set_viewport_width(physical_size.width as f32);
                }
                WindowEvent::Focused(false) => {
                    // Key-up and touch-end events are lost while unfocused
                    session.input.release_all();
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    session.input.process_keyboard_event(&event);
                }
                WindowEvent::Touch(touch) => {
                    session.input.process_touch_event(&touch);
                }
                WindowEvent::CursorMoved { position, .. } => {
                    session
                        .input
                        .process_cursor_moved(position.x as f32, position.y as f32);
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    session.input.process_mouse_button(button, state);
                }
                WindowEvent::CursorLeft { .. } => {
                    session.input.process_cursor_left();
                }
                WindowEvent::RedrawRequested => {
                    session.frame();
                }
                _ => {}
            },
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
