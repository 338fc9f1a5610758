//! Brick Breaker entry point
//!
//! Native: headless runner for soak tests and demos.
//! Web: Canvas 2D shell driving the simulation from requestAnimationFrame.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::f64::consts::TAU;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use brick_breaker::Settings;
    use brick_breaker::platform::{FrameClock, InputAdapter, Key};
    use brick_breaker::renderer::{DrawCommand, command::FONT, draw_frame};
    use brick_breaker::sim::{Game, GameEvent, RoundState};

    /// Game instance holding all state
    struct App {
        game: Game,
        input: InputAdapter,
        clock: FrameClock,
        last_time: f64,
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
    }

    impl App {
        /// Run simulation ticks for the time elapsed since the last frame
        fn update(&mut self, dt: f32) {
            let steps = self.clock.frame(dt);
            for _ in 0..steps {
                self.game.advance(self.clock.step());
            }

            for event in self.game.drain_events() {
                if let GameEvent::RoundOver(outcome) = event {
                    log::info!(
                        "{} (score {})",
                        outcome.message().unwrap_or_default(),
                        self.game.score()
                    );
                }
            }
        }

        /// Paint the current frame
        fn render(&self) {
            let ctx = &self.ctx;
            let settings = self.game.settings();
            ctx.clear_rect(
                0.0,
                0.0,
                settings.arena_width as f64,
                settings.arena_height as f64,
            );
            ctx.set_font(FONT);

            for command in draw_frame(self.game.world()) {
                match command {
                    DrawCommand::Circle {
                        center,
                        radius,
                        color,
                    } => {
                        ctx.begin_path();
                        let _ = ctx.arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
                        ctx.set_fill_style_str(&color.to_css());
                        ctx.fill();
                        ctx.close_path();
                    }
                    DrawCommand::Rect { pos, size, color } => {
                        ctx.set_fill_style_str(&color.to_css());
                        ctx.fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
                    }
                    DrawCommand::Text {
                        pos,
                        text,
                        color,
                        centered,
                    } => {
                        ctx.set_text_align(if centered { "center" } else { "start" });
                        ctx.set_fill_style_str(&color.to_css());
                        let _ = ctx.fill_text(&text, pos.x as f64, pos.y as f64);
                    }
                }
            }
        }

        /// Start over after the player acknowledged a finished round
        fn acknowledge(&mut self) {
            if self.game.round_state() != RoundState::Playing {
                self.game.reset();
                self.clock.reset();
                log::info!("New game");
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Brick Breaker starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("breakout")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let settings = Settings::load_stored();
        canvas.set_width(settings.arena_width as u32);
        canvas.set_height(settings.arena_height as u32);

        let app = Rc::new(RefCell::new(App {
            game: Game::new(settings),
            input: InputAdapter::new(),
            clock: FrameClock::default(),
            last_time: 0.0,
            canvas,
            ctx,
        }));

        setup_input_handlers(app.clone());
        request_animation_frame(app);

        log::info!("Brick Breaker running!");
    }

    fn key_of(event: &KeyboardEvent) -> Option<Key> {
        Key::from_name(&event.key()).or_else(|| Key::from_code(event.key_code()))
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Key down
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut a = app.borrow_mut();
                if event.key() == "Enter" || event.key() == " " {
                    a.acknowledge();
                }
                if let Some(intent) = a.input.key_down(key_of(&event)) {
                    intent.apply(&mut a.game);
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut a = app.borrow_mut();
                if let Some(intent) = a.input.key_up(key_of(&event)) {
                    intent.apply(&mut a.game);
                }
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move - absolute paddle position
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut a = app.borrow_mut();
                let canvas_left = a.canvas.offset_left() as f32;
                let canvas_width = a.canvas.client_width() as f32;
                let arena_width = a.game.settings().arena_width;
                if let Some(intent) =
                    a.input
                        .pointer_move(event.client_x() as f32, canvas_left, canvas_width, arena_width)
                {
                    intent.apply(&mut a.game);
                }
            });
            let _ = document
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Click - acknowledge a finished round
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().acknowledge();
            });
            let _ = document
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur - keys released while unfocused never send keyup
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut a = app.borrow_mut();
                let intent = a.input.release_all();
                intent.apply(&mut a.game);
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();

            // Calculate delta time
            let dt = if a.last_time > 0.0 {
                ((time - a.last_time) / 1000.0) as f32
            } else {
                a.clock.step()
            };
            a.last_time = time;

            a.update(dt);
            a.render();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use clap::Parser;

    use brick_breaker::Settings;
    use brick_breaker::consts::SIM_DT;
    use brick_breaker::sim::{Autopilot, Game, GameEvent};

    #[derive(Parser)]
    #[command(name = "brick-breaker")]
    #[command(about = "Run the brick breaker simulation headless", long_about = None)]
    struct Cli {
        /// Settings JSON file (defaults when omitted)
        #[arg(long)]
        settings: Option<PathBuf>,

        /// Maximum ticks to simulate
        #[arg(long, default_value_t = 36_000)]
        ticks: u64,

        /// Drive the paddle with the autopilot instead of idling
        #[arg(long, default_value = "false")]
        autopilot: bool,

        /// Autopilot aim seed
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Print the final world state as JSON
        #[arg(long, default_value = "false")]
        snapshot: bool,

        /// Print the effective settings as JSON and exit
        #[arg(long, default_value = "false")]
        dump_settings: bool,
    }

    pub fn run() -> Result<()> {
        env_logger::init();
        let cli = Cli::parse();

        let settings = match &cli.settings {
            Some(path) => Settings::load(path)
                .with_context(|| format!("loading settings from {}", path.display()))?,
            None => Settings::default(),
        };

        if cli.dump_settings {
            println!("{}", settings.to_json()?);
            return Ok(());
        }

        log::info!("Brick Breaker (native) starting...");

        let mut game = Game::new(settings);
        let mut pilot = cli.autopilot.then(|| Autopilot::new(cli.seed));

        while game.world().ticks < cli.ticks {
            if let Some(pilot) = pilot.as_mut() {
                let input = pilot.drive(game.world());
                game.set_paddle_intent(input.move_left, input.move_right);
            }
            game.advance(SIM_DT);

            for event in game.drain_events() {
                match event {
                    GameEvent::LifeLost { remaining } => {
                        log::info!("Tick {}: life lost, {} left", game.world().ticks, remaining)
                    }
                    GameEvent::RoundOver(outcome) => log::info!(
                        "Tick {}: {}",
                        game.world().ticks,
                        outcome.message().unwrap_or_default()
                    ),
                    other => log::trace!("Tick {}: {:?}", game.world().ticks, other),
                }
            }

            if game.round_state().is_terminal() {
                break;
            }
        }

        println!(
            "{} after {} ticks: score {}/{}, lives {}",
            game.round_state().as_str(),
            game.world().ticks,
            game.score(),
            game.world().brick_total(),
            game.lives()
        );

        if cli.snapshot {
            println!("{}", serde_json::to_string_pretty(game.world())?);
        }

        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}
