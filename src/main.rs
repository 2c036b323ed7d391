//! Paddle Volley headless demo
//!
//! Plays full matches between the computer paddle and a noisy pointer bot,
//! logging every notification, then prints the final snapshot as JSON.
//!
//! Usage: `paddle-volley [tuning.json] [seed]`

use paddle_volley::input::PointerInput;
use paddle_volley::sim::{MatchPhase, Side, Signals};
use paddle_volley::{Notifications, SimulationLoop, Tuning};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Matches to play (the second one exercises restart)
const MATCHES: u32 = 2;
/// Safety net so a pathological tuning cannot spin forever
const MAX_TICKS_PER_MATCH: u64 = 500_000;

/// Logs notifications the way an audio layer would receive them
#[derive(Default)]
struct LogSink {
    hits: u32,
    bounces: u32,
}

impl Notifications for LogSink {
    fn on_wall_bounce(&mut self) {
        self.bounces += 1;
        log::trace!("wall");
    }
    fn on_paddle_hit(&mut self, side: Side) {
        self.hits += 1;
        log::trace!("hit {:?}", side);
    }
    fn on_score(&mut self, side: Side) {
        log::info!("Point {:?}", side);
    }
    fn on_game_over(&mut self, winner: Side) {
        log::info!("{:?} wins", winner);
    }
}

/// Pointer "player" that reacts late and aims imprecisely
struct PointerBot {
    rng: Pcg32,
    pointer: PointerInput,
}

impl PointerBot {
    fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            pointer: PointerInput::new(),
        }
    }

    fn observe(&mut self, ball_y: f32) {
        if self.rng.random_bool(0.3) {
            let aim = ball_y + self.rng.random_range(-45.0f32..45.0);
            self.pointer.move_to(aim);
        }
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => Tuning::load_or_default(path),
        None => Tuning::default(),
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(12345);
    log::info!("Paddle Volley (headless) starting with seed {}", seed);

    let mut sim = SimulationLoop::new(tuning);
    let mut bot = PointerBot::new(seed);
    let mut sink = LogSink::default();
    let tick_dt = sim.tuning().tick_dt();

    for round in 0..MATCHES {
        let signals = if round == 0 {
            Signals {
                start: true,
                restart: false,
            }
        } else {
            Signals {
                start: false,
                restart: true,
            }
        };
        sim.apply_signals(signals, &mut sink);

        let mut ticks = 0;
        while sim.state().phase == MatchPhase::Playing && ticks < MAX_TICKS_PER_MATCH {
            bot.observe(sim.state().ball.pos.y);
            ticks += u64::from(sim.update(tick_dt, &mut bot.pointer, Signals::default(), &mut sink));
        }

        let state = sim.state();
        log::info!(
            "Match {} finished after {} ticks: {} - {}",
            round + 1,
            ticks,
            state.left.score,
            state.right.score
        );
    }

    log::info!(
        "{} paddle hits, {} wall bounces",
        sink.hits,
        sink.bounces
    );

    match serde_json::to_string_pretty(&sim.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize snapshot: {}", e),
    }
}
