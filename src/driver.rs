//! Fixed-rate simulation loop
//!
//! Turns real frame time into whole logical ticks, samples input once per
//! tick, and fans the tick's events out to audio/visual collaborators.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS};
use crate::input::InputSource;
use crate::settings::Tuning;
use crate::sim::{GameEvent, MatchState, RenderSnapshot, Side, Signals, TickInput, tick};

/// Fire-and-forget feedback hooks. Every method defaults to doing nothing.
pub trait Notifications {
    fn on_wall_bounce(&mut self) {}
    fn on_paddle_hit(&mut self, _side: Side) {}
    fn on_score(&mut self, _side: Side) {}
    fn on_game_over(&mut self, _winner: Side) {}
    fn on_serve(&mut self) {}
    fn on_start(&mut self) {}
    fn on_restart(&mut self) {}
}

/// Sink that ignores everything
impl Notifications for () {}

/// Route events to the matching hooks, in the order they happened
pub fn dispatch(events: &[GameEvent], sink: &mut dyn Notifications) {
    for event in events {
        match *event {
            GameEvent::Started => sink.on_start(),
            GameEvent::Restarted => sink.on_restart(),
            GameEvent::WallBounce => sink.on_wall_bounce(),
            GameEvent::PaddleHit(side) => sink.on_paddle_hit(side),
            GameEvent::Scored(side) => sink.on_score(side),
            GameEvent::Served => sink.on_serve(),
            GameEvent::GameOver { winner } => sink.on_game_over(winner),
        }
    }
}

/// Sink that records every event
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    pub events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, event: GameEvent) -> usize {
        self.events.iter().filter(|e| **e == event).count()
    }
}

impl Notifications for EventLog {
    fn on_wall_bounce(&mut self) {
        self.events.push(GameEvent::WallBounce);
    }
    fn on_paddle_hit(&mut self, side: Side) {
        self.events.push(GameEvent::PaddleHit(side));
    }
    fn on_score(&mut self, side: Side) {
        self.events.push(GameEvent::Scored(side));
    }
    fn on_game_over(&mut self, winner: Side) {
        self.events.push(GameEvent::GameOver { winner });
    }
    fn on_serve(&mut self) {
        self.events.push(GameEvent::Served);
    }
    fn on_start(&mut self) {
        self.events.push(GameEvent::Started);
    }
    fn on_restart(&mut self) {
        self.events.push(GameEvent::Restarted);
    }
}

/// Owns the match and drives it at `tuning.tick_hz`
#[derive(Debug, Clone)]
pub struct SimulationLoop {
    state: MatchState,
    tuning: Tuning,
    accumulator: f32,
}

impl SimulationLoop {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            state: MatchState::new(&tuning),
            tuning,
            accumulator: 0.0,
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Mutable access for debug tooling (e.g. `force_win`)
    pub fn state_mut(&mut self) -> &mut MatchState {
        &mut self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        self.state.snapshot()
    }

    /// Run exactly one tick with an already-sampled input
    pub fn step(&mut self, input: &TickInput, sink: &mut dyn Notifications) -> RenderSnapshot {
        tick(&mut self.state, input, &self.tuning);
        let events = self.state.drain_events();
        dispatch(&events, sink);
        self.state.snapshot()
    }

    /// Feed `frame_dt` seconds of real time and run the ticks that fit.
    ///
    /// `source` is sampled once per tick. `signals` are edge-triggered and
    /// only delivered to the first tick of this frame; if no tick fits they
    /// are applied without advancing the simulation. Returns the number of
    /// ticks run.
    pub fn update(
        &mut self,
        frame_dt: f32,
        source: &mut dyn InputSource,
        mut signals: Signals,
        sink: &mut dyn Notifications,
    ) -> u32 {
        let tick_dt = self.tuning.tick_dt();
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= tick_dt && substeps < MAX_SUBSTEPS {
            let displacement = source.displacement(&self.state.left, &self.state.field);
            let input = TickInput {
                displacement,
                signals,
            };
            self.step(&input, sink);
            signals = Signals::default();
            self.accumulator -= tick_dt;
            substeps += 1;
        }

        if substeps == MAX_SUBSTEPS && self.accumulator >= tick_dt {
            log::warn!(
                "Dropping {:.1} ms of simulation backlog",
                self.accumulator * 1000.0
            );
            self.accumulator %= tick_dt;
        }

        if substeps == 0 && (signals.start || signals.restart) {
            // No tick fit in this frame; apply the edges now so none is lost
            self.apply_signals(signals, sink);
        }
        substeps
    }

    /// Deliver lifecycle signals without advancing the simulation
    pub fn apply_signals(&mut self, signals: Signals, sink: &mut dyn Notifications) {
        if signals.restart {
            self.state.restart(&self.tuning);
        }
        if signals.start {
            self.state.start();
        }
        let events = self.state.drain_events();
        dispatch(&events, sink);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{KeyboardInput, NoInput};
    use crate::sim::MatchPhase;

    #[test]
    fn test_step_dispatches_events() {
        let mut sim = SimulationLoop::new(Tuning::default());
        let mut log = EventLog::new();
        sim.step(&TickInput::start(), &mut log);
        assert_eq!(log.events, vec![GameEvent::Started]);
        assert!(sim.state().events.is_empty(), "events drained after dispatch");
    }

    #[test]
    fn test_update_runs_whole_ticks() {
        let mut sim = SimulationLoop::new(Tuning::default());
        let mut log = EventLog::new();
        let start = Signals {
            start: true,
            restart: false,
        };

        // 50 Hz: 0.05 s is two and a half ticks
        let ran = sim.update(0.05, &mut NoInput, start, &mut log);
        assert_eq!(ran, 2);
        assert_eq!(sim.state().phase, MatchPhase::Playing);
        assert_eq!(sim.state().time_ticks, 2);
        assert_eq!(log.count(GameEvent::Started), 1, "signals delivered once");

        // The leftover half tick completes with the next frame
        let ran = sim.update(0.015, &mut NoInput, Signals::default(), &mut ());
        assert_eq!(ran, 1);
    }

    #[test]
    fn test_update_caps_substeps() {
        let mut sim = SimulationLoop::new(Tuning::default());
        sim.step(&TickInput::start(), &mut ());
        let ran = sim.update(10.0, &mut NoInput, Signals::default(), &mut ());
        assert_eq!(ran, MAX_SUBSTEPS);
    }

    #[test]
    fn test_update_samples_input_per_tick() {
        let mut sim = SimulationLoop::new(Tuning::default());
        sim.step(&TickInput::start(), &mut ());
        let mut keys = KeyboardInput::new(8.0);
        keys.key_down("ArrowDown");

        let y = sim.state().left.y;
        let ran = sim.update(0.07, &mut keys, Signals::default(), &mut ());
        assert_eq!(ran, 3);
        assert_eq!(sim.state().left.y, y + 24.0);
    }

    #[test]
    fn test_signal_not_lost_on_short_frame() {
        let mut sim = SimulationLoop::new(Tuning::default());
        let start = Signals {
            start: true,
            restart: false,
        };
        let ran = sim.update(0.001, &mut NoInput, start, &mut ());
        assert_eq!(ran, 0);
        assert_eq!(sim.state().phase, MatchPhase::Playing);
        assert_eq!(sim.state().time_ticks, 0);
    }
}
