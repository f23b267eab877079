use crate::library::logger::interface::Logger;
use crate::screen::core::{init, transition, Effect, Event, State};
use crate::screen::run_effect::{Devices, RunEffect, Waker};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
#[cfg(test)]
use std::time::Duration;

/// Owns the screen state. Only `dispatch` changes it; effects report back
/// through the event channel.
pub struct Screen {
    state: State,
    logger: Arc<dyn Logger + Send + Sync>,
    event_sender: Sender<Event>,
    event_receiver: Receiver<Event>,
    run_effect: RunEffect,
}

impl Screen {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, devices: Devices, waker: Waker) -> Self {
        let logger = logger.with_namespace("screen");
        let (event_sender, event_receiver) = channel();
        let run_effect = RunEffect::new(logger.clone(), devices, event_sender.clone(), waker);
        let (state, _) = init();

        Self {
            state,
            logger,
            event_sender,
            event_receiver,
            run_effect,
        }
    }

    pub fn start(&mut self) {
        let (state, effects) = init();
        self.state = state;
        self.spawn_effects(effects);
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn logger(&self) -> Arc<dyn Logger + Send + Sync> {
        self.logger.clone()
    }

    pub fn dispatch(&mut self, event: Event) {
        let _ = self.logger.debug(&format!(
            "\nold state:\n\t{:?}\n\nevent:\n\t{:?}",
            self.state, event,
        ));

        let (new_state, effects) = transition(self.state.clone(), event);

        let _ = self.logger.debug(&format!(
            "\nnew state:\n\t{:?}\n\neffects:\n\t{:?}",
            new_state, effects
        ));

        self.state = new_state;
        self.spawn_effects(effects);
    }

    /// Applies every event that has arrived so far without blocking.
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.event_receiver.try_recv() {
            self.dispatch(event);
            applied += 1;
        }
        applied
    }

    #[cfg(test)]
    pub fn recv_timeout(
        &mut self,
        timeout: Duration,
    ) -> Result<(), std::sync::mpsc::RecvTimeoutError> {
        let event = self.event_receiver.recv_timeout(timeout)?;
        self.dispatch(event);
        Ok(())
    }

    fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let run_effect = self.run_effect.clone();
            std::thread::spawn(move || run_effect.run_effect(effect));
        }
    }
}
