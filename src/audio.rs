//! Audio system using Web Audio API
//!
//! Procedurally generated sound effects, no asset files. Game events map to
//! effects through [`sound_for`]; playback itself only exists on wasm.

use crate::sim::state::{GameEvent, GameMode};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Heart picked up
    Heart,
    /// Basket scored
    Swish,
    /// Ball hit the bounce line
    Bounce,
    /// Wrong code or answer
    Error,
    /// Gift awarded
    Gift,
    /// Entering the finale screen
    Finale,
    /// Restart
    Reset,
}

/// Effect for an event, if it has one
pub fn sound_for(event: &GameEvent) -> Option<SoundEffect> {
    match event {
        GameEvent::HeartCollected { .. } => Some(SoundEffect::Heart),
        GameEvent::ShotScored { .. } => Some(SoundEffect::Swish),
        GameEvent::BallBounced => Some(SoundEffect::Bounce),
        GameEvent::WrongAnswer => Some(SoundEffect::Error),
        GameEvent::GiftAwarded { .. } => Some(SoundEffect::Gift),
        GameEvent::ModeChanged {
            to: GameMode::End, ..
        } => Some(SoundEffect::Finale),
        GameEvent::ModeChanged { .. } => None,
        GameEvent::Restarted => Some(SoundEffect::Reset),
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{SoundEffect, sound_for};
    use crate::settings::Settings;
    use crate::sim::state::GameEvent;

    /// Audio manager for the game
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        volume: f32,
    }

    impl AudioManager {
        pub fn new(settings: &Settings) -> Self {
            // May fail outside a secure context
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                volume: settings.effective_volume(),
            }
        }

        /// Play whatever effect an event maps to
        pub fn play_event(&self, event: &GameEvent) {
            if let Some(effect) = sound_for(event) {
                self.play(effect);
            }
        }

        /// Play a sound effect
        pub fn play(&self, effect: SoundEffect) {
            let vol = self.volume;
            if vol <= 0.0 {
                return;
            }

            let Some(ctx) = &self.ctx else { return };

            // Browsers keep the context suspended until a user gesture
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            match effect {
                SoundEffect::Heart => self.play_heart(ctx, vol),
                SoundEffect::Swish => self.play_swish(ctx, vol),
                SoundEffect::Bounce => self.play_bounce(ctx, vol),
                SoundEffect::Error => self.play_error(ctx, vol),
                SoundEffect::Gift => self.play_gift(ctx, vol),
                SoundEffect::Finale => self.play_finale(ctx, vol),
                SoundEffect::Reset => self.play_reset(ctx, vol),
            }
        }

        // === Sound generators ===

        /// Create an oscillator with gain envelope
        fn create_osc(
            &self,
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// One enveloped note starting `delay` seconds from now
        fn note(
            &self,
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
            vol: f32,
            delay: f64,
            length: f64,
        ) {
            let Some((osc, gain)) = self.create_osc(ctx, freq, osc_type) else {
                return;
            };
            let t = ctx.current_time() + delay;
            gain.gain().set_value_at_time(vol, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + length)
                .ok();
            osc.start_with_when(t).ok();
            osc.stop_with_when(t + length + 0.05).ok();
        }

        /// Heart pickup - bright two-note ding
        fn play_heart(&self, ctx: &AudioContext, vol: f32) {
            self.note(ctx, 880.0, OscillatorType::Sine, vol * 0.35, 0.0, 0.12);
            self.note(ctx, 1320.0, OscillatorType::Sine, vol * 0.3, 0.06, 0.18);
        }

        /// Basket - falling noise-like sweep
        fn play_swish(&self, ctx: &AudioContext, vol: f32) {
            let Some((osc, gain)) = self.create_osc(ctx, 2400.0, OscillatorType::Sawtooth) else {
                return;
            };
            let t = ctx.current_time();
            gain.gain().set_value_at_time(vol * 0.15, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.25)
                .ok();
            osc.frequency().set_value_at_time(2400.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(300.0, t + 0.25)
                .ok();
            osc.start().ok();
            osc.stop_with_when(t + 0.3).ok();
        }

        /// Ball bounce - short low thump
        fn play_bounce(&self, ctx: &AudioContext, vol: f32) {
            let Some((osc, gain)) = self.create_osc(ctx, 150.0, OscillatorType::Sine) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol * 0.5, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.1)
                .ok();
            osc.frequency().set_value_at_time(150.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(60.0, t + 0.1)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.15).ok();
        }

        /// Wrong answer - low square buzz
        fn play_error(&self, ctx: &AudioContext, vol: f32) {
            self.note(ctx, 110.0, OscillatorType::Square, vol * 0.25, 0.0, 0.2);
            self.note(ctx, 104.0, OscillatorType::Square, vol * 0.2, 0.0, 0.2);
        }

        /// Gift - rising arpeggio
        fn play_gift(&self, ctx: &AudioContext, vol: f32) {
            for (i, freq) in [523.25, 659.25, 783.99, 1046.5].iter().enumerate() {
                self.note(
                    ctx,
                    *freq,
                    OscillatorType::Triangle,
                    vol * 0.3,
                    i as f64 * 0.09,
                    0.3,
                );
            }
        }

        /// Finale - sustained major chord
        fn play_finale(&self, ctx: &AudioContext, vol: f32) {
            for freq in [261.63, 329.63, 392.0, 523.25] {
                self.note(ctx, freq, OscillatorType::Sine, vol * 0.2, 0.0, 1.6);
            }
            self.note(ctx, 1046.5, OscillatorType::Triangle, vol * 0.15, 0.4, 1.2);
        }

        /// Restart - quick downward blip
        fn play_reset(&self, ctx: &AudioContext, vol: f32) {
            self.note(ctx, 660.0, OscillatorType::Triangle, vol * 0.25, 0.0, 0.08);
            self.note(ctx, 440.0, OscillatorType::Triangle, vol * 0.25, 0.07, 0.1);
        }
    }
}
