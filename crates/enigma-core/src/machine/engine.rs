// crates/enigma-core/src/machine/engine.rs

use tracing::{debug, trace};

use crate::error::{EnigmaError, Result};
use crate::letter;
use crate::machine::plugboard::Plugboard;
use crate::machine::state::RotorBank;
use crate::machine::stepper::{self, StepOutcome};
use crate::settings::settings::MachineSettings;
use crate::stats::counters::Counters;
use crate::validate::validate_settings;
use crate::wiring::reflector::Reflector;

/// One enciphered letter and the wheel state it was enciphered under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Keystroke {
    pub input: u8,
    pub output: u8,
    /// (right, middle, left) after stepping.
    pub positions: [u8; 3],
    pub outcome: StepOutcome,
}

/// A machine with its wheels set. Owns its bank and board outright; build one
/// per message.
pub struct CipherEngine {
    bank: RotorBank,
    plugboard: Plugboard,
    reflector: Reflector,
    pub stats: Counters,
}

impl CipherEngine {
    pub fn new(settings: &MachineSettings) -> Result<Self> {
        validate_settings(settings)?;
        let engine = Self::from_parts(settings.build_bank()?, settings.build_plugboard()?);
        debug!(
            positions = ?engine.positions(),
            pairs = engine.plugboard.pairs().len(),
            "cipher engine ready"
        );
        Ok(engine)
    }

    pub fn from_parts(bank: RotorBank, plugboard: Plugboard) -> Self {
        Self {
            bank,
            plugboard,
            reflector: Reflector::B,
            stats: Counters::default(),
        }
    }

    pub fn bank(&self) -> &RotorBank {
        &self.bank
    }

    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    /// (right, middle, left).
    pub fn positions(&self) -> [u8; 3] {
        self.bank.positions()
    }

    /// Board, wheels, reflector, wheels back, board. Does not step.
    #[inline]
    pub fn signal_path(&self, letter: u8) -> u8 {
        let l = self.plugboard.apply(letter);
        let l = self.bank.forward(l);
        let l = self.reflector.reflect(l);
        let l = self.bank.backward(l);
        self.plugboard.apply(l)
    }

    /// Step, then encipher one letter index (0-25). An index outside the
    /// alphabet is rejected before the wheels move.
    pub fn press(&mut self, letter: u8) -> Result<u8> {
        if letter >= letter::ALPHABET {
            return Err(EnigmaError::Letter { index: letter });
        }
        Ok(self.keystroke(letter).output)
    }

    fn keystroke(&mut self, input: u8) -> Keystroke {
        let outcome = stepper::step(&mut self.bank);
        self.stats.observe_step(outcome);
        let output = self.signal_path(input);
        let positions = self.bank.positions();
        trace!(
            input = %letter::to_char(input),
            output = %letter::to_char(output),
            ?positions,
            "keystroke"
        );
        Keystroke {
            input,
            output,
            positions,
            outcome,
        }
    }

    fn run(&mut self, text: &str, mut on_key: impl FnMut(Keystroke)) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match letter::to_index(c) {
                Some(i) => {
                    let k = self.keystroke(i);
                    out.push(letter::to_char(k.output));
                    on_key(k);
                }
                None => {
                    self.stats.passthrough += 1;
                    out.push(c);
                }
            }
        }
        debug!(
            keystrokes = self.stats.keystrokes,
            passthrough = self.stats.passthrough,
            middle_steps = self.stats.middle_steps,
            left_steps = self.stats.left_steps,
            "process done"
        );
        out
    }

    /// Encipher (or decipher) `text`. Letters come out uppercase; anything
    /// else is copied through and does not step the wheels.
    pub fn process(&mut self, text: &str) -> String {
        self.run(text, |_| {})
    }

    /// Like [`CipherEngine::process`], also returning every keystroke.
    pub fn process_traced(&mut self, text: &str) -> (String, Vec<Keystroke>) {
        let mut keys = Vec::new();
        let out = self.run(text, |k| keys.push(k));
        (out, keys)
    }
}

/// Run `text` through a machine built from `bank` and `plugboard`. The bank is
/// taken by value; the caller's copy keeps its start positions.
pub fn process(text: &str, bank: RotorBank, plugboard: &Plugboard) -> String {
    CipherEngine::from_parts(bank, plugboard.clone()).process(text)
}

/// Validate `settings`, then process `text` on a fresh machine.
pub fn encipher(text: &str, settings: &MachineSettings) -> Result<String> {
    Ok(CipherEngine::new(settings)?.process(text))
}
