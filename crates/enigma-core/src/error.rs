use thiserror::Error;

pub type Result<T> = std::result::Result<T, EnigmaError>;

#[derive(Debug, Error)]
pub enum EnigmaError {
    #[error("rotor selection error: design {id} is not one of I-V (1-5)")]
    RotorSelection { id: u8 },

    #[error("rotor setting error: rotor {design} ring setting {ring} is outside 1-26")]
    RotorSetting { design: u8, ring: u8 },

    #[error("rotor position error: rotor {design} position {position} is outside 0-25")]
    RotorPosition { design: u8, position: u8 },

    #[error("duplicate rotor error: design {id} is installed in more than one slot")]
    DuplicateRotor { id: u8 },

    #[error("plugboard duplicate letter error: letter {letter} is used more than once")]
    PlugboardDuplicateLetter { letter: u8 },

    #[error("plugboard letter error: {letter} is outside 0-25")]
    PlugboardLetter { letter: u8 },

    #[error("plugboard error: {count} pairs given, at most 13 fit")]
    PlugboardTooManyPairs { count: usize },

    #[error("key line error: {0}")]
    KeyLine(String),

    #[error("letter error: index {index} is outside 0-25")]
    Letter { index: u8 },
}
