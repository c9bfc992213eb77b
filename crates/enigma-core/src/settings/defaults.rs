// crates/enigma-core/src/settings/defaults.rs

use crate::settings::settings::{MachineSettings, RotorSettings};

/// Built-in key used when the operator supplies none.
pub fn default_settings() -> MachineSettings {
    MachineSettings::new(
        RotorSettings::new(3, 18, 24),
        RotorSettings::new(4, 22, 19),
        RotorSettings::new(2, 25, 17),
        vec![
            (6, 10),
            (3, 11),
            (8, 24),
            (0, 16),
            (5, 7),
            (22, 1),
            (19, 23),
            (15, 18),
            (14, 12),
            (25, 20),
        ],
    )
}
