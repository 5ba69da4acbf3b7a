//! Simulation mode flags parsed from startup tokens.
//!
//! Each recognized token toggles one simulated backend condition. The set
//! is built once at startup and never mutated afterwards, so handlers read
//! it without locking.

/// Simulated backend conditions, all off by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimFlags {
    /// Force error responses from the install stream and /api/exit.
    pub show_error: bool,
    /// Force /api/config to report failure.
    pub show_config_error: bool,
    /// Report a pre-existing install.
    pub maintenance: bool,
    /// Report a launcher-mode install. Implies `maintenance`.
    pub launcher: bool,
    /// Report that the submitted install path already exists.
    pub file_exists: bool,
    /// Report dark mode as the preferred theme.
    pub dark_mode: bool,
    /// Report recovery mode in the installer attributes.
    pub recovery_mode: bool,
}

impl SimFlags {
    /// Fold startup tokens into a flag set.
    ///
    /// Tokens are matched case-sensitively; unrecognized tokens are
    /// ignored. Each match logs which condition is being simulated.
    pub fn from_tokens<'a, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut flags = Self::default();
        for token in tokens {
            match token {
                "maintenance" => {
                    flags.maintenance = true;
                    log::info!("Simulating maintenance mode");
                }
                "launcher" => {
                    flags.maintenance = true;
                    flags.launcher = true;
                    log::info!("Simulating launcher mode");
                }
                "exists" => {
                    flags.file_exists = true;
                    log::info!("Simulating file exists situation");
                }
                "dark" => {
                    flags.dark_mode = true;
                    log::info!("Simulating dark mode");
                }
                "config-error" => {
                    flags.show_config_error = true;
                    log::info!("Simulating configuration errors");
                }
                "error" => {
                    flags.show_error = true;
                    log::info!("Simulating errors");
                }
                "recovery" => {
                    flags.recovery_mode = true;
                    log::info!("Simulating recovery mode");
                }
                _ => {}
            }
        }
        flags
    }
}
