use crate::ports::LocaleContext;

/// Config-driven locale context: one fixed active locale and a fixed
/// serving set, loaded at wiring time.
#[derive(Clone, Debug, Default)]
pub struct StaticLocales {
    active: Option<String>,
    configured: Vec<String>,
}

impl StaticLocales {
    pub fn new(active: Option<String>, configured: Vec<String>) -> Self {
        Self { active, configured }
    }

    /// Context for a deployment without locale support.
    pub fn disabled() -> Self {
        Self::default()
    }
}

impl LocaleContext for StaticLocales {
    fn active_locale(&self) -> Option<String> {
        self.active.clone()
    }

    fn configured_locales(&self) -> Vec<String> {
        self.configured.clone()
    }
}
