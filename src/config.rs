use log::Level;

/// How long the "analyzing" overlay stays up before the result is shown.
pub const ANALYZING_DELAY_MS: u32 = 2500;

/// Height of the fixed marquee strip; section scrolls stop this far above the target.
pub const HEADER_OFFSET_PX: f64 = 60.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose transition logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Where the quiz close control sends the visitor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseTarget {
    MainSite,
    Welcome,
}

/// When the navigation marquee is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarqueeRule {
    /// Every state except the welcome gate.
    AfterGate,
    MainSiteOnly,
}

/// Knobs that distinguish the two flavours of the gate/quiz/result flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlowVariant {
    pub close_target: CloseTarget,
    pub marquee: MarqueeRule,
}

impl Default for FlowVariant {
    fn default() -> Self {
        Self {
            close_target: CloseTarget::MainSite,
            marquee: MarqueeRule::AfterGate,
        }
    }
}

pub fn flow_variant() -> FlowVariant {
    FlowVariant::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_variant_closes_to_main_site() {
        let variant = flow_variant();
        assert_eq!(variant.close_target, CloseTarget::MainSite);
        assert_eq!(variant.marquee, MarqueeRule::AfterGate);
    }

    #[test]
    fn log_level_matches_build_profile() {
        if cfg!(debug_assertions) {
            assert_eq!(log_level(), Level::Debug);
        } else {
            assert_eq!(log_level(), Level::Info);
        }
    }
}
