use crate::config::{FlowVariant, MarqueeRule};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewState {
    Welcome,
    Quiz,
    Analyzing,
    Result,
    MainSite,
}

impl ViewState {
    /// Quiz, analyzing and result are drawn on top of the (blurred) main site.
    pub fn is_overlay(self) -> bool {
        matches!(self, ViewState::Quiz | ViewState::Analyzing | ViewState::Result)
    }

    pub fn shows_marquee(self, variant: &FlowVariant) -> bool {
        match variant.marquee {
            MarqueeRule::AfterGate => self != ViewState::Welcome,
            MarqueeRule::MainSiteOnly => self == ViewState::MainSite,
        }
    }

    pub fn shows_floating_contact(self) -> bool {
        !self.is_overlay() && self != ViewState::Welcome
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViewState::Welcome => "welcome",
            ViewState::Quiz => "quiz",
            ViewState::Analyzing => "analyzing",
            ViewState::Result => "result",
            ViewState::MainSite => "main_site",
        };
        f.write_str(name)
    }
}

/// Scroll targets on the main site, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Results,
    Harmony,
    Location,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::About,
        Section::Results,
        Section::Harmony,
        Section::Location,
        Section::Contact,
    ];

    /// DOM id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "sobre",
            Section::Results => "resultados",
            Section::Harmony => "harmony",
            Section::Location => "onde",
            Section::Contact => "contato",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Início",
            Section::About => "Sobre Mim",
            Section::Results => "Prova Visual",
            Section::Harmony => "Harmonização de 💚",
            Section::Location => "Onde nos Encontrar",
            Section::Contact => "Contato",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CloseTarget;

    #[test]
    fn overlays_are_quiz_analyzing_and_result() {
        assert!(!ViewState::Welcome.is_overlay());
        assert!(ViewState::Quiz.is_overlay());
        assert!(ViewState::Analyzing.is_overlay());
        assert!(ViewState::Result.is_overlay());
        assert!(!ViewState::MainSite.is_overlay());
    }

    #[test]
    fn marquee_follows_variant_rule() {
        let after_gate = FlowVariant::default();
        let main_only = FlowVariant {
            close_target: CloseTarget::MainSite,
            marquee: MarqueeRule::MainSiteOnly,
        };

        assert!(!ViewState::Welcome.shows_marquee(&after_gate));
        assert!(ViewState::Quiz.shows_marquee(&after_gate));
        assert!(ViewState::MainSite.shows_marquee(&after_gate));

        assert!(!ViewState::Quiz.shows_marquee(&main_only));
        assert!(!ViewState::Result.shows_marquee(&main_only));
        assert!(ViewState::MainSite.shows_marquee(&main_only));
    }

    #[test]
    fn floating_contact_only_on_bare_main_site() {
        assert!(ViewState::MainSite.shows_floating_contact());
        assert!(!ViewState::Welcome.shows_floating_contact());
        assert!(!ViewState::Result.shows_floating_contact());
    }

    #[test]
    fn section_ids_are_unique() {
        let mut ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Section::ALL.len());
    }
}
