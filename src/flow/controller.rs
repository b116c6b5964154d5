use super::error::TransitionError;
use super::state::{Section, ViewState};
use super::summary::encoded_summary;
use crate::config::{CloseTarget, FlowVariant, ANALYZING_DELAY_MS};
use crate::content::QuizQuestion;

/// User gestures and timer callbacks the page forwards to the controller.
#[derive(Clone, Debug, PartialEq)]
pub enum FlowEvent {
    TakeQuiz,
    SkipToSite,
    ContactNow,
    CloseQuiz,
    Answer(String),
    AnalysisElapsed { attempt: u32 },
    SendSummary,
    ContactWithoutSummary,
    ContinueToSite,
    OpenLightbox(String),
    CloseLightbox,
    Navigate(Section),
}

impl FlowEvent {
    pub fn name(&self) -> &'static str {
        match self {
            FlowEvent::TakeQuiz => "take_quiz",
            FlowEvent::SkipToSite => "skip_to_site",
            FlowEvent::ContactNow => "contact_now",
            FlowEvent::CloseQuiz => "close_quiz",
            FlowEvent::Answer(_) => "answer",
            FlowEvent::AnalysisElapsed { .. } => "analysis_elapsed",
            FlowEvent::SendSummary => "send_summary",
            FlowEvent::ContactWithoutSummary => "contact_without_summary",
            FlowEvent::ContinueToSite => "continue_to_site",
            FlowEvent::OpenLightbox(_) => "open_lightbox",
            FlowEvent::CloseLightbox => "close_lightbox",
            FlowEvent::Navigate(_) => "navigate",
        }
    }
}

/// Work the page has to carry out after a transition. The controller never
/// touches the browser itself.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Open the messaging deep link, optionally with an already percent-encoded text.
    OpenMessaging { encoded_text: Option<String> },
    ScheduleAnalysis { attempt: u32, delay_ms: u32 },
    CancelAnalysis,
    ScrollTo(Section),
}

/// Owns the view state, quiz progress and answer log, and is the only thing
/// allowed to change them.
#[derive(Clone, Debug)]
pub struct FlowController {
    questions: Vec<QuizQuestion>,
    greeting: String,
    variant: FlowVariant,
    view: ViewState,
    current_index: usize,
    answers: Vec<String>,
    lightbox: Option<String>,
    attempt: u32,
}

impl FlowController {
    pub fn new(questions: Vec<QuizQuestion>, greeting: String, variant: FlowVariant) -> Self {
        Self {
            questions,
            greeting,
            variant,
            view: ViewState::Welcome,
            current_index: 0,
            answers: Vec::new(),
            lightbox: None,
            attempt: 0,
        }
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn variant(&self) -> &FlowVariant {
        &self.variant
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn lightbox(&self) -> Option<&str> {
        self.lightbox.as_deref()
    }

    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// The question on screen, only while the quiz overlay is up.
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        if self.view == ViewState::Quiz {
            self.questions.get(self.current_index)
        } else {
            None
        }
    }

    /// Progress bar fill, counting the question currently shown as reached.
    pub fn progress_percent(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        (self.current_index + 1) as f64 / self.questions.len() as f64 * 100.0
    }

    /// Applies one event. Rejected events leave every field untouched.
    pub fn apply(&mut self, event: FlowEvent) -> Result<Vec<Effect>, TransitionError> {
        let state = self.view;
        match (state, event) {
            (ViewState::Welcome, FlowEvent::TakeQuiz) => {
                if self.questions.is_empty() {
                    self.view = ViewState::MainSite;
                    return Ok(Vec::new());
                }
                self.attempt = self.attempt.wrapping_add(1);
                self.current_index = 0;
                self.answers.clear();
                self.view = ViewState::Quiz;
                Ok(vec![Effect::CancelAnalysis])
            }
            (ViewState::Welcome, FlowEvent::SkipToSite) => {
                self.view = ViewState::MainSite;
                Ok(Vec::new())
            }
            (ViewState::Welcome | ViewState::MainSite, FlowEvent::ContactNow) => {
                Ok(vec![Effect::OpenMessaging { encoded_text: None }])
            }
            (ViewState::Quiz, FlowEvent::CloseQuiz) => {
                self.view = match self.variant.close_target {
                    CloseTarget::MainSite => ViewState::MainSite,
                    CloseTarget::Welcome => ViewState::Welcome,
                };
                Ok(Vec::new())
            }
            (ViewState::Quiz, FlowEvent::Answer(answer)) => {
                self.answers.push(answer);
                if self.current_index + 1 < self.questions.len() {
                    self.current_index += 1;
                    Ok(Vec::new())
                } else {
                    self.view = ViewState::Analyzing;
                    Ok(vec![Effect::ScheduleAnalysis {
                        attempt: self.attempt,
                        delay_ms: ANALYZING_DELAY_MS,
                    }])
                }
            }
            (ViewState::Analyzing, FlowEvent::AnalysisElapsed { attempt }) if attempt == self.attempt => {
                self.view = ViewState::Result;
                Ok(Vec::new())
            }
            (_, FlowEvent::AnalysisElapsed { attempt }) => Err(TransitionError::StaleTimer {
                attempt,
                current: self.attempt,
                state,
            }),
            (ViewState::Result, FlowEvent::SendSummary) => {
                let encoded = encoded_summary(&self.greeting, &self.questions, &self.answers);
                Ok(vec![Effect::OpenMessaging { encoded_text: Some(encoded) }])
            }
            (ViewState::Result, FlowEvent::ContactWithoutSummary) => {
                Ok(vec![Effect::OpenMessaging { encoded_text: None }])
            }
            (ViewState::Result, FlowEvent::ContinueToSite) => {
                self.view = ViewState::MainSite;
                Ok(Vec::new())
            }
            (_, FlowEvent::OpenLightbox(image)) => {
                self.lightbox = Some(image);
                Ok(Vec::new())
            }
            (_, FlowEvent::CloseLightbox) => {
                self.lightbox = None;
                Ok(Vec::new())
            }
            (_, FlowEvent::Navigate(section)) if state.shows_marquee(&self.variant) => {
                Ok(vec![Effect::ScrollTo(section)])
            }
            (_, event) => Err(TransitionError::InvalidTransition {
                event: event.name(),
                state,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MarqueeRule;
    use crate::content::SiteContent;

    fn controller() -> FlowController {
        let content = SiteContent::embedded().unwrap();
        FlowController::new(content.questions, content.summary_greeting, FlowVariant::default())
    }

    fn generated_questions(count: usize) -> Vec<QuizQuestion> {
        (0..count)
            .map(|i| QuizQuestion {
                id: i as u32 + 1,
                prompt: format!("Pergunta {}", i + 1),
                options: vec![format!("A{}", i), format!("B{}", i)],
            })
            .collect()
    }

    /// Fields a rejected event must not change.
    fn snapshot(flow: &FlowController) -> (ViewState, usize, Vec<String>, u32) {
        (flow.view(), flow.current_index(), flow.answers().to_vec(), flow.attempt())
    }

    #[test]
    fn starts_at_welcome_with_nothing_answered() {
        let flow = controller();
        assert_eq!(flow.view(), ViewState::Welcome);
        assert_eq!(flow.current_index(), 0);
        assert!(flow.answers().is_empty());
        assert_eq!(flow.lightbox(), None);
        assert_eq!(flow.current_question(), None);
    }

    #[test]
    fn full_quiz_scenario_reaches_result_and_sends_summary() {
        let mut flow = controller();

        flow.apply(FlowEvent::TakeQuiz).unwrap();
        assert_eq!(flow.view(), ViewState::Quiz);
        assert_eq!(flow.current_index(), 0);

        let picks = [
            "Rugas e Linhas de Expressão",
            "Sentir dor",
            "Não, seria minha primeira vez",
        ];
        for (i, pick) in picks.iter().enumerate() {
            let effects = flow.apply(FlowEvent::Answer(pick.to_string())).unwrap();
            assert!(effects.is_empty());
            assert_eq!(flow.view(), ViewState::Quiz);
            assert_eq!(flow.current_index(), i + 1);
            assert_eq!(flow.answers().len(), flow.current_index());
        }

        let effects = flow.apply(FlowEvent::Answer("Imediatamente".to_string())).unwrap();
        assert_eq!(flow.view(), ViewState::Analyzing);
        assert_eq!(
            effects,
            vec![Effect::ScheduleAnalysis { attempt: 1, delay_ms: 2500 }]
        );
        assert_eq!(
            flow.answers(),
            &[
                "Rugas e Linhas de Expressão",
                "Sentir dor",
                "Não, seria minha primeira vez",
                "Imediatamente",
            ]
        );

        flow.apply(FlowEvent::AnalysisElapsed { attempt: 1 }).unwrap();
        assert_eq!(flow.view(), ViewState::Result);
        assert_eq!(flow.answers().len(), 4);

        let effects = flow.apply(FlowEvent::SendSummary).unwrap();
        let encoded = match effects.as_slice() {
            [Effect::OpenMessaging { encoded_text: Some(text) }] => text.clone(),
            other => panic!("unexpected effects {:?}", other),
        };
        let decoded = urlencoding::decode(&encoded).unwrap().into_owned();
        let expected_lines = [
            "- O que você mais deseja melhorar hoje?: Rugas e Linhas de Expressão",
            "- Qual sua maior preocupação em um procedimento?: Sentir dor",
            "- Já realizou algum procedimento estético?: Não, seria minha primeira vez",
            "- Quão rápido você gostaria de iniciar sua transformação?: Imediatamente",
        ];
        let mut last = 0;
        for line in expected_lines {
            let at = decoded.find(line).expect("summary line missing");
            assert!(at >= last, "summary lines out of order");
            last = at;
        }
        assert_eq!(flow.view(), ViewState::Result);
    }

    #[test]
    fn any_question_count_walks_every_index_once() {
        for count in 1..=6 {
            let mut flow = FlowController::new(
                generated_questions(count),
                String::new(),
                FlowVariant::default(),
            );
            flow.apply(FlowEvent::TakeQuiz).unwrap();

            let mut seen = Vec::new();
            while flow.view() == ViewState::Quiz {
                seen.push(flow.current_index());
                let answer = format!("resposta {}", flow.current_index());
                flow.apply(FlowEvent::Answer(answer)).unwrap();
            }

            assert_eq!(seen, (0..count).collect::<Vec<_>>());
            assert_eq!(flow.view(), ViewState::Analyzing);
            flow.apply(FlowEvent::AnalysisElapsed { attempt: flow.attempt() }).unwrap();
            assert_eq!(flow.view(), ViewState::Result);
            assert_eq!(flow.answers().len(), count);
            for (i, answer) in flow.answers().iter().enumerate() {
                assert_eq!(answer, &format!("resposta {}", i));
            }
        }
    }

    #[test]
    fn skip_to_site_leaves_quiz_untouched() {
        let mut flow = controller();
        let effects = flow.apply(FlowEvent::SkipToSite).unwrap();

        assert!(effects.is_empty());
        assert_eq!(flow.view(), ViewState::MainSite);
        assert!(flow.answers().is_empty());
        assert_eq!(flow.current_index(), 0);
    }

    #[test]
    fn contact_now_opens_link_without_state_change() {
        let mut flow = controller();
        let effects = flow.apply(FlowEvent::ContactNow).unwrap();

        assert_eq!(effects, vec![Effect::OpenMessaging { encoded_text: None }]);
        assert_eq!(flow.view(), ViewState::Welcome);
    }

    #[test]
    fn close_quiz_honors_variant_target() {
        let mut flow = controller();
        flow.apply(FlowEvent::TakeQuiz).unwrap();
        flow.apply(FlowEvent::CloseQuiz).unwrap();
        assert_eq!(flow.view(), ViewState::MainSite);

        let variant = FlowVariant {
            close_target: CloseTarget::Welcome,
            marquee: MarqueeRule::AfterGate,
        };
        let mut flow = FlowController::new(generated_questions(3), String::new(), variant);
        flow.apply(FlowEvent::TakeQuiz).unwrap();
        flow.apply(FlowEvent::CloseQuiz).unwrap();
        assert_eq!(flow.view(), ViewState::Welcome);
    }

    #[test]
    fn new_attempt_resets_progress_and_answers() {
        let variant = FlowVariant {
            close_target: CloseTarget::Welcome,
            marquee: MarqueeRule::AfterGate,
        };
        let mut flow = FlowController::new(generated_questions(4), String::new(), variant);
        flow.apply(FlowEvent::TakeQuiz).unwrap();
        flow.apply(FlowEvent::Answer("A0".to_string())).unwrap();
        flow.apply(FlowEvent::Answer("B1".to_string())).unwrap();
        flow.apply(FlowEvent::CloseQuiz).unwrap();

        // Abandoned attempt keeps its log until a new one starts.
        assert_eq!(flow.answers().len(), 2);

        let effects = flow.apply(FlowEvent::TakeQuiz).unwrap();
        assert_eq!(effects, vec![Effect::CancelAnalysis]);
        assert_eq!(flow.view(), ViewState::Quiz);
        assert_eq!(flow.current_index(), 0);
        assert!(flow.answers().is_empty());
        assert_eq!(flow.attempt(), 2);
    }

    #[test]
    fn empty_question_list_falls_back_to_main_site() {
        let mut flow = FlowController::new(Vec::new(), String::new(), FlowVariant::default());
        let effects = flow.apply(FlowEvent::TakeQuiz).unwrap();

        assert!(effects.is_empty());
        assert_eq!(flow.view(), ViewState::MainSite);
        assert_eq!(flow.attempt(), 0);
        assert_eq!(flow.progress_percent(), 0.0);
    }

    #[test]
    fn answering_outside_quiz_is_rejected_without_mutation() {
        let mut flow = controller();
        let before = snapshot(&flow);
        let err = flow.apply(FlowEvent::Answer("Volume Labial".to_string())).unwrap_err();
        assert_eq!(
            err,
            TransitionError::InvalidTransition { event: "answer", state: ViewState::Welcome }
        );
        assert_eq!(snapshot(&flow), before);

        flow.apply(FlowEvent::TakeQuiz).unwrap();
        for _ in 0..4 {
            flow.apply(FlowEvent::Answer("x".to_string())).unwrap();
        }
        flow.apply(FlowEvent::AnalysisElapsed { attempt: 1 }).unwrap();
        let before = snapshot(&flow);
        assert!(flow.apply(FlowEvent::Answer("y".to_string())).is_err());
        assert_eq!(snapshot(&flow), before);
    }

    #[test]
    fn result_actions_are_rejected_elsewhere() {
        let mut flow = controller();
        for event in [
            FlowEvent::SendSummary,
            FlowEvent::ContactWithoutSummary,
            FlowEvent::ContinueToSite,
            FlowEvent::CloseQuiz,
        ] {
            let before = snapshot(&flow);
            assert!(flow.apply(event).is_err());
            assert_eq!(snapshot(&flow), before);
        }
    }

    #[test]
    fn analyzing_cannot_be_left_by_user_input() {
        let mut flow = FlowController::new(generated_questions(1), String::new(), FlowVariant::default());
        flow.apply(FlowEvent::TakeQuiz).unwrap();
        flow.apply(FlowEvent::Answer("A0".to_string())).unwrap();

        for event in [FlowEvent::CloseQuiz, FlowEvent::ContinueToSite, FlowEvent::SkipToSite] {
            assert!(flow.apply(event).is_err());
            assert_eq!(flow.view(), ViewState::Analyzing);
        }
    }

    #[test]
    fn stale_or_repeated_timer_is_ignored() {
        let mut flow = FlowController::new(generated_questions(1), String::new(), FlowVariant::default());
        flow.apply(FlowEvent::TakeQuiz).unwrap();
        flow.apply(FlowEvent::Answer("A0".to_string())).unwrap();

        let err = flow.apply(FlowEvent::AnalysisElapsed { attempt: 7 }).unwrap_err();
        assert!(matches!(err, TransitionError::StaleTimer { attempt: 7, current: 1, .. }));
        assert_eq!(flow.view(), ViewState::Analyzing);

        flow.apply(FlowEvent::AnalysisElapsed { attempt: 1 }).unwrap();
        flow.apply(FlowEvent::ContinueToSite).unwrap();
        assert_eq!(flow.view(), ViewState::MainSite);

        assert!(flow.apply(FlowEvent::AnalysisElapsed { attempt: 1 }).is_err());
        assert_eq!(flow.view(), ViewState::MainSite);
    }

    #[test]
    fn contact_without_summary_and_continue_from_result() {
        let mut flow = FlowController::new(generated_questions(1), String::new(), FlowVariant::default());
        flow.apply(FlowEvent::TakeQuiz).unwrap();
        flow.apply(FlowEvent::Answer("B0".to_string())).unwrap();
        flow.apply(FlowEvent::AnalysisElapsed { attempt: 1 }).unwrap();

        let effects = flow.apply(FlowEvent::ContactWithoutSummary).unwrap();
        assert_eq!(effects, vec![Effect::OpenMessaging { encoded_text: None }]);
        assert_eq!(flow.view(), ViewState::Result);

        flow.apply(FlowEvent::ContinueToSite).unwrap();
        assert_eq!(flow.view(), ViewState::MainSite);
        assert_eq!(flow.answers(), &["B0"]);
    }

    #[test]
    fn lightbox_is_independent_of_view_state() {
        let mut flow = controller();
        flow.apply(FlowEvent::OpenLightbox("a.png".to_string())).unwrap();
        assert_eq!(flow.lightbox(), Some("a.png"));
        assert_eq!(flow.view(), ViewState::Welcome);

        flow.apply(FlowEvent::SkipToSite).unwrap();
        assert_eq!(flow.lightbox(), Some("a.png"));

        flow.apply(FlowEvent::OpenLightbox("b.png".to_string())).unwrap();
        assert_eq!(flow.lightbox(), Some("b.png"));

        flow.apply(FlowEvent::CloseLightbox).unwrap();
        assert_eq!(flow.lightbox(), None);
        assert_eq!(flow.view(), ViewState::MainSite);

        flow.apply(FlowEvent::CloseLightbox).unwrap();
        assert_eq!(flow.lightbox(), None);
    }

    #[test]
    fn navigation_requires_visible_marquee() {
        let mut flow = controller();
        assert!(flow.apply(FlowEvent::Navigate(Section::About)).is_err());

        flow.apply(FlowEvent::SkipToSite).unwrap();
        let effects = flow.apply(FlowEvent::Navigate(Section::About)).unwrap();
        assert_eq!(effects, vec![Effect::ScrollTo(Section::About)]);

        let variant = FlowVariant {
            close_target: CloseTarget::MainSite,
            marquee: MarqueeRule::MainSiteOnly,
        };
        let mut flow = FlowController::new(generated_questions(2), String::new(), variant);
        flow.apply(FlowEvent::TakeQuiz).unwrap();
        assert!(flow.apply(FlowEvent::Navigate(Section::Contact)).is_err());
    }

    #[test]
    fn progress_counts_current_question() {
        let mut flow = controller();
        flow.apply(FlowEvent::TakeQuiz).unwrap();
        assert_eq!(flow.progress_percent(), 25.0);
        assert_eq!(flow.current_question().map(|q| q.id), Some(1));

        flow.apply(FlowEvent::Answer("Volume Labial".to_string())).unwrap();
        assert_eq!(flow.progress_percent(), 50.0);
        assert_eq!(flow.current_question().map(|q| q.id), Some(2));
    }
}
