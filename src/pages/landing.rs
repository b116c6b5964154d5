use crate::components::floating_contact::FloatingContact;
use crate::components::lightbox::Lightbox;
use crate::components::marquee::Marquee;
use crate::config;
use crate::content::SiteContent;
use crate::effects::{messaging, navigation};
use crate::flow::{Effect, FlowController, FlowEvent, ViewState};
use crate::pages::analyzing::AnalyzingOverlay;
use crate::pages::quiz::QuizOverlay;
use crate::pages::result::ResultOverlay;
use crate::pages::site::MainSite;
use crate::pages::welcome::WelcomeGate;
use gloo_timers::callback::Timeout;
use log::{debug, warn};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub content: Rc<SiteContent>,
}

/// Root page: hosts the flow controller and turns its effects into browser calls.
pub struct Landing {
    flow: FlowController,
    analysis_timer: Option<Timeout>,
}

impl Landing {
    fn run_effect(&mut self, ctx: &Context<Self>, effect: Effect) {
        match effect {
            Effect::OpenMessaging { encoded_text } => {
                messaging::open_messaging(&ctx.props().content.links.messaging, encoded_text.as_deref());
            }
            Effect::ScheduleAnalysis { attempt, delay_ms } => {
                let link = ctx.link().clone();
                self.analysis_timer = Some(Timeout::new(delay_ms, move || {
                    link.send_message(FlowEvent::AnalysisElapsed { attempt });
                }));
            }
            Effect::CancelAnalysis => {
                if let Some(timer) = self.analysis_timer.take() {
                    timer.cancel();
                }
            }
            Effect::ScrollTo(section) => navigation::scroll_to_section(section),
        }
    }

    fn view_overlay(&self, ctx: &Context<Self>) -> Html {
        let content = &ctx.props().content;
        let link = ctx.link();
        let expert_name = content.identity.expert_name.clone();
        let portrait = content.images.hero.clone();

        match self.flow.view() {
            ViewState::Welcome => html! {
                <WelcomeGate
                    expert_name={expert_name}
                    portrait={portrait}
                    on_take_quiz={link.callback(|_: ()| FlowEvent::TakeQuiz)}
                    on_skip={link.callback(|_: ()| FlowEvent::SkipToSite)}
                    on_contact={link.callback(|_: ()| FlowEvent::ContactNow)}
                />
            },
            ViewState::Quiz => match self.flow.current_question() {
                Some(question) => html! {
                    <QuizOverlay
                        question={question.clone()}
                        index={self.flow.current_index()}
                        total={self.flow.question_count()}
                        progress={self.flow.progress_percent()}
                        expert_name={expert_name}
                        portrait={portrait}
                        on_answer={link.callback(FlowEvent::Answer)}
                        on_close={link.callback(|_: ()| FlowEvent::CloseQuiz)}
                    />
                },
                None => html! {},
            },
            ViewState::Analyzing => html! {
                <AnalyzingOverlay portrait={portrait} />
            },
            ViewState::Result => html! {
                <ResultOverlay
                    expert_name={expert_name}
                    portrait={portrait}
                    on_send_summary={link.callback(|_: ()| FlowEvent::SendSummary)}
                    on_contact={link.callback(|_: ()| FlowEvent::ContactWithoutSummary)}
                    on_continue={link.callback(|_: ()| FlowEvent::ContinueToSite)}
                />
            },
            ViewState::MainSite => html! {},
        }
    }
}

impl Component for Landing {
    type Message = FlowEvent;
    type Properties = LandingProps;

    fn create(ctx: &Context<Self>) -> Self {
        let content = &ctx.props().content;
        Self {
            flow: FlowController::new(
                content.questions.clone(),
                content.summary_greeting.clone(),
                config::flow_variant(),
            ),
            analysis_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let name = msg.name();
        let before = self.flow.view();
        if matches!(msg, FlowEvent::AnalysisElapsed { .. }) {
            self.analysis_timer = None;
        }

        match self.flow.apply(msg) {
            Ok(effects) => {
                let after = self.flow.view();
                debug!("{}: {} -> {}", name, before, after);
                if name == "take_quiz" && after == ViewState::MainSite {
                    warn!("No quiz questions configured, going straight to the site");
                }
                for effect in effects {
                    self.run_effect(ctx, effect);
                }
                true
            }
            Err(e) => {
                warn!("Ignoring event: {}", e);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let view = self.flow.view();
        let on_contact = link.callback(|_: ()| FlowEvent::ContactNow);

        let site_classes = classes!(
            "site",
            (view == ViewState::Welcome).then(|| "site--hidden"),
            view.is_overlay().then(|| "site--dimmed")
        );

        html! {
            <div class="page">
                <style>
                    {r#"
                    body {
                        margin: 0;
                        background: #fdfbf7;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    .page {
                        position: relative;
                        min-height: 100vh;
                    }
                    .site {
                        padding-top: 3rem;
                        transition: all 0.7s ease;
                    }
                    .site--hidden {
                        opacity: 0;
                    }
                    .site--dimmed {
                        filter: blur(12px);
                        pointer-events: none;
                        transform: scale(0.95);
                    }
                    @keyframes fadeIn {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    "#}
                </style>
                {
                    if view.shows_marquee(self.flow.variant()) {
                        html! { <Marquee on_navigate={link.callback(FlowEvent::Navigate)} /> }
                    } else {
                        html! {}
                    }
                }
                { self.view_overlay(ctx) }
                <main class={site_classes}>
                    <MainSite
                        content={ctx.props().content.clone()}
                        on_contact={on_contact.clone()}
                        on_open_image={link.callback(FlowEvent::OpenLightbox)}
                    />
                </main>
                {
                    if let Some(image) = self.flow.lightbox() {
                        html! {
                            <Lightbox
                                image={image.to_string()}
                                on_close={link.callback(|_: ()| FlowEvent::CloseLightbox)}
                            />
                        }
                    } else {
                        html! {}
                    }
                }
                {
                    if view.shows_floating_contact() {
                        html! { <FloatingContact on_contact={on_contact} /> }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    }
}
