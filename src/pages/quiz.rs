use crate::content::QuizQuestion;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct QuizOverlayProps {
    pub question: QuizQuestion,
    /// Zero-based index of `question`.
    pub index: usize,
    pub total: usize,
    pub progress: f64,
    pub expert_name: String,
    pub portrait: String,
    pub on_answer: Callback<String>,
    pub on_close: Callback<()>,
}

#[function_component(QuizOverlay)]
pub fn quiz_overlay(props: &QuizOverlayProps) -> Html {
    let options = props.question.options.iter().map(|option| {
        let answer = option.clone();
        let on_click = props.on_answer.reform(move |_: MouseEvent| answer.clone());
        html! {
            <button class="quiz__option" onclick={on_click}>
                <span>{option}</span>
                <span class="quiz__chevron">{"›"}</span>
            </button>
        }
    });

    html! {
        <div class="quiz">
            <style>
                {r#"
                .quiz {
                    position: fixed;
                    inset: 0;
                    z-index: 80;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    background: rgba(0, 0, 0, 0.4);
                    backdrop-filter: blur(12px);
                    animation: fadeIn 0.3s ease;
                }
                .quiz__card {
                    max-width: 28rem;
                    width: 100%;
                    background: #fdfbf7;
                    border-radius: 1.5rem;
                    padding: 1.5rem;
                    border: 1px solid rgba(197, 161, 126, 0.2);
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .quiz__header {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    margin-bottom: 2rem;
                }
                .quiz__who {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .quiz__who img {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    object-fit: cover;
                    object-position: top;
                    border: 2px solid #c5a17e;
                }
                .quiz__badge {
                    font-size: 10px;
                    text-transform: uppercase;
                    color: #c5a17e;
                    font-weight: 700;
                    margin: 0;
                }
                .quiz__name {
                    font-family: serif;
                    font-style: italic;
                    color: #4a3b31;
                    margin: 0;
                }
                .quiz__close {
                    background: none;
                    border: none;
                    color: #9ca3af;
                    font-size: 1.25rem;
                    padding: 0.5rem;
                    border-radius: 50%;
                    cursor: pointer;
                }
                .quiz__close:hover {
                    background: #f3f4f6;
                }
                .quiz__bar {
                    height: 0.5rem;
                    width: 100%;
                    background: #f3f4f6;
                    border-radius: 999px;
                    overflow: hidden;
                }
                .quiz__fill {
                    height: 100%;
                    background: #c5a17e;
                    transition: width 0.4s ease;
                }
                .quiz__step {
                    text-align: right;
                    font-size: 10px;
                    margin-top: 0.5rem;
                    font-weight: 700;
                    color: #9ca3af;
                }
                .quiz__prompt {
                    font-family: serif;
                    font-size: 1.5rem;
                    color: #4a3b31;
                    margin: 1.5rem 0 2rem;
                    line-height: 1.25;
                }
                .quiz__options {
                    display: grid;
                    gap: 0.75rem;
                }
                .quiz__option {
                    width: 100%;
                    padding: 1rem;
                    border-radius: 1rem;
                    background: #fff;
                    border: 1px solid #f3f4f6;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    text-align: left;
                    color: #374151;
                    font-weight: 500;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    cursor: pointer;
                    transition: all 0.2s ease;
                }
                .quiz__option:hover {
                    border-color: #c5a17e;
                    background: #f9fafb;
                }
                .quiz__option:hover .quiz__chevron {
                    color: #c5a17e;
                }
                .quiz__chevron {
                    color: #d1d5db;
                }
                "#}
            </style>
            <div class="quiz__card">
                <div class="quiz__header">
                    <div class="quiz__who">
                        <img src={props.portrait.clone()} alt="" />
                        <div>
                            <p class="quiz__badge">{"Avaliando seu Perfil"}</p>
                            <p class="quiz__name">{&props.expert_name}</p>
                        </div>
                    </div>
                    <button class="quiz__close" onclick={props.on_close.reform(|_: MouseEvent| ())} aria-label="Fechar">{"✕"}</button>
                </div>

                <div>
                    <div class="quiz__bar">
                        <div class="quiz__fill" style={format!("width: {}%;", props.progress)}></div>
                    </div>
                    <p class="quiz__step">{format!("PASSO {} DE {}", props.index + 1, props.total)}</p>
                </div>

                <h3 class="quiz__prompt">{&props.question.prompt}</h3>

                <div class="quiz__options" key={props.question.id.to_string()}>
                    { for options }
                </div>
            </div>
        </div>
    }
}
