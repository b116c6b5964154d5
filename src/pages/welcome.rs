use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WelcomeGateProps {
    pub expert_name: String,
    pub portrait: String,
    pub on_take_quiz: Callback<()>,
    pub on_skip: Callback<()>,
    pub on_contact: Callback<()>,
}

/// First screen: quiz, straight to the site, or chat right away.
#[function_component(WelcomeGate)]
pub fn welcome_gate(props: &WelcomeGateProps) -> Html {
    html! {
        <div class="gate">
            <style>
                {r#"
                .gate {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1.5rem;
                    background: #fdfbf7;
                    animation: fadeIn 0.4s ease;
                }
                .gate__card {
                    max-width: 28rem;
                    width: 100%;
                    border-radius: 1.5rem;
                    padding: 2rem;
                    text-align: center;
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                    background: rgba(255, 255, 255, 0.7);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15);
                }
                .gate__portrait {
                    position: relative;
                    width: 7rem;
                    height: 7rem;
                    margin: 0 auto;
                }
                .gate__portrait img {
                    width: 100%;
                    height: 100%;
                    border-radius: 50%;
                    object-fit: cover;
                    object-position: top;
                    border: 4px solid #c5a17e;
                }
                .gate__online {
                    position: absolute;
                    bottom: -0.25rem;
                    right: -0.25rem;
                    width: 1.25rem;
                    height: 1.25rem;
                    border-radius: 50%;
                    background: #22c55e;
                    border: 2px solid #fff;
                }
                .gate__title {
                    font-family: serif;
                    font-size: 1.9rem;
                    color: #4a3b31;
                    margin: 0;
                }
                .gate__text {
                    color: #4b5563;
                    line-height: 1.6;
                }
                .gate__actions {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .gate__primary, .gate__secondary {
                    width: 100%;
                    border-radius: 1rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }
                .gate__primary {
                    padding: 1.25rem;
                    background: #4a3b31;
                    color: #fff;
                    border: none;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                }
                .gate__primary:hover {
                    transform: scale(1.05);
                }
                .gate__secondary {
                    padding: 1rem;
                    background: transparent;
                    color: #4a3b31;
                    border: 2px solid #4a3b31;
                }
                .gate__link {
                    background: none;
                    border: none;
                    color: #6b7280;
                    font-size: 0.875rem;
                    text-decoration: underline;
                    text-underline-offset: 4px;
                    cursor: pointer;
                }
                "#}
            </style>
            <div class="gate__card">
                <div class="gate__portrait">
                    <img src={props.portrait.clone()} alt={props.expert_name.clone()} />
                    <div class="gate__online"></div>
                </div>
                <div>
                    <h2 class="gate__title">{&props.expert_name}</h2>
                    <p class="gate__text">
                        {"Prepare-se para uma experiência de beleza personalizada e exclusiva. Escolha como deseja prosseguir:"}
                    </p>
                </div>
                <div class="gate__actions">
                    <button class="gate__primary" onclick={props.on_take_quiz.reform(|_: MouseEvent| ())}>
                        {"★ Fazer Avaliação Personalizada"}
                    </button>
                    <button class="gate__secondary" onclick={props.on_skip.reform(|_: MouseEvent| ())}>
                        {"Ir direto para o site"}
                    </button>
                    <button class="gate__link" onclick={props.on_contact.reform(|_: MouseEvent| ())}>
                        {"Chamar no WhatsApp agora"}
                    </button>
                </div>
            </div>
        </div>
    }
}
