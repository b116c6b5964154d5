use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResultOverlayProps {
    pub expert_name: String,
    pub portrait: String,
    pub on_send_summary: Callback<()>,
    pub on_contact: Callback<()>,
    pub on_continue: Callback<()>,
}

#[function_component(ResultOverlay)]
pub fn result_overlay(props: &ResultOverlayProps) -> Html {
    let on_continue = props.on_continue.reform(|_: MouseEvent| ());

    html! {
        <div class="result">
            <style>
                {r#"
                .result {
                    position: fixed;
                    inset: 0;
                    z-index: 80;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.6);
                    backdrop-filter: blur(16px);
                    overflow-y: auto;
                    animation: fadeIn 0.3s ease;
                }
                .result__card {
                    position: relative;
                    width: 100%;
                    max-width: 28rem;
                    background: #fdfbf7;
                    border-radius: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1.5rem;
                    padding: 2rem;
                    text-align: center;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .result__close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    color: #9ca3af;
                    font-size: 1.25rem;
                    cursor: pointer;
                }
                .result__match {
                    background: #dcfce7;
                    color: #15803d;
                    padding: 0.5rem 1.5rem;
                    border-radius: 999px;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    font-size: 10px;
                    animation: bounce 1s infinite;
                }
                .result__portrait {
                    width: 11rem;
                    height: 11rem;
                    border-radius: 50%;
                    overflow: hidden;
                    border: 8px solid #fff;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.2);
                }
                .result__portrait img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    object-position: top;
                }
                .result h3 {
                    font-family: serif;
                    font-size: 1.5rem;
                    color: #4a3b31;
                    margin: 0;
                }
                .result__text {
                    color: #4b5563;
                    font-size: 0.875rem;
                    line-height: 1.6;
                    padding: 0 1rem;
                }
                .result__actions {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    width: 100%;
                    padding-top: 1rem;
                }
                .result__actions button {
                    width: 100%;
                    border-radius: 1rem;
                    font-weight: 700;
                    cursor: pointer;
                    transition: all 0.2s ease;
                }
                .result__send {
                    padding: 1.25rem;
                    background: #c5a17e;
                    color: #fff;
                    border: none;
                    box-shadow: 0 20px 25px rgba(197, 161, 126, 0.3);
                }
                .result__send:hover {
                    background: #b38f6d;
                }
                .result__chat {
                    padding: 1rem;
                    background: transparent;
                    color: #16a34a;
                    border: 2px solid #16a34a;
                }
                .result__skip {
                    padding: 1rem;
                    background: #f3f4f6;
                    color: #6b7280;
                    border: none;
                }
                @keyframes bounce {
                    0%, 100% { transform: translateY(-10%); }
                    50% { transform: translateY(0); }
                }
                "#}
            </style>
            <div class="result__card">
                <button class="result__close" onclick={on_continue.clone()} aria-label="Fechar">{"✕"}</button>
                <div class="result__match">{"Perfil Compatível. Você é a Paciente ideal."}</div>
                <div class="result__portrait">
                    <img src={props.portrait.clone()} alt={props.expert_name.clone()} />
                </div>
                <div>
                    <h3>{"Pronto para Começar?"}</h3>
                    <p class="result__text">
                        {"Com base nas suas respostas, o Método da "}
                        <b>{&props.expert_name}</b>
                        {" consegue entregar exatamente a naturalidade e segurança que você procura."}
                    </p>
                </div>
                <div class="result__actions">
                    <button class="result__send" onclick={props.on_send_summary.reform(|_: MouseEvent| ())}>
                        {"✓ 1- ENVIAR MINHA AVALIAÇÃO A DRA."}
                    </button>
                    <button class="result__chat" onclick={props.on_contact.reform(|_: MouseEvent| ())}>
                        {"2- CHAMAR NO WHATSAPP SEM COMPROMISSO"}
                    </button>
                    <button class="result__skip" onclick={on_continue}>
                        {"3- NÃO ENVIAR E CONTINUAR NO SITE"}
                    </button>
                </div>
            </div>
        </div>
    }
}
