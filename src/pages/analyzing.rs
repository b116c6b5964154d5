use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AnalyzingOverlayProps {
    pub portrait: String,
}

#[function_component(AnalyzingOverlay)]
pub fn analyzing_overlay(props: &AnalyzingOverlayProps) -> Html {
    html! {
        <div class="analyzing">
            <style>
                {r#"
                .analyzing {
                    position: fixed;
                    inset: 0;
                    z-index: 80;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    padding: 2rem;
                    background: rgba(253, 251, 247, 0.9);
                    backdrop-filter: blur(24px);
                    animation: fadeIn 0.3s ease;
                }
                .analyzing__spinner {
                    position: relative;
                    width: 8rem;
                    height: 8rem;
                    margin-bottom: 2rem;
                }
                .analyzing__ring {
                    position: absolute;
                    inset: 0;
                    border-radius: 50%;
                    border: 4px solid rgba(197, 161, 126, 0.1);
                    border-top-color: #c5a17e;
                    animation: spin 1s linear infinite;
                }
                .analyzing__spinner img {
                    position: absolute;
                    inset: 1rem;
                    width: 6rem;
                    height: 6rem;
                    border-radius: 50%;
                    object-fit: cover;
                    object-position: top;
                    filter: grayscale(1);
                    opacity: 0.5;
                }
                .analyzing h2 {
                    font-family: serif;
                    color: #4a3b31;
                    margin-bottom: 0.5rem;
                }
                .analyzing p {
                    color: #6b7280;
                    text-align: center;
                    max-width: 20rem;
                }
                @keyframes spin {
                    to { transform: rotate(360deg); }
                }
                "#}
            </style>
            <div class="analyzing__spinner">
                <div class="analyzing__ring"></div>
                <img src={props.portrait.clone()} alt="" />
            </div>
            <h2>{"Analisando Respostas..."}</h2>
            <p>{"Buscando as melhores técnicas para o seu perfil exclusivo."}</p>
        </div>
    }
}
