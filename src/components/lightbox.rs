use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub image: String,
    pub on_close: Callback<()>,
}

#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let close_backdrop = props.on_close.reform(|_: MouseEvent| ());
    let close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    html! {
        <div class="lightbox" onclick={close_backdrop}>
            <style>
                {r#"
                .lightbox {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    background: rgba(0, 0, 0, 0.95);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    cursor: zoom-out;
                    animation: fadeIn 0.3s ease;
                }
                .lightbox img {
                    max-width: 100%;
                    max-height: 100%;
                    border-radius: 1rem;
                    border: 4px solid rgba(255, 255, 255, 0.1);
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                }
                .lightbox__close {
                    position: absolute;
                    top: 2rem;
                    right: 2rem;
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 50%;
                    border: none;
                    background: rgba(255, 255, 255, 0.1);
                    color: #fff;
                    font-size: 1.75rem;
                    cursor: pointer;
                }
                .lightbox__close:hover {
                    background: rgba(255, 255, 255, 0.2);
                }
                "#}
            </style>
            <img src={props.image.clone()} alt="Resultado ampliado" />
            <button class="lightbox__close" onclick={close_button} aria-label="Fechar">{"✕"}</button>
        </div>
    }
}
