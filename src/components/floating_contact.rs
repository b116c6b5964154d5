use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FloatingContactProps {
    pub on_contact: Callback<()>,
}

/// Round chat button pinned to the corner on small screens.
#[function_component(FloatingContact)]
pub fn floating_contact(props: &FloatingContactProps) -> Html {
    html! {
        <div class="floating-contact">
            <style>
                {r#"
                .floating-contact {
                    position: fixed;
                    bottom: 2rem;
                    right: 2rem;
                    z-index: 60;
                    display: none;
                    animation: slideUp 0.4s ease-out;
                }
                .floating-contact button {
                    width: 4.5rem;
                    height: 4.5rem;
                    border-radius: 50%;
                    border: 4px solid #fff;
                    background: #22c55e;
                    color: #fff;
                    font-size: 2rem;
                    box-shadow: 0 20px 40px rgba(34, 197, 94, 0.4);
                    cursor: pointer;
                }
                .floating-contact button:active {
                    transform: scale(0.9);
                }
                @keyframes slideUp {
                    from { transform: translateY(100px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                @media (max-width: 768px) {
                    .floating-contact {
                        display: block;
                    }
                }
                "#}
            </style>
            <button onclick={props.on_contact.reform(|_: MouseEvent| ())} aria-label="WhatsApp">{"💬"}</button>
        </div>
    }
}
