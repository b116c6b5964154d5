use crate::flow::Section;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MarqueeProps {
    pub on_navigate: Callback<Section>,
}

#[function_component(Marquee)]
pub fn marquee(props: &MarqueeProps) -> Html {
    // Four copies so the strip never runs out while the animation loops.
    let strip = (0..4).map(|copy| {
        html! {
            <span class="marquee__group" key={copy}>
                { for Section::ALL.iter().map(|section| {
                    let section = *section;
                    let on_click = props.on_navigate.reform(move |_: MouseEvent| section);
                    html! {
                        <>
                            <button class="marquee__item" onclick={on_click}>{section.label()}</button>
                            <span class="marquee__divider">{"/"}</span>
                        </>
                    }
                }) }
            </span>
        }
    });

    html! {
        <div class="marquee">
            <style>
                {r#"
                .marquee {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 70;
                    background: rgba(0, 0, 0, 0.95);
                    color: #fff;
                    padding: 0.75rem 0;
                    overflow: hidden;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.2);
                }
                .marquee__track {
                    display: inline-flex;
                    white-space: nowrap;
                    gap: 2rem;
                    font-size: 10px;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    font-weight: 700;
                    animation: marquee 40s linear infinite;
                }
                .marquee__item {
                    background: none;
                    border: none;
                    color: inherit;
                    font: inherit;
                    letter-spacing: inherit;
                    text-transform: inherit;
                    padding: 0 1rem;
                    cursor: pointer;
                    transition: color 0.2s ease;
                }
                .marquee__item:hover {
                    color: #c5a17e;
                }
                .marquee__divider {
                    opacity: 0.3;
                }
                @keyframes marquee {
                    from { transform: translateX(0); }
                    to { transform: translateX(-50%); }
                }
                "#}
            </style>
            <div class="marquee__track">
                { for strip }
            </div>
        </div>
    }
}
