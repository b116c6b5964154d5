use crate::content::SiteContent;
use crate::flow::Section;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MainSiteProps {
    pub content: Rc<SiteContent>,
    pub on_contact: Callback<()>,
    pub on_open_image: Callback<String>,
}

#[derive(Properties, PartialEq)]
struct SectionProps {
    content: Rc<SiteContent>,
    #[prop_or_default]
    on_contact: Callback<()>,
    #[prop_or_default]
    on_open_image: Callback<String>,
}

const ABOUT_POINTS: [&str; 4] = [
    "Avaliação individualizada e minuciosa",
    "Uso exclusivo de produtos de alta performance",
    "Protocolos de segurança rigorosos",
    "Foco total em resultados discretos e elegantes",
];

#[function_component(Hero)]
fn hero(props: &SectionProps) -> Html {
    let identity = &props.content.identity;
    html! {
        <section id={Section::Hero.id()} class="hero">
            <div class="container two-col">
                <div class="hero__copy">
                    <div class="pill">{"Especialista em Harmonização"}</div>
                    <h1 class="hero__title">
                        {"Olá, eu sou a "}<br/>
                        <span class="hero__name">{&identity.expert_name}</span>
                    </h1>
                    <p class="lead">
                        {"Minha missão é realçar sua beleza de forma natural, segura e com foco na sua identidade única. Sem exageros, apenas a sua melhor versão."}
                    </p>
                    <button class="cta cta--dark" onclick={props.on_contact.reform(|_: MouseEvent| ())}>
                        {"Agendar consulta no WhatsApp →"}
                    </button>
                </div>
                <div class="hero__media">
                    <div class="hero__frame">
                        <img src={props.content.images.hero.clone()} alt={identity.expert_name.clone()} />
                    </div>
                    <div class="hero__rating">
                        <div class="stars">{"★★★★★"}</div>
                        <p>{"+500 Pacientes Satisfeitas"}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(VideoShowcase)]
fn video_showcase(props: &SectionProps) -> Html {
    let images = &props.content.images;
    if images.video.is_empty() {
        return html! {};
    }
    html! {
        <section class="showcase">
            <div class="container showcase__grid">
                <div class="showcase__video">
                    <video controls=true poster={images.hero.clone()}>
                        <source src={images.video.clone()} type="video/mp4" />
                    </video>
                </div>
                <div class="showcase__copy">
                    <h3>{"Descubra a beleza em alta definição."}</h3>
                    <p class="quote">
                        {"\"Aperte o play e sinta a diferença de ser cuidada por quem entende que sua beleza é única e merece atenção especial.\""}
                    </p>
                    <div class="tagline">{"Técnica, Sensibilidade e Propósito"}</div>
                </div>
            </div>
        </section>
    }
}

#[function_component(About)]
fn about(props: &SectionProps) -> Html {
    html! {
        <section id={Section::About.id()} class="about">
            <div class="container two-col">
                <div class="about__photo">
                    <img src={props.content.images.hero.clone()} alt="" />
                    <div class="about__signature">
                        <p>{"\"A verdadeira beleza está na harmonia que reflete quem você é.\""}</p>
                        <div class="signature">{&props.content.identity.expert_name}</div>
                    </div>
                </div>
                <div class="about__copy">
                    <div class="pill">{"Trajetória e Propósito"}</div>
                    <h2>{"Especialista em Naturalidade"}</h2>
                    <p class="lead">
                        {"Com anos de dedicação exclusiva à Harmonização Facial, meu foco é devolver o que o tempo tirou, sem transformar você em outra pessoa. Minha técnica é baseada em ciência, sensibilidade e um olhar artístico individualizado."}
                    </p>
                    <ul class="about__points">
                        { for ABOUT_POINTS.iter().map(|point| html! {
                            <li><span class="check">{"✓"}</span>{*point}</li>
                        }) }
                    </ul>
                </div>
            </div>
        </section>
    }
}

#[function_component(ResultsGallery)]
fn results_gallery(props: &SectionProps) -> Html {
    let tiles = props.content.images.results.iter().enumerate().map(|(i, src)| {
        let image = src.clone();
        let on_click = props.on_open_image.reform(move |_: MouseEvent| image.clone());
        html! {
            <div class="gallery__tile" key={i} onclick={on_click}
                style={format!("animation-delay: {}ms;", i * 50)}>
                <img src={src.clone()} alt="" />
                <div class="gallery__hover">
                    <span class="gallery__star">{"★"}</span>
                    <p>{"Ver Detalhes"}</p>
                </div>
            </div>
        }
    });

    html! {
        <section id={Section::Results.id()} class="gallery">
            <div class="container centered">
                <h2>{"Galeria de Resultados"}</h2>
                <p class="subtitle">{"\"A naturalidade é a sofisticação máxima.\" Confira transformações reais."}</p>
            </div>
            <div class="container gallery__grid">
                { for tiles }
            </div>
            <p class="disclaimer">{"⚠️ Nota: Cada face é única. Resultados são personalizados e variam entre pacientes."}</p>
        </section>
    }
}

#[function_component(HarmonyGrid)]
fn harmony_grid(props: &SectionProps) -> Html {
    html! {
        <section id={Section::Harmony.id()} class="harmony">
            <div class="container">
                <div class="centered">
                    <h2>{"Harmonização de 💚"}</h2>
                    <p class="subtitle">{"Momentos e transformações que marcam vidas."}</p>
                </div>
                <div class="harmony__grid">
                    { for props.content.images.harmony_grid.iter().map(|src| html! {
                        <div class="harmony__tile"><img src={src.clone()} alt="" /></div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Testimonials)]
fn testimonials(props: &SectionProps) -> Html {
    let images = &props.content.images.testimonials;
    if images.is_empty() {
        return html! {};
    }
    html! {
        <section class="testimonials">
            <div class="container">
                <div class="centered">
                    <h2>{"O que dizem as pacientes"}</h2>
                </div>
                <div class="testimonials__row">
                    { for images.iter().map(|src| {
                        let image = src.clone();
                        let on_click = props.on_open_image.reform(move |_: MouseEvent| image.clone());
                        html! {
                            <div class="testimonials__card" onclick={on_click}>
                                <img src={src.clone()} alt="" />
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Location)]
fn location(props: &SectionProps) -> Html {
    let identity = &props.content.identity;
    let links = &props.content.links;
    html! {
        <section id={Section::Location.id()} class="location">
            <div class="container narrow">
                <div class="centered">
                    <div class="location__pin">{"📍"}</div>
                    <h2>{"Onde nos Encontrar"}</h2>
                    <p class="subtitle">{"Ambiente exclusivo planejado para seu total conforto e segurança."}</p>
                </div>
                {
                    if !links.map_embed_url.is_empty() {
                        html! {
                            <div class="location__map">
                                <iframe src={links.map_embed_url.clone()} width="100%" height="100%"
                                    style="border: 0;" loading="lazy" allowfullscreen=true></iframe>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                <div class="centered location__footer">
                    <p class="location__city">{&identity.location}</p>
                    <a href={links.instagram_url.clone()} target="_blank" class="instagram">
                        {&identity.instagram_handle}
                    </a>
                </div>
            </div>
        </section>
    }
}

#[function_component(ContactCall)]
fn contact_call(props: &SectionProps) -> Html {
    html! {
        <section id={Section::Contact.id()} class="contact">
            <div class="container centered">
                <h2>
                    {"Chegou a hora de investir no seu "}<br/>
                    {"maior patrimônio: "}<span class="italic">{"Você."}</span>
                </h2>
                <p class="contact__lead">{"Sua beleza merece o cuidado de quem entende que o detalhe faz toda a diferença."}</p>
                <button class="cta cta--gold" onclick={props.on_contact.reform(|_: MouseEvent| ())}>
                    {"Quero minha Avaliação Gratuita 💬"}
                </button>
                <p class="contact__note">{"Atendimento via WhatsApp"}</p>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer(props: &SectionProps) -> Html {
    let identity = &props.content.identity;
    html! {
        <footer class="footer">
            <h3 class="signature">{&identity.expert_name}</h3>
            <p class="footer__profession">{&identity.profession}</p>
            <p class="footer__rights">{"© 2024 • Todos os direitos reservados • Premium Experience"}</p>
            <div class="footer__links">
                <a href={props.content.links.instagram_url.clone()} target="_blank">{"Instagram"}</a>
                <button onclick={props.on_contact.reform(|_: MouseEvent| ())}>{"WhatsApp"}</button>
            </div>
        </footer>
    }
}

/// The static landing page shown under (and after) the overlays.
#[function_component(MainSite)]
pub fn main_site(props: &MainSiteProps) -> Html {
    let content = props.content.clone();
    let on_contact = props.on_contact.clone();
    let on_open_image = props.on_open_image.clone();

    html! {
        <>
            <style>
                {r#"
                .container { max-width: 1280px; margin: 0 auto; }
                .narrow { max-width: 72rem; }
                .centered { text-align: center; }
                .two-col {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                section { padding: 8rem 1.5rem; }
                section h2 {
                    font-family: serif;
                    font-size: 3.5rem;
                    color: #4a3b31;
                    line-height: 1.15;
                }
                .pill {
                    display: inline-block;
                    padding: 0.25rem 1rem;
                    background: rgba(197, 161, 126, 0.1);
                    color: #c5a17e;
                    border-radius: 999px;
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }
                .lead { font-size: 1.25rem; color: #4b5563; line-height: 1.6; }
                .subtitle { color: #6b7280; font-size: 1.125rem; font-style: italic; }
                .cta {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.75rem;
                    border: none;
                    border-radius: 999px;
                    color: #fff;
                    font-weight: 700;
                    cursor: pointer;
                    transition: transform 0.3s ease;
                }
                .cta:hover { transform: scale(1.05); }
                .cta--dark {
                    padding: 1.5rem 3rem;
                    background: #4a3b31;
                    font-size: 1.125rem;
                    box-shadow: 0 20px 40px rgba(74, 59, 49, 0.3);
                }
                .cta--gold {
                    padding: 1.75rem 3.5rem;
                    background: #c5a17e;
                    font-size: 1.5rem;
                    box-shadow: 0 30px 60px rgba(197, 161, 126, 0.3);
                }
                .hero { padding-top: 4rem; background: #fdfbf7; overflow: hidden; }
                .hero__title { font-family: serif; font-size: 5rem; line-height: 1.1; color: #4a3b31; }
                .hero__name { font-style: italic; font-weight: 300; }
                .hero__media { position: relative; display: flex; justify-content: center; }
                .hero__frame {
                    padding: 0.5rem;
                    background: #fff;
                    border-radius: 80px;
                    overflow: hidden;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15);
                    max-width: 500px;
                }
                .hero__frame img { width: 100%; border-radius: 72px; object-fit: cover; object-position: top; }
                .hero__rating {
                    position: absolute;
                    bottom: -1.5rem;
                    left: -1.5rem;
                    background: #fff;
                    padding: 1.5rem;
                    border-radius: 1.5rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15);
                }
                .hero__rating p { font-size: 0.75rem; font-weight: 700; color: #4a3b31; margin: 0.5rem 0 0; }
                .stars { color: #c5a17e; letter-spacing: 0.2em; }
                .showcase { background: #fff; }
                .showcase__grid { display: grid; grid-template-columns: 2fr 1fr; gap: 3rem; align-items: center; }
                .showcase__video {
                    aspect-ratio: 16 / 9;
                    border-radius: 60px;
                    overflow: hidden;
                    border: 16px solid #fff;
                    background: #000;
                    box-shadow: 0 40px 80px rgba(0, 0, 0, 0.15);
                }
                .showcase__video video { width: 100%; height: 100%; object-fit: cover; }
                .showcase__copy h3 { font-family: serif; font-size: 2.75rem; color: #4a3b31; }
                .quote {
                    color: #4b5563;
                    font-style: italic;
                    font-size: 1.25rem;
                    border-left: 4px solid #c5a17e;
                    padding-left: 1.5rem;
                }
                .tagline { color: #c5a17e; font-weight: 700; text-transform: uppercase; letter-spacing: 0.2em; font-size: 10px; }
                .about { background: #fdfbf7; }
                .about__photo { position: relative; background: #fff; padding: 1rem; border-radius: 1.5rem; }
                .about__photo img { width: 100%; height: 600px; object-fit: cover; object-position: top; border-radius: 1rem; }
                .about__signature {
                    position: absolute;
                    bottom: -2.5rem;
                    right: -2.5rem;
                    width: 18rem;
                    padding: 2rem;
                    border-radius: 1.5rem;
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(12px);
                    font-family: serif;
                    font-style: italic;
                    color: #4a3b31;
                }
                .signature { font-family: cursive; color: #c5a17e; font-size: 1.9rem; }
                .about__points { list-style: none; padding: 0; display: grid; gap: 1.5rem; }
                .about__points li { display: flex; align-items: center; gap: 1.25rem; color: #4a3b31; font-weight: 600; font-size: 1.125rem; }
                .check { padding: 0.4rem 0.6rem; background: #c5a17e; color: #fff; border-radius: 0.75rem; }
                .gallery { background: #fff; }
                .gallery__grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1.5rem; margin-top: 5rem; }
                .gallery__tile {
                    position: relative;
                    aspect-ratio: 4 / 5;
                    overflow: hidden;
                    border-radius: 32px;
                    border: 4px solid #fff;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    cursor: zoom-in;
                    animation: fadeIn 0.5s ease both;
                }
                .gallery__tile img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.7s ease; }
                .gallery__tile:hover img { transform: scale(1.1); }
                .gallery__hover {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.4);
                    opacity: 0;
                    transition: opacity 0.3s ease;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    color: #fff;
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }
                .gallery__tile:hover .gallery__hover { opacity: 1; }
                .gallery__star { font-size: 2rem; }
                .disclaimer {
                    text-align: center;
                    font-size: 10px;
                    text-transform: uppercase;
                    font-weight: 700;
                    color: #d1d5db;
                    margin-top: 4rem;
                    letter-spacing: 0.3em;
                }
                .harmony { background: #fdfbf7; }
                .harmony__grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; margin-top: 5rem; }
                .harmony__tile {
                    aspect-ratio: 1;
                    border-radius: 40px;
                    overflow: hidden;
                    border: 8px solid #fff;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15);
                    transition: transform 0.3s ease;
                }
                .harmony__tile:hover { transform: translateY(-10px); }
                .harmony__tile img { width: 100%; height: 100%; object-fit: cover; }
                .testimonials { background: #fff; }
                .testimonials__row { display: flex; gap: 1.5rem; overflow-x: auto; padding: 2rem 0; }
                .testimonials__card { flex: 0 0 18rem; border-radius: 1.5rem; overflow: hidden; cursor: zoom-in; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); }
                .testimonials__card img { width: 100%; display: block; }
                .location { background: #fff; }
                .location__pin { font-size: 2.5rem; }
                .location__map {
                    height: 500px;
                    border-radius: 60px;
                    overflow: hidden;
                    border: 12px solid #fff;
                    background: #f3f4f6;
                    box-shadow: 0 50px 100px rgba(0, 0, 0, 0.1);
                    margin-top: 4rem;
                }
                .location__footer { margin-top: 3rem; }
                .location__city { font-family: serif; font-size: 1.5rem; color: #4a3b31; }
                .instagram {
                    display: inline-block;
                    padding: 0.75rem 2rem;
                    background: #fff;
                    border-radius: 999px;
                    color: #c5a17e;
                    font-weight: 700;
                    text-decoration: none;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                }
                .contact { background: #4a3b31; color: #fff; overflow: hidden; }
                .contact h2 { color: #fff; font-size: 4rem; }
                .contact__lead { color: #d1d5db; max-width: 32rem; margin: 2rem auto; font-size: 1.25rem; font-weight: 300; }
                .contact__note { opacity: 0.5; font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.3em; font-weight: 700; margin-top: 2rem; }
                .italic { font-style: italic; }
                .footer { padding: 5rem 1.5rem; background: #fff; border-top: 1px solid #f3f4f6; text-align: center; }
                .footer .signature { font-size: 3.75rem; color: #4a3b31; }
                .footer__profession { font-size: 0.75rem; font-weight: 700; letter-spacing: 0.4em; color: #9ca3af; text-transform: uppercase; }
                .footer__rights { font-size: 0.75rem; color: #9ca3af; }
                .footer__links { display: flex; justify-content: center; gap: 2.5rem; margin-top: 2.5rem; }
                .footer__links a, .footer__links button {
                    color: #9ca3af;
                    background: none;
                    border: none;
                    font: inherit;
                    text-decoration: none;
                    cursor: pointer;
                }
                .footer__links a:hover, .footer__links button:hover { color: #c5a17e; }
                @media (max-width: 768px) {
                    .two-col, .showcase__grid { grid-template-columns: 1fr; }
                    .hero__title { font-size: 3rem; }
                    section h2, .contact h2 { font-size: 2.5rem; }
                    .gallery__grid, .harmony__grid { grid-template-columns: repeat(2, 1fr); }
                    .hero__rating, .about__signature { display: none; }
                }
                "#}
            </style>
            <Hero content={content.clone()} on_contact={on_contact.clone()} />
            <VideoShowcase content={content.clone()} />
            <About content={content.clone()} />
            <ResultsGallery content={content.clone()} on_open_image={on_open_image.clone()} />
            <HarmonyGrid content={content.clone()} />
            <Testimonials content={content.clone()} on_open_image={on_open_image} />
            <Location content={content.clone()} />
            <ContactCall content={content.clone()} on_contact={on_contact.clone()} />
            <Footer content={content} on_contact={on_contact} />
        </>
    }
}
