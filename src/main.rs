//! Entry point for the FDD promotional site.
//! Wires the page shell, scroll tracking and the section components.

use fdd_site::defaults::PREMIERE_MS;
use fdd_site::{CHARACTERS, EPISODES};
use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod utils;

use components::{CharacterCard, CountdownDisplay, EpisodeCard, FddSimulator, GlitchText};
use config::{LOG_LEVEL, NAV_LINKS};
use hooks::use_scroll_y;
use utils::{hero_bg_style, nav_class, nav_links_class};

// (icon, heading, body) for the "El sistema" cards
const SISTEMA_CARDS: [(&str, &str, &str); 3] = [
    (
        "07",
        "ASIGNACIÓN",
        "A los 7 años de edad, cada ciudadano recibe su FDD: la fecha exacta de su muerte. No sabes cómo. Solo cuándo.",
    ),
    (
        "⚖",
        "EL DEBER",
        "Antes de morir, debes cumplir tu deber cívico: ejecutar a la persona que te asignen cuando llegue su FDD.",
    ),
    (
        "∞",
        "EL CICLO",
        "Nadie muere de forma natural. Toda muerte es administrada. El sistema se perpetúa. La máquina no se detiene.",
    ),
];

#[derive(Properties, PartialEq)]
struct NavProps {
    scroll_y: f64,
}

/// Top bar with the collapsible link menu.
#[function_component(Nav)]
fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);

    let toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <nav class={nav_class(props.scroll_y)}>
            <div class="nav-container">
                <div class="nav-logo">
                    <GlitchText text="FDD" />
                </div>
                <button class="nav-toggle" onclick={toggle}>
                    <span></span><span></span><span></span>
                </button>
                <div class={nav_links_class(*menu_open)}>
                    { NAV_LINKS.iter().map(|(id, label)| html! {
                        <a href={format!("#{}", id)} onclick={close.clone()}>{ *label }</a>
                    }).collect::<Html>() }
                </div>
            </div>
        </nav>
    }
}

fn hero(scroll_y: f64) -> Html {
    html! {
        <section class="hero">
            <div class="hero-bg" style={hero_bg_style(scroll_y)}>
                <div class="hero-grid"></div>
            </div>
            <div class="hero-content">
                <div class="hero-badge">{ "SERIE LIMITADA · 8 EPISODIOS · 2026" }</div>
                <h1 class="hero-title">
                    <GlitchText text="FDD" class="title-main" />
                    <span class="title-sub">{ "FECHA DE DEFUNCIÓN" }</span>
                </h1>
                <p class="hero-tagline">
                    { "A los 7 años recibes tu fecha de muerte." }<br />
                    { "Tu deber cívico: ser el verdugo de otro." }
                </p>
                <div class="hero-countdown">
                    <CountdownDisplay target_ms={PREMIERE_MS} />
                </div>
                <div class="hero-cta">
                    <a href="#simular" class="btn-primary">
                        <span>{ "EXPERIMENTA EL SISTEMA" }</span>
                        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                            <path d="M5 12h14M12 5l7 7-7 7" />
                        </svg>
                    </a>
                </div>
            </div>
            <div class="scroll-indicator">
                <span>{ "SCROLL" }</span>
                <div class="scroll-line"></div>
            </div>
        </section>
    }
}

/// Shared heading block used by every content section.
fn section_header(tag: &str, title: &str, desc: Option<&str>) -> Html {
    html! {
        <div class="section-header">
            <span class="section-tag">{ tag.to_string() }</span>
            <h2 class="section-title">{ title.to_string() }</h2>
            if let Some(desc) = desc {
                <p class="section-desc">{ desc.to_string() }</p>
            }
        </div>
    }
}

fn sistema_section() -> Html {
    html! {
        <section id="sistema" class="section section-sistema">
            <div class="container">
                { section_header("ARCHIVO CLASIFICADO", "EL SISTEMA", None) }
                <div class="sistema-grid">
                    { SISTEMA_CARDS.iter().map(|(icon, heading, body)| html! {
                        <div class="sistema-card">
                            <div class="sistema-icon">{ *icon }</div>
                            <h3>{ *heading }</h3>
                            <p>{ *body }</p>
                        </div>
                    }).collect::<Html>() }
                </div>
                <div class="sistema-quote">
                    <blockquote>
                        { "\"¿Qué queda de tu humanidad cuando el sistema te obliga a participar directamente en la muerte de otro?\"" }
                    </blockquote>
                </div>
            </div>
        </section>
    }
}

fn characters_section() -> Html {
    html! {
        <section id="personajes" class="section section-personajes">
            <div class="container">
                { section_header(
                    "EXPEDIENTES ACTIVOS",
                    "PERSONAJES",
                    Some("Pulse en cada tarjeta para revelar la FDD"),
                ) }
                <div class="characters-grid">
                    { CHARACTERS.iter().enumerate().map(|(idx, character)| html! {
                        <CharacterCard key={idx} character={character.clone()} />
                    }).collect::<Html>() }
                </div>
            </div>
        </section>
    }
}

fn episodes_section() -> Html {
    html! {
        <section id="episodios" class="section section-episodios">
            <div class="container">
                { section_header("TEMPORADA 1", "EPISODIOS", None) }
                <div class="episodes-grid">
                    { EPISODES.iter().map(|episode| html! {
                        <EpisodeCard key={episode.number} episode={episode.clone()} />
                    }).collect::<Html>() }
                </div>
            </div>
        </section>
    }
}

fn simulator_section() -> Html {
    html! {
        <section id="simular" class="section section-simulator">
            <div class="container">
                { section_header(
                    "EXPERIENCIA INTERACTIVA",
                    "RECIBE TU FDD",
                    Some("Experimenta lo que siente un ciudadano al recibir su asignación"),
                ) }
                <FddSimulator />
                <p class="simulator-disclaimer">
                    { "* Esto es una simulación ficticia. No refleja ningún dato real." }
                </p>
            </div>
        </section>
    }
}

fn closing_sections() -> Html {
    html! {
        <>
            <section class="section section-cta">
                <div class="container">
                    <div class="cta-content">
                        <div class="cta-icon">{ "†" }</div>
                        <h2>{ "EL SISTEMA TE ESPERA" }</h2>
                        <p>{ "Serie limitada · 8 episodios · Estreno 2026" }</p>
                        <div class="cta-buttons">
                            <button class="btn-notify">
                                <span>{ "NOTIFICARME DEL ESTRENO" }</span>
                            </button>
                        </div>
                        <div class="creator-credit">
                            <span>{ "Creada por Álvaro" }</span>
                        </div>
                    </div>
                </div>
            </section>
            <footer class="footer">
                <div class="container">
                    <div class="footer-content">
                        <div class="footer-logo">
                            <GlitchText text="FDD" />
                            <span>{ "FECHA DE DEFUNCIÓN" }</span>
                        </div>
                        <div class="footer-legal">
                            <p>{ "© 2026 FDD Series. Todos los derechos reservados." }</p>
                            <p class="footer-warning">
                                { "ADVERTENCIA: Este contenido es ficción. El sistema FDD no existe." }
                            </p>
                        </div>
                    </div>
                </div>
            </footer>
        </>
    }
}

/// Page shell: overlays, navigation and every section.
#[function_component]
pub fn App() -> Html {
    let scroll_y = use_scroll_y();

    html! {
        <div class="app">
            <div class="scanlines"></div>
            <div class="noise"></div>
            <Nav {scroll_y} />
            { hero(scroll_y) }
            { sistema_section() }
            { characters_section() }
            { episodes_section() }
            { simulator_section() }
            { closing_sections() }
        </div>
    }
}

/// Entry point: installs the panic hook and logger, then mounts the app.
fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(LOG_LEVEL));
    yew::Renderer::<App>::new().render();
}
