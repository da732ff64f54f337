//! Yew view components for the FDD site.
//!
//! Card and text components are stateless or hold only their own toggle;
//! timers live in the hooks they call.

use crate::hooks::{use_countdown, use_simulator};
use crate::utils::{countdown_heading, format_episode_number};
use fdd_site::defaults::REF_PREFIX;
use fdd_site::simulator::Stage;
use fdd_site::{format_fdd_date, shown_fdd, Character, Episode};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GlitchTextProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Text duplicated into `data-text` so the CSS glitch layers can draw it.
#[function_component(GlitchText)]
pub fn glitch_text(props: &GlitchTextProps) -> Html {
    html! {
        <span class={classes!("glitch", props.class.clone())} data-text={props.text.clone()}>
            { props.text.to_string() }
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct CountdownProps {
    /// Epoch milliseconds to count down to.
    pub target_ms: i64,
}

#[function_component(CountdownDisplay)]
pub fn countdown_display(props: &CountdownProps) -> Html {
    let countdown = use_countdown(props.target_ms);
    let heading = html! {
        <span class="countdown-label-hero">{ countdown_heading(countdown.is_live()) }</span>
    };

    if countdown.is_live() {
        return html! {
            <>
                { heading }
                <div class="countdown countdown-live">
                    <span class="countdown-value">{ "EN EMISIÓN" }</span>
                </div>
            </>
        };
    }

    let [days, hours, minutes, seconds] = countdown.time_left().padded();
    let units = [(days, "DÍAS"), (hours, "HORAS"), (minutes, "MIN"), (seconds, "SEG")];

    html! {
        <>
        { heading }
        <div class="countdown">
            { units.into_iter().enumerate().map(|(i, (value, label))| html! {
                <>
                    if i > 0 {
                        <span class="countdown-separator">{ ":" }</span>
                    }
                    <div class="countdown-item">
                        <span class="countdown-value">{ value }</span>
                        <span class="countdown-label">{ label }</span>
                    </div>
                </>
            }).collect::<Html>() }
        </div>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct CharacterCardProps {
    pub character: Character,
}

/// Dossier card; clicking flips between the masked and the real FDD.
#[function_component(CharacterCard)]
pub fn character_card(props: &CharacterCardProps) -> Html {
    let revealed = use_state(|| false);
    let onclick = {
        let revealed = revealed.clone();
        Callback::from(move |_: MouseEvent| revealed.set(!*revealed))
    };
    let c = &props.character;

    html! {
        <div class={classes!("character-card", revealed.then_some("revealed"))} {onclick}>
            <div class="card-front">
                <div class="card-id-photo"></div>
                <div class="card-info">
                    <span class="card-name">{ c.name.clone() }</span>
                    <span class="card-role">{ c.role.clone() }</span>
                    <span class="card-desc">{ c.description.clone() }</span>
                </div>
                <div class="card-fdd">
                    <span class="fdd-label">{ "FDD" }</span>
                    <span class="fdd-value">{ shown_fdd(*revealed, &c.fdd).to_string() }</span>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct EpisodeCardProps {
    pub episode: Episode,
}

#[function_component(EpisodeCard)]
pub fn episode_card(props: &EpisodeCardProps) -> Html {
    let ep = &props.episode;
    html! {
        <div class="episode-card">
            <div class="episode-number">
                <span class="ep-label">{ "EP" }</span>
                <span class="ep-num">{ format_episode_number(ep.number) }</span>
            </div>
            <div class="episode-content">
                <h3 class="episode-title">{ ep.title.clone() }</h3>
                <p class="episode-synopsis">{ ep.synopsis.clone() }</p>
            </div>
            <div class="episode-status">
                <span class="status-dot"></span>
                { "CLASIFICADO" }
            </div>
        </div>
    }
}

/// The "national death registry" terminal.
#[function_component(FddSimulator)]
pub fn fdd_simulator() -> Html {
    let sim = use_simulator();
    let stage = sim.state.stage;

    let status = if stage.is_processing() {
        "● PROCESANDO"
    } else {
        "○ EN ESPERA"
    };

    let content = match (stage, sim.state.fdd) {
        (Stage::Idle, _) => html! {
            <div class="stage-initial">
                <p class="system-text">{ "CIUDADANO: IDENTIFICACIÓN REQUERIDA" }</p>
                <p class="system-subtext">{ "Pulse para recibir su asignación FDD" }</p>
                <button class="btn-system" onclick={sim.on_start.clone()}>
                    { "INICIAR PROTOCOLO" }
                </button>
            </div>
        },
        (Stage::Scanning, _) => html! {
            <div class="stage-processing">
                <div class="scanner-line"></div>
                <p class="processing-text">{ "ESCANEANDO DATOS BIOMÉTRICOS..." }</p>
            </div>
        },
        (Stage::Calculating, _) => html! {
            <div class="stage-processing">
                <div class="loading-dots">
                    <span></span><span></span><span></span>
                </div>
                <p class="processing-text">{ "CALCULANDO FECHA DE DEFUNCIÓN..." }</p>
            </div>
        },
        (Stage::Done, Some(fdd)) => html! {
            <div class="stage-result">
                <p class="result-label">{ "SU FDD ASIGNADA ES:" }</p>
                <div class="fdd-date">
                    <GlitchText text={format_fdd_date(fdd)} />
                </div>
                <p class="result-warning">{ "ESTE DATO ES IRREVERSIBLE. CUMPLA CON SU DEBER." }</p>
                <button class="btn-reset" onclick={sim.on_reset.clone()}>
                    { "[REINICIAR SIMULACIÓN]" }
                </button>
            </div>
        },
        (Stage::Done, None) => html! {},
    };

    html! {
        <div class="fdd-simulator">
            <div class="simulator-screen">
                <div class="screen-header">
                    <span class="system-id">{ "SISTEMA NACIONAL DE DEFUNCIÓN" }</span>
                    <span class="screen-status">{ status }</span>
                </div>
                <div class="screen-content">
                    { content }
                </div>
                <div class="screen-footer">
                    <span>{ format!("REF: {}{}", REF_PREFIX, sim.reference) }</span>
                </div>
            </div>
        </div>
    }
}
