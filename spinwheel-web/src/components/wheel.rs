//! The wheel itself: segment face, labels, spin button and result card.
//!
//! The engine decides the winner and target rotation up front. The face is
//! rotated with a CSS transition and the `transitionend` event is the only
//! thing that commits the result to history.
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use spinwheel_game::constants::{LABEL_RADIUS_PX, SPIN_DURATION_SECS};
use spinwheel_game::{
    Easing, LabelAnchor, WheelConfiguration, WheelEngine, WheelStatus, conic_gradient,
    label_anchor,
};
use yew::prelude::*;

use crate::components::result_card::ResultCard;
use crate::components::setup_notice::SetupNotice;
use crate::dom::{next_entropy, now_utc};
use crate::i18n::t;
use crate::storage::history_log;

#[derive(Properties, PartialEq, Clone)]
pub struct SpinWheelProps {
    /// Read once when the wheel mounts.
    pub config: WheelConfiguration,
    #[prop_or_default]
    pub on_edit: Callback<()>,
    /// Fixed RNG seed; clock entropy is used when absent.
    #[prop_or_default]
    pub seed: Option<u64>,
    /// Active language; a change re-renders the translated labels.
    #[prop_or_default]
    pub lang: AttrValue,
}

/// Inline style for the rotating face.
#[must_use]
pub fn face_style(gradient: &str, rotation: f64) -> String {
    format!(
        "background: conic-gradient({gradient}); transform: rotate({rotation}deg); \
         transition: transform {SPIN_DURATION_SECS}s {};",
        Easing::EaseOut.css()
    )
}

/// Inline style placing one label around the centre.
#[must_use]
pub fn label_style(anchor: &LabelAnchor) -> String {
    format!(
        "left: calc(50% + {:.2}px); top: calc(50% + {:.2}px); \
         transform: translate(-50%, -50%) rotate({:.2}deg);",
        anchor.x, anchor.y, anchor.rotate_deg
    )
}

#[function_component(SpinWheel)]
pub fn spin_wheel(props: &SpinWheelProps) -> Html {
    let engine = {
        let config = props.config.clone();
        use_mut_ref(move || WheelEngine::new(config))
    };
    let rng = {
        let seed = props.seed;
        use_mut_ref(move || ChaCha20Rng::seed_from_u64(seed.unwrap_or_else(next_entropy)))
    };
    let redraw = use_force_update();

    let on_spin = {
        let engine = engine.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: MouseEvent| {
            let planned = engine.borrow_mut().spin(&mut *rng.borrow_mut());
            if planned.is_some() {
                redraw.force_update();
            }
        })
    };

    let on_transition_end = {
        let engine = engine.clone();
        Callback::from(move |event: TransitionEvent| {
            if event.property_name() != "transform" {
                return;
            }
            let outcome = engine
                .borrow_mut()
                .on_animation_complete_at(&history_log(), now_utc());
            if let Some(outcome) = outcome {
                log::debug!("spin resolved: {}", outcome.name);
                redraw.force_update();
            }
        })
    };

    let engine = engine.borrow();
    if engine.status() == WheelStatus::NotSpinnable {
        return html! { <SetupNotice on_edit={props.on_edit.clone()} /> };
    }

    let spinning = engine.is_spinning();
    let face = face_style(&conic_gradient(engine.segments()), engine.rotation());
    let labels = engine
        .segments()
        .iter()
        .map(|seg| {
            let name = engine
                .config()
                .get(seg.index)
                .map(|e| e.name.clone())
                .unwrap_or_default();
            let style = label_style(&label_anchor(seg, LABEL_RADIUS_PX));
            html! {
                <div key={format!("{name}-{}", seg.index)} class="wheel-label" {style}>
                    { name }
                </div>
            }
        })
        .collect::<Html>();
    let result = engine
        .last_result()
        .filter(|name| !name.is_empty())
        .map(|name| AttrValue::from(name.to_string()));
    let button_label = if spinning {
        t("wheel.spinning")
    } else {
        t("wheel.spin")
    };

    html! {
        <div class="spin-wheel" lang={props.lang.clone()}>
            <div class="wheel-pointer" aria-hidden="true"></div>
            <div
                class={classes!("wheel-face", spinning.then_some("is-spinning"))}
                style={face}
                onclick={on_spin.clone()}
                ontransitionend={on_transition_end}
            >
                { labels }
            </div>
            <div class="wheel-controls">
                <button
                    type="button"
                    class="spin-button"
                    onclick={on_spin}
                    disabled={spinning}
                >
                    <span
                        class={classes!("spin-icon", spinning.then_some("animate-spin"))}
                        aria-hidden="true"
                    >
                        { "↻" }
                    </span>
                    <span>{ button_label }</span>
                </button>
                <ResultCard {result} />
            </div>
        </div>
    }
}
