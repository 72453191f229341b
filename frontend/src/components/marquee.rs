use yew::prelude::*;
use web_sys::MouseEvent;

pub fn play_state(paused: bool) -> &'static str {
    if paused { "paused" } else { "running" }
}

#[derive(Properties, PartialEq)]
pub struct MarqueeProps {
    pub items: Vec<AttrValue>,
}

#[function_component(Marquee)]
pub fn marquee(props: &MarqueeProps) -> Html {
    let paused = use_state(|| false);

    let onmouseenter = {
        let paused = paused.clone();
        Callback::from(move |_: MouseEvent| paused.set(true))
    };
    let onmouseleave = {
        let paused = paused.clone();
        Callback::from(move |_: MouseEvent| paused.set(false))
    };

    // Items are rendered twice so the -50% keyframe loops seamlessly
    let items = props.items.iter().chain(props.items.iter());

    html! {
        <div class="marquee-wrapper" {onmouseenter} {onmouseleave}>
            <div class="marquee-track" style={format!("animation-play-state: {}", play_state(*paused))}>
                { for items.map(|item| html! {
                    <span class="marquee-item">{item.clone()}</span>
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_pauses() {
        assert_eq!(play_state(true), "paused");
        assert_eq!(play_state(false), "running");
    }
}
