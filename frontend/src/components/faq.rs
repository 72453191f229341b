use yew::prelude::*;
use yew_hooks::prelude::*;
use web_sys::{Element, MouseEvent};
use log::debug;

use crate::accordion::GroupState;

#[derive(Clone, PartialEq)]
pub struct FaqEntry {
    pub question: AttrValue,
    pub answer: AttrValue,
    pub open: bool,
}

#[derive(Properties, PartialEq)]
pub struct FaqAccordionProps {
    pub entries: Vec<FaqEntry>,
}

fn content_height(node: &NodeRef) -> u32 {
    node.cast::<Element>()
        .map(|el| u32::try_from(el.scroll_height()).unwrap_or(0))
        .unwrap_or(0)
}

#[function_component(FaqAccordion)]
pub fn faq_accordion(props: &FaqAccordionProps) -> Html {
    let group = {
        let markers: Vec<bool> = props.entries.iter().map(|entry| entry.open).collect();
        use_state(move || GroupState::new(markers))
    };
    let content_refs = {
        let count = props.entries.len();
        use_state(move || (0..count).map(|_| NodeRef::default()).collect::<Vec<_>>())
    };

    // Panels open in the markup get their real height up front, no transition
    {
        let group = group.clone();
        let content_refs = content_refs.clone();
        use_mount(move || {
            let mut measured = (*group).clone();
            for (index, node) in content_refs.iter().enumerate() {
                if measured.is_open(index) {
                    let height = content_height(node);
                    debug!("faq panel {} open on load, {}px", index, height);
                    measured = measured.measure(index, height);
                }
            }
            group.set(measured);
        });
    }

    let views = group.project();

    html! {
        <div class="faq-list">
            { for props.entries.iter().zip(views).enumerate().map(|(index, (entry, view))| {
                let node = content_refs.get(index).cloned().unwrap_or_default();
                let onclick = {
                    let group = group.clone();
                    let node = node.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        group.set(group.activate(index, content_height(&node)));
                    })
                };
                let content_id = format!("faq-content-{}", index);

                html! {
                    <div class={classes!("faq-item", view.expanded.then(|| "open"))}>
                        <button
                            class="faq-header"
                            aria-expanded={view.aria_expanded()}
                            aria-controls={content_id.clone()}
                            onclick={onclick}
                        >
                            <span class="faq-question">{entry.question.clone()}</span>
                            <span class="faq-icon">{if view.expanded { "−" } else { "+" }}</span>
                        </button>
                        <div id={content_id} class="faq-content" style={view.style()} ref={node}>
                            <p>{entry.answer.clone()}</p>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}
