use leptos::{ev::MouseEvent, html, prelude::*};

use crate::motion::{tilt_style, Tilt};

/// Container that leans towards the pointer and settles back when it leaves.
#[component]
pub fn TiltCard(
    tilt: Tilt,
    #[prop(into)] class: String,
    children: Children,
) -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();
    let (transform, set_transform) = signal(Tilt::rest());

    let on_move = move |ev: MouseEvent| {
        let el = if let Some(el) = card_ref.get_untracked() {
            el
        } else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let dx = ev.client_x() as f64 - (rect.left() + rect.width() / 2.0);
        let dy = ev.client_y() as f64 - (rect.top() + rect.height() / 2.0);
        set_transform.set(tilt.transform(dx, dy));
    };

    view! {
        <div
            node_ref=card_ref
            class=class
            style=move || transform.with(|t| tilt_style(t))
            on:mousemove=on_move
            on:mouseleave=move |_| set_transform.set(Tilt::rest())
        >
            {children()}
        </div>
    }
}
