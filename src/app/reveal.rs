use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// Flips to true the first time the section scrolls into view and stays there.
pub fn use_reveal(target: NodeRef<html::Section>) -> Signal<bool> {
    let visible = use_element_visibility(target);
    let (revealed, set_revealed) = signal(false);
    Effect::new(move |_| {
        if visible.get() && !revealed.get_untracked() {
            set_revealed.set(true);
        }
    });
    revealed.into()
}
