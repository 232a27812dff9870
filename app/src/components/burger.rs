//! The three-bar menu control.

use leptos::{ev, html::div, prelude::*};

use crate::navigation::{BarPosition, BurgerTone, MenuController, MenuState};

fn bars(state: impl Fn() -> MenuState + Copy + Send + Sync + 'static, tone: BurgerTone) -> impl IntoView {
    let bar = move |position: BarPosition| div().class(move || state().bar_class(position, tone));
    (
        bar(BarPosition::Top),
        bar(BarPosition::Middle),
        bar(BarPosition::Bottom),
    )
}

/// Burger shown below the desktop breakpoint. Each click flips the menu.
pub fn component(menu: MenuController, tone: BurgerTone) -> impl IntoView {
    let state = menu.state();
    div()
        .class("block cursor-pointer md:hidden")
        .attr("role", "button")
        .attr("aria-label", "Toggle menu")
        .on(ev::click, move |_| menu.toggle())
        .child(bars(move || state.get(), tone))
}

/// Burger drawn as an X inside the open panel. Clicking it closes the menu.
pub fn close_component(menu: MenuController) -> impl IntoView {
    div()
        .class("block cursor-pointer md:hidden")
        .attr("role", "button")
        .attr("aria-label", "Close menu")
        .on(ev::click, move |_| menu.close())
        .child(bars(|| MenuState::Open, BurgerTone::White))
}
