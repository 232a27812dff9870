//! Mobile menu state.
//!
//! [`MenuState`] is the whole state machine: two states, one flip and one
//! forced close. Everything the page shows for the menu (panel visibility,
//! scroll lock, burger bar transforms) is derived from a single value, so
//! the readers can never disagree.

use leptos::prelude::*;

/// Open/closed state of the slide-in mobile panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// What the rest of the page observes for one [`MenuState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuEffects {
    pub panel_visible: bool,
    pub scroll_locked: bool,
}

/// One of the three burger bars, top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarPosition {
    Top,
    Middle,
    Bottom,
}

impl BarPosition {
    pub const ALL: [Self; 3] = [Self::Top, Self::Middle, Self::Bottom];
}

/// Burger bar colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BurgerTone {
    #[default]
    Purple,
    White,
}

impl BurgerTone {
    const fn class(self) -> &'static str {
        match self {
            Self::Purple => "bg-purple-700",
            Self::White => "bg-white",
        }
    }
}

const PANEL_BASE: &str = "block md:hidden fixed top-0 left-0 sm:left-1/2 z-[1001] w-full sm:w-1/2 h-screen overflow-auto bg-[#333] transition-all duration-500";
const BAR_BASE: &str = "w-[30px] h-1 my-1.5 transition-all duration-[400ms]";

impl MenuState {
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    #[must_use]
    pub const fn close(self) -> Self {
        Self::Closed
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    #[must_use]
    pub const fn effects(self) -> MenuEffects {
        MenuEffects {
            panel_visible: self.is_open(),
            scroll_locked: self.is_open(),
        }
    }

    /// Classes of the slide-in panel.
    #[must_use]
    pub fn panel_class(self) -> String {
        let visibility = if self.effects().panel_visible {
            "opacity-100 visible"
        } else {
            "opacity-0 invisible"
        };
        format!("{PANEL_BASE} {visibility}")
    }

    /// Classes of one burger bar. When open the outer bars rotate into an X
    /// and the middle one fades out.
    #[must_use]
    pub fn bar_class(self, position: BarPosition, tone: BurgerTone) -> String {
        let transform = match (self, position) {
            (Self::Closed, _) => None,
            (Self::Open, BarPosition::Top) => Some("[transform:rotate(-45deg)_translate(-6px,6px)]"),
            (Self::Open, BarPosition::Middle) => Some("opacity-0"),
            (Self::Open, BarPosition::Bottom) => Some("[transform:rotate(45deg)_translate(-8px,-8px)]"),
        };
        match transform {
            Some(transform) => format!("{BAR_BASE} {} {transform}", tone.class()),
            None => format!("{BAR_BASE} {}", tone.class()),
        }
    }
}

/// Reactive owner of the menu state for one header instance.
///
/// The controller is the only writer. After every transition it reports the
/// new scroll-lock value to the host, which applies it to the document.
#[derive(Clone)]
pub struct MenuController {
    state: RwSignal<MenuState>,
    on_scroll_lock: Option<Callback<bool>>,
}

impl MenuController {
    #[must_use]
    pub fn new(on_scroll_lock: Option<Callback<bool>>) -> Self {
        Self {
            state: RwSignal::new(MenuState::Closed),
            on_scroll_lock,
        }
    }

    #[must_use]
    pub fn state(&self) -> ReadSignal<MenuState> {
        self.state.read_only()
    }

    /// Current effects without subscribing.
    #[must_use]
    pub fn snapshot(&self) -> MenuEffects {
        self.state.get_untracked().effects()
    }

    pub fn toggle(&self) {
        self.transition(MenuState::toggle);
    }

    pub fn close(&self) {
        self.transition(MenuState::close);
    }

    fn transition(&self, step: fn(MenuState) -> MenuState) {
        let current = self.state.get_untracked();
        let next = step(current);
        if next == current {
            return;
        }
        self.state.set(next);
        tracing::debug!(from = ?current, to = ?next, "mobile menu transition");
        if let Some(on_scroll_lock) = &self.on_scroll_lock {
            on_scroll_lock.run(next.effects().scroll_locked);
        }
    }
}
