use leptos::prelude::*;

use crate::components::{burger, icons};
use crate::navigation::{BurgerTone, HeaderConfig, LogoSet, MenuController};

/// Full-page navigation to the login service. The header is torn down as the
/// browser leaves the page.
fn navigate_to(url: &str) {
    if let Err(err) = window().location().set_href(url) {
        tracing::error!(?err, url, "login navigation failed");
    }
}

fn logo(logos: LogoSet, tool_label: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center m-3">
            <a href=logos.home_href>
                <img src=logos.desktop_logo alt="Designs.ai" class="hidden md:block"/>
                <img src=logos.mobile_logo alt="Designs.ai" width="40" class="block md:hidden"/>
            </a>
            <a href=logos.tool_href class="flex relative items-center mx-2.5 min-[425px]:ml-5">
                <span class="mr-2.5 h-8 border-l-2 min-[425px]:mr-5 border-[#333]"></span>
                <img
                    src=logos.tool_logo
                    alt=tool_label
                    class="w-auto h-auto max-w-full max-h-[18px] min-[425px]:max-h-6"
                />
            </a>
        </div>
    }
}

/// Either the visitor's name or a button that leaves for the login page.
fn auth_control(display_name: Option<String>, login_url: String) -> impl IntoView {
    match display_name {
        Some(name) => view! { <span>{name}</span> }.into_any(),
        None => view! {
            <button class="uppercase" on:click=move |_| navigate_to(&login_url)>
                "Login"
            </button>
        }
        .into_any(),
    }
}

/// Renders the site header for one validated configuration.
///
/// The header owns its menu state. `on_scroll_lock` receives `true` when the
/// mobile panel opens and `false` when it closes; applying that to the
/// document is left to the host page.
#[must_use]
pub fn component(config: HeaderConfig, on_scroll_lock: Option<Callback<bool>>) -> impl IntoView {
    let menu = MenuController::new(on_scroll_lock);
    let state = menu.state();
    let logos = config.logos();
    let links = config.auth_links();
    let display_name = config.auth().display_name().map(str::to_owned);

    view! {
        <header class="flex fixed top-0 justify-between w-full bg-white z-[300]">
            {logo(logos, config.tool().slug())}
            <div class="flex justify-center items-center mx-3">
                {burger::component(menu.clone(), BurgerTone::Purple)}
                <div class="hidden gap-6 items-center m-3 uppercase md:flex">
                    <div>"Products"</div>
                    {auth_control(display_name.clone(), links.login.clone())}
                </div>
            </div>
            <div class=move || state.get().panel_class()>
                <div class="fixed right-[30px] top-[25px] z-[1003]">
                    {burger::close_component(menu)}
                </div>
                <div class="fixed w-full h-[65px] z-[1002] bg-gradient-to-b from-[#333] from-15% to-transparent"></div>
                <div class="flex flex-col gap-4 px-6 pt-[65px] text-white">
                    <div>{auth_control(display_name, links.login)}</div>
                    {links.logout.map(|href| view! {
                        <div>
                            <a href=href>"Logout"</a>
                        </div>
                    })}
                    {icons::component()}
                </div>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{AuthContext, Environment, Tool};

    fn config(auth: AuthContext) -> HeaderConfig {
        HeaderConfig::new(Environment::Production, Tool::Fonts, auth)
    }

    fn render(auth: AuthContext) -> String {
        Owner::new().with(|| component(config(auth), None).to_html())
    }

    #[test]
    fn renders_login_button_for_anonymous_visitor() {
        let html = render(AuthContext::default());
        assert!(html.contains("Login"));
        assert!(!html.contains("Logout"));
        assert!(html.contains("https://api.designs.ai/utilities/images/fonts.png"));
        assert!(html.contains("opacity-0 invisible"));
    }

    #[test]
    fn renders_name_and_logout_for_signed_in_visitor() {
        let html = render(AuthContext::Authenticated {
            name: "Ada Lovelace".to_owned(),
            client: "abc".to_owned(),
            redirect: "https://designs.ai/fonts".to_owned(),
        });
        assert!(html.contains("Ada Lovelace"));
        assert!(html.contains("https://designs.ai/user/logout?client=abc"));
        assert!(html.contains("redirect=https://designs.ai/fonts"));
        assert!(!html.contains(">Login<"));
    }

    #[test]
    fn renders_every_social_link_in_new_context() {
        let html = render(AuthContext::default());
        for link in crate::navigation::SOCIAL_LINKS {
            assert!(html.contains(link.url), "{}", link.url);
        }
        assert_eq!(html.matches("noopener noreferrer").count(), 5);
        assert_eq!(html.matches("<path").count(), 5);
    }
}
