//! Error page for unknown routes and header parameters that fail validation.

use http::status::StatusCode;
use leptos::{
    html::{div, h1, p},
    prelude::*,
    svg::{path, svg},
};
use leptos_router::components::{A, AProps};
use thiserror::Error;

use crate::navigation::HeaderError;

const BACK_ARROW: &str = "M21 11H6.414l5.293-5.293-1.414-1.414L2.586 12l7.707 7.707 1.414-1.414L6.414 13H21z";

#[derive(Clone, Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
    #[error("Invalid header parameters: {0}")]
    InvalidHeader(#[from] HeaderError),
}

impl AppError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InvalidHeader(_) => StatusCode::BAD_REQUEST,
        }
    }
}

fn app_errors(errors: Errors) -> Vec<AppError> {
    errors
        .into_iter()
        .filter_map(|(_key, error)| error.downcast_ref::<AppError>().cloned())
        .collect()
}

fn back_link() -> impl IntoView {
    A(AProps::builder()
        .href("/")
        .children(ToChildren::to_children(|| {
            vec![
                svg()
                    .attr("width", "1.1em")
                    .attr("height", "1.1em")
                    .attr("viewBox", "0 0 24 24")
                    .attr("fill", "currentColor")
                    .attr("aria-hidden", "true")
                    .child(path().attr("d", BACK_ARROW))
                    .into_any(),
                "Back to the preview".into_any(),
            ]
        }))
        .build())
}

/// Lists every [`AppError`] found in `outside_errors` (SSR) or the `errors`
/// signal. On the server the response status follows the first one.
pub fn component(
    outside_errors: Option<Errors>,
    errors: Option<RwSignal<Errors>>,
) -> impl IntoView {
    let errors = app_errors(
        outside_errors
            .or_else(|| errors.map(|signal| signal.get_untracked()))
            .unwrap_or_default(),
    );

    #[cfg(feature = "ssr")]
    {
        if let (Some(response), Some(first)) =
            (use_context::<leptos_axum::ResponseOptions>(), errors.first())
        {
            response.set_status(first.status_code());
        }
    }

    let heading = if errors.len() > 1 { "Errors" } else { "Error" };
    let items = errors
        .into_iter()
        .map(|error| {
            p().class("text-xl tracking-widest text-gray-500 uppercase")
                .child(format!("{} | {error}", error.status_code().as_u16()))
        })
        .collect_view();

    div().class("grid place-content-center px-4 h-full antialiased").child((
        h1().class("mb-6 text-center").child(heading),
        div().class("flex flex-col gap-1 items-center").child(items),
        div()
            .class("flex gap-1 justify-center items-center mt-6 duration-200 hover:text-purple-700")
            .child(back_link()),
    ))
}
