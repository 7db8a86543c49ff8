//! Request Pipeline
//!
//! Every `/api` route runs its handler through an ordered chain of stages.
//! Each stage may contribute fragments before and after delegating to the
//! next one; the driver then writes the assembled list to the response.
//!
//! ## Stage order (outermost first)
//! 1. [`stages::ErrorFragments`]: handler failures become the error fragment.
//! 2. [`stages::ViewStateFragments`]: counter fragment, handler output,
//!    re-encoded view state.
//!
//! The `text/html` content type is forced by a tower-http layer in front of
//! the router (see `app.rs`), not by a stage.

pub mod form;
pub mod stages;
pub mod view_state;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::errors::{AppError, RenderError};
use crate::render::{BoxFragment, FragmentWriter};
use self::view_state::ViewState;

pub use form::FormFields;

/// What a single request carries through the stages.
#[derive(Debug, Default)]
pub struct RequestContext {
    pub form: FormFields,
    pub view_state: ViewState,
}

impl RequestContext {
    pub fn new(form: FormFields) -> Self {
        Self {
            form,
            view_state: ViewState::default(),
        }
    }
}

/// Result of a route handler: the fragments it wants in the response.
pub type HandlerResult = Result<Vec<BoxFragment>, AppError>;

/// Route handler as seen by the stages.
pub type Handler<'a> = dyn Fn(&mut RequestContext) -> HandlerResult + 'a;

/// Fragments assembled so far plus a failure no stage has handled yet.
///
/// A failure does not discard fragments: stages wrapping a failed handler
/// still append theirs.
#[derive(Default)]
pub struct Outcome {
    pub fragments: Vec<BoxFragment>,
    pub failure: Option<AppError>,
}

impl From<HandlerResult> for Outcome {
    fn from(result: HandlerResult) -> Self {
        match result {
            Ok(fragments) => Self {
                fragments,
                failure: None,
            },
            Err(err) => Self {
                fragments: Vec::new(),
                failure: Some(err),
            },
        }
    }
}

/// One interceptor in the chain.
pub trait Stage: Send + Sync {
    fn run(&self, ctx: &mut RequestContext, next: Next<'_>) -> Outcome;
}

/// The rest of the chain below a stage, ending in the handler.
pub struct Next<'a> {
    stages: &'a [Box<dyn Stage>],
    handler: &'a Handler<'a>,
}

impl<'a> Next<'a> {
    pub fn run(self, ctx: &mut RequestContext) -> Outcome {
        match self.stages.split_first() {
            Some((stage, rest)) => stage.run(
                ctx,
                Next {
                    stages: rest,
                    handler: self.handler,
                },
            ),
            None => Outcome::from((self.handler)(ctx)),
        }
    }
}

/// Fully rendered response body.
pub struct Rendered {
    pub body: Vec<u8>,
    /// Failure that reached the driver without being turned into a fragment.
    pub failure: Option<AppError>,
}

pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    /// The chain used by every `/api` route.
    pub fn api() -> Self {
        Self::new(vec![
            Box::new(stages::ErrorFragments),
            Box::new(stages::ViewStateFragments),
        ])
    }

    /// Run `handler` through every stage and collect the fragments.
    pub fn execute(&self, ctx: &mut RequestContext, handler: &Handler<'_>) -> Outcome {
        Next {
            stages: self.stages.as_slice(),
            handler,
        }
        .run(ctx)
    }

    /// Run the chain and write the assembled fragments, in order, into a body.
    pub fn render<F>(&self, form: FormFields, handler: F) -> Result<Rendered, RenderError>
    where
        F: Fn(&mut RequestContext) -> HandlerResult,
    {
        let mut ctx = RequestContext::new(form);
        let outcome = self.execute(&mut ctx, &handler);

        let mut writer = FragmentWriter::new(Vec::new());
        writer.write_all(&outcome.fragments)?;

        Ok(Rendered {
            body: writer.into_inner(),
            failure: outcome.failure,
        })
    }

    /// Run the chain and turn the result into an HTTP response.
    ///
    /// Handler failures normally arrive here already rendered, so the status
    /// is 200. A fragment that cannot be written aborts the body and the
    /// request is answered with a bare 500.
    pub fn respond<F>(&self, form: FormFields, handler: F) -> Response
    where
        F: Fn(&mut RequestContext) -> HandlerResult,
    {
        match self.render(form, handler) {
            Ok(Rendered {
                body,
                failure: None,
            }) => (StatusCode::OK, body).into_response(),
            Ok(Rendered {
                body,
                failure: Some(err),
            }) => {
                tracing::error!("unhandled handler failure: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
            Err(err) => {
                tracing::error!("aborting response: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
