use crate::pipeline::view_state::{self, VIEW_STATE_FIELD};
use crate::pipeline::{Next, Outcome, RequestContext, Stage};
use crate::render::{BoxFragment, Counter, ErrorMessage, ViewStateField};

/// Turns a handler failure into the error fragment.
///
/// The failure is consumed here, so the request still completes with
/// status 200. On success an empty error fragment clears any earlier message.
pub struct ErrorFragments;

impl Stage for ErrorFragments {
    fn run(&self, ctx: &mut RequestContext, next: Next<'_>) -> Outcome {
        let mut outcome = next.run(ctx);

        let message = match outcome.failure.take() {
            Some(err) => {
                tracing::warn!("handler failed: {}", err);
                err.to_string()
            }
            None => String::new(),
        };

        outcome.fragments.push(Box::new(ErrorMessage::new(message)));
        outcome
    }
}

/// Decodes the submitted view state, counts the request, and wraps the
/// handler's fragments between a counter fragment and the re-encoded state.
pub struct ViewStateFragments;

impl Stage for ViewStateFragments {
    fn run(&self, ctx: &mut RequestContext, next: Next<'_>) -> Outcome {
        ctx.view_state = view_state::decode(ctx.form.value(VIEW_STATE_FIELD));
        let count = ctx.view_state.record_request();

        let mut fragments: Vec<BoxFragment> = vec![Box::new(Counter::new(count))];

        let inner = next.run(ctx);
        fragments.extend(inner.fragments);
        fragments.push(Box::new(ViewStateField::new(ctx.view_state)));

        Outcome {
            fragments,
            failure: inner.failure,
        }
    }
}
