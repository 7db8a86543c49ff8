use std::io::Write;

use crate::errors::RenderError;
use crate::pipeline::view_state::{self, ViewState, VIEW_STATE_FIELD};
use crate::render::{escape, Fragment};
use crate::state::item::Item;

//
// ─────────────────────────────────────────────────────────────
//  Full page (GET /)
// ─────────────────────────────────────────────────────────────
//

/// The whole document. Every region a fragment can replace is present with
/// its initial content.
pub struct Page {
    pub items: Vec<Item>,
    pub view_state_token: String,
}

impl Page {
    pub fn new(items: Vec<Item>, view_state_token: impl Into<String>) -> Self {
        Self {
            items,
            view_state_token: view_state_token.into(),
        }
    }
}

impl Fragment for Page {
    fn render(&self, out: &mut dyn Write) -> Result<(), RenderError> {
        out.write_all(
            b"<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
              <meta charset=\"utf-8\">\n\
              <title>Items</title>\n\
              <script src=\"/static/app.js\" defer></script>\n\
              </head>\n<body>\n<main>\n",
        )?;

        out.write_all(b"<p>Requests this session: ")?;
        Counter::new(0).render(out)?;
        out.write_all(b"</p>\n")?;

        ErrorMessage::empty().render(out)?;
        view_state_input(out, &self.view_state_token)?;

        out.write_all(b"<h1>Items</h1>\n")?;
        ItemList::new(self.items.clone()).render(out)?;
        CreationForm::empty().render(out)?;

        out.write_all(
            b"<section>\n\
              <form method=\"post\" action=\"/api/increment\" data-fragments>\
              <button type=\"submit\">Increment</button></form>\n\
              <form method=\"post\" action=\"/api/error\" data-fragments>\
              <button type=\"submit\">Trigger error</button></form>\n\
              </section>\n",
        )?;

        out.write_all(b"</main>\n</body>\n</html>\n")?;
        Ok(())
    }
}

//
// ─────────────────────────────────────────────────────────────
//  Item list
// ─────────────────────────────────────────────────────────────
//

/// The item listing, with a delete form per item.
///
/// The delete forms carry no view-state input of their own. Every form is
/// marked `data-fragments`, and `static/app.js` adds the current value of the
/// page's single `#view-state` input to each submission, so the token is never
/// stale when fragments are swapped independently.
pub struct ItemList {
    pub items: Vec<Item>,
}

impl ItemList {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }
}

impl Fragment for ItemList {
    fn render(&self, out: &mut dyn Write) -> Result<(), RenderError> {
        out.write_all(b"<ul id=\"items\">\n")?;

        if self.items.is_empty() {
            out.write_all(b"<li class=\"empty\">No items yet.</li>\n")?;
        }

        for item in &self.items {
            let id = escape(&item.id);
            writeln!(
                out,
                "<li><span class=\"item-id\">{id}</span>: \
                 <span class=\"item-message\">{message}</span> \
                 <form method=\"post\" action=\"/api/delete\" data-fragments>\
                 <input type=\"hidden\" name=\"id\" value=\"{id}\">\
                 <button type=\"submit\">Delete</button></form></li>",
                message = escape(&item.message),
            )?;
        }

        out.write_all(b"</ul>\n")?;
        Ok(())
    }
}

//
// ─────────────────────────────────────────────────────────────
//  Creation form
// ─────────────────────────────────────────────────────────────
//

/// The form for adding an item, always rendered with empty inputs.
///
/// Like the delete forms in [`ItemList`], it relies on the page script to add
/// the `#view-state` token when it is submitted.
pub struct CreationForm {
    /// Message of the item just created, if this is a reset after a create.
    pub last_message: Option<String>,
}

impl CreationForm {
    pub fn empty() -> Self {
        Self { last_message: None }
    }

    pub fn after_create(message: impl Into<String>) -> Self {
        Self {
            last_message: Some(message.into()),
        }
    }
}

impl Fragment for CreationForm {
    fn render(&self, out: &mut dyn Write) -> Result<(), RenderError> {
        out.write_all(
            b"<form id=\"creation-form\" method=\"post\" action=\"/api/create\" data-fragments>\n\
              <label>ID <input type=\"text\" name=\"id\" value=\"\"></label>\n\
              <label>Message <input type=\"text\" name=\"message\" value=\"\"></label>\n\
              <button type=\"submit\">Add</button>\n",
        )?;

        if let Some(message) = &self.last_message {
            writeln!(
                out,
                "<p class=\"last-created\">Added: {}</p>",
                escape(message)
            )?;
        }

        out.write_all(b"</form>\n")?;
        Ok(())
    }
}

//
// ─────────────────────────────────────────────────────────────
//  Pipeline fragments
// ─────────────────────────────────────────────────────────────
//

pub struct Counter {
    pub count: u64,
}

impl Counter {
    pub fn new(count: u64) -> Self {
        Self { count }
    }
}

impl Fragment for Counter {
    fn render(&self, out: &mut dyn Write) -> Result<(), RenderError> {
        writeln!(out, "<span id=\"counter\">{}</span>", self.count)?;
        Ok(())
    }
}

/// The error region. Rendered empty after a successful request so a
/// previous error is cleared.
pub struct ErrorMessage {
    pub message: String,
}

impl ErrorMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn empty() -> Self {
        Self::new("")
    }
}

impl Fragment for ErrorMessage {
    fn render(&self, out: &mut dyn Write) -> Result<(), RenderError> {
        writeln!(
            out,
            "<div id=\"error\" role=\"alert\">{}</div>",
            escape(&self.message)
        )?;
        Ok(())
    }
}

/// Hidden input carrying the encoded view state back to the client.
///
/// Encoding happens at render time, so an encode failure surfaces as a
/// write failure of this fragment.
pub struct ViewStateField {
    pub state: ViewState,
}

impl ViewStateField {
    pub fn new(state: ViewState) -> Self {
        Self { state }
    }
}

impl Fragment for ViewStateField {
    fn render(&self, out: &mut dyn Write) -> Result<(), RenderError> {
        let token = view_state::encode(&self.state)?;
        view_state_input(out, &token)
    }
}

fn view_state_input(out: &mut dyn Write, token: &str) -> Result<(), RenderError> {
    writeln!(
        out,
        "<input type=\"hidden\" id=\"view-state\" name=\"{}\" value=\"{}\">",
        VIEW_STATE_FIELD,
        escape(token)
    )?;
    Ok(())
}
