#[cfg(test)]
mod tests {
    use std::io::{self, Write};

    use crate::errors::RenderError;
    use crate::pipeline::view_state::ViewState;
    use crate::render::{
        escape, BoxFragment, Counter, CreationForm, ErrorMessage, Fragment, FragmentWriter,
        ItemList, Page, ViewStateField,
    };
    use crate::state::item::Item;

    /// Sink that accepts `budget` writes and then fails.
    struct FlakySink {
        budget: usize,
        data: Vec<u8>,
    }

    impl Write for FlakySink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.budget == 0 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"));
            }
            self.budget -= 1;
            self.data.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Writes its label with a single `write` call.
    struct Label(&'static str);

    impl Fragment for Label {
        fn render(&self, out: &mut dyn Write) -> Result<(), RenderError> {
            out.write_all(self.0.as_bytes())?;
            Ok(())
        }
    }

    fn render_to_string(fragment: &dyn Fragment) -> String {
        let mut out = Vec::new();
        fragment.render(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    // ============================================================
    // WRITER
    // ============================================================

    #[test]
    fn test_writes_fragments_in_order() {
        let fragments: Vec<BoxFragment> =
            vec![Box::new(Label("a")), Box::new(Label("b")), Box::new(Label("c"))];

        let mut writer = FragmentWriter::new(Vec::new());
        writer.write_all(&fragments).unwrap();

        assert_eq!(writer.into_inner(), b"abc");
    }

    #[test]
    fn test_empty_sequence_writes_nothing() {
        let mut writer = FragmentWriter::new(Vec::new());
        writer.write_all(&[]).unwrap();

        assert!(writer.into_inner().is_empty());
    }

    #[test]
    fn test_stops_at_first_failed_write() {
        let fragments: Vec<BoxFragment> =
            vec![Box::new(Label("a")), Box::new(Label("b")), Box::new(Label("c"))];

        let mut writer = FragmentWriter::new(FlakySink {
            budget: 1,
            data: Vec::new(),
        });
        let err = writer.write_all(&fragments).unwrap_err();

        assert!(matches!(err, RenderError::Io(_)));
        // Nothing after the failing fragment reached the sink
        assert_eq!(writer.into_inner().data, b"a");
    }

    // ============================================================
    // FRAGMENTS
    // ============================================================

    #[test]
    fn test_escape() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(
            escape(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_item_list_renders_each_item_with_delete_form() {
        let html = render_to_string(&ItemList::new(vec![
            Item::new("1", "foo"),
            Item::new("2", "<b>bar</b>"),
        ]));

        assert!(html.starts_with("<ul id=\"items\">"));
        assert!(html.contains("<span class=\"item-id\">1</span>"));
        assert!(html.contains("<span class=\"item-message\">foo</span>"));
        assert!(html.contains("&lt;b&gt;bar&lt;/b&gt;"));
        assert!(html.contains("<input type=\"hidden\" name=\"id\" value=\"2\">"));
        assert_eq!(html.matches("action=\"/api/delete\"").count(), 2);
        assert!(html.find(">1<").unwrap() < html.find(">2<").unwrap());
    }

    #[test]
    fn test_empty_item_list_has_placeholder() {
        let html = render_to_string(&ItemList::new(Vec::new()));
        assert!(html.contains("No items yet."));
    }

    #[test]
    fn test_creation_form_is_reset() {
        let html = render_to_string(&CreationForm::after_create("bar"));
        assert!(html.contains("id=\"creation-form\""));
        assert!(html.contains("name=\"id\" value=\"\""));
        assert!(html.contains("name=\"message\" value=\"\""));
        assert!(html.contains("Added: bar"));

        let fresh = render_to_string(&CreationForm::empty());
        assert!(!fresh.contains("Added:"));
    }

    #[test]
    fn test_counter_and_error_regions() {
        assert_eq!(
            render_to_string(&Counter::new(7)),
            "<span id=\"counter\">7</span>\n"
        );
        assert_eq!(
            render_to_string(&ErrorMessage::new("duplicate ID")),
            "<div id=\"error\" role=\"alert\">duplicate ID</div>\n"
        );
    }

    #[test]
    fn test_view_state_field_carries_escaped_token() {
        let html = render_to_string(&ViewStateField::new(ViewState { request_count: 2 }));
        assert_eq!(
            html,
            "<input type=\"hidden\" id=\"view-state\" name=\"__view_state\" \
             value=\"{&quot;RequestCount&quot;:2}\">\n"
        );
    }

    #[test]
    fn test_page_contains_every_region() {
        let html = render_to_string(&Page::new(vec![Item::new("1", "foo")], ""));

        for region in [
            "id=\"counter\"",
            "id=\"error\"",
            "id=\"view-state\"",
            "id=\"items\"",
            "id=\"creation-form\"",
            "action=\"/api/increment\"",
            "action=\"/api/error\"",
            "/static/app.js",
        ] {
            assert!(html.contains(region), "missing {}", region);
        }
        assert!(html.contains("<span id=\"counter\">0</span>"));
        assert!(html.contains("name=\"__view_state\" value=\"\""));
    }

    #[test]
    fn test_every_page_form_is_submitted_with_the_view_state() {
        let html = render_to_string(&Page::new(
            vec![Item::new("1", "foo"), Item::new("2", "bar")],
            "{\"RequestCount\":3}",
        ));

        // create + two deletes + increment + error
        let forms = html.matches("<form ").count();
        assert_eq!(forms, 5);
        assert_eq!(html.matches("data-fragments").count(), forms);

        // One token on the page, which the script copies into each submission
        assert_eq!(html.matches("name=\"__view_state\"").count(), 1);
        assert!(html.contains("value=\"{&quot;RequestCount&quot;:3}\""));
    }
}
