use std::fmt::Write as _;

use crate::event::{Attribute, Event};
use crate::normalize::{PARAGRAPH_BREAK, normalize};
use crate::refs;

/// Translates tokenizer events into Slack mrkdwn fragments.
///
/// The renderer owns an append-only buffer for the duration of one
/// conversion; handlers only ever push onto it. [`MrkdwnRenderer::finish`]
/// hands the buffer to [`normalize`] exactly once, which produces the final
/// string.
///
/// Tag names are matched lower-case, as the HTML tokenizer delivers them.
/// List context is tracked with one flag per list type rather than a stack,
/// so only a single active list level per type is supported: a `<ul>` nested
/// inside another `<ul>` clears list mode when the inner list closes.
pub struct MrkdwnRenderer {
    suppress_text: bool,
    in_unordered_list: bool,
    in_ordered_list: bool,
    ordered_counter: u32,
    out: String,
}

impl MrkdwnRenderer {
    pub fn new() -> Self {
        Self {
            suppress_text: false,
            in_unordered_list: false,
            in_ordered_list: false,
            ordered_counter: 0,
            out: String::new(),
        }
    }

    /// Consumes an event stream and returns the normalized output.
    pub fn render<'a, I>(mut self, events: I) -> String
    where
        I: IntoIterator<Item = Event<'a>>,
    {
        for event in events {
            self.handle_event(event);
        }
        self.finish()
    }

    /// Handles a single event.
    pub fn handle_event(&mut self, event: Event<'_>) {
        match event {
            Event::StartTag { name, attrs } => self.handle_start_tag(&name, &attrs),
            Event::EndTag { name } => self.handle_end_tag(&name),
            Event::Text(text) => {
                if !self.suppress_text {
                    self.out.push_str(&text);
                }
            }
            Event::CharacterReference(raw) => {
                if self.suppress_text {
                    return;
                }
                match refs::decode_numeric(&raw) {
                    Some(decoded) => self.out.push(decoded),
                    // Malformed references ride through as their source text.
                    None => {
                        let _ = write!(self.out, "&#{raw};");
                    }
                }
            }
            Event::EntityReference(name) => {
                if self.suppress_text {
                    return;
                }
                match refs::decode_named(&name) {
                    Some(decoded) => self.out.push(decoded),
                    None => {
                        let _ = write!(self.out, "&{name};");
                    }
                }
            }
            Event::Comment(_) | Event::Declaration(_) => {}
        }
    }

    /// Normalizes the accumulated buffer into the final output.
    pub fn finish(self) -> String {
        normalize(&self.out)
    }

    fn handle_start_tag(&mut self, name: &str, attrs: &[Attribute<'_>]) {
        match name {
            "br" | "p" => self.out.push_str(PARAGRAPH_BREAK),
            "b" | "strong" => self.out.push_str(" *"),
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => self.out.push_str(" *"),
            "i" | "em" => self.out.push_str(" _"),
            "code" => self.out.push('`'),
            "a" => {
                self.out.push('<');
                if let Some(href) = attrs.iter().find(|attr| attr.name == "href") {
                    self.out.push_str(&href.value);
                    self.out.push('|');
                }
            }
            "style" | "script" => self.suppress_text = true,
            "ul" => self.in_unordered_list = true,
            "ol" => {
                self.ordered_counter = 1;
                self.in_ordered_list = true;
            }
            "li" => {
                // Independent checks: list modes are tracked per type and an
                // item inside both emits both markers.
                if self.in_unordered_list {
                    self.out.push_str("• ");
                }
                if self.in_ordered_list {
                    let _ = write!(self.out, "{}. ", self.ordered_counter);
                    self.ordered_counter += 1;
                }
            }
            _ => {}
        }
    }

    fn handle_end_tag(&mut self, name: &str) {
        match name {
            "b" | "strong" => self.out.push_str("* "),
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                self.out.push_str("* ");
                self.out.push_str(PARAGRAPH_BREAK);
            }
            "i" | "em" => self.out.push_str("_ "),
            "a" => self.out.push('>'),
            "code" => self.out.push('`'),
            "style" | "script" => self.suppress_text = false,
            "ul" => self.in_unordered_list = false,
            "ol" => self.in_ordered_list = false,
            "li" => {
                if self.in_unordered_list {
                    self.out.push_str(PARAGRAPH_BREAK);
                }
                if self.in_ordered_list {
                    self.out.push_str(PARAGRAPH_BREAK);
                }
            }
            _ => {}
        }
    }
}

impl Default for MrkdwnRenderer {
    fn default() -> Self {
        Self::new()
    }
}
