//! Glue between the html5ever tokenizer and the renderer.

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};

use crate::event::{Attribute, Event};
use crate::renderer::MrkdwnRenderer;

/// Forwards html5ever tokens to a [`MrkdwnRenderer`] as [`Event`]s.
pub struct EventSink {
    renderer: MrkdwnRenderer,
}

impl EventSink {
    pub fn new(renderer: MrkdwnRenderer) -> Self {
        Self { renderer }
    }

    pub fn into_renderer(self) -> MrkdwnRenderer {
        self.renderer
    }
}

impl TokenSink for EventSink {
    type Handle = ();

    fn process_token(&mut self, token: Token, _line_number: u64) -> TokenSinkResult<Self::Handle> {
        match token {
            Token::TagToken(tag) => {
                let name = tag.name.to_string();
                match tag.kind {
                    TagKind::StartTag => {
                        let attrs = tag
                            .attrs
                            .iter()
                            .map(|attr| {
                                Attribute::new(attr.name.local.to_string(), attr.value.to_string())
                            })
                            .collect();
                        self.renderer.handle_event(Event::StartTag {
                            name: name.clone().into(),
                            attrs,
                        });
                        // Without a tree builder the tokenizer never leaves
                        // the data state on its own; switch it to raw text
                        // here so script/style content arrives as character
                        // tokens until the matching end tag, never as tags.
                        match name.as_str() {
                            "script" => return TokenSinkResult::RawData(RawKind::ScriptData),
                            "style" => return TokenSinkResult::RawData(RawKind::Rawtext),
                            _ => {}
                        }
                    }
                    TagKind::EndTag => {
                        self.renderer.handle_event(Event::EndTag { name: name.into() });
                    }
                }
            }
            Token::CharacterTokens(text) => {
                // Character and entity references are already resolved here,
                // against the full WHATWG table.
                self.renderer.handle_event(Event::Text(text.to_string().into()));
            }
            Token::CommentToken(text) => {
                self.renderer
                    .handle_event(Event::Comment(text.to_string().into()));
            }
            Token::DoctypeToken(doctype) => {
                let name = doctype.name.map(|n| n.to_string()).unwrap_or_default();
                self.renderer.handle_event(Event::Declaration(name.into()));
            }
            // Parse errors are the lenient tokenizer's recovery notes, not
            // failures; the recovered tokens still arrive separately.
            Token::NullCharacterToken | Token::EOFToken | Token::ParseError(_) => {}
        }
        TokenSinkResult::Continue
    }
}

/// Runs the tokenizer over `html`, feeding every token into `renderer`.
pub(crate) fn drive(html: &str, renderer: MrkdwnRenderer) -> MrkdwnRenderer {
    let mut queue = BufferQueue::new();
    queue.push_back(StrTendril::from(html));

    let mut tokenizer = Tokenizer::new(EventSink::new(renderer), TokenizerOpts::default());
    let _ = tokenizer.feed(&mut queue);
    tokenizer.end();

    tokenizer.sink.into_renderer()
}
