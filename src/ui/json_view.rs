use std::ops::Range;

use eframe::egui::text::LayoutJob;
use eframe::egui::{self, FontId, ScrollArea, TextFormat, Ui};
use serde_json::Value;

use crate::color::JsonTheme;

// ---------------------------------------------------------------------------
// Pretty printing
// ---------------------------------------------------------------------------

/// Two-space indented JSON. Falls back to compact output if pretty
/// printing fails, which cannot happen for a `Value` with string keys.
pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

// ---------------------------------------------------------------------------
// Tokenizer (for colouring already-valid JSON text)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Key,
    String,
    Number,
    Literal,
    Punctuation,
    Whitespace,
}

/// Split JSON text into coloured spans. Ranges are byte offsets and cover
/// the whole input without gaps.
pub fn tokenize(text: &str) -> Vec<(Range<usize>, TokenKind)> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let start = i;
        let kind = match bytes[i] {
            b'"' => {
                i += 1;
                while i < bytes.len() {
                    match bytes[i] {
                        b'\\' => {
                            i += 1;
                            i += text[i..].chars().next().map_or(0, char::len_utf8);
                        }
                        b'"' => {
                            i += 1;
                            break;
                        }
                        _ => i += 1,
                    }
                }
                let rest = text[i..].trim_start();
                if rest.starts_with(':') {
                    TokenKind::Key
                } else {
                    TokenKind::String
                }
            }
            b'-' | b'0'..=b'9' => {
                while i < bytes.len()
                    && matches!(bytes[i], b'0'..=b'9' | b'-' | b'+' | b'.' | b'e' | b'E')
                {
                    i += 1;
                }
                TokenKind::Number
            }
            b if b.is_ascii_alphabetic() => {
                while i < bytes.len() && bytes[i].is_ascii_alphabetic() {
                    i += 1;
                }
                TokenKind::Literal
            }
            b if b.is_ascii_whitespace() => {
                while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                    i += 1;
                }
                TokenKind::Whitespace
            }
            _ => {
                // Advance by a whole char so ranges stay on UTF-8 boundaries.
                i += text[i..].chars().next().map_or(1, char::len_utf8);
                TokenKind::Punctuation
            }
        };
        tokens.push((start..i, kind));
    }

    tokens
}

fn layout(text: &str, theme: &JsonTheme) -> LayoutJob {
    let mut job = LayoutJob::default();
    for (range, kind) in tokenize(text) {
        job.append(
            &text[range],
            0.0,
            TextFormat {
                font_id: FontId::monospace(13.0),
                color: theme.color_for(kind),
                ..Default::default()
            },
        );
    }
    job
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

/// Titled, scrollable, syntax-coloured JSON block with a copy button.
pub fn json_block(ui: &mut Ui, title: &str, value: &Value) {
    let text = pretty_json(value);
    let theme = JsonTheme::new(ui.visuals().dark_mode);

    ui.horizontal(|ui: &mut Ui| {
        ui.heading(title);
        if ui.small_button("Copy").clicked() {
            ui.ctx().copy_text(text.clone());
        }
    });

    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ScrollArea::both()
            .id_salt(title)
            .max_height(260.0)
            .auto_shrink([false, true])
            .show(ui, |ui: &mut Ui| {
                ui.label(layout(&text, &theme));
            });
    });
}
