//! Rendering of log entries into console and file text

use serde_json::Value;

use crate::config::LoggerConfig;
use crate::entry::LogEntry;
use crate::error::Result;
use crate::highlight::{Highlighter, TokenClass};

/// Text produced for one entry, per sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub console: String,
    pub file: String,
}

/// Formats entries according to a logger configuration
pub struct Renderer {
    json_format: bool,
    indent: usize,
    colorize_tokens: bool,
    highlighter: Box<dyn Highlighter>,
}

impl Renderer {
    pub fn new(config: &LoggerConfig, highlighter: Box<dyn Highlighter>) -> Self {
        Self {
            json_format: config.json_format,
            indent: config.indent(),
            colorize_tokens: config.colorize_tokens(),
            highlighter,
        }
    }

    pub fn render(&self, entry: &LogEntry) -> Result<Rendered> {
        let (console, file) = if self.json_format {
            self.render_structured(entry)?
        } else {
            let line = plain_line(entry);
            (line.clone(), line)
        };

        Ok(Rendered {
            console: self.highlighter.level(entry.level, &console),
            file,
        })
    }

    fn render_structured(&self, entry: &LogEntry) -> Result<(String, String)> {
        let record = entry.to_record();

        let file = if self.indent == 0 {
            serde_json::to_string(&record)?
        } else {
            serde_json::to_string_pretty(&record)?
        };

        let console = if self.colorize_tokens {
            write_tree(&record, self.indent, self.highlighter.as_ref())?
        } else {
            file.clone()
        };

        Ok((console, file))
    }
}

/// `[<timestamp>] [<LEVEL>]: <joined messages>`
pub fn plain_line(entry: &LogEntry) -> String {
    format!("[{}] [{}]: {}", entry.timestamp_text(), entry.level.label(), entry.joined_text())
}

/// Serialize `value` with the given indentation, painting each token.
///
/// With a pass-through highlighter the output is byte-identical to
/// `serde_json::to_string` (indent 0) and `to_string_pretty` (indent 2).
pub fn write_tree(value: &Value, indent: usize, highlighter: &dyn Highlighter) -> Result<String> {
    let mut writer = TreeWriter {
        out: String::new(),
        indent,
        highlighter,
    };
    writer.value(value, 0)?;
    Ok(writer.out)
}

struct TreeWriter<'a> {
    out: String,
    indent: usize,
    highlighter: &'a dyn Highlighter,
}

impl TreeWriter<'_> {
    fn value(&mut self, value: &Value, depth: usize) -> Result<()> {
        match value {
            Value::Null => self.token(TokenClass::Null, "null"),
            Value::Bool(b) => self.token(TokenClass::Boolean, if *b { "true" } else { "false" }),
            Value::Number(n) => self.token(TokenClass::Number, &n.to_string()),
            Value::String(s) => self.token(TokenClass::String, &serde_json::to_string(s)?),
            Value::Array(items) => {
                if items.is_empty() {
                    self.out.push_str("[]");
                    return Ok(());
                }
                self.out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.out.push(',');
                    }
                    self.newline(depth + 1);
                    self.value(item, depth + 1)?;
                }
                self.newline(depth);
                self.out.push(']');
            }
            Value::Object(map) => {
                if map.is_empty() {
                    self.out.push_str("{}");
                    return Ok(());
                }
                self.out.push('{');
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        self.out.push(',');
                    }
                    self.newline(depth + 1);
                    self.token(TokenClass::Key, &serde_json::to_string(key)?);
                    self.out.push(':');
                    if self.indent > 0 {
                        self.out.push(' ');
                    }
                    self.value(item, depth + 1)?;
                }
                self.newline(depth);
                self.out.push('}');
            }
        }
        Ok(())
    }

    fn token(&mut self, class: TokenClass, text: &str) {
        let painted = self.highlighter.token(class, text);
        self.out.push_str(&painted);
    }

    fn newline(&mut self, depth: usize) {
        if self.indent == 0 {
            return;
        }
        self.out.push('\n');
        self.out.push_str(&" ".repeat(self.indent * depth));
    }
}
