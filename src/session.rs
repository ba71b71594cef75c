//! Interactive connectivity queries against a loaded network
//!
//! Reads whitespace-separated names and answers each with every stop
//! reachable from it. The reserved word (any letter case) or end of input
//! ends the session. Unknown names are reported and the session continues.

use crate::graph::{EdgeWeight, Graph, GraphError, Vertex};
use crate::ingest::RESERVED_WORD;
use crate::query::{Strategy, TraverseQuery};
use serde_json::json;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// How answers are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `name -> a b c`
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Session settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub strategy: Strategy,
    pub format: OutputFormat,
    /// Written before each line of input is read
    pub prompt: Option<String>,
    /// Token that ends the session, matched case-insensitively
    pub exit_word: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::BreadthFirst,
            format: OutputFormat::Text,
            prompt: None,
            exit_word: RESERVED_WORD.to_string(),
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn exit_word(mut self, word: impl Into<String>) -> Self {
        self.exit_word = word.into();
        self
    }
}

/// Counts from a finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    /// Tokens answered, excluding the exit word
    pub queries: usize,
    /// Tokens naming no vertex
    pub misses: usize,
}

/// A query loop bound to one graph
pub struct QuerySession<'g, W> {
    graph: &'g Graph<String, W>,
    config: SessionConfig,
}

impl<'g, W: EdgeWeight> QuerySession<'g, W> {
    pub fn new(graph: &'g Graph<String, W>, config: SessionConfig) -> Self {
        Self { graph, config }
    }

    /// Run until the exit word or end of input
    ///
    /// Answers go to `output`; prompts, if configured, go to `prompts`.
    pub fn run<R, O, P>(
        &self,
        input: R,
        output: &mut O,
        prompts: &mut P,
    ) -> io::Result<SessionSummary>
    where
        R: BufRead,
        O: Write,
        P: Write,
    {
        let mut summary = SessionSummary::default();
        let mut lines = input.lines();

        loop {
            if let Some(prompt) = &self.config.prompt {
                write!(prompts, "{}", prompt)?;
                prompts.flush()?;
            }
            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;

            for token in line.split_whitespace() {
                if token.eq_ignore_ascii_case(&self.config.exit_word) {
                    debug!(queries = summary.queries, "session ended by exit word");
                    return Ok(summary);
                }
                summary.queries += 1;
                if !self.answer(token, output)? {
                    summary.misses += 1;
                }
            }
        }

        debug!(queries = summary.queries, "session ended by end of input");
        Ok(summary)
    }

    /// Answer a single query, returning whether the name was found
    pub fn answer<O: Write>(&self, token: &str, output: &mut O) -> io::Result<bool> {
        let origin = token.to_string();
        let outcome = TraverseQuery::from(origin)
            .strategy(self.config.strategy)
            .execute(self.graph);

        match (outcome, self.config.format) {
            (Ok(result), OutputFormat::Text) => {
                writeln!(output, "{}", describe(token, result.connections()))?;
                Ok(true)
            }
            (Ok(result), OutputFormat::Json) => {
                serde_json::to_writer(&mut *output, &result.summary())?;
                writeln!(output)?;
                Ok(true)
            }
            (Err(err), format) => {
                report_miss(&err, format, output)?;
                Ok(false)
            }
        }
    }
}

fn describe<V: Vertex>(origin: &str, connections: &[V]) -> String {
    if connections.is_empty() {
        return format!("{} -> (no connections)", origin);
    }
    let names: Vec<String> = connections.iter().map(ToString::to_string).collect();
    format!("{} -> {}", origin, names.join(" "))
}

fn report_miss<O: Write>(
    err: &GraphError<String>,
    format: OutputFormat,
    output: &mut O,
) -> io::Result<()> {
    debug!(%err, "query missed");
    match format {
        OutputFormat::Text => writeln!(output, "{}", err),
        OutputFormat::Json => writeln!(output, "{}", json!({ "error": err.to_string() })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{sink, Cursor};

    fn network() -> Graph<String, u32> {
        let mut g = Graph::new();
        for v in ["a", "b", "c", "d"] {
            g.add_vertex(v.to_string());
        }
        g.add_edge(&"a".to_string(), &"b".to_string(), 1).unwrap();
        g.add_edge(&"a".to_string(), &"c".to_string(), 1).unwrap();
        g.add_edge(&"b".to_string(), &"d".to_string(), 1).unwrap();
        g
    }

    fn run(config: SessionConfig, input: &str) -> (String, SessionSummary) {
        let g = network();
        let session = QuerySession::new(&g, config);
        let mut out = Vec::new();
        let summary = session.run(Cursor::new(input), &mut out, &mut sink()).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn test_text_answers() {
        let (out, summary) = run(SessionConfig::new(), "a\nd\n");
        assert_eq!(out, "a -> b c d\nd -> (no connections)\n");
        assert_eq!(summary, SessionSummary { queries: 2, misses: 0 });
    }

    #[test]
    fn test_depth_first_answers() {
        let (out, _) = run(SessionConfig::new().strategy(Strategy::DepthFirst), "a");
        assert_eq!(out, "a -> b d c\n");
    }

    #[test]
    fn test_unknown_name_continues() {
        let (out, summary) = run(SessionConfig::new(), "zz b");
        assert_eq!(out, "Vertex not found: zz\nb -> d\n");
        assert_eq!(summary, SessionSummary { queries: 2, misses: 1 });
    }

    #[test]
    fn test_exit_word_any_case_stops() {
        let (out, summary) = run(SessionConfig::new(), "b\nExIt\na\n");
        assert_eq!(out, "b -> d\n");
        assert_eq!(summary.queries, 1);
    }

    #[test]
    fn test_custom_exit_word() {
        let (out, _) = run(SessionConfig::new().exit_word("quit"), "exit QUIT a");
        assert_eq!(out, "Vertex not found: exit\n");
    }

    #[test]
    fn test_json_answers() {
        let (out, _) = run(SessionConfig::new().format(OutputFormat::Json), "a nope");
        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(lines[0]["origin"], "a");
        assert_eq!(lines[0]["strategy"], "breadth_first");
        assert_eq!(lines[0]["connections"], json!(["b", "c", "d"]));
        assert!(lines[0].get("visited").is_none());
        assert_eq!(lines[0].as_object().map(|o| o.len()), Some(3));
        assert_eq!(lines[1]["error"], "Vertex not found: nope");
    }

    #[test]
    fn test_prompts_go_to_prompt_sink() {
        let g = network();
        let session = QuerySession::new(&g, SessionConfig::new().prompt("> "));
        let mut out = Vec::new();
        let mut prompts = Vec::new();
        session
            .run(Cursor::new("a\nb\n"), &mut out, &mut prompts)
            .unwrap();

        // one prompt per line read, plus the one answered by end of input
        assert_eq!(String::from_utf8(prompts).unwrap(), "> > > ");
        assert_eq!(String::from_utf8(out).unwrap(), "a -> b c d\nb -> d\n");
    }
}
