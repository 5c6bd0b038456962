//! Interactive read-eval-print loop.

use std::io::Write;
use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::Notify;

use crate::command::{Command, HELP_TEXT};
use crate::error::ChatError;
use crate::provider::ChatProvider;
use crate::session::ChatSession;

pub const BANNER: &str =
    "Ahoy! 🧽 Welcome to SpongeBob's CLI. Type /help for commands. (Ctrl+C to quit)";
pub const GOODBYE: &str = "Bye-bye, barnacle buddy! 🌊";
pub const PROMPT: &str = "\nYou: ";

/// Drives a [`ChatSession`] from line input, writing everything the user sees to `out`.
///
/// `interrupt` is notified on Ctrl+C. While waiting for input it ends the loop;
/// while a request is in flight the request is dropped, the pending user
/// message is rolled back, and the loop ends.
pub struct Repl<P, W> {
    session: ChatSession<P>,
    out: W,
    interrupt: Arc<Notify>,
}

impl<P: ChatProvider, W: Write> Repl<P, W> {
    pub fn new(session: ChatSession<P>, out: W, interrupt: Arc<Notify>) -> Self {
        Self {
            session,
            out,
            interrupt,
        }
    }

    /// Run until `/exit`, end of input, or interrupt.
    ///
    /// Input bytes that are not valid UTF-8 are replaced with U+FFFD rather
    /// than ending the session.
    pub async fn run<R>(&mut self, mut input: R) -> Result<(), ChatError>
    where
        R: AsyncBufRead + Unpin,
    {
        writeln!(self.out, "{BANNER}")?;
        let mut buf = Vec::new();

        loop {
            write!(self.out, "{PROMPT}")?;
            self.out.flush()?;

            buf.clear();
            let read = tokio::select! {
                read = input.read_until(b'\n', &mut buf) => Some(read?),
                _ = self.interrupt.notified() => None,
            };
            let Some(len) = read.filter(|len| *len > 0) else {
                writeln!(self.out, "\n{GOODBYE}")?;
                break;
            };
            let line = String::from_utf8_lossy(&buf[..len]);
            let Some(command) = Command::parse(&line) else {
                continue;
            };

            match command {
                Command::Exit => {
                    writeln!(self.out, "{GOODBYE}")?;
                    break;
                }
                Command::Help => writeln!(self.out, "{HELP_TEXT}")?,
                Command::Reset => {
                    self.session.reset();
                    writeln!(self.out, "[History reset]")?;
                }
                Command::Save(path) => match self.session.save(path.as_deref()) {
                    Ok(path) => writeln!(self.out, "[Saved transcript to {}]", path.display())?,
                    Err(err) => writeln!(self.out, "[Error] {err}")?,
                },
                Command::Message(text) => {
                    if !self.turn(&text).await? {
                        writeln!(self.out, "\n{GOODBYE}")?;
                        break;
                    }
                }
            }
        }

        self.out.flush()?;
        Ok(())
    }

    /// One user turn. Returns `false` when interrupted mid-request.
    async fn turn(&mut self, text: &str) -> Result<bool, ChatError> {
        self.session.begin_turn(text);
        let request = self.session.pending_request();

        let outcome = tokio::select! {
            result = self.session.provider().complete(&request) => Some(result),
            _ = self.interrupt.notified() => None,
        };

        let Some(result) = outcome else {
            self.session.abandon_turn();
            return Ok(false);
        };

        match self.session.finish_turn(result) {
            Ok(reply) => writeln!(self.out, "SpongeBob: {reply}")?,
            Err(err) => writeln!(self.out, "[Error] {err}")?,
        }
        Ok(true)
    }

    pub fn session(&self) -> &ChatSession<P> {
        &self.session
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_parts(self) -> (ChatSession<P>, W) {
        (self.session, self.out)
    }
}
