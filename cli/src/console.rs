//! The menu controller: a blocking read-eval loop over a line console.
//!
//! One user-driven action runs to completion per iteration; the loop blocks
//! on input in between. All errors coming back from the session are
//! reported and recovered locally, so the only ways out are a confirmed
//! exit or the end of the input stream.

use std::io::{self, BufRead, Read, Write};

use pinlock_engine::{MENU, MenuAction, PIN_LENGTH, Session};

/// Why the console loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopEnd {
    /// The user confirmed the exit prompt.
    Confirmed,
    /// The input stream ended.
    Eof,
}

/// The interactive menu over a generic input/output pair.
///
/// Generic so tests can script it with in-memory buffers; the binary passes
/// locked stdin and stdout.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run the menu loop until the user confirms exit or input ends.
    ///
    /// Always prints the farewell line before returning, whichever way the
    /// loop ended.
    pub fn run(&mut self, session: &mut Session<PIN_LENGTH>) -> io::Result<LoopEnd> {
        let end = loop {
            self.print_menu()?;
            let Some(line) = self.read_line()? else {
                break LoopEnd::Eof;
            };

            match MenuAction::parse(&line) {
                Ok(MenuAction::EnterCode) => {
                    if self.enter_code(session)?.is_none() {
                        break LoopEnd::Eof;
                    }
                }
                Ok(MenuAction::EncryptAndVerify) => self.encrypt_and_verify(session)?,
                Ok(MenuAction::Decrypt) => self.decrypt(session)?,
                Ok(MenuAction::DisplayCounters) => self.display_counters(session)?,
                Ok(MenuAction::Exit) => match self.confirm_exit()? {
                    None => break LoopEnd::Eof,
                    Some(true) => break LoopEnd::Confirmed,
                    Some(false) => {}
                },
                Err(err) => {
                    tracing::debug!(%err, "menu selection rejected");
                    writeln!(
                        self.output,
                        "ERROR: please input whole numbers only between 1 and 5 inclusive"
                    )?;
                }
            }
        };

        writeln!(self.output)?;
        writeln!(self.output, "The program has exited successfully")?;
        self.output.flush()?;
        Ok(end)
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Security Authentication")?;
        writeln!(self.output, "Enter your selection:")?;
        for entry in MENU {
            writeln!(self.output, "  {}. {}", entry.selection, entry.label)?;
        }
        writeln!(self.output)?;
        self.output.flush()
    }

    /// Read one input line without its trailing newline; `None` on EOF.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    /// Prompt for and read a fresh code, one character at a time.
    ///
    /// `None` means the input stream ended before any character arrived.
    fn enter_code(&mut self, session: &mut Session<PIN_LENGTH>) -> io::Result<Option<()>> {
        writeln!(self.output, "Input your {PIN_LENGTH}-digit code:")?;
        self.output.flush()?;

        let Some(raw) = self.read_code_characters()? else {
            return Ok(None);
        };
        if let Err(err) = session.enter_code(&raw) {
            writeln!(self.output, "ERROR: {err}. Returning to the menu.")?;
        }
        Ok(Some(()))
    }

    /// Collect up to `PIN_LENGTH` non-whitespace characters.
    ///
    /// Whitespace (including newlines) between characters is skipped, so
    /// "4523" and "4 5 2 3" both work. Reading stops early after the first non-digit
    /// so the aborted entry can be reported with its offending character.
    /// Whatever else was typed on the final line is discarded, so it cannot
    /// leak into the next menu selection.
    fn read_code_characters(&mut self) -> io::Result<Option<String>> {
        let mut collected = String::new();
        while collected.len() < PIN_LENGTH {
            let mut byte = [0u8; 1];
            if self.input.read(&mut byte)? == 0 {
                if collected.is_empty() {
                    return Ok(None);
                }
                break;
            }
            let ch = char::from(byte[0]);
            if ch.is_ascii_whitespace() {
                continue;
            }
            collected.push(ch);
            if !ch.is_ascii_digit() {
                break;
            }
        }
        self.discard_rest_of_line()?;
        Ok(Some(collected))
    }

    fn discard_rest_of_line(&mut self) -> io::Result<()> {
        loop {
            let mut byte = [0u8; 1];
            if self.input.read(&mut byte)? == 0 || byte[0] == b'\n' {
                return Ok(());
            }
        }
    }

    fn encrypt_and_verify(&mut self, session: &mut Session<PIN_LENGTH>) -> io::Result<()> {
        match session.encrypt_and_verify() {
            Ok(outcome) if outcome.matched() => writeln!(
                self.output,
                "Access granted. The encrypted code matches the authorised access code."
            ),
            Ok(_) => writeln!(
                self.output,
                "Access denied. The encrypted code does not match the authorised access code."
            ),
            Err(err) => writeln!(self.output, "ERROR: {err}"),
        }
    }

    fn decrypt(&mut self, session: &mut Session<PIN_LENGTH>) -> io::Result<()> {
        match session.decrypt() {
            Ok(code) => writeln!(self.output, "Code decrypted: {code}"),
            Err(err) => writeln!(self.output, "ERROR: {err}"),
        }
    }

    fn display_counters(&mut self, session: &Session<PIN_LENGTH>) -> io::Result<()> {
        let counters = session.counters();
        writeln!(
            self.output,
            "The encrypted code matched the authorised access code {} times and unmatched {} times",
            counters.matches(),
            counters.mismatches()
        )
    }

    /// Keep asking until the answer is a single character; `y` (either
    /// case) confirms, anything else returns to the menu. `None` on EOF.
    fn confirm_exit(&mut self) -> io::Result<Option<bool>> {
        loop {
            writeln!(self.output, "Are you sure you want to exit the program? (y/n)")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            let answer = line.trim_start();
            let mut chars = answer.chars();
            let (Some(first), None) = (chars.next(), chars.next()) else {
                continue;
            };
            return Ok(Some(first.to_ascii_lowercase() == 'y'));
        }
    }
}
