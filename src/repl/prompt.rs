use std::{
    fmt::Display,
    io::{self, BufRead, Write},
    str::FromStr,
};

/// Line-oriented question/answer channel between the menu and the operator
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `label` and reads one answer without its line terminator.
    ///
    /// Returns `None` once the input is exhausted.
    pub fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Ok(None);
        }

        let len = answer.trim_end_matches(['\n', '\r']).len();
        answer.truncate(len);
        Ok(Some(answer))
    }

    pub fn say(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.output, "{msg}")
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Parses a required numeric answer.
pub fn parse_required<T: FromStr>(answer: &str) -> Option<T> {
    answer.trim().parse().ok()
}

/// Parses an answer that may be left empty.
///
/// `Ok(None)` means the field was omitted.
pub fn parse_optional<T: FromStr>(answer: &str) -> Result<Option<T>, T::Err> {
    if answer.is_empty() {
        return Ok(None);
    }

    answer.trim().parse().map(Some)
}
