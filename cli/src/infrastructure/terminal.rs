use std::io::{self, BufRead, Write};

use disco_core::ports::{PromptError, Terminal};

/// Terminal sobre un lector y un escritor de líneas (stdin/stdout en el binario).
pub struct StdioTerminal<R, W> {
  input: R,
  output: W,
}

impl StdioTerminal<io::StdinLock<'static>, io::Stdout> {
  pub fn stdio() -> Self {
    Self::new(io::stdin().lock(), io::stdout())
  }
}

impl<R: BufRead, W: Write> StdioTerminal<R, W> {
  pub fn new(input: R, output: W) -> Self {
    Self { input, output }
  }

  pub fn into_output(self) -> W {
    self.output
  }
}

impl<R: BufRead, W: Write> Terminal for StdioTerminal<R, W> {
  fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
    write!(self.output, "{prompt}")?;
    self.output.flush()?;

    let mut line = String::new();
    if self.input.read_line(&mut line)? == 0 {
      return Err(PromptError::Closed);
    }

    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(line)
  }

  fn write_line(&mut self, text: &str) {
    let _ = writeln!(self.output, "{text}");
  }
}

#[cfg(test)]
mod tests {
  use std::io::Cursor;

  use super::*;

  #[test]
  fn reads_lines_without_terminator_then_reports_eof() {
    let mut term = StdioTerminal::new(Cursor::new("uno\r\ndos\n"), Vec::new());

    assert_eq!(term.read_line("> ").unwrap(), "uno");
    assert_eq!(term.read_line("> ").unwrap(), "dos");
    assert!(matches!(term.read_line("> "), Err(PromptError::Closed)));
  }

  #[test]
  fn prompt_and_lines_reach_output() {
    let mut term = StdioTerminal::new(Cursor::new("s\n"), Vec::new());
    term.write_line("Hola");
    term.read_line("Opcion> ").unwrap();

    assert_eq!(String::from_utf8(term.into_output()).unwrap(), "Hola\nOpcion> ");
  }
}
