//! Dobles de prueba para los ports del núcleo.

#![cfg(any(test, feature = "mocks"))]

use std::collections::VecDeque;

use crate::ports::{PromptError, Terminal};

/// Terminal que responde con un guion fijo de líneas.
///
/// Cuando el guion se agota, `read_line` devuelve [`PromptError::Closed`],
/// igual que un stdin cerrado.
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
  inputs: VecDeque<String>,
  prompts: Vec<String>,
  output: Vec<String>,
}

impl ScriptedTerminal {
  pub fn new<I, S>(lines: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self { inputs: lines.into_iter().map(Into::into).collect(), ..Self::default() }
  }

  /// Prompts mostrados, en orden.
  pub fn prompts(&self) -> &[String] {
    &self.prompts
  }

  /// Líneas escritas para el operador, en orden.
  pub fn output(&self) -> &[String] {
    &self.output
  }

  /// `true` si alguna línea de salida contiene `needle`.
  pub fn printed(&self, needle: &str) -> bool {
    self.output.iter().any(|line| line.contains(needle))
  }

  /// Cantidad de líneas escritas que contienen `needle`.
  pub fn count_printed(&self, needle: &str) -> usize {
    self.output.iter().filter(|line| line.contains(needle)).count()
  }

  /// Líneas del guion que aún no se consumieron.
  pub fn remaining(&self) -> usize {
    self.inputs.len()
  }
}

impl Terminal for ScriptedTerminal {
  fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
    self.prompts.push(prompt.to_string());
    self.inputs.pop_front().ok_or(PromptError::Closed)
  }

  fn write_line(&mut self, text: &str) {
    self.output.push(text.to_string());
  }
}
