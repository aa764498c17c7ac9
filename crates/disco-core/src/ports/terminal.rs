/// Falla del transporte de líneas (no de la validación).
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
  /// Se cerró la entrada (EOF): no habrá más líneas.
  #[error("input closed")]
  Closed,

  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
}

/// Port de consola interactiva.
///
/// El núcleo solo necesita leer una línea tras mostrar un prompt y escribir
/// líneas de texto. Implementaciones posibles:
/// - stdin/stdout (CLI)
/// - un guion de entradas para tests
pub trait Terminal {
  /// Muestra `prompt` y bloquea hasta recibir una línea (sin el salto final).
  fn read_line(&mut self, prompt: &str) -> Result<String, PromptError>;

  /// Escribe una línea para el operador. Los errores de salida se ignoran.
  fn write_line(&mut self, text: &str);
}

impl<T: Terminal + ?Sized> Terminal for &mut T {
  fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
    (**self).read_line(prompt)
  }

  fn write_line(&mut self, text: &str) {
    (**self).write_line(text)
  }
}
