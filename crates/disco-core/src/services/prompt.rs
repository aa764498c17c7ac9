use std::fmt::Display;

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::domain::SongLength;
use crate::ports::{PromptError, Terminal};
use crate::services::validate::{self, FieldError};

/// Pide datos al operador y no devuelve nada hasta que sean válidos.
///
/// Cada método repite prompt → lectura → validación, mostrando el error
/// concreto en cada intento fallido. El único error que sale hacia el
/// llamador es la caída del transporte ([`PromptError`]).
pub struct Prompter<T> {
  term: T,
  today: Option<NaiveDate>,
}

impl<T: Terminal> Prompter<T> {
  pub fn new(term: T) -> Self {
    Self { term, today: None }
  }

  /// Fija la fecha "de hoy" usada para rechazar fechas futuras.
  pub fn with_today(mut self, today: NaiveDate) -> Self {
    self.today = Some(today);
    self
  }

  pub fn today(&self) -> NaiveDate {
    self.today.unwrap_or_else(|| Local::now().date_naive())
  }

  pub fn terminal(&self) -> &T {
    &self.term
  }

  pub fn into_inner(self) -> T {
    self.term
  }

  pub fn say(&mut self, text: impl AsRef<str>) {
    self.term.write_line(text.as_ref());
  }

  /// Separador horizontal entre pantallas.
  pub fn rule(&mut self) {
    self.term.write_line(&"-".repeat(80));
  }

  /// Imprime `items` numerados desde 1.
  pub fn numbered<I, D>(&mut self, items: I)
  where
    I: IntoIterator<Item = D>,
    D: Display,
  {
    for (i, item) in items.into_iter().enumerate() {
      self.term.write_line(&format!("{}. {}", i + 1, item));
    }
  }

  fn ask<V>(
    &mut self,
    label: &str,
    parse: impl Fn(&str) -> Result<V, FieldError>,
  ) -> Result<V, PromptError> {
    let prompt = format!("{label}> ");

    loop {
      let raw = self.term.read_line(&prompt)?;

      match parse(&raw) {
        Ok(value) => return Ok(value),
        Err(e) => {
          debug!(field = label, input = %raw, error = ?e, "input rejected");
          self.term.write_line(&format!("Error: {e}"));
        }
      }
    }
  }

  pub fn text(&mut self, label: &str, max_len: usize) -> Result<String, PromptError> {
    self.ask(label, |raw| validate::text(raw, max_len))
  }

  pub fn alphabetic(&mut self, label: &str, max_len: usize) -> Result<String, PromptError> {
    self.ask(label, |raw| validate::alphabetic(raw, max_len))
  }

  pub fn non_negative_int(&mut self, label: &str) -> Result<u32, PromptError> {
    self.ask(label, validate::non_negative_int)
  }

  pub fn date(&mut self, label: &str) -> Result<NaiveDate, PromptError> {
    let today = self.today();
    self.ask(label, |raw| validate::date(raw, today))
  }

  pub fn duration(&mut self, label: &str) -> Result<SongLength, PromptError> {
    self.ask(label, validate::duration)
  }

  pub fn megabytes(&mut self, label: &str) -> Result<String, PromptError> {
    self.ask(label, validate::megabytes)
  }

  /// `true` si el operador respondió "s".
  pub fn yes_no(&mut self, label: &str) -> Result<bool, PromptError> {
    self.ask(label, validate::yes_no)
  }

  /// Posición en `1..=len`, reintentando fuera de rango.
  ///
  /// Con `len == 0` no existe respuesta válida: el llamador debe evitarlo.
  pub fn pick(&mut self, label: &str, len: usize) -> Result<u32, PromptError> {
    self.ask(label, |raw| validate::pick(raw, len))
  }
}
