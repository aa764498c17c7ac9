//! Reconocedores puros de cada tipo de campo.
//!
//! Cada función recibe la línea tal como la escribió el operador y devuelve
//! el valor normalizado o un [`FieldError`] con el mensaje a mostrar. El
//! bucle de reintento vive en [`super::prompt::Prompter`].

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::SongLength;

/// Error de formato en un campo. Nunca sale del bucle de reintento.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
  #[error("El valor no puede estar vacio.")]
  Blank,

  #[error("El valor no puede ser mayor a {max} caracteres.")]
  TooLong { max: usize },

  #[error("El valor solo puede contener letras y espacios.")]
  NotAlphabetic,

  #[error("Debe proporcionar un número.")]
  NotANumber,

  #[error("Debe proporcionar un número positivo.")]
  Negative,

  #[error("El valor no es valido.")]
  InvalidDate,

  #[error("El valor no debe ser una fecha futura.")]
  FutureDate,

  #[error("El valor no es valido.")]
  InvalidLength,

  #[error("Ingrese un valor valido")]
  Empty,

  #[error("El valor excede la capacidad maxima")]
  TooManyDigits,

  #[error("Solo se aceptan caracteres numericos")]
  NotDigits,

  #[error("Solo se aceptan caracteres 's' o 'n'")]
  NotYesNo,

  #[error("Opcion invalida")]
  OutOfRange,
}

/// Texto no vacío de a lo sumo `max_len` caracteres.
///
/// El largo se mide sobre lo tecleado, espacios incluidos; lo devuelto va sin
/// espacios en los bordes.
pub fn text(raw: &str, max_len: usize) -> Result<String, FieldError> {
  let value = raw.trim();

  if value.is_empty() {
    return Err(FieldError::Blank);
  }
  if raw.chars().count() > max_len {
    return Err(FieldError::TooLong { max: max_len });
  }

  Ok(value.to_string())
}

/// Como [`text`], pero solo letras ASCII y espacios.
pub fn alphabetic(raw: &str, max_len: usize) -> Result<String, FieldError> {
  let value = text(raw, max_len)?;

  if !value.chars().all(|c| c.is_ascii_alphabetic() || c == ' ') {
    return Err(FieldError::NotAlphabetic);
  }

  Ok(value)
}

pub fn non_negative_int(raw: &str) -> Result<u32, FieldError> {
  let n: i64 = raw.trim().parse().map_err(|_| FieldError::NotANumber)?;

  if n < 0 {
    return Err(FieldError::Negative);
  }

  u32::try_from(n).map_err(|_| FieldError::NotANumber)
}

/// Fecha `dd/mm/aaaa` existente en el calendario gregoriano y no posterior a
/// `today`.
pub fn date(raw: &str, today: NaiveDate) -> Result<NaiveDate, FieldError> {
  let parts: Vec<&str> = raw.trim().split('/').collect();
  let [d, m, y] = parts.as_slice() else {
    return Err(FieldError::InvalidDate);
  };

  let well_formed = [(d, 2), (m, 2), (y, 4)]
    .iter()
    .all(|(part, width)| part.len() == *width && part.bytes().all(|b| b.is_ascii_digit()));
  if !well_formed {
    return Err(FieldError::InvalidDate);
  }

  let day: u32 = d.parse().map_err(|_| FieldError::InvalidDate)?;
  let month: u32 = m.parse().map_err(|_| FieldError::InvalidDate)?;
  let year: i32 = y.parse().map_err(|_| FieldError::InvalidDate)?;

  let value = NaiveDate::from_ymd_opt(year, month, day).ok_or(FieldError::InvalidDate)?;

  if value > today {
    return Err(FieldError::FutureDate);
  }

  Ok(value)
}

/// Duración `mm:ss`: segundos en `0..60` y distinta de `0:00`.
pub fn duration(raw: &str) -> Result<SongLength, FieldError> {
  let parts: Vec<&str> = raw.trim().split(':').collect();
  let [m, s] = parts.as_slice() else {
    return Err(FieldError::InvalidLength);
  };

  let minutes: i64 = m.parse().map_err(|_| FieldError::InvalidLength)?;
  let seconds: i64 = s.parse().map_err(|_| FieldError::InvalidLength)?;

  let minutes = u32::try_from(minutes).map_err(|_| FieldError::InvalidLength)?;
  let seconds = u32::try_from(seconds).map_err(|_| FieldError::InvalidLength)?;

  SongLength::new(minutes, seconds).ok_or(FieldError::InvalidLength)
}

/// Tamaño en MB: de 1 a 4 dígitos, sin punto decimal. Se devuelve tal cual.
pub fn megabytes(raw: &str) -> Result<String, FieldError> {
  let value = raw.trim();

  if value.is_empty() {
    return Err(FieldError::Empty);
  }
  if value.len() > 4 {
    return Err(FieldError::TooManyDigits);
  }
  if !value.bytes().all(|b| b.is_ascii_digit()) {
    return Err(FieldError::NotDigits);
  }

  Ok(value.to_string())
}

/// `s`/`n` (mayúscula o minúscula, una o varias veces la misma letra).
///
/// Devuelve `true` para "sí".
pub fn yes_no(raw: &str) -> Result<bool, FieldError> {
  let value = raw.trim().to_lowercase();

  let Some(first) = value.chars().next() else {
    return Err(FieldError::Empty);
  };

  if !matches!(first, 's' | 'n') || value.chars().any(|c| c != first) {
    return Err(FieldError::NotYesNo);
  }

  Ok(first == 's')
}

/// Opción de menú en `1..=len`.
pub fn pick(raw: &str, len: usize) -> Result<u32, FieldError> {
  let n = non_negative_int(raw)?;

  if n == 0 || n as usize > len {
    return Err(FieldError::OutOfRange);
  }

  Ok(n)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
  }

  #[test]
  fn text_trims_and_bounds_length() {
    assert_eq!(text("  Hola  ", 30), Ok("Hola".to_string()));
    assert_eq!(text("   ", 30), Err(FieldError::Blank));
    assert_eq!(text("", 30), Err(FieldError::Blank));
    assert_eq!(text(&"a".repeat(31), 30), Err(FieldError::TooLong { max: 30 }));
    assert!(text(&"a".repeat(30), 30).is_ok());
  }

  #[test]
  fn text_length_counts_surrounding_spaces() {
    let padded = format!("{}  ", "a".repeat(30));
    assert_eq!(text(&padded, 30), Err(FieldError::TooLong { max: 30 }));

    let fits = format!(" {} ", "b".repeat(28));
    assert_eq!(text(&fits, 30), Ok("b".repeat(28)));
  }

  #[test]
  fn alphabetic_allows_only_letters_and_spaces() {
    assert_eq!(alphabetic("Los Fabulosos", 20), Ok("Los Fabulosos".to_string()));
    assert_eq!(alphabetic("AC/DC", 20), Err(FieldError::NotAlphabetic));
    assert_eq!(alphabetic("Blink 182", 20), Err(FieldError::NotAlphabetic));
    assert_eq!(alphabetic("Canción", 20), Err(FieldError::NotAlphabetic));
    assert_eq!(alphabetic(&"x".repeat(21), 20), Err(FieldError::TooLong { max: 20 }));
  }

  #[test]
  fn non_negative_int_rejects_garbage_and_negatives() {
    assert_eq!(non_negative_int("0"), Ok(0));
    assert_eq!(non_negative_int(" 12 "), Ok(12));
    assert_eq!(non_negative_int("-1"), Err(FieldError::Negative));
    assert_eq!(non_negative_int("tres"), Err(FieldError::NotANumber));
    assert_eq!(non_negative_int("1.5"), Err(FieldError::NotANumber));
    assert_eq!(non_negative_int("99999999999"), Err(FieldError::NotANumber));
  }

  #[test]
  fn date_requires_exact_format() {
    assert_eq!(date("01/08/1990", today()), Ok(NaiveDate::from_ymd_opt(1990, 8, 1).unwrap()));
    assert_eq!(date("1/8/1990", today()), Err(FieldError::InvalidDate));
    assert_eq!(date("1990-08-01", today()), Err(FieldError::InvalidDate));
    assert_eq!(date("31/04/2000", today()), Err(FieldError::InvalidDate));
    assert_eq!(date("", today()), Err(FieldError::InvalidDate));
  }

  #[test]
  fn date_rejects_future_but_accepts_today() {
    assert!(date("15/06/2024", today()).is_ok());
    assert_eq!(date("16/06/2024", today()), Err(FieldError::FutureDate));
  }

  #[test]
  fn leap_day_follows_gregorian_calendar() {
    assert!(date("29/02/2020", today()).is_ok());
    assert!(date("29/02/2024", today()).is_ok());
    assert!(date("29/02/2000", today()).is_ok());
    assert_eq!(date("29/02/2023", today()), Err(FieldError::InvalidDate));
    assert_eq!(date("29/02/1900", today()), Err(FieldError::InvalidDate));
  }

  #[test]
  fn duration_examples() {
    assert_eq!(duration("3:45"), Ok(SongLength::new(3, 45).unwrap()));
    assert_eq!(duration("0:00"), Err(FieldError::InvalidLength));
    assert_eq!(duration("1:60"), Err(FieldError::InvalidLength));
    assert_eq!(duration("-1:30"), Err(FieldError::InvalidLength));
    assert_eq!(duration("3"), Err(FieldError::InvalidLength));
    assert_eq!(duration("3:45:10"), Err(FieldError::InvalidLength));
    assert_eq!(duration("tres:10"), Err(FieldError::InvalidLength));
    assert!(duration("0:01").is_ok());
  }

  #[test]
  fn megabytes_accepts_one_to_four_digits() {
    assert_eq!(megabytes("7"), Ok("7".to_string()));
    assert_eq!(megabytes("0450"), Ok("0450".to_string()));
    assert_eq!(megabytes(""), Err(FieldError::Empty));
    assert_eq!(megabytes("12345"), Err(FieldError::TooManyDigits));
    assert_eq!(megabytes("7.5"), Err(FieldError::NotDigits));
  }

  #[test]
  fn yes_no_accepts_repeated_letter() {
    assert_eq!(yes_no("s"), Ok(true));
    assert_eq!(yes_no("S"), Ok(true));
    assert_eq!(yes_no("sss"), Ok(true));
    assert_eq!(yes_no("N"), Ok(false));
    assert_eq!(yes_no("nN"), Ok(false));
    assert_eq!(yes_no("sn"), Err(FieldError::NotYesNo));
    assert_eq!(yes_no("si"), Err(FieldError::NotYesNo));
    assert_eq!(yes_no(""), Err(FieldError::Empty));
  }

  #[test]
  fn pick_is_one_based() {
    assert_eq!(pick("1", 3), Ok(1));
    assert_eq!(pick("3", 3), Ok(3));
    assert_eq!(pick("0", 3), Err(FieldError::OutOfRange));
    assert_eq!(pick("4", 3), Err(FieldError::OutOfRange));
    assert_eq!(pick("x", 3), Err(FieldError::NotANumber));
  }
}
