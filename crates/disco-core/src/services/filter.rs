use chrono::NaiveDate;
use tracing::debug;

use crate::domain::{Song, SongLength};
use crate::ports::{PromptError, Terminal};
use crate::services::prompt::Prompter;

/// Campo sobre el que opera una búsqueda, en el orden del menú (1..=7).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriterionKind {
  Title,
  Artist,
  Author,
  ReleaseDate,
  Genre,
  Length,
  Size,
}

impl CriterionKind {
  pub const ALL: [CriterionKind; 7] = [
    CriterionKind::Title,
    CriterionKind::Artist,
    CriterionKind::Author,
    CriterionKind::ReleaseDate,
    CriterionKind::Genre,
    CriterionKind::Length,
    CriterionKind::Size,
  ];

  /// Opción de menú → criterio. `0` (cancelar) y valores fuera de rango dan `None`.
  pub fn from_option(option: u32) -> Option<Self> {
    let idx = (option as usize).checked_sub(1)?;
    Self::ALL.get(idx).copied()
  }

  pub fn label(&self) -> &'static str {
    match self {
      CriterionKind::Title => "Titulo",
      CriterionKind::Artist => "Artista",
      CriterionKind::Author => "Autor",
      CriterionKind::ReleaseDate => "Fecha de lanzamiento",
      CriterionKind::Genre => "Genero",
      CriterionKind::Length => "Duracion",
      CriterionKind::Size => "Tamaño",
    }
  }
}

/// Un criterio concreto con el valor ya validado.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
  /// Subcadena, sin distinguir mayúsculas.
  Title(String),
  /// Subcadena, sin distinguir mayúsculas.
  Artist(String),
  /// Subcadena, sin distinguir mayúsculas.
  Author(String),
  ReleaseDate(NaiveDate),
  /// Igualdad exacta, sin distinguir mayúsculas.
  Genre(String),
  Length(SongLength),
  /// Igualdad de texto contra el tamaño derivado (`"7"`).
  Size(String),
}

impl Criterion {
  pub fn matches(&self, song: &Song) -> bool {
    match self {
      Criterion::Title(needle) => contains_ignore_case(&song.title, needle),
      Criterion::Artist(needle) => contains_ignore_case(&song.artist, needle),
      Criterion::Author(needle) => contains_ignore_case(&song.author, needle),
      Criterion::ReleaseDate(date) => song.release_date == *date,
      Criterion::Genre(genre) => song.genre.to_lowercase() == genre.to_lowercase(),
      Criterion::Length(length) => song.length == *length,
      Criterion::Size(size) => song.size.to_string() == *size,
    }
  }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
  haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Subsecuencia de `songs` que cumple el criterio, en el orden original.
pub fn filter<'a>(songs: &'a [Song], criterion: &Criterion) -> Vec<&'a Song> {
  songs.iter().filter(|s| criterion.matches(s)).collect()
}

/// Resultado de una búsqueda interactiva.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOutcome<'a> {
  /// El operador eligió "cancelar".
  Cancelled,
  /// Se aplicó un criterio y ninguna canción lo cumple.
  NoMatches,
  Matches(Vec<&'a Song>),
}

impl<'a> FilterOutcome<'a> {
  fn from_results(results: Vec<&'a Song>) -> Self {
    if results.is_empty() { FilterOutcome::NoMatches } else { FilterOutcome::Matches(results) }
  }
}

/// Motor de búsqueda de un solo criterio.
pub struct FilterEngine;

impl FilterEngine {
  /// Muestra el menú de criterios, pide el valor correspondiente y filtra.
  ///
  /// Una opción fuera de rango se reporta y se vuelve a pedir.
  pub fn run<'a, T: Terminal>(
    prompter: &mut Prompter<T>,
    songs: &'a [Song],
  ) -> Result<FilterOutcome<'a>, PromptError> {
    let kind = loop {
      prompter.say("Buscar por...");
      for (i, kind) in CriterionKind::ALL.iter().enumerate() {
        prompter.say(format!("{}. {}", i + 1, kind.label()));
      }
      prompter.say("0. Cancelar");

      let option = prompter.non_negative_int("Opcion")?;
      if option == 0 {
        prompter.say("Cancelando...");
        return Ok(FilterOutcome::Cancelled);
      }

      match CriterionKind::from_option(option) {
        Some(kind) => break kind,
        None => prompter.say("Opcion invalida"),
      }
    };

    let criterion = Self::read_criterion(prompter, kind)?;
    let results = filter(songs, &criterion);
    debug!(?criterion, matches = results.len(), "filter executed");

    Ok(FilterOutcome::from_results(results))
  }

  /// Pide el valor del criterio con el mismo reconocedor que usa la captura.
  pub fn read_criterion<T: Terminal>(
    prompter: &mut Prompter<T>,
    kind: CriterionKind,
  ) -> Result<Criterion, PromptError> {
    let criterion = match kind {
      CriterionKind::Title => Criterion::Title(prompter.text("Titulo", 30)?),
      CriterionKind::Artist => Criterion::Artist(prompter.alphabetic("Artista", 20)?),
      CriterionKind::Author => Criterion::Author(prompter.alphabetic("Autor", 20)?),
      CriterionKind::ReleaseDate => {
        Criterion::ReleaseDate(prompter.date("Fecha de lanzamiento (dd/mm/aaaa)")?)
      }
      CriterionKind::Genre => Criterion::Genre(prompter.alphabetic("Genero", 20)?),
      CriterionKind::Length => Criterion::Length(prompter.duration("Duracion (Minutos:Segundos)")?),
      CriterionKind::Size => Criterion::Size(prompter.megabytes("Tamaño de la cancion (MB)")?),
    };

    Ok(criterion)
  }
}
