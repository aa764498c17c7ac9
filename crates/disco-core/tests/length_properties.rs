//! Propiedades de las reglas de duración, fecha y capacidad del disco.

use chrono::{Duration, NaiveDate};
use disco_core::domain::{DISC_CAPACITY_MB, Playlist, SizeMb, Song, SongDraft, SongLength};
use disco_core::services::validate;

fn draft(minutes: u32, seconds: u32) -> SongDraft {
  SongDraft {
    title: "Pista".to_string(),
    length: SongLength::new(minutes, seconds).unwrap(),
    artist: "Artista".to_string(),
    author: "Autor".to_string(),
    release_date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
    genre: "Rock".to_string(),
  }
}

proptest::proptest! {
  /// `m:ss` se acepta si y solo si `s < 60` y no es `0:00`.
  #[test]
  fn duration_accepts_exactly_valid_pairs(m in 0u32..10_000, s in 0u32..200) {
    let accepted = validate::duration(&format!("{m}:{s}")).is_ok();
    assert_eq!(accepted, s < 60 && (m, s) != (0, 0));
  }

  /// El tamaño es siempre `floor((m*2048 + s*34) / 1000)`.
  #[test]
  fn size_follows_formula(m in 0u32..100_000, s in 0u32..60) {
    if let Some(length) = SongLength::new(m, s) {
      let expected = (u64::from(m) * 2048 + u64::from(s) * 34) / 1000;
      assert_eq!(length.estimated_size(), SizeMb::new(expected));
      assert_eq!(length.estimated_size(), length.estimated_size());
    }
  }

  /// Una fecha se acepta si y solo si no es posterior a hoy.
  #[test]
  fn date_accepts_only_past_or_today(offset in -3_000i64..3_000) {
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    let candidate = today + Duration::days(offset);
    let raw = candidate.format("%d/%m/%Y").to_string();

    let result = validate::date(&raw, today);
    assert_eq!(result.is_ok(), candidate <= today, "{raw}");
  }

  /// Ninguna secuencia de altas supera la capacidad, y el total es la suma
  /// de las entradas.
  #[test]
  fn playlist_never_exceeds_capacity(lengths in proptest::collection::vec((0u32..120, 1u32..60), 0..40)) {
    let mut playlist = Playlist::new("Prop");

    for (m, s) in lengths {
      let song = Song::from_draft(draft(m, s));
      let before = playlist.total_size();
      match playlist.try_add(&song) {
        Ok(()) => assert_eq!(playlist.total_size(), before.saturating_add(song.size)),
        Err(_) => assert_eq!(playlist.total_size(), before),
      }

      assert!(playlist.total_size().get() <= DISC_CAPACITY_MB);
      let sum: SizeMb = playlist.entries().iter().map(|e| e.size).sum();
      assert_eq!(playlist.total_size(), sum);
    }
  }
}
