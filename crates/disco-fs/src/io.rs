use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

/// Crea el directorio padre de `path` si todavía no existe.
pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
  match path.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
    _ => Ok(()),
  }
}

/// Escribe `contents` en `path` sin dejar nunca un archivo a medias.
///
/// Se escribe primero a `<path>.tmp` y luego se renombra encima del destino.
pub fn atomic_write_str(path: &Path, contents: &str) -> io::Result<()> {
  ensure_parent_dir(path)?;
  let tmp_path = path.with_extension("tmp");

  {
    let mut tmp_file = fs::File::create(&tmp_path)?;
    tmp_file.write_all(contents.as_bytes())?;
    tmp_file.sync_all()?;
  }

  fs::rename(&tmp_path, path)?;
  debug!(path = %path.display(), bytes = contents.len(), "file written");
  Ok(())
}
