pub mod config;
pub mod infrastructure;
pub mod menus;
pub mod messages;

use anyhow::{Context, Result};
use tracing::{info, warn};

use disco_core::ports::{PromptError, SessionStore, Terminal};
use disco_core::services::{Prompter, Session};
use disco_storage::JsonSessionStore;

use crate::config::Args;
use crate::infrastructure::terminal::StdioTerminal;

/// Una sesión completa: carga, menú principal y guardado final.
///
/// El guardado se intenta aunque la entrada se haya cerrado a mitad de una
/// operación. Un fallo al guardar se informa pero no es fatal.
pub fn run_with<S: SessionStore, T: Terminal>(store: S, prompter: &mut Prompter<T>) -> Result<(), PromptError> {
  let mut session = Session::open(store);
  let ended = menus::run_session(&mut session, prompter);

  if let Err(PromptError::Closed) = ended {
    info!("input closed, ending session");
  }

  match session.save() {
    Ok(()) => prompter.say("Informacion: Respaldo guardado."),
    Err(e) => {
      warn!(error = %e, "could not save state");
      prompter.say("Error: No se pudo guardar el respaldo.");
    }
  }

  match ended {
    Ok(()) | Err(PromptError::Closed) => Ok(()),
    Err(e) => Err(e),
  }
}

/// Punto de entrada del binario, ya con los argumentos y los logs listos.
pub fn run(args: Args) -> Result<()> {
  let storage = args.storage_config().context("failed to load storage configuration")?;
  info!(state = %storage.state_file.display(), export = %storage.export_file.display(), "storage configured");

  let store = JsonSessionStore::from_config(&storage);
  let mut prompter = Prompter::new(StdioTerminal::stdio());

  run_with(store, &mut prompter).context("terminal input failed")?;
  Ok(())
}
