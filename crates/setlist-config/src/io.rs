use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Escribe en un `.tmp` junto al destino y renombra, para no dejar nunca
/// un archivo a medio escribir.
pub fn atomic_write_str(path: &Path, contents: &str) -> io::Result<()> {
  let tmp_path = path.with_extension("tmp");

  {
    let mut tmp_file = fs::File::create(&tmp_path)?;
    tmp_file.write_all(contents.as_bytes())?;
    tmp_file.sync_all()?;
  }

  fs::rename(&tmp_path, path)?;
  Ok(())
}
