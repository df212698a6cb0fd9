//! Loader for RON tuning files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::{BigfootTuning, GameplayTuning, MothmanTuning, WendigoTuning};
use super::BossContent;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Load a single RON struct from a file.
fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    ron_options()
        .from_str(&contents)
        .map_err(|e| ContentLoadError {
            file: file_name,
            message: format!("Parse error: {}", e),
        })
}

/// Load all tuning from `base_path`. Files that fail to load fall back to
/// their built-in defaults; the errors are returned alongside so the caller
/// can log them.
pub fn load_all_content(base_path: &Path) -> (BossContent, Vec<ContentLoadError>) {
    let mut content = BossContent::default();
    let mut errors = Vec::new();

    macro_rules! load_into {
        ($field:expr, $file:expr, $type:ty) => {
            match load_single_file::<$type>(&base_path.join($file)) {
                Ok(loaded) => $field = loaded,
                Err(e) => errors.push(e),
            }
        };
    }

    load_into!(content.bigfoot, "bigfoot.ron", BigfootTuning);
    load_into!(content.mothman, "mothman.ron", MothmanTuning);
    load_into!(content.wendigo, "wendigo.ron", WendigoTuning);
    load_into!(content.gameplay, "gameplay.ron", GameplayTuning);

    (content, errors)
}
