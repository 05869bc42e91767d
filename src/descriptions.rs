use progbook_render::naming::description_slug;
use progbook_render::{DescriptionProvider, RenderError};
use progbook_types::TrackName;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Reads track descriptions from `<dir>/<slug>.html`.
#[derive(Debug, Clone)]
pub struct FsDescriptions {
    dir: PathBuf,
}

impl FsDescriptions {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, track: &TrackName) -> PathBuf {
        self.dir.join(format!("{}.html", description_slug(track)))
    }
}

impl DescriptionProvider for FsDescriptions {
    fn description(&self, track: &TrackName) -> Result<Option<String>, RenderError> {
        let path = self.path_for(track);
        match fs::read_to_string(&path) {
            Ok(html) => Ok(Some(html)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("No description for track '{}' at '{}'", track, path.display());
                Ok(None)
            }
            Err(source) => Err(RenderError::Description {
                track: track.to_string(),
                source,
            }),
        }
    }
}
