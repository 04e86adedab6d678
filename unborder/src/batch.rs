use std::{
    collections::{hash_map::Entry, HashMap},
    ffi::{OsStr, OsString},
    fs, io,
    path::{Path, PathBuf},
};

use rayon::prelude::*;
use unborder_common::{
    borders::{BackgroundMode, BorderConf},
    codec::{self, DecodeError, EncodeError, ImageKind},
    utils::fsutils,
};

/// Output files get this prefix, and files with it are never processed
pub const PROCESSED_PREFIX: &str = "processed_";

/// How much of a file is read to decide if it is an image
pub const SNIFF_LEN: u64 = 512;

#[derive(Debug, thiserror::Error)]
#[error("failed to list the files in '{}'", dir.display())]
pub struct ListError {
    pub dir: PathBuf,
    #[source]
    pub source: io::Error,
}

#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("failed to read the file: {0}")]
    Read(#[source] io::Error),
    #[error("failed to decode: {0}")]
    Decode(#[from] DecodeError),
    #[error("the image is completely {0} or empty")]
    EmptyContent(BackgroundMode),
    #[error("failed to encode: {0}")]
    Encode(#[from] EncodeError),
    #[error("'{}' is already the result of '{}'", path.display(), taken_by.display())]
    OutputCollision { path: PathBuf, taken_by: PathBuf },
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A file that looks like an image we can handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    pub kind: ImageKind,
}

impl Candidate {
    /// Where the result of processing this file is saved
    pub fn output_path(&self) -> Option<PathBuf> {
        let name = self.path.file_name()?;
        Some(self.path.with_file_name(output_name(name, self.kind)))
    }
}

#[derive(Debug, Default)]
pub struct Summary {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, FileError)>,
    pub not_started: usize,
}

impl Summary {
    pub fn log_report(&self) {
        log::info!(
            "Wrote {} images, {} failed",
            self.written.len(),
            self.failed.len()
        );

        if self.not_started > 0 {
            log::warn!(
                "Stopped early, {} images were never started",
                self.not_started
            );
        }

        if !self.failed.is_empty() {
            let mut lines = vec!["Summary of images that failed:".to_string()];
            lines.extend(
                self.failed
                    .iter()
                    .map(|(path, error)| format!("'{}': {error}", path.display())),
            );
            log::error!("{}", lines.join("\n"));
        }
    }
}

/// Hidden files and earlier results are never processed
pub fn is_ignored_name(name: &OsStr) -> bool {
    let name = name.to_string_lossy();
    name.starts_with('.') || name.starts_with(PROCESSED_PREFIX)
}

/// The name of the result of processing a file called `name`. An extension is added if
/// there is none, so the result is easy to open.
pub fn output_name(name: &OsStr, kind: ImageKind) -> OsString {
    let mut out = OsString::from(PROCESSED_PREFIX);
    out.push(name);
    if Path::new(&out).extension().is_none() {
        out.push(".");
        out.push(kind.extension());
    }
    out
}

/// Finds all jpeg and png files directly inside `dir`, sorted by name. Whether a file is
/// an image is decided by its content.
pub fn discover(dir: impl AsRef<Path>) -> Result<Vec<Candidate>, ListError> {
    let dir = dir.as_ref();
    let mut paths: Vec<PathBuf> = fsutils::all_files([dir]).map_err(|source| ListError {
        dir: dir.to_path_buf(),
        source,
    })?;
    paths.sort();

    let candidates = paths
        .into_iter()
        .filter(|path| !path.is_dir())
        .filter(|path| path.file_name().is_some_and(|name| !is_ignored_name(name)))
        .filter_map(|path| match fsutils::read_head(&path, SNIFF_LEN) {
            Ok(head) => match ImageKind::sniff(&head) {
                Some(kind) => Some(Candidate { path, kind }),
                None => {
                    log::debug!("Skipping '{}', not a jpeg or png", path.display());
                    None
                }
            },
            Err(e) => {
                log::debug!("Skipping '{}', could not read it: {e}", path.display());
                None
            }
        })
        .collect();

    Ok(candidates)
}

/// Removes the border of the image at `path` and saves the result next to it. Returns
/// where it was saved.
pub fn process_file(conf: &BorderConf, path: &Path) -> Result<PathBuf, FileError> {
    let name = path.file_name().ok_or_else(|| {
        FileError::Read(io::Error::new(
            io::ErrorKind::InvalidInput,
            "the path does not refer to a file",
        ))
    })?;

    let bytes = fs::read(path).map_err(FileError::Read)?;
    let (img, kind) = codec::decode(&bytes)?;

    let mode = BackgroundMode::detect(conf, &img);
    let bounds = conf.content_bounds_in_mode(&img, mode);
    log::debug!(
        "'{}' is a {}x{} {kind} with background {mode}, the content is at {bounds}",
        path.display(),
        img.width(),
        img.height(),
    );

    if bounds.is_empty() {
        return Err(FileError::EmptyContent(mode));
    }

    let encoded = codec::encode(&bounds.crop(&img), kind)?;
    let out_path = path.with_file_name(output_name(name, kind));
    fs::write(&out_path, encoded).map_err(|source| FileError::Write {
        path: out_path.clone(),
        source,
    })?;

    Ok(out_path)
}

/// Pairs every candidate with the error to report instead of processing it, which is set
/// when an earlier candidate already has the same output path.
fn claim_outputs(candidates: Vec<Candidate>) -> Vec<(Candidate, Option<FileError>)> {
    let mut claimed: HashMap<PathBuf, PathBuf> = HashMap::new();
    candidates
        .into_iter()
        .map(|candidate| {
            let collision = candidate
                .output_path()
                .and_then(|out_path| match claimed.entry(out_path) {
                    Entry::Occupied(e) => Some(FileError::OutputCollision {
                        path: e.key().clone(),
                        taken_by: e.get().clone(),
                    }),
                    Entry::Vacant(e) => {
                        e.insert(candidate.path.clone());
                        None
                    }
                });
            (candidate, collision)
        })
        .collect()
}

enum Outcome {
    Done(PathBuf, Result<PathBuf, FileError>),
    NotStarted,
}

/// Processes all images in `dir` in parallel. Only a failure to list the directory is an
/// error, failures of individual images end up in the summary. No new images are started
/// once `should_stop` returns true. If several images would be saved to the same path,
/// only the first one by name is processed.
pub fn process_dir<F>(
    dir: impl AsRef<Path>,
    conf: &BorderConf,
    should_stop: F,
) -> Result<Summary, ListError>
where
    F: Fn() -> bool + Sync,
{
    let dir = dir.as_ref();
    log::info!("Finding images in: {}", dir.display());
    let candidates = discover(dir)?;
    log::info!("Found {} images", candidates.len());

    let outcomes: Vec<Outcome> = claim_outputs(candidates)
        .into_par_iter()
        .map(|(Candidate { path, kind }, collision)| {
            if should_stop() {
                return Outcome::NotStarted;
            }

            if let Some(e) = collision {
                log::error!("Not processing '{}': {e}", path.display());
                return Outcome::Done(path, Err(e));
            }

            log::info!("Processing: {} ({kind})", path.display());
            let result = process_file(conf, &path);
            match &result {
                Ok(out_path) => log::info!("Saved {}", out_path.display()),
                Err(e) => log::error!("Failed to process '{}': {e}", path.display()),
            }
            Outcome::Done(path, result)
        })
        .collect();

    let mut summary = Summary::default();
    for outcome in outcomes {
        match outcome {
            Outcome::Done(_, Ok(out_path)) => summary.written.push(out_path),
            Outcome::Done(path, Err(e)) => summary.failed.push((path, e)),
            Outcome::NotStarted => summary.not_started += 1,
        }
    }

    Ok(summary)
}
