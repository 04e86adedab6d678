// NOTE: every test will complain about the functions it doesn't use
#![allow(unused)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use image::{DynamicImage, Rgb, RgbImage};
use tempfile::TempDir;
use unborder_common::{
    borders::Bounds,
    codec::{self, ImageKind},
    utils::imgutils::{filled, paint},
};

/// Returns a temporary directory inside cargo's tmpdir
pub fn tmp_dir() -> TempDir {
    tempfile::tempdir_in(cargo_tmpdir()).expect("could not create temporary dir")
}

/// Returns cargo's tmpdir
pub fn cargo_tmpdir() -> PathBuf {
    PathBuf::from(option_env!("CARGO_TARGET_TMPDIR").expect("no cargo tmpdir???"))
}

/// A square image of `background` with `content` painted in `color`
pub fn framed(size: u32, background: Rgb<u8>, content: Bounds, color: Rgb<u8>) -> RgbImage {
    let mut img = filled(size, size, background[0], background[1], background[2]);
    paint(&mut img, content, color);
    img
}

/// Saves the image in `dir` as `name`, encoded as `kind` regardless of the name
pub fn save(dir: &Path, name: &str, img: RgbImage, kind: ImageKind) -> PathBuf {
    let bytes = codec::encode(&DynamicImage::ImageRgb8(img), kind).expect("could not encode");
    let path = dir.join(name);
    fs::write(&path, bytes).expect("could not write image");
    path
}

/// Reads and decodes the image at `path`
pub fn load(path: &Path) -> (DynamicImage, ImageKind) {
    let bytes = fs::read(path).expect("could not read image");
    codec::decode(&bytes).expect("could not decode")
}

/// All file names in `dir` starting with `prefix`, sorted
pub fn names_with_prefix(dir: &Path, prefix: &str) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("could not read dir")
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .filter(|name| name.starts_with(prefix))
        .collect();
    names.sort();
    names
}
