use std::{
    fs::{self, File},
    io::{self, Read},
    path::{Path, PathBuf},
};

/// Collects all files in the given directories, does not walk them recursively.
pub fn all_files<R>(folders: impl IntoIterator<Item = impl AsRef<Path>>) -> io::Result<R>
where
    R: FromIterator<PathBuf>,
{
    let iters: Result<Vec<_>, _> =
        folders.into_iter().map(|path| fs::read_dir(path)).collect();

    iters?
        .into_iter()
        .flatten()
        .map(|entry| entry.map(|entry| entry.path()))
        .collect()
}

/// Reads at most `limit` bytes from the beginning of the file
pub fn read_head(path: impl AsRef<Path>, limit: u64) -> io::Result<Vec<u8>> {
    let mut head = Vec::new();
    File::open(path)?.take(limit).read_to_end(&mut head)?;
    Ok(head)
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn head_of_file() -> io::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("file");
        fs::write(&path, [7_u8; 1000])?;

        assert_eq!(vec![7; 512], read_head(&path, 512)?);
        assert_eq!(vec![7; 1000], read_head(&path, 5000)?);

        fs::write(&path, [])?;
        assert!(read_head(&path, 512)?.is_empty());

        assert!(read_head(dir.path().join("missing"), 512).is_err());
        Ok(())
    }

    #[test]
    fn files_in_dir() -> io::Result<()> {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("a"), "a")?;
        fs::create_dir(dir.path().join("sub"))?;
        fs::write(dir.path().join("sub").join("b"), "b")?;

        let files: HashSet<PathBuf> = all_files([dir.path()])?;
        let expected: HashSet<PathBuf> =
            [dir.path().join("a"), dir.path().join("sub")].into();
        assert_eq!(expected, files);

        assert!(all_files::<Vec<_>>([dir.path().join("missing")]).is_err());
        Ok(())
    }
}
