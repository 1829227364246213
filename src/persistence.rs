// File: src/persistence.rs
use crate::core::engine::NumeralEngine;
use crate::error::{Error, Result};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// True when both paths exist and resolve to the same file or directory.
pub fn is_same_path(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn parent_dir(path: &Path) -> &Path {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

/// Writes the converted lines of `input` to `output`.
///
/// When both name the same file the result goes to a temp file next to it
/// which then replaces the original, so a failed conversion never leaves a
/// half-written file behind.
pub fn convert_file(engine: &NumeralEngine, input: &Path, output: &Path) -> Result<()> {
    if !input.is_file() {
        return Err(Error::NotFound(input.to_path_buf()));
    }
    let parent = parent_dir(output);
    if !parent.is_dir() && !output.is_file() {
        return Err(Error::MissingParent(output.to_path_buf()));
    }

    let reader = BufReader::new(File::open(input).map_err(|e| Error::io(input, e))?);

    if is_same_path(input, output) {
        let temp_file = NamedTempFile::new_in(parent).map_err(|e| Error::io(parent, e))?;
        let mut writer = BufWriter::new(&temp_file);
        convert_lines(engine, input, reader, &mut writer)?;
        writer.flush().map_err(|e| Error::io(temp_file.path(), e))?;
        drop(writer);

        temp_file
            .persist(input)
            .map_err(|e| Error::io(input, e.error))?;
        info!(path = %input.display(), "replaced file contents");
    } else {
        let file = File::create(output).map_err(|e| Error::io(output, e))?;
        let mut writer = BufWriter::new(file);
        convert_lines(engine, input, reader, &mut writer)?;
        writer.flush().map_err(|e| Error::io(output, e))?;
        info!(input = %input.display(), output = %output.display(), "converted file");
    }
    Ok(())
}

fn convert_lines<R: BufRead, W: Write>(
    engine: &NumeralEngine,
    path: &Path,
    reader: R,
    writer: &mut W,
) -> Result<()> {
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| Error::io(path, e))?;
        let converted = if line.trim().is_empty() {
            String::new()
        } else {
            engine
                .convert_sentence(&line)
                .map_err(|source| Error::Conversion {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    source,
                })?
        };
        writeln!(writer, "{converted}").map_err(|e| Error::io(path, e))?;
    }
    Ok(())
}

/// Converts every file directly inside `dir` whose name ends with
/// `extension`, writing each under the same name into `out_dir`.
pub fn convert_directory(
    engine: &NumeralEngine,
    dir: &Path,
    out_dir: &Path,
    extension: &str,
) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        let matches = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(extension));
        if matches && path.is_file() {
            files.push(path);
        }
    }
    if files.is_empty() {
        return Err(Error::EmptyDirectory {
            dir: dir.to_path_buf(),
            extension: extension.to_string(),
        });
    }
    files.sort();

    if !out_dir.exists() {
        fs::create_dir_all(out_dir).map_err(|e| Error::io(out_dir, e))?;
    }
    if !out_dir.is_dir() {
        return Err(Error::OutputNotDirectory(out_dir.to_path_buf()));
    }

    let mut written = Vec::with_capacity(files.len());
    for file in &files {
        // file_name is always present for read_dir entries
        let Some(name) = file.file_name() else { continue };
        let target = out_dir.join(name);
        debug!(file = %file.display(), "converting");
        convert_file(engine, file, &target)?;
        written.push(target);
    }
    Ok(written)
}
