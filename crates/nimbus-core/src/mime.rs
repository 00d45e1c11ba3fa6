use crate::error::{Error, Result};
use std::path::Path;

pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

// Compound suffixes rewritten before lookup.
const SUFFIX_ALIASES: &[(&str, &str)] = &[
    (".svgz", ".svg.gz"),
    (".tgz", ".tar.gz"),
    (".taz", ".tar.gz"),
    (".tz", ".tar.gz"),
    (".tbz2", ".tar.bz2"),
    (".txz", ".tar.xz"),
];

const ENCODINGS: &[(&str, &str)] = &[
    (".gz", "gzip"),
    (".Z", "compress"),
    (".bz2", "bzip2"),
    (".xz", "xz"),
    (".br", "br"),
];

const CONTENT_TYPES: &[(&str, &str)] = &[
    (".avi", "video/x-msvideo"),
    (".bin", "application/octet-stream"),
    (".bmp", "image/bmp"),
    (".c", "text/plain"),
    (".css", "text/css"),
    (".csv", "text/csv"),
    (".deb", "application/vnd.debian.binary-package"),
    (".doc", "application/msword"),
    (".exe", "application/octet-stream"),
    (".gif", "image/gif"),
    (".h", "text/plain"),
    (".htm", "text/html"),
    (".html", "text/html"),
    (".ico", "image/vnd.microsoft.icon"),
    (".img", "application/octet-stream"),
    (".iso", "application/x-iso9660-image"),
    (".jpeg", "image/jpeg"),
    (".jpg", "image/jpeg"),
    (".js", "text/javascript"),
    (".json", "application/json"),
    (".md", "text/markdown"),
    (".mov", "video/quicktime"),
    (".mp3", "audio/mpeg"),
    (".mp4", "video/mp4"),
    (".ogg", "audio/ogg"),
    (".pdf", "application/pdf"),
    (".png", "image/png"),
    (".ppt", "application/vnd.ms-powerpoint"),
    (".py", "text/x-python"),
    (".qcow2", "application/octet-stream"),
    (".rtf", "application/rtf"),
    (".sh", "application/x-sh"),
    (".svg", "image/svg+xml"),
    (".tar", "application/x-tar"),
    (".tif", "image/tiff"),
    (".tiff", "image/tiff"),
    (".toml", "application/toml"),
    (".txt", "text/plain"),
    (".wav", "audio/x-wav"),
    (".webm", "video/webm"),
    (".webp", "image/webp"),
    (".xls", "application/vnd.ms-excel"),
    (".xml", "text/xml"),
    (".yaml", "application/yaml"),
    (".yml", "application/yaml"),
    (".zip", "application/zip"),
];

/// Guess the content type and encoding of a file from its name.
///
/// Unknown types fall back to `default_content_type`, unknown encodings to
/// `default_encoding`.
///
/// ```
/// use nimbus_core::guess_mime_type;
///
/// let (ctype, encoding) = guess_mime_type("backup.tgz", "application/octet-stream", None).unwrap();
/// assert_eq!(ctype, "application/x-tar");
/// assert_eq!(encoding.as_deref(), Some("gzip"));
/// ```
pub fn guess_mime_type(
    filename: &str,
    default_content_type: &str,
    default_encoding: Option<&str>,
) -> Result<(String, Option<String>)> {
    if filename.is_empty() {
        return Err(Error::EmptyFilename);
    }

    let file_name = Path::new(filename)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(filename);

    let mut name = file_name.to_string();
    while let Some((_, alias)) = SUFFIX_ALIASES
        .iter()
        .find(|(suffix, _)| *suffix == split_extension(&name).1)
    {
        name = format!("{}{}", split_extension(&name).0, alias);
    }

    let (stem, mut ext) = split_extension(&name);
    let mut encoding = None;
    if let Some((_, found)) = ENCODINGS.iter().find(|(suffix, _)| *suffix == ext) {
        encoding = Some(found.to_string());
        ext = split_extension(stem).1;
    }

    let content_type = lookup_content_type(ext)
        .or_else(|| lookup_content_type(&ext.to_lowercase()))
        .unwrap_or(default_content_type);

    tracing::debug!(filename, content_type, ?encoding, "guessed mime type");

    Ok((
        content_type.to_string(),
        encoding.or_else(|| default_encoding.map(str::to_string)),
    ))
}

fn lookup_content_type(ext: &str) -> Option<&'static str> {
    CONTENT_TYPES
        .iter()
        .find(|(suffix, _)| *suffix == ext)
        .map(|(_, ctype)| *ctype)
}

/// Split at the last dot. Leading dots belong to the stem, so `.bashrc`
/// has no extension.
fn split_extension(name: &str) -> (&str, &str) {
    let body_start = name.len() - name.trim_start_matches('.').len();
    match name[body_start..].rfind('.') {
        Some(pos) => name.split_at(body_start + pos),
        None => (name, ""),
    }
}
