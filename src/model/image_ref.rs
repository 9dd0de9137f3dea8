//! Interpreting a product's image reference.

use std::path::{Path, PathBuf};

/// Where a product image lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    /// A file on disk.
    Local(PathBuf),
    /// A network URI. Never fetched.
    Remote(String),
    /// No image given.
    Missing,
}

impl ImageRef {
    /// Classify `uri`, resolving relative paths against `base_dir`.
    pub fn parse(uri: &str, base_dir: Option<&Path>) -> Self {
        let uri = uri.trim();
        if uri.is_empty() {
            return ImageRef::Missing;
        }
        if let Some(path) = uri.strip_prefix("file://") {
            return ImageRef::Local(PathBuf::from(path));
        }
        if has_scheme(uri) {
            return ImageRef::Remote(uri.to_string());
        }
        let path = Path::new(uri);
        match base_dir {
            Some(base) if path.is_relative() => ImageRef::Local(base.join(path)),
            _ => ImageRef::Local(path.to_path_buf()),
        }
    }
}

/// `scheme://...` with an RFC 3986 scheme. Windows drive letters don't qualify.
fn has_scheme(uri: &str) -> bool {
    let Some((scheme, _)) = uri.split_once("://") else {
        return false;
    };
    scheme.len() > 1
        && scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_uris() {
        assert_eq!(
            ImageRef::parse("https://example.com/p.jpg", None),
            ImageRef::Remote("https://example.com/p.jpg".to_string())
        );
        assert!(matches!(ImageRef::parse("s3://bucket/key", None), ImageRef::Remote(_)));
    }

    #[test]
    fn test_file_uri_and_paths() {
        assert_eq!(
            ImageRef::parse("file:///tmp/p.png", None),
            ImageRef::Local(PathBuf::from("/tmp/p.png"))
        );
        assert_eq!(
            ImageRef::parse("img/p.png", Some(Path::new("/data"))),
            ImageRef::Local(PathBuf::from("/data/img/p.png"))
        );
        assert_eq!(
            ImageRef::parse("p.png", None),
            ImageRef::Local(PathBuf::from("p.png"))
        );
    }

    #[test]
    fn test_blank_is_missing() {
        assert_eq!(ImageRef::parse("   ", None), ImageRef::Missing);
    }
}
