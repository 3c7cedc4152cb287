use std::ffi::OsStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    PNG,
    WebP,
}

impl ImageFormat {
    /// Get file extensions associated with this format
    pub fn extensions(&self) -> &[&str] {
        match self {
            Self::PNG => &["png"],
            Self::WebP => &["webp"],
        }
    }

    /// Get the primary extension for this format
    pub fn primary_extension(&self) -> &str {
        self.extensions()[0]
    }

    /// The primary extension with its leading dot, e.g. `.png`.
    pub fn suffix(&self) -> String {
        format!(".{}", self.primary_extension())
    }

    /// Check if a bare file name ends in this format's suffix.
    ///
    /// Case-sensitive: `cover.PNG` is not picked up as a PNG asset. Names
    /// need not be UTF-8, and a name that is only the suffix (`.png`) counts.
    pub fn matches_file_name(&self, name: &OsStr) -> bool {
        name.as_encoded_bytes().ends_with(self.suffix().as_bytes())
    }
}
