//! Document content types.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// The file format of a document submitted with `BatchPutDocument`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentType {
    /// Portable Document Format.
    Pdf,

    /// HTML page.
    Html,

    /// Microsoft Word document.
    MsWord,

    /// Plain text.
    PlainText,

    /// Microsoft PowerPoint presentation.
    Ppt,
}

super::impl_wire_enum!(ContentType);
