use std::path::Path;

use lofty::picture::PictureType;
use lofty::prelude::*;
use lofty::tag::Tag;
use tracing::warn;

use super::model::Metadata;

/// Read tags and cover art from `path`.
///
/// Total function: any failure (unreadable file, unsupported or corrupt
/// tags, missing picture frame) degrades to empty fields rather than an
/// error, so a single bad file can never poison a whole ingestion batch.
pub fn extract(path: &Path) -> Metadata {
    let tagged = match lofty::read_from_path(path) {
        Ok(t) => t,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read tags");
            return Metadata::default();
        }
    };

    let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) else {
        return Metadata::default();
    };

    Metadata {
        title: text_field(tag.title()),
        artist: text_field(tag.artist()),
        album: text_field(tag.album()),
        genre: text_field(tag.genre()),
        year: tag.year().map(|y| y.to_string()).unwrap_or_default(),
        cover: cover_from_tag(tag),
    }
}

fn text_field(value: Option<std::borrow::Cow<'_, str>>) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_default()
}

/// Pick an embedded picture, preferring the front cover over whatever
/// other frames the tag carries (back cover, band photos, ...).
fn cover_from_tag(tag: &Tag) -> Option<Vec<u8>> {
    let pictures = tag.pictures();
    pictures
        .iter()
        .find(|p| p.pic_type() == PictureType::CoverFront)
        .or_else(|| pictures.first())
        .map(|p| p.data().to_vec())
}
