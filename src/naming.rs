//! Filename convention for scene images.
//!
//! Scenes are named `<prefix>-NN.<ext>` where `NN` is a two-digit,
//! zero-padded index:
//!
//! ```text
//! scene-01.png
//! scene-02.png
//! ...
//! scene-10.png
//! ```
//!
//! The prefix, extension, and count are fixed. A cover image or anything else
//! in the directory is ignored because it never matches a generated name.

/// Filename prefix shared by every scene.
pub const SCENE_PREFIX: &str = "scene";

/// Extension of every scene file (input and output).
pub const SCENE_EXTENSION: &str = "png";

/// Number of scenes; indices run `1..=SCENE_COUNT`.
pub const SCENE_COUNT: u32 = 10;

/// A scene index paired with its expected filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneName {
    pub index: u32,
    pub filename: String,
}

/// Build the filename for a 1-based scene index.
///
/// ```
/// # use scene_pad::naming::scene_filename;
/// assert_eq!(scene_filename(1), "scene-01.png");
/// assert_eq!(scene_filename(10), "scene-10.png");
/// ```
pub fn scene_filename(index: u32) -> String {
    format!("{SCENE_PREFIX}-{index:02}.{SCENE_EXTENSION}")
}

/// Every expected scene name, in processing order.
pub fn scene_names() -> impl Iterator<Item = SceneName> {
    (1..=SCENE_COUNT).map(|index| SceneName {
        index,
        filename: scene_filename(index),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_digit_index_is_zero_padded() {
        assert_eq!(scene_filename(5), "scene-05.png");
    }

    #[test]
    fn two_digit_index_is_not_padded_further() {
        assert_eq!(scene_filename(10), "scene-10.png");
    }

    #[test]
    fn names_cover_one_through_ten_in_order() {
        let names: Vec<SceneName> = scene_names().collect();
        assert_eq!(names.len(), 10);
        assert_eq!(names[0].index, 1);
        assert_eq!(names[0].filename, "scene-01.png");
        assert_eq!(names[9].index, 10);
        assert_eq!(names[9].filename, "scene-10.png");
        assert!(names.windows(2).all(|w| w[0].index + 1 == w[1].index));
    }

    #[test]
    fn cover_is_never_generated() {
        assert!(scene_names().all(|n| n.filename != "cover.png"));
    }
}
