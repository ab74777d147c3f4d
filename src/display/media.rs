//! Media display formatting
//!
//! Formats the draft's media sequence for terminal output.

use crate::models::MediaItem;

/// Format the media sequence as a table
pub fn format_media_list(items: &[MediaItem]) -> String {
    if items.is_empty() {
        return "No media attached. Use 'motorlot media add <files>' to attach photos.\n".to_string();
    }

    let name_width = items
        .iter()
        .map(|item| item.file_name().len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>3}  {:<12}  {:<name_width$}  {:<5}  {}\n",
        "#",
        "ID",
        "File",
        "Kind",
        "Cover",
        name_width = name_width,
    ));

    output.push_str(&format!(
        "{:->3}  {:-<12}  {:-<name_width$}  {:-<5}  {:-<5}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for item in items {
        output.push_str(&format!(
            "{:>3}  {:<12}  {:<name_width$}  {:<5}  {}\n",
            item.order,
            item.id.to_string(),
            item.file_name(),
            item.kind(),
            if item.is_cover { "*" } else { "" },
            name_width = name_width,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MediaId, PreviewHandle};
    use std::path::PathBuf;

    fn item(name: &str, order: u32, is_cover: bool) -> MediaItem {
        MediaItem {
            id: MediaId::new(),
            source: PathBuf::from(name),
            preview: PreviewHandle::new("preview://image/test"),
            is_video: name.ends_with(".mp4"),
            is_cover,
            order,
        }
    }

    #[test]
    fn test_empty_list() {
        let output = format_media_list(&[]);
        assert!(output.contains("No media attached"));
    }

    #[test]
    fn test_list_shows_cover_marker() {
        let items = vec![item("front.jpg", 0, true), item("tour.mp4", 1, false)];
        let output = format_media_list(&items);

        assert!(output.contains("front.jpg"));
        assert!(output.contains("tour.mp4"));
        assert!(output.contains("Video"));
        assert!(output.lines().nth(2).unwrap().contains('*'));
    }
}
