//! URL builders. Editor and present-mode state lives in the query string.

use uuid::Uuid;

pub const PRESENTATIONS: &str = "/presentations";

pub fn editor(id: Uuid, slide: usize) -> String {
    format!("/presentations/{id}?slide={slide}")
}

pub fn editor_editing(id: Uuid, slide: usize, block: usize) -> String {
    format!("/presentations/{id}?slide={slide}&editing={block}")
}

pub fn editor_with_focus(id: Uuid, slide: usize, block: Option<usize>) -> String {
    match block {
        Some(block) => editor_editing(id, slide, block),
        None => editor(id, slide),
    }
}

pub fn editor_settings(id: Uuid, slide: usize) -> String {
    format!("/presentations/{id}?slide={slide}&settings=true")
}

pub fn slide_action(id: Uuid, slide_id: Uuid) -> String {
    format!("/presentations/{id}/slides/{slide_id}")
}

pub fn delete_slide(id: Uuid, slide_id: Uuid, selected: usize) -> String {
    format!("{}/delete?slide={selected}", slide_action(id, slide_id))
}

pub fn present(id: Uuid, slide: usize, notes: bool) -> String {
    format!("/presentations/{id}/present?slide={slide}&notes={notes}")
}

pub fn present_key(id: Uuid, slide: usize, notes: bool, key: &str) -> String {
    format!("{}&key={}", present(id, slide, notes), encode_key(key))
}

fn encode_key(key: &str) -> String {
    match key {
        " " => "%20".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_state_urls() {
        let id = Uuid::nil();
        assert_eq!(
            editor_with_focus(id, 2, Some(1)),
            "/presentations/00000000-0000-0000-0000-000000000000?slide=2&editing=1"
        );
        assert_eq!(
            present_key(id, 0, true, "ArrowRight"),
            "/presentations/00000000-0000-0000-0000-000000000000/present?slide=0&notes=true&key=ArrowRight"
        );
        assert!(present_key(id, 0, false, " ").ends_with("&key=%20"));
        assert_eq!(
            delete_slide(id, id, 3),
            "/presentations/00000000-0000-0000-0000-000000000000/slides/00000000-0000-0000-0000-000000000000/delete?slide=3"
        );
    }
}
