//! Classification of a click target: word button or blank drop target.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::config::InteractionConfig;

/// The slice of the DOM element API the click walk needs.
pub trait ClickTarget: Sized {
    fn tag_name(&self) -> String;
    /// Rendered label (`innerText`); `None` for non-HTML elements.
    fn label(&self) -> Option<String>;
    fn has_class(&self, class: &str) -> bool;
    fn attribute(&self, name: &str) -> Option<String>;
    fn parent(&self) -> Option<Self>;
}

impl ClickTarget for Element {
    fn tag_name(&self) -> String {
        Element::tag_name(self)
    }

    fn label(&self) -> Option<String> {
        self.dyn_ref::<HtmlElement>().map(HtmlElement::inner_text)
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn parent(&self) -> Option<Self> {
        self.parent_element()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickAction {
    /// A word button was clicked; carries the label without its marker.
    Word(String),
    /// A blank with a usable index was clicked.
    Blank(String),
    Ignore,
}

/// Word label if `target` is a word control, i.e. its tag matches and its label
/// contains the marker. The first `"<marker> "` is stripped.
pub fn word_label<T: ClickTarget>(target: &T, cfg: &InteractionConfig) -> Option<String> {
    if target.tag_name() != cfg.word_tag {
        return None;
    }
    let label = target.label()?;
    if !label.contains(cfg.word_marker.as_str()) {
        return None;
    }
    Some(label.replacen(&cfg.word_prefix(), "", 1))
}

/// Walk from `start` through its ancestors. The walk stops at the first element
/// carrying the blank class; its index is returned when present and non-empty.
pub fn blank_index<T: ClickTarget>(start: T, cfg: &InteractionConfig) -> Option<String> {
    let mut node = Some(start);
    while let Some(el) = node {
        if el.has_class(&cfg.blank_class) {
            return el
                .attribute(&cfg.index_attribute)
                .filter(|index| !index.is_empty());
        }
        node = el.parent();
    }
    None
}

/// Document-level dispatch: word controls first, otherwise the blank walk.
pub fn classify<T: ClickTarget>(target: T, cfg: &InteractionConfig) -> ClickAction {
    if let Some(word) = word_label(&target, cfg) {
        return ClickAction::Word(word);
    }
    blank_index(target, cfg).map_or(ClickAction::Ignore, ClickAction::Blank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    /// Minimal element tree: each node knows its parent.
    #[derive(Clone, Debug, Default)]
    struct FakeEl {
        tag: &'static str,
        text: Option<&'static str>,
        classes: Vec<&'static str>,
        attrs: Vec<(&'static str, &'static str)>,
        parent: Option<Rc<FakeEl>>,
    }

    impl ClickTarget for Rc<FakeEl> {
        fn tag_name(&self) -> String {
            self.tag.to_string()
        }
        fn label(&self) -> Option<String> {
            self.text.map(str::to_string)
        }
        fn has_class(&self, class: &str) -> bool {
            self.classes.iter().any(|c| *c == class)
        }
        fn attribute(&self, name: &str) -> Option<String> {
            self.attrs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
        fn parent(&self) -> Option<Self> {
            self.parent.clone()
        }
    }

    fn el(tag: &'static str, parent: Option<Rc<FakeEl>>) -> FakeEl {
        FakeEl { tag, parent, ..Default::default() }
    }

    fn blank(index: &'static str, parent: Option<Rc<FakeEl>>) -> Rc<FakeEl> {
        Rc::new(FakeEl {
            classes: vec!["blank-word"],
            attrs: vec![("data-index", index)],
            ..el("SPAN", parent)
        })
    }

    #[test]
    fn word_button_label_is_stripped() {
        let cfg = InteractionConfig::default();
        let btn = Rc::new(FakeEl { text: Some("👆 casa"), ..el("BUTTON", None) });
        assert_eq!(classify(btn, &cfg), ClickAction::Word("casa".into()));
    }

    #[test]
    fn only_first_marker_is_stripped() {
        let cfg = InteractionConfig::default();
        let btn = Rc::new(FakeEl { text: Some("👆 a 👆 b"), ..el("BUTTON", None) });
        assert_eq!(word_label(&btn, &cfg).as_deref(), Some("a 👆 b"));
    }

    #[test]
    fn buttons_without_marker_are_not_words() {
        let cfg = InteractionConfig::default();
        let btn = Rc::new(FakeEl { text: Some("Voltar"), ..el("BUTTON", None) });
        assert_eq!(word_label(&btn, &cfg), None);
        let div = Rc::new(FakeEl { text: Some("👆 casa"), ..el("DIV", None) });
        assert_eq!(word_label(&div, &cfg), None);
    }

    #[test]
    fn blank_found_through_ancestors() {
        let cfg = InteractionConfig::default();
        let root = Rc::new(el("DIV", None));
        let b = blank("4", Some(root));
        let inner = Rc::new(el("EM", Some(Rc::new(el("B", Some(b))))));
        assert_eq!(classify(inner, &cfg), ClickAction::Blank("4".into()));
    }

    #[test]
    fn closest_blank_wins() {
        let cfg = InteractionConfig::default();
        let outer = blank("1", None);
        let inner = blank("2", Some(outer));
        let target = Rc::new(el("I", Some(inner)));
        assert_eq!(blank_index(target, &cfg).as_deref(), Some("2"));
    }

    #[test]
    fn walk_stops_at_blank_with_empty_index() {
        let cfg = InteractionConfig::default();
        let outer = blank("1", None);
        let inner = blank("", Some(outer));
        assert_eq!(classify(inner, &cfg), ClickAction::Ignore);
    }

    #[test]
    fn blank_without_index_attribute_is_ignored() {
        let cfg = InteractionConfig::default();
        let b = Rc::new(FakeEl { classes: vec!["blank-word"], ..el("SPAN", None) });
        assert_eq!(classify(b, &cfg), ClickAction::Ignore);
    }

    #[test]
    fn word_button_inside_blank_only_logs_word() {
        let cfg = InteractionConfig::default();
        let b = blank("4", None);
        let btn = Rc::new(FakeEl { text: Some("👆 cat"), ..el("BUTTON", Some(b)) });
        assert_eq!(classify(btn.clone(), &cfg), ClickAction::Word("cat".into()));
        assert_eq!(blank_index(btn, &cfg).as_deref(), Some("4"));
    }

    #[test]
    fn no_blank_ancestor_is_ignored() {
        let cfg = InteractionConfig::default();
        let root = Rc::new(FakeEl { attrs: vec![("data-index", "9")], ..el("HTML", None) });
        let target = Rc::new(el("P", Some(root)));
        assert_eq!(classify(target, &cfg), ClickAction::Ignore);
    }
}
