//! Markup and timing constants shared by the listeners, the blank handler and the
//! toast. Everything the page markup or the server contract names lives here so a
//! host page can override it (feature `serde_json`, see [`crate::configure`]).

use std::cell::RefCell;
use std::rc::Rc;

/// Interaction settings. `Default` matches the markup the game server renders.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InteractionConfig {
    /// Class carried by blank drop targets.
    pub blank_class: String,
    /// Attribute on a blank holding its index.
    pub index_attribute: String,
    /// Tag name (upper case, as `Element.tagName` reports it) of word controls.
    pub word_tag: String,
    /// Glyph prefixed to every word label, followed by one space.
    pub word_marker: String,
    /// Toast shown when a blank is clicked with no word selected.
    pub select_word_prompt: String,
    pub toast_class: String,
    pub toast_visible_class: String,
    pub toast_show_delay_ms: u32,
    pub toast_visible_ms: u32,
    /// Matches the CSS opacity transition.
    pub toast_fade_ms: u32,
    pub selected_word_param: String,
    pub blank_index_param: String,
    pub cache_buster_param: String,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            blank_class: "blank-word".into(),
            index_attribute: "data-index".into(),
            word_tag: "BUTTON".into(),
            word_marker: "👆".into(),
            select_word_prompt: "Selecione uma palavra primeiro!".into(),
            toast_class: "game-toast".into(),
            toast_visible_class: "show".into(),
            toast_show_delay_ms: 10,
            toast_visible_ms: 3_000,
            toast_fade_ms: 300,
            selected_word_param: "selected_word".into(),
            blank_index_param: "blank_index".into(),
            cache_buster_param: "_".into(),
        }
    }
}

impl InteractionConfig {
    /// Parse a (possibly partial) JSON object; absent fields keep their defaults.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Label prefix stripped from word buttons: the marker plus one space.
    pub fn word_prefix(&self) -> String {
        format!("{} ", self.word_marker)
    }
}

thread_local! {
    static ACTIVE: RefCell<Rc<InteractionConfig>> = RefCell::new(Rc::new(InteractionConfig::default()));
}

/// Shared snapshot of the active configuration; later `replace` calls do not
/// affect snapshots already handed out.
pub fn current() -> Rc<InteractionConfig> {
    ACTIVE.with(|c| Rc::clone(&c.borrow()))
}

pub fn replace(config: InteractionConfig) {
    ACTIVE.with(|c| *c.borrow_mut() = Rc::new(config));
}
