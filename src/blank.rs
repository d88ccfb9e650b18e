//! Placing the selected word into a blank.

use wasm_bindgen::JsValue;

use crate::config::InteractionConfig;
use crate::host::Host;
use crate::query;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Reload at `href`, which carries `word` and the blank index.
    Navigate { word: String, href: String },
    /// No word is selected; the player has to pick one first.
    SelectWordFirst,
}

/// Decide what a click on blank `index` does given the current `search`.
pub fn plan_placement(
    search: &str,
    pathname: &str,
    index: &str,
    now_ms: u64,
    cfg: &InteractionConfig,
) -> Placement {
    let word = match query::get_param(search, &cfg.selected_word_param) {
        Some(word) if !word.is_empty() => word,
        _ => return Placement::SelectWordFirst,
    };
    let stamp = now_ms.to_string();
    let href = query::placement_href(
        pathname,
        [
            (cfg.selected_word_param.as_str(), word.as_str()),
            (cfg.blank_index_param.as_str(), index),
            (cfg.cache_buster_param.as_str(), stamp.as_str()),
        ],
    );
    Placement::Navigate { word, href }
}

/// Navigate with the selection for blank `index`, or prompt for a word.
pub fn handle_blank_space_click<H: Host>(
    host: &H,
    index: &str,
    cfg: &InteractionConfig,
) -> Result<(), JsValue> {
    log::info!("blank clicked: {index}");
    let search = host.search()?;
    let pathname = host.pathname()?;
    match plan_placement(&search, &pathname, index, host.now_ms(), cfg) {
        Placement::Navigate { word, href } => {
            log::info!("placing word={word} at index={index}");
            host.navigate(&href)
        }
        Placement::SelectWordFirst => crate::toast::show_toast(host, &cfg.select_word_prompt, cfg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_word_navigates_with_fresh_query() {
        let cfg = InteractionConfig::default();
        let plan = plan_placement(
            "?selected_word=cat&blank_index=1&theme=dark",
            "/play",
            "3",
            1_700_000_000_123,
            &cfg,
        );
        assert_eq!(
            plan,
            Placement::Navigate {
                word: "cat".into(),
                href: "/play?selected_word=cat&blank_index=3&_=1700000000123".into(),
            }
        );
    }

    #[test]
    fn missing_or_empty_word_prompts() {
        let cfg = InteractionConfig::default();
        for search in ["", "?blank_index=2", "?selected_word="] {
            assert_eq!(
                plan_placement(search, "/", "2", 1, &cfg),
                Placement::SelectWordFirst,
                "search {search:?}"
            );
        }
    }

    #[test]
    fn word_is_reencoded() {
        let cfg = InteractionConfig::default();
        let Placement::Navigate { word, href } =
            plan_placement("?selected_word=s%C3%A3o+paulo", "/", "0", 5, &cfg)
        else {
            panic!("expected navigation");
        };
        assert_eq!(word, "são paulo");
        assert_eq!(href, "/?selected_word=s%C3%A3o+paulo&blank_index=0&_=5");
    }
}
