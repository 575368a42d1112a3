use url::form_urlencoded;

pub const GAME_INDEX_FIELD: &str = "game_index";

/// Every `game_index` value in a urlencoded form body, in submission order.
pub fn selected_indices(body: &[u8]) -> Vec<String> {
    form_urlencoded::parse(body)
        .filter(|(key, _)| key == GAME_INDEX_FIELD)
        .map(|(_, value)| value.into_owned())
        .collect()
}
