use serde_json::{Map, Value};

use super::model::{FilterOption, FilterSelection};

// ---------------------------------------------------------------------------
// Derived view over a fetched response
// ---------------------------------------------------------------------------

/// Build the filtered view of `response` for the selected options.
///
/// Keys appear in display order and only for selected options:
/// * `alphabets` / `numbers` are copied verbatim when the response has that
///   key (a `null` stays `null`); a missing key is left out.
/// * `highest_lowercase_alphabet` is always present when selected: a
///   one-element array holding the highest lowercase entry of
///   `response.alphabets`, or `[]`.
///
/// Nothing selected yields `{}`.
pub fn filtered_response(response: &Value, selection: &FilterSelection) -> Value {
    let mut out = Map::new();

    for option in selection.iter() {
        let key = option.output_key();
        match option {
            FilterOption::Alphabets | FilterOption::Numbers => {
                if let Some(v) = response.get(key) {
                    out.insert(key.to_string(), v.clone());
                }
            }
            FilterOption::HighestLowercase => {
                let highest = response
                    .get("alphabets")
                    .and_then(Value::as_array)
                    .and_then(|alphabets| highest_lowercase(alphabets));
                let arr = highest.map(Value::String).into_iter().collect();
                out.insert(key.to_string(), Value::Array(arr));
            }
        }
    }

    Value::Object(out)
}

/// Highest entry of `alphabets` that is already lowercase.
///
/// Strings compare by UTF-16 code units, so characters above U+FFFF sort
/// below U+E000..=U+FFFF. Non-string entries are skipped.
pub fn highest_lowercase(alphabets: &[Value]) -> Option<String> {
    alphabets
        .iter()
        .filter_map(Value::as_str)
        .filter(|s| *s == s.to_lowercase())
        .max_by(|a, b| a.encode_utf16().cmp(b.encode_utf16()))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn select(options: &[FilterOption]) -> FilterSelection {
        options.iter().copied().collect()
    }

    fn sample_response() -> Value {
        json!({
            "is_success": true,
            "user_id": "john_doe_17091999",
            "numbers": ["1", "33", "4"],
            "alphabets": ["M", "B", "z", "A", "c"]
        })
    }

    #[test]
    fn nothing_selected_is_empty_object() {
        let out = filtered_response(&sample_response(), &FilterSelection::default());
        assert_eq!(out, json!({}));
    }

    #[test]
    fn all_selected_in_display_order() {
        let sel = select(&[
            FilterOption::HighestLowercase,
            FilterOption::Numbers,
            FilterOption::Alphabets,
        ]);
        let out = filtered_response(&sample_response(), &sel);
        assert_eq!(
            out,
            json!({
                "alphabets": ["M", "B", "z", "A", "c"],
                "numbers": ["1", "33", "4"],
                "highest_lowercase_alphabet": ["z"]
            })
        );

        let keys: Vec<_> = out.as_object().unwrap().keys().cloned().collect();
        assert_eq!(
            keys,
            vec!["alphabets", "numbers", "highest_lowercase_alphabet"]
        );
    }

    #[test]
    fn missing_key_is_omitted_but_null_is_kept() {
        let response = json!({ "alphabets": null });
        let out = filtered_response(
            &response,
            &select(&[FilterOption::Alphabets, FilterOption::Numbers]),
        );
        assert_eq!(out, json!({ "alphabets": null }));
    }

    #[test]
    fn highest_lowercase_without_alphabets_is_empty() {
        let sel = select(&[FilterOption::HighestLowercase]);
        for response in [
            json!({}),
            json!({ "alphabets": null }),
            json!({ "alphabets": [] }),
            json!({ "alphabets": "abc" }),
            json!({ "alphabets": ["A", "B"] }),
            json!(["a"]),
        ] {
            assert_eq!(
                filtered_response(&response, &sel),
                json!({ "highest_lowercase_alphabet": [] }),
                "{response}"
            );
        }
    }

    #[test]
    fn highest_lowercase_picks_max_of_lowercase() {
        let alphabets = vec![json!("a"), json!("Z"), json!("m"), json!("b")];
        assert_eq!(highest_lowercase(&alphabets).as_deref(), Some("m"));
    }

    #[test]
    fn highest_lowercase_orders_by_utf16_units() {
        // U+1F600 is a surrogate pair (0xD83D ..), below U+FF5A in UTF-16.
        let alphabets = vec![json!("\u{1F600}"), json!("\u{FF5A}"), json!("a")];
        assert_eq!(highest_lowercase(&alphabets).as_deref(), Some("\u{FF5A}"));
    }

    #[test]
    fn highest_lowercase_skips_non_strings() {
        let alphabets = vec![json!(1), json!("d"), json!(null), json!({"x": "z"})];
        assert_eq!(highest_lowercase(&alphabets).as_deref(), Some("d"));
    }
}
