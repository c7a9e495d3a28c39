//! Component naming from icon file names.

use std::path::Path;

/// Derive the component name for an icon file.
///
/// `prefix` + TitleCase(stem) + `postfix`, where the stem is the file name with
/// its `.svg` suffix removed.
///
/// # Examples
///
/// - `time-fast.svg` → `TimeFast`
/// - `arrow_left.svg` with prefix `Icon` → `IconArrowLeft`
pub fn component_name(path: &Path, prefix: &str, postfix: &str) -> String {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = strip_svg_suffix(&file_name);

    format!("{prefix}{}{postfix}", title_case(stem))
}

fn strip_svg_suffix(file_name: &str) -> &str {
    let len = file_name.len();
    if len > 4 && file_name.is_char_boundary(len - 4) && file_name[len - 4..].eq_ignore_ascii_case(".svg")
    {
        &file_name[..len - 4]
    } else {
        file_name
    }
}

/// Capitalize each word and join them: `time-fast` → `TimeFast`.
///
/// Only the first letter of a word changes; the rest keeps its case.
pub fn title_case(text: &str) -> String {
    words(text)
        .into_iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// `TimeFast` → `time-fast`, used as the id prefix for minification.
pub fn kebab_case(text: &str) -> String {
    words(text)
        .into_iter()
        .map(|word| word.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// Whether `name` can be used as a JS identifier (`24Clock` cannot).
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_' || first == '$')
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '$')
}

/// Split into ASCII words on separators, lower→upper transitions and
/// letter/digit boundaries: `icon2x` → `icon`, `2`, `x`.
fn words(text: &str) -> Vec<String> {
    let ascii = deunicode::deunicode(text);
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;

    for ch in ascii.chars() {
        if !ch.is_ascii_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev = None;
            continue;
        }

        let boundary = prev.is_some_and(|prev| {
            (prev.is_ascii_lowercase() && ch.is_ascii_uppercase())
                || prev.is_ascii_digit() != ch.is_ascii_digit()
        });
        if boundary && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }

        prev = Some(ch);
        current.push(ch);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_name() {
        assert_eq!(component_name(Path::new("icons/time-fast.svg"), "", ""), "TimeFast");
        assert_eq!(
            component_name(Path::new("arrow_left.svg"), "Icon", ""),
            "IconArrowLeft"
        );
        assert_eq!(
            component_name(Path::new("a/b/close.svg"), "", "Icon"),
            "CloseIcon"
        );
        assert_eq!(component_name(Path::new("LOGO.SVG"), "", ""), "LOGO");
    }

    #[test]
    fn test_component_name_keeps_inner_case() {
        assert_eq!(component_name(Path::new("myIcon.svg"), "", ""), "MyIcon");
        assert_eq!(component_name(Path::new("24px-clock.svg"), "", ""), "24PxClock");
    }

    #[test]
    fn test_component_name_splits_digits() {
        assert_eq!(component_name(Path::new("icon2x.svg"), "", ""), "Icon2X");
        assert_eq!(component_name(Path::new("h1-title.svg"), "", ""), "H1Title");
        assert_eq!(kebab_case("Icon2X"), "icon-2-x");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("TimeFast"));
        assert!(is_identifier("Icon2X"));
        assert!(!is_identifier("24PxClock"));
        assert!(!is_identifier(""));
    }

    #[test]
    fn test_component_name_transliterates() {
        assert_eq!(component_name(Path::new("café-cup.svg"), "", ""), "CafeCup");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("--foo  bar--"), "FooBar");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(kebab_case("TimeFast"), "time-fast");
        assert_eq!(kebab_case("IconArrowLeft"), "icon-arrow-left");
        assert_eq!(kebab_case("LOGO"), "logo");
    }
}
