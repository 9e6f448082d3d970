//! Slug formatting helpers.

/// Turns a kebab-case slug into a title: `lab-water-purification-system`
/// becomes `Lab Water Purification System`.
pub fn title_from_slug(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_from_slug() {
        assert_eq!(
            title_from_slug("lab-water-purification-system"),
            "Lab Water Purification System"
        );
        assert_eq!(
            title_from_slug("battery-fuel-cell-test-systems"),
            "Battery Fuel Cell Test Systems"
        );
    }

    #[test]
    fn test_title_ignores_repeated_dashes() {
        assert_eq!(title_from_slug("raman--spectroscopy-"), "Raman Spectroscopy");
        assert_eq!(title_from_slug(""), "");
    }
}
