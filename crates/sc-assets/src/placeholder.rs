//! Synthetic SVG images used when a real image is unavailable.

use std::path::Path;

/// Caption printed under the title on poster placeholders.
pub const POSTER_CAPTION: &str = "Series Companion";

/// Up to two uppercase initials from a name, or `?` if it has none.
///
/// "Walter White" gives "WW", "Mike Ehrmantraut Jr" gives "ME".
pub fn initials(name: &str) -> String {
    let out: String = name
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect();
    if out.is_empty() { "?".to_string() } else { out }
}

/// Derive a display name from an image path: `avatars/jon_snow.jpg`
/// becomes "Jon Snow".
pub fn name_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    stem.split(['_', ' '])
        .filter(|w| !w.is_empty())
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Scale a `#rrggbb` colour towards black. Anything unparseable is
/// returned unchanged.
pub fn darken(color: &str) -> String {
    let Some(hex) = color.strip_prefix('#').filter(|h| h.len() == 6) else {
        return color.to_string();
    };
    let Ok(rgb) = u32::from_str_radix(hex, 16) else {
        return color.to_string();
    };
    let channel = |shift: u32| ((rgb >> shift) & 0xff) * 3 / 5;
    format!("#{:02x}{:02x}{:02x}", channel(16), channel(8), channel(0))
}

/// Escape text for use inside SVG markup.
pub fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// A 100x100 circular avatar showing the name's initials.
pub fn avatar_svg(name: &str, color: &str) -> String {
    format!(
        concat!(
            r##"<svg width="100" height="100" xmlns="http://www.w3.org/2000/svg">"##,
            r##"<circle cx="50" cy="50" r="48" fill="{color}" stroke="#ffffff" stroke-width="2"/>"##,
            r##"<text x="50%" y="55%" font-family="Arial, sans-serif" font-size="40" font-weight="bold" "##,
            r##"fill="#ffffff" text-anchor="middle" dominant-baseline="middle">{initials}</text>"##,
            "</svg>"
        ),
        color = xml_escape(color),
        initials = xml_escape(&initials(name)),
    )
}

/// A 300x450 gradient poster with the title and caption.
pub fn poster_svg(title: &str, color: &str) -> String {
    format!(
        concat!(
            r##"<svg width="300" height="450" xmlns="http://www.w3.org/2000/svg">"##,
            r##"<defs><linearGradient id="bg" x1="0%" y1="0%" x2="100%" y2="100%">"##,
            r##"<stop offset="0%" stop-color="{start}"/>"##,
            r##"<stop offset="100%" stop-color="{end}"/>"##,
            "</linearGradient></defs>",
            r##"<rect width="100%" height="100%" fill="url(#bg)"/>"##,
            r##"<text x="50%" y="40%" font-family="Arial, sans-serif" font-size="24" font-weight="bold" "##,
            r##"fill="#ffffff" text-anchor="middle" dominant-baseline="middle">{title}</text>"##,
            r##"<rect x="20" y="380" width="260" height="2" fill="#ffffff" opacity="0.7"/>"##,
            r##"<text x="50%" y="90%" font-family="Arial, sans-serif" font-size="14" "##,
            r##"fill="#ffffff" text-anchor="middle" dominant-baseline="middle">{caption}</text>"##,
            "</svg>"
        ),
        start = xml_escape(color),
        end = xml_escape(&darken(color)),
        title = xml_escape(title),
        caption = POSTER_CAPTION,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_two_words() {
        assert_eq!(initials("Eleven"), "E");
        assert_eq!(initials("Walter White"), "WW");
        assert_eq!(initials("Mike Ehrmantraut Jr"), "ME");
        assert_eq!(initials("  jon   snow "), "JS");
        assert_eq!(initials(""), "?");
        assert_eq!(initials("   "), "?");
    }

    #[test]
    fn name_from_avatar_path() {
        assert_eq!(name_from_path(Path::new("avatars/jon_snow.jpg")), "Jon Snow");
        assert_eq!(name_from_path(Path::new("eleven.png")), "Eleven");
        assert_eq!(name_from_path(Path::new("")), "");
    }

    #[test]
    fn darken_scales_channels() {
        assert_eq!(darken("#3498DB"), "#1f5b83");
        assert_eq!(darken("#ffffff"), "#999999");
        assert_eq!(darken("teal"), "teal");
        assert_eq!(darken("#zzzzzz"), "#zzzzzz");
    }

    #[test]
    fn avatar_svg_shows_initials() {
        let svg = avatar_svg("Walter White", "#95A5A6");
        assert!(svg.starts_with(r#"<svg width="100" height="100""#));
        assert!(svg.contains(r##"r="48" fill="#95A5A6""##));
        assert!(svg.contains(">WW</text>"));
    }

    #[test]
    fn poster_svg_escapes_title() {
        let svg = poster_svg("Law & <Order>", "#3498DB");
        assert!(svg.contains(">Law &amp; &lt;Order&gt;</text>"));
        assert!(svg.contains(r##"stop-color="#1f5b83""##));
        assert!(svg.contains(POSTER_CAPTION));
    }
}
