use regex::Regex;
use std::io::{self, Write};
use std::sync::LazyLock;

static FONT_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[font=[^\]]+\]").expect("Invalid font tag regex"));
static COLOR_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[color=#([0-9A-Fa-f]{6,8})\]").expect("Invalid color tag regex")
});

const FONT_CLOSE: &str = "[/font]";
const COLOR_MARKER: &str = "[color=";
const COLOR_CLOSE: &str = "[/color]";
const RESET: &str = "\x1b[0m";

/// Colour tag whose body holds no other opening colour tag.
struct InnermostTag {
    start: usize,
    end: usize,
    body_start: usize,
    body_end: usize,
    rgb: u32,
}

/// Renders rich-text markup as a line of ANSI truecolour text.
///
/// `[font=..]` wrappers are dropped. `[color=#RRGGBB]..[/color]` (or `#AARRGGBB`,
/// alpha ignored) becomes a 24-bit foreground escape, innermost tags first so
/// nesting works. Tags without a matching close are kept verbatim.
#[must_use]
pub fn render(markup: &str) -> String {
    let mut text = FONT_OPEN.replace_all(markup, "").replace(FONT_CLOSE, "");

    while let Some(tag) = find_innermost(&text) {
        let r = (tag.rgb >> 16) & 0xff;
        let g = (tag.rgb >> 8) & 0xff;
        let b = tag.rgb & 0xff;
        let colored =
            format!("\x1b[38;2;{r};{g};{b}m{}{RESET}", &text[tag.body_start..tag.body_end]);
        text.replace_range(tag.start..tag.end, &colored);
    }

    text
}

/// Writes the rendered markup followed by a newline.
///
/// # Errors
/// Propagates write failures of `out`.
pub fn write_rendered<W: Write + ?Sized>(out: &mut W, markup: &str) -> io::Result<()> {
    writeln!(out, "{}", render(markup))
}

/// Prints the rendered markup to stdout.
///
/// # Errors
/// Returns an error if stdout is closed.
pub fn print(markup: &str) -> io::Result<()> {
    write_rendered(&mut io::stdout().lock(), markup)
}

fn find_innermost(text: &str) -> Option<InnermostTag> {
    for open in COLOR_OPEN.captures_iter(text) {
        let (tag, hex) = (open.get(0)?, open.get(1)?);
        let rest = &text[tag.end()..];
        let close = rest.find(COLOR_CLOSE)?;
        if rest[..close].contains(COLOR_MARKER) {
            continue;
        }

        let hex = hex.as_str();
        let rgb = u32::from_str_radix(&hex[hex.len() - 6..], 16).ok()?;
        return Some(InnermostTag {
            start: tag.start(),
            end: tag.end() + close + COLOR_CLOSE.len(),
            body_start: tag.end(),
            body_end: tag.end() + close,
            rgb,
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_digit_colors_drop_alpha() {
        assert_eq!(render("[color=#80FF0000]x[/color]"), "\x1b[38;2;255;0;0mx\x1b[0m");
    }

    #[test]
    fn unknown_tags_are_untouched() {
        let markup = "[item=iron-plate] [color=red]x[/color]";
        assert_eq!(render(markup), markup);
    }

    #[test]
    fn write_rendered_appends_newline() {
        let mut out = Vec::new();
        write_rendered(&mut out, "").unwrap();
        assert_eq!(out, b"\n");
    }
}
