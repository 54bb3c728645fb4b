use fprog_markup::{render, write_rendered};

const RESET: &str = "\x1b[0m";

fn rendered_line(markup: &str) -> String {
    let mut out = Vec::new();
    write_rendered(&mut out, markup).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn progress_bar_text() {
    assert_eq!(
        render("[font=technology-slot-level-font]████▍[color=#00000000]█████0[/color][/font]  43.8%"),
        format!("████▍\x1b[38;2;0;0;0m█████0{RESET}  43.8%")
    );
}

#[test]
fn nested_colors_and_fonts() {
    assert_eq!(
        render(
            "[font=Arial]Plain [color=#FF0000]Red [color=#00FF00]Green Text[/color] Red Again[/color] Plain Again[/font] And text outside all tags."
        ),
        format!(
            "Plain \x1b[38;2;255;0;0mRed \x1b[38;2;0;255;0mGreen Text{RESET} Red Again{RESET} Plain Again And text outside all tags."
        )
    );
}

#[test]
fn several_font_and_color_tags() {
    assert_eq!(
        render(
            "[font=Impact][color=#0000FF]Blue Text[/color][/font] then [font=Courier]Monospace Text[/font] and [color=#FFA500]Orange[/color]."
        ),
        format!(
            "\x1b[38;2;0;0;255mBlue Text{RESET} then Monospace Text and \x1b[38;2;255;165;0mOrange{RESET}."
        )
    );
}

#[test]
fn font_inside_color_is_stripped() {
    assert_eq!(
        render("[color=#FF0000]This is Red [font=ComicSansMS]Font Stripped[/font] still Red[/color]"),
        format!("\x1b[38;2;255;0;0mThis is Red Font Stripped still Red{RESET}")
    );
    assert_eq!(
        render("[color=#112233]Colored [font=Impact]Stripped Font[/font] still colored[/color]"),
        format!("\x1b[38;2;17;34;51mColored Stripped Font still colored{RESET}")
    );
}

#[test]
fn unclosed_color_is_kept() {
    assert_eq!(
        render("[font=UnclosedFont]Text [color=#00FFFF]Cyan text"),
        "Text [color=#00FFFF]Cyan text"
    );
    assert_eq!(
        render("[color=#FF0000]Outer [color=#00FF00]Inner unclosed GTAG RTAG"),
        "[color=#FF0000]Outer [color=#00FF00]Inner unclosed GTAG RTAG"
    );
}

#[test]
fn empty_color_body() {
    assert_eq!(
        render("[font=Test]Before [color=#123456][/color] After[/font]"),
        format!("Before \x1b[38;2;18;52;86m{RESET} After")
    );
}

#[test]
fn plain_and_font_only_text() {
    assert_eq!(render("Just plain text."), "Just plain text.");
    assert_eq!(render("[font=Test]Text inside font[/font]"), "Text inside font");
}

#[test]
fn color_only_text() {
    assert_eq!(
        render("Leading [color=#ABCDEF]Colored[/color] Trailing"),
        format!("Leading \x1b[38;2;171;205;239mColored{RESET} Trailing")
    );
}

#[test]
fn deeply_nested_colors() {
    assert_eq!(
        render("[color=#FF0000]R [color=#00FF00]G [color=#0000FF]B[/color] G[/color] R[/color]"),
        format!(
            "\x1b[38;2;255;0;0mR \x1b[38;2;0;255;0mG \x1b[38;2;0;0;255mB{RESET} G{RESET} R{RESET}"
        )
    );
}

#[test]
fn stray_close_tag_is_left_over() {
    assert_eq!(
        render("[color=#FF0000]Red text with a stray [/color] inside[/color]"),
        format!("\x1b[38;2;255;0;0mRed text with a stray {RESET} inside[/color]")
    );
}

#[test]
fn written_line_ends_with_newline() {
    assert_eq!(rendered_line(""), "\n");
    assert_eq!(rendered_line("[font=x]ok[/font]"), "ok\n");
}
