//! End-to-end interpolation scenarios.

use std::collections::HashMap;

use serde_json::json;
use tagline::{interpolate, interpolate_sparse, Substitution, Template};

struct Post {
    title: String,
    body: String,
}

fn sample_post() -> Post {
    Post {
        title: "안녕하세요".to_string(),
        body: "내용은 내용내용 입니다.".to_string(),
    }
}

// =============================================================================
// Plain interpolation
// =============================================================================

#[test]
fn post_title_and_body() {
    let subs = [
        Substitution::computed(|p: &Post| p.title.clone()),
        Substitution::computed(|p: &Post| p.body.clone()),
    ];

    let out = interpolate(&["\n  제목: ", "\n  내용: ", "\n"], &subs, &sample_post()).unwrap();

    assert_eq!(out, "\n  제목: 안녕하세요\n  내용: 내용은 내용내용 입니다.\n");
}

#[test]
fn literal_number_with_empty_context() {
    let ctx: HashMap<String, String> = HashMap::new();
    let out = interpolate(&["a", "b"], &[Substitution::literal(42)], &ctx).unwrap();
    assert_eq!(out, "a42b");
}

#[test]
fn single_fragment_without_substitutions() {
    let subs: [Substitution<()>; 0] = [];
    assert_eq!(interpolate(&["x"], &subs, &()).unwrap(), "x");
}

#[test]
fn repeated_calls_are_identical() {
    let subs = [
        Substitution::computed(|p: &Post| p.title.clone()),
        Substitution::literal(1.5),
    ];
    let post = sample_post();

    let first = interpolate(&["[", "|", "]"], &subs, &post).unwrap();
    let second = interpolate(&["[", "|", "]"], &subs, &post).unwrap();

    assert_eq!(first, second);
    assert_eq!(first, "[안녕하세요|1.5]");
}

#[test]
fn sparse_gap_renders_empty() {
    // A gap with no substitution renders empty.
    let subs = [Substitution::computed(|p: &Post| p.title.clone())];
    let out = interpolate_sparse(&["<", ">", "!"], &subs, &sample_post()).unwrap();
    assert_eq!(out, "<안녕하세요>!");
}

#[test]
fn strict_rejects_what_sparse_accepts() {
    let subs = [Substitution::computed(|p: &Post| p.title.clone())];
    let err = interpolate(&["<", ">", "!"], &subs, &sample_post()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "fragment count (3) must exceed substitution count (1) by exactly one"
    );
}

// =============================================================================
// Props-driven style text
// =============================================================================

struct ButtonProps {
    color: &'static str,
    outline: bool,
}

fn palette(name: &str) -> &'static str {
    match name {
        "blue" => "#228be6",
        "pink" => "#f06595",
        _ => "#495057",
    }
}

fn button_template() -> Template<'static, ButtonProps> {
    let fill = Template::builder()
        .text("background: ")
        .computed(|p: &ButtonProps| palette(p.color))
        .text(";")
        .build();

    let outline = Template::builder()
        .text("color: ")
        .computed(|p: &ButtonProps| palette(p.color))
        .text("; border: 1px solid ")
        .computed(|p: &ButtonProps| palette(p.color))
        .text(";")
        .build();

    // Only one of the two blocks renders, chosen per props.
    Template::builder()
        .text("display: inline-flex;\n")
        .computed(move |p: &ButtonProps| {
            let block = if p.outline { &outline } else { &fill };
            block.render(p).unwrap_or_default()
        })
        .build()
}

#[test]
fn button_fill_and_outline() {
    let template = button_template();

    let filled = template
        .render(&ButtonProps {
            color: "blue",
            outline: false,
        })
        .unwrap();
    assert_eq!(filled, "display: inline-flex;\nbackground: #228be6;");

    let outlined = template
        .render(&ButtonProps {
            color: "pink",
            outline: true,
        })
        .unwrap();
    assert_eq!(
        outlined,
        "display: inline-flex;\ncolor: #f06595; border: 1px solid #f06595;"
    );
}

#[test]
fn parsed_template_with_json_props() {
    let template = Template::parse("height: {size.height}; font-size: {size.font};").unwrap();
    let ctx = json!({"size": {"height": "3rem", "font": "1.25rem"}});

    assert_eq!(
        template.render(&ctx).unwrap(),
        "height: 3rem; font-size: 1.25rem;"
    );
}
