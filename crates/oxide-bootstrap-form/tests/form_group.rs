mod common;

use common::{position, translations, FailingRenderer, FailingTranslations};
use oxide_bootstrap_form::{
    Choice, FieldErrors, FieldOptions, FormBuilder, FormContext, FormError, Layout, ModelBinding,
    NestedOptions, StandardRenderer,
};

fn horizontal() -> FormContext {
    FormContext::new()
        .with_layout(Layout::Horizontal)
        .with_label_col("col-sm-3")
        .with_control_col("col-sm-9")
}

#[test]
fn unbound_form_never_adds_error_class() {
    let renderer = StandardRenderer::new();
    let form = FormBuilder::new(FormContext::new(), &renderer).object("user");

    for name in ["email", "name", ""] {
        let html = form.text_field(name, FieldOptions::new()).unwrap();
        assert!(!html.contains("has-error"));
    }
}

#[test]
fn binding_without_errors_degrades_to_no_error() {
    let renderer = StandardRenderer::new();
    let form = FormBuilder::new(FormContext::new(), &renderer)
        .object("user")
        .bind(ModelBinding::new("User"));

    let html = form.text_field("email", FieldOptions::new()).unwrap();
    assert!(!html.contains("has-error"));
    assert!(!html.contains("help-block"));
}

#[test]
fn errors_mark_group_and_show_inline() {
    let renderer = StandardRenderer::new();
    let errors = FieldErrors::new()
        .with("email", "is blank")
        .with("email", "is invalid");
    let form = FormBuilder::new(FormContext::new(), &renderer)
        .object("user")
        .bind(ModelBinding::new("User").errors(&errors));

    let html = form.email_field("email", FieldOptions::new()).unwrap();
    assert!(html.contains("form-group has-error"));
    assert!(html.contains("is blank, is invalid"));

    let html = form.email_field("name", FieldOptions::new()).unwrap();
    assert!(!html.contains("has-error"));
}

#[test]
fn label_errors_move_messages_into_label() {
    let renderer = StandardRenderer::new();
    let errors = FieldErrors::new().with("email", "is invalid");
    let form = FormBuilder::new(FormContext::new().with_label_errors(true), &renderer)
        .object("user")
        .bind(ModelBinding::new("User").errors(&errors));

    let html = form
        .email_field("email", FieldOptions::new().label("Email"))
        .unwrap();
    assert!(html.contains("Email is invalid"));
    assert!(!html.contains("help-block"));
}

#[test]
fn horizontal_with_label_uses_both_columns() {
    let renderer = StandardRenderer::new();
    let form = FormBuilder::new(horizontal(), &renderer).object("user");

    let html = form
        .email_field("email", FieldOptions::new().label("Email"))
        .unwrap();
    assert!(html.contains("control-label col-sm-3"));
    assert!(html.contains("col-sm-9"));
    assert!(!html.contains("offset"));
    assert!(position(&html, "<label") < position(&html, "<input"));
}

#[test]
fn horizontal_without_label_offsets_control() {
    let renderer = StandardRenderer::new();
    let form = FormBuilder::new(horizontal(), &renderer).object("user");

    let html = form.email_field("email", FieldOptions::new()).unwrap();
    assert!(html.contains("col-sm-9 col-sm-offset-3"));
    assert!(!html.contains("<label"));
}

#[test]
fn field_label_col_drives_offset() {
    let renderer = StandardRenderer::new();
    let form = FormBuilder::new(horizontal(), &renderer);

    let html = form
        .text_field(
            "code",
            FieldOptions::new().label_col("col-sm-4").control_col("col-sm-8"),
        )
        .unwrap();
    assert!(html.contains("col-sm-8 col-sm-offset-4"));
}

#[test]
fn field_layout_overrides_form_layout() {
    let renderer = StandardRenderer::new();

    let form = FormBuilder::new(FormContext::new(), &renderer);
    let html = form
        .text_field("code", FieldOptions::new().layout(Layout::Horizontal))
        .unwrap();
    assert!(html.contains("col-sm-10 col-sm-offset-2"));

    let form = FormBuilder::new(horizontal(), &renderer);
    let html = form
        .text_field("code", FieldOptions::new().layout(Layout::Vertical).label("Code"))
        .unwrap();
    assert!(!html.contains("col-sm"));

    let html = form
        .text_field("code", FieldOptions::new().layout_token("bogus"))
        .unwrap();
    assert!(html.contains("col-sm-9 col-sm-offset-3"));
}

#[test]
fn help_precedence() {
    let renderer = StandardRenderer::new();
    let i18n = translations();
    let form = FormBuilder::new(FormContext::new(), &renderer)
        .object("admin_user")
        .bind(ModelBinding::new("AdminUser"))
        .localization(&i18n);

    let html = form.email_field("email", FieldOptions::new()).unwrap();
    assert!(html.contains("We never share your email"));
    assert!(!html.contains("Legacy email help"));

    let html = form
        .email_field("email", FieldOptions::new().help("Use your work address"))
        .unwrap();
    assert!(html.contains("Use your work address"));
    assert!(!html.contains("We never share"));

    let html = form.email_field("email", FieldOptions::new().no_help()).unwrap();
    assert!(!html.contains("help-block"));

    let html = form.text_field("nickname", FieldOptions::new()).unwrap();
    assert!(html.contains("Shown to other users"));

    let html = form.text_field("age", FieldOptions::new()).unwrap();
    assert!(!html.contains("help-block"));
}

#[test]
fn label_text_comes_from_translations() {
    let renderer = StandardRenderer::new();
    let i18n = translations();
    let form = FormBuilder::new(FormContext::new(), &renderer)
        .object("admin_user")
        .bind(ModelBinding::new("AdminUser"))
        .localization(&i18n);

    let html = form
        .email_field("email", FieldOptions::new().with_label())
        .unwrap();
    assert!(html.contains("E-mail address"));

    let html = form
        .text_field("last_name", FieldOptions::new().with_label().hide_label())
        .unwrap();
    assert!(html.contains("Last name"));
    assert!(html.contains("sr-only control-label"));
}

#[test]
fn renderer_failure_propagates() {
    let renderer = FailingRenderer;
    let form = FormBuilder::new(FormContext::new(), &renderer);

    let err = form
        .text_field("email", FieldOptions::new().label("Email"))
        .unwrap_err();
    assert!(matches!(err, FormError::Render { ref field, .. } if field == "email"));
}

#[test]
fn localization_failure_propagates() {
    let renderer = StandardRenderer::new();
    let i18n = FailingTranslations;
    let form = FormBuilder::new(FormContext::new(), &renderer)
        .bind(ModelBinding::new("User"))
        .localization(&i18n);

    let err = form.text_field("email", FieldOptions::new()).unwrap_err();
    assert!(matches!(err, FormError::Localization { .. }));

    let html = form
        .text_field("email", FieldOptions::new().help("Explicit"))
        .unwrap();
    assert!(html.contains("Explicit"));
}

#[test]
fn date_selects_are_wrapped() {
    let renderer = StandardRenderer::new();
    let form = FormBuilder::new(FormContext::new(), &renderer).object("event");

    let html = form.date_select("starts_on", FieldOptions::new()).unwrap();
    assert!(html.contains(r#"<div class="rails-bootstrap-forms-date-select">"#));
    assert!(html.contains(r#"type="date""#));

    let html = form.time_select("starts_at", FieldOptions::new()).unwrap();
    assert!(html.contains(r#"<div class="rails-bootstrap-forms-time-select">"#));

    let html = form.datetime_select("ends_at", FieldOptions::new()).unwrap();
    assert!(html.contains(r#"<div class="rails-bootstrap-forms-datetime-select">"#));
}

#[test]
fn file_field_has_no_control_class() {
    let renderer = StandardRenderer::new();
    let form = FormBuilder::new(FormContext::new(), &renderer).object("user");

    let html = form.file_field("avatar", FieldOptions::new()).unwrap();
    assert!(html.contains(r#"type="file""#));
    assert!(!html.contains("form-control"));

    let html = form
        .file_field("avatar", FieldOptions::new().control_class("file-input"))
        .unwrap();
    assert!(html.contains(r#"class="file-input""#));
}

#[test]
fn select_receives_control_class() {
    let renderer = StandardRenderer::new();
    let form = FormBuilder::new(FormContext::new(), &renderer).object("post");
    let choices = vec![Choice::new("draft", "Draft"), Choice::new("live", "Published")];

    let html = form
        .select(
            "status",
            &choices,
            FieldOptions::new().label("Status").attr("value", "live"),
        )
        .unwrap();
    assert!(html.contains(
        r#"<select name="post[status]" id="post_status" class="form-control">"#
    ));
    assert!(html.contains(r#"<option value="live" selected>Published</option>"#));

    let html = form
        .select("tags", &choices, FieldOptions::new().multiple())
        .unwrap();
    assert!(html.contains(r#"name="post[tags][]""#));
}

#[test]
fn form_tag_mode_uses_plain_names() {
    let renderer = StandardRenderer::new();
    let form =
        FormBuilder::new(FormContext::new().acting_like_form_tag(), &renderer).object("ignored");

    let html = form
        .search_field("q", FieldOptions::new().label("Search"))
        .unwrap();
    assert!(html.contains(r#"name="q""#));
    assert!(html.contains(r#"id="q""#));
    assert!(!html.contains("ignored"));
}

#[test]
fn nested_fields_inherit_layout() {
    let renderer = StandardRenderer::new();
    let errors = FieldErrors::new().with("city", "is required");
    let form = FormBuilder::new(horizontal(), &renderer).object("user");

    let html = form
        .fields_for(
            "address",
            &NestedOptions {
                control_col: Some("col-sm-6".to_string()),
                ..NestedOptions::default()
            },
            Some(ModelBinding::new("Address").errors(&errors)),
            |nested| {
                assert_eq!(nested.context().layout(), Layout::Horizontal);
                nested.text_field("city", FieldOptions::new())
            },
        )
        .unwrap();
    assert!(html.contains(r#"name="user[address][city]""#));
    assert!(html.contains(r#"id="user_address_city""#));
    assert!(html.contains("col-sm-6 col-sm-offset-3"));
    assert!(html.contains("has-error"));
}

#[test]
fn custom_form_group_wraps_content() {
    let renderer = StandardRenderer::new();
    let form = FormBuilder::new(horizontal(), &renderer);

    let html = form
        .form_group("terms", FieldOptions::new().help("Read carefully"), || {
            Ok("<p>Terms</p>".to_string())
        })
        .unwrap();
    assert!(html.contains("<p>Terms</p>"));
    assert!(position(&html, "<p>Terms</p>") < position(&html, "Read carefully"));
    assert!(html.contains("col-sm-9 col-sm-offset-3"));
}

#[test]
fn icon_adds_feedback() {
    let renderer = StandardRenderer::new();
    let form = FormBuilder::new(FormContext::new(), &renderer);

    let html = form.text_field("name", FieldOptions::new().icon("ok")).unwrap();
    assert!(html.contains("form-group has-feedback"));
    assert!(html.contains("glyphicon glyphicon-ok form-control-feedback"));
    assert!(position(&html, "<input") < position(&html, "glyphicon"));
}

#[test]
fn wrapper_attrs_render_on_container() {
    let renderer = StandardRenderer::new();
    let form = FormBuilder::new(FormContext::new(), &renderer).object("user");

    let html = form
        .text_field(
            "name",
            FieldOptions::new()
                .wrapper_class("wide")
                .wrapper_attr("data-section", "profile"),
        )
        .unwrap();
    assert!(html.starts_with("<div"));
    assert!(html.contains(r#"class="form-group wide""#));
    assert!(html.contains(r#"data-section="profile""#));
    assert!(position(&html, "data-section") < position(&html, "<input"));

    let err = form
        .text_field("name", FieldOptions::new().wrapper_attr("data-x\" onclick=\"", "1"))
        .unwrap_err();
    assert!(matches!(err, FormError::InvalidAttribute(_)));
}

struct Continent {
    name: &'static str,
    countries: Vec<(&'static str, &'static str)>,
}

#[test]
fn grouped_collection_select_renders_optgroups() {
    let renderer = StandardRenderer::new();
    let form = FormBuilder::new(horizontal(), &renderer).object("user");
    let continents = vec![
        Continent {
            name: "Europe",
            countries: vec![("fr", "France"), ("de", "Germany")],
        },
        Continent {
            name: "Asia",
            countries: vec![("jp", "Japan")],
        },
    ];

    let html = form
        .grouped_collection_select(
            "country",
            &continents,
            |c: &Continent| &c.countries[..],
            |c: &Continent| c.name.to_string(),
            |(code, _)| code.to_string(),
            |(_, name)| name.to_string(),
            FieldOptions::new().label("Country").attr("value", "jp"),
        )
        .unwrap();
    assert!(html.contains(
        r#"<select name="user[country]" id="user_country" class="form-control">"#
    ));
    assert!(position(&html, r#"<optgroup label="Europe">"#) < position(&html, "France"));
    assert!(position(&html, "Germany") < position(&html, r#"<optgroup label="Asia">"#));
    assert!(html.contains(r#"<option value="jp" selected>Japan</option>"#));
    assert!(html.contains("col-sm-3"));
}

#[test]
fn time_zone_select_puts_priority_zones_first() {
    let renderer = StandardRenderer::new();
    let form = FormBuilder::new(FormContext::new(), &renderer).object("user");
    let zones = vec![
        Choice::new("Europe/Paris", "Paris"),
        Choice::new("UTC", "UTC"),
        Choice::new("Asia/Tokyo", "Tokyo"),
    ];

    let html = form
        .time_zone_select(
            "time_zone",
            &zones,
            &["UTC"],
            FieldOptions::new().label("Time zone"),
        )
        .unwrap();
    assert!(html.contains("form-group"));
    assert!(html.contains(r#"name="user[time_zone]""#));
    assert!(position(&html, "UTC</option>") < position(&html, "-------------"));
    assert!(position(&html, "-------------") < position(&html, "Paris"));
    assert!(position(&html, "Paris") < position(&html, "Tokyo"));
    assert_eq!(html.matches("UTC</option>").count(), 1);
    assert!(html.contains(r#"<option value="" disabled>-------------</option>"#));

    let html = form
        .time_zone_select("time_zone", &zones, &[], FieldOptions::new())
        .unwrap();
    assert!(!html.contains("-------------"));
}
