use scraper::{ElementRef, Html, Selector};

#[track_caller]
pub(crate) fn must_get_form(html: &Html) -> ElementRef<'_> {
    html.select(&Selector::parse("form").unwrap())
        .next()
        .expect("No form found")
}

#[track_caller]
pub(crate) fn assert_hx_endpoint(form: &ElementRef<'_>, endpoint: &str, attribute: &str) {
    let hx_attribute = form
        .value()
        .attr(attribute)
        .unwrap_or_else(|| panic!("{attribute} attribute missing"));

    assert_eq!(
        hx_attribute, endpoint,
        "want form with attribute {attribute}=\"{endpoint}\", got {hx_attribute:?}"
    );
}

/// Assert the form has a required input called `name` with the given type and value.
#[track_caller]
pub(crate) fn assert_form_input_with_value(
    form: &ElementRef<'_>,
    name: &str,
    type_: &str,
    value: &str,
) {
    let selector = Selector::parse(&format!("input[name=\"{name}\"]")).unwrap();
    let input = form
        .select(&selector)
        .next()
        .unwrap_or_else(|| panic!("No input found with name \"{name}\""));

    let input_type = input.value().attr("type").unwrap_or_default();
    let input_value = input.value().attr("value").unwrap_or_default();

    assert_eq!(
        input_type, type_,
        "want input with type \"{type_}\", got {input_type:?}"
    );
    assert_eq!(
        input_value, value,
        "want input with value \"{value}\", got {input_value:?}"
    );
    assert!(
        input.value().attr("required").is_some(),
        "want input with name {name} to have the required attribute but got none"
    );
}

/// Assert the form has a select called `name` offering `options` in order
/// with `selected` chosen.
#[track_caller]
pub(crate) fn assert_form_select(
    form: &ElementRef<'_>,
    name: &str,
    options: &[&str],
    selected: &str,
) {
    let selector = Selector::parse(&format!("select[name=\"{name}\"]")).unwrap();
    let select = form
        .select(&selector)
        .next()
        .unwrap_or_else(|| panic!("No select found with name \"{name}\""));

    let option_selector = Selector::parse("option").unwrap();
    let got_options = select
        .select(&option_selector)
        .map(|option| option.value().attr("value").unwrap_or_default())
        .collect::<Vec<_>>();
    assert_eq!(got_options, options, "unexpected options for select {name}");

    let got_selected = select
        .select(&option_selector)
        .filter(|option| option.value().attr("selected").is_some())
        .map(|option| option.value().attr("value").unwrap_or_default())
        .collect::<Vec<_>>();
    assert_eq!(
        got_selected,
        [selected],
        "want exactly {selected:?} selected in select {name}"
    );
}

#[track_caller]
pub(crate) fn assert_form_submit_button(form: &ElementRef<'_>) {
    form.select(&Selector::parse("button[type=submit]").unwrap())
        .next()
        .expect("No submit button found");
}

#[track_caller]
pub(crate) fn assert_form_error_message(form: &ElementRef<'_>, want_error_message: &str) {
    let p = Selector::parse("p").unwrap();
    let error_message = form
        .select(&p)
        .next()
        .expect("No error message found")
        .text()
        .collect::<Vec<_>>()
        .join("");
    let got_error_message = error_message.trim();

    assert_eq!(want_error_message, got_error_message);
}
