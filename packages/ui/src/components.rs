//! Small styled wrappers over plain form elements, shared by every view.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Outline,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Danger => "btn btn-danger",
            ButtonVariant::Outline => "btn btn-outline",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = String::new())] class: String,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] disabled: bool,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let type_attr = r#type;
    rsx! {
        button {
            class: "{variant.class()} {class}",
            r#type: "{type_attr}",
            disabled: disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn Input(
    #[props(default = String::new())] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = String::new())] id: String,
    #[props(default = String::new())] placeholder: String,
    #[props(default = String::new())] value: String,
    #[props(default)] required: bool,
    #[props(default)] oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    let type_attr = r#type;
    rsx! {
        input {
            class: "input {class}",
            r#type: "{type_attr}",
            id: "{id}",
            placeholder: "{placeholder}",
            value: "{value}",
            required: required,
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            },
        }
    }
}

#[component]
pub fn Textarea(
    #[props(default = String::new())] class: String,
    #[props(default = String::new())] id: String,
    #[props(default = String::new())] placeholder: String,
    #[props(default = String::new())] value: String,
    #[props(default = 3usize)] rows: usize,
    #[props(default)] oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        textarea {
            class: "input textarea {class}",
            id: "{id}",
            placeholder: "{placeholder}",
            value: "{value}",
            rows: "{rows}",
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            },
        }
    }
}

#[component]
pub fn Label(#[props(default = String::new())] html_for: String, children: Element) -> Element {
    rsx! {
        label {
            class: "label",
            r#for: "{html_for}",
            {children}
        }
    }
}
