use dioxus::prelude::*;

#[derive(Clone, PartialEq, Default)]
pub enum ButtonVariant {
    /// Orange gradient call to action of the welcome card
    #[default]
    Flame,
    /// Solid brand blue
    Brand,
    /// Outlined pill, used for secondary actions
    Outline,
}

impl ButtonVariant {
    fn get_classes(&self) -> &'static str {
        match self {
            ButtonVariant::Flame => "w-full h-12 rounded-md border-0 text-base font-medium text-white bg-gradient-to-r from-[#FFA000] to-[#F57C00] hover:from-[#FF8F00] hover:to-[#EF6C00] transition-all hover:scale-[1.03] hover:shadow-lg active:scale-[0.97]",
            ButtonVariant::Brand => "w-full h-12 rounded-md border-0 text-base font-medium text-white bg-[#1877F2] hover:bg-[#166FE5] transition-all hover:scale-[1.03] hover:shadow-lg active:scale-[0.97]",
            ButtonVariant::Outline => "w-full border-2 border-blue-300 rounded-full py-3 text-blue-600 text-lg font-medium hover:bg-blue-50 transition-all hover:scale-[1.02] active:scale-[0.98]",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct Props {
    children: Element,
    #[props(optional)]
    onclick: Option<EventHandler<MouseEvent>>,
    #[props(optional, default)]
    variant: ButtonVariant,
    #[props(optional, default)]
    disabled: bool,
    /// Render as a form submit button instead of a plain button
    #[props(optional, default)]
    submit: bool,
    #[props(optional, into)]
    class: String,
}

#[component]
pub fn Button(props: Props) -> Element {
    let variant_classes = props.variant.get_classes();
    let disabled_classes = if props.disabled {
        "opacity-70 cursor-not-allowed pointer-events-none"
    } else {
        "cursor-pointer"
    };
    let additional_classes = props.class;

    rsx! {
        button {
            class: "{variant_classes} {disabled_classes} {additional_classes} flex items-center justify-center",
            "type": if props.submit { "submit" } else { "button" },
            onclick: move |evt| {
                if !props.disabled {
                    if let Some(handler) = props.onclick {
                        handler.call(evt)
                    }
                }
            },
            disabled: props.disabled,
            {props.children}
        }
    }
}
