use yew::prelude::*;

/// Lucide Icons - line icon set
/// SVG paths from <https://lucide.dev>
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IconName {
    // Navigation
    ArrowRight,
    ChevronRight,
    Home,

    // Booking
    Calendar,
    Stethoscope,
    UserPlus,

    // Actions
    Menu,
    X,
}

impl IconName {
    /// SVG path data for the icon
    pub fn path(&self) -> &'static str {
        match self {
            IconName::ArrowRight => "M5 12h14M12 5l7 7-7 7",
            IconName::ChevronRight => "m9 18 6-6-6-6",
            IconName::Home => "M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z",

            IconName::Calendar => {
                "M8 2v4M16 2v4M3 10h18M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 \
                 2 0 0 1 2-2z"
            },
            IconName::Stethoscope => {
                "M4.8 2.3A.3.3 0 1 0 5 2H4a2 2 0 0 0-2 2v5a6 6 0 0 0 12 0V4a2 2 0 0 0-2-2h-1a.2.2 \
                 0 1 0 .3.3M8 15v1a6 6 0 0 0 12 0v-4M20 10a2 2 0 1 0 0 4 2 2 0 0 0 0-4z"
            },
            IconName::UserPlus => {
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8zM19 \
                 8v6M22 11h-6"
            },

            IconName::Menu => "M4 12h16M4 6h16M4 18h16",
            IconName::X => "M18 6 6 18M6 6l12 12",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub name: IconName,

    #[prop_or(24)]
    pub size: u32,

    #[prop_or_else(|| "currentColor".to_string())]
    pub color: String,

    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let IconProps {
        name,
        size,
        color,
        class,
    } = props;

    let stroke_width = if *size <= 16 { 2.5 } else { 2.0 };

    html! {
        <svg
            class={classes!(
                "inline-flex",
                "items-center",
                "justify-center",
                "shrink-0",
                "transition-all",
                "duration-200",
                class.clone()
            )}
            width={size.to_string()}
            height={size.to_string()}
            viewBox="0 0 24 24"
            fill="none"
            stroke={color.clone()}
            stroke-width={stroke_width.to_string()}
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            xmlns="http://www.w3.org/2000/svg"
        >
            <path d={name.path()} />
        </svg>
    }
}

/// Icon-only button with an accessible label
#[derive(Properties, PartialEq)]
pub struct IconButtonProps {
    pub icon: IconName,

    pub label: AttrValue,

    #[prop_or(24)]
    pub size: u32,

    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,

    #[prop_or_default]
    pub class: Classes,

    #[prop_or_default]
    pub expanded: Option<bool>,
}

#[function_component(IconButton)]
pub fn icon_button(props: &IconButtonProps) -> Html {
    let IconButtonProps {
        icon,
        label,
        size,
        onclick,
        class,
        expanded,
    } = props;

    let button_class = classes!(
        "inline-flex",
        "items-center",
        "justify-center",
        "w-11",
        "h-11",
        "rounded-lg",
        "border",
        "border-gray-200",
        "bg-white",
        "text-gray-700",
        "transition-colors",
        "duration-100",
        "hover:bg-gray-50",
        "hover:text-primary",
        class.clone()
    );

    html! {
        <button
            class={button_class}
            onclick={onclick}
            aria-label={label.clone()}
            aria-expanded={expanded.map(|value| value.to_string())}
            type="button"
        >
            <Icon name={*icon} size={*size} />
        </button>
    }
}
