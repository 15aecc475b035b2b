//! Text shown on the page. Every string is fixed at compile time.

pub const TITLE: &str = "My Yew App";

pub const WELCOME_HEADING: &str = "Welcome to My Yew App";

pub const INTRO_PARAGRAPH: &str = "This is a basic Yew application styled with Tailwind CSS.";

/// Label of the button in the main region. The button does nothing.
pub const BUTTON_LABEL: &str = "Click me!";

pub const COPYRIGHT: &str = "© 2023 My Yew App. All rights reserved.";
