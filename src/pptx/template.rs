//! Built-in presentation template parts.
//!
//! A valid .pptx needs a slide master, slide layouts, and a theme even when
//! every slide is generated. These parts are checked in under `templates/`
//! and embedded at compile time; they define the seven layouts the model's
//! `SlideLayout` enum refers to, in the same order.

/// Slide master with the layout id list and default text styles.
pub fn slide_master_xml() -> &'static str {
    include_str!("templates/slideMaster1.xml")
}

/// Layout parts, indexed by `SlideLayout::index()`.
const SLIDE_LAYOUTS: [&str; 7] = [
    include_str!("templates/slideLayout1.xml"),
    include_str!("templates/slideLayout2.xml"),
    include_str!("templates/slideLayout3.xml"),
    include_str!("templates/slideLayout4.xml"),
    include_str!("templates/slideLayout5.xml"),
    include_str!("templates/slideLayout6.xml"),
    include_str!("templates/slideLayout7.xml"),
];

/// Get a slide layout part by zero-based index.
pub fn slide_layout_xml(index: usize) -> &'static str {
    SLIDE_LAYOUTS[index]
}

/// Number of layouts the template defines.
pub fn slide_layout_count() -> usize {
    SLIDE_LAYOUTS.len()
}

/// Default theme.
pub fn theme_xml() -> &'static str {
    include_str!("templates/theme1.xml")
}

/// Presentation properties.
pub fn pres_props_xml() -> &'static str {
    include_str!("templates/presProps.xml")
}

/// View properties.
pub fn view_props_xml() -> &'static str {
    include_str!("templates/viewProps.xml")
}

/// Table style list (referenced by table graphic frames).
pub fn table_styles_xml() -> &'static str {
    include_str!("templates/tableStyles.xml")
}
