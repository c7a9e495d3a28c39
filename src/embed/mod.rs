//! Embedded static resources for icongen.
//!
//! - `icon.tsx.hbs` - default component template
//! - `icongen.toml` - starter configuration written by `icongen init`

/// Default Handlebars template for one icon component.
pub const ICON_TEMPLATE: &str = include_str!("icon.tsx.hbs");

/// Starter configuration with `__PLACEHOLDER__` variables.
const CONFIG_TEMPLATE: &str = include_str!("icongen.toml");

/// Variables for the starter `icongen.toml`.
pub struct ConfigVars<'a> {
    pub entry: &'a str,
    pub output: &'a str,
    pub template: &'a str,
}

impl ConfigVars<'_> {
    pub fn render(&self) -> String {
        CONFIG_TEMPLATE
            .replace("__VERSION__", env!("CARGO_PKG_VERSION"))
            .replace("__ENTRY__", self.entry)
            .replace("__OUTPUT__", self.output)
            .replace("__TEMPLATE__", self.template)
    }
}
