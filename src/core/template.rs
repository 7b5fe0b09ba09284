use minijinja::{AutoEscape, Environment};
use serde::Serialize;

const TEMPLATE_NAME: &str = "schedule.html";

/// Renders `template` with HTML auto-escaping on for every interpolation.
pub fn generate<S: Serialize>(template: &str, ctx: S) -> anyhow::Result<String> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_auto_escape_callback(|_name| AutoEscape::Html);

    env.add_template(TEMPLATE_NAME, template)?;
    let tmpl = env.get_template(TEMPLATE_NAME)?;

    let rendered = tmpl.render(ctx)?;

    Ok(rendered)
}
