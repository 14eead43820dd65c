use anyhow::{Context as _, Result};
use minijinja::Environment;
use serde_json::json;

/// Default stlite build pulled from the jsDelivr CDN.
pub const STLITE_VERSION: &str = "1.0.0";

/// Filename the stlite runtime looks for and executes first.
pub const ENTRYPOINT: &str = "streamlit_app.py";

// The escaped app source is spliced between these two halves, directly
// between the opening backtick at the end of the header and the closing
// backtick at the start of the footer.
const HTML_HEADER: &str = r#"<!doctype html>
<html>
  <head>
    <meta charset="UTF-8" />
    <meta http-equiv="X-UA-Compatible" content="IE=edge" />
    <meta
      name="viewport"
      content="width=device-width, initial-scale=1, shrink-to-fit=no"
    />
    <title>{{ title }}</title>
    <link
      rel="stylesheet"
      href="https://cdn.jsdelivr.net/npm/@stlite/browser@{{ stlite_version }}/build/stlite.css"
    />
  </head>
  <body>
    <div id="root"></div>
    <script type="module">
      import { mount } from "https://cdn.jsdelivr.net/npm/@stlite/browser@{{ stlite_version }}/build/stlite.js";

      // The Streamlit application code is defined here
      const streamlit_app_code = `"#;

const HTML_FOOTER: &str = r#"`;
      // Mount the stlite app with the specified requirements and files
      mount(
        {
          requirements: [{{ requirements }}], // Packages to install
          entrypoint: "{{ entrypoint }}", // This field is required
          files: {
            "{{ entrypoint }}": streamlit_app_code,
          },
        },
        document.getElementById("root"),
      );
    </script>
  </body>
</html>
"#;

pub fn render_header(title: &str, stlite_version: &str) -> Result<String> {
    render(
        "header",
        HTML_HEADER,
        &json!({
            "title": title,
            "stlite_version": stlite_version,
        }),
    )
}

/// `requirements` is the already-rendered inline list, e.g. `"a", "b"`.
pub fn render_footer(requirements: &str) -> Result<String> {
    render(
        "footer",
        HTML_FOOTER,
        &json!({
            "requirements": requirements,
            "entrypoint": ENTRYPOINT,
        }),
    )
}

fn render(name: &str, source: &str, ctx_json: &serde_json::Value) -> Result<String> {
    let mut env = Environment::new();

    // Template names carry no .html extension on purpose: minijinja's
    // extension-based auto-escaping would mangle the quotes and backticks
    // the output must contain verbatim.
    env.add_template(name, source)?;
    let tpl = env.get_template(name)?;
    let v = minijinja::value::Value::from_serialize(ctx_json);
    tpl.render(v)
        .with_context(|| format!("failed to render {name} template"))
}
