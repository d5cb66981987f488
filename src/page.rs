use html_escape::{encode_double_quoted_attribute, encode_text};

const TITLE: &str = "Natural-Language Code Explainer";

const STYLE: &str = "\
body { font-family: sans-serif; margin: 20px; }
textarea { width: 100%; height: 300px; }
pre { background: #f4f4f4; padding: 10px; white-space: pre-wrap; }
.error { color: #b00020; font-weight: bold; }";

/// Everything the form page shows for one request.
#[derive(Debug, Default)]
pub struct PageView<'a> {
    pub model_names: &'a [String],
    pub selected_model: &'a str,
    pub code: &'a str,
    pub report: &'a str,
    pub error: Option<&'a str>,
}

fn model_options(model_names: &[String], selected_model: &str) -> String {
    let mut options = String::new();
    for name in model_names {
        let selected = if name == selected_model { " selected" } else { "" };
        options.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>\n",
            encode_double_quoted_attribute(name),
            selected,
            encode_text(name)
        ));
    }
    options
}

pub fn render(view: &PageView<'_>) -> String {
    let error = view
        .error
        .map(|msg| format!("<p class=\"error\">{}</p>\n", encode_text(msg)))
        .unwrap_or_default();

    format!(
        "<!doctype html>
<html>
<head>
<meta charset=\"utf-8\">
<title>{TITLE}</title>
<style>
{STYLE}
</style>
</head>
<body>
<h1>{TITLE}</h1>
{error}<form method=\"post\">
<label for=\"model\">Model:</label>
<select name=\"model\" id=\"model\">
{options}</select><br><br>
<textarea name=\"code\" placeholder=\"Enter your code...\">{code}</textarea><br>
<input type=\"submit\" value=\"Generate explanation\">
</form>
<h2>Generated explanation:</h2>
<pre><code>{report}</code></pre>
</body>
</html>
",
        options = model_options(view.model_names, view.selected_model),
        code = encode_text(view.code),
        report = encode_text(view.report),
    )
}
