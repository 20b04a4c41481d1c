//! Templates for terminal output, rendered with `trim_blocks` on: the newline right after
//! a block tag is dropped, so block tags sit on their own lines.

pub const NAV_TEMPLATE: &str = r#"{{ app | style("nav") }} {{ toggle | style("nav_toggle") }}
{% if query %}
{{ "Search:" | style("label") }} {{ query }}
{% endif %}

"#;

pub const LIST_TEMPLATE: &str = r#"{% if empty %}
{{ empty_hint | style("hint") }}
{% else %}
{% for card in cards %}
{{ card.label | style("id") }} {{ card.title | style("title") }}
    {{ card.summary | style("summary") }}
{% if card.tags %}
    {{ card.tags | map("style", "tag") | join(" ") }}
{% endif %}
    {{ card.image | style(card.image_style) }}
{% if not loop.last %}

{% endif %}
{% endfor %}
{% endif %}
"#;

pub const DETAIL_TEMPLATE: &str = r#"{{ label | style("id") }} {{ title | style("title") }}
{% if tags %}
{{ tags | map("style", "tag") | join(" ") }}
{% endif %}
{{ image | style(image_style) }}

{{ "Ingredients:" | style("heading") }}
{% for ingredient in ingredients %}
  - {{ ingredient }}
{% endfor %}

{{ "Instructions:" | style("heading") }}
{{ instructions }}
{% if actions %}

{{ actions | style("action") }}
{% endif %}
"#;

pub const FORM_TEMPLATE: &str = r#"{{ heading | style("heading") }}
{% if error %}
{{ error | style("error") }}
{% endif %}
{% for field in fields %}
{{ field.label | style("label") }} {{ field.value }}
{% endfor %}
{% if actions %}

{{ actions | style("action") }}
{% endif %}
"#;
