//! Templates for every generated artifact.
//!
//! Rendered with `trim_blocks`, so a line holding only a block tag produces no
//! output of its own.

pub const DOWNLOAD_SCRIPT_TEMPLATE: &str = r#"#!/bin/sh
mkdir -p {{ asset_dir }}
{% for item in items %}
wget -nc -O {{ item.path }} {{ base_url }}{{ item.file_name }} 2>>{{ log_file }}
{% endfor %}
"#;

pub const MANIFEST_TEMPLATE: &str = r#"{% for item in items %}
  - {{ item.path }}
{% endfor %}
"#;

pub const BINDINGS_TEMPLATE: &str = r#"{{ header }}
{% for item in items %}

// {{ item.comment }}
final {{ item.ident }} = SvgPicture.asset('{{ item.path }}');
{% endfor %}
"#;

pub const COLORS_TEMPLATE: &str = r#"{{ header }}

class {{ class_name }} {
  {{ class_name }}._();

{% for color in colors %}
  static const {{ color.ident }} = Color({{ color.value }});
{% endfor %}
}

const {{ values_name }} = <Color>[
{% for color in colors %}
  {{ class_name }}.{{ color.ident }},
{% endfor %}
];

const {{ names_name }} = <String>[
{% for color in colors %}
  '{{ color.name }}',
{% endfor %}
];
"#;
